// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;
use isomenu_core::feed::DEFAULT_MIRROR;
use log::LevelFilter;

/// The caption shown in the banner when none is given.
const DEFAULT_CAPTION: &str = "Choose an Ubuntu version to install";

/// Show a menu of install images and write the chosen one to a file.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Where to write the chosen image, as shell variable assignments.
    pub output: PathBuf,

    /// `SimpleStreams` feeds to offer, one button each.
    #[arg(required = true)]
    pub feeds: Vec<PathBuf>,

    /// The architecture to pick images for. Defaults to the architecture of this binary.
    #[arg(short, long)]
    pub arch: Option<String>,

    /// The base URL that relative image paths are resolved against.
    #[arg(short, long, default_value = DEFAULT_MIRROR)]
    pub mirror: String,

    /// The caption shown in the banner.
    #[arg(short, long, default_value = DEFAULT_CAPTION)]
    pub caption: String,

    /// The most verbose messages to log to stderr.
    #[arg(short, long, default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,
}
