// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! The `isomenu` application.
//!
//! Reads every feed given on the command line, offers the newest ISO from each in a full screen terminal menu,
//! and writes the one the operator commits to as shell variable assignments. Any failure is logged to stderr
//! and exits with status 1, without writing anything.

use std::process::ExitCode;

use clap::Parser;
use isomenu_core::{
    choices::ChoiceSet,
    emit::emit,
    error::MenuError,
    system::{helper::default_arch, log_backend::StderrLogger},
};
use log::{debug, error};
use thiserror::Error;

use crate::{
    app::App,
    cli::Args,
    ui::{
        session::TerminalSession,
        theme::{ColorSupport, Theme},
    },
};

mod app;
mod cli;
mod ui;

/// The global logging instance.
static LOGGER: StderrLogger = StderrLogger::new();

/// An error that may occur when running the application.
#[derive(Error, Debug)]
pub enum MainError {
    /// No architecture was given, and this binary has no default one.
    #[error("No default architecture for this platform, pass --arch")]
    NoArch,

    /// An error occurred in the library.
    #[error("{0}")]
    Menu(#[from] MenuError),

    /// The terminal could not be acquired.
    #[error("Terminal Error: {0}")]
    Terminal(#[from] crate::ui::session::TerminalError),

    /// An error occurred while running the App.
    #[error("App Error: {0}")]
    App(#[from] crate::app::AppError),
}

/// The actual main function of the program.
///
/// # Errors
///
/// May return an `Error` if the feeds could not be turned into choices, the terminal could not be acquired, the
/// menu failed or was interrupted, or the output could not be written.
fn main_func(args: Args) -> Result<(), MainError> {
    let arch = args
        .arch
        .or_else(|| default_arch().map(str::to_owned))
        .ok_or(MainError::NoArch)?;

    let choices = ChoiceSet::load(&args.feeds, &arch, &args.mirror).map_err(MenuError::from)?;

    let support = ColorSupport::detect()?;
    debug!("[MAIN]: color support is {support:?}");

    let mut app = App::new(&choices, Theme::new(support), args.caption);

    let record = {
        let mut session = TerminalSession::acquire()?;
        app.run(&mut session)?
    };
    debug!("[MAIN]: selected {}", record.label());

    emit(&args.output, record).map_err(MenuError::from)?;
    Ok(())
}

/// The main function of the program.
fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(args.log_level)); // if the logger was already set, then ignore it

    match main_func(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
