// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! The `isomenu` library crate.
//!
//! This holds everything about picking an install image that does not need a terminal: reading
//! `SimpleStreams` product feeds down to a single newest ISO per feed, collecting those into a [`choices::ChoiceSet`],
//! the pure selection state machine in [`menu`], and writing the chosen image out in a shell sourceable form.
//!
//! Keeping this apart from the terminal frontend means that other frontends can be provided, and that the
//! parsing and selection logic can be tested and fuzzed on the host without a TTY.
//!
//! ## MSRV
//!
//! The minimum supported rust version is 1.88.0.

pub mod choices;
pub mod emit;
pub mod error;
pub mod feed;
pub mod image;
pub mod menu;
pub mod system;
