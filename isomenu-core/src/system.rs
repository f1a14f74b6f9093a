// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! Process level helpers that don't belong to any one part of the menu.

pub mod helper;
pub mod log_backend;
