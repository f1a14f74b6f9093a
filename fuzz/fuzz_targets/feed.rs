// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

#![no_main]

use isomenu_core::feed::{DEFAULT_MIRROR, select_newest};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = select_newest(data, "amd64", DEFAULT_MIRROR);
});
