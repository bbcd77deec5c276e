// Copyright 2025 the Jumplist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The alphabetic-run test.

use alloc::string::String;

/// Removes all whitespace from a text run.
///
/// Index lists render one letter per row, so their concatenated text arrives
/// interleaved with newlines and indentation that must not break the run.
#[must_use]
pub fn clean_text(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Tests whether `cleaned` contains a strictly increasing run of consecutive
/// ASCII uppercase letters at least `min_size` long.
///
/// The window slides over the whole text, so decoration before or after the
/// run (digits, `#`, punctuation rows) does not defeat the test. Lowercase
/// never qualifies: the heuristic targets canonical A–Z jump lists only.
#[must_use]
pub fn likely_an_alphabet(cleaned: &str, min_size: usize) -> bool {
    if min_size == 0 {
        return false;
    }
    let bytes = cleaned.as_bytes();
    if bytes.len() < min_size {
        return false;
    }
    'window: for start in 0..=(bytes.len() - min_size) {
        let first = bytes[start];
        if !first.is_ascii_uppercase() {
            continue;
        }
        for offset in 1..min_size {
            let expected = first + u8::try_from(offset).unwrap_or(u8::MAX);
            if expected > b'Z' || bytes[start + offset] != expected {
                continue 'window;
            }
        }
        return true;
    }
    false
}
