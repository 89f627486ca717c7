//! Fuzz target for day-key handling.
//!
//! Arbitrary strings go through the same parse-then-format path the error
//! section uses for `date(time)` keys coming back from SQLite.

#![no_main]

use libfuzzer_sys::fuzz_target;

use newslog::analytics::dates::{format_report_date, parse_day};

fuzz_target!(|data: &[u8]| {
    let Ok(key) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing must never panic, and a parsed key must format cleanly.
    if let Ok(date) = parse_day(key) {
        let _ = format_report_date(date);
    }
});
