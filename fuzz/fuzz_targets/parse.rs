#![no_main]

use libfuzzer_sys::fuzz_target;
use testgen::frontend::{extract, lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tokens) = lexer::lex(s) {
            if let Ok(unit) = parser::parse(&tokens) {
                let _ = extract::classes(&unit);
            }
        }
    }
});
