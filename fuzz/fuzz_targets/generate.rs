#![no_main]

use libfuzzer_sys::fuzz_target;
use testgen::backend::{self, TestStyle};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let style = TestStyle::ALL[selector as usize % TestStyle::ALL.len()];
    if let Ok(s) = std::str::from_utf8(rest) {
        if let Ok(results) = backend::generate(s, style.descriptor()) {
            for result in results {
                assert!(result.content.ends_with("}\n"));
            }
        }
    }
});
