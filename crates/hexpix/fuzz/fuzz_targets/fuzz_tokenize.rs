#![no_main]

use hexpix::tokenize;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    // Tokenization is total: any input yields normalized two-digit tokens
    for token in tokenize(text) {
        assert_eq!(token.len(), 2);
        assert!(token
            .bytes()
            .all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
    }
});
