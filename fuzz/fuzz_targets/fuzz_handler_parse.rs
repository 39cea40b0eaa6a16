#![no_main]

use libfuzzer_sys::fuzz_target;
use sambundle::domain::value_objects::Handler;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = std::str::from_utf8(data) {
        if let Some(handler) = Handler::parse(value) {
            assert!(!handler.module().contains('.'));
            assert!(handler.compiled().starts_with("index."));
        }
    }
});
