#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use sambundle::domain::services::FunctionExtractor;
use sambundle::infrastructure::template::parse_template;
use sambundle::ResolveOptions;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let path = Path::new("template.yml");
        if let Ok(document) = parse_template(content, path) {
            // Extraction may reject the template but must never panic
            let options = ResolveOptions::new("/work");
            let _ = FunctionExtractor::new(&options).extract(path, document);
        }
    }
});
