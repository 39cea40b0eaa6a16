//! Property tests for template parsing.

use std::path::Path;

use proptest::prelude::*;

use sambundle::domain::services::FunctionExtractor;
use sambundle::infrastructure::template::parse_template;
use sambundle::ResolveOptions;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary input never panics.
    #[test]
    fn property_parse_template_never_panics(content in "(?s).{0,256}") {
        let _ = parse_template(&content, Path::new("template.yml"));
    }

    /// PROPERTY: Extraction never panics on whatever parses as a template.
    #[test]
    fn property_extract_never_panics(content in "[A-Za-z:!\\- \n]{0,200}") {
        if let Ok(document) = parse_template(&content, Path::new("template.yml")) {
            let options = ResolveOptions::new("/work");
            let _ = FunctionExtractor::new(&options).extract(Path::new("template.yml"), document);
        }
    }
}
