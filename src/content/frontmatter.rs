//! Front-matter parsing
//!
//! The front-matter format is a `---`-delimited block of `key: value`
//! lines at the very start of a document. It is intentionally not YAML:
//! the block is split out with a literal three-way split and each line is
//! split on its first colon, so interior colons stay in the value and no
//! nesting exists.

/// Front-matter data from a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    /// Page title; `None` when absent or empty
    pub title: Option<String>,
    /// Page description; `None` when absent or empty
    pub description: Option<String>,
}

impl FrontMatter {
    /// Parse front matter from document text.
    /// Returns `(front_matter, body)`.
    ///
    /// A document without a leading `---`, or with an unterminated block,
    /// is returned whole as the body with empty front matter. Parsing is
    /// never fatal.
    pub fn parse(text: &str) -> (Self, &str) {
        if !text.starts_with("---") {
            return (FrontMatter::default(), text);
        }

        // Split on the literal delimiter into at most three segments:
        // the (empty) prefix, the metadata block, and the body.
        let mut parts = text.splitn(3, "---");
        let _prefix = parts.next();
        let block = parts.next();
        let body = parts.next();

        let (Some(block), Some(body)) = (block, body) else {
            // Fewer than two delimiters: treat the whole text as body.
            return (FrontMatter::default(), text);
        };

        let mut fm = FrontMatter::default();
        for line in block.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match key {
                "title" if !value.is_empty() => fm.title = Some(value.to_string()),
                "description" if !value.is_empty() => fm.description = Some(value.to_string()),
                // Unrecognized keys are ignored
                _ => {}
            }
        }

        (fm, body)
    }
}
