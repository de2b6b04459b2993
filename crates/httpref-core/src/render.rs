//! Rendering references as wrapped text
//!
//! A single result is described in full; several results are listed as
//! one summary per entry. The choice is made by [`present`].

use crate::error::LookupError;
use crate::paragraph::{self, Width};
use crate::reference::{Reference, References};

/// Name and title, wrapped to `width`
pub fn summarize(reference: &Reference, width: Width) -> String {
    paragraph::format(&reference.heading(), width)
}

/// Heading followed by the full description, paragraph by paragraph
pub fn describe(reference: &Reference, width: Width) -> String {
    let mut out = summarize(reference, width);

    let body = paragraph::format(reference.description, width);
    if !body.is_empty() {
        out.push_str("\n\n");
        out.push_str(&body);
    }

    out
}

/// Render a lookup result, one block per printed entry
pub fn present(results: &References, width: Width) -> Result<Vec<String>, LookupError> {
    match results.len() {
        0 => Err(LookupError::NoResults),
        1 => Ok(vec![describe(&results[0], width)]),
        _ => Ok(results.iter().map(|r| summarize(r, width)).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOT_FOUND: Reference = Reference::new(
        "404",
        "Not Found",
        "The server can not find the requested resource. In the browser, this \
         means the URL is not recognized. In an API, this can also mean that the \
         endpoint is valid but the resource itself does not exist.\n\n\
         Servers may also send this response instead of 403 Forbidden to hide \
         the existence of a resource from an unauthorized client.",
    );

    #[test]
    fn test_summarize_is_heading() {
        assert_eq!(summarize(&NOT_FOUND, Width::default()), "404 - Not Found");
    }

    #[test]
    fn test_describe_keeps_paragraphs() {
        let text = describe(&NOT_FOUND, Width::default());
        let blocks: Vec<&str> = text.split("\n\n").collect();

        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], "404 - Not Found");
        assert!(blocks[1].starts_with("The server can not find"));
        assert!(blocks[2].starts_with("Servers may also send"));
    }

    #[test]
    fn test_describe_respects_width() {
        let text = describe(&NOT_FOUND, Width::clamped(40));
        assert!(text.lines().count() > 6);
        for line in text.lines() {
            assert!(line.len() <= 40, "line too long: {:?}", line);
        }
    }

    #[test]
    fn test_describe_without_description() {
        assert_eq!(describe(&NOT_FOUND.title_only(), Width::default()), "404 - Not Found");
    }

    #[test]
    fn test_present_empty_is_no_results() {
        assert_eq!(
            present(&References::default(), Width::default()),
            Err(LookupError::NoResults)
        );
    }

    #[test]
    fn test_present_single_describes() {
        let results = References::new(vec![NOT_FOUND]);
        let blocks = present(&results, Width::default()).unwrap();
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].contains("403 Forbidden"));
    }

    #[test]
    fn test_present_many_summarizes() {
        let results = References::new(vec![
            Reference::new("200", "OK", "Success."),
            NOT_FOUND,
        ]);
        let blocks = present(&results, Width::default()).unwrap();
        assert_eq!(blocks, vec!["200 - OK", "404 - Not Found"]);
    }
}
