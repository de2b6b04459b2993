//! Output formatting for lookup results

use anyhow::{Context, Result};
use httpref_core::render;
use std::io::{self, Write};
use httpref_core::{LookupError, References, Width};

/// Render results as wrapped text or as a JSON array
pub fn render_results(results: &References, width: Width, json: bool) -> Result<String> {
    if json {
        if results.is_empty() {
            return Err(LookupError::NoResults.into());
        }
        return Ok(serde_json::to_string_pretty(results)?);
    }

    Ok(render::present(results, width)?.join("\n"))
}

/// Write results to `out`
///
/// A reader that goes away early (`httpref -t | head`) ends the output
/// quietly instead of failing.
pub fn write_results<W: Write>(
    out: &mut W,
    results: &References,
    width: Width,
    json: bool,
) -> Result<()> {
    let text = render_results(results, width, json)?;

    match writeln!(out, "{}", text).and_then(|_| out.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.context("Failed to write results"),
    }
}

/// Print results to stdout
pub fn print_results(results: &References, width: Width, json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_results(&mut out, results, width, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpref_core::Category;

    #[test]
    fn test_text_single_result_is_described() {
        let results = Category::Methods.collection().by_name("GET");
        let text = render_results(&results, Width::clamped(40), false).unwrap();

        assert!(text.starts_with("GET - Requests a representation of the\nspecified resource"));
        assert!(text.contains("\n\n"));
        assert!(text.lines().all(|line| line.len() <= 40));
    }

    #[test]
    fn test_text_many_results_one_summary_each() {
        let results = Category::Methods.collection().titles();
        let text = render_results(&results, Width::default(), false).unwrap();

        assert_eq!(text.lines().count(), results.len());
        assert!(text.lines().next().unwrap().starts_with("GET - "));
    }

    #[test]
    fn test_empty_results_are_an_error() {
        let err = render_results(&References::default(), Width::default(), false).unwrap_err();
        assert_eq!(err.to_string(), "Filter not found any results");

        let err = render_results(&References::default(), Width::default(), true).unwrap_err();
        assert_eq!(err.downcast_ref::<LookupError>(), Some(&LookupError::NoResults));
    }

    /// Writer whose reader has already hung up
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    /// Writer that fails for any other reason
    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_results_to_buffer() {
        let results = Category::Methods.collection().titles();
        let mut out = Vec::new();
        write_results(&mut out, &results, Width::default(), false).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), results.len());
    }

    #[test]
    fn test_closed_pipe_ends_quietly() {
        let listing = Category::everything().titles();
        assert!(write_results(&mut ClosedPipe, &listing, Width::default(), false).is_ok());
        assert!(write_results(&mut ClosedPipe, &listing, Width::default(), true).is_ok());
    }

    #[test]
    fn test_closed_pipe_still_reports_lookup_errors() {
        let err = write_results(&mut ClosedPipe, &References::default(), Width::default(), false)
            .unwrap_err();
        assert_eq!(err.downcast_ref::<LookupError>(), Some(&LookupError::NoResults));
    }

    #[test]
    fn test_other_write_failures_are_errors() {
        let results = Category::Methods.collection().titles();
        let err = write_results(&mut FullDisk, &results, Width::default(), false).unwrap_err();
        assert!(err.to_string().contains("Failed to write results"));
    }

    #[test]
    fn test_json_output() {
        let results = Category::Statuses.collection().by_name("20*");
        let text = render_results(&results, Width::default(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), results.len());
        assert_eq!(entries[0]["name"], "200");
        assert_eq!(entries[0]["title"], "OK");
        assert!(entries[0]["description"].is_string());
    }
}
