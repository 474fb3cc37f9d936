//! Error adapter for converting [`drafter::Error`] to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use drafter::Error;

/// Adapter giving a [`drafter::Error`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a Error);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            Error::Io(_) => "drafter::io",
            Error::Import(_) => "drafter::import",
            Error::EmptyScene | Error::Rasterize(_) => "drafter::export",
            Error::Config(_) => "drafter::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            Error::Import(err) => Some(Box::new(format!(
                "check the scene file near line {}, column {}",
                err.line(),
                err.column()
            ))),
            Error::EmptyScene => Some(Box::new("add at least one element before exporting")),
            Error::Io(_) | Error::Rasterize(_) | Error::Config(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`drafter::Error`] into the list of diagnostics to render.
pub fn to_reportables(err: &Error) -> Vec<ErrorAdapter<'_>> {
    vec![ErrorAdapter(err)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(err: &Error) -> String {
        ErrorAdapter(err).code().map(|c| c.to_string()).unwrap_or_default()
    }

    #[test]
    fn test_codes() {
        assert_eq!(code(&Error::EmptyScene), "drafter::export");
        assert_eq!(code(&Error::Rasterize("boom".to_string())), "drafter::export");
        assert_eq!(code(&Error::Config("bad".to_string())), "drafter::config");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(code(&Error::Io(io)), "drafter::io");
    }

    #[test]
    fn test_import_help_has_location() {
        let json_err = drafter::document::SceneDocument::from_json("{\n  \"elements\": [")
            .unwrap_err();
        let reportables = to_reportables(&json_err);
        assert_eq!(reportables.len(), 1);

        let adapter = &reportables[0];
        assert_eq!(adapter.code().unwrap().to_string(), "drafter::import");
        let help = adapter.help().unwrap().to_string();
        assert!(help.contains("line 2"), "unexpected help: {help}");
        assert!(adapter.to_string().starts_with("Error importing diagram"));
    }

    #[test]
    fn test_render_report() {
        let err = Error::EmptyScene;
        let mut out = String::new();
        miette::GraphicalReportHandler::new()
            .render_report(&mut out, &ErrorAdapter(&err))
            .unwrap();
        assert!(out.contains("No elements to export"));
    }
}
