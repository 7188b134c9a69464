use serde::Serialize;

use crate::output::Page;

/// Failure block shown in place of a view's content.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorsView<'a> {
    pub errors: &'a [String],
}

impl Page for ErrorsView<'_> {
    fn text(&self) -> anyhow::Result<String> {
        Ok(self.errors.join(","))
    }
}

/// Marker error: the failure was already rendered to the user.
///
/// `main` exits with status 1 without printing it again.
#[derive(Debug, Clone, Copy)]
pub struct RenderedFailure;

impl std::fmt::Display for RenderedFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("failure already reported")
    }
}

impl std::error::Error for RenderedFailure {}
