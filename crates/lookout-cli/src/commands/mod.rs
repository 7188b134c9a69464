pub mod callback;
pub mod dispatch;
pub mod login;
pub mod logout;
pub mod open;
pub mod org;
pub mod orgs;
pub mod status;

use crate::cli::GlobalFlags;
use crate::output::output;
use crate::views::{ErrorsView, RenderedFailure};

/// Print `errors` in place of the page and fail without a second report.
pub(crate) fn fail_with(errors: &[String], flags: &GlobalFlags) -> anyhow::Error {
    if let Err(error) = output(&ErrorsView { errors }, flags.format) {
        return error;
    }
    RenderedFailure.into()
}

/// Parse an optional `--return-to` path.
pub(crate) fn parse_return_to(path: Option<&str>) -> anyhow::Result<Option<crate::router::Route>> {
    path.map(crate::router::Route::parse).transpose()
}
