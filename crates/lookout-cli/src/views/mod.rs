//! Terminal renditions of the console's pages.
//!
//! Views hold state only; command handlers drive them and print them through
//! [`crate::output`].

mod errors;
mod header;
mod organization;
mod organizations;

pub use errors::{ErrorsView, RenderedFailure};
pub use header::Header;
pub use organization::{OrgPage, OrganizationView};
pub use organizations::{IndexPage, OrganizationsView};

use lookout_api::ApiError;

/// Data a view is waiting on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Loadable<T> {
    #[default]
    Loading,
    /// Never empty.
    Failed(Vec<String>),
    Ready(T),
}

impl<T> Loadable<T> {
    #[must_use]
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(error) => Self::failed(error.into_messages()),
        }
    }

    /// `Failed` with `messages`, or a generic message if there are none.
    #[must_use]
    pub fn failed(messages: Vec<String>) -> Self {
        if messages.is_empty() {
            Self::Failed(vec!["request failed".to_string()])
        } else {
            Self::Failed(messages)
        }
    }

    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn errors(&self) -> Option<&[String]> {
        match self {
            Self::Failed(messages) => Some(messages),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_result_keeps_messages() {
        let failed: Loadable<()> =
            Loadable::from_result(Err(ApiError::http(500, vec!["a".into(), "b".into()])));
        assert_eq!(failed.errors(), Some(&["a".to_string(), "b".to_string()][..]));
        assert_eq!(failed.ready(), None);

        let ready = Loadable::from_result(Ok(3));
        assert_eq!(ready.ready(), Some(&3));
        assert_eq!(ready.errors(), None);
    }

    #[test]
    fn failed_is_never_empty() {
        let failed: Loadable<()> = Loadable::failed(Vec::new());
        assert_eq!(failed.errors().map(<[String]>::len), Some(1));
    }

    #[test]
    fn starts_loading() {
        assert_eq!(Loadable::<()>::default(), Loadable::Loading);
    }
}
