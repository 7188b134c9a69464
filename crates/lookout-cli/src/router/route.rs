use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Console routes.
///
/// | path | route |
/// |---|---|
/// | `/` | [`Route::Index`] (protected) |
/// | `/org/:name` | [`Route::Org`] (protected) |
/// | `/login` | [`Route::Login`] |
/// | `/logout` | [`Route::Logout`] |
/// | `/callback?<query>` | [`Route::Callback`] |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Index,
    Org { name: String },
    Login,
    Logout,
    Callback { query: String },
}

impl Route {
    /// Parse a console path. A trailing slash is ignored; the query string is
    /// only meaningful for `/callback`.
    pub fn parse(input: &str) -> anyhow::Result<Self> {
        let input = input.trim();
        let (path, query) = input.split_once('?').unwrap_or((input, ""));
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match path {
            "/" => Ok(Self::Index),
            "/login" => Ok(Self::Login),
            "/logout" => Ok(Self::Logout),
            "/callback" => Ok(Self::Callback {
                query: query.to_string(),
            }),
            other => {
                let name = other
                    .strip_prefix("/org/")
                    .filter(|name| !name.is_empty() && !name.contains('/'))
                    .ok_or_else(|| anyhow::anyhow!("unknown path '{input}'"))?;
                let name = urlencoding::decode(name)
                    .map_err(|e| anyhow::anyhow!("invalid organization name in '{input}': {e}"))?;
                Ok(Self::Org {
                    name: name.into_owned(),
                })
            }
        }
    }

    /// Canonical path; `Route::parse(&route.path())` yields the same route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Index => "/".to_string(),
            Self::Org { name } => format!("/org/{}", urlencoding::encode(name)),
            Self::Login => "/login".to_string(),
            Self::Logout => "/logout".to_string(),
            Self::Callback { query } if query.is_empty() => "/callback".to_string(),
            Self::Callback { query } => format!("/callback?{query}"),
        }
    }

    /// Whether the route needs an authenticated session.
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        matches!(self, Self::Index | Self::Org { .. })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Route {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn all_routes() -> Vec<Route> {
        vec![
            Route::Index,
            Route::Org {
                name: "acme".into(),
            },
            Route::Org {
                name: "my org".into(),
            },
            Route::Login,
            Route::Logout,
            Route::Callback {
                query: "code=abc&state=xyz".into(),
            },
            Route::Callback {
                query: String::new(),
            },
        ]
    }

    #[test]
    fn every_route_round_trips_through_its_path() {
        for route in all_routes() {
            assert_eq!(Route::parse(&route.path()).unwrap(), route);
        }
    }

    #[test]
    fn known_paths_parse() {
        assert_eq!(Route::parse("/").unwrap(), Route::Index);
        assert_eq!(Route::parse("").unwrap(), Route::Index);
        assert_eq!(
            Route::parse("/org/acme/").unwrap(),
            Route::Org {
                name: "acme".into()
            }
        );
        assert_eq!(
            Route::parse("/callback?code=1&state=2").unwrap(),
            Route::Callback {
                query: "code=1&state=2".into()
            }
        );
        assert_eq!("/logout".parse::<Route>().unwrap(), Route::Logout);
    }

    #[test]
    fn unknown_paths_are_errors() {
        for path in ["/orgs", "/org/", "/org/a/b", "/settings", "org/acme"] {
            let err = Route::parse(path).unwrap_err();
            assert!(err.to_string().contains("unknown path"), "{path}: {err}");
        }
    }

    #[test]
    fn only_index_and_org_are_protected() {
        let protected: Vec<String> = all_routes()
            .into_iter()
            .filter(Route::is_protected)
            .map(|route| route.path())
            .collect();
        assert_eq!(protected, ["/", "/org/acme", "/org/my%20org"]);
    }

    #[test]
    fn serializes_as_path() {
        let json = serde_json::to_string(&Route::Org {
            name: "acme".into(),
        })
        .unwrap();
        assert_eq!(json, "\"/org/acme\"");
    }
}
