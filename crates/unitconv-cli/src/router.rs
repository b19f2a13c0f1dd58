//! Route table for the converter.
//!
//! | Name        | Path                      |
//! |-------------|---------------------------|
//! | `home`      | `/`                       |
//! | `converter` | `/converter/{unit_name}`  |
//! | (fallback)  | anything else, not found  |

use std::borrow::Cow;

use serde::Serialize;
use tracing::debug;

/// Literal first segment of the converter route.
const CONVERTER_SEGMENT: &str = "converter";

/// A resolved location in the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    /// The unit list.
    Home,
    /// The converter page for one unit.
    Converter {
        /// Unit name taken from the path, percent-decoded.
        unit_name: String,
    },
    /// Anything that matched no route.
    NotFound {
        /// The path as requested.
        path: String,
    },
}

impl Route {
    /// Route name, `None` for the fallback.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::Home => Some("home"),
            Self::Converter { .. } => Some("converter"),
            Self::NotFound { .. } => None,
        }
    }

    /// Canonical path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Converter { unit_name } => {
                format!("/{CONVERTER_SEGMENT}/{}", urlencoding::encode(unit_name))
            }
            Self::NotFound { path } => path.clone(),
        }
    }

    /// Build the converter route for a unit.
    #[must_use]
    pub fn converter(unit_name: impl Into<String>) -> Self {
        Self::Converter {
            unit_name: unit_name.into(),
        }
    }
}

/// Resolve a path to a route.
///
/// Query strings and fragments are ignored, as is a single trailing slash.
/// A path without a leading slash is treated as rooted.
pub fn resolve(path: &str) -> Route {
    let route = match_path(path).unwrap_or_else(|| Route::NotFound {
        path: path.to_string(),
    });
    debug!(path, route = ?route.name(), "resolved route");
    route
}

fn match_path(path: &str) -> Option<Route> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = path[..end].trim_start_matches('/');
    let path = path.strip_suffix('/').unwrap_or(path);

    if path.is_empty() {
        return Some(Route::Home);
    }

    let mut segments = path.split('/');
    let literal = segments.next()?;
    let param = segments.next()?;
    if segments.next().is_some()
        || !literal.eq_ignore_ascii_case(CONVERTER_SEGMENT)
        || param.is_empty()
    {
        return None;
    }

    Some(Route::converter(decode_segment(param)))
}

/// Percent-decode a path segment, passing it through raw if that fails.
fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment).map_or_else(|_| segment.to_string(), Cow::into_owned)
}
