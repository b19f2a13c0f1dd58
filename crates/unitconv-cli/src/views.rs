//! Views rendered for each route.
//!
//! A view is plain data: the route's payload fetched from a [`UnitSource`]
//! plus any user input, canonicalized. Turning it into text is the job of
//! [`crate::render`].

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use unitconv_client::{Result, UnitSource};
use unitconv_text::Canonicalization;

use crate::router::Route;

/// Output of rendering a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    /// Unit list.
    Home(HomeView),
    /// One unit, with optional input.
    Converter(ConverterView),
    /// Fallback for unmatched paths.
    NotFound(NotFoundView),
}

impl View {
    /// Whether this is the not-found fallback.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// The home page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    /// Payload of `GET /units`.
    pub units: Value,
}

impl HomeView {
    /// Display labels for each unit, when the payload is a list.
    #[must_use]
    pub fn unit_labels(&self) -> Option<Vec<String>> {
        self.units
            .as_array()
            .map(|units| units.iter().map(unit_label).collect())
    }
}

/// The converter page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConverterView {
    /// Unit taken from the route.
    pub unit_name: String,
    /// Payload of `GET /units/{unit_name}`.
    pub detail: Value,
    /// User input, if any was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<InputValue>,
}

/// A user-typed value and its canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputValue {
    /// As typed.
    pub raw: String,
    /// After whitespace removal and zero trimming.
    pub canonical: String,
}

impl From<Canonicalization> for InputValue {
    fn from(stages: Canonicalization) -> Self {
        Self {
            raw: stages.raw,
            canonical: stages.canonical,
        }
    }
}

/// The not-found page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundView {
    /// Path that matched nothing.
    pub path: String,
}

/// Render a route against a unit source.
///
/// `value` is only used by the converter route. The not-found route never
/// touches the source. Client errors propagate unchanged.
pub fn render_route<S: UnitSource>(route: &Route, source: &S, value: Option<&str>) -> Result<View> {
    info!(route = ?route.name(), "rendering view");
    match route {
        Route::Home => Ok(View::Home(HomeView {
            units: source.units()?,
        })),
        Route::Converter { unit_name } => {
            let input = value.map(|raw| {
                let stages = Canonicalization::of(raw);
                debug!(
                    raw = %stages.raw,
                    compact = %stages.compact,
                    canonical = %stages.canonical,
                    "canonicalized input"
                );
                InputValue::from(stages)
            });
            Ok(View::Converter(ConverterView {
                unit_name: unit_name.clone(),
                detail: source.unit(unit_name)?,
                input,
            }))
        }
        Route::NotFound { path } => Ok(View::NotFound(NotFoundView { path: path.clone() })),
    }
}

/// Short label for one entry of the unit list.
///
/// Strings are used as-is, objects by their `name` field, anything else as
/// compact JSON.
#[must_use]
pub fn unit_label(unit: &Value) -> String {
    match unit {
        Value::String(name) => name.clone(),
        Value::Object(fields) => match fields.get("name") {
            Some(Value::String(name)) => name.clone(),
            _ => unit.to_string(),
        },
        other => other.to_string(),
    }
}
