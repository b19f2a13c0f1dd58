//! The seam between views and the backend.

use serde_json::Value;

use crate::error::Result;

/// Anything that can answer unit queries.
///
/// Views only see this trait, so tests can hand them an in-memory fake
/// instead of an HTTP client.
pub trait UnitSource {
    /// List all units (`GET /units`).
    fn units(&self) -> Result<Value>;

    /// Fetch one unit's detail (`GET /units/{unit_name}`).
    fn unit(&self, unit_name: &str) -> Result<Value>;
}

impl<T: UnitSource + ?Sized> UnitSource for &T {
    fn units(&self) -> Result<Value> {
        (**self).units()
    }

    fn unit(&self, unit_name: &str) -> Result<Value> {
        (**self).unit(unit_name)
    }
}
