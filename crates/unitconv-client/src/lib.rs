//! Client for the unit converter backend.
//!
//! The backend exposes two JSON endpoints:
//!
//! - `GET /units` lists all units.
//! - `GET /units/{unit_name}` returns one unit's detail.
//!
//! Payloads are passed through as [`serde_json::Value`]; callers decide how
//! to present them. Front ends should depend on [`UnitSource`] rather than on
//! [`HttpUnitClient`] directly so a fake can be substituted in tests.
//!
//! # Example
//!
//! ```no_run
//! use unitconv_client::{ClientConfig, HttpUnitClient, UnitSource};
//!
//! fn list() -> unitconv_client::Result<()> {
//!     let config = ClientConfig::from_env()?;
//!     let client = HttpUnitClient::new(&config)?;
//!     println!("{}", client.units()?);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod source;

pub use client::HttpUnitClient;
pub use config::{API_URL_ENV, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, TIMEOUT_ENV};
pub use error::{ClientError, Result};
pub use source::UnitSource;
