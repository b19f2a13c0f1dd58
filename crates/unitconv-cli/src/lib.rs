//! Library components of the unit converter front end.
//!
//! - [`router`] maps paths to routes.
//! - [`views`] fetches what each route needs from a
//!   [`UnitSource`](unitconv_client::UnitSource).
//! - [`render`] turns views into terminal text.

#![warn(missing_docs)]

pub mod logging;
pub mod render;
pub mod router;
pub mod views;

pub use router::{Route, resolve};
pub use views::{View, render_route};
