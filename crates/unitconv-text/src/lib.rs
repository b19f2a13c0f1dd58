//! Text canonicalization for the unit converter.
//!
//! Values typed into the converter are normalized here before they are sent
//! to the conversion backend. The crate has no runtime dependencies so any
//! front end can call it.
//!
//! ```
//! use unitconv_text::{canonicalize, remove_redundant_zeros, remove_whitespaces};
//!
//! assert_eq!(remove_whitespaces("1 000 000"), "1000000");
//! assert_eq!(remove_redundant_zeros("5.100"), "5.1");
//! assert_eq!(canonicalize("1 000.000"), "1000");
//! ```

#![warn(missing_docs)]

pub mod numeric;

pub use numeric::{
    Canonicalization, DECIMAL_POINT, canonicalize, is_canonical, remove_redundant_zeros,
    remove_whitespaces,
};
