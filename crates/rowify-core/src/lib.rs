//! Data model, options and error types for `rowify`.
//!
//! This crate provides the input side of the table renderer:
//!
//! - [`record`]: ordered, arbitrarily nested key/value records
//! - [`options`]: render configuration (delimiters, borders, header display)
//! - [`error`]: error types for caller contract violations
//!
//! # Examples
//!
//! ```
//! use rowify_core::{Record, RenderOptions, Value};
//!
//! let row = Record::new()
//!     .with("course", "IFT 101")
//!     .with("grade", Record::new().with("score", 87).with("letter", "A-"));
//!
//! assert!(matches!(row.get("course"), Some(Value::Scalar(_))));
//!
//! let options = RenderOptions::new().with_delimiters([" | "]);
//! assert!(options.validate().is_ok());
//! ```

pub mod error;
pub mod options;
pub mod record;

pub use error::{Error, Result};
pub use options::{Border, RenderOptions};
pub use record::{Record, Value};
