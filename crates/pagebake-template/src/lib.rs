//! Template engine for pagebake
//!
//! This crate wraps minijinja with the numeric filters page templates use:
//!
//! # Filters
//!
//! - `| divided_by(100)` - Divide a number (or numeric text) by a divisor
//! - `| round(2)` - Format a number with a fixed count of decimals, as text
//!
//! Both filters accept integers, floats and numeric strings, and fail the
//! render with an explicit error for anything else.
//!
//! # Example
//!
//! ```ignore
//! use pagebake_template::TemplateEngine;
//!
//! let engine = TemplateEngine::new();
//! let html = engine.render_named(
//!     "price.html",
//!     "<p>{{ cents | divided_by(100) | round(2) }}</p>",
//!     serde_json::json!({"cents": 1999}),
//! )?;
//! assert_eq!(html, "<p>19.99</p>");
//! ```

pub mod coerce;
mod engine;
mod error;
mod filters;

pub use coerce::CoercionError;
pub use engine::TemplateEngine;
pub use error::{TemplateError, TemplateResult};
pub use filters::{divided_by, round};
