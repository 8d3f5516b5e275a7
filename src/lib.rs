//! Satsboard - a terminal-based Bitcoin analytics dashboard.
//!
//! Satsboard renders historical and analytical Bitcoin data — price
//! history, network growth, adoption, institutional holdings, mining
//! distribution, and price projections — in the terminal with vim-style
//! keyboard navigation. All data is hardcoded at build time; there is no
//! backend and no network I/O.
//!
//! # Features
//!
//! - Eight dashboard sections switched with Tab or number keys
//! - Braille line charts with a data-point cursor
//! - An inspector panel formatting the value under the cursor
//! - Dark and light color themes
//! - Clipboard export of any section as plain text
//!
//! # Example
//!
//! ```
//! use satsboard::format::{format_value, DataPoint};
//!
//! let point = DataPoint::new()
//!     .text_field("year", "2017")
//!     .number_field("price", 19000.0);
//!
//! assert_eq!(format_value(19000.0, "Price", &point), "$19,000");
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod data;
pub mod error;
pub mod format;
pub mod ui;
pub mod util;

pub use error::{Result, SatsboardError};
