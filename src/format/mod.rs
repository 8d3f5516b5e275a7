//! Value formatting engine.
//!
//! This module turns raw chart values into the human-readable strings shown
//! in the inspector panel. Classification is expressed as an explicit
//! [`ValueKind`]: each chart series carries its kind at data-definition
//! time, and [`ValueKind::infer`] remains available for points that arrive
//! without one (pie-style data where the kind depends on the slice).
//!
//! Formatting is a pure function of `(value, series, point)` — no state,
//! no I/O, and no failure mode: anything unclassifiable falls back to
//! plain digit grouping.

mod point;
mod tooltip;
mod value;

pub use point::{DataPoint, Field};
pub use tooltip::{build_tooltip, primary_label, resolve_color, SeriesValue, TooltipContent, TooltipLine};
pub use value::{format_value, group_digits, ValueKind};
