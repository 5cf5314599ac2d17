//! Record Set presentation.
//!
//! Two mutually exclusive modes: a markdown-style text table and a
//! monthly registration-count line chart. Both produce plain text for
//! stdout; there is no machine-readable output mode.

pub mod chart;
pub mod table;
