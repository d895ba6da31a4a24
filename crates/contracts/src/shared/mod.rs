pub mod badge;
pub mod date_format;
pub mod page;

/// Fixed placeholder rendered for absent or malformed values.
/// Cells never show `null`, `NaN`, or `Invalid Date`.
pub const PLACEHOLDER: &str = "-";
