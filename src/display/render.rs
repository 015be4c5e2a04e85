use std::fmt::Display;

pub const STANDARD_LABEL: &str = "STANDARD";
pub const DECIMAL_LABEL: &str = "DECIMAL";

/// Gap between the standard and decimal halves of the line.
pub const FIELD_GAP: &str = "    ";

/// Builds the output line.
///
/// The line starts with a carriage return and never contains a newline, so
/// each write overwrites the previous one in place.
pub fn render_line(standard: &impl Display, decimal: &impl Display) -> String {
    format!("\r{STANDARD_LABEL}: {standard}{FIELD_GAP}{DECIMAL_LABEL}: {decimal} ")
}
