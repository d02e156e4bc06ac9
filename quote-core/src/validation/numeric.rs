use rust_decimal::Decimal;

/// Outcome of reading a free-text numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericInput {
    /// Empty or whitespace only.
    Blank,
    /// Non-empty but not a number.
    Invalid,
    Value(Decimal),
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Reads a numeric text field.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
pub fn read_number(s: &str) -> NumericInput {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return NumericInput::Blank;
    }
    normalized
        .parse::<Decimal>()
        .map_or(NumericInput::Invalid, NumericInput::Value)
}

/// Parses a whole number such as a slider position, ignoring surrounding whitespace.
pub(crate) fn read_whole<T: std::str::FromStr>(s: &str) -> Option<T> {
    s.trim().parse().ok()
}

/// Parses a switch position. Accepts `true/false`, `on/off`, `yes/no` and `1/0`.
pub(crate) fn read_switch(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}
