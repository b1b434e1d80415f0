//! Best-effort parsing of specification table cells.
//!
//! Nothing in here returns an error. Vendor tables change formatting from
//! season to season, so a cell that does not parse yields `None` and the
//! caller simply leaves the field unset.

/// Suffix vendors append to a size label for the wide variant of a board.
pub const WIDE_MARKER: &str = "W";

/// Separates nose/tail pairs and a stance range from its setback.
pub const PAIR_SEPARATOR: &str = " / ";

/// Range separator in imperial cells (`18.5-23.25`) and weight ranges.
pub const TIGHT_RANGE: &str = "-";

/// Range separator in metric stance cells (`47 - 59`).
pub const SPACED_RANGE: &str = " - ";

/// Signature shared by all cell parsers so composite splitting can be
/// parameterised over the unit.
pub type ParseFn = fn(&str) -> Option<f64>;

/// Plain decimal number, surrounding whitespace ignored. `NaN` and
/// infinities are rejected like any other non-number.
pub fn number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Inch value such as `1.0"`.
pub fn inches(text: &str) -> Option<f64> {
    number(&text.replace('"', ""))
}

/// Centimetre value such as `2,5 cm`, accepting a comma as decimal point.
pub fn centimeters(text: &str) -> Option<f64> {
    let text = text.trim();
    let text = text.strip_suffix("cm").unwrap_or(text);
    decimal_comma(text)
}

/// Number written with a comma as decimal separator.
pub fn decimal_comma(text: &str) -> Option<f64> {
    number(&text.replace(',', "."))
}

/// Keeps only the ASCII digits of `text` and parses what remains, so
/// `40 kg` becomes `40`.
pub fn digits(text: &str) -> Option<f64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    number(&digits)
}

/// Board length from a size label, with the wide marker removed.
pub fn size_length(label: &str) -> Option<f64> {
    number(&label.replace(WIDE_MARKER, ""))
}

pub fn is_wide(label: &str) -> bool {
    label.contains(WIDE_MARKER)
}

/// Splits `text` on the first `separator` and parses both halves.
///
/// Without the separator both values stay unset, even if the whole cell
/// would parse as a single number.
pub fn pair(text: &str, separator: &str, parse: ParseFn) -> (Option<f64>, Option<f64>) {
    match text.split_once(separator) {
        Some((first, second)) => (parse(first), parse(second)),
        None => (None, None),
    }
}

/// A `min - max / setback` cell.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stance {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub set_back: Option<f64>,
}

/// Splits a stance cell into range and setback, then the range into min and
/// max on `range_separator`.
///
/// A cell without the setback separator yields an empty [`Stance`]; a range
/// without `range_separator` still keeps a parsed setback.
pub fn stance(text: &str, range_separator: &str, parse: ParseFn) -> Stance {
    let Some((range, set_back)) = text.split_once(PAIR_SEPARATOR) else {
        return Stance::default();
    };

    let (min, max) = pair(range, range_separator, parse);

    Stance {
        min,
        max,
        set_back: parse(set_back),
    }
}

/// Metric rider weight. A hyphenated range fills both ends, anything else
/// is digit-filtered into the minimum.
pub fn metric_weight(text: &str) -> (Option<f64>, Option<f64>) {
    match text.split_once(TIGHT_RANGE) {
        Some((min, max)) => (digits(min), digits(max)),
        None => (digits(text), None),
    }
}
