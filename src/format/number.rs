use crate::format::spec::FormatSpec;

/// Formats `v` per `spec`; zero is rendered as an empty string.
pub fn format_float(v: f64, spec: FormatSpec) -> String {
    if v == 0.0 {
        return String::new();
    }
    spec.render(v)
}

/// Renders a fraction as a percentage, e.g. `0.125` -> `12.50%`.
pub fn format_percent(v: f64, spec: FormatSpec) -> String {
    format!("{}%", spec.render(v * 100.0))
}

/// Strips trailing fractional zeros and a dangling decimal point:
/// `1.50` -> `1.5`, `2.00` -> `2`.
///
/// Only strings with exactly one `.` followed by ASCII digits are touched,
/// so `100` and `1.0.0` come back unchanged.
pub fn trim_trailing_zeros(s: &str) -> String {
    let (int, frac) = match s.split_once('.') {
        Some(parts) => parts,
        None => return s.to_owned(),
    };
    if frac.contains('.') || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return s.to_owned();
    }

    let frac = frac.trim_end_matches('0');
    if frac.is_empty() {
        int.to_owned()
    } else {
        format!("{int}.{frac}")
    }
}
