use crate::{
    bytes::{system::ByteUnitSystem, units::Unit, B},
    error::Result,
    format::{
        number::{format_float, trim_trailing_zeros},
        spec::FormatSpec,
    },
    parse::parse_resource,
};

/// `format_resource_base1000(1000.0, FormatSpec::precision(2), false)` -> `1.00KB`
pub fn format_resource_base1000(v: f64, spec: FormatSpec, pretty: bool) -> String {
    ByteUnitSystem::SI.format(v, spec, pretty)
}

/// `format_resource_base1024(1_000_000.0, FormatSpec::precision(2), false)` -> `976.56KiB`
pub fn format_resource_base1024(v: f64, spec: FormatSpec, pretty: bool) -> String {
    ByteUnitSystem::Binary.format(v, spec, pretty)
}

/// Expresses `v` bytes in `to`, rounded exactly as its textual form is.
///
/// The result is the formatted quotient read back as a number, so
/// `format_resource_to(1_000_000.0, Unit::Mi, FormatSpec::precision(2))` is
/// `0.95`, not `0.9536...`. Zero yields `0.0`.
pub fn format_resource_to(v: f64, to: Unit, spec: FormatSpec) -> f64 {
    format_float(v / to.multiplier(), spec)
        .parse()
        .unwrap_or_default()
}

/// Expresses `v` bytes in `to` and appends the unit, e.g. `0.95MiB`.
///
/// Zero yields an empty string.
pub fn format_resource_to_string(v: f64, to: Unit, spec: FormatSpec, pretty: bool) -> String {
    let mut s = format_float(v / to.multiplier(), spec);
    if s.is_empty() {
        return s;
    }
    if pretty {
        s = trim_trailing_zeros(&s);
    }
    format!("{s}{to}{B}")
}

/// Parses `s` and re-renders it in the largest fitting unit of `bus`.
pub fn format_resource_string(
    s: &str,
    bus: ByteUnitSystem,
    spec: FormatSpec,
    pretty: bool,
) -> Result<String> {
    let bytes = parse_resource(s)?;
    Ok(bus.format(bytes, spec, pretty))
}

/// `format_resource_string_base1000("0.2GB", FormatSpec::precision(2), true)` -> `200MB`
pub fn format_resource_string_base1000(s: &str, spec: FormatSpec, pretty: bool) -> Result<String> {
    format_resource_string(s, ByteUnitSystem::SI, spec, pretty)
}

/// `format_resource_string_base1024("1024MiB", FormatSpec::precision(2), true)` -> `1GiB`
pub fn format_resource_string_base1024(s: &str, spec: FormatSpec, pretty: bool) -> Result<String> {
    format_resource_string(s, ByteUnitSystem::Binary, spec, pretty)
}
