use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    bytes::{units::Unit, B},
    error::{Error, Result},
    ok_or, some_or,
};

static RESOURCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)([EPTGMK]?i?)([A-Za-z]*)").expect("resource pattern is valid")
});

/// Converts a quantity such as `1.5Gi`, `200MB` or `4096` into bytes.
///
/// The first `<number><unit>` run anywhere in `s` is used; a unit-less number
/// is taken as bytes. Anything after a recognized unit is ignored (`1GiB`,
/// `10Gbps`). A unit-less number followed by letters other than `B` is an
/// unknown unit, so `5Q` fails while `12B` is twelve bytes.
///
/// ```
/// assert_eq!(resfmt::parse_resource("1KiB").unwrap(), 1024.0);
/// assert_eq!(resfmt::parse_resource("1G").unwrap(), 1e9);
/// ```
pub fn parse_resource(s: &str) -> Result<f64> {
    let caps = some_or!(RESOURCE_RE.captures(s), {
        return Err(Error::Format {
            input: s.to_owned(),
        });
    });

    let literal = &caps[1];
    let symbol = &caps[2];
    let trailer = &caps[3];

    let number: f64 = ok_or!(literal.parse(), _ => {
        return Err(Error::Number {
            literal: literal.to_owned(),
        });
    });

    if symbol.is_empty() && !trailer.is_empty() && !trailer.starts_with(B) {
        return Err(Error::UnknownUnit {
            unit: trailer.to_owned(),
        });
    }

    let multiplier = if symbol.is_empty() {
        1.0
    } else {
        symbol.parse::<Unit>()?.multiplier()
    };

    let bytes = number * multiplier;
    tracing::debug!(input = s, unit = symbol, bytes, "parsed resource");
    Ok(bytes)
}
