use crate::{
    bytes::{units::Unit, B},
    format::{
        number::{format_float, trim_trailing_zeros},
        spec::FormatSpec,
    },
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ByteUnitSystem {
    Raw,
    SI,
    Binary,
}

impl ByteUnitSystem {
    /// Auto-selection stops at P/Pi; E/Ei are only reachable through an explicit target unit.
    pub const SI_UNITS: [Unit; 5] = [Unit::K, Unit::M, Unit::G, Unit::T, Unit::P];
    pub const BINARY_UNITS: [Unit; 5] = [Unit::Ki, Unit::Mi, Unit::Gi, Unit::Ti, Unit::Pi];

    pub fn units(&self) -> &'static [Unit] {
        match self {
            Self::Raw => &[],
            Self::SI => &Self::SI_UNITS,
            Self::Binary => &Self::BINARY_UNITS,
        }
    }

    /// Renders `bytes` in the largest unit of this system it reaches.
    ///
    /// Zero renders as an empty string. Quantities below the first unit are
    /// returned as the bare formatted number with no suffix and no trimming.
    pub fn format(&self, bytes: f64, spec: FormatSpec, pretty: bool) -> String {
        let units = self.units();
        let first = match units.first() {
            Some(&unit) => unit,
            None => {
                let s = format_float(bytes, spec);
                return if pretty { trim_trailing_zeros(&s) } else { s };
            }
        };

        if bytes == 0.0 {
            return String::new();
        }
        if bytes < first.multiplier() {
            return spec.render(bytes);
        }

        let mut unit = first;
        for &next_unit in &units[1..] {
            if bytes < next_unit.multiplier() {
                break;
            }
            unit = next_unit;
        }
        tracing::trace!(bytes, %unit, "selected unit");

        let mut s = format_float(bytes / unit.multiplier(), spec);
        if pretty {
            s = trim_trailing_zeros(&s);
        }
        format!("{s}{unit}{B}")
    }
}
