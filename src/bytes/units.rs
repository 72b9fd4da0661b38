use std::{fmt, str::FromStr};

use crate::{
    bytes::*,
    error::Error,
};

/// A unit symbol from either the base-1000 or the base-1024 family.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Unit {
    K,
    M,
    G,
    T,
    P,
    E,
    Ki,
    Mi,
    Gi,
    Ti,
    Pi,
    Ei,
}

impl Unit {
    pub const ALL: [Unit; 12] = [
        Self::K,
        Self::M,
        Self::G,
        Self::T,
        Self::P,
        Self::E,
        Self::Ki,
        Self::Mi,
        Self::Gi,
        Self::Ti,
        Self::Pi,
        Self::Ei,
    ];

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::K => K,
            Self::M => M,
            Self::G => G,
            Self::T => T,
            Self::P => P,
            Self::E => E,
            Self::Ki => KI,
            Self::Mi => MI,
            Self::Gi => GI,
            Self::Ti => TI,
            Self::Pi => PI,
            Self::Ei => EI,
        }
    }

    /// Bytes per unit. Every value is exactly representable as an `f64`.
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::K => 1e3,
            Self::M => 1e6,
            Self::G => 1e9,
            Self::T => 1e12,
            Self::P => 1e15,
            Self::E => 1e18,
            Self::Ki => 1_024.0,
            Self::Mi => 1_048_576.0,
            Self::Gi => 1_073_741_824.0,
            Self::Ti => 1_099_511_627_776.0,
            Self::Pi => 1_125_899_906_842_624.0,
            Self::Ei => 1_152_921_504_606_846_976.0,
        }
    }

}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.symbol() == s)
            .ok_or_else(|| Error::UnknownUnit { unit: s.to_owned() })
    }
}
