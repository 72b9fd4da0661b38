pub mod system;
pub mod units;

/// Suffix appended after a unit symbol, as in `KiB`.
pub const B: &str = "B";

const K: &str = "K";
const M: &str = "M";
const G: &str = "G";
const T: &str = "T";
const P: &str = "P";
const E: &str = "E";

const KI: &str = "Ki";
const MI: &str = "Mi";
const GI: &str = "Gi";
const TI: &str = "Ti";
const PI: &str = "Pi";
const EI: &str = "Ei";
