//! Public API checks: unit table, zero sentinels, pretty-trim idempotence,
//! numeric/text consistency of the unit-targeted converter and worked examples.
use resfmt::{
    format_float, format_percent, format_resource_base1000, format_resource_base1024,
    format_resource_string_base1000, format_resource_string_base1024, format_resource_to,
    format_resource_to_string, parse_resource, trim_trailing_zeros, Error, FormatSpec, Unit,
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn spec(s: &str) -> FormatSpec {
    s.parse().unwrap()
}

const SAMPLES: [f64; 9] = [
    1.0,
    999.0,
    1536.0,
    1_000_000.0,
    1_000_001.0,
    2_097_152.0,
    123_456_789.0,
    9.87e12,
    4.2e15,
];

// ── Parser ───────────────────────────────────────────────────────────────────

#[test]
fn one_of_each_unit_is_its_multiplier() {
    for unit in Unit::ALL {
        assert_eq!(parse_resource(&format!("1{unit}")).unwrap(), unit.multiplier());
    }
}

#[test]
fn byte_suffix_is_ignored() {
    assert_eq!(parse_resource("1KiB").unwrap(), 1024.0);
    assert_eq!(parse_resource("1Ki").unwrap(), 1024.0);
    assert_eq!(parse_resource("1GB").unwrap(), 1_000_000_000.0);
    assert_eq!(parse_resource("1G").unwrap(), 1_000_000_000.0);
}

#[test]
fn invalid_input() {
    assert_eq!(
        parse_resource("abc"),
        Err(Error::Format {
            input: "abc".into()
        })
    );
    assert_eq!(
        parse_resource("5Q"),
        Err(Error::UnknownUnit { unit: "Q".into() })
    );
    assert_eq!(
        parse_resource("5Q").unwrap_err().to_string(),
        "unknown unit 'Q'"
    );
}

// ── Formatters ───────────────────────────────────────────────────────────────

#[test]
fn zero_sentinel() {
    let two = spec("%.2f");
    assert_eq!(format_resource_base1000(0.0, two, false), "");
    assert_eq!(format_resource_base1024(0.0, two, false), "");
    assert_eq!(format_resource_base1000(0.0, two, true), "");
    assert_eq!(format_float(0.0, two), "");
}

#[test]
fn worked_examples() {
    let two = spec("%.2f");
    assert_eq!(format_resource_base1000(1000.0, two, false), "1.00KB");
    assert_eq!(format_resource_base1000(1_000_000.0, two, true), "1MB");
    assert_eq!(format_resource_base1024(1_000_000.0, two, false), "976.56KiB");
    assert_eq!(format_resource_base1024(1_048_576.0, two, true), "1MiB");
    assert_eq!(format_resource_to(1_000_000.0, Unit::M, two), 1.00);
    assert_eq!(format_resource_to(1_000_000.0, Unit::Mi, two), 0.95);
    assert_eq!(
        format_resource_string_base1024("1024MiB", two, true).unwrap(),
        "1GiB"
    );
    assert_eq!(
        format_resource_string_base1000("0.2GB", two, true).unwrap(),
        "200MB"
    );
}

#[test]
fn percent_defaults_to_two_decimals() {
    assert_eq!(format_percent(0.1234, spec("")), "12.34%");
    assert_eq!(format_percent(0.1234, spec("%.1f")), "12.3%");
    assert_eq!(format_percent(0.0, spec("")), "0.00%");
}

#[test]
fn selected_unit_keeps_value_at_least_one() {
    for v in SAMPLES {
        for s in [
            format_resource_base1000(v, FormatSpec::shortest(), false),
            format_resource_base1024(v, FormatSpec::shortest(), false),
        ] {
            let number = s.trim_end_matches(|c: char| c.is_ascii_alphabetic());
            let scaled: f64 = number.parse().unwrap();
            assert!(scaled >= 1.0, "{v} -> {s}");
        }
    }
}

// ── Consistency ──────────────────────────────────────────────────────────────

#[test]
fn trim_is_idempotent() {
    let corpus = [
        "", ".", "0", "0.0", "1.", "1.50", "2.00", "10.0", "100", "-3.1400", "1.0.0", "1.00.",
        "abc", "1.5e10", "inf", "NaN", "007.700", "1.50KB", "..0",
    ];
    for s in corpus {
        let once = trim_trailing_zeros(s);
        assert_eq!(trim_trailing_zeros(&once), once, "{s:?}");
    }
}

#[test]
fn converter_number_matches_its_text() {
    for fs in ["%.0f", "%.2f", "%.3f", "%v"] {
        let fs = spec(fs);
        for v in SAMPLES {
            for unit in Unit::ALL {
                let text = format_resource_to_string(v, unit, fs, false);
                let number = format_resource_to(v, unit, fs);
                let suffix = format!("{unit}B");
                let read_back: f64 = text
                    .strip_suffix(&suffix)
                    .expect("unit suffix")
                    .parse()
                    .unwrap();
                assert_eq!(number, read_back, "{v} in {unit} with {fs}");
            }
        }
    }
}

#[test]
fn string_pipeline_round_trips_its_own_output() {
    let two = spec("%.2f");
    for v in SAMPLES {
        let s = format_resource_base1024(v, two, false);
        let again = format_resource_string_base1024(&s, two, false).unwrap();
        assert_eq!(again, s, "{v}");
    }
}
