use std::ffi::OsString;

use anyhow::anyhow;
use clap::Parser;
use resfmt::{
    format_percent, format_resource_string, format_resource_to_string, parse_resource,
    ByteUnitSystem, FormatSpec, Unit,
};

use crate::cli::Args;

#[derive(Debug)]
pub struct Config {
    pub value: String,
    pub mode: Mode,
    pub spec: FormatSpec,
    pub pretty: bool,
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    Format(ByteUnitSystem),
    To(Unit),
    Percent,
}

impl Config {
    pub fn parse<I, T>(itr: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Args::try_parse_from(itr) {
            Ok(args) => Ok(args.try_into()?),
            Err(err) => {
                Err(anyhow::Error::new(err).context("error parsing arguments into Config"))
            }
        }
    }

    pub fn render(&self) -> anyhow::Result<String> {
        let s = match self.mode {
            Mode::Format(bus) => format_resource_string(&self.value, bus, self.spec, self.pretty)?,
            Mode::To(unit) => {
                let bytes = parse_resource(&self.value)?;
                format_resource_to_string(bytes, unit, self.spec, self.pretty)
            }
            Mode::Percent => {
                let fraction: f64 = self
                    .value
                    .trim()
                    .parse()
                    .map_err(|err| anyhow!("invalid fraction '{}': {err}", self.value))?;
                format_percent(fraction, self.spec)
            }
        };
        Ok(s)
    }
}
