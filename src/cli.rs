use clap::Parser;
use resfmt::{ByteUnitSystem, FormatSpec, Unit};

use crate::config::{Config, Mode};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Quantity such as 1.5GiB, 200MB or 4096 (a plain fraction with --percent)
    pub value: String,

    #[arg(name = "si", long = "si", conflicts_with_all = vec!["binary", "to", "percent", "bytes"])]
    pub si: bool,
    #[arg(name = "binary", long = "binary", alias = "bin", conflicts_with_all = vec!["si", "to", "percent", "bytes"])]
    pub binary: bool,
    #[arg(name = "to", long = "to", short = 't', conflicts_with_all = vec!["si", "binary", "percent", "bytes"])]
    pub to: Option<String>,
    #[arg(name = "percent", long = "percent", conflicts_with_all = vec!["si", "binary", "to", "bytes"])]
    pub percent: bool,
    #[arg(name = "bytes", long = "bytes", alias = "raw", conflicts_with_all = vec!["si", "binary", "to", "percent"])]
    pub bytes: bool,

    #[arg(
        name = "format",
        long = "format",
        short = 'f',
        aliases = vec!["fmt", "spec"],
        default_value = "%.2f"
    )]
    pub format: String,
    #[arg(name = "pretty", long = "pretty", short = 'p')]
    pub pretty: bool,
    #[arg(name = "verbose", long = "verbose", short = 'v')]
    pub verbose: bool,
}

impl TryInto<Config> for Args {
    type Error = anyhow::Error;

    fn try_into(self) -> Result<Config, Self::Error> {
        let mode = if let Some(to) = self.to {
            Mode::To(to.parse::<Unit>()?)
        } else if self.percent {
            Mode::Percent
        } else if self.bytes {
            Mode::Format(ByteUnitSystem::Raw)
        } else if self.binary {
            Mode::Format(ByteUnitSystem::Binary)
        } else {
            Mode::Format(ByteUnitSystem::SI)
        };

        Ok(Config {
            value: self.value,
            mode,
            spec: self.format.parse::<FormatSpec>()?,
            pretty: self.pretty,
            verbose: self.verbose,
        })
    }
}
