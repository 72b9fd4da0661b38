mod cli;
mod config;

use console::style;
use tracing::Level;

use crate::config::Config;

fn main() {
    let config = match Config::parse(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => match err.downcast::<clap::Error>() {
            // help, version and usage errors keep clap's own output and exit code
            Ok(err) => err.exit(),
            Err(err) => exit_with(err),
        },
    };

    tracing_subscriber::fmt()
        .with_max_level(if config.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "resolved config");

    match config.render() {
        Ok(s) => println!("{s}"),
        Err(err) => exit_with(err),
    }
}

fn exit_with(err: anyhow::Error) -> ! {
    eprintln!("{} {err}", style("error:").red().bold());
    std::process::exit(1);
}
