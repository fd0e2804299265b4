//! env_logger setup. Info lines are user output and print bare.

use std::io::Write;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

pub(crate) fn init(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout)
        .format(move |buf, record| {
            if verbose {
                write!(
                    buf,
                    "{} ",
                    chrono::Local::now()
                        .format("%H:%M:%S%.3f")
                        .if_supports_color(Stdout, |t| t.dimmed()),
                )?;
            }
            match record.level() {
                Level::Info => writeln!(buf, "{}", record.args()),
                Level::Warn => writeln!(
                    buf,
                    "{} {}",
                    "warning:".if_supports_color(Stdout, |t| t.yellow()),
                    record.args(),
                ),
                Level::Error => writeln!(
                    buf,
                    "{} {}",
                    "error:".if_supports_color(Stdout, |t| t.red()),
                    record.args(),
                ),
                level => writeln!(
                    buf,
                    "{} {}",
                    format!("{}:", level.as_str().to_lowercase())
                        .if_supports_color(Stdout, |t| t.dimmed()),
                    record.args(),
                ),
            }
        });

    // A second init (e.g. from tests) keeps the first logger
    let _ = builder.try_init();
}
