use std::io::Write;

use chrono::Local;
use colored::{ColoredString, Colorize};
use env_logger::Builder;
use log::{Level, LevelFilter};

/// Installs the global logger for the given verbosity.
///
/// The line header grows with verbosity: debug runs gain a
/// timestamp and trace runs also name the emitting module.
pub fn init(filter: LevelFilter) {
    Builder::new()
        .filter_level(filter)
        .format(move |buf, record| {
            let level = colored_level(record.level());
            let args = record.args();

            match filter {
                LevelFilter::Off => Ok(()),
                LevelFilter::Trace => writeln!(
                    buf,
                    "[{time} {level:>5} {module}] {args}",
                    time = Local::now().format("%H:%M:%S"),
                    module = record.module_path().unwrap_or_default().bright_yellow(),
                ),
                LevelFilter::Debug => writeln!(
                    buf,
                    "[{time} {level:>5}] {args}",
                    time = Local::now().format("%H:%M:%S"),
                ),
                _ => writeln!(buf, "{level:>5} {args}"),
            }
        })
        .init();
}

fn colored_level(level: Level) -> ColoredString {
    match level {
        Level::Error => level.as_str().red(),
        Level::Warn => level.as_str().yellow(),
        Level::Info => level.as_str().green(),
        Level::Debug => level.as_str().blue(),
        Level::Trace => level.as_str().cyan(),
    }
}
