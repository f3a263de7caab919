use std::io::Write;

use env_logger::{Builder, Target, fmt::Formatter};
use log::{Level, LevelFilter};

use crate::Result;

pub fn init_logger(level: LevelFilter) -> Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .write_style(env_logger::WriteStyle::Never)
        .format(|buf: &mut Formatter, record| {
            writeln!(buf, "{} {}", level_tag(record.level()), record.args())
        })
        .target(Target::Stderr);

    builder
        .try_init()
        .map_err(|e| crate::Error::other(format!("logger init failed: {e}")))
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
