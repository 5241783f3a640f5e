// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Logger setup for the command-line tool.

use std::io::Write;

use env_logger::{Builder, Env};

/// Default filter for a given number of `-v` flags.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialise `env_logger` on stderr. `RUST_LOG` overrides `verbosity`.
pub fn init_logger(verbosity: u8) -> Result<(), log::SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or(default_filter(verbosity)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{:<5}] {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .try_init()
}
