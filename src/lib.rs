pub mod config;
pub mod error;
pub mod listing;
pub mod setlist;
pub mod time;

use env_logger::Env;

/// Timestamped `[LEVEL]` log lines, `info` unless `RUST_LOG` says otherwise
pub fn init_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

// Re-export commonly used types
pub use config::Config;
pub use error::TimeFormatError;
pub use time::{normalize_display, to_display, ClockTime, TimeFormatter};
