//! Debug logging
//!
//! The terminal belongs to the UI, so log output goes to a file in the temp
//! directory. Release builds install no logger and `log` macros are no-ops.

use std::path::PathBuf;

pub const LOG_FILE_NAME: &str = "ifsc-finder-debug.log";

pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Install the file logger. `RUST_LOG` overrides the default `debug` level.
#[cfg(debug_assertions)]
pub fn init() {
    use std::fs::File;
    use std::io::Write;

    let Ok(file) = File::create(log_file_path()) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

#[cfg(not(debug_assertions))]
pub fn init() {}
