// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Log module, reference https://docs.rs/log4rs
//!
//! Native builds log through log4rs, to a file when one is given and to
//! stderr otherwise (stdout carries the call trace). Web builds forward
//! to the browser console through wasm_logger.

use log::LevelFilter;

#[cfg(file_log)]
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

#[cfg(file_log)]
const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

/// init logs system
///
/// Returns a message instead of panicking when the logger can't be set
/// up (unwritable file, logger already installed).
pub fn init_log(level: LevelFilter, file_path: Option<&str>) -> Result<(), String> {
    install(level, file_path)
}

#[cfg(wasm)]
fn install(level: LevelFilter, _file_path: Option<&str>) -> Result<(), String> {
    let lv = level.to_level().unwrap_or(log::Level::Error);
    wasm_logger::init(wasm_logger::Config::new(lv));
    Ok(())
}

#[cfg(file_log)]
fn install(level: LevelFilter, file_path: Option<&str>) -> Result<(), String> {
    let appender: Box<dyn log4rs::append::Append> = match file_path {
        Some(path) => Box::new(
            FileAppender::builder()
                .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
                .build(path)
                .map_err(|e| format!("log file {}: {}", path, e))?,
        ),
        None => Box::new(
            ConsoleAppender::builder()
                .target(Target::Stderr)
                .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
                .build(),
        ),
    };
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("glprimer", appender),
        )
        .build(Root::builder().appender("glprimer").build(level))
        .map_err(|e| e.to_string())?;
    log4rs::init_config(config).map_err(|e| e.to_string())?;
    Ok(())
}

// without log4rs records are filtered but go nowhere
#[cfg(all(native, not(feature = "log4rs")))]
fn install(level: LevelFilter, _file_path: Option<&str>) -> Result<(), String> {
    log::set_max_level(level);
    Ok(())
}
