//! Logger setup shared by the lecture binaries.

use log::LevelFilter;

/// Installs a stderr logger that prefixes each line with the local time,
/// level and target. GPU wrapper modules are kept at `level`; everything else
/// outside this crate is capped at `warn`.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level.min(LevelFilter::Warn))
        .level_for("gl_lectures", level)
        .level_for("lectures_core", level)
        .chain(std::io::stderr())
        .apply()
}
