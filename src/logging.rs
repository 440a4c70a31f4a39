use chrono::Local;
use log::LevelFilter;
use std::path::PathBuf;
use std::sync::Once;

static INIT: Once = Once::new();

/// Where and how much the CLI logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LevelFilter,
    /// Directory for a daily log file; `None` keeps logging on stderr only.
    pub file_dir: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            file_dir: None,
        }
    }
}

impl LogSettings {
    /// Reads `IBAN_LOG_LEVEL` (falling back to `RUST_LOG`) and `IBAN_LOG_DIR`.
    pub fn from_env() -> Self {
        let level = std::env::var("IBAN_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();
        let dir = std::env::var("IBAN_LOG_DIR").ok();
        Self::resolve(level.as_deref(), dir.as_deref())
    }

    /// Unparseable levels fall back to info. A directory of `off`, `none`
    /// or the empty string disables the log file.
    pub fn resolve(level: Option<&str>, dir: Option<&str>) -> Self {
        let level = level
            .and_then(|value| value.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);
        let file_dir = dir
            .map(str::trim)
            .filter(|path| !matches!(path.to_ascii_lowercase().as_str(), "" | "off" | "none"))
            .map(PathBuf::from);
        Self { level, file_dir }
    }

    fn log_file_path(&self, app_name: &str) -> Option<PathBuf> {
        let date = Local::now().format("%Y_%m_%d");
        self.file_dir
            .as_ref()
            .map(|dir| dir.join(format!("{app_name}-{date}.log")))
    }
}

/// Installs the global logger once; later calls are no-ops.
pub fn init_logging(app_name: &str, settings: &LogSettings) -> Result<(), String> {
    let mut init_result: Result<(), String> = Ok(());
    INIT.call_once(|| {
        init_result = install(app_name, settings);
    });
    init_result
}

fn install(app_name: &str, settings: &LogSettings) -> Result<(), String> {
    // stdout carries command results
    let mut dispatch = fern::Dispatch::new()
        .level(settings.level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} | {:<5} | {} | {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    if let (Some(dir), Some(file_path)) = (&settings.file_dir, settings.log_file_path(app_name)) {
        std::fs::create_dir_all(dir)
            .map_err(|err| format!("cannot create log directory {}: {err}", dir.display()))?;
        let file = fern::log_file(&file_path)
            .map_err(|err| format!("cannot open log file {}: {err}", file_path.display()))?;
        dispatch = dispatch.chain(file);
    }

    dispatch.apply().map_err(|err| err.to_string())?;
    log::debug!(
        "logging at {} (file: {})",
        settings.level,
        settings
            .file_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|| "off".to_string())
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_falls_back_to_info() {
        assert_eq!(LogSettings::resolve(Some("debug"), None).level, LevelFilter::Debug);
        assert_eq!(LogSettings::resolve(Some(" WARN "), None).level, LevelFilter::Warn);
        assert_eq!(LogSettings::resolve(Some("chatty"), None).level, LevelFilter::Info);
        assert_eq!(LogSettings::resolve(None, None), LogSettings::default());
    }

    #[test]
    fn log_file_is_opt_in() {
        assert_eq!(LogSettings::resolve(None, None).file_dir, None);
        assert_eq!(LogSettings::resolve(None, Some("off")).file_dir, None);
        assert_eq!(LogSettings::resolve(None, Some("NONE")).file_dir, None);
        assert_eq!(LogSettings::resolve(None, Some("  ")).file_dir, None);
        assert_eq!(
            LogSettings::resolve(None, Some("logs")).file_dir,
            Some(PathBuf::from("logs"))
        );
    }

    #[test]
    fn log_file_is_named_per_app_and_day() {
        assert_eq!(LogSettings::default().log_file_path("iban-check"), None);

        let settings = LogSettings::resolve(Some("info"), Some("logs"));
        let path = settings.log_file_path("iban-check").unwrap();
        assert_eq!(path.parent(), Some(std::path::Path::new("logs")));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("iban-check-"));
        assert!(name.ends_with(".log"));
        assert_eq!(name.len(), "iban-check-".len() + "YYYY_MM_DD".len() + ".log".len());
    }
}
