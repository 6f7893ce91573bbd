use shared_types::{AppConfig, CalendarConfig, CalendarError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Config file location, overridable with `CALENDAR_CONFIG`.
pub fn config_path() -> PathBuf {
    std::env::var("CALENDAR_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(CONFIG_PATH))
}

/// Parse and validate the `[calendar]` table of a `config.toml` document.
pub fn parse_calendar_config(contents: &str) -> Result<CalendarConfig, CalendarError> {
    let config: AppConfig = toml::from_str(contents)
        .map_err(|e| CalendarError::malformed(format!("Invalid calendar config: {e}")))?;
    config.calendar.validate()?;
    Ok(config.calendar)
}

/// Read a config file. A missing file yields the gov.uk England and Wales
/// defaults; any other read or parse failure is an error.
pub fn read_calendar_config(path: &Path) -> Result<CalendarConfig, CalendarError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_calendar_config(&contents).map_err(|e| {
            CalendarError::malformed(format!("{}: {}", path.display(), e.message))
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Config file not found; using calendar defaults");
            Ok(CalendarConfig::default())
        }
        Err(e) => Err(CalendarError::unavailable(format!(
            "Failed to read {}: {e}",
            path.display()
        ))),
    }
}

/// Read `config.toml` and apply environment overrides.
pub fn load_calendar_config() -> Result<CalendarConfig, CalendarError> {
    let _ = dotenvy::dotenv();

    let path = config_path();
    let mut config = read_calendar_config(&path).inspect_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "Failed to load calendar config");
    })?;

    apply_overrides(&mut config, |key| std::env::var(key).ok());
    tracing::debug!(?config, "Calendar config loaded");
    Ok(config)
}

/// Apply `BANK_HOLIDAYS_URL` and `BANK_HOLIDAYS_DIVISION` overrides.
pub fn apply_overrides(config: &mut CalendarConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup("BANK_HOLIDAYS_URL").filter(|v| !v.is_empty()) {
        config.bank_holidays_url = url;
    }
    if let Some(division) = lookup("BANK_HOLIDAYS_DIVISION") {
        config.division = division;
    }
}
