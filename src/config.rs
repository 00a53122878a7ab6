use crate::errors::GonioError;
use std::str::FromStr;

pub const PRECISION_VAR: &str = "GONIO_PRECISION";
pub const FORMAT_VAR: &str = "GONIO_FORMAT";
pub const LOG_VAR: &str = "GONIO_LOG";

pub const DEFAULT_LOG_FILTER: &str = "warn";

// f64 carries at most 17 significant decimal digits
pub const MAX_PRECISION: usize = 17;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", name)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub precision: Option<usize>,
    pub format: OutputFormat,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            precision: None,
            format: OutputFormat::Plain,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Loads an optional `.env` file and reads the settings from the
    /// process environment.
    pub fn from_env() -> Result<Settings, GonioError> {
        // a missing .env file is fine
        dotenv::dotenv().ok();
        Settings::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Settings, GonioError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(precision) = lookup(PRECISION_VAR) {
            let precision = parse_precision(&precision)
                .map_err(|message| config_error(PRECISION_VAR, message))?;
            settings.precision = Some(precision);
        }

        if let Some(format) = lookup(FORMAT_VAR) {
            settings.format = format
                .parse()
                .map_err(|message| config_error(FORMAT_VAR, message))?;
        }

        if let Some(filter) = lookup(LOG_VAR) {
            if !filter.trim().is_empty() {
                settings.log_filter = filter;
            }
        }

        Ok(settings)
    }
}

fn config_error(setting: &str, message: String) -> GonioError {
    GonioError::Config {
        setting: setting.to_string(),
        message,
    }
}

/// Parses a number of decimal places. The error does not name the source of
/// the value, callers add that.
pub fn parse_precision(text: &str) -> Result<usize, String> {
    let precision = text
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid precision '{}': {}", text, e))?;
    check_precision(precision)
}

pub fn check_precision(precision: usize) -> Result<usize, String> {
    if precision > MAX_PRECISION {
        return Err(format!(
            "precision {} is larger than {}",
            precision, MAX_PRECISION
        ));
    }
    Ok(precision)
}
