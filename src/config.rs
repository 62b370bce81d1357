//! Runtime configuration, read from the environment (and `.env` when present)

use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

const DEFAULT_DATABASE_URL: &str = "sqlite://lift-log.db?mode=rwc";
const DEFAULT_WEEK_COUNT: u32 = 8;
const DEFAULT_LOOKBACK_WEEKS: u32 = 12;
const DEFAULT_LOG_FILTER: &str = "info";

/// Largest week window accepted from the environment or the command line
pub const MAX_WEEKS: u32 = 5200;

const DATABASE_URL_VAR: &str = "LIFT_LOG_DATABASE_URL";
const WEEK_COUNT_VAR: &str = "LIFT_LOG_WEEK_COUNT";
const LOOKBACK_WEEKS_VAR: &str = "LIFT_LOG_LOOKBACK_WEEKS";
const FETCH_LIMIT_VAR: &str = "LIFT_LOG_FETCH_LIMIT";
const LOG_FILTER_VAR: &str = "LIFT_LOG_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
  pub database_url: String,
  /// Weeks shown by the weekly volume chart
  pub week_count: u32,
  /// Default window for overload series
  pub lookback_weeks: u32,
  /// Cap on workouts fetched per user; None fetches everything
  pub fetch_limit: Option<i64>,
  /// tracing-subscriber filter directive
  pub log_filter: String,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      database_url: DEFAULT_DATABASE_URL.to_string(),
      week_count: DEFAULT_WEEK_COUNT,
      lookback_weeks: DEFAULT_LOOKBACK_WEEKS,
      fetch_limit: None,
      log_filter: DEFAULT_LOG_FILTER.to_string(),
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    let defaults = Self::default();

    Ok(Self {
      database_url: env::var(DATABASE_URL_VAR).unwrap_or(defaults.database_url),
      week_count: weeks_var(WEEK_COUNT_VAR)?.unwrap_or(defaults.week_count),
      lookback_weeks: weeks_var(LOOKBACK_WEEKS_VAR)?.unwrap_or(defaults.lookback_weeks),
      fetch_limit: positive_var(FETCH_LIMIT_VAR)?,
      log_filter: env::var(LOG_FILTER_VAR).unwrap_or(defaults.log_filter),
    })
  }
}

/// Parse an optional numeric variable that must be at least 1
fn positive_var<T>(key: &'static str) -> Result<Option<T>, ConfigError>
where
  T: FromStr + PartialOrd + From<u8>,
{
  let Ok(raw) = env::var(key) else {
    return Ok(None);
  };

  match raw.trim().parse::<T>() {
    Ok(v) if v >= T::from(1u8) => Ok(Some(v)),
    _ => Err(ConfigError::Invalid { key, value: raw }),
  }
}

/// Parse an optional week count in `1..=MAX_WEEKS`
fn weeks_var(key: &'static str) -> Result<Option<u32>, ConfigError> {
  match positive_var::<u32>(key)? {
    Some(weeks) if weeks > MAX_WEEKS => Err(ConfigError::Invalid { key, value: weeks.to_string() }),
    weeks => Ok(weeks),
  }
}
