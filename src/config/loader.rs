//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::calculation::ThresholdBreakPolicy;
use crate::error::{EngineError, EngineResult};

use super::types::{PayrollConfig, PayrollMetadata, RateSchedule, RateTable};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/kr/
/// ├── payroll.yaml        # Regime metadata
/// ├── break_policy.yaml   # Caller-side break rule
/// └── rates/
///     └── 2025-01-01.yaml # Rates effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use wage_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/kr").unwrap();
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let rates = loader.get_rate_table(date).unwrap();
/// println!("Pension rate: {}", rates.national_pension);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails if any required file is missing, contains invalid YAML, holds a
    /// rate table or break policy outside its valid range, or if two rate
    /// files take effect on the same date.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PayrollMetadata>(&path.join("payroll.yaml"))?;
        let break_policy =
            Self::load_yaml::<ThresholdBreakPolicy>(&path.join("break_policy.yaml"))?;
        break_policy.validate()?;
        let schedules = Self::load_rates(&path.join("rates"))?;

        info!(
            code = %metadata.code,
            version = %metadata.version,
            schedules = schedules.len(),
            "Loaded payroll configuration"
        );

        Ok(Self {
            config: PayrollConfig::new(metadata, break_policy, schedules)?,
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads and validates all rate files from the rates directory.
    ///
    /// The result is sorted by effective date. Two files sharing a date are
    /// rejected, since which one applied would depend on directory order.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<RateSchedule>> {
        let rates_dir_str = rates_dir.display().to_string();

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut loaded: Vec<(RateSchedule, PathBuf)> = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let schedule = Self::load_yaml::<RateSchedule>(&path)?;
                schedule.rates.validate()?;
                debug!(
                    file = %path.display(),
                    effective_date = %schedule.effective_date,
                    "Loaded rate schedule"
                );
                loaded.push((schedule, path));
            }
        }

        if loaded.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        loaded.sort_by(|(a, a_path), (b, b_path)| {
            a.effective_date
                .cmp(&b.effective_date)
                .then_with(|| a_path.cmp(b_path))
        });

        if let Some(pair) = loaded
            .windows(2)
            .find(|pair| pair[0].0.effective_date == pair[1].0.effective_date)
        {
            return Err(EngineError::ConfigParseError {
                path: rates_dir_str,
                message: format!(
                    "rate files {} and {} both take effect on {}",
                    pair[0].1.display(),
                    pair[1].1.display(),
                    pair[0].0.effective_date
                ),
            });
        }

        Ok(loaded.into_iter().map(|(schedule, _)| schedule).collect())
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the payroll metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        self.config.metadata()
    }

    /// Returns the configured break policy.
    pub fn break_policy(&self) -> &ThresholdBreakPolicy {
        self.config.break_policy()
    }

    /// Gets the rate table in force on a given date.
    ///
    /// Returns the most recent schedule effective on or before `date`, or
    /// `RateNotFound` if every schedule starts later.
    pub fn get_rate_table(&self, date: NaiveDate) -> EngineResult<&RateTable> {
        self.config
            .schedules()
            .iter()
            .rfind(|schedule| schedule.effective_date <= date)
            .map(|schedule| &schedule.rates)
            .ok_or(EngineError::RateNotFound { date })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tempfile::TempDir;

    fn config_path() -> &'static str {
        "./config/kr"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().code, "KR");
        assert_eq!(loader.metadata().currency, "KRW");
    }

    #[test]
    fn test_break_policy_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let policy = loader.break_policy();

        assert_eq!(policy.threshold_hours, dec("8"));
        assert_eq!(policy.long_break_minutes, 30);
        assert_eq!(policy.short_break_minutes, 0);
    }

    #[test]
    fn test_get_rate_table_for_2025() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let rates = loader.get_rate_table(date).unwrap();

        assert_eq!(*rates, RateTable::STATUTORY);
    }

    #[test]
    fn test_get_rate_table_picks_latest_effective_schedule() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let rates = loader.get_rate_table(date).unwrap();

        assert_eq!(rates.national_pension, dec("0.0475"));
        assert_eq!(rates.health_insurance, dec("0.03595"));
    }

    #[test]
    fn test_rate_not_found_for_date_before_effective() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        match loader.get_rate_table(date) {
            Err(EngineError::RateNotFound { date: d }) => assert_eq!(d, date),
            other => panic!("Expected RateNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    const RATES_2025: &str = r#"
effective_date: 2025-01-01
rates:
  national_pension: "0.045"
  health_insurance: "0.03545"
  long_term_care: "0.1281"
  employment_insurance: "0.009"
  overtime_multiplier: "1.5"
  weekly_holiday_hours: "8"
"#;

    /// Writes a config directory with the given break policy and rate files.
    fn write_config(break_policy: &str, rate_files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("payroll.yaml"),
            "code: KR\nname: Test\ncurrency: KRW\nversion: \"1\"\n",
        )
        .unwrap();
        fs::write(dir.path().join("break_policy.yaml"), break_policy).unwrap();
        fs::create_dir(dir.path().join("rates")).unwrap();
        for (name, content) in rate_files {
            fs::write(dir.path().join("rates").join(name), content).unwrap();
        }
        dir
    }

    const DEFAULT_BREAK_POLICY: &str =
        "threshold_hours: \"8\"\nlong_break_minutes: 30\nshort_break_minutes: 0\n";

    #[test]
    fn test_duplicate_effective_date_is_rejected() {
        let doubled = RATES_2025.replace("\"0.045\"", "\"0.09\"");
        let dir = write_config(
            DEFAULT_BREAK_POLICY,
            &[("a.yaml", RATES_2025), ("b.yaml", doubled.as_str())],
        );

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("2025-01-01"), "message: {}", message);
                assert!(message.contains("a.yaml"), "message: {}", message);
                assert!(message.contains("b.yaml"), "message: {}", message);
            }
            other => panic!("Expected ConfigParseError error, got {:?}", other),
        }
    }

    #[test]
    fn test_distinct_effective_dates_load_in_date_order() {
        let later = RATES_2025
            .replace("2025-01-01", "2026-01-01")
            .replace("\"0.045\"", "\"0.0475\"");
        // File names sort opposite to their dates.
        let dir = write_config(
            DEFAULT_BREAK_POLICY,
            &[("a.yaml", later.as_str()), ("b.yaml", RATES_2025)],
        );

        let loader = ConfigLoader::load(dir.path()).unwrap();
        let dates: Vec<NaiveDate> = loader
            .config()
            .schedules()
            .iter()
            .map(|s| s.effective_date)
            .collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
            ]
        );
        let rates = loader
            .get_rate_table(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
            .unwrap();
        assert_eq!(rates.national_pension, dec("0.045"));
    }

    #[test]
    fn test_negative_break_threshold_is_rejected() {
        let dir = write_config(
            "threshold_hours: \"-1\"\nlong_break_minutes: 30\nshort_break_minutes: 0\n",
            &[("2025-01-01.yaml", RATES_2025)],
        );

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::InvalidBreakPolicy { field, .. }) => {
                assert_eq!(field, "threshold_hours")
            }
            other => panic!("Expected InvalidBreakPolicy error, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_rate_file_is_rejected() {
        let bad = RATES_2025.replace("\"0.03545\"", "\"3.545\"");
        let dir = write_config(DEFAULT_BREAK_POLICY, &[("2025-01-01.yaml", bad.as_str())]);

        assert!(matches!(
            ConfigLoader::load(dir.path()),
            Err(EngineError::InvalidRateTable { .. })
        ));
    }

    #[test]
    fn test_from_config_wraps_config() {
        let loaded = ConfigLoader::load(config_path()).unwrap();
        let wrapped = ConfigLoader::from_config(loaded.config().clone());
        assert_eq!(wrapped.metadata().code, "KR");
    }
}
