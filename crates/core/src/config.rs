//! Engine configuration with documented defaults.
//!
//! Every tuning constant in the scoring, classification, and correlation
//! logic lives here rather than being hardcoded: the heuristics came from a
//! research workflow where threshold tuning is an explicit goal. Defaults
//! reproduce the documented baseline behavior exactly.

use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Conviction scorer tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Baseline score before adjustments
    pub base_score: f64,
    /// Adjustment for Purchase and Award codes
    pub purchase_adjustment: f64,
    /// Adjustment for Sale and Disposition codes (negative)
    pub sale_adjustment: f64,
    /// Transaction value above which the large-value bonus applies
    pub large_value_threshold: Decimal,
    /// Bonus for values above `large_value_threshold`
    pub large_value_adjustment: f64,
    /// Transaction value above which the mid-value bonus applies
    pub mid_value_threshold: Decimal,
    /// Bonus for values above `mid_value_threshold` (and at or below the
    /// large threshold - tiers are mutually exclusive)
    pub mid_value_adjustment: f64,
    /// Case-insensitive substrings of the role title that earn the
    /// executive bonus. Substring matching is deliberate: role strings are
    /// free text from filings, not a controlled vocabulary.
    pub executive_keywords: Vec<String>,
    /// Bonus when any executive keyword matches
    pub executive_adjustment: f64,
    /// Hard floor of the final score (clamp, not rescale)
    pub score_floor: f64,
    /// Hard ceiling of the final score (clamp, not rescale)
    pub score_ceiling: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 2.0,
            purchase_adjustment: 1.5,
            sale_adjustment: -1.0,
            large_value_threshold: Decimal::new(10_000_000, 0),
            large_value_adjustment: 1.0,
            mid_value_threshold: Decimal::new(1_000_000, 0),
            mid_value_adjustment: 0.5,
            executive_keywords: vec!["CEO".to_string(), "President".to_string()],
            executive_adjustment: 0.5,
            score_floor: 0.0,
            score_ceiling: 5.0,
        }
    }
}

impl ScoringConfig {
    /// Validates internal consistency.
    ///
    /// # Errors
    /// Returns `CoreError::Configuration` on inverted clamp bounds or
    /// inverted value tiers.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.score_floor >= self.score_ceiling {
            return Err(CoreError::Configuration(format!(
                "score_floor ({}) must be below score_ceiling ({})",
                self.score_floor, self.score_ceiling
            )));
        }
        if self.large_value_threshold < Decimal::ZERO {
            return Err(CoreError::Configuration(
                "value thresholds must be non-negative".to_string(),
            ));
        }
        if self.mid_value_threshold >= self.large_value_threshold {
            return Err(CoreError::Configuration(format!(
                "mid_value_threshold ({}) must be below large_value_threshold ({})",
                self.mid_value_threshold, self.large_value_threshold
            )));
        }
        Ok(())
    }
}

/// Signal classifier thresholds.
///
/// Bands are lower-edge inclusive, upper-edge exclusive: score >= strong is
/// StrongBuy, [buy, strong) is Buy, [weak, buy) is WeakBuy, below weak is
/// Hold. Sale activity overrides all of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Score at or above which a non-sale transaction is StrongBuy
    pub strong_buy_threshold: f64,
    /// Score at or above which a non-sale transaction is Buy
    pub buy_threshold: f64,
    /// Score at or above which a non-sale transaction is WeakBuy
    pub weak_buy_threshold: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            strong_buy_threshold: 4.0,
            buy_threshold: 3.0,
            weak_buy_threshold: 2.5,
        }
    }
}

impl ClassifierConfig {
    /// Validates threshold ordering (weak < buy < strong).
    ///
    /// # Errors
    /// Returns `CoreError::Configuration` if the bands would gap or overlap.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(self.weak_buy_threshold < self.buy_threshold
            && self.buy_threshold < self.strong_buy_threshold)
        {
            return Err(CoreError::Configuration(format!(
                "classifier thresholds must be strictly ordered: weak ({}) < buy ({}) < strong ({})",
                self.weak_buy_threshold, self.buy_threshold, self.strong_buy_threshold
            )));
        }
        Ok(())
    }
}

/// Sentiment correlation tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationConfig {
    /// Maximum |day offset| between transaction and sentiment point
    pub window_days: i64,
    /// Sentiment dead-zone: |score| below this classifies as Neutral
    pub neutral_band: f64,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            window_days: 30,
            neutral_band: 0.05,
        }
    }
}

impl CorrelationConfig {
    /// Validates window and dead-zone bounds.
    ///
    /// # Errors
    /// Returns `CoreError::Configuration` on a non-positive window or a
    /// dead-zone outside [0, 1).
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.window_days <= 0 {
            return Err(CoreError::Configuration(format!(
                "window_days must be positive, got {}",
                self.window_days
            )));
        }
        if !(0.0..1.0).contains(&self.neutral_band) {
            return Err(CoreError::Configuration(format!(
                "neutral_band must be in [0.0, 1.0), got {}",
                self.neutral_band
            )));
        }
        Ok(())
    }
}

/// Aggregation reporter tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Score at or above which a transaction counts as high-conviction
    pub high_conviction_threshold: f64,
    /// Number of tickers listed in the top-by-value ranking
    pub top_tickers: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            high_conviction_threshold: 4.0,
            top_tickers: 10,
        }
    }
}

impl ReportConfig {
    /// Validates report parameters.
    ///
    /// # Errors
    /// Returns `CoreError::Configuration` if `top_tickers` is zero.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.top_tickers == 0 {
            return Err(CoreError::Configuration(
                "top_tickers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scoring: ScoringConfig,
    pub classifier: ClassifierConfig,
    pub correlation: CorrelationConfig,
    pub report: ReportConfig,
}

impl EngineConfig {
    /// Validates every section. Called once at startup; configuration errors
    /// are fatal before any record is processed.
    ///
    /// # Errors
    /// Returns the first `CoreError::Configuration` found.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.scoring.validate()?;
        self.classifier.validate()?;
        self.correlation.validate()?;
        self.report.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // ============================================
    // Default Tests
    // ============================================

    #[test]
    fn default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn default_scoring_matches_documented_baseline() {
        let cfg = ScoringConfig::default();
        assert!((cfg.base_score - 2.0).abs() < f64::EPSILON);
        assert!((cfg.purchase_adjustment - 1.5).abs() < f64::EPSILON);
        assert!((cfg.sale_adjustment - (-1.0)).abs() < f64::EPSILON);
        assert_eq!(cfg.large_value_threshold, dec!(10000000));
        assert_eq!(cfg.mid_value_threshold, dec!(1000000));
        assert_eq!(cfg.executive_keywords, vec!["CEO", "President"]);
    }

    #[test]
    fn default_classifier_thresholds() {
        let cfg = ClassifierConfig::default();
        assert!((cfg.strong_buy_threshold - 4.0).abs() < f64::EPSILON);
        assert!((cfg.buy_threshold - 3.0).abs() < f64::EPSILON);
        assert!((cfg.weak_buy_threshold - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn default_correlation_window_and_band() {
        let cfg = CorrelationConfig::default();
        assert_eq!(cfg.window_days, 30);
        assert!((cfg.neutral_band - 0.05).abs() < f64::EPSILON);
    }

    // ============================================
    // Validation Tests
    // ============================================

    #[test]
    fn inverted_clamp_bounds_rejected() {
        let cfg = ScoringConfig {
            score_floor: 5.0,
            score_ceiling: 5.0,
            ..ScoringConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn inverted_value_tiers_rejected() {
        let cfg = ScoringConfig {
            mid_value_threshold: dec!(20000000),
            ..ScoringConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn misordered_classifier_thresholds_rejected() {
        let cfg = ClassifierConfig {
            strong_buy_threshold: 3.0,
            buy_threshold: 4.0,
            ..ClassifierConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn equal_classifier_thresholds_rejected() {
        let cfg = ClassifierConfig {
            buy_threshold: 2.5,
            ..ClassifierConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn non_positive_window_rejected() {
        let cfg = CorrelationConfig {
            window_days: 0,
            ..CorrelationConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = CorrelationConfig {
            window_days: -5,
            ..CorrelationConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn neutral_band_out_of_range_rejected() {
        let cfg = CorrelationConfig {
            neutral_band: -0.01,
            ..CorrelationConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = CorrelationConfig {
            neutral_band: 1.0,
            ..CorrelationConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_top_tickers_rejected() {
        let cfg = ReportConfig {
            top_tickers: 0,
            ..ReportConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn engine_validate_reports_first_bad_section() {
        let cfg = EngineConfig {
            correlation: CorrelationConfig {
                window_days: 0,
                ..CorrelationConfig::default()
            },
            ..EngineConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("window_days"));
    }

    // ============================================
    // Serde Tests
    // ============================================

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: EngineConfig =
            serde_json::from_str(r#"{"correlation": {"window_days": 14}}"#).unwrap();
        assert_eq!(cfg.correlation.window_days, 14);
        assert!((cfg.correlation.neutral_band - 0.05).abs() < f64::EPSILON);
        assert!((cfg.classifier.strong_buy_threshold - 4.0).abs() < f64::EPSILON);
    }
}
