//! Conviction scoring.
//!
//! Maps a canonical transaction to a conviction score via additive
//! adjustments over a baseline, then a hard clamp. The function is pure and
//! deterministic: no randomness, no external state, bit-for-bit reproducible
//! for identical inputs.
//!
//! ## Adjustments (defaults)
//!
//! - base 2.0
//! - Purchase/Award +1.5; Sale/Disposition -1.0; Other +0.0
//! - value > $10M +1.0; value > $1M +0.5 (highest tier wins)
//! - role contains "CEO" or "President" +0.5
//! - clamp to [0.0, 5.0]

use insider_alpha_core::{ScoringConfig, Transaction, TransactionCode};
use rust_decimal::Decimal;

/// Returns true if the role title contains any keyword, case-insensitively.
///
/// Substring matching is intentional: titles in filings are free text
/// ("Chief Executive Officer (CEO)", "Pres. & CEO", ...), so exact matching
/// would miss most of them.
#[must_use]
pub fn role_matches(role: &str, keywords: &[String]) -> bool {
    let role_lower = role.to_lowercase();
    keywords
        .iter()
        .any(|kw| !kw.is_empty() && role_lower.contains(&kw.to_lowercase()))
}

/// Value-tier adjustment for a transaction value.
///
/// Tiers are mutually exclusive and evaluated highest-first: a value above
/// the large threshold earns only the large bonus.
#[must_use]
pub fn value_tier_adjustment(value: Decimal, config: &ScoringConfig) -> f64 {
    if value > config.large_value_threshold {
        config.large_value_adjustment
    } else if value > config.mid_value_threshold {
        config.mid_value_adjustment
    } else {
        0.0
    }
}

/// Transaction-type adjustment for a canonical code.
#[must_use]
pub fn code_adjustment(code: TransactionCode, config: &ScoringConfig) -> f64 {
    match code {
        TransactionCode::Purchase | TransactionCode::Award => config.purchase_adjustment,
        TransactionCode::Sale | TransactionCode::Disposition => config.sale_adjustment,
        TransactionCode::Other => 0.0,
    }
}

/// Pure conviction scorer over a [`ScoringConfig`].
#[derive(Debug, Clone, Default)]
pub struct ConvictionScorer {
    config: ScoringConfig,
}

impl ConvictionScorer {
    /// Creates a scorer with the given configuration.
    #[must_use]
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Replaces the executive keyword list.
    #[must_use]
    pub fn with_executive_keywords(mut self, keywords: Vec<String>) -> Self {
        self.config.executive_keywords = keywords;
        self
    }

    /// Replaces the baseline score.
    #[must_use]
    pub fn with_base_score(mut self, base: f64) -> Self {
        self.config.base_score = base;
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores a transaction.
    ///
    /// The result is always within `[score_floor, score_ceiling]`; values
    /// outside the range are truncated, not rescaled.
    #[must_use]
    pub fn score(&self, txn: &Transaction) -> f64 {
        let mut score = self.config.base_score;

        score += code_adjustment(txn.transaction_code, &self.config);
        score += value_tier_adjustment(txn.transaction_value, &self.config);

        if role_matches(&txn.role, &self.config.executive_keywords) {
            score += self.config.executive_adjustment;
        }

        score.clamp(self.config.score_floor, self.config.score_ceiling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn txn(code: TransactionCode, value: Decimal, role: &str) -> Transaction {
        Transaction {
            insider_name: "Jane Doe".to_string(),
            role: role.to_string(),
            ticker: "AAPL".to_string(),
            transaction_date: NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            transaction_code: code,
            shares: dec!(1),
            price_per_share: value,
            transaction_value: value,
            direction: code.direction(),
            direct_ownership: true,
            code_flagged: false,
        }
    }

    // ============================================
    // Role Matching Tests
    // ============================================

    #[test]
    fn role_matches_is_substring_and_case_insensitive() {
        let keywords = vec!["CEO".to_string(), "President".to_string()];
        assert!(role_matches("Chief Executive Officer (CEO)", &keywords));
        assert!(role_matches("ceo & chairman", &keywords));
        assert!(role_matches("Vice President of Sales", &keywords));
        assert!(!role_matches("VP Engineering", &keywords));
        assert!(!role_matches("Director", &keywords));
    }

    #[test]
    fn role_matches_empty_keyword_list() {
        assert!(!role_matches("CEO", &[]));
    }

    // ============================================
    // Value Tier Tests
    // ============================================

    #[test]
    fn value_tiers_are_mutually_exclusive_highest_first() {
        let cfg = ScoringConfig::default();
        assert!((value_tier_adjustment(dec!(15000000), &cfg) - 1.0).abs() < f64::EPSILON);
        assert!((value_tier_adjustment(dec!(5000000), &cfg) - 0.5).abs() < f64::EPSILON);
        assert!((value_tier_adjustment(dec!(500000), &cfg) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn value_tier_boundaries_are_exclusive() {
        let cfg = ScoringConfig::default();
        // Exactly at a threshold stays in the lower tier
        assert!((value_tier_adjustment(dec!(10000000), &cfg) - 0.5).abs() < f64::EPSILON);
        assert!((value_tier_adjustment(dec!(1000000), &cfg) - 0.0).abs() < f64::EPSILON);
    }

    // ============================================
    // Scoring Tests
    // ============================================

    #[test]
    fn ceo_mega_purchase_clamps_at_ceiling() {
        // base 2.0 + purchase 1.5 + large value 1.0 + CEO 0.5 = 5.0
        let scorer = ConvictionScorer::default();
        let score = scorer.score(&txn(TransactionCode::Purchase, dec!(15000000), "CEO"));
        assert!((score - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn vp_sale_scores_one() {
        // base 2.0 - sale 1.0 + no tier + no role bonus = 1.0
        let scorer = ConvictionScorer::default();
        let score = scorer.score(&txn(TransactionCode::Sale, dec!(500000), "VP Engineering"));
        assert!((score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn award_scores_like_purchase() {
        let scorer = ConvictionScorer::default();
        let award = scorer.score(&txn(TransactionCode::Award, dec!(50000), "Director"));
        let purchase = scorer.score(&txn(TransactionCode::Purchase, dec!(50000), "Director"));
        assert!((award - purchase).abs() < f64::EPSILON);
        assert!((award - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn other_code_scores_base_plus_tiers_only() {
        let scorer = ConvictionScorer::default();
        let score = scorer.score(&txn(TransactionCode::Other, dec!(5000000), "Director"));
        // base 2.0 + 0.0 + mid tier 0.5 = 2.5
        assert!((score - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn disposition_with_president_role() {
        let scorer = ConvictionScorer::default();
        let score = scorer.score(&txn(
            TransactionCode::Disposition,
            dec!(2000000),
            "President",
        ));
        // base 2.0 - 1.0 + 0.5 + 0.5 = 2.0
        assert!((score - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn score_never_leaves_configured_range() {
        let scorer = ConvictionScorer::new(ScoringConfig {
            sale_adjustment: -100.0,
            ..ScoringConfig::default()
        });
        let low = scorer.score(&txn(TransactionCode::Sale, dec!(1), "Clerk"));
        assert!((low - 0.0).abs() < f64::EPSILON);

        let scorer = ConvictionScorer::new(ScoringConfig {
            purchase_adjustment: 100.0,
            ..ScoringConfig::default()
        });
        let high = scorer.score(&txn(TransactionCode::Purchase, dec!(1), "Clerk"));
        assert!((high - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn scoring_is_deterministic() {
        let scorer = ConvictionScorer::default();
        let t = txn(TransactionCode::Purchase, dec!(1234567), "CEO and President");
        let first = scorer.score(&t);
        let second = scorer.score(&t);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn builder_overrides_apply() {
        let scorer = ConvictionScorer::default()
            .with_base_score(1.0)
            .with_executive_keywords(vec!["CFO".to_string()]);

        let score = scorer.score(&txn(TransactionCode::Purchase, dec!(100), "CFO"));
        // base 1.0 + purchase 1.5 + CFO 0.5 = 3.0
        assert!((score - 3.0).abs() < f64::EPSILON);
    }
}
