//! Aggregation reporting.
//!
//! Pure, stateless summarization over scored transactions and, optionally,
//! correlation pairs. Every report is recomputed fresh from its inputs; the
//! reduction is commutative, so a report over parallel-produced batches is
//! identical regardless of the order records arrive in.

use chrono::Datelike;
use insider_alpha_core::{
    CorrelationPair, Relationship, ReportConfig, ScoredTransaction, Signal,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Calendar bucketing granularity for the time grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeBucket {
    /// ISO week, keyed "2025-W12"
    Week,
    /// Calendar month, keyed "2025-03"
    Month,
}

impl TimeBucket {
    /// Formats the bucket key for a date.
    #[must_use]
    pub fn key(self, date: chrono::NaiveDate) -> String {
        match self {
            Self::Week => {
                let iso = date.iso_week();
                format!("{}-W{:02}", iso.year(), iso.week())
            }
            Self::Month => format!("{}-{:02}", date.year(), date.month()),
        }
    }
}

/// Count and value sum for one grouping key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStats {
    /// Number of transactions in the group
    pub count: u64,
    /// Sum of transaction values in the group
    pub total_value: Decimal,
}

impl GroupStats {
    fn add(&mut self, value: Decimal) {
        self.count += 1;
        self.total_value += value;
    }
}

/// Distribution statistics over a batch of scored transactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateReport {
    /// Total number of transactions summarized
    pub total_transactions: u64,
    /// Sum of all transaction values
    pub total_value: Decimal,
    /// Mean conviction score (0.0 for an empty input)
    pub average_conviction: f64,
    /// Transactions at or above the high-conviction threshold
    pub high_conviction_count: u64,
    /// Counts and value sums per signal
    pub by_signal: BTreeMap<Signal, GroupStats>,
    /// Counts and value sums per ticker
    pub by_ticker: BTreeMap<String, GroupStats>,
    /// Counts and value sums per calendar bucket
    pub by_period: BTreeMap<String, GroupStats>,
    /// Tickers ranked by total value, largest first
    pub top_tickers: Vec<(String, Decimal)>,
    /// Relationship counts over correlation pairs, when supplied
    pub relationships: BTreeMap<Relationship, u64>,
}

impl AggregateReport {
    /// Summarizes a batch of scored transactions.
    ///
    /// Empty input produces a valid zeroed report, never an error. Pass the
    /// correlation pairs when sentiment data was available; the relationship
    /// distribution stays empty otherwise.
    #[must_use]
    pub fn generate(
        transactions: &[ScoredTransaction],
        pairs: Option<&[CorrelationPair]>,
        bucket: TimeBucket,
        config: &ReportConfig,
    ) -> Self {
        let mut by_signal: BTreeMap<Signal, GroupStats> = BTreeMap::new();
        let mut by_ticker: BTreeMap<String, GroupStats> = BTreeMap::new();
        let mut by_period: BTreeMap<String, GroupStats> = BTreeMap::new();

        let mut total_value = Decimal::ZERO;
        let mut conviction_sum = 0.0;
        let mut high_conviction_count = 0;

        for scored in transactions {
            let value = scored.transaction.transaction_value;
            total_value += value;
            conviction_sum += scored.conviction_score;
            if scored.conviction_score >= config.high_conviction_threshold {
                high_conviction_count += 1;
            }

            by_signal.entry(scored.signal).or_default().add(value);
            by_ticker
                .entry(scored.ticker().to_string())
                .or_default()
                .add(value);
            by_period
                .entry(bucket.key(scored.date()))
                .or_default()
                .add(value);
        }

        let average_conviction = if transactions.is_empty() {
            0.0
        } else {
            conviction_sum / transactions.len() as f64
        };

        let mut ranked: Vec<(String, Decimal)> = by_ticker
            .iter()
            .map(|(ticker, stats)| (ticker.clone(), stats.total_value))
            .collect();
        // Descending by value; ticker breaks ties so the ranking is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(config.top_tickers);

        let mut relationships: BTreeMap<Relationship, u64> = BTreeMap::new();
        if let Some(pairs) = pairs {
            for pair in pairs {
                *relationships.entry(pair.relationship).or_insert(0) += 1;
            }
        }

        Self {
            total_transactions: transactions.len() as u64,
            total_value,
            average_conviction,
            high_conviction_count,
            by_signal,
            by_ticker,
            by_period,
            top_tickers: ranked,
            relationships,
        }
    }

    /// Count for one signal, zero when absent.
    #[must_use]
    pub fn signal_count(&self, signal: Signal) -> u64 {
        self.by_signal.get(&signal).map_or(0, |s| s.count)
    }

    /// Count for one relationship, zero when absent.
    #[must_use]
    pub fn relationship_count(&self, relationship: Relationship) -> u64 {
        self.relationships.get(&relationship).copied().unwrap_or(0)
    }
}
