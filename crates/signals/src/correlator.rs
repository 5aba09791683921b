//! Sentiment-insider correlation.
//!
//! Joins scored transactions with earnings-call sentiment in time: each
//! transaction is matched to the sentiment point with the smallest absolute
//! day offset within the configured window. A transaction with no point in
//! window simply yields no pair - missing sentiment coverage is the common
//! case, not an error.

use insider_alpha_core::{
    CorrelationConfig, CorrelationPair, Relationship, ScoredTransaction, SentimentPoint,
    TradeDirection,
};

/// Classifies the relationship between a sentiment score and a trade
/// direction.
///
/// Scores inside the dead-zone around zero are `Neutral`; agreement in sign
/// is aligned, disagreement is `Contrarian` - the highest-interest case,
/// since it suggests the insider knows something the call did not convey.
#[must_use]
pub fn classify_relationship(
    sentiment_score: f64,
    direction: TradeDirection,
    neutral_band: f64,
) -> Relationship {
    if sentiment_score.abs() < neutral_band || sentiment_score == 0.0 {
        return Relationship::Neutral;
    }

    match (sentiment_score > 0.0, direction) {
        (true, TradeDirection::Acquired) => Relationship::AlignedPositive,
        (false, TradeDirection::Disposed) => Relationship::AlignedNegative,
        _ => Relationship::Contrarian,
    }
}

/// Time-window correlator over a [`CorrelationConfig`].
#[derive(Debug, Clone, Default)]
pub struct SentimentCorrelator {
    config: CorrelationConfig,
}

impl SentimentCorrelator {
    /// Creates a correlator with the given configuration.
    #[must_use]
    pub fn new(config: CorrelationConfig) -> Self {
        Self { config }
    }

    /// Sets the matching window in days.
    #[must_use]
    pub fn with_window_days(mut self, days: i64) -> Self {
        self.config.window_days = days;
        self
    }

    /// Sets the neutral dead-zone.
    #[must_use]
    pub fn with_neutral_band(mut self, band: f64) -> Self {
        self.config.neutral_band = band;
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &CorrelationConfig {
        &self.config
    }

    /// Matches one transaction against a sentiment series.
    ///
    /// Picks the point with the smallest |day offset| within the window;
    /// ties on offset prefer the earlier date, so the result is stable
    /// regardless of series ordering. Points for other tickers are ignored.
    /// Returns `None` when nothing falls inside the window.
    #[must_use]
    pub fn match_transaction(
        &self,
        txn: &ScoredTransaction,
        series: &[SentimentPoint],
    ) -> Option<CorrelationPair> {
        let mut best: Option<(&SentimentPoint, i64)> = None;

        for point in series {
            if point.ticker != txn.ticker() {
                continue;
            }
            let offset = (point.date - txn.date()).num_days();
            if offset.abs() > self.config.window_days {
                continue;
            }

            let closer = match best {
                None => true,
                Some((best_point, best_offset)) => {
                    offset.abs() < best_offset.abs()
                        || (offset.abs() == best_offset.abs() && point.date < best_point.date)
                }
            };
            if closer {
                best = Some((point, offset));
            }
        }

        best.map(|(point, day_offset)| CorrelationPair {
            transaction: txn.clone(),
            sentiment: point.clone(),
            day_offset,
            relationship: classify_relationship(
                point.score,
                txn.transaction.direction,
                self.config.neutral_band,
            ),
        })
    }

    /// Correlates a set of scored transactions with a sentiment series.
    ///
    /// Transactions without an in-window point are dropped from the output
    /// (absence of sentiment data is expected and common). Output order
    /// follows the input transaction order.
    #[must_use]
    pub fn correlate(
        &self,
        transactions: &[ScoredTransaction],
        sentiment: &[SentimentPoint],
    ) -> Vec<CorrelationPair> {
        transactions
            .iter()
            .filter_map(|txn| self.match_transaction(txn, sentiment))
            .collect()
    }
}
