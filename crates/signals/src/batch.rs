//! Batch processing pipeline.
//!
//! Runs raw records through normalize -> score -> classify with
//! partial-success semantics: a malformed record is collected as a failure
//! and the rest of the batch continues. Correlation across many tickers
//! fans out to a task per ticker purely as a performance optimization -
//! every ticker is independent and the merged output is sorted
//! deterministically, so concurrency never changes the result.

use crate::classifier::{score_and_classify, SignalClassifier};
use crate::correlator::SentimentCorrelator;
use crate::normalizer::normalize;
use insider_alpha_core::{
    CoreError, CorrelationConfig, CorrelationPair, EngineConfig, RawTransaction,
    ScoredTransaction, SentimentPoint,
};
use std::collections::HashMap;

/// A record that failed normalization, with its position in the input batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFailure {
    /// Index of the record in the input slice
    pub index: usize,
    /// The record-level error
    pub error: CoreError,
}

/// Summary counts for a processed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    /// Records in the input batch
    pub total: usize,
    /// Records successfully scored
    pub processed: usize,
    /// Records rejected as malformed
    pub failed: usize,
}

/// Partial-success result of scoring a raw batch.
///
/// Failures are collected alongside successes, never silently dropped and
/// never aborting the batch.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Successfully scored transactions, in input order
    pub scored: Vec<ScoredTransaction>,
    /// Per-record failures, in input order
    pub failures: Vec<RecordFailure>,
}

impl BatchOutcome {
    /// Summary counts for this batch.
    #[must_use]
    pub fn stats(&self) -> BatchStats {
        BatchStats {
            total: self.scored.len() + self.failures.len(),
            processed: self.scored.len(),
            failed: self.failures.len(),
        }
    }
}

/// Normalizes, scores, and classifies a batch of raw records.
///
/// One bad record never aborts the rest: failures are logged and collected
/// into the outcome next to the successes.
#[must_use]
pub fn process_batch(raws: &[RawTransaction], config: &EngineConfig) -> BatchOutcome {
    let scorer = crate::scorer::ConvictionScorer::new(config.scoring.clone());
    let classifier = SignalClassifier::new(config.classifier.clone());

    let mut scored = Vec::with_capacity(raws.len());
    let mut failures = Vec::new();

    for (index, raw) in raws.iter().enumerate() {
        match normalize(raw) {
            Ok(txn) => scored.push(score_and_classify(&scorer, &classifier, txn)),
            Err(error) => {
                tracing::warn!(
                    index,
                    ticker = %raw.ticker,
                    %error,
                    "skipping malformed record"
                );
                failures.push(RecordFailure { index, error });
            }
        }
    }

    tracing::debug!(
        total = raws.len(),
        processed = scored.len(),
        failed = failures.len(),
        "batch scored"
    );

    BatchOutcome { scored, failures }
}

/// Correlates scored transactions with sentiment, fanning out per ticker.
///
/// Each ticker's transactions and sentiment series are independent, so they
/// run as separate tasks. Results are merged and sorted by (ticker, date,
/// insider) so the output is identical to a sequential pass regardless of
/// task completion order.
pub async fn correlate_by_ticker(
    transactions: Vec<ScoredTransaction>,
    sentiment: Vec<SentimentPoint>,
    config: CorrelationConfig,
) -> Vec<CorrelationPair> {
    let mut txns_by_ticker: HashMap<String, Vec<ScoredTransaction>> = HashMap::new();
    for txn in transactions {
        txns_by_ticker
            .entry(txn.ticker().to_string())
            .or_default()
            .push(txn);
    }

    let mut sentiment_by_ticker: HashMap<String, Vec<SentimentPoint>> = HashMap::new();
    for point in sentiment {
        sentiment_by_ticker
            .entry(point.ticker.clone())
            .or_default()
            .push(point);
    }

    let mut handles = Vec::new();
    for (ticker, txns) in txns_by_ticker {
        let series = sentiment_by_ticker.remove(&ticker).unwrap_or_default();
        if series.is_empty() {
            // No sentiment coverage for this ticker - expected, no pairs
            continue;
        }
        let correlator = SentimentCorrelator::new(config.clone());
        handles.push(tokio::spawn(async move {
            correlator.correlate(&txns, &series)
        }));
    }

    let mut pairs = Vec::new();
    for handle in handles {
        match handle.await {
            Ok(ticker_pairs) => pairs.extend(ticker_pairs),
            Err(e) => tracing::warn!(error = %e, "correlation task panicked"),
        }
    }

    pairs.sort_by(|a, b| {
        a.transaction
            .ticker()
            .cmp(b.transaction.ticker())
            .then_with(|| a.transaction.date().cmp(&b.transaction.date()))
            .then_with(|| {
                a.transaction
                    .transaction
                    .insider_name
                    .cmp(&b.transaction.transaction.insider_name)
            })
    });
    pairs
}
