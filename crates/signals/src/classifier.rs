//! Signal classification.
//!
//! Maps a conviction score to a discrete trading signal. Sale activity is an
//! override, not a band: an insider selling is never presented as a buy
//! signal no matter what the numeric score says. The remaining bands are
//! lower-edge inclusive and upper-edge exclusive, so the 2.5/3.0/4.0
//! boundaries have no gap and no overlap.

use crate::scorer::ConvictionScorer;
use insider_alpha_core::{ClassifierConfig, ScoredTransaction, Signal, Transaction};

/// Threshold-band classifier over a [`ClassifierConfig`].
#[derive(Debug, Clone, Default)]
pub struct SignalClassifier {
    config: ClassifierConfig,
}

impl SignalClassifier {
    /// Creates a classifier with the given thresholds.
    #[must_use]
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classifies a scored transaction.
    ///
    /// Sale and Disposition codes return `Sell` regardless of the score;
    /// everything else falls through the threshold bands.
    #[must_use]
    pub fn classify(&self, score: f64, txn: &Transaction) -> Signal {
        if txn.transaction_code.is_sale_activity() {
            return Signal::Sell;
        }

        if score >= self.config.strong_buy_threshold {
            Signal::StrongBuy
        } else if score >= self.config.buy_threshold {
            Signal::Buy
        } else if score >= self.config.weak_buy_threshold {
            Signal::WeakBuy
        } else {
            Signal::Hold
        }
    }
}

/// Scores and classifies a transaction in one step.
///
/// This is the canonical way to produce a [`ScoredTransaction`]; the result
/// is immutable thereafter.
#[must_use]
pub fn score_and_classify(
    scorer: &ConvictionScorer,
    classifier: &SignalClassifier,
    transaction: Transaction,
) -> ScoredTransaction {
    let conviction_score = scorer.score(&transaction);
    let signal = classifier.classify(conviction_score, &transaction);
    ScoredTransaction {
        transaction,
        conviction_score,
        signal,
    }
}
