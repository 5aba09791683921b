//! Canonical record types for insider-transaction analysis.
//!
//! These are the shapes exchanged between the external filing parser, the
//! scoring engine, and the downstream reporting layer. Transaction codes and
//! signals are closed enumerations rather than free strings; role titles stay
//! free text because Form 4 filings do not use a controlled vocabulary.

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Form 4 transaction code, collapsed to the categories the scorer cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionCode {
    /// Open-market or private purchase (code P)
    Purchase,
    /// Grant, award, or other acquisition (code A)
    Award,
    /// Open-market or private sale (code S)
    Sale,
    /// Disposition to the issuer or otherwise (code D)
    Disposition,
    /// Any other code (F, M, C, G, ...) - scored neutrally
    Other,
}

impl TransactionCode {
    /// Maps a raw single-letter Form 4 code to a canonical category.
    ///
    /// Unknown codes map to `Other`; the normalizer flags the record rather
    /// than failing the batch.
    #[must_use]
    pub fn from_form4(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "P" => Self::Purchase,
            "A" => Self::Award,
            "S" => Self::Sale,
            "D" => Self::Disposition,
            _ => Self::Other,
        }
    }

    /// Returns true if the raw code maps to a known category.
    #[must_use]
    pub fn is_known(code: &str) -> bool {
        !matches!(Self::from_form4(code), Self::Other)
    }

    /// The trade direction implied by this code.
    ///
    /// `Other` codes carry no acquisition evidence and are treated as
    /// disposed-neutral; the normalizer marks them flagged.
    #[must_use]
    pub const fn direction(self) -> TradeDirection {
        match self {
            Self::Purchase | Self::Award => TradeDirection::Acquired,
            Self::Sale | Self::Disposition | Self::Other => TradeDirection::Disposed,
        }
    }

    /// Returns true for explicit sale activity (codes S and D).
    ///
    /// The classifier forces `Sell` for these regardless of the numeric
    /// conviction score.
    #[must_use]
    pub const fn is_sale_activity(self) -> bool {
        matches!(self, Self::Sale | Self::Disposition)
    }
}

/// Whether shares were acquired or disposed in a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeDirection {
    /// Insider increased their position
    Acquired,
    /// Insider decreased their position
    Disposed,
}

impl TradeDirection {
    /// Returns true if this is an acquisition.
    #[must_use]
    pub const fn is_acquisition(self) -> bool {
        matches!(self, Self::Acquired)
    }
}

/// Discrete trading signal derived from a conviction score.
///
/// Variants are ordered strongest-buy first so report groupings sort
/// naturally.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Signal {
    StrongBuy,
    Buy,
    WeakBuy,
    Hold,
    Sell,
}

impl Signal {
    /// Human-readable label as used in exported reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StrongBuy => "Strong Buy",
            Self::Buy => "Buy",
            Self::WeakBuy => "Weak Buy",
            Self::Hold => "Hold",
            Self::Sell => "Sell",
        }
    }

    /// Returns true for any buy-side signal.
    #[must_use]
    pub const fn is_buy_side(self) -> bool {
        matches!(self, Self::StrongBuy | Self::Buy | Self::WeakBuy)
    }

    /// All signal variants, for exhaustive report keys.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [Self::StrongBuy, Self::Buy, Self::WeakBuy, Self::Hold, Self::Sell]
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw transaction record as produced by an upstream Form 4 parser.
///
/// All fields are strings because filing parsers emit text; the normalizer is
/// responsible for validation and type conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTransaction {
    /// Reporting insider's name
    pub insider_name: String,
    /// Insider's role/title as free text (e.g. "CEO", "VP Engineering")
    pub role: String,
    /// Issuer ticker symbol
    pub ticker: String,
    /// Transaction date string (several formats accepted)
    pub transaction_date: String,
    /// Single-letter Form 4 transaction code
    pub transaction_code: String,
    /// Number of shares, as text
    pub shares: String,
    /// Price per share, as text
    pub price_per_share: String,
    /// Total value if the filing supplies one; derived otherwise
    pub total_value: Option<String>,
    /// Ownership nature: "D" direct, "I" indirect
    pub ownership: Option<String>,
}

/// Canonical, validated insider transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Reporting insider's name
    pub insider_name: String,
    /// Role/title free text from the filing
    pub role: String,
    /// Issuer ticker symbol
    pub ticker: String,
    /// Transaction date
    pub transaction_date: NaiveDate,
    /// Canonical transaction code
    pub transaction_code: TransactionCode,
    /// Share count, non-negative
    pub shares: Decimal,
    /// Price per share, non-negative
    pub price_per_share: Decimal,
    /// Total value: shares * price unless the filing supplied one
    pub transaction_value: Decimal,
    /// Derived trade direction
    pub direction: TradeDirection,
    /// True when ownership is direct ("D")
    pub direct_ownership: bool,
    /// True when the raw code was unknown and mapped to `Other`
    pub code_flagged: bool,
}

/// A transaction with its conviction score and classified signal.
///
/// Immutable once created by the scorer and classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTransaction {
    /// The underlying canonical transaction
    pub transaction: Transaction,
    /// Conviction score in [0.0, 5.0]
    pub conviction_score: f64,
    /// Classified trading signal
    pub signal: Signal,
}

impl ScoredTransaction {
    /// Ticker of the underlying transaction.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.transaction.ticker
    }

    /// Date of the underlying transaction.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.transaction.transaction_date
    }
}

/// Externally supplied earnings-call sentiment for one company on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentPoint {
    /// Issuer ticker symbol
    pub ticker: String,
    /// Date of the earnings call / transcript
    pub date: NaiveDate,
    /// Polarity score in [-1.0, 1.0]
    pub score: f64,
}

impl SentimentPoint {
    /// Creates a sentiment point with range validation.
    ///
    /// # Errors
    /// Returns error if score is outside [-1.0, 1.0].
    pub fn new(ticker: impl Into<String>, date: NaiveDate, score: f64) -> Result<Self> {
        if !(-1.0..=1.0).contains(&score) {
            anyhow::bail!("sentiment score must be in [-1.0, 1.0], got {score}");
        }
        Ok(Self {
            ticker: ticker.into(),
            date,
            score,
        })
    }
}

/// Relationship between a matched sentiment point and an insider transaction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Relationship {
    /// Positive sentiment with insider buying
    AlignedPositive,
    /// Negative sentiment with insider selling
    AlignedNegative,
    /// Sentiment and insider activity disagree - the highest-interest case,
    /// since it suggests information asymmetry
    Contrarian,
    /// Sentiment inside the configured dead-zone around zero
    Neutral,
}

/// A scored transaction joined with its nearest in-window sentiment point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPair {
    /// The scored transaction
    pub transaction: ScoredTransaction,
    /// The matched sentiment point
    pub sentiment: SentimentPoint,
    /// Signed days from transaction date to sentiment date
    pub day_offset: i64,
    /// Classified relationship
    pub relationship: Relationship,
}
