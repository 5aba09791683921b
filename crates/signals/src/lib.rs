pub mod batch;
pub mod classifier;
pub mod correlator;
pub mod normalizer;
pub mod report;
pub mod scorer;

// Re-export the pipeline stages for convenience
pub use batch::{correlate_by_ticker, process_batch, BatchOutcome, BatchStats, RecordFailure};
pub use classifier::{score_and_classify, SignalClassifier};
pub use correlator::{classify_relationship, SentimentCorrelator};
pub use normalizer::{clean_numeric, normalize, parse_date};
pub use report::{AggregateReport, GroupStats, TimeBucket};
pub use scorer::{code_adjustment, role_matches, value_tier_adjustment, ConvictionScorer};
