pub mod config;
pub mod config_loader;
pub mod error;
pub mod types;

pub use config::{
    ClassifierConfig, CorrelationConfig, EngineConfig, ReportConfig, ScoringConfig,
};
pub use config_loader::ConfigLoader;
pub use error::CoreError;
pub use types::{
    CorrelationPair, RawTransaction, Relationship, ScoredTransaction, SentimentPoint, Signal,
    TradeDirection, Transaction, TransactionCode,
};
