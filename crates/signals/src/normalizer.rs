//! Transaction normalization.
//!
//! Converts the stringly-typed records an upstream Form 4 parser emits into
//! canonical [`Transaction`]s. Validation is strict where silence would
//! corrupt scoring (negative or non-numeric shares/price are rejected, never
//! zeroed) and lenient where filings are just messy (unknown transaction
//! codes map to `Other` with a flag, date strings may arrive in several
//! formats, numbers may carry currency symbols and separators).

use chrono::NaiveDate;
use insider_alpha_core::{CoreError, RawTransaction, Transaction, TransactionCode};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Date formats observed in parser output, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y"];

/// Strips currency symbols, separators, and whitespace from a numeric field.
///
/// Keeps digits, the decimal point, and a leading minus so that negative
/// inputs still parse and can be rejected explicitly downstream.
#[must_use]
pub fn clean_numeric(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect()
}

/// Parses a transaction date, accepting the formats Form 4 parsers emit.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Parses a non-negative decimal field, tagged with the field name on failure.
fn parse_non_negative(raw: &str, field: &str) -> Result<Decimal, CoreError> {
    let cleaned = clean_numeric(raw);
    if cleaned.is_empty() {
        return Err(CoreError::malformed(field, format!("not numeric: {raw:?}")));
    }
    let value = Decimal::from_str(&cleaned)
        .map_err(|e| CoreError::malformed(field, format!("not numeric: {raw:?} ({e})")))?;
    if value < Decimal::ZERO {
        return Err(CoreError::malformed(
            field,
            format!("negative value: {value}"),
        ));
    }
    Ok(value)
}

/// Normalizes one raw record into a canonical transaction.
///
/// Unknown transaction codes do not fail the record; they map to
/// [`TransactionCode::Other`] with `code_flagged` set and a warning logged,
/// so one odd code never aborts a batch.
///
/// # Errors
/// Returns [`CoreError::MalformedRecord`] tagged with the offending field for
/// an unparseable date, non-numeric or negative shares/price, or a supplied
/// total value inconsistent with shares x price.
pub fn normalize(raw: &RawTransaction) -> Result<Transaction, CoreError> {
    let transaction_date = parse_date(&raw.transaction_date).ok_or_else(|| {
        CoreError::malformed(
            "transaction_date",
            format!("unrecognized date: {:?}", raw.transaction_date),
        )
    })?;

    let shares = parse_non_negative(&raw.shares, "shares")?;
    let price_per_share = parse_non_negative(&raw.price_per_share, "price_per_share")?;

    let transaction_code = TransactionCode::from_form4(&raw.transaction_code);
    let code_flagged = !TransactionCode::is_known(&raw.transaction_code);
    if code_flagged {
        tracing::warn!(
            ticker = %raw.ticker,
            code = %raw.transaction_code,
            "unknown transaction code, mapped to Other"
        );
    }

    let derived_value = shares * price_per_share;
    let transaction_value = match raw.total_value.as_deref() {
        Some(supplied) => {
            let value = parse_non_negative(supplied, "total_value")?;
            check_value_consistency(value, derived_value)?;
            value
        }
        None => derived_value,
    };

    let direct_ownership = raw
        .ownership
        .as_deref()
        .map(|o| o.trim().eq_ignore_ascii_case("D"))
        .unwrap_or(false);

    Ok(Transaction {
        insider_name: raw.insider_name.clone(),
        role: raw.role.clone(),
        ticker: raw.ticker.clone(),
        transaction_date,
        transaction_code,
        shares,
        price_per_share,
        transaction_value,
        direction: transaction_code.direction(),
        direct_ownership,
        code_flagged,
    })
}

/// Verifies a filing-supplied total against shares x price.
///
/// Tolerance is max(0.5% of the derived value, 0.01): filings round the
/// per-share price, so small drift is expected, but a materially different
/// total indicates a corrupt record.
fn check_value_consistency(supplied: Decimal, derived: Decimal) -> Result<(), CoreError> {
    let tolerance = (derived * Decimal::new(5, 3)).max(Decimal::new(1, 2));
    if (supplied - derived).abs() > tolerance {
        return Err(CoreError::malformed(
            "total_value",
            format!("supplied {supplied} inconsistent with shares x price = {derived}"),
        ));
    }
    Ok(())
}
