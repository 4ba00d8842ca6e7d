use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a naira amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Strips whitespace, a leading currency marker (`₦` or `NGN`) and
/// thousands separators.
fn normalize_amount_input(s: &str) -> String {
    let trimmed = s.trim();
    let without_marker = trimmed
        .strip_prefix('₦')
        .or_else(|| {
            trimmed
                .get(..3)
                .filter(|prefix| prefix.eq_ignore_ascii_case("NGN"))
                .map(|_| &trimmed[3..])
        })
        .unwrap_or(trimmed);
    without_marker.trim().replace(',', "")
}

/// Parses a string into a naira [`Decimal`].
///
/// Accepts `"1,200,000"`, `"₦1,200,000.50"` and `"NGN 5000"`.
/// Empty or whitespace-only input is treated as 0.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid amount: {}", e);
        ParseAmountError {
            input: s.to_string(),
            source: e,
        }
    })
}
