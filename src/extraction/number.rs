use std::sync::LazyLock;

use regex::Regex;

use super::types::ExtractionError;

/// Plain decimal: `40`, `2.4`.
static RE_PLAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?$").unwrap());
/// Thousands-grouped decimal: `40,000`, `1,200.5`. A comma list that happens
/// to group correctly (`100,200`) reads as one value; `10,20` does not group
/// and is malformed.
static RE_GROUPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,3}(?:,[0-9]{3})+(?:\.[0-9]+)?$").unwrap());

/// Parse a numeric literal as captured by the claim pattern.
/// Anything other than a plain or correctly grouped decimal is malformed
/// (`1.2.3`, `1,2`, `40.`).
pub fn parse_numeric_literal(literal: &str) -> Result<f64, ExtractionError> {
    let cleaned = if RE_PLAIN.is_match(literal) {
        literal.to_string()
    } else if RE_GROUPED.is_match(literal) {
        literal.replace(',', "")
    } else {
        return Err(ExtractionError::MalformedNumber {
            literal: literal.to_string(),
        });
    };

    let value = cleaned
        .parse::<f64>()
        .map_err(|_| ExtractionError::MalformedNumber {
            literal: literal.to_string(),
        })?;

    if !value.is_finite() {
        return Err(ExtractionError::OutOfRange {
            literal: literal.to_string(),
        });
    }

    Ok(value)
}
