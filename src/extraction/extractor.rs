use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::model::{ClaimValue, FrequencyClaim, FrequencyUnit, HzInterval};

use super::context::context_window;
use super::number::parse_numeric_literal;
use super::types::{ExtractionError, ExtractionOutput, ExtractionWarning, ExtractorOptions};

/// The full literal grammar:
///
/// - single value: `N Hz`, `N kHz`, `N MHz`, `N GHz` (`40kHz` too)
/// - bounded range: `N-M Hz`, `N - M kHz`, `N to M Hz`, `N–M Hz`; a unit on
///   the upper bound alone applies to both, or each bound carries its own.
///
/// Numbers are captured loosely (`[0-9][0-9.,]*`) so malformed literals are
/// reported instead of silently split. The regex crate matches in linear
/// time, so adversarial input cannot cause backtracking blow-up.
static RE_CLAIM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        \b(?P<low>[0-9][0-9.,]*)
        (?:\s*(?P<low_unit>[kmg]?hz)\b)?
        (?:\s*(?:-|–|—|to\b)\s*(?P<high>[0-9][0-9.,]*))?
        \s*(?P<unit>[kmg]?hz)\b",
    )
    .unwrap()
});

/// Scan a document for frequency claims, in document order.
/// Malformed spans are skipped and reported in `warnings`.
pub fn extract_claims(text: &str, options: &ExtractorOptions) -> ExtractionOutput {
    let mut output = ExtractionOutput::default();

    // Running byte -> char offset conversion, linear over the document.
    let mut last_byte = 0usize;
    let mut last_char = 0usize;
    let mut prev_end = 0usize;

    for caps in RE_CLAIM.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        last_char += text[last_byte..whole.start()].chars().count();
        last_byte = whole.start();

        let low_end = caps.name("low").map_or(whole.start(), |m| m.end());
        let result = match dangling_prefix(text, whole.start(), prev_end) {
            Some(fragment) => Err(malformed(text[fragment..low_end].trim_start())),
            None => build_claim(&caps, text, options),
        };
        prev_end = whole.end();

        match result {
            Ok(claim) => output.claims.push(FrequencyClaim {
                char_offset: last_char,
                ..claim
            }),
            Err(error) => {
                tracing::warn!(
                    offset = whole.start(),
                    literal = whole.as_str(),
                    error = %error,
                    "Skipping unparseable frequency literal"
                );
                output.warnings.push(ExtractionWarning {
                    span: whole.as_str().to_string(),
                    offset: whole.start(),
                    char_offset: last_char,
                    error,
                });
            }
        }
    }

    tracing::debug!(
        claims = output.claims.len(),
        warnings = output.warnings.len(),
        "Frequency extraction complete"
    );

    output
}

fn build_claim(
    caps: &Captures<'_>,
    text: &str,
    options: &ExtractorOptions,
) -> Result<FrequencyClaim, ExtractionError> {
    // Group 0, `low` and `unit` always participate in a match.
    let whole = caps.get(0).ok_or_else(|| malformed(""))?;
    let low_literal = caps.name("low").map(|m| m.as_str()).unwrap_or_default();
    let unit_literal = caps.name("unit").map(|m| m.as_str()).unwrap_or_default();

    let unit = FrequencyUnit::from_suffix(unit_literal).ok_or_else(|| malformed(unit_literal))?;
    let low = parse_numeric_literal(low_literal)?;

    let (value, hz) = match caps.name("high") {
        None => {
            let hz = to_hz(low, unit, low_literal)?;
            (ClaimValue::Single { value: low }, HzInterval::point(hz))
        }
        Some(high_match) => {
            let high = parse_numeric_literal(high_match.as_str())?;
            let low_unit = caps
                .name("low_unit")
                .and_then(|m| FrequencyUnit::from_suffix(m.as_str()));
            let low_hz = to_hz(low, low_unit.unwrap_or(unit), low_literal)?;
            let high_hz = to_hz(high, unit, high_match.as_str())?;
            if low_hz > high_hz {
                return Err(ExtractionError::InvertedRange { low_hz, high_hz });
            }
            (
                ClaimValue::Range {
                    low,
                    high,
                    low_unit,
                },
                HzInterval {
                    low: low_hz,
                    high: high_hz,
                },
            )
        }
    };

    Ok(FrequencyClaim {
        span: whole.as_str().to_string(),
        offset: whole.start(),
        char_offset: 0,
        value,
        unit,
        hz,
        context: context_window(text, whole.start(), whole.end(), options.context_window_chars)
            .to_string(),
    })
}

/// Start of a numeric fragment glued to the front of a match, as in `.5 Hz`
/// (cut decimal) or `5 000 Hz` (space-grouped thousands). Such a match holds
/// only part of the written number. Looks no further back than `floor`.
fn dangling_prefix(text: &str, start: usize, floor: usize) -> Option<usize> {
    let before = &text[floor..start];
    let mut chars = before.char_indices().rev();
    let (i, c) = chars.next()?;

    if c == '.' || c == ',' {
        return Some(floor + fragment_start(before, i));
    }
    if !is_inline_space(c) {
        return None;
    }
    for (k, c) in chars {
        if is_inline_space(c) {
            continue;
        }
        return c
            .is_ascii_digit()
            .then(|| floor + fragment_start(before, k));
    }
    None
}

/// Walk back from `at` over digits, separators and inline spaces.
fn fragment_start(before: &str, at: usize) -> usize {
    let mut start = at;
    for (i, c) in before[..at].char_indices().rev() {
        if c.is_ascii_digit() || c == '.' || c == ',' || is_inline_space(c) {
            start = i;
        } else {
            break;
        }
    }
    start
}

/// Whitespace inside a line (a newline ends the number).
fn is_inline_space(c: char) -> bool {
    c.is_whitespace() && c != '\n' && c != '\r'
}

fn to_hz(value: f64, unit: FrequencyUnit, literal: &str) -> Result<f64, ExtractionError> {
    let hz = value * unit.multiplier();
    if hz.is_finite() {
        Ok(hz)
    } else {
        Err(ExtractionError::OutOfRange {
            literal: literal.to_string(),
        })
    }
}

fn malformed(literal: &str) -> ExtractionError {
    ExtractionError::MalformedNumber {
        literal: literal.to_string(),
    }
}
