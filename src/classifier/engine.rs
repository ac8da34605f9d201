use crate::model::{FrequencyClaim, RangeEntry, RedFlagRange, Verdict, VerifiedRange};
use crate::registry::{RangeRegistry, RedFlagRegistry, Registries};

use super::lexical::ContextTokens;

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Assign a verdict to one claim.
///
/// Precedence, strictly in order:
/// 1. any applicable red-flag intersection → PSEUDOSCIENCE
/// 2. any verified intersection → VERIFIED (narrowest), or AMBIGUOUS when
///    equally narrow entries cannot be told apart by the claim's context
/// 3. otherwise → UNVERIFIED
///
/// A pure function of its inputs.
pub fn classify(claim: &FrequencyClaim, registries: &Registries) -> Verdict {
    let context = ContextTokens::new(&claim.context);

    if let Some(flag) = select_red_flag(claim, &registries.red_flags, &context) {
        return Verdict::pseudoscience(claim.clone(), flag);
    }

    match resolve_verified(claim, &registries.verified, &context) {
        VerifiedMatch::Unique(range) => Verdict::verified(claim.clone(), range),
        VerifiedMatch::Tied(candidates) => Verdict::ambiguous(claim.clone(), &candidates),
        VerifiedMatch::None => Verdict::unverified(claim.clone()),
    }
}

/// Classify claims in order; one verdict per claim.
pub fn classify_all(claims: &[FrequencyClaim], registries: &Registries) -> Vec<Verdict> {
    claims.iter().map(|c| classify(c, registries)).collect()
}

// ---------------------------------------------------------------------------
// Red flags
// ---------------------------------------------------------------------------

/// An entry applies when each of its keyword groups is mentioned.
pub fn red_flag_applies(flag: &RedFlagRange, context: &ContextTokens) -> bool {
    flag.requires_context
        .iter()
        .all(|group| context.mentions_any(group.as_slice()))
}

/// Narrowest applicable entry, where a satisfied context-qualified entry
/// outranks any unqualified one.
fn select_red_flag<'a>(
    claim: &FrequencyClaim,
    registry: &'a RedFlagRegistry,
    context: &ContextTokens,
) -> Option<&'a RedFlagRange> {
    let applicable: Vec<&RedFlagRange> = registry
        .lookup(claim.hz)
        .into_iter()
        .filter(|flag| red_flag_applies(flag, context))
        .collect();

    applicable
        .iter()
        .find(|flag| flag.is_context_qualified())
        .or_else(|| applicable.first())
        .copied()
}

// ---------------------------------------------------------------------------
// Verified ranges
// ---------------------------------------------------------------------------

enum VerifiedMatch<'a> {
    None,
    Unique(&'a VerifiedRange),
    Tied(Vec<&'a VerifiedRange>),
}

fn resolve_verified<'a>(
    claim: &FrequencyClaim,
    registry: &'a RangeRegistry,
    context: &ContextTokens,
) -> VerifiedMatch<'a> {
    let candidates = registry.lookup(claim.hz);
    let Some(narrowest) = candidates.first() else {
        return VerifiedMatch::None;
    };

    let narrowest_iv = narrowest.interval();
    let tied: Vec<&VerifiedRange> = candidates
        .iter()
        .take_while(|r| r.interval().same_width(&narrowest_iv))
        .copied()
        .collect();

    if tied.len() == 1 {
        return VerifiedMatch::Unique(tied[0]);
    }

    let mentioned: Vec<&VerifiedRange> = tied
        .iter()
        .filter(|r| context.mentions_any(r.effective_labels().as_slice()))
        .copied()
        .collect();

    match mentioned.as_slice() {
        [only] => VerifiedMatch::Unique(*only),
        _ => VerifiedMatch::Tied(tied),
    }
}
