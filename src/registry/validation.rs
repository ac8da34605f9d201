use std::collections::HashSet;

use crate::model::{RangeEntry, RedFlagRange, VerifiedRange};

use super::types::{ConfigurationError, RegistryKind};

/// Validate both tables. The first problem found is returned.
pub fn validate(
    verified: &[VerifiedRange],
    red_flags: &[RedFlagRange],
) -> Result<(), ConfigurationError> {
    validate_entries(RegistryKind::Verified, verified)?;
    validate_entries(RegistryKind::RedFlag, red_flags)?;

    for v in verified {
        if v.labels.iter().any(|l| l.trim().is_empty()) {
            return Err(ConfigurationError::EmptyKeyword {
                registry: RegistryKind::Verified,
                name: v.name.clone(),
            });
        }
    }
    for f in red_flags {
        let empty = f
            .requires_context
            .iter()
            .any(|group| group.is_empty() || group.iter().any(|k| k.trim().is_empty()));
        if empty {
            return Err(ConfigurationError::EmptyKeyword {
                registry: RegistryKind::RedFlag,
                name: f.name.clone(),
            });
        }
    }

    check_precedence(RegistryKind::Verified, verified, |a, b| {
        a.effective_labels() == b.effective_labels()
    })?;
    check_precedence(RegistryKind::RedFlag, red_flags, |a, b| {
        a.normalized_context() == b.normalized_context()
    })?;

    Ok(())
}

/// Names, bounds and the `low < high` invariant.
fn validate_entries<E: RangeEntry>(
    registry: RegistryKind,
    entries: &[E],
) -> Result<(), ConfigurationError> {
    let mut seen = HashSet::new();

    for (index, entry) in entries.iter().enumerate() {
        let name = entry.name().trim();
        if name.is_empty() {
            return Err(ConfigurationError::EmptyName { registry, index });
        }
        if !seen.insert(name.to_string()) {
            return Err(ConfigurationError::DuplicateName {
                registry,
                name: name.to_string(),
            });
        }

        let iv = entry.interval();
        if !iv.low.is_finite() || !iv.high.is_finite() || iv.low < 0.0 {
            return Err(ConfigurationError::InvalidBound {
                registry,
                name: name.to_string(),
                low_hz: iv.low,
                high_hz: iv.high,
            });
        }
        if iv.low >= iv.high {
            return Err(ConfigurationError::InvertedInterval {
                registry,
                name: name.to_string(),
                low_hz: iv.low,
                high_hz: iv.high,
            });
        }
    }

    Ok(())
}

/// Two overlapping entries of equal width are only allowed when something
/// else tells them apart; `indistinct` reports pairs where nothing does.
fn check_precedence<E, F>(
    registry: RegistryKind,
    entries: &[E],
    indistinct: F,
) -> Result<(), ConfigurationError>
where
    E: RangeEntry,
    F: Fn(&E, &E) -> bool,
{
    for (i, a) in entries.iter().enumerate() {
        for b in &entries[i + 1..] {
            let (ia, ib) = (a.interval(), b.interval());
            if ia.intersects(&ib) && ia.same_width(&ib) && indistinct(a, b) {
                return Err(ConfigurationError::UndefinedPrecedence {
                    registry,
                    first: a.name().to_string(),
                    second: b.name().to_string(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verified(name: &str, low: f64, high: f64) -> VerifiedRange {
        VerifiedRange {
            name: name.into(),
            low_hz: low,
            high_hz: high,
            citations: vec![],
            labels: vec![],
            annotation: None,
        }
    }

    fn flag(name: &str, low: f64, high: f64) -> RedFlagRange {
        RedFlagRange {
            name: name.into(),
            low_hz: low,
            high_hz: high,
            rationale: "r".into(),
            requires_context: vec![],
        }
    }

    #[test]
    fn valid_tables_pass() {
        let v = vec![verified("tens_therapy", 1.0, 200.0), verified("haptic_perception", 0.4, 1000.0)];
        let f = vec![flag("bioresonance_myth", 900.0, 3000.0)];
        assert!(validate(&v, &f).is_ok());
    }

    #[test]
    fn low_equal_high_rejected() {
        let err = validate(&[verified("point", 5.0, 5.0)], &[]).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvertedInterval { .. }));
    }

    #[test]
    fn low_above_high_rejected() {
        let err = validate(&[], &[flag("backwards", 300.0, 200.0)]).unwrap_err();
        match err {
            ConfigurationError::InvertedInterval { registry, name, .. } => {
                assert_eq!(registry, RegistryKind::RedFlag);
                assert_eq!(name, "backwards");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn nan_and_negative_bounds_rejected() {
        let err = validate(&[verified("nan", f64::NAN, 10.0)], &[]).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidBound { .. }));
        let err = validate(&[verified("neg", -1.0, 10.0)], &[]).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidBound { .. }));
        let err = validate(&[verified("inf", 1.0, f64::INFINITY)], &[]).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidBound { .. }));
    }

    #[test]
    fn empty_and_duplicate_names_rejected() {
        let err = validate(&[verified("  ", 1.0, 2.0)], &[]).unwrap_err();
        assert!(matches!(err, ConfigurationError::EmptyName { index: 0, .. }));

        let err = validate(&[verified("a", 1.0, 2.0), verified("a", 5.0, 9.0)], &[]).unwrap_err();
        assert!(matches!(err, ConfigurationError::DuplicateName { .. }));
    }

    #[test]
    fn same_name_across_tables_allowed() {
        assert!(validate(&[verified("x", 1.0, 2.0)], &[flag("x", 1.0, 2.0)]).is_ok());
    }

    #[test]
    fn equal_width_overlapping_red_flags_rejected() {
        let err = validate(&[], &[flag("a", 100.0, 200.0), flag("b", 150.0, 250.0)]).unwrap_err();
        assert!(matches!(err, ConfigurationError::UndefinedPrecedence { .. }));
    }

    #[test]
    fn equal_width_red_flags_with_different_context_allowed() {
        let mut b = flag("b", 150.0, 250.0);
        b.requires_context = vec![vec!["cure".into()]];
        assert!(validate(&[], &[flag("a", 100.0, 200.0), b]).is_ok());
    }

    #[test]
    fn equal_width_disjoint_red_flags_allowed() {
        assert!(validate(&[], &[flag("a", 100.0, 200.0), flag("b", 300.0, 400.0)]).is_ok());
    }

    #[test]
    fn equal_width_verified_need_distinct_labels() {
        let mut a = verified("alpha_band", 8.0, 12.0);
        let mut b = verified("beta_band", 10.0, 14.0);
        assert!(validate(&[a.clone(), b.clone()], &[]).is_ok());

        a.name = "band".into();
        b.name = "band_".into();
        let err = validate(&[a, b], &[]).unwrap_err();
        assert!(matches!(err, ConfigurationError::UndefinedPrecedence { .. }));
    }

    #[test]
    fn empty_context_group_rejected() {
        let mut f = flag("a", 1.0, 2.0);
        f.requires_context = vec![vec![]];
        let err = validate(&[], &[f]).unwrap_err();
        assert!(matches!(err, ConfigurationError::EmptyKeyword { .. }));
    }

    #[test]
    fn blank_label_rejected() {
        let mut v = verified("a", 1.0, 2.0);
        v.labels = vec![" ".into()];
        let err = validate(&[v], &[]).unwrap_err();
        assert!(matches!(err, ConfigurationError::EmptyKeyword { .. }));
    }
}
