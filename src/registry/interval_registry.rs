use crate::model::{HzInterval, RangeEntry, RedFlagRange, VerifiedRange};

/// Immutable table of frequency intervals.
///
/// Entries are kept sorted by ascending width (stable, so equal widths keep
/// configuration order); a lookup is a single filtered pass that returns
/// matches already narrowest-first.
#[derive(Debug, Clone)]
pub struct IntervalRegistry<E> {
    entries: Vec<E>,
}

pub type RangeRegistry = IntervalRegistry<VerifiedRange>;
pub type RedFlagRegistry = IntervalRegistry<RedFlagRange>;

impl<E: RangeEntry> IntervalRegistry<E> {
    /// Entries must already be validated.
    pub(crate) fn from_validated(mut entries: Vec<E>) -> Self {
        entries.sort_by(|a, b| a.interval().width().total_cmp(&b.interval().width()));
        Self { entries }
    }

    /// Every entry whose interval intersects `query`, narrowest first.
    pub fn lookup(&self, query: HzInterval) -> Vec<&E> {
        self.entries
            .iter()
            .filter(|e| e.interval().intersects(&query))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&E> {
        self.entries.iter().find(|e| e.name() == name)
    }

    /// All entries, narrowest first.
    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag(name: &str, low: f64, high: f64) -> RedFlagRange {
        RedFlagRange {
            name: name.into(),
            low_hz: low,
            high_hz: high,
            rationale: String::new(),
            requires_context: vec![],
        }
    }

    fn names<E: RangeEntry>(found: &[&E]) -> Vec<String> {
        found.iter().map(|e| e.name().to_string()).collect()
    }

    #[test]
    fn lookup_orders_narrowest_first() {
        let reg = RedFlagRegistry::from_validated(vec![
            flag("wide", 0.0, 10_000.0),
            flag("narrow", 900.0, 1_100.0),
            flag("medium", 500.0, 3_000.0),
        ]);
        let found = reg.lookup(HzInterval::point(1_000.0));
        assert_eq!(names(&found), vec!["narrow", "medium", "wide"]);
    }

    #[test]
    fn lookup_range_query_intersection() {
        let reg = RedFlagRegistry::from_validated(vec![
            flag("low", 1.0, 200.0),
            flag("high", 900.0, 3_000.0),
        ]);
        let found = reg.lookup(HzInterval::new(150.0, 950.0));
        assert_eq!(names(&found), vec!["low", "high"]);
        assert!(reg.lookup(HzInterval::new(300.0, 800.0)).is_empty());
    }

    #[test]
    fn equal_width_keeps_configuration_order() {
        let reg = RedFlagRegistry::from_validated(vec![
            flag("first", 0.0, 100.0),
            flag("second", 50.0, 150.0),
        ]);
        let found = reg.lookup(HzInterval::point(75.0));
        assert_eq!(names(&found), vec!["first", "second"]);
    }

    #[test]
    fn endpoint_touch_matches() {
        let reg = RedFlagRegistry::from_validated(vec![flag("band", 20.0, 20_000.0)]);
        assert_eq!(reg.lookup(HzInterval::point(20_000.0)).len(), 1);
        assert!(reg.lookup(HzInterval::point(20_000.5)).is_empty());
    }

    #[test]
    fn lookup_is_repeatable() {
        let reg = RedFlagRegistry::from_validated(vec![flag("a", 1.0, 5.0), flag("b", 2.0, 9.0)]);
        let q = HzInterval::new(3.0, 4.0);
        assert_eq!(names(&reg.lookup(q)), names(&reg.lookup(q)));
    }

    #[test]
    fn get_by_name() {
        let reg = RedFlagRegistry::from_validated(vec![flag("a", 1.0, 5.0)]);
        assert!(reg.get("a").is_some());
        assert!(reg.get("missing").is_none());
        assert_eq!(reg.len(), 1);
        assert!(!reg.is_empty());
    }
}
