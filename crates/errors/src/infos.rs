//! Typed key-value metadata attached to an error event

use std::collections::BTreeMap;

/// Structured diagnostic context carried alongside an error: counters,
/// durations, paths.
///
/// Three independent typed maps, keyed by field name. A key lives in exactly
/// one map at a time; setting it again under a different category re-routes
/// it (last write wins). Ordered maps keep rendering deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Infos {
    integers: BTreeMap<String, i64>,
    floats: BTreeMap<String, f64>,
    strings: BTreeMap<String, String>,
}

impl Infos {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an integer field, widened to 64-bit signed.
    pub fn set_int(&mut self, key: impl Into<String>, value: impl Into<i64>) {
        let key = key.into();
        self.floats.remove(&key);
        self.strings.remove(&key);
        self.integers.insert(key, value.into());
    }

    /// Attach a floating-point field, widened to double precision.
    pub fn set_float(&mut self, key: impl Into<String>, value: impl Into<f64>) {
        let key = key.into();
        self.integers.remove(&key);
        self.strings.remove(&key);
        self.floats.insert(key, value.into());
    }

    /// Attach a string field.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.integers.remove(&key);
        self.floats.remove(&key);
        self.strings.insert(key, value.into());
    }

    /// Remove a field from whichever map holds it. Removing an absent key is
    /// a no-op.
    pub fn unset(&mut self, key: &str) {
        self.integers.remove(key);
        self.floats.remove(key);
        self.strings.remove(key);
    }

    #[must_use]
    pub fn integers(&self) -> &BTreeMap<String, i64> {
        &self.integers
    }

    #[must_use]
    pub fn floats(&self) -> &BTreeMap<String, f64> {
        &self.floats
    }

    #[must_use]
    pub fn strings(&self) -> &BTreeMap<String, String> {
        &self.strings
    }

    /// Drop every field from all three maps.
    pub fn clear(&mut self) {
        self.integers.clear();
        self.floats.clear();
        self.strings.clear();
    }

    /// True iff all three maps are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.integers.is_empty() && self.floats.is_empty() && self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_routes_by_category() {
        let mut infos = Infos::new();
        infos.set_int("Attempts", 3);
        infos.set_float("Elapsed", 0.25);
        infos.set_string("Path", "/tmp/db");

        assert_eq!(infos.integers().get("Attempts"), Some(&3));
        assert_eq!(infos.floats().get("Elapsed"), Some(&0.25));
        assert_eq!(infos.strings().get("Path"), Some(&"/tmp/db".to_string()));
    }

    #[test]
    fn test_set_reroutes_key_across_categories() {
        let mut infos = Infos::new();
        infos.set_int("Tag", 7);
        infos.set_string("Tag", "seven");

        assert!(!infos.integers().contains_key("Tag"));
        assert_eq!(infos.strings().get("Tag"), Some(&"seven".to_string()));

        infos.set_float("Tag", 7.0);
        assert!(!infos.strings().contains_key("Tag"));
        assert_eq!(infos.floats().get("Tag"), Some(&7.0));
    }

    #[test]
    fn test_last_write_wins_within_category() {
        let mut infos = Infos::new();
        infos.set_int("Attempts", 1);
        infos.set_int("Attempts", 2);
        assert_eq!(infos.integers().get("Attempts"), Some(&2));
        assert_eq!(infos.integers().len(), 1);
    }

    #[test]
    fn test_unset_is_idempotent() {
        let mut infos = Infos::new();
        infos.set_string("Path", "/tmp/db");
        infos.unset("Path");
        assert!(infos.is_empty());

        // absent key: no-op, no panic
        infos.unset("Path");
        infos.unset("NeverSet");
        assert!(infos.is_empty());
    }

    #[test]
    fn test_clear_empties_all_maps() {
        let mut infos = Infos::new();
        infos.set_int("A", 1);
        infos.set_float("B", 2.0);
        infos.set_string("C", "c");
        assert!(!infos.is_empty());

        infos.clear();
        assert!(infos.is_empty());
        assert!(infos.integers().is_empty());
        assert!(infos.floats().is_empty());
        assert!(infos.strings().is_empty());
    }

    #[test]
    fn test_narrow_values_widen() {
        let mut infos = Infos::new();
        infos.set_int("Small", 42_u8);
        infos.set_float("Half", 0.5_f32);
        assert_eq!(infos.integers().get("Small"), Some(&42));
        assert_eq!(infos.floats().get("Half"), Some(&0.5));
    }
}
