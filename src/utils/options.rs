//! Tuning value merging utilities.

use crate::tuning::TuningValue;
use std::collections::BTreeMap;

/// Merge two tuning maps, with overrides taking precedence over defaults
pub fn merge_options(
    defaults: &BTreeMap<String, TuningValue>,
    overrides: &BTreeMap<String, TuningValue>,
) -> BTreeMap<String, TuningValue> {
    let mut merged = defaults.clone();

    // Apply overrides (these take precedence)
    for (k, v) in overrides {
        merged.insert(k.clone(), v.clone());
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut defaults = BTreeMap::new();
        defaults.insert("ping_timeout".to_string(), TuningValue::Integer(300000));
        defaults.insert("ping_window".to_string(), TuningValue::Integer(100));

        let mut overrides = BTreeMap::new();
        overrides.insert("ping_timeout".to_string(), TuningValue::Integer(1));
        overrides.insert("extra".to_string(), TuningValue::Text("x".to_string()));

        let merged = merge_options(&defaults, &overrides);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged["ping_timeout"], TuningValue::Integer(1));
        assert_eq!(merged["ping_window"], TuningValue::Integer(100));
        assert_eq!(merged["extra"], TuningValue::Text("x".to_string()));
    }
}
