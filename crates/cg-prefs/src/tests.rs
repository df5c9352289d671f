//! Unit tests for cg-prefs.

use cg_core::CustomerTypeId;

use crate::{MemoryPreferences, Preferences, SchedulerSettings, SpawnerMode, catalog, keys};

// ── Catalog ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod catalog_table {
    use super::*;

    #[test]
    fn every_entry_resolvable_by_key() {
        for spec in catalog::CATALOG {
            assert_eq!(catalog::spec(spec.key).map(|s| s.key), Some(spec.key));
        }
    }

    #[test]
    fn defaults_within_declared_range() {
        for spec in catalog::CATALOG {
            assert!(
                (spec.min..=spec.max).contains(&spec.default),
                "{} default out of range",
                spec.key
            );
        }
    }

    #[test]
    fn customer_type_is_not_catalogued() {
        assert!(catalog::spec(keys::CUSTOMER_TYPE_ID).is_none());
        assert!(catalog::default_for(keys::CUSTOMER_TYPE_ID).is_none());
    }
}

// ── MemoryPreferences ─────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use super::*;

    #[test]
    fn seeded_with_defaults() {
        let prefs = MemoryPreferences::new();
        assert_eq!(prefs.get_int(keys::SPAWNER_ACTIVE), Some(-1));
        assert_eq!(prefs.get_int(keys::SPAWN_INTERVAL_DECISECONDS), Some(30));
        assert_eq!(prefs.get_int(keys::TOTAL_GROUP_CAP), Some(50));
        // No registry discovered → key absent.
        assert_eq!(prefs.get_int(keys::CUSTOMER_TYPE_ID), None);
    }

    #[test]
    fn set_and_read_back() {
        let mut prefs = MemoryPreferences::new();
        prefs.set(keys::MAX_GROUP_SIZE, 6).unwrap();
        assert_eq!(prefs.get_int(keys::MAX_GROUP_SIZE), Some(6));
    }

    #[test]
    fn customer_type_settable_despite_no_catalog_entry() {
        let mut prefs = MemoryPreferences::new();
        prefs.set(keys::CUSTOMER_TYPE_ID, 12).unwrap();
        assert_eq!(prefs.get_int(keys::CUSTOMER_TYPE_ID), Some(12));
    }

    #[test]
    fn unknown_key_rejected() {
        let mut prefs = MemoryPreferences::new();
        assert!(prefs.set("spawn_intervall", 10).is_err());
    }

    #[test]
    fn empty_store_has_no_keys() {
        let prefs = MemoryPreferences::empty();
        assert_eq!(prefs.get_int(keys::SPAWNER_ACTIVE), None);
    }
}

// ── SchedulerSettings decode ──────────────────────────────────────────────────

#[cfg(test)]
mod settings {
    use super::*;

    fn prefs_with(pairs: &[(&str, i64)]) -> MemoryPreferences {
        let mut prefs = MemoryPreferences::new();
        for &(key, value) in pairs {
            prefs.set(key, value).unwrap();
        }
        prefs
    }

    #[test]
    fn mode_decode() {
        assert_eq!(SpawnerMode::from_flag(-1), SpawnerMode::Disabled);
        assert_eq!(SpawnerMode::from_flag(0), SpawnerMode::PracticeOnly);
        assert_eq!(SpawnerMode::from_flag(1), SpawnerMode::Enabled);
        // Out-of-domain flags disable rather than guess.
        assert_eq!(SpawnerMode::from_flag(7), SpawnerMode::Disabled);
    }

    #[test]
    fn defaults_snapshot() {
        let s = SchedulerSettings::snapshot(&MemoryPreferences::new());
        assert_eq!(s.mode, SpawnerMode::Disabled);
        assert_eq!(s.spawn_interval_secs, 3.0);
        assert_eq!(s.min_group_size, 1);
        assert_eq!(s.max_group_size, 2);
        assert_eq!(s.max_queue_length, -1);
        assert_eq!(s.total_group_cap, 50);
        assert_eq!(s.fixed_customer_model, None);
        assert_eq!(s.customer_type, None);
    }

    #[test]
    fn empty_store_falls_back_to_catalog_defaults() {
        let s = SchedulerSettings::snapshot(&MemoryPreferences::empty());
        assert_eq!(s, SchedulerSettings::snapshot(&MemoryPreferences::new()));
    }

    #[test]
    fn deciseconds_to_seconds() {
        let s = SchedulerSettings::snapshot(&prefs_with(&[(
            keys::SPAWN_INTERVAL_DECISECONDS,
            45,
        )]));
        assert_eq!(s.spawn_interval_secs, 4.5);
    }

    #[test]
    fn interval_floor_is_half_second() {
        let s =
            SchedulerSettings::snapshot(&prefs_with(&[(keys::SPAWN_INTERVAL_DECISECONDS, 0)]));
        assert_eq!(s.spawn_interval_secs, 0.5);
        let s =
            SchedulerSettings::snapshot(&prefs_with(&[(keys::SPAWN_INTERVAL_DECISECONDS, -30)]));
        assert_eq!(s.spawn_interval_secs, 0.5);
    }

    #[test]
    fn fixed_model_tri_state() {
        let fixed = |flag| {
            SchedulerSettings::snapshot(&prefs_with(&[(keys::FIXED_MODEL_FLAG, flag)]))
                .fixed_customer_model
        };
        assert_eq!(fixed(-1), None);
        assert_eq!(fixed(0), Some(false));
        assert_eq!(fixed(1), Some(true));
    }

    #[test]
    fn customer_type_present_and_valid() {
        let s = SchedulerSettings::snapshot(&prefs_with(&[(keys::CUSTOMER_TYPE_ID, 12)]));
        assert_eq!(s.customer_type, Some(CustomerTypeId(12)));
    }

    #[test]
    fn negative_customer_type_falls_back_to_generic() {
        let s = SchedulerSettings::snapshot(&prefs_with(&[(keys::CUSTOMER_TYPE_ID, -3)]));
        assert_eq!(s.customer_type, None);
    }

    #[test]
    fn quota_reached() {
        let s = SchedulerSettings::snapshot(&prefs_with(&[(keys::TOTAL_GROUP_CAP, 5)]));
        assert!(!s.quota_reached(4));
        assert!(s.quota_reached(5));
        assert!(s.quota_reached(6));

        let uncapped = SchedulerSettings::snapshot(&prefs_with(&[(keys::TOTAL_GROUP_CAP, -1)]));
        assert!(!uncapped.quota_reached(u32::MAX));
    }

    #[test]
    fn queue_full() {
        let s = SchedulerSettings::snapshot(&prefs_with(&[(keys::MAX_QUEUE_LENGTH, 5)]));
        assert!(!s.queue_full(4));
        assert!(s.queue_full(5));

        let uncapped = SchedulerSettings::snapshot(&prefs_with(&[(keys::MAX_QUEUE_LENGTH, -1)]));
        assert!(!uncapped.queue_full(1000));
        // 0 is also "uncapped" (< 1).
        let zero = SchedulerSettings::snapshot(&prefs_with(&[(keys::MAX_QUEUE_LENGTH, 0)]));
        assert!(!zero.queue_full(1000));
    }

    #[test]
    fn group_size_bounds_well_formed() {
        let bounds = |min, max| {
            SchedulerSettings::snapshot(&prefs_with(&[
                (keys::MIN_GROUP_SIZE, min),
                (keys::MAX_GROUP_SIZE, max),
            ]))
            .group_size_bounds()
        };
        assert_eq!(bounds(2, 6), (2, 6));
        // max below 1 → both collapse to 1.
        assert_eq!(bounds(3, 0), (1, 1));
        assert_eq!(bounds(3, -5), (1, 1));
        // inverted bounds → min clamped down to max.
        assert_eq!(bounds(10, 4), (4, 4));
        // non-positive min → raised to 1.
        assert_eq!(bounds(-2, 4), (1, 4));
    }
}
