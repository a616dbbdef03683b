//! Integration tests for the normalized error representation

use proptest::prelude::*;
use squill_errors::{Code, Error, ExtCode, Infos, Level, INFO_KEY_EXT_CODE, INFO_KEY_SOURCE};

#[test]
fn test_engine_failure_end_to_end() {
    // a raw extended busy code arrives from the engine
    let raw = Code::Busy.as_rc() | (2 << 8);

    let mut error = Error::new();
    error.set_sqlite_code(Code::Busy.as_rc(), raw);
    error.message = "database is locked".to_string();
    error.infos.set_string("Path", "/var/db/main.sqlite");
    error.infos.set_float("Elapsed", 0.031);

    assert!(!error.is_ok());
    assert!(!error.is_corruption());
    assert_eq!(error.code(), Code::Busy);
    assert_eq!(error.level, Level::Error);
    assert_eq!(
        error.infos.integers().get(INFO_KEY_EXT_CODE),
        Some(&i64::from(ExtCode::BusySnapshot.as_rc()))
    );
    assert_eq!(
        error.description(),
        "[ERROR: Busy] database is locked, ExtCode: 517, RC: 5, \
         Elapsed: 0.031, Path: /var/db/main.sqlite"
    );
}

#[test]
fn test_error_reuse_across_operations() {
    let mut error = Error::new();
    error.set_code_from(Code::Schema, "Statement");
    error.infos.set_int("Version", 12);
    assert!(!error.is_ok());

    error.clear();
    assert!(error.is_ok());
    assert!(error.infos.is_empty());

    // nothing from the previous operation leaks into the next description
    error.set_code(Code::NotFound);
    assert_eq!(error.description(), "[ERROR: NotFound]");
    assert!(!error.infos.strings().contains_key(INFO_KEY_SOURCE));
}

#[test]
fn test_raw_classification_matches_instance_predicates() {
    assert!(!Error::is_error(Code::OK.as_rc()));
    assert!(!Error::is_error(Code::Row.as_rc()));
    assert!(!Error::is_error(Code::Done.as_rc()));
    assert!(Error::is_error(Code::Busy.as_rc()));
    assert!(Error::is_error(ExtCode::IOErrorFsync.as_rc()));
    assert!(!Error::is_error(ExtCode::OKLoadPermanently.as_rc()));
}

#[test]
fn test_infos_value_error_round_trip() {
    let mut a = Error::with_message(Code::Constraint, "UNIQUE failed");
    a.infos.set_string("Index", "users_email");

    let b = a.clone();
    assert_eq!(a, b);
    assert_eq!(a.description(), b.description());
}

proptest! {
    #[test]
    fn prop_base_code_resolution_is_total(rc in any::<i32>()) {
        // never panics, always a defined code, idempotent
        let code = Code::from_rc(rc);
        prop_assert_eq!(Code::from_rc(code.as_rc()), code);
    }

    #[test]
    fn prop_error_classification_agrees_with_base(rc in any::<i32>()) {
        prop_assert_eq!(Error::is_error(rc), !Code::from_rc(rc).is_success());
    }

    #[test]
    fn prop_ext_code_law(rc in any::<i32>()) {
        if let Ok(ext) = ExtCode::try_from(rc) {
            prop_assert_eq!(ext.as_rc(), rc);
            prop_assert_eq!(ext.as_rc() & 0xFF, ext.base().as_rc());
        }
    }

    #[test]
    fn prop_unknown_extended_never_loses_base(primary in 0i32..=28, sub in 0i32..=512) {
        let mut error = Error::new();
        error.set_sqlite_code(primary, primary | (sub << 8));
        prop_assert_eq!(error.code(), Code::from_rc(primary));
    }

    #[test]
    fn prop_infos_key_lives_in_one_map(key in "[A-Za-z]{1,8}", int in any::<i64>(), text in ".{0,16}") {
        let mut infos = Infos::new();
        infos.set_int(key.clone(), int);
        infos.set_string(key.clone(), text);
        prop_assert!(!infos.integers().contains_key(&key));
        prop_assert!(infos.strings().contains_key(&key));
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trip() {
    let mut error = Error::with_message(Code::Corrupt, "page 7 unreadable");
    error.infos.set_int("Page", 7);
    error.infos.set_string("Path", "/var/db/main.sqlite");

    let json = serde_json::to_string(&error).unwrap();
    let back: Error = serde_json::from_str(&json).unwrap();
    assert_eq!(back, error);
    assert_eq!(back.description(), error.description());
}
