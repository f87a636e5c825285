use super::*;

#[test]
fn from_stored_keeps_existing_id() {
    let (identity, created) = Identity::from_stored(Some("u1".to_owned()), Some("Sam".to_owned()));
    assert!(!created);
    assert_eq!(identity.user_id, "u1");
    assert_eq!(identity.display_name(), "Sam");
}

#[test]
fn from_stored_mints_uuid_when_missing() {
    let (identity, created) = Identity::from_stored(None, None);
    assert!(created);
    assert!(Uuid::parse_str(&identity.user_id).is_ok());
}

#[test]
fn from_stored_mints_uuid_when_blank() {
    let (identity, created) = Identity::from_stored(Some("  ".to_owned()), None);
    assert!(created);
    assert_ne!(identity.user_id.trim(), "");
}

#[test]
fn blank_name_counts_as_missing() {
    let (identity, _) = Identity::from_stored(Some("u1".to_owned()), Some("   ".to_owned()));
    assert!(identity.needs_name());
    assert_eq!(identity.display_name(), ANONYMOUS);
}

#[test]
fn with_name_trims() {
    let (identity, _) = Identity::from_stored(Some("u1".to_owned()), None);
    let named = identity.with_name("  Jo  ").expect("named");
    assert_eq!(named.user_name.as_deref(), Some("Jo"));
    assert_eq!(named.user_id, "u1");
    assert!(!named.needs_name());
}

#[test]
fn with_name_rejects_blank() {
    let identity = Identity::default();
    assert_eq!(identity.with_name(" \t "), None);
}
