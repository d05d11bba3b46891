use super::*;
use crate::role::Role;

fn sample_identity() -> Identity {
    Identity {
        id: "2".to_owned(),
        display_name: "Lab Technician".to_owned(),
        email: "tech@labsystem.com".to_owned(),
        role: Role::LabTechnician,
    }
}

#[test]
fn memory_cache_starts_empty() {
    assert!(MemoryCache::new().read().is_none());
}

#[test]
fn memory_cache_write_then_clear() {
    let cache = MemoryCache::new();
    cache.write("{}");
    assert_eq!(cache.read().as_deref(), Some("{}"));
    cache.clear();
    assert!(cache.read().is_none());
    cache.clear();
    assert!(cache.read().is_none());
}

#[test]
fn encoded_record_uses_display_name_field() {
    let raw = encode_identity(&sample_identity()).expect("encode");
    assert!(raw.contains("\"displayName\":\"Lab Technician\""));
    assert!(raw.contains("\"role\":\"labTechnician\""));
    assert_eq!(decode_identity(&raw).expect("decode"), sample_identity());
}

#[test]
fn decode_rejects_malformed_json() {
    let err = decode_identity("{not json").expect_err("malformed");
    assert!(matches!(err, AccessError::CorruptCache(_)));
}

#[test]
fn decode_rejects_unknown_role() {
    let err = decode_identity(r#"{"id":"9","displayName":"X","email":"x@y","role":"superuser"}"#)
        .expect_err("unknown role");
    assert!(matches!(err, AccessError::CorruptCache(_)));
}

#[test]
fn decode_rejects_missing_fields() {
    let err = decode_identity(r#"{"id":"9","role":"admin"}"#).expect_err("missing fields");
    assert!(matches!(err, AccessError::CorruptCache(_)));
}
