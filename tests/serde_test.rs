#![cfg(feature = "serde-support")]

use eddsa_keyspec::{
    CurveFamily,
    ErrorKind,
    KeySpec,
    PublicKeyHandle,
    PublicKeySpec,
    RegistryConfig,
    Result,
    SpecShape,
};
use eddsa_keyspec::serde::{SerdeKeySpec, SerdePublicKeyHandle, SerdePublicKeySpec};

const ED448_KEY: &str = "5fd7449b59b461fd2ce787ec616ad46a1da1342485a70e1f8a0ea75d80e96778edf124769b46c7061bd6783df1e50f6cd1fa1abeafe8256180";

#[test]
fn test_key_spec_json_round_trip() -> Result<()> {
    let encoded = hex::decode(ED448_KEY).unwrap();
    let spec = KeySpec::generic(PublicKeySpec::from_encoded(CurveFamily::Ed448, &encoded)?);

    let json = serde_json::to_string(&SerdeKeySpec::from(&spec)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["shape"], "generic-spec");
    assert_eq!(value["family"], "Ed448");
    assert_eq!(value["x_odd"], true);
    assert_eq!(value["y"].as_array().unwrap().len(), 57);

    let decoded: SerdeKeySpec = serde_json::from_str(&json).unwrap();
    assert_eq!(KeySpec::try_from(decoded)?, spec);
    Ok(())
}

#[test]
fn test_short_coordinate_is_padded() -> Result<()> {
    let spec = PublicKeySpec::from_raw(CurveFamily::Ed25519, false, &[0u8; 32])?;
    let mirror = SerdePublicKeySpec::from(&spec);
    assert_eq!(mirror.y, vec![0u8; 32]);
    assert!(!mirror.x_odd);
    Ok(())
}

#[test]
fn test_deserialized_spec_is_validated() {
    let json = r#"{"shape":"family-specific-spec","family":"Ed25519","x_odd":false,"y":[1,2,3]}"#;
    let decoded: SerdeKeySpec = serde_json::from_str(json).unwrap();
    assert_eq!(decoded.shape, SpecShape::FamilySpecific);
    assert_eq!(KeySpec::try_from(decoded).unwrap_err().kind(), ErrorKind::MalformedPoint);

    let mut y = vec![0xffu8; 32];
    y[31] = 0x7f;
    let mirror = SerdePublicKeySpec {
        family: CurveFamily::Ed25519,
        x_odd: true,
        y,
    };
    assert_eq!(PublicKeySpec::try_from(mirror).unwrap_err().kind(), ErrorKind::MalformedPoint);
}

#[test]
fn test_unknown_shape_rejected() {
    let json = r#"{"shape":"x509-spec","family":"Ed25519","x_odd":false,"y":[]}"#;
    assert!(serde_json::from_str::<SerdeKeySpec>(json).is_err());
}

#[test]
fn test_handle_summary() -> Result<()> {
    let spec = PublicKeySpec::from_raw(CurveFamily::Ed25519, true, &[0u8; 32])?;
    let handle = PublicKeyHandle::new("platform-ec", spec);

    let summary = SerdePublicKeyHandle::from(&handle);
    assert_eq!(summary.provider, "platform-ec");
    assert_eq!(summary.spec.family, CurveFamily::Ed25519);
    assert!(summary.spec.x_odd);
    Ok(())
}

#[test]
fn test_registry_config_round_trip() -> Result<()> {
    let config = RegistryConfig::fips_first();
    let json = serde_json::to_string(&config).unwrap();
    let decoded: RegistryConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, config);

    let registry = decoded.build()?;
    assert_eq!(registry.position_of("fips-eddsa"), Some(1));
    Ok(())
}
