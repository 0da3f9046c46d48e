use eddsa_keyspec::{
    Coordinate,
    CurveFamily,
    EdPoint,
    Error,
    ErrorKind,
    KeySpec,
    Provider,
    ProviderRegistry,
    PublicKeySpec,
    SpecShape,
};

use proptest::prelude::*;

// Strategy for generating curve families
fn curve_families() -> impl Strategy<Value = CurveFamily> {
    prop_oneof![Just(CurveFamily::Ed25519), Just(CurveFamily::Ed448)]
}

// Strategy for generating spec shapes
fn spec_shapes() -> impl Strategy<Value = SpecShape> {
    prop_oneof![Just(SpecShape::FamilySpecific), Just(SpecShape::Generic)]
}

// Strategy for generating canonical coordinates: top octet kept well below the prime
fn canonical_coordinates(family: CurveFamily) -> impl Strategy<Value = Vec<u8>> {
    let len = family.key_length();
    prop::collection::vec(any::<u8>(), len).prop_map(move |mut y| {
        y[len - 1] = 0;
        y[len - 2] &= 0x7f;
        y
    })
}

// Strategy for generating small provider sets: (declares EdDSA, accepted shape)
fn provider_sets() -> impl Strategy<Value = Vec<(bool, SpecShape)>> {
    prop::collection::vec((any::<bool>(), spec_shapes()), 0..6)
}

fn build_registry(set: &[(bool, SpecShape)]) -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();
    for (i, (declares, shape)) in set.iter().enumerate() {
        let algorithm = if *declares { "EdDSA" } else { "Ed25519" };
        let provider = Provider::builder(format!("p{}", i))
            .with_algorithm(algorithm)
            .accepting(*shape)
            .build();
        registry.append(provider).unwrap();
    }
    registry
}

fn order(registry: &ProviderRegistry) -> Vec<String> {
    registry.ordered_providers().map(|p| p.name().to_string()).collect()
}

proptest! {
    #[test]
    fn test_zero_coordinate_never_malformed(family in curve_families()) {
        let zeros = vec![0u8; family.key_length()];
        prop_assert!(PublicKeySpec::from_raw(family, false, &zeros).is_ok());
    }

    #[test]
    fn test_canonical_coordinates_accepted(
        (family, y) in curve_families().prop_flat_map(|f| (Just(f), canonical_coordinates(f))),
        x_odd in any::<bool>(),
    ) {
        let spec = PublicKeySpec::from_raw(family, x_odd, &y).unwrap();
        prop_assert_eq!(spec.point().is_x_odd(), x_odd);
        prop_assert_eq!(spec.point().y(), &Coordinate::from_le_bytes(&y));

        let decoded = PublicKeySpec::from_encoded(family, &spec.encode()).unwrap();
        prop_assert_eq!(decoded, spec);
    }

    #[test]
    fn test_wrong_length_always_malformed(
        family in curve_families(),
        len in 0usize..80,
    ) {
        prop_assume!(len != family.key_length());
        let result = PublicKeySpec::from_raw(family, false, &vec![0u8; len]);
        prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::MalformedPoint);
    }

    #[test]
    fn test_coordinate_width_checked(
        family in curve_families(),
        bytes in prop::collection::vec(any::<u8>(), 0..80),
    ) {
        let y = Coordinate::from_le_bytes(&bytes);
        let fits = y < family.field_prime();
        let result = PublicKeySpec::new(family, EdPoint::new(false, y));
        prop_assert_eq!(result.is_ok(), fits);
    }

    #[test]
    fn test_remove_missing_never_errors(set in provider_sets(), name in "[a-z]{1,8}") {
        let mut registry = build_registry(&set);
        let before = order(&registry);
        prop_assume!(registry.lookup(&name).is_none());

        prop_assert!(registry.remove_by_name(&name).is_none());
        prop_assert_eq!(order(&registry), before);
    }

    #[test]
    fn test_duplicate_insert_rejected_at_any_position(
        set in provider_sets().prop_filter("non-empty", |s| !s.is_empty()),
        pick in any::<prop::sample::Index>(),
        position in 0usize..10,
    ) {
        let mut registry = build_registry(&set);
        let before = order(&registry);
        let name = before[pick.index(before.len())].clone();

        let result = registry.insert_at(Provider::builder(name.clone()).build(), position);
        prop_assert_eq!(result, Err(Error::DuplicateProviderName(name)));
        prop_assert_eq!(order(&registry), before);
    }

    #[test]
    fn test_first_claimant_decides(set in provider_sets(), shape in spec_shapes()) {
        let registry = build_registry(&set);
        let spec = PublicKeySpec::from_raw(CurveFamily::Ed25519, false, &[0u8; 32]).unwrap();
        let spec = KeySpec::family_specific(spec).reshape(shape);

        let result = registry.resolver().resolve_and_build("EdDSA", &spec);
        match set.iter().position(|(declares, _)| *declares) {
            None => prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::NoProviderSupportsAlgorithm),
            Some(i) => {
                let expected = format!("p{}", i);
                if set[i].1 == shape {
                    let key = result.unwrap();
                    prop_assert_eq!(key.provider(), expected.as_str());
                } else {
                    let err = result.unwrap_err();
                    prop_assert_eq!(err.provider(), Some(expected.as_str()));
                }
            }
        }
    }
}
