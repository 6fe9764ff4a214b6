//! Unit tests for the identifier newtypes

use core_kernel::{AssetId, CaseId, DebtId, PersonId};
use std::collections::BTreeMap;
use uuid::Uuid;

mod person_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        assert_ne!(PersonId::new(), PersonId::new());
    }

    #[test]
    fn test_display_prefixes() {
        assert!(PersonId::new().to_string().starts_with("PER-"));
        assert!(AssetId::new().to_string().starts_with("AST-"));
        assert!(DebtId::new().to_string().starts_with("DBT-"));
        assert!(CaseId::new().to_string().starts_with("CASE-"));
    }

    #[test]
    fn test_uuid_round_trip() {
        let uuid = Uuid::new_v4();
        let id = PersonId::from(uuid);
        let back: Uuid = id.into();
        assert_eq!(uuid, back);
    }

    #[test]
    fn test_invalid_string_is_rejected() {
        let parsed = "PER-not-a-uuid".parse::<PersonId>();
        assert!(parsed.is_err());
    }
}

mod serde_tests {
    use super::*;

    #[test]
    fn test_serializes_as_bare_uuid() {
        let id = PersonId::from_u128(1);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", Uuid::from_u128(1)));
    }

    #[test]
    fn test_usable_as_json_map_key() {
        let mut map = BTreeMap::new();
        map.insert(PersonId::from_u128(2), AssetId::from_u128(3));

        let json = serde_json::to_string(&map).unwrap();
        let back: BTreeMap<PersonId, AssetId> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn test_ordering_follows_uuid() {
        assert!(PersonId::from_u128(1) < PersonId::from_u128(2));
    }
}
