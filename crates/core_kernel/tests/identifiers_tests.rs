//! Tests for the identifier newtypes
//!
//! Cover creation, parsing, conversion, serialization and display formatting.

use core_kernel::ProposalId;
use uuid::Uuid;

mod proposal_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = ProposalId::new();
        let id2 = ProposalId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = ProposalId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = ProposalId::new_v7();
        assert!(id1 < id2);
    }

    #[test]
    fn test_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = ProposalId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(ProposalId::prefix(), "PRP");
    }

    #[test]
    fn test_from_str_without_prefix() {
        let uuid = Uuid::new_v4();
        let parsed: ProposalId = uuid.to_string().parse().unwrap();
        assert_eq!(*parsed.as_uuid(), uuid);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("PRP-not-a-uuid".parse::<ProposalId>().is_err());
        assert!("".parse::<ProposalId>().is_err());
    }

    #[test]
    fn test_json_serialization_is_transparent() {
        let uuid = Uuid::new_v4();
        let id = ProposalId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));

        let back: ProposalId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_nil_uuid() {
        let id = ProposalId::from_uuid(Uuid::nil());
        assert_eq!(id.to_string(), "PRP-00000000-0000-0000-0000-000000000000");
    }
}
