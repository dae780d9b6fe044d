// Registry construction and lookup:

// * primitive short codes and builtin `nes.*` records
// * `DataContract` naming (namespace + name)
// * duplicate handling under both policies
// * known-type discovery hooks

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    use envelope_core::envelope::ContractDescriptor;
    use envelope_core::registry::{
        ContractRegistry, DataContract, DuplicateContractPolicy, KnownType, KnownTypesProvider, RegistryError,
    };
    use envelope_core::surrogate::{EventMessageSurrogate, SnapshotSurrogate};
    use envelope_core::utils::compose_contract_name;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SimpleMessage {
        value: String,
        count: i32,
    }

    impl DataContract for SimpleMessage {
        const NAMESPACE: &'static str = "AcceptanceTests";
        const NAME: &'static str = "SimpleMessage";
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestPayload {
        data: Vec<i32>,
    }

    impl DataContract for TestPayload {
        const NAME: &'static str = "testpayload";
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Nameless;

    impl DataContract for Nameless {
        const NAMESPACE: &'static str = "some.ns";
        const NAME: &'static str = "   ";
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Impostor(u8);

// # ✅ 1. Primitives and builtins are always present

    #[test]
    fn empty_known_set_still_has_primitives_and_builtins() {
        let registry = ContractRegistry::new(Vec::new()).unwrap();

        assert_eq!(registry.len(), 15);
        assert!(registry.is_consistent());

        assert_eq!(registry.contract_name(TypeId::of::<String>()), Some("s"));
        assert_eq!(registry.contract_name(TypeId::of::<char>()), Some("c"));
        assert_eq!(registry.contract_name(TypeId::of::<i16>()), Some("i16"));
        assert_eq!(registry.contract_name(TypeId::of::<i32>()), Some("i32"));
        assert_eq!(registry.contract_name(TypeId::of::<i64>()), Some("i64"));
        assert_eq!(registry.contract_name(TypeId::of::<u16>()), Some("u16"));
        assert_eq!(registry.contract_name(TypeId::of::<u32>()), Some("u32"));
        assert_eq!(registry.contract_name(TypeId::of::<u64>()), Some("u64"));
        assert_eq!(registry.contract_name(TypeId::of::<f64>()), Some("dbl"));
        assert_eq!(registry.contract_name(TypeId::of::<f32>()), Some("sng"));
        assert_eq!(registry.contract_name(TypeId::of::<bool>()), Some("b"));
        assert_eq!(registry.contract_name(TypeId::of::<Uuid>()), Some("g"));

        assert_eq!(registry.content_type("nes.proto.mc"), Some(TypeId::of::<ContractDescriptor>()));
        assert_eq!(registry.content_type("nes.em"), Some(TypeId::of::<EventMessageSurrogate>()));
        assert_eq!(registry.content_type("nes.sh"), Some(TypeId::of::<SnapshotSurrogate>()));
    }

// # ✅ 2. DataContract naming

    #[test]
    fn contract_name_joins_namespace_and_name() {
        assert_eq!(SimpleMessage::contract_name(), "AcceptanceTests.SimpleMessage");
        assert_eq!(TestPayload::contract_name(), "testpayload");

        assert_eq!(compose_contract_name("a.b", "c"), "a.b.c");
        assert_eq!(compose_contract_name("  ", "c"), "c");
        assert_eq!(compose_contract_name("a", ""), "");
    }

    #[test]
    fn known_types_resolve_both_ways() {
        let registry = ContractRegistry::new([KnownType::of::<SimpleMessage>(), KnownType::of::<TestPayload>()]).unwrap();

        let entry = registry.by_name("AcceptanceTests.SimpleMessage").unwrap();
        assert_eq!(entry.type_id(), TypeId::of::<SimpleMessage>());

        let entry = registry.by_type(TypeId::of::<TestPayload>()).unwrap();
        assert_eq!(entry.contract_name(), "testpayload");

        assert!(registry.contains_type(TypeId::of::<SimpleMessage>()));
        assert!(!registry.contains_type(TypeId::of::<Impostor>()));
        assert!(registry.by_name("nope").is_none());
        assert!(registry.is_consistent());
    }

    #[test]
    fn contract_names_are_sorted() {
        let registry = ContractRegistry::new([KnownType::of::<TestPayload>()]).unwrap();
        let names = registry.contract_names();

        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(names.contains(&"testpayload"));
    }

    #[test]
    fn entry_encode_decode_uses_its_type() {
        let registry = ContractRegistry::new([KnownType::of::<SimpleMessage>()]).unwrap();
        let entry = registry.by_type(TypeId::of::<SimpleMessage>()).unwrap();

        let msg = SimpleMessage { value: "hi".into(), count: 3 };
        let bytes = entry.encode(&msg).unwrap();
        let back = entry.decode(&bytes).unwrap();

        assert_eq!(back.downcast_ref::<SimpleMessage>(), Some(&msg));
        assert!(entry.encode(&42i32).is_err());
    }

// # ❌ 3. Missing names

    #[test]
    fn blank_name_is_rejected() {
        let err = ContractRegistry::new([KnownType::of::<Nameless>()]).unwrap_err();
        assert!(matches!(err, RegistryError::MissingContractName { .. }));

        let err = ContractRegistry::new([KnownType::named::<Impostor>("")]).unwrap_err();
        assert!(matches!(err, RegistryError::MissingContractName { .. }));
    }

// # ❌ 4. Duplicates under the default policy

    #[test]
    fn duplicate_contract_name_is_rejected_by_default() {
        let err = ContractRegistry::new([
            KnownType::of::<TestPayload>(),
            KnownType::named::<Impostor>("testpayload"),
        ])
        .unwrap_err();

        match err {
            RegistryError::DuplicateContract { contract_name, .. } => assert_eq!(contract_name, "testpayload"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn user_type_cannot_take_a_primitive_code() {
        let err = ContractRegistry::new([KnownType::named::<Impostor>("s")]).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateContract { .. }));
    }

    #[test]
    fn same_type_under_two_names_is_rejected_by_default() {
        let err = ContractRegistry::new([
            KnownType::named::<Impostor>("first"),
            KnownType::named::<Impostor>("second"),
        ])
        .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateType { .. }));
    }

    #[test]
    fn identical_registration_is_idempotent() {
        let registry = ContractRegistry::new([
            KnownType::of::<SimpleMessage>(),
            KnownType::of::<SimpleMessage>(),
        ])
        .unwrap();
        assert_eq!(registry.len(), 16);
        assert!(registry.is_consistent());
    }

// # ✅ 5. Last-write-wins policy

    #[test]
    fn last_write_wins_replaces_name_owner() {
        let registry = ContractRegistry::with_policy(
            [KnownType::of::<TestPayload>(), KnownType::named::<Impostor>("testpayload")],
            DuplicateContractPolicy::LastWriteWins,
        )
        .unwrap();

        assert_eq!(registry.content_type("testpayload"), Some(TypeId::of::<Impostor>()));
        assert!(!registry.contains_type(TypeId::of::<TestPayload>()));
        assert!(registry.is_consistent());
        assert_eq!(registry.policy(), DuplicateContractPolicy::LastWriteWins);
    }

    #[test]
    fn last_write_wins_renames_type() {
        let registry = ContractRegistry::with_policy(
            [KnownType::named::<Impostor>("first"), KnownType::named::<Impostor>("second")],
            DuplicateContractPolicy::LastWriteWins,
        )
        .unwrap();

        assert_eq!(registry.contract_name(TypeId::of::<Impostor>()), Some("second"));
        assert!(registry.content_type("first").is_none());
        assert!(registry.is_consistent());
    }

// # ✅ 6. Discovery hooks

    struct StaticProvider;

    impl KnownTypesProvider for StaticProvider {
        fn known_types(&self) -> Vec<KnownType> {
            vec![KnownType::of::<SimpleMessage>(), KnownType::of::<TestPayload>()]
        }
    }

    #[test]
    fn providers_feed_the_registry() {
        let closure = || vec![KnownType::of::<TestPayload>()];

        let from_struct = ContractRegistry::new(StaticProvider.known_types()).unwrap();
        let from_closure = ContractRegistry::new(closure.known_types()).unwrap();

        assert!(from_struct.contains_type(TypeId::of::<SimpleMessage>()));
        assert!(from_closure.contains_type(TypeId::of::<TestPayload>()));
        assert!(!from_closure.contains_type(TypeId::of::<SimpleMessage>()));
    }

    #[test]
    fn duplicate_policy_reads_snake_case() {
        let policy: DuplicateContractPolicy = serde_json::from_str("\"last_write_wins\"").unwrap();
        assert_eq!(policy, DuplicateContractPolicy::LastWriteWins);
        assert_eq!(DuplicateContractPolicy::default(), DuplicateContractPolicy::Reject);
    }
}
