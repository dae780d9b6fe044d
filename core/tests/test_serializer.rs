// End-to-end behaviour of `EnvelopeSerializer`:

// * plain contracts, event messages, snapshots and record lists
// * dynamic-type entry points and contract-name lookup
// * one instance shared by concurrent callers

#[cfg(test)]
mod tests {
    use std::any::TypeId;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use std::thread;

    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    use envelope_core::prelude::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SimpleMessage {
        id: Uuid,
        created: DateTime<Utc>,
        value: String,
        count: i32,
        contents: Vec<String>,
    }

    impl DataContract for SimpleMessage {
        const NAMESPACE: &'static str = "AcceptanceTests";
        const NAME: &'static str = "SimpleMessage";
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestPayload {
        data: BTreeMap<String, Vec<i32>>,
    }

    impl DataContract for TestPayload {
        const NAME: &'static str = "testpayload";
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Unknown(u8);

    fn serializer() -> EnvelopeSerializer {
        EnvelopeSerializer::new([KnownType::of::<SimpleMessage>(), KnownType::of::<TestPayload>()]).unwrap()
    }

    fn sample_message() -> SimpleMessage {
        SimpleMessage {
            id: Uuid::new_v4(),
            created: Utc.with_ymd_and_hms(2024, 5, 17, 8, 30, 0).unwrap(),
            value: "x".into(),
            count: 3,
            contents: vec!["a".into(), "b".into()],
        }
    }

    fn sample_payload() -> TestPayload {
        let mut data = BTreeMap::new();
        data.insert("a".to_string(), vec![1, 2, 3]);
        data.insert("b".to_string(), vec![]);
        TestPayload { data }
    }

// # ✅ 1. Plain contract at the top level

    #[test]
    fn simple_message_roundtrip() {
        let s = serializer();
        let msg = sample_message();

        let bytes = s.serialize(&msg).unwrap();
        let back: SimpleMessage = s.deserialize(&bytes).unwrap();

        assert_eq!(back, msg);
    }

    #[test]
    fn stream_entry_points_match_byte_entry_points() {
        let s = serializer();
        let msg = sample_message();

        let mut out = Vec::new();
        s.serialize_into(&mut out, &msg).unwrap();
        assert_eq!(out, s.serialize(&msg).unwrap());

        let back: SimpleMessage = s.deserialize_from(&mut out.as_slice()).unwrap();
        assert_eq!(back, msg);
    }

// # ✅ 2. EventMessage with a registered body

    #[test]
    fn event_message_roundtrip() {
        let s = serializer();
        let msg = sample_message();
        let event = EventMessage::with_body(DynValue::new(msg.clone()))
            .with_header("user", DynValue::new("alice".to_string()))
            .with_header("attempt", DynValue::new(42i32))
            .with_header("correlation", DynValue::new(Uuid::nil()))
            .with_header("payload", DynValue::new(sample_payload()))
            .with_null_header("cause");

        let bytes = s.serialize(&event).unwrap();
        let back: EventMessage = s.deserialize(&bytes).unwrap();

        assert_eq!(back.body.as_ref().and_then(|b| b.downcast_ref::<SimpleMessage>()), Some(&msg));
        assert_eq!(back.headers.len(), 5);
        assert!(back.headers["cause"].is_none());
        assert_eq!(back.header("user").and_then(|v| v.downcast_ref::<String>()).map(String::as_str), Some("alice"));
        assert_eq!(back.header("attempt").and_then(|v| v.downcast_ref::<i32>()), Some(&42));
        assert_eq!(back.header("correlation").and_then(|v| v.downcast_ref::<Uuid>()), Some(&Uuid::nil()));
        assert_eq!(back.header("payload").and_then(|v| v.downcast_ref::<TestPayload>()), Some(&sample_payload()));
    }

    #[test]
    fn heterogeneous_event_list_roundtrip() {
        let s = serializer();
        let msg = sample_message();
        let events = vec![
            EventMessage::with_body(DynValue::new("some value".to_string())),
            EventMessage::with_body(DynValue::new(42i32)),
            EventMessage::with_body(DynValue::new(msg.clone())),
        ];

        let bytes = s.serialize(&events).unwrap();
        let back: Vec<EventMessage> = s.deserialize(&bytes).unwrap();

        assert_eq!(back.len(), 3);
        let bodies: Vec<&DynValue> = back.iter().filter_map(|e| e.body.as_ref()).collect();
        assert_eq!(bodies[0].downcast_ref::<String>().map(String::as_str), Some("some value"));
        assert_eq!(bodies[1].downcast_ref::<i32>(), Some(&42));
        assert!(bodies[2].is::<SimpleMessage>());
        assert_eq!(bodies[2].downcast_ref::<SimpleMessage>(), Some(&msg));
    }

    #[test]
    fn snapshot_list_roundtrip() {
        let s = serializer();
        let snapshots = vec![
            Snapshot::new("a", 1, None),
            Snapshot::with_bucket("b", "c", 2, Some(DynValue::new(7u32))),
        ];

        let back: Vec<Snapshot> = s.deserialize(&s.serialize(&snapshots).unwrap()).unwrap();

        assert_eq!(back.len(), 2);
        assert!(back[0].payload.is_none());
        assert_eq!(back[1].bucket_id, "b");
        assert_eq!(back[1].payload.as_ref().and_then(|p| p.downcast_ref::<u32>()), Some(&7));
    }

// # ✅ 3. Snapshot with a registered payload

    #[test]
    fn snapshot_roundtrip() {
        let s = serializer();
        let snapshot = Snapshot::new("stream-a", 12, Some(DynValue::new(sample_payload())));

        let bytes = s.serialize(&snapshot).unwrap();
        let back: Snapshot = s.deserialize(&bytes).unwrap();

        assert_eq!(back.bucket_id, "default");
        assert_eq!(back.stream_id, "stream-a");
        assert_eq!(back.stream_revision, 12);
        assert_eq!(back.payload.as_ref().and_then(|p| p.downcast_ref::<TestPayload>()), Some(&sample_payload()));
    }

// # ❌ 4. Unregistered values

    #[test]
    fn unregistered_body_is_unknown_type() {
        let s = serializer();
        let event = EventMessage::with_body(DynValue::new(Unknown(0)));

        let err = s.serialize(&event).unwrap_err();
        assert!(err.is_unknown_type());
    }

    #[test]
    fn body_from_another_registry_is_unknown_contract() {
        let writer = serializer();
        let reader = EnvelopeSerializer::new(Vec::new()).unwrap();
        let event = EventMessage::with_body(DynValue::new(sample_message()));

        let bytes = writer.serialize(&event).unwrap();
        let err = reader.deserialize::<EventMessage>(&bytes).unwrap_err();
        assert!(err.is_unknown_contract());
    }

    #[test]
    fn truncated_graph_fails() {
        let s = serializer();
        let bytes = s.serialize(&sample_message()).unwrap();

        assert!(s.deserialize::<SimpleMessage>(&bytes[..bytes.len() - 1]).is_err());
    }

// # ✅ 5. Dynamic entry points

    #[test]
    fn dynamic_roundtrip() {
        let s = serializer();
        let msg = sample_message();

        let bytes = s.serialize_dynamic(&DynValue::new(msg.clone())).unwrap();
        let back = s.deserialize_dynamic(&bytes, TypeId::of::<SimpleMessage>()).unwrap();

        assert_eq!(back.downcast::<SimpleMessage>().ok(), Some(msg));
    }

    #[test]
    fn dynamic_unknown_type_fails() {
        let s = serializer();

        assert!(s.serialize_dynamic(&DynValue::new(Unknown(1))).unwrap_err().is_unknown_type());
        assert!(s.deserialize_dynamic(&[0], TypeId::of::<Unknown>()).unwrap_err().is_unknown_type());
    }

    #[test]
    fn content_type_resolves_contract_names() {
        let s = serializer();

        assert_eq!(s.content_type("AcceptanceTests.SimpleMessage").unwrap(), TypeId::of::<SimpleMessage>());
        assert_eq!(s.content_type("testpayload").unwrap(), TypeId::of::<TestPayload>());
        assert_eq!(s.content_type("s").unwrap(), TypeId::of::<String>());
        assert!(s.content_type("missing").unwrap_err().is_unknown_contract());
    }

    #[test]
    fn single_event_envelope_roundtrip() {
        let s = serializer();

        let bytes = s.serialize_event(Some(&DynValue::new(sample_payload()))).unwrap();
        let back = s.deserialize_event(&bytes).unwrap().unwrap();
        assert_eq!(back.downcast_ref::<TestPayload>(), Some(&sample_payload()));

        assert!(s.serialize_event(None).unwrap().is_empty());
        assert!(s.deserialize_event(&[]).unwrap().is_none());
    }

// # 🧵 6. Shared across threads

    #[test]
    fn concurrent_calls_share_one_instance() {
        let s = Arc::new(serializer());

        thread::scope(|scope| {
            for i in 0..8i32 {
                let s = Arc::clone(&s);
                scope.spawn(move || {
                    let snapshot = Snapshot::new(format!("stream-{i}"), i, Some(DynValue::new(i)));
                    let bytes = s.serialize(&snapshot).unwrap();
                    let back: Snapshot = s.deserialize(&bytes).unwrap();

                    assert_eq!(back.stream_id, format!("stream-{i}"));
                    assert_eq!(back.payload.and_then(|p| p.downcast::<i32>().ok()), Some(i));
                });
            }
        });
    }
}
