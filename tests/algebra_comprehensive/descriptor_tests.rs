//! Descriptor mutators, tags and serialization

use opkit::condition::{and, equal, gt, EQUAL};
use opkit::lazy::{str_bytes_len, str_chars_len};
use opkit::updater::add;
use opkit::{key, Condition, Kind, Op, Oper, Operation, Payload, Value};

#[test]
fn test_scope_edge_cases() {
    assert_eq!(key("").scope("").key(), "");
    assert_eq!(key("").scope("T").key(), "T");
    assert_eq!(key("key").scope("").key(), "key");
    assert_eq!(key("key").scope("T").key(), "T.key");
}

#[test]
fn test_prefix_and_suffix_have_no_separator() {
    let op = key("name").key_prefix("user_").key_suffix("_v2");
    assert_eq!(op.key(), "user_name_v2");
}

#[test]
fn test_display_name_falls_back_to_key() {
    let op = key("uid").with_tag("label", "User");
    assert_eq!(op.display_name("label"), "User");
    assert_eq!(op.display_name("missing"), "uid");
    assert_eq!(key("uid").with_tag("label", "").display_name("label"), "uid");
}

#[test]
fn test_with_tag_leaves_the_source_untouched() {
    let base = key("id").with_tag("a", "1");
    let derived = base.clone().with_tag("b", "2");
    assert_eq!(base.tags().len(), 1);
    assert_eq!(derived.tags().len(), 2);
}

#[test]
fn test_append_tag_only_touches_the_receiver() {
    let original = key("id").with_tag("a", "1");
    let mut copy = original.clone();
    copy.append_tag("b", "2");
    assert_eq!(copy.tag("b"), Some("2"));
    assert_eq!(original.tag("b"), None);
}

#[test]
fn test_with_tags_replaces_map() {
    let op = key("id")
        .with_tag("old", "x")
        .with_tags([("name", "Id"), ("hint", "primary")]);
    assert_eq!(op.tag("old"), None);
    assert_eq!(op.tags().len(), 2);
}

#[test]
fn test_mutators_preserve_kind() {
    let op = gt("age", 18).into_op();
    let moved = op.with_key("years").with_value(Value::Int(21)).with_tag("x", "y");
    assert_eq!(moved.kind(), Some(Kind::Condition));
    assert_eq!(Operation::from_op(moved).map(|o| o.key().to_string()), Some("years".into()));
}

#[test]
fn test_key_bound_builder_chain() {
    let cond = key("age").scope("p").with_tag("name", "Age").gt(18);
    assert_eq!(cond.key(), "p.age");
    assert_eq!(cond.as_op().display_name("name"), "Age");
    assert_eq!(cond, gt("p.age", 18).into_op().with_tag("name", "Age").condition());
}

#[test]
fn test_parts() {
    let up = add("n", 3);
    let (op, k, value) = up.as_op().parts();
    assert_eq!((op, k), ("Add", "n"));
    assert_eq!(value, &Payload::Scalar(Value::Int(3)));
}

#[test]
fn test_tree_serde_json() {
    let tree = and([equal("id", 1), gt("age", 18).into_op().with_tag("name", "Age").condition()]);
    let json = serde_json::to_string(&tree).unwrap();
    let back: Condition = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
    assert_eq!(back.value().as_conditions().unwrap()[1].as_op().tag("name"), Some("Age"));
}

#[test]
fn test_bare_descriptor_omits_kind_and_tags() {
    let json = serde_json::to_value(Op::new(EQUAL, "id", Value::Int(1))).unwrap();
    assert!(json.get("kind").is_none());
    assert!(json.get("tags").is_none());
}

#[test]
fn test_lazy_truncation_before_build() {
    let clamp = str_bytes_len(4);
    let op = key("code").with_value(Value::from("héllo")).map(&clamp);
    // "h" + "é" (2 bytes) + "l" = 4 bytes
    assert_eq!(op.value(), &Payload::Scalar(Value::from("hél")));

    let chars = str_chars_len(2);
    let op = key("code").with_value(Value::from("héllo")).map(&chars);
    assert_eq!(op.value(), &Payload::Scalar(Value::from("hé")));

    // Non-string payloads pass through
    let op = key("n").with_value(Value::Int(123456)).map(&clamp);
    assert_eq!(op.value(), &Payload::Scalar(Value::Int(123456)));
}
