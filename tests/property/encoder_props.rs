//! Property tests for the encoder core: decodability, determinism, and
//! reference correctness against arbitrary `Value` trees, rather than
//! fixed byte grids. `proptest!` blocks generate a small value-tree
//! description and assert invariants instead of golden output.

use proptest::prelude::*;

use crate::support::decode::{decode, Decoded};
use serel::encoder::{Encoder, EncoderOptions, Value};

/// An identity-free description of a `Value` tree: plain data that can be
/// compared structurally and realized into a fresh `Value` (with fresh
/// `Rc` allocations, hence fresh identities) as many times as needed.
/// `Value` itself can't serve this role directly: cloning it clones the
/// `Rc`, which would make two "separate" trees alias the same identity.
#[derive(Debug, Clone)]
enum Plan {
    Bool(bool),
    Int(i64),
    Float(f64),
    Bytes(Vec<u8>),
    Str(String),
    List(Vec<Plan>),
}

fn leaf_strategy() -> impl Strategy<Value = Plan> {
    prop_oneof![
        any::<bool>().prop_map(Plan::Bool),
        any::<i64>().prop_map(Plan::Int),
        any::<f64>().prop_filter("no NaN", |f| !f.is_nan()).prop_map(Plan::Float),
        prop::collection::vec(any::<u8>(), 0..24).prop_map(Plan::Bytes),
        "[a-zA-Z0-9 ]{0,24}".prop_map(Plan::Str),
    ]
}

fn plan_strategy() -> impl Strategy<Value = Plan> {
    leaf_strategy().prop_recursive(
        4,  // max recursion depth
        64, // max total nodes
        6,  // max items per collection
        |inner| prop::collection::vec(inner, 0..6).prop_map(Plan::List),
    )
}

fn build(plan: &Plan) -> Value {
    match plan {
        Plan::Bool(b) => Value::bool(*b),
        Plan::Int(n) => Value::int(*n),
        Plan::Float(f) => Value::float(*f),
        Plan::Bytes(b) => Value::bytes(b.clone()),
        Plan::Str(s) => Value::str(s.clone()),
        Plan::List(items) => Value::list(items.iter().map(build).collect()),
    }
}

fn plan_matches_decoded(plan: &Plan, decoded: &Decoded) -> bool {
    match (plan, decoded) {
        (Plan::Bool(a), Decoded::Bool(b)) => a == b,
        (Plan::Int(a), Decoded::Int(b)) => a == b,
        (Plan::Float(a), Decoded::Float(b)) => a.to_bits() == b.to_bits(),
        (Plan::Bytes(a), Decoded::Bytes(b)) => a == b,
        (Plan::Str(a), Decoded::Str(b)) => a == b,
        (Plan::List(a), Decoded::List(b)) => {
            let b = b.borrow();
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| plan_matches_decoded(x, y))
        }
        _ => false,
    }
}

fn encode(value: &Value) -> Vec<u8> {
    let mut encoder = Encoder::new(EncoderOptions::default());
    encoder.dump(value).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Decodability: `decode(encode(tree)) == tree` for arbitrary value trees
    /// built without self-reference.
    #[test]
    fn prop_decode_roundtrip(plan in plan_strategy()) {
        let value = build(&plan);
        let bytes = encode(&value);
        let decoded = decode(&bytes);
        prop_assert!(plan_matches_decoded(&plan, &decoded));
    }

    /// Determinism: two independently constructed but structurally identical
    /// trees encode to byte-identical output.
    #[test]
    fn prop_determinism(plan in plan_strategy()) {
        let a = encode(&build(&plan));
        let b = encode(&build(&plan));
        prop_assert_eq!(a, b);
    }

    /// Every encoded stream starts with the fixed header and is at least as
    /// long as the header alone.
    #[test]
    fn prop_header_always_present(plan in plan_strategy()) {
        let bytes = encode(&build(&plan));
        prop_assert!(bytes.len() >= serel::encoder::wire::MAGIC.len() + 2);
        prop_assert_eq!(&bytes[0..4], &serel::encoder::wire::MAGIC);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Reference correctness: when the same scalar `Value` handle appears
    /// twice in a list, the second occurrence is either a `COPY` (pointing
    /// at a position at or before itself), or, for values where `COPY`
    /// would not be shorter, a second inline encoding. Either way the
    /// decoded values are equal.
    #[test]
    fn prop_repeated_handle_decodes_equal(s in "[a-zA-Z0-9]{1,40}") {
        let shared = Value::str(s);
        let tree = Value::list(vec![shared.clone(), shared]);
        let bytes = encode(&tree);
        match decode(&bytes) {
            Decoded::List(items) => {
                let items = items.borrow();
                prop_assert_eq!(items[0].clone(), items[1].clone());
            }
            other => prop_assert!(false, "expected list, got {:?}", other),
        }
    }

    /// Reference correctness for mutable composites: a list handle repeated
    /// inside an outer list always decodes to the same (shared) backing
    /// storage, never to two independent copies.
    #[test]
    fn prop_repeated_list_handle_shares_identity(n in 0i64..20) {
        let inner = Value::list((0..n).map(Value::int).collect());
        let tree = Value::list(vec![inner.clone(), inner]);
        let bytes = encode(&tree);
        match decode(&bytes) {
            Decoded::List(items) => {
                let items = items.borrow();
                match (&items[0], &items[1]) {
                    (Decoded::List(a), Decoded::List(b)) => {
                        prop_assert!(std::rc::Rc::ptr_eq(a, b));
                    }
                    other => prop_assert!(false, "expected two lists, got {:?}", other),
                }
            }
            other => prop_assert!(false, "expected outer list, got {:?}", other),
        }
    }
}
