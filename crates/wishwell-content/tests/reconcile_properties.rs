//! Property tests for the schema-reconciling merge.
//!
//! Candidates are generated with a bias toward the real document's key
//! names so the recursive and kind-mismatch branches are exercised, not
//! just the top-level fallback.

use proptest::prelude::*;
use serde_json::{Map, Value};
use wishwell_content::{default_document, reconcile, Kind};

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop_oneof![
            Just("campaignName".to_string()),
            Just("donationUrl".to_string()),
            Just("hero".to_string()),
            Just("title".to_string()),
            Just("subtitle".to_string()),
            Just("transparency".to_string()),
            Just("goal".to_string()),
            Just("raised".to_string()),
            Just("gallery".to_string()),
            Just("images".to_string()),
            Just("footer".to_string()),
            Just("items".to_string()),
        ],
        1 => "[a-z]{1,6}",
    ]
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| Value::from(n)),
        "[a-zA-Z0-9 áéíóú]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..5).prop_map(|pairs| {
                let mut map = Map::new();
                for (k, v) in pairs {
                    map.insert(k, v);
                }
                Value::Object(map)
            }),
        ]
    })
}

/// Same key set, in which every value kind agrees, recursively through
/// plain objects.
fn same_shape(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Object(am), Value::Object(bm)) => {
            am.len() == bm.len()
                && am.iter().all(|(k, av)| match bm.get(k) {
                    Some(bv) if Kind::of(av) == Kind::of(bv) => {
                        if Kind::of(av) == Kind::Object {
                            same_shape(av, bv)
                        } else {
                            true
                        }
                    }
                    _ => false,
                })
        }
        _ => Kind::of(a) == Kind::of(b),
    }
}

proptest! {
    #[test]
    fn output_shape_always_matches_defaults(candidate in arb_json()) {
        let defaults = default_document();
        let merged = reconcile(&defaults, &candidate);
        prop_assert!(same_shape(&defaults, &merged));
    }

    #[test]
    fn reconcile_is_idempotent(candidate in arb_json()) {
        let defaults = default_document();
        let once = reconcile(&defaults, &candidate);
        let twice = reconcile(&defaults, &once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn non_object_candidates_yield_defaults(candidate in arb_json()) {
        prop_assume!(!candidate.is_object());
        let defaults = default_document();
        prop_assert_eq!(reconcile(&defaults, &candidate), defaults);
    }

    #[test]
    fn inputs_are_never_mutated(candidate in arb_json()) {
        let defaults = default_document();
        let candidate_before = candidate.clone();
        let _ = reconcile(&defaults, &candidate);
        prop_assert_eq!(candidate, candidate_before);
        prop_assert_eq!(defaults, default_document());
    }
}
