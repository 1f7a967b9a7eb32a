//! Schema-reconciling merge.
//!
//! Reconciles an arbitrary stored document against the canonical default
//! document so the rest of the application always sees the shape it was
//! built for. The defaults double as the schema: the key set and per-key
//! kinds of the default tree define what the output must look like.

use serde_json::{Map, Value};

use crate::kind::Kind;

/// Merges `candidate` into `defaults`, keeping the defaults' shape.
///
/// Total and pure: never fails, never panics, mutates neither input.
/// The output always has exactly the defaults' key set, and every value
/// kind agrees with the defaults' kind at that key.
///
/// Per key of `defaults`:
/// - absent or `null` in the candidate → default kept;
/// - both sides plain objects → merged recursively;
/// - same kind on both sides → candidate value taken wholesale;
/// - kind mismatch → default kept.
///
/// Candidate keys unknown to the defaults are dropped. Arrays are leaf
/// values here: a kind-matching candidate array replaces the default
/// array entirely, with no per-element validation or merging. Falsy
/// values (`0`, `""`, `false`) are valid and pass through; only `null`
/// and absence fall back.
pub fn reconcile(defaults: &Value, candidate: &Value) -> Value {
    let (default_map, candidate_map) = match (defaults, candidate) {
        (Value::Object(d), Value::Object(c)) => (d, c),
        // Non-object candidates (null, scalars, arrays) cannot patch
        // anything; the defaults stand as-is.
        _ => return defaults.clone(),
    };
    let mut merged = Map::new();
    for (key, default_value) in default_map {
        let value = match candidate_map.get(key) {
            None | Some(Value::Null) => default_value.clone(),
            Some(candidate_value) => {
                match (Kind::of(default_value), Kind::of(candidate_value)) {
                    (Kind::Object, Kind::Object) => reconcile(default_value, candidate_value),
                    (default_kind, candidate_kind) if default_kind == candidate_kind => {
                        candidate_value.clone()
                    }
                    _ => default_value.clone(),
                }
            }
        };
        merged.insert(key.clone(), value);
    }
    Value::Object(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn defaults() -> Value {
        json!({
            "campaignName": "Mi Deseo de Navidad",
            "donationUrl": "https://example.org/donar",
            "hero": {
                "title": "Una Navidad para Todos",
                "subtitle": "Ayúdanos a llenar de alegría cada hogar",
            },
            "transparency": {
                "goal": 5000.0,
                "raised": 100.0,
            },
            "gallery": {
                "images": [{"id": 1, "src": "a.jpg", "alt": "a"}],
            },
        })
    }

    #[test]
    fn null_candidate_yields_defaults() {
        assert_eq!(reconcile(&defaults(), &json!(null)), defaults());
    }

    #[test]
    fn scalar_candidate_yields_defaults() {
        assert_eq!(reconcile(&defaults(), &json!(42)), defaults());
        assert_eq!(reconcile(&defaults(), &json!("hola")), defaults());
        assert_eq!(reconcile(&defaults(), &json!(false)), defaults());
    }

    #[test]
    fn array_candidate_yields_defaults() {
        assert_eq!(reconcile(&defaults(), &json!([1, 2, 3])), defaults());
    }

    #[test]
    fn exact_shape_candidate_passes_through() {
        let candidate = json!({
            "campaignName": "Otra Campaña",
            "donationUrl": "https://example.org/otro",
            "hero": {
                "title": "Nuevo título",
                "subtitle": "Nuevo subtítulo",
            },
            "transparency": {
                "goal": 9000.0,
                "raised": 4321.0,
            },
            "gallery": {
                "images": [],
            },
        });
        assert_eq!(reconcile(&defaults(), &candidate), candidate);
    }

    #[test]
    fn missing_key_keeps_default() {
        let merged = reconcile(&defaults(), &json!({"campaignName": "X"}));
        assert_eq!(merged["campaignName"], json!("X"));
        assert_eq!(merged["donationUrl"], defaults()["donationUrl"]);
        assert_eq!(merged["hero"], defaults()["hero"]);
    }

    #[test]
    fn null_value_keeps_default() {
        let merged = reconcile(&defaults(), &json!({"campaignName": null}));
        assert_eq!(merged["campaignName"], json!("Mi Deseo de Navidad"));
    }

    #[test]
    fn kind_mismatch_keeps_default() {
        // A stringified number must not leak into a numeric field.
        let merged = reconcile(&defaults(), &json!({"transparency": {"goal": "5000"}}));
        assert_eq!(merged["transparency"]["goal"], json!(5000.0));
    }

    #[test]
    fn nested_objects_merge_recursively() {
        let merged = reconcile(&defaults(), &json!({"hero": {"title": "Cambiado"}}));
        assert_eq!(merged["hero"]["title"], json!("Cambiado"));
        assert_eq!(
            merged["hero"]["subtitle"],
            json!("Ayúdanos a llenar de alegría cada hogar")
        );
    }

    #[test]
    fn extra_keys_are_dropped() {
        let merged = reconcile(&defaults(), &json!({"injected": true, "hero": {"evil": 1}}));
        assert!(merged.get("injected").is_none());
        assert!(merged["hero"].get("evil").is_none());
    }

    #[test]
    fn falsy_values_are_preserved() {
        let merged = reconcile(
            &defaults(),
            &json!({"campaignName": "", "transparency": {"raised": 0.0}}),
        );
        assert_eq!(merged["campaignName"], json!(""));
        assert_eq!(merged["transparency"]["raised"], json!(0.0));
    }

    #[test]
    fn arrays_replace_wholesale() {
        let candidate = json!({
            "gallery": {"images": [{"id": 2, "src": "b.jpg"}, {"id": 3, "src": "c.jpg"}]},
        });
        let merged = reconcile(&defaults(), &candidate);
        // The whole array is taken, malformed elements and all; array
        // contents are never validated element-by-element.
        assert_eq!(merged["gallery"]["images"], candidate["gallery"]["images"]);
    }

    #[test]
    fn array_does_not_substitute_for_object_field() {
        let merged = reconcile(&defaults(), &json!({"hero": [1, 2]}));
        assert_eq!(merged["hero"], defaults()["hero"]);
    }

    #[test]
    fn object_does_not_substitute_for_array_field() {
        let merged = reconcile(&defaults(), &json!({"gallery": {"images": {"id": 9}}}));
        assert_eq!(merged["gallery"], defaults()["gallery"]);
    }

    #[test]
    fn null_default_field_never_recurses() {
        let defaults = json!({"note": null, "name": "x"});
        // A null default is not a recursable object; whatever the
        // candidate offers, the field stays null.
        assert_eq!(reconcile(&defaults, &json!({"note": {"a": 1}})), defaults);
        assert_eq!(reconcile(&defaults, &json!({"note": "texto"})), defaults);
        assert_eq!(reconcile(&defaults, &json!({"note": null})), defaults);
    }

    #[test]
    fn idempotent_on_arbitrary_garbage() {
        let candidate = json!({
            "campaignName": 7,
            "hero": {"title": ["not", "a", "string"], "subtitle": "ok"},
            "transparency": "broken",
            "extra": {"deep": [null]},
        });
        let once = reconcile(&defaults(), &candidate);
        let twice = reconcile(&defaults(), &once);
        assert_eq!(once, twice);
    }
}
