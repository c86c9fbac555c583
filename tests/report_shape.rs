//! Pins the serialized report shape a rendering or transport layer
//! consumes: labels, namespaced kinds, raw params, nested arrays.

use checktree::prelude::*;
use serde_json::json;

#[test]
fn report_serializes_with_stable_field_names_and_kinds() {
    let v = Validation::new("signup")
        .not_blank("   ", "username")
        .greater_than(15, 18, "age")
        .nested((), "address", |(), v| v.presence(None::<&str>, "street"));

    let report = serde_json::to_value(v.context()).expect("report must serialize");

    assert_eq!(
        report,
        json!({
            "label": "signup",
            "errors": [
                {
                    "label": "username",
                    "kind": "validation.blank",
                    "message": "username cannot be blank",
                    "params": []
                },
                {
                    "label": "age",
                    "kind": "validation.greaterThan",
                    "message": "age must be greater than 18",
                    "params": [["bound", "18"]]
                }
            ],
            "nested": [
                {
                    "label": "address",
                    "errors": [
                        {
                            "label": "street",
                            "kind": "validation.presence",
                            "message": "street must be present",
                            "params": []
                        }
                    ],
                    "nested": []
                }
            ]
        })
    );
}

#[test]
fn renderers_can_rebuild_messages_from_the_triple() {
    let failure = Validation::new("order")
        .greater_than(0, 1, "quantity")
        .into_result()
        .unwrap_err();

    // A locale catalog keyed on (path, kind) plus raw params is all a
    // renderer needs; the default message is ignorable.
    let rendered: Vec<String> = failure
        .context()
        .flatten()
        .into_iter()
        .map(|(path, error)| {
            format!(
                "{path} {} bound={}",
                error.kind(),
                error.param("bound").unwrap_or("?")
            )
        })
        .collect();

    assert_eq!(rendered, ["order.quantity validation.greaterThan bound=1"]);
}
