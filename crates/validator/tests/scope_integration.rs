//! Integration tests for scope checks.

use pretty_assertions::assert_eq;
use serde_json::json;
use stencil_validator::prelude::*;

fn order(customer: serde_json::Value) -> Value {
    Value::from(json!({
        "id": 7,
        "quantity": 0,
        "discount": -1,
        "customer": customer,
    }))
}

fn order_checks(scope: &mut Scope<'_>) {
    scope
        .require("id")
        .positive("id")
        .positive("quantity")
        .non_negative("discount")
        .not_none("note");
    scope.nested("customer", |customer| {
        customer.require("name").not_none("email");
        customer.nested("address", |address| {
            address.require("city");
        });
    });
}

#[test]
fn problems_collect_by_attribute() {
    let subject = order(json!({"name": "ann", "email": null, "address": {}}));
    let failure = check(&subject, order_checks).unwrap_err();

    assert_eq!(
        failure.problems().to_json(),
        json!({
            "quantity": ["non-positive"],
            "discount": ["negative"],
            "note": ["None"],
            "customer": {
                "email": ["None"],
                "address": {"city": ["missing"]},
            },
        })
    );
}

#[test]
fn absent_child_contributes_nothing() {
    let subject = order(json!(null));
    let failure = check(&subject, order_checks).unwrap_err();

    let problems = failure.into_problems();
    assert!(problems.get("customer").is_none());
    assert_eq!(problems.issue_count(), 3);
}

#[test]
fn clean_subject_passes() {
    let subject = Value::from(json!({"id": 1, "quantity": 2, "discount": 0, "note": "hi"}));
    let result = check(&subject, |scope| {
        scope.require("id").positive("quantity").non_negative("discount").not_none("note");
        scope.nested("customer", |customer| {
            customer.require("name");
        });
    });
    assert!(result.is_ok());
}

#[test]
fn scopes_compose_with_models() {
    let definition = ModelDefinition::builder("Line")
        .field("sku", Field::string())
        .field("qty", Field::integer())
        .build()
        .unwrap();
    let line = definition.instantiate().with("sku", "A-1").with("qty", 0);

    assert!(line.validate().is_none());
    let failure = check(&line, |scope| {
        scope.positive("qty");
    })
    .unwrap_err();
    assert_eq!(failure.problems().to_json(), json!({"qty": ["non-positive"]}));
}

#[test]
fn manual_child_scopes() {
    let subject = Value::from(json!({"inner": {"a": 1}}));
    let mut scope = Scope::new(&subject);

    let mut inner = scope.child("inner");
    inner.require("b");
    assert!(inner.has_problems());
    scope.attach("inner", inner);

    let missing = scope.child("absent");
    assert!(missing.is_absent());
    scope.attach("absent", missing);

    assert_eq!(
        scope.into_problems().unwrap().to_json(),
        json!({"inner": {"b": ["missing"]}})
    );
}
