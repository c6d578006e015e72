//! People and addresses: models, nested validation and scope checks.
//!
//! Run with `RUST_LOG=stencil_validator=debug` to see definitions freeze.

use std::sync::Arc;

use stencil_validator::prelude::*;
use tracing_subscriber::EnvFilter;

fn definitions() -> Result<(Arc<ModelDefinition>, Arc<ModelDefinition>), DefinitionError> {
    let address = ModelDefinition::builder("Address")
        .field("street", Field::string())
        .field(
            "postal_code",
            Field::string().pattern_str(r"^\d{5}$", PatternFlags::NONE)?,
        )
        .build()?;

    let person = ModelDefinition::builder("Person")
        .field("name", Field::string().max_length(40))
        .field("age", Field::integer().min_value(0).optional())
        .field("address", Field::model(&address))
        .build()?;

    Ok((address, person))
}

fn report(label: &str, problems: Option<Problem>) {
    match problems {
        None => println!("✓ {label}"),
        Some(problems) => {
            println!("✗ {label}: {problems}");
            for (path, issue) in problems.iter_issues() {
                println!("    {path}: {} ({})", issue.message, issue.code);
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (address, person) = definitions()?;

    let home = address
        .instantiate()
        .with("street", "1 Main St")
        .with("postal_code", "12345");
    let ann = person.instantiate().with("name", "Ann").with("address", home);
    report("ann", ann.validate());

    let nowhere = address
        .instantiate()
        .with("street", "")
        .with("postal_code", "abc");
    let j = person
        .instantiate()
        .with("name", "J")
        .with("age", -1)
        .with("address", nowhere);
    report("j", j.validate());

    // Plain data straight from JSON, checked against the same definition.
    let raw: Value = serde_json::from_str(r#"[{"name": "Bo", "address": null}, {"name": 3}]"#)?;
    report("raw", validate(&raw, &Validator::sequence(&person)));

    // Imperative checks on top of the declarative ones.
    let scoped = check(&ann, |scope| {
        scope.positive("age");
        scope.nested("address", |address| {
            address.require("country");
        });
    });
    if let Err(failure) = scoped {
        println!("✗ scope: {failure}");
    }

    Ok(())
}
