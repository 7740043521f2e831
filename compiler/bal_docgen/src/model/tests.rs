use pretty_assertions::assert_eq;

use super::{FieldDoc, FunctionDoc, ObjectDoc, ParameterDoc};

fn method(name: &str) -> FunctionDoc {
    FunctionDoc::new(name, format!("The {name} method."), Vec::new(), None)
}

fn counter() -> ObjectDoc {
    ObjectDoc::new(
        "Counter",
        "Counts things.",
        vec![FieldDoc::new("count", "Current value.", "int", Some("0".to_owned()))],
        vec![method("increment"), method("__init"), method("reset")],
    )
}

#[test]
fn accessors_return_construction_values() {
    let doc = counter();
    assert_eq!(doc.name(), "Counter");
    assert_eq!(doc.description(), "Counts things.");
    assert_eq!(doc.fields().len(), 1);
    assert_eq!(doc.fields()[0].type_name(), "int");
    assert_eq!(doc.fields()[0].default_value(), Some("0"));
    assert_eq!(doc.methods().len(), 3);
}

#[test]
fn init_method_is_found_by_name() {
    let doc = counter();
    assert_eq!(doc.init_method().map(FunctionDoc::name), Some("__init"));

    let names: Vec<&str> = doc.other_methods().map(FunctionDoc::name).collect();
    assert_eq!(names, ["increment", "reset"]);
}

#[test]
fn object_without_initializer() {
    let doc = ObjectDoc::new("Empty", "", Vec::new(), vec![method("run")]);
    assert_eq!(doc.init_method(), None);
}

#[test]
fn function_parameters_by_name() {
    let doc = FunctionDoc::new(
        "add",
        "Adds.",
        vec![
            ParameterDoc {
                name: "a".to_owned(),
                description: "left".to_owned(),
            },
            ParameterDoc {
                name: "b".to_owned(),
                description: "right".to_owned(),
            },
        ],
        Some("the sum".to_owned()),
    );
    assert_eq!(doc.parameter("b").map(|p| p.description.as_str()), Some("right"));
    assert_eq!(doc.parameter("c"), None);
    assert_eq!(doc.return_description(), Some("the sum"));
}

#[test]
fn json_output_omits_missing_optionals() {
    let doc = ObjectDoc::new(
        "P",
        "A point.",
        vec![FieldDoc::new("x", "", "float", None)],
        Vec::new(),
    );
    let json = doc.to_json().unwrap();
    assert!(json.contains("\"type_name\": \"float\""));
    assert!(!json.contains("default_value"));

    let back: ObjectDoc = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
}
