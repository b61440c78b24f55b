use simpletree::prelude::*;
use simpletree::Node;

use serde::Serialize;

use std::sync::Arc;


/// A record type with a static field map and a declared label.
#[derive(Debug, Clone, Serialize)]
struct Transport {
    gender: String,
    #[serde(rename = "hasCar")]
    has_car: String,
    #[serde(rename = "costPerKm")]
    cost_per_km: String,
    income: String,
    transportation: Option<String>,
}


impl Transport {
    fn new(fields: [&str; 5]) -> Self {
        let [gender, has_car, cost_per_km, income, transportation] = fields;
        Self {
            gender: gender.to_string(),
            has_car: has_car.to_string(),
            cost_per_km: cost_per_km.to_string(),
            income: income.to_string(),
            transportation: Some(transportation.to_string()),
        }
    }


    fn query(&self) -> Self {
        Self { transportation: None, ..self.clone() }
    }
}


impl Record for Transport {
    fn schema(&self) -> Schema {
        Schema::new(["gender", "hasCar", "costPerKm", "income", "transportation"])
            .with_label("transportation")
    }


    fn value(&self, field: &str) -> Option<&str> {
        match field {
            "gender" => Some(&self.gender),
            "hasCar" => Some(&self.has_car),
            "costPerKm" => Some(&self.cost_per_km),
            "income" => Some(&self.income),
            "transportation" => self.transportation.as_deref(),
            _ => None,
        }
    }
}


fn transports() -> Vec<Transport> {
    [
        ["Male",   "0", "Cheap",     "Low",    "Bus"],
        ["Male",   "1", "Cheap",     "Medium", "Bus"],
        ["Female", "1", "Cheap",     "Medium", "Train"],
        ["Female", "0", "Cheap",     "Low",    "Bus"],
        ["Male",   "1", "Cheap",     "Medium", "Bus"],
        ["Male",   "0", "Standard",  "Medium", "Train"],
        ["Female", "1", "Standard",  "Medium", "Train"],
        ["Female", "1", "Expensive", "High",   "Car"],
        ["Male",   "2", "Expensive", "Medium", "Car"],
        ["Female", "2", "Expensive", "High",   "Car"],
    ]
    .into_iter()
    .map(Transport::new)
    .collect()
}


fn rows(names: &[&str], label: Option<&str>, table: &[&[&str]]) -> Vec<Row> {
    let mut schema = Schema::new(names.iter().copied());
    if let Some(label) = label {
        schema = schema.with_label(label);
    }
    let schema = Arc::new(schema);
    table.iter()
        .map(|values| Row::new(Arc::clone(&schema), values.iter().copied()))
        .collect()
}


#[test]
fn learns_from_a_static_field_map() {
    let records = transports();
    let mut tree = DecisionTreeBuilder::new().build();
    assert!(tree.learn(&records).unwrap());

    for record in records.iter() {
        let predicted = tree.outcome(&record.query()).unwrap();
        assert_eq!(predicted, record.transportation.as_deref());
    }
}


#[test]
fn learns_from_serialized_structs() {
    let records = transports().iter()
        .map(|t| JsonRecord::from_serialize(t).unwrap())
        .collect::<Vec<_>>();

    // The serialized schema carries no label designation.
    let mut tree = DecisionTreeBuilder::new().build();
    let err = tree.learn(&records).unwrap_err();
    assert!(matches!(err, TreeError::MissingLabel));

    let mut tree = DecisionTreeBuilder::new()
        .label("transportation")
        .build();
    assert!(tree.learn(&records).unwrap());

    for transport in transports() {
        let query = JsonRecord::from_serialize(&transport.query()).unwrap();
        let predicted = tree.outcome(&query).unwrap();
        assert_eq!(predicted, transport.transportation.as_deref());
    }
}


#[test]
fn untrained_trees_classify_nothing() {
    let tree = DecisionTreeBuilder::new().build();
    assert!(tree.classifier().is_none());
    assert_eq!(tree.outcome(&transports()[0]).unwrap(), None);
}


#[test]
fn empty_input_keeps_the_previous_tree() {
    let mut tree = DecisionTreeBuilder::new().build();
    let records: Vec<Transport> = Vec::new();
    assert!(!tree.learn(&records).unwrap());
    assert!(tree.classifier().is_none());

    assert!(tree.learn(&transports()).unwrap());
    let before = tree.classifier().cloned();
    assert!(!tree.learn(&records).unwrap());
    assert_eq!(tree.classifier().cloned(), before);
}


#[test]
fn failed_training_keeps_the_previous_tree() {
    let mut tree = DecisionTreeBuilder::new().build();
    assert!(tree.learn(&transports()).unwrap());
    let before = tree.classifier().cloned();

    let contradicting = rows(
        &["a", "c"],
        Some("c"),
        &[&["x", "yes"], &["x", "no"]],
    );
    let err = tree.learn(&contradicting).unwrap_err();
    assert!(matches!(
        err,
        TreeError::Unsplittable { ref attribute } if attribute == "a"
    ));
    assert_eq!(tree.classifier().cloned(), before);

    // Both values of `a` stay mixed, so both branches are dropped.
    let mixed = rows(
        &["a", "c"],
        Some("c"),
        &[&["x", "yes"], &["x", "no"], &["y", "yes"], &["y", "no"]],
    );
    let err = tree.learn(&mixed).unwrap_err();
    assert!(matches!(
        err,
        TreeError::Unsplittable { ref attribute } if attribute == "a"
    ));
    assert_eq!(tree.classifier().cloned(), before);
}


#[test]
fn pure_sample_yields_a_single_leaf() {
    let records = rows(
        &["outlook", "windy", "play"],
        Some("play"),
        &[&["sunny", "true", "yes"], &["rain", "false", "yes"]],
    );
    let mut tree = DecisionTreeBuilder::new().build();
    assert!(tree.learn(&records).unwrap());

    let f = tree.classifier().unwrap();
    assert_eq!(f.root(), &Node::leaf("yes"));

    let schema = records[0].shared_schema().clone();
    let unseen = Row::new(schema, ["snow", "maybe"]);
    assert_eq!(tree.outcome(&unseen).unwrap(), Some("yes"));
}


#[test]
fn impure_branches_without_attributes_are_dropped() {
    // `a` and `b` tie at the root, so `a` is chosen.
    // `a = x` stays impure after testing `b` and is dropped.
    let records = rows(
        &["a", "b", "c"],
        Some("c"),
        &[&["x", "p", "yes"], &["x", "p", "no"], &["y", "q", "yes"]],
    );
    let mut tree = DecisionTreeBuilder::new().build();
    assert!(tree.learn(&records).unwrap());

    let f = tree.classifier().unwrap();
    let Node::Branch { attribute, children } = f.root() else {
        panic!("the root must be a branch");
    };
    assert_eq!(attribute, "a");
    assert_eq!(children.len(), 1);

    let schema = records[0].shared_schema().clone();
    let query = Row::new(schema.clone(), ["y", "q"]);
    assert_eq!(tree.outcome(&query).unwrap(), Some("yes"));
    let query = Row::new(schema, ["x", "p"]);
    assert_eq!(tree.outcome(&query).unwrap(), None);
}


#[test]
fn schema_errors() {
    let mut tree = DecisionTreeBuilder::new().build();

    let unlabeled = rows(&["a", "c"], None, &[&["x", "yes"]]);
    assert!(matches!(
        tree.learn(&unlabeled).unwrap_err(),
        TreeError::MissingLabel
    ));

    let only_label = rows(&["c"], Some("c"), &[&["yes"], &["no"]]);
    assert!(matches!(
        tree.learn(&only_label).unwrap_err(),
        TreeError::NoAttribute { .. }
    ));

    let no_fields = rows(&[], None, &[&[]]);
    assert!(matches!(
        tree.learn(&no_fields).unwrap_err(),
        TreeError::EmptySchema
    ));

    let mut tree = DecisionTreeBuilder::new().label("class").build();
    assert!(matches!(
        tree.learn(&unlabeled).unwrap_err(),
        TreeError::UnknownLabel(ref label) if label == "class"
    ));
}


#[test]
fn missing_training_values_are_accessor_errors() {
    // The second row lacks its label.
    let records = rows(
        &["a", "c"],
        Some("c"),
        &[&["x", "yes"], &["y"]],
    );
    let mut tree = DecisionTreeBuilder::new().build();
    assert!(matches!(
        tree.learn(&records).unwrap_err(),
        TreeError::UnknownField { ref field } if field == "c"
    ));
}


#[test]
fn queries_missing_a_tested_field_are_errors() {
    let mut tree = DecisionTreeBuilder::new().build();
    assert!(tree.learn(&transports()).unwrap());

    let schema = Arc::new(Schema::new(["gender", "income"]));
    let query = Row::new(schema, ["Male", "Low"]);
    assert!(matches!(
        tree.outcome(&query).unwrap_err(),
        TreeError::UnknownField { ref field } if field == "costPerKm"
    ));
}


#[test]
fn retraining_replaces_the_tree() {
    let mut tree = DecisionTreeBuilder::new().build();
    assert!(tree.learn(&transports()).unwrap());

    let records = rows(
        &["gender", "hasCar", "costPerKm", "income", "transportation"],
        Some("transportation"),
        &[
            &["Male", "0", "Cheap", "Low", "Bike"],
            &["Female", "0", "Cheap", "Low", "Walk"],
        ],
    );
    assert!(tree.learn(&records).unwrap());

    let f = tree.classifier().unwrap();
    let Node::Branch { attribute, .. } = f.root() else {
        panic!("the root must be a branch");
    };
    assert_eq!(attribute, "gender");
    assert_eq!(tree.outcome(&transports()[0].query()).unwrap(), Some("Bike"));
    assert_eq!(tree.outcome(&transports()[7].query()).unwrap(), Some("Walk"));
}
