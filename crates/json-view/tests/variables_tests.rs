use json_view::hal::{Collection, Entity};
use json_view::{IntoVariables, Key, Variable, Variables};
use serde_json::json;

fn value_of<'a>(vars: &'a Variables, key: &str) -> Option<&'a serde_json::Value> {
    vars.get(key).and_then(Variable::as_value)
}

#[test]
fn test_insert_and_get() {
    let mut vars = Variables::new();
    assert!(vars.is_empty());

    assert!(vars.insert("a", json!(1)).is_none());
    assert_eq!(vars.len(), 1);
    assert!(vars.contains_key("a"));
    assert!(!vars.contains_key("b"));
    assert_eq!(value_of(&vars, "a"), Some(&json!(1)));
}

#[test]
fn test_replace_keeps_position() {
    let mut vars = Variables::new();
    vars.insert("first", json!(1));
    vars.insert("second", json!(2));

    let previous = vars.insert("first", json!(10));
    assert_eq!(previous.and_then(|v| v.as_value().cloned()), Some(json!(1)));

    let keys: Vec<String> = vars.keys().map(Key::to_string).collect();
    assert_eq!(keys, vec!["first", "second"]);
    assert_eq!(value_of(&vars, "first"), Some(&json!(10)));
}

#[test]
fn test_remove_and_clear() {
    let mut vars: Variables = [("a", json!(1)), ("b", json!(2))].into_variables();
    assert!(vars.remove("a").is_some());
    assert!(vars.remove("a").is_none());
    assert_eq!(vars.len(), 1);

    vars.clear();
    assert!(vars.is_empty());
}

#[test]
fn test_merge_without_overwrite() {
    let mut vars: Variables = [("a", json!(1))].into_variables();
    vars.merge([("a", json!(2)), ("b", json!(3))].into_variables(), false);

    assert_eq!(value_of(&vars, "a"), Some(&json!(1)));
    assert_eq!(value_of(&vars, "b"), Some(&json!(3)));
}

#[test]
fn test_merge_with_overwrite() {
    let mut vars: Variables = [("a", json!(1)), ("c", json!(0))].into_variables();
    vars.merge([("a", json!(2)), ("b", json!(3))].into_variables(), true);

    assert_eq!(value_of(&vars, "a"), Some(&json!(2)));
    assert_eq!(value_of(&vars, "b"), Some(&json!(3)));
    assert_eq!(value_of(&vars, "c"), Some(&json!(0)));

    let keys: Vec<String> = vars.keys().map(Key::to_string).collect();
    assert_eq!(keys, vec!["a", "c", "b"]);
}

#[test]
fn test_from_json_map() {
    let map = json!({"x": 1, "y": [true]})
        .as_object()
        .cloned()
        .expect("object");
    let vars = map.into_variables();

    assert_eq!(vars.len(), 2);
    assert_eq!(value_of(&vars, "y"), Some(&json!([true])));
}

#[test]
fn test_from_vec_of_pairs() {
    let vars = vec![("k".to_string(), Variable::from("v"))].into_variables();
    assert_eq!(value_of(&vars, "k"), Some(&json!("v")));
}

#[test]
fn test_list_uses_index_keys() {
    let vars = Variables::list(["a", "b"]);
    let keys: Vec<&Key> = vars.keys().collect();
    assert_eq!(keys, vec![&Key::Index(0), &Key::Index(1)]);
    assert!(vars.get(1usize).is_some());
    assert!(vars.get("1").is_none());
}

#[test]
fn test_key_conversions() {
    assert_eq!(Key::from("a"), Key::Name("a".to_string()));
    assert_eq!(Key::from(String::from("b")), Key::Name("b".to_string()));
    assert_eq!(Key::from(3usize), Key::Index(3));
    assert_eq!(Key::Index(3).as_json_key(), "3");
    assert_eq!(Key::from("n").to_string(), "n");
}

#[test]
fn test_variable_conversions() {
    assert_eq!(Variable::from("s").as_value(), Some(&json!("s")));
    assert_eq!(Variable::from(true).as_value(), Some(&json!(true)));
    assert_eq!(Variable::from(5i64).as_value(), Some(&json!(5)));
    assert_eq!(Variable::from(5u64).as_value(), Some(&json!(5)));
    assert!(Variable::from(f64::INFINITY).as_value().is_none());
    assert!(Variable::from(Entity::new(json!(1))).as_value().is_none());
    assert!(matches!(
        Variable::from(Collection::new(json!([]))),
        Variable::Collection(_)
    ));
}

#[test]
fn test_wrapper_accessors() {
    let entity = Entity::new(json!({"id": 4})).with_id("4");
    assert_eq!(entity.id(), Some(&json!("4")));
    assert_eq!(entity.entity().as_value(), Some(&json!({"id": 4})));
    assert_eq!(entity.into_entity().as_value(), Some(&json!({"id": 4})));

    let collection = Collection::new(json!([1]));
    assert_eq!(collection.collection_name(), Collection::DEFAULT_NAME);
    let collection = collection.with_collection_name("albums");
    assert_eq!(collection.collection_name(), "albums");
    assert_eq!(collection.into_collection().as_value(), Some(&json!([1])));
}

#[test]
fn test_variable_debug_hides_boxed_values() {
    let var = Variable::from_serialize(vec![1, 2, 3]);
    assert_eq!(format!("{:?}", var), "Serialize(..)");
}
