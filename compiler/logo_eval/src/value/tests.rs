use super::*;
use crate::callable::Primitive;
use pretty_assertions::assert_eq;

#[test]
fn truthiness_of_numbers() {
    assert!(!Value::int(0).is_truthy());
    assert!(Value::int(-3).is_truthy());
    assert!(!Value::float(0.0).is_truthy());
    assert!(Value::float(0.5).is_truthy());
}

#[test]
fn truthiness_of_containers_and_unit() {
    assert!(!Value::string("").is_truthy());
    assert!(Value::string("a").is_truthy());
    assert!(!Value::list(vec![]).is_truthy());
    assert!(Value::list(vec![Value::int(0)]).is_truthy());
    assert!(!Value::Unit.is_truthy());
}

#[test]
fn callables_are_truthy() {
    let callable = Callable::from(Primitive::new(0, |_| Ok(Value::Unit)));
    assert!(Value::Callable(callable).is_truthy());
}

#[test]
fn from_bool_is_one_or_zero() {
    assert_eq!(Value::from_bool(true), Value::int(1));
    assert_eq!(Value::from_bool(false), Value::int(0));
}

#[test]
fn structural_equality_does_not_coerce() {
    assert_eq!(Value::int(1), Value::int(1));
    assert_ne!(Value::int(1), Value::float(1.0));
    assert_eq!(
        Value::list(vec![Value::int(1), Value::string("a")]),
        Value::list(vec![Value::int(1), Value::string("a")])
    );
}

#[test]
fn callable_equality_is_identity() {
    let a = Callable::from(Primitive::new(1, |args| Ok(args[0].clone())));
    let b = Callable::from(Primitive::new(1, |args| Ok(args[0].clone())));
    assert_eq!(Value::Callable(a.clone()), Value::Callable(a.clone()));
    assert_ne!(Value::Callable(a), Value::Callable(b));
}

#[test]
fn display_formats() {
    assert_eq!(Value::int(42).to_string(), "42");
    assert_eq!(Value::float(3.0).to_string(), "3.0");
    assert_eq!(Value::float(2.75).to_string(), "2.75");
    assert_eq!(Value::string("Bonjour").to_string(), "Bonjour");
    assert_eq!(Value::Unit.to_string(), "");
    let nested = Value::list(vec![
        Value::int(1),
        Value::list(vec![Value::int(2), Value::int(3)]),
    ]);
    assert_eq!(nested.to_string(), "[1 [2 3]]");
}

#[test]
fn display_of_named_primitive() {
    let callable = Callable::from(Primitive::named("av", 1, |_| Ok(Value::Unit)));
    assert_eq!(Value::Callable(callable).to_string(), "<primitive av/1>");
}

#[test]
fn as_number_views() {
    assert_eq!(Value::int(2).as_number(), Some(2.0));
    assert_eq!(Value::float(2.5).as_number(), Some(2.5));
    assert_eq!(Value::string("2").as_number(), None);
}

#[test]
fn type_names() {
    assert_eq!(Value::int(1).type_name(), "integer");
    assert_eq!(Value::float(1.0).type_name(), "float");
    assert_eq!(Value::string("").type_name(), "string");
    assert_eq!(Value::list(vec![]).type_name(), "list");
    assert_eq!(Value::Unit.type_name(), "unit");
}
