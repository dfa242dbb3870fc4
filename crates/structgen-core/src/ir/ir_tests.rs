#![allow(non_snake_case)]

use super::*;

#[test]
fn TypeExpr___primitive___is_unqualified() {
    let ty = TypeExpr::primitive("int");

    assert_eq!(ty.kind, TypeKind::Primitive("int".to_string()));
    assert!(!ty.is_const);
    assert!(!ty.is_reference);
}

#[test]
fn TypeExpr___constant___sets_only_const() {
    let ty = TypeExpr::primitive("int").constant();

    assert!(ty.is_const);
    assert!(!ty.is_reference);
}

#[test]
fn TypeExpr___reference___sets_only_reference() {
    let ty = TypeExpr::primitive("int").reference();

    assert!(!ty.is_const);
    assert!(ty.is_reference);
}

#[test]
fn TypeExpr___void___is_unqualified_void_primitive() {
    let ty = TypeExpr::void();

    assert_eq!(ty, TypeExpr::primitive("void"));
}

#[test]
fn TypeExpr___map___boxes_key_and_value() {
    let ty = TypeExpr::map(TypeExpr::primitive("std::string"), TypeExpr::primitive("int"));

    match ty.kind {
        TypeKind::Map(key, value) => {
            assert_eq!(*key, TypeExpr::primitive("std::string"));
            assert_eq!(*value, TypeExpr::primitive("int"));
        }
        other => panic!("expected map, got {other:?}"),
    }
}

#[test]
fn MemberFunction___new___defaults_to_void_return() {
    let func = MemberFunction::new("doThing");

    assert_eq!(func.name(), "doThing");
    assert_eq!(*func.return_type(), TypeExpr::void());
    assert!(func.params().is_empty());
}

#[test]
fn MemberFunction___set_return_type___replaces_default() {
    let mut func = MemberFunction::new("getValue");

    func.set_return_type(TypeExpr::primitive("int").reference());

    assert_eq!(*func.return_type(), TypeExpr::primitive("int").reference());
}

#[test]
fn MemberFunction___add_param___preserves_insertion_order() {
    let mut func = MemberFunction::new("configure");

    func.add_param("a", TypeExpr::primitive("int"));
    func.add_param("b", TypeExpr::primitive("bool"));
    func.add_param("c", TypeExpr::primitive("double"));

    let names: Vec<&str> = func.params().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn MemberFunction___add_param___keeps_duplicates_verbatim() {
    // No deduplication or validation happens in the model.
    let mut func = MemberFunction::new("oops");

    func.add_param("x", TypeExpr::primitive("int"));
    func.add_param("x", TypeExpr::primitive("int"));

    assert_eq!(func.params().len(), 2);
}
