#![allow(non_snake_case)]

use super::*;

#[test]
fn cpp_type___primitive___passes_name_through() {
    assert_eq!(cpp_type(&TypeExpr::primitive("int")), "int");
}

#[test]
fn cpp_type___unknown_primitive___passes_through_unvalidated() {
    // Garbage in, garbage out: the C++ compiler is the validator.
    assert_eq!(cpp_type(&TypeExpr::primitive("NoSuchType")), "NoSuchType");
}

#[test]
fn cpp_type___list___spells_std_vector() {
    assert_eq!(cpp_type(&TypeExpr::list("Foo")), "std::vector<Foo>");
}

#[test]
fn cpp_type___map___spells_std_map() {
    let ty = TypeExpr::map(TypeExpr::primitive("std::string"), TypeExpr::primitive("int"));

    assert_eq!(cpp_type(&ty), "std::map<std::string, int>");
}

#[test]
fn cpp_type___map_of_map___recurses_into_value() {
    let inner = TypeExpr::map(TypeExpr::primitive("std::string"), TypeExpr::primitive("int"));
    let outer = TypeExpr::map(TypeExpr::primitive("std::string"), inner);

    assert_eq!(
        cpp_type(&outer),
        "std::map<std::string, std::map<std::string, int>>"
    );
}

#[test]
fn cpp_type___map_with_list_value___recurses_into_list() {
    let ty = TypeExpr::map(TypeExpr::primitive("std::string"), TypeExpr::list("Foo"));

    assert_eq!(cpp_type(&ty), "std::map<std::string, std::vector<Foo>>");
}

#[test]
fn cpp_type___nested_qualifiers___are_ignored() {
    // Qualifiers act only at the outermost level; flags on map keys and
    // values are not consulted.
    let ty = TypeExpr::map(
        TypeExpr::primitive("std::string").constant(),
        TypeExpr::primitive("int").reference(),
    );

    assert_eq!(cpp_type(&ty), "std::map<std::string, int>");
}

#[test]
fn cpp_type___const_list_reference___qualifies_whole_expression() {
    let ty = TypeExpr::list("MyType").constant().reference();

    assert_eq!(cpp_type(&ty), "const std::vector<MyType>&");
}

#[test]
fn cpp_type___same_expression___translates_identically_everywhere() {
    let ty = TypeExpr::map(TypeExpr::primitive("std::string"), TypeExpr::primitive("int"))
        .constant()
        .reference();

    assert_eq!(cpp_type(&ty), cpp_type(&ty.clone()));
}
