#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Parameterized qualifier composition tests
// ============================================================================

#[test_case(false, false, "int")]
#[test_case(true, false, "const int")]
#[test_case(false, true, "int&")]
#[test_case(true, true, "const int&")]
fn cpp_type___qualifier_grid___composes_prefix_and_suffix(
    is_const: bool,
    is_reference: bool,
    expected: &str,
) {
    let mut ty = TypeExpr::primitive("int");
    if is_const {
        ty = ty.constant();
    }
    if is_reference {
        ty = ty.reference();
    }

    assert_eq!(cpp_type(&ty), expected);
}

#[test_case("int", "int")]
#[test_case("double", "double")]
#[test_case("std::string", "std::string")]
#[test_case("MyType", "MyType")]
fn cpp_type___primitive_names___pass_through(name: &str, expected: &str) {
    assert_eq!(cpp_type(&TypeExpr::primitive(name)), expected);
}

#[test_case("int", "std::vector<int>")]
#[test_case("MyType", "std::vector<MyType>")]
#[test_case("std::string", "std::vector<std::string>")]
fn cpp_type___list_elements___parameterize_vector(element: &str, expected: &str) {
    assert_eq!(cpp_type(&TypeExpr::list(element)), expected);
}
