#![allow(non_snake_case)]

use super::*;

#[test]
fn CodegenError___missing_class_name___mentions_set_class_name() {
    let error = CodegenError::MissingClassName;

    let message = error.to_string();

    assert!(message.contains("set_class_name"));
    assert!(message.contains("generate"));
}
