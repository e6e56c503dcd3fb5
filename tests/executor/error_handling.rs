//! Error Handling Tests
//!
//! Storage failures surface as system errors; bad input as InvalidInput.

use crate::common::*;
use flatstore::{Command, Error, ProductFilter, Resource};
use serde_json::json;

#[test]
fn missing_file_is_io_error() {
    let (_dir, executor) = seeded(&[]);

    let result = executor.execute(Command::ProductList {
        filter: ProductFilter::default(),
    });

    match result {
        Err(e @ Error::Io { .. }) => assert!(e.is_system()),
        other => panic!("Expected Io, got {:?}", other),
    }
}

#[test]
fn malformed_file_is_serialization_error() {
    let (dir, executor) = seeded(&[]);
    std::fs::write(file_of(&dir, Resource::Sales), "[{\"month\": ").unwrap();

    let result = executor.execute(Command::SaleList);

    assert!(matches!(result, Err(Error::Serialization { .. })));
}

#[test]
fn non_object_body_is_rejected_before_writing() {
    let (dir, executor) = seeded(&[(Resource::Products, catalog())]);
    let before = std::fs::read_to_string(file_of(&dir, Resource::Products)).unwrap();

    let result = executor.execute(Command::ProductCreate { body: json!([1, 2]) });

    assert!(matches!(result, Err(Error::InvalidInput { .. })));
    let after = std::fs::read_to_string(file_of(&dir, Resource::Products)).unwrap();
    assert_eq!(before, after);
}

#[test]
fn failed_write_on_missing_file_creates_nothing() {
    let (dir, executor) = seeded(&[]);

    let result = executor.execute(Command::UserCreate {
        body: json!({"username": "a"}),
    });

    assert!(matches!(result, Err(Error::Io { .. })));
    assert!(!file_of(&dir, Resource::Users).exists());
}

#[test]
fn error_messages_name_the_resource() {
    let (_dir, executor) = seeded(&[(Resource::Orders, json!([]))]);

    let err = executor
        .execute(Command::OrderGet { id: "5".into() })
        .unwrap_err();

    assert_eq!(err.to_string(), "Order not found: 5");
    assert!(!err.is_system());
}
