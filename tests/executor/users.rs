//! User Command Tests
//!
//! Lookups, the credential filter, and the rule that no user output ever
//! carries a password.

use crate::common::*;
use flatstore::{Command, Error, Output, Resource, UserFilter};
use serde_json::{json, Value};

fn accounts() -> Value {
    json!([
        {"id": 1, "username": "a", "password": "p", "email": "a@example.com"},
        {"id": 2, "username": "b", "password": "q", "email": "b@example.com", "role": "admin"}
    ])
}

fn assert_no_password(record: &Value) {
    assert!(record.get("password").is_none(), "password leaked: {}", record);
}

#[test]
fn credentials_match_returns_public_user() {
    let (_dir, executor) = seeded(&[(Resource::Users, json!([{"id": 1, "username": "a", "password": "p"}]))]);

    let output = executor
        .execute(Command::UserList {
            filter: UserFilter::credentials("a", "p"),
        })
        .unwrap();

    assert_eq!(extract_records(output), vec![json!({"id": 1, "username": "a"})]);
}

#[test]
fn wrong_password_matches_nothing() {
    let (_dir, executor) = seeded(&[(Resource::Users, json!([{"id": 1, "username": "a", "password": "p"}]))]);

    let output = executor
        .execute(Command::UserList {
            filter: UserFilter::credentials("a", "wrong"),
        })
        .unwrap();

    assert!(extract_records(output).is_empty());
}

#[test]
fn half_credentials_list_everyone() {
    let (_dir, executor) = seeded(&[(Resource::Users, accounts())]);

    let output = executor
        .execute(Command::UserList {
            filter: UserFilter {
                username: Some("a".into()),
                password: None,
            },
        })
        .unwrap();

    let users = extract_records(output);
    assert_eq!(ids(&users), ["1", "2"]);
    users.iter().for_each(assert_no_password);
}

#[test]
fn projection_drops_unlisted_fields() {
    let (_dir, executor) = seeded(&[(Resource::Users, accounts())]);

    let user = extract_record(executor.execute(Command::UserGet { id: "2".into() }).unwrap());

    assert_eq!(user, json!({"id": 2, "username": "b", "email": "b@example.com"}));
}

#[test]
fn lookup_by_username_and_email() {
    let (_dir, executor) = seeded(&[(Resource::Users, accounts())]);

    let by_name = extract_record(
        executor
            .execute(Command::UserGetByUsername {
                username: "b".into(),
            })
            .unwrap(),
    );
    let by_email = extract_record(
        executor
            .execute(Command::UserGetByEmail {
                email: "a@example.com".into(),
            })
            .unwrap(),
    );

    assert_eq!(by_name["id"], json!(2));
    assert_eq!(by_email["id"], json!(1));
    assert_no_password(&by_name);
    assert_no_password(&by_email);
}

#[test]
fn unknown_username_is_not_found() {
    let (_dir, executor) = seeded(&[(Resource::Users, accounts())]);

    let result = executor.execute(Command::UserGetByUsername {
        username: "nobody".into(),
    });

    match result {
        Err(Error::NotFound { resource, key }) => {
            assert_eq!(resource, Resource::Users);
            assert_eq!(key, "nobody");
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn create_uses_count_plus_one_and_strips_password() {
    let (dir, executor) = seeded(&[(Resource::Users, accounts())]);

    let created = extract_record(
        executor
            .execute(Command::UserCreate {
                body: json!({"username": "c", "password": "secret"}),
            })
            .unwrap(),
    );

    assert_eq!(created, json!({"id": 3, "username": "c"}));
    assert!(created.get("createdAt").is_none());

    // The password is stored, just never returned
    let stored = on_disk(&dir, Resource::Users);
    assert_eq!(stored[2]["password"], json!("secret"));
}

#[test]
fn count_plus_one_can_reuse_a_live_id() {
    let (_dir, executor) = seeded(&[(Resource::Users, accounts())]);

    executor.execute(Command::UserDelete { id: "1".into() }).unwrap();
    let created = extract_record(
        executor
            .execute(Command::UserCreate {
                body: json!({"username": "c"}),
            })
            .unwrap(),
    );

    assert_eq!(created["id"], json!(2));
}

#[test]
fn update_keeps_id_and_strips_password() {
    let (dir, executor) = seeded(&[(Resource::Users, accounts())]);

    let updated = extract_record(
        executor
            .execute(Command::UserUpdate {
                id: "1".into(),
                body: json!({"id": 7, "email": "new@example.com", "password": "n"}),
            })
            .unwrap(),
    );

    assert_eq!(updated, json!({"id": 1, "username": "a", "email": "new@example.com"}));
    assert_eq!(on_disk(&dir, Resource::Users)[0]["password"], json!("n"));
}

#[test]
fn delete_returns_no_body() {
    let (dir, executor) = seeded(&[(Resource::Users, accounts())]);

    let output = executor.execute(Command::UserDelete { id: "2".into() }).unwrap();

    assert_eq!(output, Output::Deleted);
    assert_eq!(output.into_body(), None);
    assert_eq!(ids(on_disk(&dir, Resource::Users).as_array().unwrap()), ["1"]);
}
