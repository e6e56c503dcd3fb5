//! Concurrency Tests
//!
//! Writers to the same resource are serialized, so no update is lost.

use std::sync::Arc;
use std::thread;

use crate::common::*;
use flatstore::{Command, Resource};
use serde_json::{json, Value};

#[test]
fn concurrent_creates_are_all_kept() {
    let (dir, executor) = seeded(&[(Resource::Products, json!([]))]);
    let executor = Arc::new(executor);

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let executor = Arc::clone(&executor);
            thread::spawn(move || {
                for i in 0..10 {
                    executor
                        .execute(Command::ProductCreate {
                            body: json!({"name": format!("p-{}-{}", t, i)}),
                        })
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let stored = on_disk(&dir, Resource::Products);
    let stored = stored.as_array().unwrap();
    assert_eq!(stored.len(), 80);

    // Ids are unique because each create saw the previous one
    let mut ids: Vec<i64> = stored
        .iter()
        .map(|r| r["id"].as_str().unwrap().parse().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=80).collect::<Vec<_>>());
}

#[test]
fn readers_never_see_partial_files() {
    let (dir, executor) = seeded(&[(Resource::Users, json!([]))]);
    let executor = Arc::new(executor);

    let writer = {
        let executor = Arc::clone(&executor);
        thread::spawn(move || {
            for i in 0..50 {
                executor
                    .execute(Command::UserCreate {
                        body: json!({"username": format!("u{}", i)}),
                    })
                    .unwrap();
            }
        })
    };
    let reader = {
        let executor = Arc::clone(&executor);
        thread::spawn(move || {
            for _ in 0..50 {
                let output = executor
                    .execute(Command::UserList {
                        filter: Default::default(),
                    })
                    .unwrap();
                assert!(output.into_body().is_some_and(|v: Value| v.is_array()));
            }
        })
    };
    writer.join().unwrap();
    reader.join().unwrap();

    assert_eq!(on_disk(&dir, Resource::Users).as_array().unwrap().len(), 50);
}
