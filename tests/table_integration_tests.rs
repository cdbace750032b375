//! Integration Tests for the public table API
//!
//! Exercises open/put/get/rem/tick/close through the crate root, the way an
//! application holding owned values would.

use std::cell::RefCell;
use std::rc::Rc;

use ttl_hash::{sim, Config, TableError, TtlHash};

// == Helper Functions ==

#[derive(Debug, PartialEq)]
struct Payload {
    id: u32,
    name: String,
}

fn payload(id: u32, name: &str) -> Payload {
    Payload {
        id,
        name: name.to_string(),
    }
}

type Released = Rc<RefCell<Vec<(Vec<u8>, Payload)>>>;

fn create_test_table(bucket_count: usize, ttl_max: u32) -> (TtlHash<Payload>, Released) {
    let released: Released = Rc::new(RefCell::new(Vec::new()));
    let sink = released.clone();
    let table = TtlHash::open(
        bucket_count,
        ttl_max,
        Some(Box::new(move |key: &[u8], value: Payload| {
            sink.borrow_mut().push((key.to_vec(), value));
        })),
    )
    .unwrap();
    (table, released)
}

// == Expiry Tests ==

#[test]
fn test_entry_survives_two_ticks_and_expires_on_third() {
    let (mut table, released) = create_test_table(10, 3);

    table.put(b"key1", payload(1, "one")).unwrap();

    table.tick();
    assert!(table.contains(b"key1"));
    table.tick();
    assert!(table.contains(b"key1"));
    assert!(released.borrow().is_empty());

    table.tick();
    assert_eq!(released.borrow().len(), 1);
    assert!(table.get(b"key1").is_none());

    let released = released.borrow();
    let (key, value) = &released[0];
    assert_eq!(key, b"key1");
    assert_eq!(value, &payload(1, "one"));
}

#[test]
fn test_reading_before_each_tick_keeps_entry_alive() {
    let (mut table, released) = create_test_table(10, 2);

    table.put(b"session", payload(7, "alice")).unwrap();
    for _ in 0..100 {
        assert_eq!(table.get(b"session").map(|p| p.id), Some(7));
        table.tick();
    }

    assert!(released.borrow().is_empty());
    assert_eq!(table.ticks(), 100);
}

// == Replacement Tests ==

#[test]
fn test_put_releases_previous_value_before_new_is_visible() {
    let (mut table, released) = create_test_table(10, 5);

    table.put(b"key", payload(1, "old")).unwrap();
    table.put(b"key", payload(2, "new")).unwrap();

    assert_eq!(released.borrow().len(), 1);
    assert_eq!(released.borrow()[0].1, payload(1, "old"));
    assert_eq!(table.get(b"key"), Some(&payload(2, "new")));
    assert_eq!(table.len(), 1);
}

// == Removal Tests ==

#[test]
fn test_rem_present_and_absent() {
    let (mut table, released) = create_test_table(10, 5);

    table.put(b"key", payload(1, "one")).unwrap();
    table.rem(b"key").unwrap();

    assert_eq!(released.borrow().len(), 1);
    assert!(table.get(b"key").is_none());

    let err = table.rem(b"key").unwrap_err();
    assert!(matches!(err, TableError::NotFound(_)));
    assert_eq!(released.borrow().len(), 1);
}

// == Key Handling Tests ==

#[test]
fn test_binary_keys_are_distinct() {
    let (mut table, _released) = create_test_table(10, 5);

    table.put(&[0, 1, 2], payload(1, "a")).unwrap();
    table.put(&[0, 1, 3], payload(2, "b")).unwrap();

    assert_eq!(table.get(&[0, 1, 2]).map(|p| p.id), Some(1));
    assert_eq!(table.get(&[0, 1, 3]).map(|p| p.id), Some(2));

    table.rem(&[0, 1, 2]).unwrap();
    assert!(table.get(&[0, 1, 2]).is_none());
    assert!(table.get(&[0, 1, 3]).is_some());
}

#[test]
fn test_single_bucket_collisions() {
    let (mut table, _released) = create_test_table(1, 5);

    table.put(b"a", payload(1, "a")).unwrap();
    table.put(b"b", payload(2, "b")).unwrap();
    table.put(b"c", payload(3, "c")).unwrap();
    assert_eq!(table.longest_chain(), 3);

    table.rem(b"b").unwrap();
    assert_eq!(table.get(b"a").map(|p| p.id), Some(1));
    assert!(table.get(b"b").is_none());
    assert_eq!(table.get(b"c").map(|p| p.id), Some(3));
}

// == Close Tests ==

#[test]
fn test_close_releases_every_entry_once() {
    let (mut table, released) = create_test_table(7, 5);

    for i in 0..50u32 {
        table.put(format!("k{i}").as_bytes(), payload(i, "x")).unwrap();
    }
    let stats = table.close();

    let mut ids: Vec<u32> = released.borrow().iter().map(|(_, p)| p.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..50).collect::<Vec<_>>());
    assert_eq!(stats.drained, 50);
}

#[test]
fn test_open_validation_errors() {
    assert!(matches!(
        TtlHash::<u8>::open(0, 1, None),
        Err(TableError::InvalidConfig(_))
    ));
    assert!(matches!(
        TtlHash::<u8>::open(1, 0, None),
        Err(TableError::InvalidConfig(_))
    ));
}

// == Simulation Tests ==

#[test]
fn test_session_simulation_releases_four_sessions() {
    let report = sim::run(&Config::default()).unwrap();

    assert_eq!(report.released, 4);
    assert_eq!(report.ticks[0].active, vec!["alice", "bob"]);
    assert_eq!(report.ticks[2].active, vec!["alice", "carol"]);
    assert_eq!(report.ticks[4].active, vec!["alice", "carol", "dave"]);
}
