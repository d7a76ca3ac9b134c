//! Paginated range scans: cursor advancement, limits, partial failures.

use crate::common::{seed_users, user_mapper, User};
use rowmap::{closest_row_after, Error, Filter};

#[test]
fn find_returns_full_range_in_order() {
    let mapper = user_mapper();
    let keys = seed_users(mapper.transport(), 200);

    let found = mapper.find::<User>("a", "z", &[], None);
    assert!(found.is_ok());
    assert_eq!(found.value.len(), 200);

    let returned: Vec<&str> = found.value.iter().map(|u| u.id.as_str()).collect();
    let expected: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
    assert_eq!(returned, expected, "no gaps, no duplicates, store order");
}

#[test]
fn find_start_keys_advance_by_one_zero_byte() {
    let mapper = user_mapper();
    let keys = seed_users(mapper.transport(), 150);

    mapper.find::<User>("a", "z", &[], None);

    let calls = mapper.transport().scan_calls();
    // 64 + 64 + 22, then one empty page ends the scan.
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[0].start_row, b"a");
    assert_eq!(calls[1].start_row, closest_row_after(keys[63].as_bytes()));
    assert_eq!(calls[2].start_row, closest_row_after(keys[127].as_bytes()));
    assert_eq!(calls[3].start_row, closest_row_after(keys[149].as_bytes()));
}

#[test]
fn find_with_limit_issues_shrinking_batches() {
    let mapper = user_mapper();
    let keys = seed_users(mapper.transport(), 500);

    let filter = Filter::with_limit(150);
    let found = mapper.find::<User>("a", "z", &[], Some(&filter));
    assert!(found.is_ok());
    assert_eq!(found.value.len(), 150);

    let calls = mapper.transport().scan_calls();
    let sizes: Vec<i32> = calls.iter().map(|c| c.batch_size).collect();
    assert_eq!(sizes, vec![64, 64, 22]);
    assert_eq!(calls[0].start_row, b"a");
    assert_eq!(calls[1].start_row, closest_row_after(keys[63].as_bytes()));
    assert_eq!(calls[2].start_row, closest_row_after(keys[127].as_bytes()));
}

#[test]
fn find_limit_larger_than_range_returns_everything() {
    let mapper = user_mapper();
    seed_users(mapper.transport(), 10);

    let filter = Filter::with_limit(1000);
    let found = mapper.find::<User>("a", "z", &[], Some(&filter));
    assert_eq!(found.value.len(), 10);
}

#[test]
fn find_zero_limit_returns_nothing_without_calls() {
    let mapper = user_mapper();
    seed_users(mapper.transport(), 10);

    let filter = Filter::with_limit(0);
    let found = mapper.find::<User>("a", "z", &[], Some(&filter));
    assert!(found.is_ok());
    assert!(found.value.is_empty());
    assert!(mapper.transport().scan_calls().is_empty());
}

#[test]
fn find_empty_range_is_ok() {
    let mapper = user_mapper();
    seed_users(mapper.transport(), 10);

    // Every key starts with 'u'; this range sits below them.
    let found = mapper.find::<User>("a", "b", &[], None);
    assert!(found.is_ok());
    assert!(found.value.is_empty());
    assert_eq!(mapper.transport().scan_calls().len(), 1);
}

#[test]
fn find_respects_stop_row_exclusive() {
    let mapper = user_mapper();
    let keys = seed_users(mapper.transport(), 10);

    let found = mapper.find::<User>(&keys[0], &keys[5], &[], None);
    let returned: Vec<&str> = found.value.iter().map(|u| u.id.as_str()).collect();
    let expected: Vec<&str> = keys[0..5].iter().map(|k| k.as_str()).collect();
    assert_eq!(returned, expected);
}

#[test]
fn find_failure_keeps_accumulated_pages() {
    let mapper = user_mapper();
    seed_users(mapper.transport(), 200);
    mapper.transport().fail_scan_at(2);

    let found = mapper.find::<User>("a", "z", &[], None);
    assert!(!found.is_ok());
    assert_eq!(found.value.len(), 128, "two full pages survive the failure");
    assert!(matches!(found.error, Some(Error::Transport(_))));
}

#[test]
fn find_failure_on_first_call_returns_empty_with_error() {
    let mapper = user_mapper();
    seed_users(mapper.transport(), 10);
    mapper.transport().fail_scan_at(0);

    let found = mapper.find::<User>("a", "z", &[], None);
    assert!(found.value.is_empty());
    assert!(matches!(found.error, Some(Error::Transport(_))));
    assert!(found.into_result().is_err());
}

#[test]
fn find_passes_filter_expression_through() {
    let mapper = user_mapper();
    seed_users(mapper.transport(), 3);

    let filter = Filter::with_expression("ValueFilter(=, 'binary:x')").limit(2);
    let found = mapper.find::<User>("a", "z", &[], Some(&filter));
    // The reference store ignores the expression; the limit still binds.
    assert_eq!(found.value.len(), 2);
}
