//! Tests for the dedup module

use super::*;

#[test]
fn test_empty_set() {
    let set = DedupSet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert!(set.is_new("https://example.com/job/1"));
}

#[test]
fn test_is_new_then_mark_seen() {
    let mut set = DedupSet::new();
    let url = "https://example.com/job/1";

    assert!(set.is_new(url));
    set.mark_seen(url);
    assert!(!set.is_new(url));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_accept_first_time_only() {
    let mut set = DedupSet::new();
    let url = "https://example.com/job/1";

    assert!(set.accept(url));
    assert!(!set.accept(url));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_accept_distinguishes_urls() {
    let mut set = DedupSet::new();
    assert!(set.accept("https://example.com/job/1"));
    assert!(set.accept("https://example.com/job/2"));
    assert!(!set.accept("https://example.com/job/1"));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_mark_seen_idempotent() {
    let mut set = DedupSet::new();
    set.mark_seen("https://example.com/job/1");
    set.mark_seen("https://example.com/job/1");
    assert_eq!(set.len(), 1);
}
