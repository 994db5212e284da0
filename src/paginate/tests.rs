//! Tests for the paginate module

use super::*;
use crate::extract::SelectorConfig;

fn selectors() -> CardSelectors {
    CardSelectors::compile(&SelectorConfig::default()).unwrap()
}

fn current() -> Url {
    Url::parse("https://ca.indeed.com/jobs?q=dev&l=Vancouver").unwrap()
}

#[test]
fn test_next_url_relative_href() {
    let doc = PageDocument::parse(
        r#"<html><body><a aria-label="Next Page" href="/jobs?q=dev&l=Vancouver&start=10">Next</a></body></html>"#,
    );
    let next = NextPageLocator::new().next_url(&doc, &selectors(), &current());
    assert_eq!(
        next.unwrap().as_str(),
        "https://ca.indeed.com/jobs?q=dev&l=Vancouver&start=10"
    );
}

#[test]
fn test_next_url_absolute_href() {
    let doc = PageDocument::parse(
        r#"<html><body><a aria-label="Next Page" href="https://ca.indeed.com/jobs?start=20">Next</a></body></html>"#,
    );
    let next = NextPageLocator::new().next_url(&doc, &selectors(), &current());
    assert_eq!(next.unwrap().as_str(), "https://ca.indeed.com/jobs?start=20");
}

#[test]
fn test_next_url_absent_control() {
    let doc = PageDocument::parse("<html><body><p>Last page.</p></body></html>");
    let next = NextPageLocator::new().next_url(&doc, &selectors(), &current());
    assert!(next.is_none());
}

#[test]
fn test_next_url_control_without_href() {
    let doc = PageDocument::parse(
        r#"<html><body><a aria-label="Next Page">Next</a></body></html>"#,
    );
    let next = NextPageLocator::new().next_url(&doc, &selectors(), &current());
    assert!(next.is_none());
}

#[test]
fn test_next_url_other_rel_links_ignored() {
    let doc = PageDocument::parse(
        r#"<html><body><a aria-label="Previous Page" href="/jobs?start=0">Prev</a></body></html>"#,
    );
    let next = NextPageLocator::new().next_url(&doc, &selectors(), &current());
    assert!(next.is_none());
}
