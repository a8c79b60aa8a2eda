use std::cell::Cell;

use fastpath::{cache_key, Optimizer, OptimizerConfig};
use http::header::{HeaderMap, HeaderValue, ACCEPT};

use crate::request_headers;

#[test]
fn test_header_factory_runs_at_most_once() {
    fastpath_tests::init_tracing();
    let opt = Optimizer::new(OptimizerConfig::default());
    let key = cache_key(&request_headers());
    let calls = Cell::new(0);

    let first = opt.cached_headers(&key, || {
        calls.set(calls.get() + 1);
        request_headers()
    });
    let second = opt.cached_headers(&key, || {
        calls.set(calls.get() + 1);
        request_headers()
    });

    assert_eq!(calls.get(), 1);
    assert_eq!(first, second);
}

#[test]
fn test_header_copies_are_independent() {
    let opt = Optimizer::new(OptimizerConfig::default());

    let mut copy = opt.cached_headers("shared", request_headers);
    copy.insert(ACCEPT, HeaderValue::from_static("text/html"));

    let fresh = opt.cached_headers("shared", || unreachable!("hit must not invoke factory"));
    assert_eq!(fresh, request_headers());
    assert_ne!(fresh, copy);
}

#[test]
fn test_header_cache_eviction_at_capacity_1000() {
    let opt = Optimizer::new(OptimizerConfig::default());

    for i in 0..1000 {
        opt.cached_headers(&format!("key-{i}"), HeaderMap::new);
    }
    assert_eq!(opt.snapshot().header_cache_entries, 1000);

    // The 1001st distinct key evicts exactly the first-inserted key
    opt.cached_headers("key-1000", HeaderMap::new);
    assert_eq!(opt.snapshot().header_cache_entries, 1000);

    // The second-inserted key survived the eviction
    opt.cached_headers("key-1", || unreachable!("key-1 must still be cached"));

    let refetched = Cell::new(false);
    opt.cached_headers("key-0", || {
        refetched.set(true);
        HeaderMap::new()
    });
    assert!(refetched.get(), "evicted key must invoke its factory again");
}

#[test]
fn test_url_resolve_returns_distinct_equal_objects() {
    let opt = Optimizer::new(OptimizerConfig::default());

    let first = opt.resolve_url("http://x/a").unwrap();
    let second = opt.resolve_url("http://x/a").unwrap();
    assert_eq!(first.as_str(), second.as_str());
    assert_eq!(opt.snapshot().url_cache_entries, 1);
}

#[test]
fn test_url_parse_failure_surfaces_unchanged() -> anyhow::Result<()> {
    let opt = Optimizer::new(OptimizerConfig::default());

    let err = opt.resolve_url("http://[broken").unwrap_err();
    assert!(err.to_string().contains("http://[broken"));
    assert_eq!(opt.snapshot().url_cache_entries, 0);

    // The layer stays fully usable after a failed parse
    let ok = opt.resolve_url("http://x/a")?;
    assert_eq!(ok.as_str(), "http://x/a");
    Ok(())
}

#[test]
fn test_already_parsed_url_is_passed_through() -> anyhow::Result<()> {
    let opt = Optimizer::new(OptimizerConfig::default());

    let parsed = url::Url::parse("https://example.com/v1")?;
    let resolved = opt.resolve_url(parsed.clone())?;
    assert_eq!(resolved, parsed);
    assert_eq!(opt.snapshot().url_cache_entries, 0);
    Ok(())
}
