use fastpath::{cache_key, Optimizer, OptimizerConfig, PoolConfig, Scheme};

use crate::request_headers;

fn asymmetric_config() -> OptimizerConfig {
    OptimizerConfig {
        encrypted_pool: PoolConfig {
            max_sockets: 128,
            ..PoolConfig::default()
        },
        ..OptimizerConfig::default()
    }
}

#[test]
fn test_disable_hides_both_pools_reenable_restores_them() {
    let opt = Optimizer::new(asymmetric_config());

    opt.set_enabled(false);
    assert!(opt.pool_for(Scheme::Plaintext).is_none());
    assert!(opt.pool_for(Scheme::Encrypted).is_none());

    // Re-enabling hands back the original configured pools, not fresh ones
    opt.set_enabled(true);
    let plaintext = opt.pool_for(Scheme::Plaintext).unwrap();
    let encrypted = opt.pool_for(Scheme::Encrypted).unwrap();
    assert_eq!(plaintext.config().max_sockets, 256);
    assert_eq!(encrypted.config().max_sockets, 128);
    assert!(encrypted.config().keep_alive);
}

#[test]
fn test_request_flow_through_all_structures() {
    fastpath_tests::init_tracing();
    let opt = Optimizer::new(OptimizerConfig::default());

    // Dispatch: resolve the target, pick a pool, borrow a receive buffer
    let url = opt.resolve_url("https://api.example.com/v1/items").unwrap();
    let pool = opt.pool_for(Scheme::from_url(&url)).unwrap();
    pool.gauges().socket_opened();

    let headers = opt.cached_headers(&cache_key(&request_headers()), request_headers);
    assert_eq!(headers, request_headers());

    let mut buf = opt.acquire_buffer();
    buf.extend_from_slice(b"{\"items\":[]}");

    // Response done: park the socket, return the buffer
    buf.clear();
    opt.release_buffer(buf);
    pool.gauges().socket_parked();

    let stats = opt.snapshot();
    assert_eq!(stats.url_cache_entries, 1);
    assert_eq!(stats.header_cache_entries, 1);
    assert_eq!(stats.pooled_buffers, 1);
    assert_eq!(stats.encrypted_pool.active_sockets, 0);
    assert_eq!(stats.encrypted_pool.idle_sockets, 1);
    assert_eq!(stats.plaintext_pool.active_sockets, 0);
}

#[test]
fn test_reset_caches_spares_sockets_and_toggle() {
    let opt = Optimizer::new(OptimizerConfig::default());

    opt.resolve_url("http://one.example/").unwrap();
    opt.resolve_url("http://two.example/").unwrap();
    opt.cached_headers("k", request_headers);
    let buf = opt.acquire_buffer();
    opt.release_buffer(buf);

    let pool = opt.pool_for(Scheme::Plaintext).unwrap();
    pool.gauges().socket_opened();
    pool.gauges().socket_opened();
    pool.gauges().socket_parked();

    opt.reset_caches();

    let stats = opt.snapshot();
    assert_eq!(stats.header_cache_entries, 0);
    assert_eq!(stats.url_cache_entries, 0);
    assert_eq!(stats.pooled_buffers, 0);
    assert_eq!(stats.plaintext_pool.active_sockets, 1);
    assert_eq!(stats.plaintext_pool.idle_sockets, 1);
    assert!(opt.is_enabled());
}

#[test]
fn test_snapshot_serializes_for_export() {
    let opt = Optimizer::new(OptimizerConfig::default());
    opt.resolve_url("http://example.com/").unwrap();

    let json = serde_json::to_value(opt.snapshot()).unwrap();
    assert_eq!(json["url_cache_entries"], 1);
    assert_eq!(json["header_cache_entries"], 0);
    assert_eq!(json["plaintext_pool"]["active_sockets"], 0);
    assert_eq!(json["encrypted_pool"]["idle_sockets"], 0);
}

#[test]
fn test_scheme_strings_route_like_the_dispatcher() {
    let opt = Optimizer::new(asymmetric_config());

    let https = opt.pool_for(Scheme::from_url_scheme("https:")).unwrap();
    assert_eq!(https.config().max_sockets, 128);

    // Unrecognized schemes ride the plaintext pool
    let odd = opt.pool_for(Scheme::from_url_scheme("ftp:")).unwrap();
    assert_eq!(odd.config().max_sockets, 256);
}
