use super::*;

/// # Safety
/// Env mutation is confined to the single `from_env_*` test below so no
/// other test in this binary observes it.
unsafe fn clear_pea_env() {
    unsafe {
        std::env::remove_var("PEA_API_BASE_URL");
        std::env::remove_var("PEA_SESSION_FILE");
        std::env::remove_var("PEA_POLL_INTERVAL_SECS");
        std::env::remove_var("PEA_CACHE_TTL_SECS");
        std::env::remove_var("PEA_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("PEA_ZERO_DIVISION");
    }
}

// =============================================================================
// from_env
// =============================================================================

#[test]
fn from_env_defaults_then_overrides_then_rejects_bad_policy() {
    unsafe { clear_pea_env() };

    let cfg = ClientConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.poll_interval, Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS));
    assert_eq!(cfg.cache_ttl, Some(Duration::from_secs(DEFAULT_CACHE_TTL_SECS)));
    assert_eq!(cfg.request_timeout, None);
    assert_eq!(cfg.zero_division, ZeroDivisionPolicy::Zero);
    assert!(cfg.session_file.ends_with(".pea-tracker/session.json"));

    unsafe {
        std::env::set_var("PEA_API_BASE_URL", " http://api.test:9000/// ");
        std::env::set_var("PEA_SESSION_FILE", "/tmp/pea-session.json");
        std::env::set_var("PEA_POLL_INTERVAL_SECS", "15");
        std::env::set_var("PEA_CACHE_TTL_SECS", "600");
        std::env::set_var("PEA_REQUEST_TIMEOUT_SECS", "7");
        std::env::set_var("PEA_ZERO_DIVISION", "na");
    }

    let cfg = ClientConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, "http://api.test:9000");
    assert_eq!(cfg.session_file, PathBuf::from("/tmp/pea-session.json"));
    assert_eq!(cfg.poll_interval, Duration::from_secs(15));
    assert_eq!(cfg.cache_ttl, Some(Duration::from_secs(MAX_CACHE_TTL_SECS)));
    assert_eq!(cfg.request_timeout, Some(Duration::from_secs(7)));
    assert_eq!(cfg.zero_division, ZeroDivisionPolicy::NotAvailable);

    unsafe {
        std::env::set_var("PEA_POLL_INTERVAL_SECS", "not-a-number");
        std::env::set_var("PEA_ZERO_DIVISION", "infinity");
    }
    let err = ClientConfig::from_env().unwrap_err();
    assert!(err.contains("unknown PEA_ZERO_DIVISION"));

    unsafe { clear_pea_env() };
}

// =============================================================================
// helpers
// =============================================================================

#[test]
fn normalize_base_url_trims_trailing_slashes() {
    assert_eq!(normalize_base_url("http://127.0.0.1:8000/"), "http://127.0.0.1:8000");
    assert_eq!(normalize_base_url("http://127.0.0.1:8000"), "http://127.0.0.1:8000");
}

#[test]
fn cache_ttl_zero_disables_cache() {
    assert_eq!(cache_ttl_from_secs(0), None);
}

#[test]
fn cache_ttl_is_clamped_to_poll_period() {
    assert_eq!(cache_ttl_from_secs(5), Some(Duration::from_secs(5)));
    assert_eq!(cache_ttl_from_secs(61), Some(Duration::from_secs(60)));
}

#[test]
fn parse_zero_division_accepts_known_names() {
    assert_eq!(parse_zero_division(None), Ok(ZeroDivisionPolicy::Zero));
    assert_eq!(parse_zero_division(Some("zero")), Ok(ZeroDivisionPolicy::Zero));
    assert_eq!(parse_zero_division(Some("na")), Ok(ZeroDivisionPolicy::NotAvailable));
    assert_eq!(parse_zero_division(Some("n/a")), Ok(ZeroDivisionPolicy::NotAvailable));
}

#[test]
fn default_session_file_falls_back_to_cwd_without_home() {
    assert_eq!(default_session_file(String::new()), PathBuf::from("./.pea-tracker/session.json"));
    assert_eq!(
        default_session_file("/home/ada".to_owned()),
        PathBuf::from("/home/ada/.pea-tracker/session.json")
    );
}
