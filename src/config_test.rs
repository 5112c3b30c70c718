use super::*;

#[test]
fn from_values_defaults_when_unset() {
    let cfg = ApiConfig::from_values(None, None);
    assert_eq!(cfg, ApiConfig::default());
    assert_eq!(cfg.base_url, "https://wesourceyoub2.vercel.app");
    assert_eq!(cfg.timeout_ms, 10_000);
}

#[test]
fn from_values_trims_trailing_slashes() {
    let cfg = ApiConfig::from_values(Some("http://localhost:3001/"), None);
    assert_eq!(cfg.base_url, "http://localhost:3001");
}

#[test]
fn from_values_blank_url_falls_back_to_default() {
    let cfg = ApiConfig::from_values(Some("   "), None);
    assert_eq!(cfg.base_url, DEFAULT_API_URL);
}

#[test]
fn from_values_parses_timeout_override() {
    assert_eq!(ApiConfig::from_values(None, Some("2500")).timeout_ms, 2500);
}

#[test]
fn from_values_rejects_bad_timeouts() {
    assert_eq!(ApiConfig::from_values(None, Some("soon")).timeout_ms, DEFAULT_TIMEOUT_MS);
    assert_eq!(ApiConfig::from_values(None, Some("0")).timeout_ms, DEFAULT_TIMEOUT_MS);
}

#[test]
fn url_joins_with_and_without_leading_slash() {
    let cfg = ApiConfig::from_values(Some("http://api.test"), None);
    assert_eq!(cfg.url("/auth/login"), "http://api.test/auth/login");
    assert_eq!(cfg.url("jobs"), "http://api.test/jobs");
}
