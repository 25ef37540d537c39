use super::*;

/// # Safety
/// Only the single env test below may call this; no other test reads these
/// variables.
unsafe fn clear_client_env() {
    unsafe {
        std::env::remove_var("COURSEHUB_BASE_URL");
        std::env::remove_var("COURSEHUB_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("COURSEHUB_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("COURSEHUB_SESSION_FILE");
    }
}

// All env mutations live in one test so parallel test threads cannot race
// on the shared process environment.
#[test]
fn from_env_defaults_overrides_and_errors() {
    unsafe { clear_client_env() };
    let cfg = ClientConfig::from_env().unwrap();
    assert_eq!(cfg, ClientConfig::default());

    unsafe {
        std::env::set_var("COURSEHUB_BASE_URL", "https://edu.example.test/api/");
        std::env::set_var("COURSEHUB_REQUEST_TIMEOUT_SECS", "45");
        std::env::set_var("COURSEHUB_CONNECT_TIMEOUT_SECS", "3");
        std::env::set_var("COURSEHUB_SESSION_FILE", "/tmp/session.json");
    }
    let cfg = ClientConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, "https://edu.example.test/api");
    assert_eq!(cfg.timeouts, Timeouts { request_secs: 45, connect_secs: 3 });
    assert_eq!(cfg.session_file, PathBuf::from("/tmp/session.json"));

    unsafe { std::env::set_var("COURSEHUB_REQUEST_TIMEOUT_SECS", "soon") };
    let cfg = ClientConfig::from_env().unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);

    unsafe { std::env::set_var("COURSEHUB_BASE_URL", "  /") };
    let err = ClientConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("COURSEHUB_BASE_URL is empty"));

    unsafe { clear_client_env() };
}

#[test]
fn with_base_url_trims_trailing_slashes() {
    let cfg = ClientConfig::default().with_base_url("http://localhost:9000//").unwrap();
    assert_eq!(cfg.base_url, "http://localhost:9000");
}

#[test]
fn with_base_url_rejects_blank() {
    assert!(ClientConfig::default().with_base_url("").is_err());
}

#[test]
fn default_timeouts() {
    let t = Timeouts::default();
    assert_eq!(t.request_secs, 30);
    assert_eq!(t.connect_secs, 10);
}
