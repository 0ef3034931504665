use iptrack::config;
use std::env;

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("http://ip-api.com/"),
        "http://ip-api.com"
    );
}

#[test]
fn test_sanitize_base_url_no_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("http://ip-api.com"),
        "http://ip-api.com"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("https://geo.example.com///"),
        "https://geo.example.com"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://geo.example.com/  "),
        "https://geo.example.com"
    );
}

#[test]
fn test_sanitize_base_url_empty_string() {
    assert_eq!(config::sanitize_base_url(""), "http://ip-api.com");
}

#[test]
fn test_sanitize_base_url_whitespace_only() {
    assert_eq!(config::sanitize_base_url("   "), "http://ip-api.com");
}

#[test]
fn test_get_lookup_base_url_override_and_default() {
    // Default first, then the override, inside one test so the variable
    // is not torn between parallel tests
    env::remove_var("LOOKUP_BASE_URL");
    assert_eq!(config::get_lookup_base_url(), "http://ip-api.com");

    env::set_var("LOOKUP_BASE_URL", "https://geo.example.com/");
    assert_eq!(config::get_lookup_base_url(), "https://geo.example.com");

    // Clean up
    env::remove_var("LOOKUP_BASE_URL");
}

#[test]
fn test_get_data_file_override_and_default() {
    env::remove_var("DATA_FILE");
    assert_eq!(config::get_data_file(), "ip_data.json");

    env::set_var("DATA_FILE", "  custom.json  ");
    assert_eq!(config::get_data_file(), "custom.json");

    // Clean up
    env::remove_var("DATA_FILE");
}
