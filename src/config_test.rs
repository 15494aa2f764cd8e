use super::*;

#[test]
fn join_url_with_empty_base_is_origin_relative() {
    assert_eq!(join_url("", "restaurants"), "/restaurants");
    assert_eq!(join_url("", "/restaurants"), "/restaurants");
}

#[test]
fn join_url_collapses_duplicate_slashes() {
    assert_eq!(join_url("http://localhost:5555/", "/pizzas"), "http://localhost:5555/pizzas");
    assert_eq!(join_url("http://localhost:5555", "pizzas"), "http://localhost:5555/pizzas");
}

#[test]
fn api_base_has_no_trailing_slash() {
    assert!(!api_base().ends_with('/'));
}

#[test]
fn api_url_starts_with_base() {
    let url = api_url("/restaurants");
    assert!(url.starts_with(api_base()));
    assert!(url.ends_with("/restaurants"));
}
