use clap::CommandFactory;

use super::*;

fn config(base_url: &str) -> AppConfig {
    AppConfig {
        base_url: base_url.to_owned(),
        slugs: vec!["category".to_owned()],
        max_page: 2,
        max_concurrent_pages: 2,
        request_timeout_secs: 2,
        user_agent: "rewardcat-test/0.1".to_owned(),
        log_level: "info".to_owned(),
    }
}

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn cli_accepts_no_arguments() {
    assert!(Cli::try_parse_from(["rewardcat"]).is_ok());
}

#[test]
fn cli_rejects_unknown_flags() {
    assert!(Cli::try_parse_from(["rewardcat", "--max-page", "3"]).is_err());
}

#[tokio::test]
async fn run_rejects_invalid_base_url() {
    let result = run(&config("not a url")).await;
    assert!(result.is_err(), "expected invalid base URL to abort the run");
}

#[tokio::test]
async fn run_renders_empty_array_when_host_is_unreachable() {
    // Port 1 on localhost is not listening, so every page fails.
    let catalog = run(&config("http://127.0.0.1:1/section/")).await.unwrap();
    assert_eq!(catalog, "[]");
}
