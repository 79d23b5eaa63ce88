//! 設定解決のテスト
//!
//! 環境変数・設定ファイル値・未設定エラーの優先順位を検証する。
//! 環境変数はプロセス全体で共有されるので、同じ変数を触る検証は
//! 1つのテスト関数にまとめている。

use keihi_rust::config::Config;
use keihi_rust::error::KeihiError;

fn config_with(api_url: Option<&str>, email: Option<&str>) -> Config {
    Config {
        api_url: api_url.map(String::from),
        email: email.map(String::from),
        timeout_seconds: 30,
    }
}

#[test]
fn test_api_url_resolution_order() {
    let from_file = config_with(Some("http://file.example:1234"), None);
    let empty = config_with(None, None);

    std::env::set_var("KEIHI_API_URL", "http://env.example:5678");
    assert_eq!(
        from_file.get_api_url().unwrap(),
        "http://env.example:5678",
        "環境変数が設定ファイルより優先"
    );
    assert_eq!(
        empty.get_api_url().unwrap(),
        "http://env.example:5678",
        "ファイル未設定でも環境変数だけで動く"
    );

    std::env::remove_var("KEIHI_API_URL");
    assert_eq!(
        from_file.get_api_url().unwrap(),
        "http://file.example:1234",
        "環境変数なしは設定ファイルの値"
    );

    let err = empty.get_api_url().unwrap_err();
    assert!(matches!(err, KeihiError::MissingApiUrl));
}

#[test]
fn test_email_resolution_order() {
    let from_file = config_with(None, Some("file@test.tld"));
    let empty = config_with(None, None);

    std::env::set_var("KEIHI_EMAIL", "env@test.tld");
    assert_eq!(
        from_file.get_email().unwrap(),
        "env@test.tld",
        "環境変数が設定ファイルより優先"
    );

    std::env::remove_var("KEIHI_EMAIL");
    assert_eq!(from_file.get_email().unwrap(), "file@test.tld");

    let err = empty.get_email().unwrap_err();
    assert!(matches!(err, KeihiError::MissingEmail));
}

#[test]
fn test_timeout_fallback() {
    let mut config = config_with(None, None);
    assert_eq!(config.timeout_or_default(), 30);

    config.timeout_seconds = 0;
    assert_eq!(config.timeout_or_default(), 30, "0は既定値扱い");

    config.timeout_seconds = 5;
    assert_eq!(config.timeout_or_default(), 5);
}

#[test]
fn test_config_json_roundtrip() {
    let config = config_with(Some("http://localhost:5678"), Some("a@a"));

    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.api_url.as_deref(), Some("http://localhost:5678"));
    assert_eq!(parsed.email.as_deref(), Some("a@a"));
    assert_eq!(parsed.timeout_seconds, 30);
}
