//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use keihi_rust::error::KeihiError;
use keihi_rust::store::StoreError;

/// KeihiErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        KeihiError::Config("テスト設定エラー".to_string()),
        KeihiError::FileNotFound("receipt.png".to_string()),
        KeihiError::BillNotFound("47qAXb6fIm2zOKkLzMro".to_string()),
        KeihiError::InvalidAttachment("document.docx".to_string()),
        KeihiError::InvalidInput("日付が不正です".to_string()),
        KeihiError::ExcelGeneration("保存失敗".to_string()),
        KeihiError::CliExecution("入力中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 設定未完了エラーのメッセージ確認
#[test]
fn test_missing_config_messages() {
    let err = KeihiError::MissingApiUrl;
    let display = format!("{}", err);
    assert!(display.contains("keihi config"));
    assert!(display.contains("--set-api-url"));

    let err = KeihiError::MissingEmail;
    let display = format!("{}", err);
    assert!(display.contains("--set-email"));
}

/// エラーのDebug実装確認
#[test]
fn test_error_debug() {
    let err = KeihiError::Config("テスト".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Config"));
    assert!(debug.contains("テスト"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: KeihiError = io_err.into();

    assert!(matches!(err, KeihiError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: KeihiError = json_err.into();

    assert!(matches!(err, KeihiError::JsonParse(_)));
}

/// ストアエラーからの変換（透過的エラー）
#[test]
fn test_store_error_conversion_transparent() {
    let store_err = StoreError::new("Erreur 404");
    let err: KeihiError = store_err.into();

    assert!(matches!(err, KeihiError::Store(_)));

    // 透過的エラーなのでメッセージがそのまま表示される
    let display = format!("{}", err);
    assert_eq!(display, "Erreur 404");
}

/// ストアエラーは受け取った文字列を変えない
#[test]
fn test_store_error_message_verbatim() {
    let err = StoreError::new("Erreur 500");
    assert_eq!(err.message(), "Erreur 500");
    assert_eq!(format!("{}", err), "Erreur 500");

    let err = StoreError::new("Erreur réseau: connection refused");
    assert_eq!(format!("{}", err), "Erreur réseau: connection refused");
}
