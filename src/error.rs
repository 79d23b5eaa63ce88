use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeihiError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIのURLが設定されていません。`keihi config --set-api-url URL` で設定してください")]
    MissingApiUrl,

    #[error("メールアドレスが設定されていません。`keihi config --set-email ADDR` で設定してください")]
    MissingEmail,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("精算書が見つかりません: {0}")]
    BillNotFound(String),

    #[error("添付できないファイルです（jpg/jpeg/pngのみ）: {0}")]
    InvalidAttachment(String),

    #[error("入力が不正: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Store(#[from] crate::store::StoreError),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("CLI実行エラー: {0}")]
    CliExecution(String),
}

pub type Result<T> = std::result::Result<T, KeihiError>;
