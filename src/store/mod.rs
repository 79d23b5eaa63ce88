//! 経費精算ストア
//!
//! バックエンドAPIの呼び出し口。操作はlist/create/updateの3つだけで、
//! それぞれ成功か失敗かの2通りしか返さない（リトライやキャンセルはしない）。

mod http;
mod memory;

pub use http::HttpStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::bill::Bill;

/// ストア呼び出しの失敗
///
/// メッセージはそのまま画面に表示される（例: "Erreur 404"）。
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// 領収書アップロードの入力
#[derive(Debug, Clone)]
pub struct ReceiptUpload {
    pub file_name: String,
    pub data: Vec<u8>,
    pub email: String,
}

/// 経費精算ストアのインターフェース
#[async_trait]
pub trait BillStore: Send + Sync {
    /// 精算書の一覧を取得
    async fn list(&self) -> Result<Vec<Bill>, StoreError>;

    /// 領収書をアップロードして下書きの精算書を受け取る
    async fn create(&self, upload: ReceiptUpload) -> Result<Bill, StoreError>;

    /// 精算書を確定する（提出1回につき書き込み1回）
    async fn update(&self, bill: Bill) -> Result<Bill, StoreError>;
}
