//! インメモリストア
//!
//! テストと動作確認用。次の呼び出しを失敗させる注入と、
//! 書き込み回数の記録ができる。

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::{BillStore, ReceiptUpload, StoreError};
use crate::bill::Bill;

/// 固定データを返すインメモリストア
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    bills: Vec<Bill>,
    next_list_error: Option<String>,
    next_create_error: Option<String>,
    next_update_error: Option<String>,
    create_calls: usize,
    update_calls: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期データ入りで作る
    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                bills,
                ..Default::default()
            }),
        }
    }

    /// 次のlistを失敗させる（例: "Erreur 404"）
    pub fn reject_next_list(&self, message: impl Into<String>) {
        self.lock().next_list_error = Some(message.into());
    }

    /// 次のcreateを失敗させる
    pub fn reject_next_create(&self, message: impl Into<String>) {
        self.lock().next_create_error = Some(message.into());
    }

    /// 次のupdateを失敗させる
    pub fn reject_next_update(&self, message: impl Into<String>) {
        self.lock().next_update_error = Some(message.into());
    }

    pub fn create_calls(&self) -> usize {
        self.lock().create_calls
    }

    /// 書き込み（update）が呼ばれた回数
    pub fn update_calls(&self) -> usize {
        self.lock().update_calls
    }

    pub fn bills(&self) -> Vec<Bill> {
        self.lock().bills.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl BillStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        let mut inner = self.lock();
        if let Some(message) = inner.next_list_error.take() {
            return Err(StoreError::new(message));
        }
        Ok(inner.bills.clone())
    }

    async fn create(&self, upload: ReceiptUpload) -> Result<Bill, StoreError> {
        let mut inner = self.lock();
        inner.create_calls += 1;
        if let Some(message) = inner.next_create_error.take() {
            return Err(StoreError::new(message));
        }

        let draft = Bill {
            id: format!("draft-{}", inner.create_calls),
            file_url: format!("https://localhost:3456/images/{}", upload.file_name),
            file_name: upload.file_name,
            email: upload.email,
            ..Default::default()
        };
        Ok(draft)
    }

    async fn update(&self, bill: Bill) -> Result<Bill, StoreError> {
        let mut inner = self.lock();
        inner.update_calls += 1;
        if let Some(message) = inner.next_update_error.take() {
            return Err(StoreError::new(message));
        }

        let pos = inner
            .bills
            .iter()
            .position(|b| !bill.id.is_empty() && b.id == bill.id);
        match pos {
            Some(i) => inner.bills[i] = bill.clone(),
            None => inner.bills.push(bill.clone()),
        }
        Ok(bill)
    }
}
