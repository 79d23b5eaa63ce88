//! HTTPストア
//!
//! バックエンドAPI（{base}/bills）へのreqwest実装。
//! HTTPステータスの失敗は "Erreur {code}" 形式のメッセージに変換する。

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use reqwest::{Client, StatusCode};

use super::{BillStore, ReceiptUpload, StoreError};
use crate::bill::Bill;
use crate::error::{KeihiError, Result};

/// バックエンドAPIに接続するストア
///
/// ベースURLは末尾スラッシュなしで保持する。
pub struct HttpStore {
    base_url: String,
    client: Client,
}

impl HttpStore {
    pub fn new(mut base_url: String, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| KeihiError::Config(format!("HTTPクライアント初期化エラー: {}", e)))?;

        let trimmed_len = base_url.trim_end_matches('/').len();
        base_url.truncate(trimmed_len);

        Ok(Self { base_url, client })
    }

    fn bills_url(&self) -> String {
        format!("{}/bills", self.base_url)
    }

    fn status_error(status: StatusCode) -> StoreError {
        StoreError::new(format!("Erreur {}", status.as_u16()))
    }

    fn transport_error(err: reqwest::Error) -> StoreError {
        StoreError::new(format!("Erreur réseau: {}", err))
    }

    fn decode_error(err: reqwest::Error) -> StoreError {
        StoreError::new(format!("Erreur de format: {}", err))
    }
}

#[async_trait]
impl BillStore for HttpStore {
    async fn list(&self) -> std::result::Result<Vec<Bill>, StoreError> {
        let response = self
            .client
            .get(self.bills_url())
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::status_error(response.status()));
        }

        response.json::<Vec<Bill>>().await.map_err(Self::decode_error)
    }

    async fn create(&self, upload: ReceiptUpload) -> std::result::Result<Bill, StoreError> {
        let part = multipart::Part::bytes(upload.data).file_name(upload.file_name);
        let form = multipart::Form::new()
            .text("email", upload.email)
            .part("file", part);

        let response = self
            .client
            .post(self.bills_url())
            .multipart(form)
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::status_error(response.status()));
        }

        response.json::<Bill>().await.map_err(Self::decode_error)
    }

    async fn update(&self, bill: Bill) -> std::result::Result<Bill, StoreError> {
        let url = if bill.id.is_empty() {
            self.bills_url()
        } else {
            format!("{}/{}", self.bills_url(), bill.id)
        };

        let response = self
            .client
            .put(url)
            .json(&bill)
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::status_error(response.status()));
        }

        response.json::<Bill>().await.map_err(Self::decode_error)
    }
}
