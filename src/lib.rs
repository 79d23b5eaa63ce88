//! 経費精算クライアントのコアライブラリ
//!
//! 一覧の日付ソート、領収書ファイルの検証、提出フロー、
//! バックエンドAPI呼び出し、台帳出力を提供する。

pub mod attachment;
pub mod bill;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod store;
pub mod submit;
pub mod view;
