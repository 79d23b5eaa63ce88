//! 領収書ファイルの検証

use crate::error::{KeihiError, Result};
use std::path::{Path, PathBuf};

/// 添付を許可する拡張子（小文字で比較）
const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// ファイル名の拡張子が許可リストに入っているか
///
/// 最後のドット以降を拡張子とみなし、大文字小文字は区別しない。
/// ドットがなければ不許可。
pub fn is_accepted_file_name(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_lowercase();
            ACCEPTED_EXTENSIONS.iter().any(|&e| e == ext)
        }
        None => false,
    }
}

/// 選択中の領収書ファイル（検証を通るまでの一時データ）
#[derive(Debug, Clone)]
pub struct AttachmentCandidate {
    pub path: PathBuf,
    pub file_name: String,
}

impl AttachmentCandidate {
    /// パスから候補を作る（検証対象はファイル名部分だけ）
    pub fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            path: path.to_path_buf(),
            file_name,
        }
    }

    /// 拡張子（最後のドット以降、小文字化）
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
    }

    pub fn is_accepted(&self) -> bool {
        is_accepted_file_name(&self.file_name)
    }

    /// アップロード用に中身を読み込む
    pub fn read_data(&self) -> Result<Vec<u8>> {
        if !self.path.exists() {
            return Err(KeihiError::FileNotFound(self.path.display().to_string()));
        }
        Ok(std::fs::read(&self.path)?)
    }
}
