//! 精算書提出フロー
//!
//! 領収書の検証・アップロードから提出・画面遷移までを状態つきで進める。
//! 状態遷移: Idle → AttachmentPending → Ready → Submitting → Submitted/Failed

use crate::attachment::AttachmentCandidate;
use crate::bill::{Bill, BillStatus};
use crate::error::{KeihiError, Result};
use crate::form::NewBillForm;
use crate::store::{BillStore, ReceiptUpload};

/// ログイン中の従業員
///
/// このクライアントはEmployeeロール専用。提出する精算書には
/// ここで渡されたメールアドレスが入る。
#[derive(Debug, Clone)]
pub struct Session {
    pub email: String,
}

impl Session {
    pub fn employee(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// 画面遷移先
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Bills,
    NewBill,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
        }
    }
}

/// 提出フローの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    /// ファイル未選択。提出不可
    Idle,
    /// ファイル選択済み、検証中
    AttachmentPending,
    /// 検証済みでアップロード完了。提出できる
    Ready,
    /// ストア呼び出し中
    Submitting,
    /// 提出完了（Bills画面へ遷移済み）
    Submitted,
    /// 提出失敗（メッセージはlast_errorに残る）
    Failed,
}

/// 提出フロー本体
pub struct SubmitFlow<'a> {
    store: &'a dyn BillStore,
    session: Session,
    navigate: Box<dyn FnMut(Route) + Send + 'a>,
    state: SubmitState,
    /// createで受け取った下書き（fileUrl/fileName入り）
    draft: Option<Bill>,
    /// 直近の失敗メッセージ。表示側はこれをそのまま出す。次の成功で消える
    last_error: Option<String>,
}

impl<'a> SubmitFlow<'a> {
    /// セッションと協力オブジェクトを明示的に受け取って作る
    pub fn new(
        store: &'a dyn BillStore,
        session: Session,
        navigate: impl FnMut(Route) + Send + 'a,
    ) -> Self {
        Self {
            store,
            session,
            navigate: Box::new(navigate),
            state: SubmitState::Idle,
            draft: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.state == SubmitState::Ready
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// 領収書ファイルを選択する
    ///
    /// どの状態からでも選び直せる。拡張子検証を通れば即アップロードし、
    /// 下書きを保持してReadyへ。検証で弾かれたらOk(false)でIdleに戻る
    /// （エラーは投げない）。アップロード自体の失敗はErrで返し、Idleに戻す。
    pub async fn attach(&mut self, candidate: AttachmentCandidate) -> Result<bool> {
        self.state = SubmitState::AttachmentPending;
        self.draft = None;
        self.last_error = None;

        if !candidate.is_accepted() {
            self.state = SubmitState::Idle;
            return Ok(false);
        }

        let data = match candidate.read_data() {
            Ok(data) => data,
            Err(e) => {
                self.state = SubmitState::Idle;
                return Err(e);
            }
        };

        let upload = ReceiptUpload {
            file_name: candidate.file_name.clone(),
            data,
            email: self.session.email.clone(),
        };

        match self.store.create(upload).await {
            Ok(draft) => {
                self.draft = Some(draft);
                self.state = SubmitState::Ready;
                Ok(true)
            }
            Err(e) => {
                self.state = SubmitState::Idle;
                self.last_error = Some(e.message().to_string());
                Err(KeihiError::Store(e))
            }
        }
    }

    /// フォームを提出する
    ///
    /// Ready以外からは受け付けない（Submitting中の二重提出もここで弾く）。
    /// フォーム検証に落ちた場合はストアを呼ばずReadyのまま返す。
    /// 書き込みはupdate1回だけで、成功したらBills画面へ遷移する。
    pub async fn submit(&mut self, form: &NewBillForm) -> Result<Bill> {
        if self.state != SubmitState::Ready {
            return Err(KeihiError::InvalidInput(format!(
                "この状態では提出できません: {:?}",
                self.state
            )));
        }

        form.validate()?;

        let draft = self.draft.clone().ok_or_else(|| {
            KeihiError::InvalidAttachment("領収書が未添付です".into())
        })?;

        self.state = SubmitState::Submitting;

        let bill = Bill {
            id: draft.id,
            bill_type: form.bill_type.clone(),
            name: form.name.clone(),
            date: form.date.clone(),
            amount: form.amount,
            vat: form.vat,
            pct: form.pct,
            commentary: form.commentary.clone(),
            file_url: draft.file_url,
            file_name: draft.file_name,
            status: BillStatus::Pending,
            email: self.session.email.clone(),
        };

        match self.store.update(bill).await {
            Ok(saved) => {
                self.state = SubmitState::Submitted;
                self.last_error = None;
                (self.navigate)(Route::Bills);
                Ok(saved)
            }
            Err(e) => {
                self.state = SubmitState::Failed;
                self.last_error = Some(e.message().to_string());
                Err(KeihiError::Store(e))
            }
        }
    }
}
