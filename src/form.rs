//! 新規精算書フォーム
//!
//! 必須項目の検証と対話入力。検証を通らないフォームはストアに送らない。

use crate::error::{KeihiError, Result};
use chrono::NaiveDate;
use dialoguer::Input;
use regex::Regex;

/// 経費タイプの候補（バックエンドの語彙に合わせている）
pub const EXPENSE_TYPES: &[&str] = &[
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Équipement et matériel",
    "Fournitures de bureau",
];

/// 新規精算書の入力内容
#[derive(Debug, Clone, Default)]
pub struct NewBillForm {
    pub bill_type: String,
    pub name: String,
    pub date: String,      // YYYY-MM-DD
    pub amount: f64,
    pub vat: f64,
    pub pct: u8,
    pub commentary: String,
}

/// 日付がYYYY-MM-DD形式かつ実在する日か
///
/// 形式チェックのあと、2月30日のような存在しない日を暦で弾く。
pub fn is_valid_date(s: &str) -> bool {
    lazy_static::lazy_static! {
        static ref DATE_RE: Regex =
            Regex::new(r"^(19|20)\d\d-(0[1-9]|1[012])-(0[1-9]|[12]\d|3[01])$").unwrap();
    }

    DATE_RE.is_match(s) && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// 金額として受理できるか（正の数のみ。NaNは不可）
fn is_valid_amount(value: f64) -> bool {
    value > 0.0
}

/// 消費税額として受理できるか（0以上）
fn is_valid_vat(value: f64) -> bool {
    value >= 0.0
}

/// 必須テキストとして受理できるか（空白だけは不可）
fn is_required_text(s: &str) -> bool {
    !s.trim().is_empty()
}

impl NewBillForm {
    /// 必須項目の検証
    ///
    /// 最初に見つかった不備を返す。ここで弾かれた場合は提出処理に進まない。
    pub fn validate(&self) -> Result<()> {
        if !is_required_text(&self.bill_type) {
            return Err(KeihiError::InvalidInput("経費タイプが未入力です".into()));
        }
        if !is_required_text(&self.name) {
            return Err(KeihiError::InvalidInput("件名が未入力です".into()));
        }
        if !is_valid_date(&self.date) {
            return Err(KeihiError::InvalidInput(format!(
                "日付が不正です (YYYY-MM-DD): {}",
                self.date
            )));
        }
        if !is_valid_amount(self.amount) {
            return Err(KeihiError::InvalidInput("金額は正の数で入力してください".into()));
        }
        if !is_valid_vat(self.vat) {
            return Err(KeihiError::InvalidInput("消費税額が不正です".into()));
        }
        if self.pct > 100 {
            return Err(KeihiError::InvalidInput("税率は0〜100で入力してください".into()));
        }
        Ok(())
    }
}

/// フラグで渡されなかった項目を対話で補完してフォームを組み立てる
pub fn complete_form(
    bill_type: Option<String>,
    name: Option<String>,
    date: Option<String>,
    amount: Option<f64>,
    vat: Option<f64>,
    pct: u8,
    commentary: Option<String>,
) -> Result<NewBillForm> {
    let bill_type = match bill_type {
        Some(t) => t,
        None => prompt_expense_type()?,
    };
    let name = match name {
        Some(n) => n,
        None => prompt_text("件名")?,
    };
    let date = match date {
        Some(d) => d,
        None => prompt_date()?,
    };
    let amount = match amount {
        Some(a) => a,
        None => prompt_amount("金額")?,
    };
    let vat = match vat {
        Some(v) => v,
        None => prompt_vat()?,
    };
    let commentary = match commentary {
        Some(c) => c,
        None => prompt_optional("コメント")?,
    };

    let form = NewBillForm {
        bill_type,
        name,
        date,
        amount,
        vat,
        pct,
        commentary,
    };
    form.validate()?;
    Ok(form)
}

/// 経費タイプの入力（候補を表示、未入力は聞き直す）
fn prompt_expense_type() -> Result<String> {
    println!("  候補: {}", EXPENSE_TYPES.join(", "));

    loop {
        let input: String = Input::new()
            .with_prompt("経費タイプ")
            .interact_text()
            .map_err(|e| KeihiError::CliExecution(e.to_string()))?;

        let trimmed = input.trim().to_string();
        if is_required_text(&trimmed) {
            return Ok(trimmed);
        }
        println!("  ✖ 経費タイプが未入力です");
    }
}

/// 必須テキスト入力（空白だけなら聞き直す）
fn prompt_text(label: &str) -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt(label)
            .interact_text()
            .map_err(|e| KeihiError::CliExecution(e.to_string()))?;

        let trimmed = input.trim().to_string();
        if is_required_text(&trimmed) {
            return Ok(trimmed);
        }
        println!("  ✖ {}が未入力です", label);
    }
}

/// 空でもよいテキスト入力
fn prompt_optional(label: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| KeihiError::CliExecution(e.to_string()))?;

    Ok(input.trim().to_string())
}

/// 日付入力（既定は今日。形式が合うまで聞き直す）
fn prompt_date() -> Result<String> {
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();

    loop {
        let input: String = Input::new()
            .with_prompt("日付 (YYYY-MM-DD)")
            .default(today.clone())
            .interact_text()
            .map_err(|e| KeihiError::CliExecution(e.to_string()))?;

        let trimmed = input.trim().to_string();
        if is_valid_date(&trimmed) {
            return Ok(trimmed);
        }
        println!("  ✖ 日付が不正です: {}", trimmed);
    }
}

/// 金額入力（正の数になるまで聞き直す）
fn prompt_amount(label: &str) -> Result<f64> {
    loop {
        let value: f64 = Input::new()
            .with_prompt(label)
            .interact_text()
            .map_err(|e| KeihiError::CliExecution(e.to_string()))?;

        if is_valid_amount(value) {
            return Ok(value);
        }
        println!("  ✖ {}は正の数で入力してください", label);
    }
}

/// 消費税額入力（既定0、負の値は聞き直す）
fn prompt_vat() -> Result<f64> {
    loop {
        let value: f64 = Input::new()
            .with_prompt("消費税額")
            .default(0.0)
            .interact_text()
            .map_err(|e| KeihiError::CliExecution(e.to_string()))?;

        if is_valid_vat(value) {
            return Ok(value);
        }
        println!("  ✖ 消費税額は0以上で入力してください");
    }
}
