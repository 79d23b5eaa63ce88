//! 表示用レンダリング
//!
//! 一覧・詳細・エラー画面をテキストに整形する。一覧は日付の新しい順。
//! ストア失敗時はメッセージをそのまま出す。

use crate::bill::{order_by_date_desc, Bill};

/// 一覧画面のタイトル
pub const BILLS_TITLE: &str = "経費精算一覧";
/// 新規作成画面のタイトル
pub const NEW_BILL_TITLE: &str = "新規経費精算";

/// 精算書一覧を整形する
///
/// 各行に日付・件名・金額・ステータス・領収書の有無を出す。
pub fn render_bills(bills: Vec<Bill>) -> String {
    let sorted = order_by_date_desc(bills);

    let mut out = String::new();
    out.push_str(BILLS_TITLE);
    out.push('\n');
    out.push_str(&format!("{}件\n\n", sorted.len()));

    for bill in &sorted {
        out.push_str(&format!(
            "{}  {:<24}  {:>10}  {}  {}\n",
            bill.date,
            bill.name,
            format!("{} €", bill.amount),
            bill.status.label(),
            receipt_affordance(bill),
        ));
    }

    out
}

/// ストア失敗時の一覧画面
///
/// 受け取ったメッセージを変えずに表示する（例: "Erreur 404"）。
pub fn render_error(message: &str) -> String {
    format!("{}\n\n{}\n", BILLS_TITLE, message)
}

/// 精算書1件の詳細（領収書プレビュー付き）
pub fn render_bill_detail(bill: &Bill) -> String {
    let mut out = String::new();
    out.push_str(&format!("件名: {}\n", bill.name));
    out.push_str(&format!("経費タイプ: {}\n", bill.bill_type));
    out.push_str(&format!("日付: {}\n", bill.date));
    out.push_str(&format!("金額: {} €\n", bill.amount));
    out.push_str(&format!("消費税: {} € ({}%)\n", bill.vat, bill.pct));
    out.push_str(&format!("ステータス: {}\n", bill.status.label()));
    if !bill.commentary.trim().is_empty() {
        out.push_str(&format!("コメント: {}\n", bill.commentary));
    }

    out.push_str("\n領収書:\n");
    if bill.has_receipt() {
        out.push_str(&format!("  📎 {}\n", bill.file_name));
        out.push_str(&format!("  {}\n", bill.file_url));
    } else {
        out.push_str("  （添付なし）\n");
    }

    out
}

fn receipt_affordance(bill: &Bill) -> String {
    if bill.has_receipt() {
        format!("📎 {}", bill.file_name)
    } else {
        "（添付なし）".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bill::BillStatus;

    fn sample_bill(name: &str, date: &str) -> Bill {
        Bill {
            name: name.into(),
            date: date.into(),
            amount: 100.0,
            file_url: "https://localhost:3456/images/test.jpg".into(),
            file_name: "test.jpg".into(),
            status: BillStatus::Pending,
            ..Default::default()
        }
    }

    #[test]
    fn test_render_bills_sorted_newest_first() {
        let bills = vec![
            sample_bill("ancien", "2021-01-01"),
            sample_bill("récent", "2022-06-02"),
        ];
        let rendered = render_bills(bills);

        let newer = rendered.find("2022-06-02").expect("新しい日付が表示されていない");
        let older = rendered.find("2021-01-01").expect("古い日付が表示されていない");
        assert!(newer < older, "新しい順になっていない:\n{}", rendered);
    }

    #[test]
    fn test_render_bills_shows_receipt_affordance() {
        let rendered = render_bills(vec![sample_bill("transport", "2022-06-02")]);
        assert!(rendered.contains("📎 test.jpg"));
    }

    #[test]
    fn test_render_error_verbatim() {
        let rendered = render_error("Erreur 404");
        assert!(rendered.contains("Erreur 404"));

        let rendered = render_error("Erreur 500");
        assert!(rendered.contains("Erreur 500"));
    }

    #[test]
    fn test_render_detail_has_receipt_preview() {
        let bill = sample_bill("encore", "2004-04-04");
        let rendered = render_bill_detail(&bill);
        assert!(rendered.contains("領収書"));
        assert!(rendered.contains("test.jpg"));
        assert!(rendered.contains("https://localhost:3456/images/test.jpg"));
    }
}
