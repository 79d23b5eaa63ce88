//! 経費精算書モデルと表示順ソート

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// 精算書のステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    /// 一覧・台帳に出す表示名
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Pending => "承認待ち",
            BillStatus::Accepted => "承認済み",
            BillStatus::Refused => "却下",
        }
    }
}

/// 経費精算書（1件分）
///
/// ワイヤ形式はcamelCaseのJSON。提出時にセッションのメールアドレスを
/// emailに入れて送る。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[serde(default)]
    pub id: String,

    #[serde(rename = "type", default)]
    pub bill_type: String,        // 経費タイプ

    #[serde(default)]
    pub name: String,             // 件名

    #[serde(default)]
    pub date: String,             // YYYY-MM-DD

    #[serde(default)]
    pub amount: f64,              // 金額

    #[serde(default)]
    pub vat: f64,                 // 消費税額

    #[serde(default)]
    pub pct: u8,                  // 税率(%)

    #[serde(default)]
    pub commentary: String,       // コメント

    #[serde(default)]
    pub file_url: String,         // 領収書URL

    #[serde(default)]
    pub file_name: String,        // 領収書ファイル名

    #[serde(default)]
    pub status: BillStatus,

    #[serde(default)]
    pub email: String,            // 申請者
}

impl Bill {
    /// 領収書が添付されているか
    pub fn has_receipt(&self) -> bool {
        !self.file_url.trim().is_empty()
    }
}

/// 日付文字列をパース（YYYY-MM-DD）
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// 新しい順にソートして返す
///
/// 日付が読めないレコードは末尾。同日付の相対順は入力順のまま。
pub fn order_by_date_desc(mut bills: Vec<Bill>) -> Vec<Bill> {
    bills.sort_by_key(|b| Reverse(parse_date(&b.date)));
    bills
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bill_with_date(name: &str, date: &str) -> Bill {
        Bill {
            name: name.into(),
            date: date.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2022-06-02"),
            NaiveDate::from_ymd_opt(2022, 6, 2)
        );
        assert_eq!(parse_date(" 2021-01-01 "), NaiveDate::from_ymd_opt(2021, 1, 1));
        assert_eq!(parse_date("2022-13-01"), None);
        assert_eq!(parse_date("02/06/2022"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_order_newest_first() {
        let bills = vec![
            bill_with_date("a", "2021-01-01"),
            bill_with_date("b", "2022-06-02"),
        ];
        let sorted = order_by_date_desc(bills);
        assert_eq!(sorted[0].date, "2022-06-02");
        assert_eq!(sorted[1].date, "2021-01-01");
    }

    #[test]
    fn test_order_dates_non_increasing() {
        let bills = vec![
            bill_with_date("a", "2003-03-03"),
            bill_with_date("b", "2004-04-04"),
            bill_with_date("c", "2001-01-01"),
            bill_with_date("d", "2002-02-02"),
        ];
        let sorted = order_by_date_desc(bills);
        let dates: Vec<_> = sorted.iter().map(|b| b.date.as_str()).collect();
        assert_eq!(dates, vec!["2004-04-04", "2003-03-03", "2002-02-02", "2001-01-01"]);
    }

    #[test]
    fn test_order_unparseable_dates_last() {
        let bills = vec![
            bill_with_date("a", "壊れた日付"),
            bill_with_date("b", "2022-06-02"),
            bill_with_date("c", ""),
            bill_with_date("d", "2021-01-01"),
        ];
        let sorted = order_by_date_desc(bills);
        assert_eq!(sorted[0].name, "b");
        assert_eq!(sorted[1].name, "d");
        // 読めない日付は末尾（入力順のまま）
        assert_eq!(sorted[2].name, "a");
        assert_eq!(sorted[3].name, "c");
    }

    #[test]
    fn test_order_equal_dates_keep_input_order() {
        let bills = vec![
            bill_with_date("first", "2022-06-02"),
            bill_with_date("second", "2022-06-02"),
            bill_with_date("third", "2022-06-02"),
        ];
        let sorted = order_by_date_desc(bills);
        let names: Vec<_> = sorted.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"], "同日付は安定ソート");
    }

    #[test]
    fn test_bill_wire_format_is_camel_case() {
        let bill = Bill {
            bill_type: "Transports".into(),
            file_url: "https://localhost:3456/images/test.jpg".into(),
            file_name: "test.jpg".into(),
            status: BillStatus::Pending,
            ..Default::default()
        };
        let json = serde_json::to_string(&bill).unwrap();
        assert!(json.contains("\"type\":\"Transports\""));
        assert!(json.contains("\"fileUrl\""));
        assert!(json.contains("\"fileName\""));
        assert!(json.contains("\"status\":\"pending\""));
    }

    #[test]
    fn test_bill_parses_wire_json() {
        let json = r#"{
            "id": "47qAXb6fIm2zOKkLzMro",
            "type": "Hôtel et logement",
            "name": "encore",
            "date": "2004-04-04",
            "amount": 400,
            "vat": 80,
            "pct": 20,
            "commentary": "séminaire billed",
            "fileUrl": "https://test.storage.tld/preview.jpg",
            "fileName": "preview.jpg",
            "status": "pending",
            "email": "a@a"
        }"#;
        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.bill_type, "Hôtel et logement");
        assert_eq!(bill.date, "2004-04-04");
        assert_eq!(bill.amount, 400.0);
        assert_eq!(bill.status, BillStatus::Pending);
        assert!(bill.has_receipt());
    }
}
