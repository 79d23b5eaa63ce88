//! 台帳出力（Excel/JSON）

use crate::bill::Bill;
use crate::cli::ExportFormat;
use crate::error::{KeihiError, Result};
use rust_xlsxwriter::*;
use std::path::{Path, PathBuf};

fn output_path_for_format(output: &Path, title: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", title, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path, title: &str) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let excel_path = output.join(format!("{}.xlsx", title));
        let json_path = output.join(format!("{}.json", title));
        (excel_path, json_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(title);
        let excel_path = parent.join(format!("{}.xlsx", stem));
        let json_path = parent.join(format!("{}.json", stem));
        (excel_path, json_path)
    }
}

pub fn export_bills(
    bills: &[Bill],
    format: &ExportFormat,
    output_dir: &Path,
    title: &str,
) -> Result<()> {
    println!("- 出力形式: {}", format);

    match format {
        ExportFormat::Excel => {
            let output_path = output_path_for_format(output_dir, title, "xlsx");
            println!("- Excelを生成中...");
            generate_excel(bills, &output_path, title)?;
            println!("✔ Excel出力: {}", output_path.display());
        }
        ExportFormat::Json => {
            let output_path = output_path_for_format(output_dir, title, "json");
            println!("- JSONを生成中...");
            generate_json(bills, &output_path)?;
            println!("✔ JSON出力: {}", output_path.display());
        }
        ExportFormat::Both => {
            let (excel_path, json_path) = output_paths_for_both(output_dir, title);

            println!("- Excelを生成中...");
            generate_excel(bills, &excel_path, title)?;
            println!("✔ Excel出力: {}", excel_path.display());

            println!("- JSONを生成中...");
            generate_json(bills, &json_path)?;
            println!("✔ JSON出力: {}", json_path.display());
        }
    }

    Ok(())
}

/// 精算書一覧をExcel台帳として保存
///
/// 1行1件。表示順と同じく呼び出し側でソート済みの前提。
pub fn generate_excel(bills: &[Bill], output_path: &Path, title: &str) -> Result<()> {
    let mut workbook = Workbook::new();

    let title_format = Format::new().set_bold().set_font_size(14.0);

    let header_format = Format::new()
        .set_bold()
        .set_font_size(10.0)
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let cell_format = Format::new()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let amount_format = Format::new()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC))
        .set_num_format("#,##0.00");

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("台帳")
        .map_err(|e| KeihiError::ExcelGeneration(format!("シート名設定エラー: {}", e)))?;

    // 列幅設定
    let widths: &[(u16, f64)] = &[
        (0, 12.0),  // 日付
        (1, 20.0),  // 経費タイプ
        (2, 28.0),  // 件名
        (3, 12.0),  // 金額
        (4, 12.0),  // 消費税
        (5, 8.0),   // 税率
        (6, 12.0),  // ステータス
        (7, 32.0),  // コメント
        (8, 28.0),  // 領収書
    ];
    for &(col, width) in widths {
        worksheet
            .set_column_width(col, width)
            .map_err(|e| KeihiError::ExcelGeneration(format!("列幅設定エラー: {}", e)))?;
    }

    worksheet
        .write_string_with_format(0, 0, title, &title_format)
        .map_err(|e| KeihiError::ExcelGeneration(format!("タイトル書き込みエラー: {}", e)))?;

    let headers = [
        "日付", "経費タイプ", "件名", "金額", "消費税", "税率(%)", "ステータス", "コメント",
        "領収書",
    ];
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string_with_format(2, col as u16, *header, &header_format)
            .map_err(|e| KeihiError::ExcelGeneration(format!("見出し書き込みエラー: {}", e)))?;
    }

    for (i, bill) in bills.iter().enumerate() {
        let row = 3 + i as u32;

        worksheet
            .write_string_with_format(row, 0, &bill.date, &cell_format)
            .and_then(|ws| ws.write_string_with_format(row, 1, &bill.bill_type, &cell_format))
            .and_then(|ws| ws.write_string_with_format(row, 2, &bill.name, &cell_format))
            .and_then(|ws| ws.write_number_with_format(row, 3, bill.amount, &amount_format))
            .and_then(|ws| ws.write_number_with_format(row, 4, bill.vat, &amount_format))
            .and_then(|ws| ws.write_number_with_format(row, 5, bill.pct as f64, &cell_format))
            .and_then(|ws| ws.write_string_with_format(row, 6, bill.status.label(), &cell_format))
            .and_then(|ws| ws.write_string_with_format(row, 7, &bill.commentary, &cell_format))
            .and_then(|ws| ws.write_string_with_format(row, 8, &bill.file_name, &cell_format))
            .map_err(|e| KeihiError::ExcelGeneration(format!("行書き込みエラー: {}", e)))?;
    }

    workbook
        .save(output_path)
        .map_err(|e| KeihiError::ExcelGeneration(format!("Excel保存エラー: {}", e)))?;

    Ok(())
}

/// 精算書一覧をワイヤ形式のJSONとして保存
pub fn generate_json(bills: &[Bill], output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(bills)?;
    std::fs::write(output_path, json)?;
    Ok(())
}
