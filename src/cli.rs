use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keihi")]
#[command(about = "経費精算の閲覧・提出・台帳出力ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 精算書の一覧を表示（日付の新しい順）
    List,

    /// 精算書1件の詳細と領収書を表示
    Show {
        /// 精算書ID
        #[arg(required = true)]
        id: String,
    },

    /// 領収書を添付して新規精算書を提出
    Submit {
        /// 領収書ファイル（jpg/jpeg/png）
        #[arg(required = true)]
        receipt: PathBuf,

        /// 経費タイプ
        #[arg(short = 't', long)]
        expense_type: Option<String>,

        /// 件名
        #[arg(short, long)]
        name: Option<String>,

        /// 日付 (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// 金額
        #[arg(short, long)]
        amount: Option<f64>,

        /// 消費税額
        #[arg(long)]
        vat: Option<f64>,

        /// 税率(%)
        #[arg(long, default_value = "20")]
        pct: u8,

        /// コメント
        #[arg(short, long)]
        commentary: Option<String>,
    },

    /// 台帳をExcel/JSONで出力
    Export {
        /// 出力形式 (excel/json/both)
        #[arg(short, long, default_value = "both")]
        format: ExportFormat,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 台帳タイトル
        #[arg(short, long, default_value = "経費精算台帳")]
        title: String,
    },

    /// 設定を表示/編集
    Config {
        /// APIのベースURLを設定
        #[arg(long)]
        set_api_url: Option<String>,

        /// 従業員メールアドレスを設定
        #[arg(long)]
        set_email: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Debug, Default)]
pub enum ExportFormat {
    Excel,
    Json,
    #[default]
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "json" => Ok(ExportFormat::Json),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use excel, json, or both", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Both => write!(f, "both"),
        }
    }
}
