use clap::Parser;
use keihi_rust::{attachment, bill, cli, config, error, export, form, store, submit, view};

use cli::{Cli, Commands};
use config::Config;
use error::Result;
use indicatif::ProgressBar;
use store::BillStore;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::List => {
            println!("📋 keihi - {}\n", view::BILLS_TITLE);

            let store = store::HttpStore::new(config.get_api_url()?, config.timeout_or_default())?;

            let spinner = store_spinner("一覧を取得中...");
            let result = store.list().await;
            spinner.finish_and_clear();

            match result {
                Ok(bills) => {
                    if cli.verbose {
                        println!("({}件取得)\n", bills.len());
                    }
                    print!("{}", view::render_bills(bills));
                }
                Err(e) => {
                    // 失敗メッセージをそのまま画面に出す（例: "Erreur 404"）
                    print!("{}", view::render_error(e.message()));
                }
            }
        }

        Commands::Show { id } => {
            println!("🔍 keihi - 精算書の詳細\n");

            let store = store::HttpStore::new(config.get_api_url()?, config.timeout_or_default())?;

            let spinner = store_spinner("一覧を取得中...");
            let result = store.list().await;
            spinner.finish_and_clear();

            match result {
                Ok(bills) => {
                    let bill = bills
                        .into_iter()
                        .find(|b| b.id == id)
                        .ok_or(error::KeihiError::BillNotFound(id))?;
                    print!("{}", view::render_bill_detail(&bill));
                }
                Err(e) => {
                    print!("{}", view::render_error(e.message()));
                }
            }
        }

        Commands::Submit { receipt, expense_type, name, date, amount, vat, pct, commentary } => {
            println!("📝 keihi - {}\n", view::NEW_BILL_TITLE);

            let session = submit::Session::employee(config.get_email()?);
            let store = store::HttpStore::new(config.get_api_url()?, config.timeout_or_default())?;
            let mut flow = submit::SubmitFlow::new(&store, session, |route| {
                println!("→ 画面遷移: {}", route.path());
            });

            // 1. 領収書の検証とアップロード
            println!("[1/3] 領収書を確認中...");
            let candidate = attachment::AttachmentCandidate::from_path(&receipt);

            let spinner = store_spinner("領収書をアップロード中...");
            let attach_result = flow.attach(candidate).await;
            spinner.finish_and_clear();

            match attach_result {
                Ok(true) => println!("✔ 領収書をアップロードしました\n"),
                Ok(false) => {
                    println!(
                        "✖ この形式は添付できません（jpg/jpeg/pngのみ）: {}",
                        receipt.display()
                    );
                    return Err(error::KeihiError::InvalidAttachment(
                        receipt.display().to_string(),
                    ));
                }
                Err(e) => {
                    if let Some(message) = flow.last_error() {
                        print!("\n{}", view::render_error(message));
                    }
                    return Err(e);
                }
            }

            // 2. 申請内容の入力（フラグ未指定の項目は対話で補完）
            println!("[2/3] 申請内容を入力...");
            let form = form::complete_form(expense_type, name, date, amount, vat, pct, commentary)?;
            println!("✔ 入力内容を確認しました\n");

            // 3. 提出
            println!("[3/3] 提出中...");
            let spinner = store_spinner("送信中...");
            let submit_result = flow.submit(&form).await;
            spinner.finish_and_clear();

            match submit_result {
                Ok(saved) => {
                    println!("✔ 提出しました: {} ({})", saved.name, saved.date);
                    println!("\n✅ 完了\n");
                }
                Err(e) => {
                    if let Some(message) = flow.last_error() {
                        print!("\n{}", view::render_error(message));
                    }
                    return Err(e);
                }
            }

            // 遷移先の一覧画面（提出した精算書が承認待ちで並ぶ）
            let spinner = store_spinner("一覧を取得中...");
            let result = store.list().await;
            spinner.finish_and_clear();

            match result {
                Ok(bills) => print!("{}", view::render_bills(bills)),
                Err(e) => print!("{}", view::render_error(e.message())),
            }
        }

        Commands::Export { format, output, title } => {
            println!("📄 keihi - 台帳出力\n");

            let store = store::HttpStore::new(config.get_api_url()?, config.timeout_or_default())?;

            let spinner = store_spinner("一覧を取得中...");
            let result = store.list().await;
            spinner.finish_and_clear();

            let bills = match result {
                Ok(bills) => bill::order_by_date_desc(bills),
                Err(e) => {
                    print!("{}", view::render_error(e.message()));
                    return Err(error::KeihiError::Store(e));
                }
            };

            if cli.verbose {
                println!("({}件取得)\n", bills.len());
            }

            let output_dir = output.unwrap_or_else(|| std::path::PathBuf::from("."));
            export::export_bills(&bills, &format, &output_dir, &title)?;

            println!("\n✅ エクスポート完了");
        }

        Commands::Config { set_api_url, set_email, show } => {
            let mut config = config;

            if let Some(url) = set_api_url {
                config.set_api_url(url)?;
                println!("✔ APIのURLを設定しました");
            }

            if let Some(email) = set_email {
                config.set_email(email)?;
                println!("✔ メールアドレスを設定しました");
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!("  API URL: {}", config.api_url.as_deref().unwrap_or("未設定"));
                println!("  メールアドレス: {}", config.email.as_deref().unwrap_or("未設定"));
                println!("  タイムアウト: {}秒", config.timeout_or_default());
            }
        }
    }

    Ok(())
}

/// ストア呼び出し中のスピナー
fn store_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}
