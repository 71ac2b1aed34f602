#![warn(clippy::uninlined_format_args)]

use std::{fs, path::PathBuf, process::ExitCode};

use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tabiwari_application::{
    LedgerService, RateSyncService, ReceiptCapture, ReceiptImage, TripStore,
};
use tabiwari_domain::{CurrencyCode, CurrencyConverter, ExpenseRecord, MemberId, Money};
use tabiwari_infrastructure::{GenAiClient, GenAiRateSource, GenAiReceiptExtractor, JsonFileStore};
use tabiwari_presentation::{
    error_presenter::{
        format_ledger_error, format_rate_sync_error, format_receipt_capture_error,
        format_store_error,
    },
    format_money,
    settlement::ALL_SETTLED,
    SettlementPresenter, SummaryPresenter,
};

#[derive(Parser)]
#[command(name = "tabiwari", version, about = "Trip planning and group-expense companion")]
struct Cli {
    /// Path of the trip file.
    #[arg(long, default_value = "trip.json")]
    store: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the whole trip on one page.
    Summary,
    /// Show each member's net balance.
    Balances,
    /// Suggest transfers that square everyone up.
    Settle,
    /// Convert an amount between two currencies.
    Convert {
        amount: Decimal,
        from: String,
        to: String,
    },
    /// Record a shared expense.
    AddExpense {
        title: String,
        amount: Decimal,
        currency: String,
        payer: String,
        /// Members sharing the cost; defaults to everyone.
        #[arg(long = "split", value_delimiter = ',')]
        split: Vec<String>,
        #[arg(long, default_value = "Other")]
        category: String,
    },
    /// Refresh exchange rates for the active currencies.
    SyncRates,
    /// Draft an expense from a receipt photo.
    CaptureReceipt { image: PathBuf, payer: String },
}

fn init_logging() {
    tracing_subscriber::fmt::init();
}

fn main() -> ExitCode {
    init_logging();
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let store = JsonFileStore::new(&cli.store);
    let mut book = store.load().map_err(|err| format_store_error(&err))?;

    match cli.command {
        Command::Summary => print!("{}", SummaryPresenter::render(&book)),
        Command::Balances => {
            let balances = LedgerService::balances(&book);
            let view = SettlementPresenter::render(&balances, &[], &book.wallet, &book);
            print!("{}", view.balance_table);
        }
        Command::Settle => {
            let balances = LedgerService::balances(&book);
            let plan = LedgerService::settlement_plan(&book);
            let view = SettlementPresenter::render(&balances, &plan, &book.wallet, &book);
            print!("{}", view.balance_table);
            match view.transfer_table {
                Some(table) => print!("\n{table}"),
                None => println!("{ALL_SETTLED}"),
            }
        }
        Command::Convert { amount, from, to } => {
            let from = CurrencyCode::new(&from);
            let to = CurrencyCode::new(&to);
            let converted = CurrencyConverter::convert(
                Money::from_decimal(amount),
                &from,
                &to,
                &book.wallet.rates,
            );
            println!("{}", format_money(converted, &to));
        }
        Command::AddExpense {
            title,
            amount,
            currency,
            payer,
            split,
            category,
        } => {
            let participants = if split.is_empty() {
                book.member_ids()
            } else {
                split.iter().map(MemberId::new).collect()
            };
            let expense = ExpenseRecord {
                id: next_id("e"),
                title,
                category,
                amount: Money::from_decimal(amount),
                currency: CurrencyCode::new(&currency),
                payer: MemberId::new(&payer),
                participants,
                settled: Default::default(),
                date: Local::now().date_naive(),
            };
            LedgerService::upsert_expense(&mut book, expense)
                .map_err(|err| format_ledger_error(&err))?;
            store.save(&book).map_err(|err| format_store_error(&err))?;
            println!(
                "Recorded. Total so far: {}",
                format_money(LedgerService::total_spent(&book), &book.wallet.display_currency)
            );
        }
        Command::SyncRates => {
            let client = GenAiClient::from_env().map_err(|err| err.to_string())?;
            let source = GenAiRateSource::new(client, book.wallet.rates.pivot().clone());
            let applied = RateSyncService::sync(&mut book.wallet, &source)
                .map_err(|err| format_rate_sync_error(&err))?;
            store.save(&book).map_err(|err| format_store_error(&err))?;
            println!("Updated {applied} rate(s).");
        }
        Command::CaptureReceipt { image, payer } => {
            let bytes = fs::read(&image).map_err(|err| format!("Could not read {}: {err}", image.display()))?;
            let receipt = ReceiptImage {
                bytes: &bytes,
                filename: image.file_name().and_then(|name| name.to_str()),
                content_type: content_type_for(&image),
            };
            let client = GenAiClient::from_env().map_err(|err| err.to_string())?;
            let extractor = GenAiReceiptExtractor::new(client);
            let draft = ReceiptCapture::draft_expense(
                &book,
                MemberId::new(&payer),
                &receipt,
                &extractor,
                next_id("r"),
                Local::now().date_naive(),
            )
            .map_err(|err| format_receipt_capture_error(&err))?;

            println!(
                "{}: {} ({})",
                draft.title,
                format_money(draft.amount, &draft.currency),
                draft.category
            );
            LedgerService::upsert_expense(&mut book, draft)
                .map_err(|err| format_ledger_error(&err))?;
            store.save(&book).map_err(|err| format_store_error(&err))?;
        }
    }
    Ok(())
}

fn next_id(prefix: &str) -> String {
    format!("{prefix}{}", Utc::now().timestamp_millis())
}

fn content_type_for(path: &std::path::Path) -> Option<&'static str> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("png") => Some("image/png"),
        Some("webp") => Some("image/webp"),
        Some("jpg") | Some("jpeg") => Some("image/jpeg"),
        _ => None,
    }
}
