use anyhow::Result;
use chrono::{Local, Months};
use clap::Parser;

use findash::config::{FindashPaths, Settings};
use findash::ledger::Ledger;
use findash::models::{Category, Money, Transaction, TransactionKind};

#[derive(Parser)]
#[command(
    name = "findash",
    version,
    about = "Terminal-based personal finance dashboard",
    long_about = "findash is a terminal-based personal finance dashboard. Record \
                  income and expenses, set per-category budgets, and watch the \
                  overview, history, and budget-analysis tabs update as you type. \
                  The ledger lives in memory for the session; the only file it \
                  writes is an on-demand transactions.csv export."
)]
struct Cli {
    /// Preload the session with a small sample ledger
    #[arg(long)]
    sample: bool,

    /// Currency symbol override for this session
    #[arg(long)]
    currency: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FindashPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    if let Some(symbol) = cli.currency {
        settings.currency_symbol = symbol;
    }

    let mut ledger = Ledger::new();
    if cli.sample {
        seed_sample_ledger(&mut ledger);
    }

    findash::tui::run_dashboard(&mut ledger, &settings)?;

    Ok(())
}

/// A couple of months of plausible data so the charts have something to show
fn seed_sample_ledger(ledger: &mut Ledger) {
    let today = Local::now().date_naive();
    let last_month = today
        .checked_sub_months(Months::new(1))
        .unwrap_or(today);

    let entries = [
        (last_month, "Salary", Category::Other, 250000, TransactionKind::Income),
        (last_month, "Rent", Category::Rent, 90000, TransactionKind::Expense),
        (last_month, "Groceries", Category::Food, 32050, TransactionKind::Expense),
        (last_month, "Bus pass", Category::Transport, 6500, TransactionKind::Expense),
        (today, "Salary", Category::Other, 250000, TransactionKind::Income),
        (today, "Rent", Category::Rent, 90000, TransactionKind::Expense),
        (today, "Groceries", Category::Food, 28725, TransactionKind::Expense),
        (today, "Concert tickets", Category::Entertainment, 12000, TransactionKind::Expense),
        (today, "Electricity", Category::Utilities, 8340, TransactionKind::Expense),
    ];

    for (date, description, category, cents, kind) in entries {
        ledger.add_transaction(Transaction::new(
            date,
            description,
            category,
            Money::from_cents(cents),
            kind,
        ));
    }

    ledger.upsert_budget(Category::Food, Money::from_cents(40000));
    ledger.upsert_budget(Category::Transport, Money::from_cents(10000));
    ledger.upsert_budget(Category::Entertainment, Money::from_cents(10000));
}
