use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use spendlog::{
    UnitOfWork,
    category::{CategoryName, create_category},
    currency::Currency,
    initialize, open_ledger,
    summary::summary_per_category,
    transaction::{NewTransaction, create_transaction},
};

/// A utility for creating a ledger database populated with sample data.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a ledger database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_filter(filter::LevelFilter::INFO),
        )
        .init();

    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let mut connection = open_ledger(output_path)?;

    initialize(&connection)?;

    println!("Creating sample categories and transactions...");
    let scope = UnitOfWork::begin(&mut connection)?;

    let groceries = create_category(CategoryName::new("groceries")?, scope.connection())?;
    let entertainment = create_category(CategoryName::new("entertainment")?, scope.connection())?;

    for (category_id, amount, currency) in [
        (groceries.id, 100, Currency::Euro),
        (groceries.id, 200, Currency::Euro),
        (entertainment.id, 2500, Currency::Lira),
        (entertainment.id, 4500, Currency::Rouble),
    ] {
        create_transaction(
            NewTransaction {
                category_id,
                amount,
                currency,
            },
            scope.connection(),
        )?;
    }

    scope.commit()?;

    for summary in summary_per_category(&connection)? {
        println!("Category {}: {} currencies", summary.category_id, summary.currencies.len());
    }

    println!("Success!");

    Ok(())
}
