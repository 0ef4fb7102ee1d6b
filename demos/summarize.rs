use rust_decimal::Decimal;
use statement_insights::{FileFormat, ParserBuilder, summary};
use std::env;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    let file_path = if args.len() > 1 {
        args[1].as_str()
    } else {
        println!("Using example CSV data from demos/sample.csv\n");
        "demos/sample.csv"
    };

    // Second argument wins, otherwise go by extension.
    let format: FileFormat = match args.get(2) {
        Some(format) => format.parse()?,
        None => Path::new(file_path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("csv")
            .parse()?,
    };

    let statement = ParserBuilder::new()
        .filepath(file_path)
        .format(format)
        .ignore_zero_amounts(true)
        .parse()?;

    println!(
        "Parsed {} transactions, {} recurring\n",
        statement.transactions.len(),
        statement.recurring_count
    );

    if let Some(span) = summary::timespan(&statement.transactions) {
        println!("Period: {} to {} ({} days)\n", span.start, span.end, span.days);
    }

    println!("Spending by category:");
    let colors = summary::category_colors(&statement.transactions);
    for total in summary::category_totals(&statement.transactions) {
        let color = colors
            .iter()
            .find(|(category, _)| *category == total.category)
            .map(|(_, color)| *color)
            .unwrap_or_default();
        println!(
            "  {:<22} {:>10} ({} txns) {}",
            total.category.label(),
            total.total_debit,
            total.count,
            color
        );
    }

    println!("\nRecurring:");
    for group in summary::recurring_groups(&statement.transactions) {
        println!(
            "  {:<30} x{} {} [{}]",
            group.narrative, group.count, group.total_debit, group.category
        );
    }

    println!("\nLarge transactions:");
    for txn in summary::large_transactions(
        &statement.transactions,
        summary::DEFAULT_LARGE_TRANSACTION_THRESHOLD,
    ) {
        println!("  {} {:<30} {}", txn.iso_date(), txn.narrative, txn.debit_amount);
    }

    let history = summary::balance_history(&statement.transactions, Decimal::ZERO);
    if let (Some(first), Some(last)) = (history.first(), history.last()) {
        println!(
            "\nBalance relative to close: {} -> {}",
            first.balance, last.balance
        );
    }

    Ok(())
}
