use anyhow::Result;

use crate::i18n::{Language, Text};
use crate::models::Category;
use crate::store::BudgetStore;
use crate::ui::util::format_amount;

pub(crate) fn as_cli(args: &[String], store: &mut BudgetStore, lang: Language) -> Result<()> {
    let command = args.get(1).map(String::as_str).unwrap_or("help");
    let rest = args.get(2..).unwrap_or(&[]);
    match command {
        "summary" | "s" => cli_summary(store, lang),
        "income" => cli_income(rest, store),
        "add" => cli_add(rest, store),
        "remove" | "rm" => cli_remove(rest, store),
        "name" => cli_name(rest, store),
        "categories" => {
            cli_categories();
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("pocketbudget {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("PocketBudget — local-only monthly budget tracker");
    println!();
    println!("Usage: pocketbudget [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary                       Print income, expenses and savings");
    println!("  income <amount>               Set monthly income");
    println!("  add <label> <amount>          Add or overwrite an expense");
    println!("                                (catalog names like Rent get their icon)");
    println!("  remove <label>                Remove an expense");
    println!("  name <your name>              Set the name used in the greeting");
    println!("  categories                    List predefined categories");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_summary(store: &BudgetStore, lang: Language) -> Result<()> {
    let state = store.state();
    let metrics = store.metrics();

    println!("PocketBudget");
    if let Some(greeting) = lang.greeting(&state.display_name) {
        println!("{greeting}");
    }
    println!("{}", "─".repeat(40));
    let income = if state.monthly_income == 0 {
        lang.text(Text::ChooseIncome).to_string()
    } else {
        format_amount(state.monthly_income)
    };
    println!("  {:<16}{income}", lang.text(Text::Income));
    println!(
        "  {:<16}{}",
        lang.text(Text::Spent),
        format_amount(metrics.total_expenses)
    );
    println!(
        "  {:<16}{}",
        lang.text(Text::Savings),
        format_amount(metrics.monthly_savings)
    );
    println!(
        "  {:<16}{}",
        lang.text(Text::YearlySavings),
        format_amount(metrics.yearly_savings)
    );
    println!(
        "  {:<16}{:.0}%",
        lang.text(Text::Ratio),
        metrics.spending_ratio * rust_decimal::Decimal::ONE_HUNDRED
    );
    println!("  {}", lang.status(metrics.status));

    let expenses = store.sorted_expenses();
    if !expenses.is_empty() {
        println!();
        println!("{}:", lang.text(Text::Expenses));
        for expense in expenses {
            println!("  {:<28}{}", expense.label(), format_amount(expense.amount));
        }
    }
    Ok(())
}

fn cli_income(args: &[String], store: &mut BudgetStore) -> Result<()> {
    let Some(raw) = args.first() else {
        anyhow::bail!("Usage: pocketbudget income <amount>");
    };
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid income: {raw}"))?;
    if !value.is_finite() || value < 0.0 {
        anyhow::bail!("Income must be a non-negative number: {raw}");
    }
    store.set_income(value)?;
    println!("Income set to {}", format_amount(store.state().monthly_income));
    Ok(())
}

/// Catalog names (except Other) match case-insensitively and resolve to the
/// catalog spelling; anything else is used as typed.
fn catalog_category(label: &str) -> Option<Category> {
    Category::parse(label).filter(|category| !category.takes_custom_name())
}

pub(super) fn expense_key(label: &str) -> String {
    match catalog_category(label) {
        Some(category) => category.as_str().to_string(),
        None => label.trim().to_string(),
    }
}

/// The last argument is the amount; everything before it is the label.
fn cli_add(args: &[String], store: &mut BudgetStore) -> Result<()> {
    let Some((amount, label_parts)) = args.split_last() else {
        anyhow::bail!("Usage: pocketbudget add <label> <amount>");
    };
    let label = label_parts.join(" ");

    let saved = match catalog_category(&label) {
        Some(category) => store.upsert_category(category, "", amount)?,
        None => store.upsert_expense(&label, amount)?,
    };
    if !saved {
        anyhow::bail!("Expense needs a non-empty label and a whole, non-negative amount");
    }
    println!("Saved {}: {}", expense_key(&label), amount.trim());
    Ok(())
}

fn cli_remove(args: &[String], store: &mut BudgetStore) -> Result<()> {
    let label = args.join(" ");
    if label.trim().is_empty() {
        anyhow::bail!("Usage: pocketbudget remove <label>");
    }
    let key = expense_key(&label);
    if store.remove_expense(&key)? {
        println!("Removed {key}");
    } else {
        println!("No expense named {key}");
    }
    Ok(())
}

fn cli_name(args: &[String], store: &mut BudgetStore) -> Result<()> {
    store.set_display_name(&args.join(" "))?;
    let name = &store.state().display_name;
    if name.is_empty() {
        println!("Name cleared");
    } else {
        println!("Name set to {name}");
    }
    Ok(())
}

fn cli_categories() {
    for category in Category::all() {
        let note = if category.takes_custom_name() {
            "  (free-text name)"
        } else {
            ""
        };
        println!("  {category}{note}");
    }
}
