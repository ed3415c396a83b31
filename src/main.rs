mod db;
mod i18n;
mod models;
mod run;
mod store;
mod ui;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let db_path = get_db_path()?;
    let db = db::Database::open(&db_path)?;
    let mut store = store::BudgetStore::load(db)?;
    let lang = i18n::Language::detect();

    match args.len() {
        1 => run::as_tui(&mut store, lang),
        2.. => run::as_cli(&args, &mut store, lang),
        _ => {
            eprintln!("Usage: pocketbudget [command]");
            Ok(())
        }
    }
}

fn get_db_path() -> Result<std::path::PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "pocketbudget", "PocketBudget")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("pocketbudget.db"))
}
