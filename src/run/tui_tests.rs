#![allow(clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

use super::tui::handle_key;
use crate::db::Database;
use crate::i18n::Language;
use crate::store::BudgetStore;
use crate::ui::app::{App, DraftField, Screen, DELETE_MODE_TIMEOUT};

fn store_with_income(income: f64) -> BudgetStore {
    let mut store = BudgetStore::load(Database::open_in_memory().unwrap()).unwrap();
    if income > 0.0 {
        store.set_income(income).unwrap();
    }
    store
}

fn press(code: KeyCode, app: &mut App, store: &mut BudgetStore) {
    handle_key(KeyEvent::from(code), app, store, Instant::now()).unwrap();
}

fn type_str(text: &str, app: &mut App, store: &mut BudgetStore) {
    for c in text.chars() {
        press(KeyCode::Char(c), app, store);
    }
}

// ── Onboarding ────────────────────────────────────────────────

#[test]
fn test_first_launch_starts_onboarding() {
    let store = store_with_income(0.0);
    let app = App::new(&store, Language::English);
    assert!(matches!(app.screen, Screen::Onboarding(_)));
}

#[test]
fn test_known_income_skips_onboarding() {
    let store = store_with_income(20_000.0);
    let app = App::new(&store, Language::English);
    assert_eq!(app.screen, Screen::Budget);
}

#[test]
fn test_onboarding_slider_sets_income() {
    let mut store = store_with_income(0.0);
    let mut app = App::new(&store, Language::English);
    for _ in 0..3 {
        press(KeyCode::Right, &mut app, &mut store);
    }
    press(KeyCode::Left, &mut app, &mut store);
    press(KeyCode::Enter, &mut app, &mut store);

    assert_eq!(app.screen, Screen::Budget);
    assert_eq!(store.state().monthly_income, 1000);
}

// ── Income editing ────────────────────────────────────────────

#[test]
fn test_edit_income_cancel_discards() {
    let mut store = store_with_income(20_000.0);
    let mut app = App::new(&store, Language::English);
    press(KeyCode::Char('i'), &mut app, &mut store);
    assert!(matches!(app.screen, Screen::EditingIncome(_)));
    press(KeyCode::Right, &mut app, &mut store);
    press(KeyCode::Esc, &mut app, &mut store);

    assert_eq!(app.screen, Screen::Budget);
    assert_eq!(store.state().monthly_income, 20_000);
}

#[test]
fn test_edit_income_saves_in_thousands() {
    let mut store = store_with_income(20_000.0);
    let mut app = App::new(&store, Language::English);
    press(KeyCode::Char('i'), &mut app, &mut store);
    press(KeyCode::Right, &mut app, &mut store);
    press(KeyCode::Right, &mut app, &mut store);
    press(KeyCode::Enter, &mut app, &mut store);
    assert_eq!(store.state().monthly_income, 22_000);
}

#[test]
fn test_income_slider_caps_at_max() {
    let mut store = store_with_income(69_500.0);
    let mut app = App::new(&store, Language::English);
    press(KeyCode::Char('i'), &mut app, &mut store);
    press(KeyCode::Right, &mut app, &mut store);
    press(KeyCode::Enter, &mut app, &mut store);
    assert_eq!(store.state().monthly_income, 70_000);
}

#[test]
fn test_income_above_range_survives_untouched_edit() {
    let mut store = store_with_income(150_000.0);
    let mut app = App::new(&store, Language::English);
    press(KeyCode::Char('i'), &mut app, &mut store);
    match &app.screen {
        Screen::EditingIncome(slider) => assert_eq!(slider.value(), 150_000),
        other => panic!("unexpected screen {other:?}"),
    }
    press(KeyCode::Enter, &mut app, &mut store);
    assert_eq!(store.state().monthly_income, 150_000);
}

#[test]
fn test_income_above_range_moves_into_range_when_adjusted() {
    let mut store = store_with_income(150_000.0);
    let mut app = App::new(&store, Language::English);
    press(KeyCode::Char('i'), &mut app, &mut store);
    press(KeyCode::Left, &mut app, &mut store);
    press(KeyCode::Enter, &mut app, &mut store);
    assert_eq!(store.state().monthly_income, 69_000);
}

// ── Adding expenses ───────────────────────────────────────────

#[test]
fn test_add_catalog_expense() {
    let mut store = store_with_income(10_000.0);
    let mut app = App::new(&store, Language::English);
    press(KeyCode::Char('a'), &mut app, &mut store);
    // Rent -> Food
    press(KeyCode::Right, &mut app, &mut store);
    press(KeyCode::Tab, &mut app, &mut store);
    type_str("3000", &mut app, &mut store);
    press(KeyCode::Enter, &mut app, &mut store);

    assert_eq!(app.screen, Screen::Budget);
    let food = &store.state().expenses["Food"];
    assert_eq!(food.amount, 3000);
    assert_eq!(food.label(), "🍔 Food");
}

#[test]
fn test_add_custom_expense_through_other() {
    let mut store = store_with_income(10_000.0);
    let mut app = App::new(&store, Language::English);
    press(KeyCode::Char('a'), &mut app, &mut store);
    press(KeyCode::Left, &mut app, &mut store); // wraps to Other
    press(KeyCode::Tab, &mut app, &mut store);
    match &app.screen {
        Screen::AddingExpense(draft) => assert_eq!(draft.field, DraftField::Name),
        other => panic!("unexpected screen {other:?}"),
    }
    type_str("Coffee", &mut app, &mut store);
    press(KeyCode::Tab, &mut app, &mut store);
    type_str("7x5", &mut app, &mut store);
    press(KeyCode::Enter, &mut app, &mut store);

    assert_eq!(store.state().expenses["Coffee"].amount, 75);
}

#[test]
fn test_incomplete_form_stays_open() {
    let mut store = store_with_income(10_000.0);
    let mut app = App::new(&store, Language::English);
    press(KeyCode::Char('a'), &mut app, &mut store);
    press(KeyCode::Enter, &mut app, &mut store);

    assert!(matches!(app.screen, Screen::AddingExpense(_)));
    assert!(!app.status_message.is_empty());
    assert!(store.state().expenses.is_empty());
}

#[test]
fn test_cancel_add_drops_draft() {
    let mut store = store_with_income(10_000.0);
    let mut app = App::new(&store, Language::English);
    press(KeyCode::Char('a'), &mut app, &mut store);
    press(KeyCode::Tab, &mut app, &mut store);
    type_str("4000", &mut app, &mut store);
    press(KeyCode::Esc, &mut app, &mut store);

    assert_eq!(app.screen, Screen::Budget);
    assert!(store.state().expenses.is_empty());

    // A new form starts empty
    press(KeyCode::Char('a'), &mut app, &mut store);
    match &app.screen {
        Screen::AddingExpense(draft) => assert!(draft.amount.is_empty()),
        other => panic!("unexpected screen {other:?}"),
    }
}

#[test]
fn test_q_is_text_inside_forms() {
    let mut store = store_with_income(10_000.0);
    let mut app = App::new(&store, Language::English);
    press(KeyCode::Char('n'), &mut app, &mut store);
    type_str("qa", &mut app, &mut store);
    assert!(app.running);
    press(KeyCode::Enter, &mut app, &mut store);
    assert_eq!(store.state().display_name, "qa");
}

// ── Deleting ──────────────────────────────────────────────────

#[test]
fn test_delete_mode_removes_selected_by_key() {
    let mut store = store_with_income(10_000.0);
    store.upsert_expense("Rent", "4000").unwrap();
    store.upsert_expense("Food", "3000").unwrap();
    store.upsert_expense("Gym", "300").unwrap();
    let mut app = App::new(&store, Language::English);

    // Sorted: Rent, Food, Gym
    press(KeyCode::Down, &mut app, &mut store);
    press(KeyCode::Char('d'), &mut app, &mut store);
    assert!(app.in_delete_mode());
    press(KeyCode::Enter, &mut app, &mut store);

    let keys: Vec<&str> = store.state().expenses.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Gym", "Rent"]);
}

#[test]
fn test_enter_outside_delete_mode_keeps_rows() {
    let mut store = store_with_income(10_000.0);
    store.upsert_expense("Rent", "4000").unwrap();
    let mut app = App::new(&store, Language::English);
    press(KeyCode::Enter, &mut app, &mut store);
    assert_eq!(store.state().expenses.len(), 1);
}

#[test]
fn test_deleting_last_row_clamps_cursor() {
    let mut store = store_with_income(10_000.0);
    store.upsert_expense("Rent", "4000").unwrap();
    store.upsert_expense("Gym", "300").unwrap();
    let mut app = App::new(&store, Language::English);
    press(KeyCode::Char('G'), &mut app, &mut store);
    assert_eq!(app.expense_index, 1);
    press(KeyCode::Char('d'), &mut app, &mut store);
    press(KeyCode::Enter, &mut app, &mut store);
    assert_eq!(app.expense_index, 0);
    assert_eq!(app.selected_key(&store).as_deref(), Some("Rent"));
}

#[test]
fn test_delete_mode_times_out() {
    let store = store_with_income(10_000.0);
    let mut app = App::new(&store, Language::English);
    let start = Instant::now();
    app.toggle_delete_mode(start);

    app.expire_delete_mode(start + Duration::from_secs(1));
    assert!(app.in_delete_mode());

    app.touch_delete_mode(start + Duration::from_secs(4));
    app.expire_delete_mode(start + Duration::from_secs(8));
    assert!(app.in_delete_mode());

    app.expire_delete_mode(start + Duration::from_secs(4) + DELETE_MODE_TIMEOUT);
    assert!(!app.in_delete_mode());
}

// ── Misc ──────────────────────────────────────────────────────

#[test]
fn test_help_overlay_swallows_next_key() {
    let mut store = store_with_income(10_000.0);
    let mut app = App::new(&store, Language::English);
    press(KeyCode::Char('?'), &mut app, &mut store);
    assert!(app.show_help);
    press(KeyCode::Char('q'), &mut app, &mut store);
    assert!(!app.show_help);
    assert!(app.running);
}

#[test]
fn test_ctrl_c_quits_from_any_screen() {
    let mut store = store_with_income(10_000.0);
    let mut app = App::new(&store, Language::English);
    press(KeyCode::Char('a'), &mut app, &mut store);
    handle_key(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        &mut app,
        &mut store,
        Instant::now(),
    )
    .unwrap();
    assert!(!app.running);
}
