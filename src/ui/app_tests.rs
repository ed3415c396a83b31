#![allow(clippy::unwrap_used)]

use std::time::{Duration, Instant};

use super::app::*;
use crate::db::Database;
use crate::i18n::Language;
use crate::models::Category;
use crate::store::BudgetStore;

// ── IncomeSlider ──────────────────────────────────────────────

#[test]
fn test_slider_initial_value() {
    assert_eq!(IncomeSlider::new(-10, EDIT_STEP).value(), 0);
    assert_eq!(IncomeSlider::new(12_345, EDIT_STEP).value(), 12_345);
}

#[test]
fn test_slider_keeps_income_above_range_until_moved() {
    let slider = IncomeSlider::new(95_000, EDIT_STEP);
    assert_eq!(slider.value(), 95_000);
    assert!((slider.ratio() - 1.0).abs() < f64::EPSILON);

    let mut up = slider;
    up.increase();
    assert_eq!(up.value(), INCOME_MAX);

    let mut down = slider;
    down.decrease();
    assert_eq!(down.value(), INCOME_MAX - EDIT_STEP);
}

#[test]
fn test_slider_steps_and_bounds() {
    let mut slider = IncomeSlider::new(0, ONBOARDING_STEP);
    slider.decrease();
    assert_eq!(slider.value(), 0);
    slider.increase();
    slider.increase();
    assert_eq!(slider.value(), 1_000);

    let mut slider = IncomeSlider::new(INCOME_MAX - 200, EDIT_STEP);
    slider.increase();
    assert_eq!(slider.value(), INCOME_MAX);
    assert!((slider.ratio() - 1.0).abs() < f64::EPSILON);
}

// ── ExpenseDraft ──────────────────────────────────────────────

#[test]
fn test_draft_category_wraps() {
    let mut draft = ExpenseDraft::new();
    assert_eq!(draft.category(), Category::Rent);
    draft.prev_category();
    assert_eq!(draft.category(), Category::Other);
    draft.next_category();
    assert_eq!(draft.category(), Category::Rent);
}

#[test]
fn test_draft_skips_name_for_catalog_entries() {
    let mut draft = ExpenseDraft::new();
    draft.next_field();
    assert_eq!(draft.field, DraftField::Amount);
    draft.prev_field();
    assert_eq!(draft.field, DraftField::Category);
}

#[test]
fn test_draft_visits_name_for_other() {
    let mut draft = ExpenseDraft::new();
    draft.prev_category();
    draft.next_field();
    assert_eq!(draft.field, DraftField::Name);
    draft.next_field();
    assert_eq!(draft.field, DraftField::Amount);
    draft.prev_field();
    assert_eq!(draft.field, DraftField::Name);
}

#[test]
fn test_draft_amount_takes_digits_only() {
    let mut draft = ExpenseDraft::new();
    draft.field = DraftField::Amount;
    for c in "1,2a0-".chars() {
        draft.push_char(c);
    }
    assert_eq!(draft.amount, "120");
    draft.pop_char();
    assert_eq!(draft.amount, "12");

    draft.field = DraftField::Category;
    draft.push_char('9');
    assert_eq!(draft.amount, "12");
}

#[test]
fn test_draft_completeness() {
    let mut draft = ExpenseDraft::new();
    assert!(!draft.is_complete());
    draft.amount = "0".into();
    assert!(draft.is_complete());

    draft.prev_category();
    assert!(!draft.is_complete());
    draft.custom_name = "   ".into();
    assert!(!draft.is_complete());
    draft.custom_name = "Lunch".into();
    assert!(draft.is_complete());
}

// ── App ───────────────────────────────────────────────────────

fn app_with(expenses: &[(&str, &str)], income: f64) -> (App, BudgetStore) {
    let mut store = BudgetStore::load(Database::open_in_memory().unwrap()).unwrap();
    store.set_income(income).unwrap();
    for (key, amount) in expenses {
        store.upsert_expense(key, amount).unwrap();
    }
    (App::new(&store, Language::English), store)
}

#[test]
fn test_screen_for_income() {
    let (app, _) = app_with(&[], 0.0);
    assert_eq!(
        app.screen,
        Screen::Onboarding(IncomeSlider::new(0, ONBOARDING_STEP))
    );
    let (app, _) = app_with(&[], 1.0);
    assert_eq!(app.screen, Screen::Budget);
}

#[test]
fn test_delete_mode_toggle_and_touch() {
    let (mut app, _) = app_with(&[], 1000.0);
    let t0 = Instant::now();

    // Touch does nothing while off
    app.touch_delete_mode(t0);
    assert!(!app.in_delete_mode());

    app.toggle_delete_mode(t0);
    assert_eq!(app.delete_mode, Some(t0));
    let t1 = t0 + Duration::from_secs(2);
    app.touch_delete_mode(t1);
    assert_eq!(app.delete_mode, Some(t1));

    app.toggle_delete_mode(t1);
    assert!(!app.in_delete_mode());
}

#[test]
fn test_delete_mode_expiry_boundary() {
    let (mut app, _) = app_with(&[], 1000.0);
    let t0 = Instant::now();
    app.toggle_delete_mode(t0);
    app.expire_delete_mode(t0 + DELETE_MODE_TIMEOUT - Duration::from_millis(1));
    assert!(app.in_delete_mode());
    app.expire_delete_mode(t0 + DELETE_MODE_TIMEOUT);
    assert!(!app.in_delete_mode());
}

#[test]
fn test_clamp_selection() {
    let (mut app, _) = app_with(&[], 1000.0);
    app.expense_index = 5;
    app.expense_scroll = 4;
    app.clamp_selection(3);
    assert_eq!(app.expense_index, 2);
    assert_eq!(app.expense_scroll, 2);

    app.clamp_selection(0);
    assert_eq!(app.expense_index, 0);
    assert_eq!(app.expense_scroll, 0);
}

#[test]
fn test_selected_key_follows_sort_order() {
    let (mut app, store) = app_with(&[("Gym", "300"), ("Rent", "4000"), ("Food", "300")], 1000.0);
    let picked: Vec<String> = (0..3)
        .map(|i| {
            app.expense_index = i;
            app.selected_key(&store).unwrap()
        })
        .collect();
    assert_eq!(picked, vec!["Rent", "Food", "Gym"]);

    app.expense_index = 3;
    assert_eq!(app.selected_key(&store), None);
}

#[test]
fn test_screen_labels() {
    assert_eq!(Screen::Budget.label(), "BUDGET");
    assert_eq!(Screen::AddingExpense(ExpenseDraft::new()).label(), "ADD");
    assert_eq!(Screen::EditingName(String::new()).label(), "NAME");
}
