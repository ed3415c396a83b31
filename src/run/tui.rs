use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use crate::i18n::{Language, Text};
use crate::store::BudgetStore;
use crate::ui::app::{App, DraftField, ExpenseDraft, IncomeSlider, Screen, EDIT_STEP};
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

/// How long to wait for a key before re-checking the delete-mode timer.
const TICK: Duration = Duration::from_millis(250);

pub(crate) fn as_tui(store: &mut BudgetStore, lang: Language) -> Result<()> {
    let mut app = App::new(store, lang);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &mut BudgetStore,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // title + status bars, summary block, list borders
            let content_height = f.area().height.saturating_sub(13) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app, store);
        })?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, app, store, Instant::now())?;
                }
            }
        }
        app.expire_delete_mode(Instant::now());
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

pub(super) fn handle_key(
    key: KeyEvent,
    app: &mut App,
    store: &mut BudgetStore,
    now: Instant,
) -> Result<()> {
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return Ok(());
    }

    match app.screen {
        Screen::Onboarding(_) => handle_onboarding_input(key, app, store),
        Screen::Budget => handle_budget_input(key, app, store, now),
        Screen::EditingIncome(_) => handle_income_input(key, app, store),
        Screen::AddingExpense(_) => handle_add_expense_input(key, app, store),
        Screen::EditingName(_) => handle_name_input(key, app, store),
    }
}

/// Returns true if the key moved the slider.
fn adjust_slider(key: KeyEvent, slider: &mut IncomeSlider) -> bool {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => slider.decrease(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') | KeyCode::Char('=') => {
            slider.increase()
        }
        _ => return false,
    }
    true
}

fn handle_onboarding_input(key: KeyEvent, app: &mut App, store: &mut BudgetStore) -> Result<()> {
    let Screen::Onboarding(slider) = &mut app.screen else {
        return Ok(());
    };
    if adjust_slider(key, slider) {
        return Ok(());
    }
    match key.code {
        KeyCode::Enter => {
            store.set_income(slider.value() as f64)?;
            app.screen = Screen::Budget;
        }
        KeyCode::Char('q') => app.running = false,
        _ => {}
    }
    Ok(())
}

fn handle_budget_input(
    key: KeyEvent,
    app: &mut App,
    store: &mut BudgetStore,
    now: Instant,
) -> Result<()> {
    let len = store.state().expenses.len();
    app.touch_delete_mode(now);

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => scroll_down(
            &mut app.expense_index,
            &mut app.expense_scroll,
            len,
            app.visible_rows,
        ),
        KeyCode::Char('k') | KeyCode::Up => {
            scroll_up(&mut app.expense_index, &mut app.expense_scroll)
        }
        KeyCode::Char('g') => scroll_to_top(&mut app.expense_index, &mut app.expense_scroll),
        KeyCode::Char('G') => scroll_to_bottom(
            &mut app.expense_index,
            &mut app.expense_scroll,
            len,
            app.visible_rows,
        ),
        KeyCode::Char('d') => app.toggle_delete_mode(now),
        KeyCode::Enter | KeyCode::Delete | KeyCode::Char('x') if app.in_delete_mode() => {
            delete_selected(app, store)?
        }
        KeyCode::Esc => app.delete_mode = None,
        KeyCode::Char('a') => {
            app.delete_mode = None;
            app.screen = Screen::AddingExpense(ExpenseDraft::new());
        }
        KeyCode::Char('i') => {
            app.delete_mode = None;
            app.screen = Screen::EditingIncome(IncomeSlider::new(
                store.state().monthly_income,
                EDIT_STEP,
            ));
        }
        KeyCode::Char('n') => {
            app.delete_mode = None;
            app.screen = Screen::EditingName(store.state().display_name.clone());
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('q') => app.running = false,
        _ => {}
    }
    Ok(())
}

/// Remove the highlighted row by its key.
fn delete_selected(app: &mut App, store: &mut BudgetStore) -> Result<()> {
    let Some(key) = app.selected_key(store) else {
        return Ok(());
    };
    if store.remove_expense(&key)? {
        let msg = format!("{}: {key}", app.lang.text(Text::Removed));
        app.set_status(msg);
    }
    app.clamp_selection(store.state().expenses.len());
    Ok(())
}

fn handle_income_input(key: KeyEvent, app: &mut App, store: &mut BudgetStore) -> Result<()> {
    let Screen::EditingIncome(slider) = &mut app.screen else {
        return Ok(());
    };
    if adjust_slider(key, slider) {
        return Ok(());
    }
    match key.code {
        KeyCode::Enter => {
            store.set_income(slider.value() as f64)?;
            app.screen = Screen::Budget;
            app.status_message = app.lang.text(Text::Saved).to_string();
        }
        KeyCode::Esc => app.screen = Screen::Budget,
        _ => {}
    }
    Ok(())
}

fn handle_add_expense_input(key: KeyEvent, app: &mut App, store: &mut BudgetStore) -> Result<()> {
    let lang = app.lang;
    let Screen::AddingExpense(draft) = &mut app.screen else {
        return Ok(());
    };
    match key.code {
        KeyCode::Esc => app.screen = Screen::Budget,
        KeyCode::Tab | KeyCode::Down => draft.next_field(),
        KeyCode::BackTab | KeyCode::Up => draft.prev_field(),
        KeyCode::Left if draft.field == DraftField::Category => draft.prev_category(),
        KeyCode::Right if draft.field == DraftField::Category => draft.next_category(),
        KeyCode::Backspace => draft.pop_char(),
        KeyCode::Enter => {
            let saved = draft.is_complete()
                && store.upsert_category(draft.category(), &draft.custom_name, &draft.amount)?;
            if saved {
                app.screen = Screen::Budget;
                app.status_message = lang.text(Text::Saved).to_string();
            } else {
                app.status_message = lang.text(Text::InvalidExpense).to_string();
            }
        }
        KeyCode::Char(c) => draft.push_char(c),
        _ => {}
    }
    Ok(())
}

fn handle_name_input(key: KeyEvent, app: &mut App, store: &mut BudgetStore) -> Result<()> {
    let Screen::EditingName(input) = &mut app.screen else {
        return Ok(());
    };
    match key.code {
        KeyCode::Enter => {
            store.set_display_name(input)?;
            app.screen = Screen::Budget;
        }
        KeyCode::Esc => app.screen = Screen::Budget,
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Char(c) => input.push(c),
        _ => {}
    }
    Ok(())
}
