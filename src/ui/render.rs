use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, Screen};
use super::screens;
use super::theme;
use super::util::centered_rect;
use crate::i18n::Text;
use crate::store::BudgetStore;

pub(crate) fn render(f: &mut Frame, app: &App, store: &BudgetStore) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], app, store);
    render_screen(f, chunks[1], app, store);
    render_status_bar(f, chunks[2], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, app: &App, store: &BudgetStore) {
    let mut spans = vec![
        Span::styled(" PocketBudget ", theme::header_style()),
        Span::styled(
            format!("· {} ", app.current_month),
            Style::default().fg(theme::TEXT_DIM).bg(theme::HEADER_BG),
        ),
    ];
    if let Some(greeting) = app.lang.greeting(&store.state().display_name) {
        spans.push(Span::styled(
            format!("· {greeting}"),
            Style::default().fg(theme::ACCENT).bg(theme::HEADER_BG),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::HEADER_BG));
    f.render_widget(bar, area);
}

fn render_screen(f: &mut Frame, area: Rect, app: &App, store: &BudgetStore) {
    match &app.screen {
        Screen::Onboarding(slider) => screens::onboarding::render(f, area, app, slider),
        Screen::Budget => screens::budget::render(f, area, app, store),
        Screen::EditingIncome(slider) => {
            screens::budget::render(f, area, app, store);
            screens::dialogs::render_income(f, area, app.lang, slider);
        }
        Screen::AddingExpense(draft) => {
            screens::budget::render(f, area, app, store);
            screens::dialogs::render_add_expense(f, area, app.lang, draft);
        }
        Screen::EditingName(input) => {
            screens::budget::render(f, area, app, store);
            screens::dialogs::render_name(f, area, app.lang, input);
        }
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let (mode_label, mode_bg) = if app.in_delete_mode() {
        (
            format!(" {} ", app.lang.text(Text::DeleteMode)),
            theme::RED,
        )
    } else {
        let bg = match app.screen {
            Screen::Budget => theme::ACCENT,
            _ => theme::GREEN,
        };
        (format!(" {} ", app.screen.label()), bg)
    };
    let mode_style = Style::default()
        .fg(theme::HEADER_BG)
        .bg(mode_bg)
        .add_modifier(Modifier::BOLD);

    let info = if app.status_message.is_empty() {
        String::new()
    } else {
        format!(" {}", app.status_message)
    };

    let right = match app.screen {
        Screen::Onboarding(_) => " ←/→ adjust | Enter start | q quit ",
        Screen::Budget if app.in_delete_mode() => " Enter delete | d/Esc done ",
        Screen::Budget => " a add | i income | d delete | ? help ",
        Screen::EditingIncome(_) => " ←/→ adjust | Enter save | Esc cancel ",
        Screen::AddingExpense(_) => " Tab field | ←/→ category | Enter save | Esc cancel ",
        Screen::EditingName(_) => " Enter save | Esc cancel ",
    };

    let available = area.width as usize;
    let used = mode_label.chars().count() + info.chars().count() + right.chars().count();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(mode_label, mode_style),
        Span::styled(info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let row = |text: &'static str| Line::from(Span::styled(text, theme::normal_style()));

    let help_text = vec![
        Line::from(Span::styled(
            " PocketBudget Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section(" Budget"),
        row("  j/k or Up/Down   Move cursor           g/G        Top/Bottom"),
        row("  a                Add expense           i          Edit income"),
        row("  n                Set your name         d          Toggle delete mode"),
        row("  Enter (delete)   Remove selected       q/Ctrl-c   Quit"),
        Line::from(""),
        section(" Forms"),
        row("  Left/Right       Adjust / pick         Tab        Next field"),
        row("  Enter            Save                  Esc        Cancel"),
        Line::from(""),
        Line::from(Span::styled(
            " Press any key to close ",
            Style::default().fg(theme::TEXT_DIM),
        )),
    ];

    let popup_area = centered_rect(72, help_text.len() as u16 + 2, area);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}
