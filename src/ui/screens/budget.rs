use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::i18n::Text;
use crate::models::Metrics;
use crate::store::BudgetStore;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, progress_bar, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, store: &BudgetStore) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Summary
            Constraint::Min(3),    // Expenses
        ])
        .split(area);

    let metrics = store.metrics();
    render_summary(f, chunks[0], app, store.state().monthly_income, &metrics);
    render_expenses(f, chunks[1], app, store);
}

fn render_summary(f: &mut Frame, area: Rect, app: &App, income: i64, metrics: &Metrics) {
    let lang = app.lang;
    let inner_width = area.width.saturating_sub(4) as usize;
    let color = theme::status_color(metrics.status);

    let pair = |left: String, right: String, style: Style, right_style: Style| {
        let pad = inner_width.saturating_sub(left.chars().count() + right.chars().count());
        Line::from(vec![
            Span::styled(left, style),
            Span::raw(" ".repeat(pad)),
            Span::styled(right, right_style),
        ])
    };

    let bold = Style::default()
        .fg(theme::TEXT)
        .add_modifier(Modifier::BOLD);
    let income_text = if income == 0 {
        lang.text(Text::ChooseIncome).to_string()
    } else {
        format_amount(income)
    };

    let lines = vec![
        pair(
            lang.text(Text::Income).to_string(),
            lang.text(Text::Savings).to_string(),
            theme::dim_style(),
            theme::dim_style(),
        ),
        pair(
            income_text,
            format_amount(metrics.monthly_savings),
            bold,
            Style::default()
                .fg(theme::amount_color(metrics.monthly_savings))
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(Span::styled(
            progress_bar(metrics.progress(), inner_width.saturating_sub(2)),
            Style::default().fg(color),
        )),
        pair(
            lang.text(Text::Spent).to_string(),
            lang.text(Text::YearlySavings).to_string(),
            theme::dim_style(),
            theme::dim_style(),
        ),
        pair(
            format_amount(metrics.total_expenses),
            format_amount(metrics.yearly_savings),
            bold,
            Style::default()
                .fg(theme::amount_color(metrics.yearly_savings))
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(Span::styled(
            lang.status(metrics.status),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];

    let summary = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" budget ", theme::title_style())),
    );
    f.render_widget(summary, area);
}

fn render_expenses(f: &mut Frame, area: Rect, app: &App, store: &BudgetStore) {
    let lang = app.lang;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if app.in_delete_mode() {
            theme::RED
        } else {
            theme::OVERLAY
        }))
        .title(Span::styled(
            format!(" {} ", lang.text(Text::Expenses)),
            theme::title_style(),
        ));

    let expenses = store.sorted_expenses();
    if expenses.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(lang.text(Text::NoExpenses), theme::dim_style())),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = expenses
        .iter()
        .enumerate()
        .skip(app.expense_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, expense)| {
            let selected = i == app.expense_index;
            let style = match (selected, app.in_delete_mode()) {
                (true, true) => theme::delete_selected_style(),
                (true, false) => theme::selected_style(),
                (false, _) if i % 2 == 0 => theme::alt_row_style(),
                (false, _) => theme::normal_style(),
            };

            let marker = if selected && app.in_delete_mode() {
                "✕ "
            } else {
                "  "
            };
            let amount = format_amount(expense.amount);
            let label_width = inner_width.saturating_sub(amount.chars().count() + 3);
            let label = truncate(&expense.label(), label_width);
            let pad = label_width.saturating_sub(label.chars().count());

            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker}{label}{}", " ".repeat(pad)), style),
                Span::styled(format!(" {amount}"), style),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
