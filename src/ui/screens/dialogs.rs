use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::{Language, Text};
use crate::ui::app::{DraftField, ExpenseDraft, IncomeSlider};
use crate::ui::theme;
use crate::ui::util::{centered_rect, format_amount, progress_bar};

const DIALOG_WIDTH: u16 = 52;

fn dialog_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT))
        .style(Style::default().bg(theme::HEADER_BG))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
}

pub(crate) fn render_income(f: &mut Frame, area: Rect, lang: Language, slider: &IncomeSlider) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(slider.value()),
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            progress_bar(slider.ratio(), 40),
            Style::default().fg(theme::ACCENT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "←/→ adjust   Enter save   Esc cancel",
            theme::dim_style(),
        )),
    ];

    let popup = centered_rect(DIALOG_WIDTH, lines.len() as u16 + 2, area);
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines)
            .centered()
            .block(dialog_block(lang.text(Text::EditIncome))),
        popup,
    );
}

pub(crate) fn render_add_expense(f: &mut Frame, area: Rect, lang: Language, draft: &ExpenseDraft) {
    let field_style = |field: DraftField| {
        if draft.field == field {
            theme::selected_style()
        } else {
            theme::normal_style()
        }
    };
    let label = |text: Text| Span::styled(format!(" {:<10}", lang.text(text)), theme::dim_style());

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            label(Text::Category),
            Span::styled(
                format!("◀ {} ▶", draft.category()),
                field_style(DraftField::Category),
            ),
        ]),
    ];
    if draft.category().takes_custom_name() {
        lines.push(Line::from(vec![
            label(Text::Name),
            Span::styled(
                format!("{}_", draft.custom_name),
                field_style(DraftField::Name),
            ),
        ]));
    }
    lines.push(Line::from(vec![
        label(Text::Amount),
        Span::styled(format!("{}_", draft.amount), field_style(DraftField::Amount)),
        Span::styled(" kr", theme::dim_style()),
    ]));
    lines.push(Line::from(""));

    let hint = if draft.is_complete() {
        "Tab next field   Enter save   Esc cancel"
    } else {
        "Tab next field   Esc cancel"
    };
    lines.push(Line::from(Span::styled(hint, theme::dim_style())));

    let popup = centered_rect(DIALOG_WIDTH, lines.len() as u16 + 2, area);
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines).block(dialog_block(lang.text(Text::AddExpense))),
        popup,
    );
}

pub(crate) fn render_name(f: &mut Frame, area: Rect, lang: Language, input: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {input}_"), theme::selected_style())),
        Line::from(""),
        Line::from(Span::styled(" Enter save   Esc cancel", theme::dim_style())),
    ];

    let popup = centered_rect(DIALOG_WIDTH, lines.len() as u16 + 2, area);
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines).block(dialog_block(lang.text(Text::EditName))),
        popup,
    );
}
