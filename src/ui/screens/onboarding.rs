use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::Text;
use crate::ui::app::{App, IncomeSlider};
use crate::ui::theme;
use crate::ui::util::{centered_rect, format_amount, progress_bar};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, slider: &IncomeSlider) {
    let lang = app.lang;
    let income_line = if slider.value() == 0 {
        lang.text(Text::ChooseIncome).to_string()
    } else {
        format_amount(slider.value())
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            lang.text(Text::Welcome),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            income_line,
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
            format!(" {} ", lang.text(Text::Start)),
            theme::selected_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "←/→ adjust   Enter start",
            theme::dim_style(),
        )),
    ];

    let popup = centered_rect(56, lines.len() as u16 + 2, area);
    let card = Paragraph::new(lines).centered().block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(card, popup);
}
