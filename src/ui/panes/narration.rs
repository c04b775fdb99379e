//! Narration and command-line panes

use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render what the active snapshot depicts, plus the array it describes
pub fn render_narration_pane(frame: &mut Frame, area: Rect, snapshot: Option<&Snapshot>) {
    let block = Block::default()
        .title(" Narration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let lines = match snapshot {
        Some(snapshot) => {
            let mut lines = vec![Line::from(Span::styled(
                snapshot.narration.clone(),
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD),
            ))];
            let highlighted = snapshot.highlighted_sorted();
            if !highlighted.is_empty() {
                let list = highlighted
                    .iter()
                    .map(|i| i.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                lines.push(Line::from(Span::styled(
                    format!("highlighted: {}", list),
                    Style::default().fg(DEFAULT_THEME.comment),
                )));
            }
            lines
        }
        None => vec![Line::from(Span::styled(
            "(no steps)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Render the operation input line.
///
/// `input` is `Some` while the user is typing a command.
pub fn render_command_pane(frame: &mut Frame, area: Rect, input: Option<&str>, array: &[i64]) {
    let (border, title) = match input {
        Some(_) => (DEFAULT_THEME.border_focused, " Operation (Enter run · Esc cancel) "),
        None => (DEFAULT_THEME.border_normal, " Operation "),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let line = match input {
        Some(text) => Line::from(vec![
            Span::styled(": ", Style::default().fg(DEFAULT_THEME.secondary)),
            Span::styled(text.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(
                "█",
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ]),
        None => Line::from(vec![
            Span::styled("current: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                crate::snapshot::format_elements(array),
                Style::default().fg(DEFAULT_THEME.secondary),
            ),
            Span::styled(
                "   : type an operation · 1-5 demo operations",
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]),
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
