//! Array pane rendering
//!
//! Draws the active snapshot as a row of boxed cells:
//!
//! ```text
//!  ┌────┐┌────┐┌────┐
//!  │  5 ││ 12 ││  8 │
//!  └────┘└────┘└────┘
//!     0     1     2
//!           ↑
//!       checking
//! ```
//!
//! Highlighted cells are filled with the accent colour. The pointer may sit
//! one slot past the last cell (a push's "insert here" marker), so the index
//! and pointer rows are laid out for `len + 1` slots.

use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Inner width of a cell, wide enough for the widest element
fn cell_width(elements: &[i64]) -> usize {
    elements
        .iter()
        .map(|e| e.to_string().len())
        .max()
        .unwrap_or(1)
        + 2
}

/// Center `text` in a field of `width` columns
fn centered(text: &str, width: usize) -> String {
    format!("{:^width$}", text, width = width)
}

/// Build the text lines for one snapshot
pub(crate) fn array_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let width = cell_width(&snapshot.elements);
    let slot = width + 2; // borders

    let border_style = Style::default().fg(DEFAULT_THEME.comment);
    let mut top = Vec::new();
    let mut values = Vec::new();
    let mut bottom = Vec::new();
    let mut indices = String::new();

    for (i, value) in snapshot.elements.iter().enumerate() {
        let (cell_style, edge_style) = if snapshot.is_highlighted(i) {
            (
                Style::default()
                    .bg(DEFAULT_THEME.primary)
                    .fg(DEFAULT_THEME.highlight_fg)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(DEFAULT_THEME.primary),
            )
        } else {
            (
                Style::default().bg(DEFAULT_THEME.cell_bg).fg(DEFAULT_THEME.fg),
                border_style,
            )
        };

        top.push(Span::styled(format!("┌{}┐", "─".repeat(width)), edge_style));
        values.push(Span::styled("│", edge_style));
        values.push(Span::styled(centered(&value.to_string(), width), cell_style));
        values.push(Span::styled("│", edge_style));
        bottom.push(Span::styled(format!("└{}┘", "─".repeat(width)), edge_style));
        indices.push_str(&centered(&i.to_string(), slot));
    }

    let mut lines = vec![
        Line::from(top),
        Line::from(values),
        Line::from(bottom),
        Line::from(Span::styled(indices, Style::default().fg(DEFAULT_THEME.comment))),
    ];

    if let Some(pointer) = snapshot.pointer {
        let pointer_style = Style::default()
            .fg(DEFAULT_THEME.pointer)
            .add_modifier(Modifier::BOLD);
        let lead = " ".repeat(pointer * slot);
        lines.push(Line::from(Span::styled(
            format!("{}{}", lead, centered("↑", slot)),
            pointer_style,
        )));
        if let Some(label) = &snapshot.pointer_label {
            // Labels are wider than a cell; center them under the arrow and
            // let them spill left when there is room.
            let center = pointer * slot + slot / 2;
            let start = center.saturating_sub(label.chars().count() / 2);
            lines.push(Line::from(Span::styled(
                format!("{}{}", " ".repeat(start), label),
                pointer_style,
            )));
        }
    }

    lines
}

/// Render the array pane
pub fn render_array_pane(frame: &mut Frame, area: Rect, snapshot: Option<&Snapshot>) {
    let title = match snapshot {
        Some(s) => format!(" Array · {} ", s.operation),
        None => " Array ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let Some(snapshot) = snapshot else {
        let paragraph = Paragraph::new("(nothing to display)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![Line::from("")];
    if snapshot.elements.is_empty() {
        lines.push(Line::from(Span::styled(
            "[ ] (empty array)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    } else {
        lines.extend(array_lines(snapshot));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::OperationKind;

    fn plain_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_cell_width_fits_widest() {
        assert_eq!(cell_width(&[5, 123, -7]), 5);
        assert_eq!(cell_width(&[]), 3);
    }

    #[test]
    fn test_lines_without_pointer() {
        let snap = Snapshot::plain(&[5, 12], OperationKind::Init, String::new());
        let lines = array_lines(&snap);
        assert_eq!(lines.len(), 4);
        assert_eq!(plain_text(&lines[1]), "│ 5  ││ 12 │");
    }

    #[test]
    fn test_pointer_past_end_is_drawn() {
        let snap = Snapshot::plain(&[1, 2], OperationKind::Push, String::new())
            .with_pointer(2, "insert here");
        let lines = array_lines(&snap);
        assert_eq!(lines.len(), 6);
        let arrow = plain_text(&lines[4]);
        // Two slots of five columns precede the arrow slot
        assert_eq!(arrow.find('↑'), Some(12));
        assert!(plain_text(&lines[5]).ends_with("insert here"));
    }
}
