//! Stateless render functions for the grid form panes

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::grid::Grid;
use crate::ui::app::{DimField, FocusedPane};
use crate::ui::theme::DEFAULT_THEME;

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(DEFAULT_THEME.border_focused)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Render the dimension entry pane with the two input fields.
pub fn render_dims_pane(
    frame: &mut Frame,
    area: Rect,
    rows_input: &str,
    cols_input: &str,
    active_field: DimField,
    focused: bool,
) {
    let field_style = |field: DimField| {
        if focused && field == active_field {
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        }
    };

    let line = Line::from(vec![
        Span::styled("Rows: ", Style::default().fg(DEFAULT_THEME.primary)),
        Span::styled(
            format!("[{rows_input:<3}]"),
            field_style(DimField::Rows),
        ),
        Span::raw("  "),
        Span::styled("Cols: ", Style::default().fg(DEFAULT_THEME.primary)),
        Span::styled(
            format!("[{cols_input:<3}]"),
            field_style(DimField::Cols),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(" Dimensions ")
            .borders(Borders::ALL)
            .border_style(border_style(focused)),
    );
    frame.render_widget(paragraph, area);
}

/// Render the scan result pane. `result` is `None` before the first scan.
pub fn render_result_pane(
    frame: &mut Frame,
    area: Rect,
    result: Option<Option<i32>>,
) {
    let line = match result {
        None => Line::from(Span::styled(
            "-",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Some(Some(value)) => Line::from(Span::styled(
            value.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        )),
        Some(None) => Line::from(Span::styled(
            "no positive entries",
            Style::default().fg(DEFAULT_THEME.error),
        )),
    };

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Minimum positive ")
                .borders(Borders::ALL)
                .border_style(border_style(false)),
        );
    frame.render_widget(paragraph, area);
}

/// Width of one rendered cell including its trailing gap.
const CELL_WIDTH: usize = 7;

/// Render the table itself. The viewport follows the cursor; `cell_edit` is
/// the in-progress text for the cursor cell, shown in place of its value.
pub fn render_grid_pane(
    frame: &mut Frame,
    area: Rect,
    grid: &Grid,
    cursor: (usize, usize),
    cell_edit: &str,
    focused: bool,
) {
    let block = Block::default()
        .title(format!(" Grid {}×{} ", grid.rows(), grid.cols()))
        .borders(Borders::ALL)
        .border_style(border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible_rows = inner.height as usize;
    let visible_cols = (inner.width as usize) / CELL_WIDTH;
    if visible_rows == 0 || visible_cols == 0 {
        return;
    }

    // Keep the cursor inside the viewport.
    let row_offset = cursor.0.saturating_sub(visible_rows.saturating_sub(1));
    let col_offset = cursor.1.saturating_sub(visible_cols.saturating_sub(1));

    let mut lines = Vec::new();
    for row in row_offset..grid.rows().min(row_offset + visible_rows) {
        let mut spans = Vec::new();
        for col in col_offset..grid.cols().min(col_offset + visible_cols) {
            let at_cursor = (row, col) == cursor;
            let editing = at_cursor && !cell_edit.is_empty();

            let text = if editing {
                format!("{cell_edit:>6} ")
            } else {
                let value = grid.get(row, col).unwrap_or(0);
                format!("{value:>6} ")
            };

            let mut style = if editing {
                Style::default().fg(DEFAULT_THEME.secondary)
            } else if grid.get(row, col).unwrap_or(0) == 0 {
                Style::default().fg(DEFAULT_THEME.comment)
            } else {
                Style::default().fg(DEFAULT_THEME.number)
            };
            if at_cursor && focused {
                style = style
                    .bg(DEFAULT_THEME.current_cell_bg)
                    .add_modifier(Modifier::BOLD);
            }

            spans.push(Span::styled(text, style));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the status bar at the bottom: message on the left, keybinds on the
/// right.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    focused_pane: FocusedPane,
) {
    let layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage(50),
            ratatui::layout::Constraint::Percentage(50),
        ])
        .split(area);

    let left = Paragraph::new(Line::from(Span::styled(
        format!(" {message} "),
        Style::default()
            .bg(DEFAULT_THEME.current_cell_bg)
            .fg(DEFAULT_THEME.fg),
    )))
    .style(Style::default().bg(DEFAULT_THEME.current_cell_bg))
    .alignment(Alignment::Left);
    frame.render_widget(left, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_cell_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_cell_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" Tab ", key_style),
        Span::styled(" pane ", desc_style),
        Span::styled("│", sep_style),
    ];
    match focused_pane {
        FocusedPane::Dims => {
            right_spans.extend([
                Span::styled(" ←/→ ", key_style),
                Span::styled(" field ", desc_style),
                Span::styled("│", sep_style),
                Span::styled(" ↵ ", key_style),
                Span::styled(" resize ", desc_style),
                Span::styled("│", sep_style),
            ]);
        }
        FocusedPane::Grid => {
            right_spans.extend([
                Span::styled(" arrows ", key_style),
                Span::styled(" move ", desc_style),
                Span::styled("│", sep_style),
                Span::styled(" ↵ ", key_style),
                Span::styled(" set cell ", desc_style),
                Span::styled("│", sep_style),
            ]);
        }
    }
    right_spans.extend([
        Span::styled(" c ", key_style),
        Span::styled(" compute ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ]);

    let right = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_cell_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right, layout[1]);
}
