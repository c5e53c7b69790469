//! Grid form state and event loop

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};

use crate::grid::{self, Grid};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Dims,
    Grid,
}

impl FocusedPane {
    /// Move focus to the next pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Dims => FocusedPane::Grid,
            FocusedPane::Grid => FocusedPane::Dims,
        }
    }
}

/// Which dimension input field is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimField {
    Rows,
    Cols,
}

impl DimField {
    pub fn other(self) -> Self {
        match self {
            DimField::Rows => DimField::Cols,
            DimField::Cols => DimField::Rows,
        }
    }
}

/// The form state
pub struct App {
    /// The table being edited
    pub grid: Grid,

    /// Text of the two dimension fields
    pub rows_input: String,
    pub cols_input: String,

    /// Active dimension field
    pub active_field: DimField,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Cursor cell in the grid pane
    pub cursor: (usize, usize),

    /// In-progress text for the cursor cell; empty when not editing
    pub cell_edit: String,

    /// Last scan outcome; `None` until the first scan
    pub result: Option<Option<i32>>,

    /// Status message to display
    pub status_message: String,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let grid = Grid::default();
        App {
            rows_input: grid.rows().to_string(),
            cols_input: grid.cols().to_string(),
            grid,
            active_field: DimField::Rows,
            focused_pane: FocusedPane::Dims,
            cursor: (0, 0),
            cell_edit: String::new(),
            result: None,
            status_message: String::from("Ready!"),
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        super::panes::render_dims_pane(
            frame,
            top[0],
            &self.rows_input,
            &self.cols_input,
            self.active_field,
            self.focused_pane == FocusedPane::Dims,
        );

        super::panes::render_result_pane(frame, top[1], self.result);

        super::panes::render_grid_pane(
            frame,
            main_chunks[1],
            &self.grid,
            self.cursor,
            &self.cell_edit,
            self.focused_pane == FocusedPane::Grid,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.focused_pane,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.cell_edit.clear();
                self.focused_pane = self.focused_pane.next();
                return;
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.compute();
                return;
            }
            _ => {}
        }

        match self.focused_pane {
            FocusedPane::Dims => self.handle_dims_key(key),
            FocusedPane::Grid => self.handle_grid_key(key),
        }
    }

    fn handle_dims_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right => {
                self.active_field = self.active_field.other();
            }
            KeyCode::Char(c @ '0'..='9') => {
                let field = self.active_dim_input();
                if field.len() < 3 {
                    field.push(c);
                }
            }
            KeyCode::Backspace => {
                self.active_dim_input().pop();
            }
            KeyCode::Enter => self.apply_resize(),
            _ => {}
        }
    }

    fn handle_grid_key(&mut self, key: KeyEvent) {
        match key.code {
            // Moving drops an uncommitted edit.
            KeyCode::Up => {
                self.cell_edit.clear();
                self.cursor.0 = self.cursor.0.saturating_sub(1);
            }
            KeyCode::Down => {
                self.cell_edit.clear();
                self.cursor.0 = (self.cursor.0 + 1).min(self.grid.rows() - 1);
            }
            KeyCode::Left => {
                self.cell_edit.clear();
                self.cursor.1 = self.cursor.1.saturating_sub(1);
            }
            KeyCode::Right => {
                self.cell_edit.clear();
                self.cursor.1 = (self.cursor.1 + 1).min(self.grid.cols() - 1);
            }
            KeyCode::Char(c @ ('0'..='9' | '-')) => {
                if self.cell_edit.len() < 6 {
                    self.cell_edit.push(c);
                }
            }
            KeyCode::Backspace => {
                self.cell_edit.pop();
            }
            KeyCode::Enter => self.commit_cell(),
            _ => {}
        }
    }

    fn active_dim_input(&mut self) -> &mut String {
        match self.active_field {
            DimField::Rows => &mut self.rows_input,
            DimField::Cols => &mut self.cols_input,
        }
    }

    /// Apply the dimension fields to the grid (the form's "create" button).
    fn apply_resize(&mut self) {
        let rows = self.rows_input.parse::<usize>();
        let cols = self.cols_input.parse::<usize>();
        let (Ok(rows), Ok(cols)) = (rows, cols) else {
            self.status_message = String::from("Enter both dimensions first");
            return;
        };

        match self.grid.resize(rows, cols) {
            Ok(()) => {
                self.cursor = (0, 0);
                self.result = None;
                self.status_message = format!("Grid resized to {rows}×{cols}");
            }
            Err(e) => {
                self.status_message = e.to_string();
            }
        }
    }

    /// Commit the pending cell edit at the cursor.
    fn commit_cell(&mut self) {
        if self.cell_edit.is_empty() {
            return;
        }

        match self.cell_edit.parse::<i32>() {
            Ok(value) => {
                let (row, col) = self.cursor;
                match self.grid.set(row, col, value) {
                    Ok(()) => {
                        self.status_message =
                            format!("Cell ({row}, {col}) = {value}");
                    }
                    Err(e) => {
                        self.status_message = e.to_string();
                    }
                }
            }
            Err(_) => {
                self.status_message =
                    format!("Not an integer: {}", self.cell_edit);
            }
        }
        self.cell_edit.clear();
    }

    /// Run the scan (the form's "compute" button).
    fn compute(&mut self) {
        let result = grid::min_positive(&self.grid);
        self.result = Some(result);
        self.status_message = match result {
            Some(value) => format!("Minimum positive entry: {value}"),
            None => String::from("No positive entries"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, KeyEventState};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
    }

    #[test]
    fn test_resize_via_dim_fields() {
        let mut app = App::new();
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.grid.rows(), 2);
        assert_eq!(app.grid.cols(), 3);
    }

    #[test]
    fn test_resize_rejects_zero() {
        let mut app = App::new();
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('0'));
        press(&mut app, KeyCode::Enter);

        // Grid unchanged, error surfaced in the status line.
        assert_eq!(app.grid.rows(), 5);
        assert!(app.status_message.contains("outside"));
    }

    #[test]
    fn test_edit_cell_and_compute() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('9'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.grid.get(0, 0), Some(-4));
        assert_eq!(app.grid.get(0, 1), Some(9));

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.result, Some(Some(9)));
    }

    #[test]
    fn test_moving_drops_pending_edit() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('7'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.grid.get(0, 0), Some(0));
        assert_eq!(app.grid.get(1, 0), Some(0));
    }

    #[test]
    fn test_cursor_stays_inside_grid() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab);
        for _ in 0..20 {
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.cursor, (4, 4));

        for _ in 0..20 {
            press(&mut app, KeyCode::Up);
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.cursor, (0, 0));
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
