// hdrcheck: interactive C function header validator

mod grid;
mod parser;
mod repl;
mod ui;

use std::error::Error;
use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use ui::App;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            repl::run(stdin.lock(), &mut stdout)?;
            Ok(())
        }
        Some("--grid") => run_grid_form(),
        Some(arg) => {
            let program_name = args.first().map(String::as_str).unwrap_or("hdrcheck");
            eprintln!("Error: unknown argument '{}'", arg);
            eprintln!();
            eprintln!("Usage: {} [--grid]", program_name);
            eprintln!();
            eprintln!("  {}           # validate headers interactively", program_name);
            eprintln!("  {} --grid    # open the grid scan form", program_name);
            std::process::exit(1);
        }
    }
}

/// Run the grid form in an alternate screen, restoring the terminal on the
/// way out even when the app errors.
fn run_grid_form() -> Result<(), Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let res = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
