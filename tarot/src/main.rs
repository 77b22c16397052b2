mod app;
mod effects;
mod screens;
mod store;

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;

use app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // A TUI owns stdout, so logs go to a file next to the binary.
    let log_file = std::fs::File::create("tarot.log")?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, data_dir);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    data_dir: PathBuf,
) -> color_eyre::Result<()> {
    let size = terminal.size()?;
    let mut app = App::new(data_dir, size.width, size.height);

    loop {
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        // Poll with ~30fps tick for the flip animation
        if event::poll(Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        if app.handle_key(key) {
                            break; // Quit signal
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse);
                }
                Event::Resize(w, h) => {
                    app.handle_resize(w, h);
                }
                _ => {}
            }
        }

        app.tick();
    }

    Ok(())
}
