//! learn3d - notebook for learning 3D software
//!
//! A terminal app for keeping notes, keyboard shortcuts and folders per 3D
//! package (Blender, Maya, Cinema 4D, ZBrush, Substance Painter). Launch it
//! without arguments for the TUI, or pass a command for plain CLI output.

use crate::app::App;
use crate::config::Settings;
use color_eyre::Result;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        cursor::Show,
        event::{self, Event},
        execute,
        terminal::{
            Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
            enable_raw_mode,
        },
    },
};
use std::error::Error;
use std::io::{self, Write};
use std::time::Duration;
use tracing::{info, warn};

mod app;
mod cli;
mod config;
mod error;
mod forms;
mod handlers;
mod logging;
mod models;
mod search;
mod store;
mod ui;

fn main() -> Result<(), Box<dyn Error>> {
    color_eyre::install()?;

    let (settings, config_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    match logging::init(&settings) {
        Ok(path) => info!(log_file = %path.display(), "learn3d starting"),
        Err(e) => eprintln!("Logging disabled: {:#}", e),
    }
    if let Some(e) = config_error {
        warn!(error = %format!("{:#}", e), "using default settings");
        eprintln!("{:#}; using default settings", e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        cli::execute_cli(&args, &settings)?;
        return Ok(());
    }

    install_panic_hook();
    let result = run_tui(&settings);
    restore_terminal(&mut io::stdout())?;

    info!("learn3d exiting");
    result?;
    Ok(())
}

/// Sets up the terminal and runs the app. The caller restores the terminal
/// whether or not this succeeds.
fn run_tui(settings: &Settings) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(settings);
    run(&mut terminal, &mut app)
}

fn restore_terminal(out: &mut impl Write) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, Show)
}

/// Puts the terminal back before the panic report is printed
fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal(&mut io::stdout());
        hook(info);
    }));
}

/// Main loop: draw, wait for a key, hand it to the key handler
fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        if app.needs_redraw {
            force_redraw(terminal, app)?;
            app.needs_redraw = false;
        } else {
            terminal.draw(|frame| app.render(frame))?;
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => {
                    if handlers::keys::handle_key_events(key, app) {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => app.needs_redraw = true,
                _ => {}
            }
        }
    }
}

/// Clears the screen before drawing so no stale cells survive
fn force_redraw<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    terminal.clear()?;
    execute!(io::stdout(), Clear(ClearType::All))?;
    terminal.draw(|frame| app.render(frame))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_leaves_alternate_screen_and_shows_cursor() {
        let mut out = Vec::new();
        restore_terminal(&mut out).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }
}
