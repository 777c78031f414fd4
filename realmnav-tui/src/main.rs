//! Realm Navigator TUI — five screens with a history-backed back button.
//!
//! Screens:
//! 1. Realms — pick a realm (root; tab `1`)
//! 2. Story — stories in the selected realm
//! 3. Settings — plan, language, theme (tab `2`)
//! 4. Upgrade Plan — subscription offers
//! 5. Store — wish packs (`+` from anywhere)
//!
//! `Esc`/`Backspace` press the top-bar back button; `q` quits.

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};

use realmnav_core::logging::init_logging;
use realmnav_tui::{config, input, persistence, ui, AppState};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Config and logging
    let config_path = config::default_path();
    let config = config::load(&config_path)?;
    init_logging(&config.log_config()?).context("opening log file")?;
    info!(config = %config_path.display(), "realmnav-tui starting");

    // Load persisted preferences
    let prefs_path = config.preferences_path();
    let prefs = persistence::load(&prefs_path);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // The back button exists once the terminal is ready; only now start the session.
    let mut app = AppState::new(prefs, config.back_button);

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save preferences before exit
    if let Err(err) = persistence::save(&prefs_path, &app.prefs) {
        warn!(path = %prefs_path.display(), %err, "could not save preferences");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let AppState {
        session,
        exit_story,
        ..
    } = app;
    let mounted = session.shutdown();
    info!(mounted = ?mounted.as_slice(), "realmnav-tui stopped");

    if let Some(story) = exit_story {
        println!("Continue \"{story}\" in chat.");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
