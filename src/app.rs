use crate::config::Config;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::export::DirectoryLibrary;
use crate::logger::LogBuffer;
use crate::screening::SystemBrowser;
use crate::state::State;
use crate::store::FileStore;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdout};

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config, log: LogBuffer) -> Result<()> {
        info!("Starting application...");
        let store = FileStore::new(config.directory()?);
        let library = DirectoryLibrary::new(config.resolved_export_directory()?);
        debug!("Saving images to {}", library.directory().display());

        let state = State::new(
            Box::new(store),
            Box::new(SystemBrowser),
            Box::new(library),
            Theme::by_name(&config.theme_name),
            log,
        )?;
        let mut app = App { state };
        app.start_ui()?;

        info!("Exiting application...");
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let result = self.run_loop(CrosstermBackend::new(stdout));

        // Restore the terminal before surfacing any loop error.
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        result
    }

    fn run_loop<B: Backend>(&mut self, backend: B) -> Result<()> {
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;

        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            terminal.draw(|frame| crate::ui::render(frame, &mut self.state))?;
            if !terminal_event_handler.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        terminal.show_cursor()?;
        Ok(())
    }
}
