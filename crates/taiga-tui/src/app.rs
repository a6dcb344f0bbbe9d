use crossterm::event::KeyEvent;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use taiga_core::TaigaResult;

use crate::controllers::ProjectDetailController;
use crate::events::{Event, EventHandler};
use crate::keybindings::{KeyBinding, Keys};
use crate::ui;

pub struct App {
    pub controller: ProjectDetailController,
    keys: Keys,
    pub should_quit: bool,
}

impl App {
    pub fn new(controller: ProjectDetailController, keys: Keys) -> Self {
        Self {
            controller,
            keys,
            should_quit: false,
        }
    }

    /// Routes a key press to the controller. The global quit key only
    /// applies when nothing else took the key.
    pub fn handle_key_event(&mut self, event: KeyEvent) {
        if self.controller.handle_key_event(&event) {
            return;
        }
        if KeyBinding::from_event(&event) == Some(self.keys.global.quit) {
            tracing::info!("Quit requested");
            self.should_quit = true;
        }
    }

    pub async fn run(&mut self) -> TaigaResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::default();

        let result = self.event_loop(&mut terminal, &mut events).await;

        events.stop();
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &mut EventHandler,
    ) -> TaigaResult<()> {
        while !self.should_quit {
            let fired = self.controller.dispatch_completions();
            if fired > 0 {
                tracing::debug!("Applied {} results", fired);
            }

            terminal.draw(|frame| ui::render(frame, &self.controller))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key_event(key),
                Some(Event::Tick) => {}
                None => break,
            }
        }
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
