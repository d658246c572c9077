//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, paints the current
//! screen through the canvas renderer, translates keyboard events into
//! core::Action values and runs the effects `update()` asks for.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//!  crossterm events ─┐
//!                    ├─► update(app, action) ─► Effect ─► spawn / cancel tasks
//!  task actions (rx) ┘                │
//!                                     └─► needs_redraw ─► terminal.draw()
//! ```
//!
//! Background tasks (poll, list fetch, send, blink) report through one
//! `std::sync::mpsc` channel drained between frames. Leaving a screen drops
//! its task guards, which aborts them.
//!
//! The terminal cursor stays hidden: the chat screen paints its own
//! blinking cursor on the canvas.

mod component;
mod components;
mod event;
pub mod surface;
pub mod tasks;

use log::{debug, info};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::Frame;

use crate::canvas::Palette;
use crate::client::{ChatSource, HttpChatSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Screen};
use crate::tui::component::Component;
use crate::tui::components::{ChatScreen, ListScreen};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::tasks::{TaskGuard, spawn_blink, spawn_list, spawn_poll, spawn_send};

/// Upper bound on how long a task result waits before it is drawn.
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste, Hide)?;
        info!("Terminal modes enabled (bracketed paste, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Show);
    }
}

/// Tasks owned by the current screen. Replacing a guard cancels the old task.
struct ScreenTasks {
    source: Arc<dyn ChatSource>,
    retry_delay: Duration,
    tx: mpsc::Sender<Action>,
    poll: Option<TaskGuard>,
    list: Option<TaskGuard>,
}

impl ScreenTasks {
    fn enter(&mut self, screen: &Screen) {
        match screen {
            Screen::Chat(room) => self.open_chat(room.chat_id.clone()),
            Screen::List(_) => self.open_list(),
        }
    }

    fn open_chat(&mut self, chat_id: String) {
        self.list = None;
        self.poll = Some(spawn_poll(
            self.source.clone(),
            chat_id,
            self.retry_delay,
            self.tx.clone(),
        ));
    }

    fn open_list(&mut self) {
        self.poll = None;
        self.list = Some(spawn_list(self.source.clone(), self.tx.clone()));
    }

    /// Run one effect. Returns `true` when the app should exit.
    fn apply(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::None => {}
            Effect::Quit => return true,
            Effect::OpenChat(chat_id) => self.open_chat(chat_id),
            Effect::OpenList => self.open_list(),
            Effect::Send { chat_id, message } => {
                spawn_send(self.source.clone(), chat_id, message, self.tx.clone());
            }
        }
        false
    }
}

fn draw(frame: &mut Frame, app: &App, palette: &Palette) {
    let area = frame.area();
    match &app.screen {
        Screen::List(list) => ListScreen { list, palette }.render(frame, area),
        Screen::Chat(room) => ChatScreen {
            room,
            user_id: &app.user_id,
            blink: app.blink,
            palette,
        }
        .render(frame, area),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn ChatSource> = Arc::new(HttpChatSource::new(config.server_url.clone()));
    let mut app = App::new(config.user_id.clone(), config.initial_chat.as_deref());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let _blink = spawn_blink(config.blink_interval, tx.clone());
    let mut tasks = ScreenTasks {
        source,
        retry_delay: config.retry_delay,
        tx,
        poll: None,
        list: None,
    };
    tasks.enter(&app.screen);

    let mut needs_redraw = true; // Force first frame

    'main: loop {
        if needs_redraw {
            terminal.draw(|f| draw(f, &app, &config.palette))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(EVENT_POLL_TIMEOUT);

        // Process first event + drain ALL pending events before next draw
        let mut effects = Vec::new();
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            let action = match event {
                TuiEvent::Resize => continue,
                TuiEvent::Quit => Action::Quit,
                TuiEvent::ForceQuit => {
                    info!("Force quit");
                    Action::Quit
                }
                TuiEvent::Key(input) => Action::Key(input),
                TuiEvent::Paste(text) => Action::Paste(text),
            };
            effects.push(update(&mut app, action));
        }

        // Handle background task actions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            effects.push(update(&mut app, action));
        }

        for effect in effects {
            if tasks.apply(effect) {
                break 'main;
            }
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}
