//! Application state and menu stack
//!
//! Menus push deferred actions into a shared queue from their button
//! callbacks; the frame loop drains the queue and interprets them.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use crate::gui::MenuComponent;
use crate::library::GameEntry;
use crate::settings::Settings;

/// Deferred actions queued by menu button callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Launch the game selected in the games menu
    LaunchSelected,
    /// Push the options menu
    OpenOptions,
    /// Pop the top menu
    CloseMenu,
    /// Persist settings to disk
    SaveSettings,
    /// Exit the application
    Quit,
}

pub type ActionQueue = Rc<RefCell<Vec<AppAction>>>;

/// Which menu a stack entry is, for interpreting row activations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Games,
    Options,
}

/// Main application state
pub struct AppState {
    pub settings: Settings,
    pub settings_path: PathBuf,
    pub games: Vec<GameEntry>,
    /// Open menus, bottom to top; the top one receives input
    pub menus: Vec<(MenuKind, MenuComponent)>,
    pub actions: ActionQueue,
    status_message: Option<String>,
    status_timer: f32,
}

impl AppState {
    pub fn new(settings: Settings, settings_path: PathBuf, games: Vec<GameEntry>) -> Self {
        let actions: ActionQueue = Rc::new(RefCell::new(Vec::new()));
        let games_menu = build_games_menu(&games, &actions);
        Self {
            settings,
            settings_path,
            games,
            menus: vec![(MenuKind::Games, games_menu)],
            actions,
            status_message: None,
            status_timer: 0.0,
        }
    }

    /// Push the options menu on top of the stack
    pub fn open_options(&mut self) {
        let menu = build_options_menu(&self.settings, &self.actions);
        self.menus.push((MenuKind::Options, menu));
    }

    /// Pop the top menu; the root games menu always stays
    pub fn close_top_menu(&mut self) {
        if self.menus.len() > 1 {
            self.menus.pop();
        }
    }

    pub fn top_kind(&self) -> Option<MenuKind> {
        self.menus.last().map(|(kind, _)| *kind)
    }

    /// Show a temporary status message for `secs` seconds
    pub fn set_status(&mut self, message: &str, secs: f32) {
        self.status_message = Some(message.to_string());
        self.status_timer = secs;
    }

    pub fn get_status(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Tick the status timer (call once per frame)
    pub fn update(&mut self, dt: f32) {
        if self.status_message.is_some() {
            self.status_timer -= dt;
            if self.status_timer <= 0.0 {
                self.status_message = None;
            }
        }
    }
}

fn build_games_menu(games: &[GameEntry], actions: &ActionQueue) -> MenuComponent {
    let mut menu = MenuComponent::new("Games");

    if games.is_empty() {
        menu.add_row("No games found");
    } else {
        for game in games {
            menu.add_row(&game.name);
        }
    }

    let queue = actions.clone();
    menu.add_button(
        "Launch",
        "launch selected game",
        Box::new(move || queue.borrow_mut().push(AppAction::LaunchSelected)),
    );
    let queue = actions.clone();
    menu.add_button(
        "Options",
        "open options",
        Box::new(move || queue.borrow_mut().push(AppAction::OpenOptions)),
    );
    let queue = actions.clone();
    menu.add_button(
        "Quit",
        "exit",
        Box::new(move || queue.borrow_mut().push(AppAction::Quit)),
    );

    menu
}

/// Row indices in the options menu list
pub const OPTIONS_ROW_HELP: usize = 0;
pub const OPTIONS_ROW_GAMES_DIR: usize = 1;

pub fn help_row_text(show_help: bool) -> String {
    format!("Help bar: {}", if show_help { "ON" } else { "OFF" })
}

fn build_options_menu(settings: &Settings, actions: &ActionQueue) -> MenuComponent {
    let mut menu = MenuComponent::new("Options");
    menu.add_row(help_row_text(settings.show_help));
    menu.add_row(format!("Games dir: {}", settings.games_dir.display()));

    let queue = actions.clone();
    menu.add_button(
        "Save",
        "save settings",
        Box::new(move || queue.borrow_mut().push(AppAction::SaveSettings)),
    );
    let queue = actions.clone();
    menu.add_button(
        "Back",
        "close options",
        Box::new(move || queue.borrow_mut().push(AppAction::CloseMenu)),
    );

    menu
}
