//! Marquee: PS1-style game library frontend
//!
//! Scans a directory for game images, presents them in a self-sizing menu
//! with a scrollable list and a button row, and hands the selected entry to
//! a configurable launch command.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod backdrop;
mod gui;
mod library;
mod settings;
mod theme;

use macroquad::prelude::*;

use app::{help_row_text, AppAction, AppState, MenuKind, OPTIONS_ROW_GAMES_DIR, OPTIONS_ROW_HELP};
use gui::{
    draw_help_bar, draw_rounded_rect, process_input, text_size, GuiComponent, HelpPrompt,
    MenuInputResult, Rect, BAR_HEIGHT,
};
use library::{discover_games, launch_game};
use settings::{load_settings, save_settings, Settings};

const SETTINGS_PATH: &str = "assets/settings.ron";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Marquee v{}", VERSION),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let settings = match load_settings(SETTINGS_PATH) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("settings: {} (using defaults)", err);
            Settings::default()
        }
    };

    let games = discover_games(&settings.games_dir);
    println!(
        "Marquee v{}: {} game(s) in {}",
        VERSION,
        games.len(),
        settings.games_dir.display()
    );

    let mut state = AppState::new(settings, SETTINGS_PATH.into(), games);
    let mut last_display = vec2(screen_width(), screen_height());

    loop {
        let dt = get_frame_time();
        let time = get_time() as f32;
        state.update(dt);

        let display = vec2(screen_width(), screen_height());
        if display != last_display {
            last_display = display;
            for (_, menu) in &mut state.menus {
                menu.on_display_resized();
            }
        }

        clear_background(theme::palette::BG);
        backdrop::draw_backdrop(time, display.x, display.y);

        let result = match state.menus.last_mut() {
            Some((_, menu)) => process_input(menu),
            None => MenuInputResult::None,
        };
        match (result, state.top_kind()) {
            (MenuInputResult::RowChosen(_), Some(MenuKind::Games)) => {
                launch_selected(&mut state);
            }
            (MenuInputResult::RowChosen(row), Some(MenuKind::Options)) => {
                options_row_chosen(&mut state, row);
            }
            (MenuInputResult::Cancel, _) => {
                // Escape on the root menu is a no-op; Quit is a button
                state.close_top_menu();
            }
            _ => {}
        }

        let queued: Vec<AppAction> = state.actions.borrow_mut().drain(..).collect();
        let mut quit = false;
        for action in queued {
            quit |= handle_action(&mut state, action);
        }
        if quit {
            break;
        }

        let menu_count = state.menus.len();
        for (index, (_, menu)) in state.menus.iter().enumerate() {
            if index == menu_count - 1 && menu_count > 1 {
                // Dim everything under the top menu
                draw_rectangle(
                    0.0,
                    0.0,
                    display.x,
                    display.y,
                    Color::new(0.0, 0.0, 0.0, 0.5),
                );
            }
            let origin = ((display - menu.size()) * 0.5).round();
            menu.render(origin);
        }

        if state.settings.show_help {
            let mut prompts = state
                .menus
                .last()
                .map(|(_, menu)| menu.help_prompts())
                .unwrap_or_default();
            if menu_count > 1 {
                prompts.push(HelpPrompt::new("ESC", "back"));
            }
            draw_help_bar(
                Rect::new(0.0, display.y - BAR_HEIGHT, display.x, BAR_HEIGHT),
                &prompts,
            );
        }

        if let Some(message) = state.get_status() {
            draw_status(message, display);
        }

        next_frame().await;
    }
}

/// Interpret one queued action; returns true when the app should exit
fn handle_action(state: &mut AppState, action: AppAction) -> bool {
    match action {
        AppAction::LaunchSelected => launch_selected(state),
        AppAction::OpenOptions => state.open_options(),
        AppAction::CloseMenu => state.close_top_menu(),
        AppAction::SaveSettings => match save_settings(&state.settings, &state.settings_path) {
            Ok(()) => state.set_status("Settings saved", 2.0),
            Err(err) => state.set_status(&format!("Save failed: {}", err), 3.0),
        },
        AppAction::Quit => return true,
    }
    false
}

/// Launch whichever game the root menu's cursor is on
fn launch_selected(state: &mut AppState) {
    if state.games.is_empty() {
        state.set_status("No games found", 2.0);
        return;
    }
    let index = state.menus[0].1.list().borrow().cursor();
    let Some(entry) = state.games.get(index).cloned() else {
        return;
    };
    match state.settings.launch_command.clone() {
        Some(template) => match launch_game(&entry, &template) {
            Ok(()) => state.set_status(&format!("Launching {}", entry.name), 2.0),
            Err(err) => state.set_status(&format!("Launch failed: {}", err), 3.0),
        },
        None => state.set_status("No launch command configured", 2.0),
    }
}

fn options_row_chosen(state: &mut AppState, row: usize) {
    if row == OPTIONS_ROW_HELP {
        state.settings.show_help = !state.settings.show_help;
        let text = help_row_text(state.settings.show_help);
        if let Some((_, menu)) = state.menus.last() {
            menu.list().borrow_mut().set_row(OPTIONS_ROW_HELP, text);
        }
    } else if row == OPTIONS_ROW_GAMES_DIR {
        state.set_status("Edit settings.ron to change the games directory", 3.0);
    }
}

/// Centered status toast above the help bar
fn draw_status(message: &str, display: Vec2) {
    let dims = text_size(message, theme::font::SMALL);
    let pad = 10.0;
    let w = dims.x + pad * 2.0;
    let h = dims.y + pad * 2.0;
    let x = ((display.x - w) * 0.5).round();
    let y = (display.y - BAR_HEIGHT - h - 12.0).round();

    draw_rounded_rect(x, y, w, h, 4.0, theme::palette::FRAME_BG);
    draw_text_ex(
        message,
        x + pad,
        (y + pad + dims.y * 0.8).round(),
        TextParams {
            font_size: theme::font::SMALL as u16,
            color: theme::palette::STATUS,
            ..Default::default()
        },
    );
}
