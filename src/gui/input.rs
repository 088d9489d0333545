//! Keyboard navigation for an open menu

use macroquad::prelude::*;

use super::{MenuActivation, MenuComponent};

/// Result of processing input for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInputResult {
    /// No action this frame
    None,
    /// A list row was chosen (index into the menu's rows)
    RowChosen(usize),
    /// A button was pressed; its callback has already run
    ButtonPressed,
    /// User wants to close the menu
    Cancel,
}

/// Process keyboard input against the menu's cursor
pub fn process_input(menu: &mut MenuComponent) -> MenuInputResult {
    if is_key_pressed(KeyCode::Up) {
        menu.move_cursor_up();
    }
    if is_key_pressed(KeyCode::Down) {
        menu.move_cursor_down();
    }
    if is_key_pressed(KeyCode::Left) {
        menu.move_cursor_left();
    }
    if is_key_pressed(KeyCode::Right) {
        menu.move_cursor_right();
    }

    if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::Space) {
        return match menu.activate() {
            MenuActivation::Row(index) => MenuInputResult::RowChosen(index),
            MenuActivation::Button => MenuInputResult::ButtonPressed,
            MenuActivation::None => MenuInputResult::None,
        };
    }

    if is_key_pressed(KeyCode::Escape) {
        return MenuInputResult::Cancel;
    }

    MenuInputResult::None
}
