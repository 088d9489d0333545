//! Self-sizing modal menu
//!
//! A title, a scrollable list, and an optional row of buttons stacked in a
//! 1x3 grid. The menu recomputes its own size whenever the button set or the
//! display changes: height follows the content (clamped to 70% of the
//! display), width is fixed at half the display.

use std::cell::RefCell;
use std::rc::Rc;

use macroquad::prelude::*;

use super::frame::BackgroundFrame;
use super::{
    display_size, line_height, ButtonComponent, ComponentGrid, ComponentList, ComponentRef,
    GuiComponent, HelpPrompt, TextAlign, TextComponent,
};
use crate::theme;

/// Vertical padding added to the button row height
const BUTTON_GRID_VERT_PADDING: f32 = 20.0;
/// Horizontal padding added per button column
const BUTTON_GRID_HORIZ_PADDING: f32 = 16.0;
/// Inset between the menu bounds and its background frame
const BACKGROUND_INSET: f32 = -32.0;

/// What an Enter press landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuActivation {
    None,
    /// A list row was chosen (index into the rows)
    Row(usize),
    /// A button was pressed; its callback has already run
    Button,
}

pub struct MenuComponent {
    title: Rc<RefCell<TextComponent>>,
    /// Intrinsic measured title height. The grid stretches the title label
    /// to its row, overwriting the measurement, so the height the size
    /// computation needs is captured once at construction.
    title_height: f32,
    list: Rc<RefCell<ComponentList>>,
    background: BackgroundFrame,
    grid: ComponentGrid,
    buttons: Vec<Rc<RefCell<ButtonComponent>>>,
    button_grid: Option<Rc<RefCell<ComponentGrid>>>,
    size: Vec2,
}

impl MenuComponent {
    /// Build a menu with an uppercase centered title and an empty list.
    /// Runs an initial layout pass and resets the cursor onto the list.
    pub fn new(title: &str) -> Self {
        let title = Rc::new(RefCell::new(TextComponent::new(
            title.to_uppercase(),
            theme::font::LARGE,
            theme::palette::TITLE,
            TextAlign::Center,
        )));
        let title_height = title.borrow().size().y;
        let list = Rc::new(RefCell::new(ComponentList::new()));

        let mut grid = ComponentGrid::new(1, 3);
        grid.set_entry(title.clone(), 0, 0, false, true);
        grid.set_entry(list.clone(), 0, 1, true, true);

        let mut menu = Self {
            title,
            title_height,
            list,
            background: BackgroundFrame::new(),
            grid,
            buttons: Vec::new(),
            button_grid: None,
            size: Vec2::ZERO,
        };
        menu.update_grid();
        menu.update_size();
        menu.grid.reset_cursor();
        menu
    }

    /// Append a button. The button row is rebuilt from scratch and the menu
    /// re-sized; duplicate labels are allowed and order is insertion order.
    pub fn add_button(&mut self, label: &str, help_text: &str, on_activate: Box<dyn FnMut()>) {
        self.buttons.push(Rc::new(RefCell::new(ButtonComponent::new(
            label,
            help_text,
            on_activate,
        ))));
        self.update_grid();
        self.update_size();
    }

    /// Append a content row and re-size the menu around it
    pub fn add_row(&mut self, text: impl Into<String>) {
        self.list.borrow_mut().add_row(text);
        self.update_size();
    }

    /// The list region, for callers that populate or inspect content
    pub fn list(&self) -> Rc<RefCell<ComponentList>> {
        self.list.clone()
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Height reserved for the button row. Falls back to a font-derived
    /// height when no buttons exist so the empty slot still has extent.
    pub fn button_row_height(&self) -> f32 {
        match &self.button_grid {
            Some(row) => row.borrow().size().y,
            None => line_height(theme::font::MEDIUM) + BUTTON_GRID_VERT_PADDING,
        }
    }

    /// Re-run the size computation against the current display (call when
    /// the window is resized)
    pub fn on_display_resized(&mut self) {
        self.update_size();
    }

    /// Move the selection up: within the list, or from the buttons back to
    /// the list
    pub fn move_cursor_up(&mut self) {
        match self.grid.cursor_row() {
            Some(1) => {
                self.list.borrow_mut().move_cursor(-1);
            }
            Some(2) => {
                self.grid.move_cursor(0, -1);
            }
            _ => {}
        }
    }

    /// Move the selection down: within the list, or onto the button row once
    /// the end of the list is reached
    pub fn move_cursor_down(&mut self) {
        match self.grid.cursor_row() {
            Some(1) => {
                let moved = self.list.borrow_mut().move_cursor(1);
                if !moved && self.button_grid.is_some() {
                    self.grid.move_cursor(0, 1);
                }
            }
            Some(2) => {}
            _ => {}
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.grid.cursor_row() == Some(2) {
            if let Some(row) = &self.button_grid {
                row.borrow_mut().move_cursor(-1, 0);
            }
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.grid.cursor_row() == Some(2) {
            if let Some(row) = &self.button_grid {
                row.borrow_mut().move_cursor(1, 0);
            }
        }
    }

    /// Activate whatever the cursor is on. Button callbacks run here.
    pub fn activate(&mut self) -> MenuActivation {
        match self.grid.cursor_row() {
            Some(1) => {
                let list = self.list.borrow();
                if list.is_empty() {
                    MenuActivation::None
                } else {
                    MenuActivation::Row(list.cursor())
                }
            }
            Some(2) => {
                let col = self
                    .button_grid
                    .as_ref()
                    .and_then(|row| row.borrow().cursor())
                    .map(|(col, _)| col);
                if let Some(col) = col {
                    if let Some(button) = self.buttons.get(col) {
                        button.borrow_mut().activate();
                        return MenuActivation::Button;
                    }
                }
                MenuActivation::None
            }
            _ => MenuActivation::None,
        }
    }

    /// Destroy and rebuild the button row from the current button sequence
    fn update_grid(&mut self) {
        let was_on_buttons = self.grid.cursor_row() == Some(2);
        if let Some(old) = self.button_grid.take() {
            let handle: ComponentRef = old;
            self.grid.remove_entry(&handle);
        }

        if let Some(row) = make_button_grid(&self.buttons) {
            let row = Rc::new(RefCell::new(row));
            self.grid.set_entry(row.clone(), 0, 2, true, false);
            self.button_grid = Some(row);
        }

        if self.grid.cursor().is_none() {
            self.grid.reset_cursor();
            // A rebuild while the buttons were focused keeps them focused
            if was_on_buttons && self.button_grid.is_some() {
                self.grid.move_cursor(0, 1);
            }
        }
    }

    /// Height = title + list content + button row + margin, clamped to 70%
    /// of the display; width fixed at half the display
    fn update_size(&mut self) {
        let display = display_size();
        let mut height = self.title_height
            + self.list.borrow().total_row_height()
            + self.button_row_height()
            + 2.0;
        if height > display.y * 0.7 {
            height = display.y * 0.7;
        }
        self.set_size(vec2(display.x * 0.5, height));
    }

    fn on_size_changed(&mut self) {
        self.background
            .fit_to(self.size, vec2(BACKGROUND_INSET, BACKGROUND_INSET));

        self.grid
            .set_row_height_frac(0, self.title_height / self.size.y);
        self.grid
            .set_row_height_frac(2, self.button_row_height() / self.size.y);
        self.grid.set_size(self.size);
    }

    #[cfg(test)]
    fn row_height_frac(&self, row: usize) -> f32 {
        self.grid.row_height_frac(row)
    }
}

impl GuiComponent for MenuComponent {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn set_size(&mut self, size: Vec2) {
        self.size = size;
        self.on_size_changed();
    }

    fn render(&self, origin: Vec2) {
        self.background.render(origin);
        self.grid.render(origin);
    }

    fn help_prompts(&self) -> Vec<HelpPrompt> {
        self.grid.help_prompts()
    }
}

/// Build a single-row grid holding `buttons`, one column each, sized so a
/// column's fraction is proportional to its button's width plus padding.
/// The row height deliberately follows the FIRST button's height (plus
/// padding), matching the frontend's historical layout.
///
/// Returns None for an empty sequence instead of dividing by zero.
pub fn make_button_grid(buttons: &[Rc<RefCell<ButtonComponent>>]) -> Option<ComponentGrid> {
    if buttons.is_empty() {
        return None;
    }

    let mut row = ComponentGrid::new(buttons.len(), 1);

    // Total width starts at the per-column padding
    let mut row_width = BUTTON_GRID_HORIZ_PADDING * buttons.len() as f32;
    for (col, button) in buttons.iter().enumerate() {
        row.set_entry(button.clone(), col, 0, true, false);
        row_width += button.borrow().size().x;
    }

    for (col, button) in buttons.iter().enumerate() {
        let frac = (button.borrow().size().x + BUTTON_GRID_HORIZ_PADDING) / row_width;
        row.set_col_width_frac(col, frac);
    }

    let row_height = buttons[0].borrow().size().y + BUTTON_GRID_VERT_PADDING;
    row.set_size(vec2(row_width, row_height));

    Some(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::text_size;

    fn button(label: &str) -> Rc<RefCell<ButtonComponent>> {
        Rc::new(RefCell::new(ButtonComponent::new(label, "", Box::new(|| {}))))
    }

    fn column_fracs(row: &ComponentGrid, count: usize) -> Vec<f32> {
        (0..count).map(|col| row.col_width_frac(col)).collect()
    }

    #[test]
    fn test_empty_button_sequence_rejected() {
        assert!(make_button_grid(&[]).is_none());
    }

    #[test]
    fn test_single_button_fills_row() {
        let buttons = vec![button("ok")];
        let row = make_button_grid(&buttons).unwrap();
        assert!((row.col_width_frac(0) - 1.0).abs() < 1e-6);

        let width = buttons[0].borrow().size().x + BUTTON_GRID_HORIZ_PADDING;
        assert!((row.size().x - width).abs() < 0.001);
        let height = buttons[0].borrow().size().y + BUTTON_GRID_VERT_PADDING;
        assert!((row.size().y - height).abs() < 0.001);
    }

    #[test]
    fn test_column_fractions_sum_to_one() {
        let buttons = vec![button("yes"), button("no"), button("maybe later")];
        let row = make_button_grid(&buttons).unwrap();
        let sum: f32 = column_fracs(&row, buttons.len()).iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_fractions_proportional_to_widths() {
        let buttons = vec![button("a"), button("considerably wider")];
        let row = make_button_grid(&buttons).unwrap();
        let w0 = buttons[0].borrow().size().x + BUTTON_GRID_HORIZ_PADDING;
        let w1 = buttons[1].borrow().size().x + BUTTON_GRID_HORIZ_PADDING;
        let fracs = column_fracs(&row, 2);
        assert!((fracs[0] / fracs[1] - w0 / w1).abs() < 1e-4);
    }

    #[test]
    fn test_row_height_uses_first_button() {
        let buttons = vec![button("x"), button("y")];
        let row = make_button_grid(&buttons).unwrap();
        let expected = buttons[0].borrow().size().y + BUTTON_GRID_VERT_PADDING;
        assert!((row.size().y - expected).abs() < 0.001);
    }

    #[test]
    fn test_title_uppercased() {
        let menu = MenuComponent::new("Main Menu");
        assert_eq!(menu.title.borrow().text(), "MAIN MENU");
    }

    #[test]
    fn test_menu_width_half_display() {
        let display = display_size();
        let menu = MenuComponent::new("Options");
        assert!((menu.size().x - display.x * 0.5).abs() < 0.001);

        let mut menu = menu;
        menu.add_button("start", "", Box::new(|| {}));
        for i in 0..5 {
            menu.add_row(format!("row {}", i));
        }
        assert!((menu.size().x - display.x * 0.5).abs() < 0.001);
    }

    #[test]
    fn test_menu_height_clamped() {
        let display = display_size();
        let mut menu = MenuComponent::new("Library");
        for i in 0..500 {
            menu.add_row(format!("game {}", i));
        }
        assert!(menu.size().y <= display.y * 0.7 + 0.001);

        // Degenerate empty list still respects the clamp
        let empty = MenuComponent::new("Empty");
        assert!(empty.size().y <= display.y * 0.7 + 0.001);
    }

    #[test]
    fn test_unclamped_height_is_content_sum() {
        let mut menu = MenuComponent::new("Options");
        menu.add_row("first");
        menu.add_row("second");
        let expected = text_size("OPTIONS", theme::font::LARGE).y
            + menu.list.borrow().total_row_height()
            + menu.button_row_height()
            + 2.0;
        assert!((menu.size().y - expected).abs() < 0.001);
    }

    #[test]
    fn test_title_height_survives_layout() {
        // The grid stretches the title label into its row; the height
        // computation must still see the intrinsic measurement
        let menu = MenuComponent::new("Options");
        let measured = text_size("OPTIONS", theme::font::LARGE).y;
        assert!((menu.title_height - measured).abs() < 0.001);

        let fallback = line_height(theme::font::MEDIUM) + BUTTON_GRID_VERT_PADDING;
        assert!((menu.size().y - (measured + fallback + 2.0)).abs() < 0.001);

        // Row 0 of the outer grid gets exactly the title's share
        let expected_frac = measured / menu.size().y;
        assert!((menu.row_height_frac(0) - expected_frac).abs() < 1e-5);
    }

    #[test]
    fn test_row2_fraction_tracks_button_state() {
        let mut menu = MenuComponent::new("Options");

        // No buttons: fallback height over total
        let fallback = line_height(theme::font::MEDIUM) + BUTTON_GRID_VERT_PADDING;
        let expected = fallback / menu.size().y;
        assert!((menu.row_height_frac(2) - expected).abs() < 1e-5);

        // One button: its height plus padding over total
        menu.add_button("start", "", Box::new(|| {}));
        let button_height = menu.buttons[0].borrow().size().y + BUTTON_GRID_VERT_PADDING;
        let expected = button_height / menu.size().y;
        assert!((menu.row_height_frac(2) - expected).abs() < 1e-5);
    }

    #[test]
    fn test_append_rebuilds_button_row() {
        let mut menu = MenuComponent::new("Options");
        assert!(menu.button_grid.is_none());

        menu.add_button("Start", "start", Box::new(|| {}));
        let first_row = menu.button_grid.clone().unwrap();
        assert!((first_row.borrow().col_width_frac(0) - 1.0).abs() < 1e-6);

        menu.add_button("Exit", "exit", Box::new(|| {}));
        let second_row = menu.button_grid.clone().unwrap();
        // Previous row was discarded, not mutated
        assert!(!Rc::ptr_eq(&first_row, &second_row));
        assert_eq!(menu.button_count(), 2);

        let fracs = column_fracs(&second_row.borrow(), 2);
        let sum: f32 = fracs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        let w0 = menu.buttons[0].borrow().size().x + BUTTON_GRID_HORIZ_PADDING;
        let w1 = menu.buttons[1].borrow().size().x + BUTTON_GRID_HORIZ_PADDING;
        assert!((fracs[0] / fracs[1] - w0 / w1).abs() < 1e-4);
    }

    #[test]
    fn test_cursor_moves_between_list_and_buttons() {
        let mut menu = MenuComponent::new("Games");
        menu.add_row("doom");
        menu.add_row("quake");
        menu.add_button("Launch", "launch", Box::new(|| {}));
        menu.add_button("Quit", "quit", Box::new(|| {}));

        // Starts on the list
        assert_eq!(menu.grid.cursor_row(), Some(1));
        assert_eq!(menu.activate(), MenuActivation::Row(0));

        menu.move_cursor_down();
        assert_eq!(menu.activate(), MenuActivation::Row(1));

        // Past the end of the list: focus lands on the button row
        menu.move_cursor_down();
        assert_eq!(menu.grid.cursor_row(), Some(2));

        menu.move_cursor_right();
        let col = menu
            .button_grid
            .as_ref()
            .unwrap()
            .borrow()
            .cursor()
            .map(|(c, _)| c);
        assert_eq!(col, Some(1));

        // Back up to the list
        menu.move_cursor_up();
        assert_eq!(menu.grid.cursor_row(), Some(1));
    }

    #[test]
    fn test_append_keeps_button_row_focused() {
        let mut menu = MenuComponent::new("Games");
        menu.add_row("doom");
        menu.add_button("Launch", "", Box::new(|| {}));
        menu.move_cursor_down();
        assert_eq!(menu.grid.cursor_row(), Some(2));

        // Appending rebuilds the row; focus stays on it
        menu.add_button("Quit", "", Box::new(|| {}));
        assert_eq!(menu.grid.cursor_row(), Some(2));
        let col = menu
            .button_grid
            .as_ref()
            .unwrap()
            .borrow()
            .cursor()
            .map(|(c, _)| c);
        assert_eq!(col, Some(0));
    }

    #[test]
    fn test_button_activation_runs_callback() {
        let fired = Rc::new(RefCell::new(0u32));
        let mut menu = MenuComponent::new("Games");
        menu.add_row("doom");
        let counter = fired.clone();
        menu.add_button(
            "Launch",
            "launch",
            Box::new(move || *counter.borrow_mut() += 1),
        );

        menu.move_cursor_down();
        menu.move_cursor_down();
        assert_eq!(menu.activate(), MenuActivation::Button);
        assert_eq!(*fired.borrow(), 1);
    }

    #[test]
    fn test_help_prompts_delegate_to_grid() {
        let mut menu = MenuComponent::new("Games");
        menu.add_button("Launch", "launch game", Box::new(|| {}));
        let prompts = menu.help_prompts();
        // List contributes navigation, the button contributes its help text
        assert!(prompts.iter().any(|p| p.input == "UP/DOWN"));
        assert!(prompts.iter().any(|p| p.label == "launch game"));
    }

    #[test]
    fn test_options_start_exit_scenario() {
        let mut menu = MenuComponent::new("Options");
        let title_height = text_size("OPTIONS", theme::font::LARGE).y;
        let fallback = line_height(theme::font::MEDIUM) + BUTTON_GRID_VERT_PADDING;
        assert!((menu.size().y - (title_height + fallback + 2.0)).abs() < 0.001);
        assert!(menu.button_grid.is_none());

        menu.add_button("Start", "", Box::new(|| {}));
        let row = menu.button_grid.clone().unwrap();
        assert!((row.borrow().col_width_frac(0) - 1.0).abs() < 1e-6);
        let row_height = menu.buttons[0].borrow().size().y + BUTTON_GRID_VERT_PADDING;
        assert!((menu.size().y - (title_height + row_height + 2.0)).abs() < 0.001);

        menu.add_button("Exit", "", Box::new(|| {}));
        let rebuilt = menu.button_grid.clone().unwrap();
        assert!(!Rc::ptr_eq(&row, &rebuilt));
        let fracs: Vec<f32> = (0..2).map(|c| rebuilt.borrow().col_width_frac(c)).collect();
        let w0 = menu.buttons[0].borrow().size().x + BUTTON_GRID_HORIZ_PADDING;
        let w1 = menu.buttons[1].borrow().size().x + BUTTON_GRID_HORIZ_PADDING;
        assert!((fracs[0] - w0 / (w0 + w1)).abs() < 1e-5);
        assert!((fracs[1] - w1 / (w0 + w1)).abs() < 1e-5);
    }
}
