//! Shared palette and font metrics for the frontend UI

/// Visual theme colors
pub mod palette {
    use macroquad::prelude::Color;

    /// Screen clear color (near-black blue)
    pub const BG: Color = Color::new(0.03, 0.03, 0.10, 1.0);
    /// Menu frame fill
    pub const FRAME_BG: Color = Color::new(0.08, 0.08, 0.14, 0.96);
    /// Menu frame border
    pub const FRAME_BORDER: Color = Color::new(0.25, 0.25, 0.35, 1.0);
    /// Menu title text
    pub const TITLE: Color = Color::new(0.78, 0.78, 0.85, 1.0);
    /// Regular list text
    pub const TEXT: Color = Color::new(0.85, 0.85, 0.9, 1.0);
    /// De-emphasized text (help bar labels, empty states)
    pub const MUTED: Color = Color::new(0.5, 0.5, 0.58, 1.0);
    /// Accent color (cyan, PS1 XMB style)
    pub const ACCENT: Color = Color::new(0.0, 0.75, 0.9, 1.0);
    /// List selection bar
    pub const HIGHLIGHT: Color = Color::new(0.0, 0.35, 0.45, 0.6);
    /// Idle button fill
    pub const BUTTON_BG: Color = Color::new(0.16, 0.16, 0.22, 1.0);
    /// Button label text
    pub const BUTTON_TEXT: Color = Color::new(0.9, 0.9, 0.95, 1.0);
    /// Status message text
    pub const STATUS: Color = Color::new(0.4, 1.0, 0.4, 1.0);
}

/// Font sizes (default macroquad font, sized in pixels)
pub mod font {
    /// Menu titles
    pub const LARGE: f32 = 28.0;
    /// List rows and buttons
    pub const MEDIUM: f32 = 18.0;
    /// Help bar and status text
    pub const SMALL: f32 = 14.0;
}
