//! Menu background frame

use macroquad::prelude::*;

use super::draw_rounded_rect;
use crate::theme;

/// Backdrop drawn behind a menu, fitted to the menu bounds with an inset.
/// Uses `assets/frame.png` stretched to the bounds when present, otherwise a
/// rounded rect with a border.
pub struct BackgroundFrame {
    size: Vec2,
    offset: Vec2,
    texture: Option<Texture2D>,
}

impl BackgroundFrame {
    pub fn new() -> Self {
        Self {
            size: Vec2::ZERO,
            offset: Vec2::ZERO,
            texture: load_frame_texture("assets/frame.png"),
        }
    }

    /// Fit to the given bounds. A negative inset shrinks the frame and
    /// shifts it inward by half the inset on each side.
    pub fn fit_to(&mut self, bounds: Vec2, inset: Vec2) {
        self.size = bounds + inset;
        self.offset = vec2(-inset.x * 0.5, -inset.y * 0.5);
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn render(&self, origin: Vec2) {
        let pos = origin + self.offset;
        match &self.texture {
            Some(texture) => {
                draw_texture_ex(
                    texture,
                    pos.x,
                    pos.y,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(self.size),
                        ..Default::default()
                    },
                );
            }
            None => {
                draw_rounded_rect(
                    pos.x,
                    pos.y,
                    self.size.x,
                    self.size.y,
                    8.0,
                    theme::palette::FRAME_BG,
                );
                draw_rectangle_lines(
                    pos.x,
                    pos.y,
                    self.size.x,
                    self.size.y,
                    1.0,
                    theme::palette::FRAME_BORDER,
                );
            }
        }
    }
}

impl Default for BackgroundFrame {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a PNG into a texture (native only)
#[cfg(not(target_arch = "wasm32"))]
fn load_frame_texture(path: &str) -> Option<Texture2D> {
    if !std::path::Path::new(path).exists() {
        return None;
    }
    let img = match image::open(path) {
        Ok(img) => img.to_rgba8(),
        Err(e) => {
            eprintln!("Failed to load {}: {}", path, e);
            return None;
        }
    };
    let (w, h) = img.dimensions();
    Some(Texture2D::from_rgba8(w as u16, h as u16, &img.into_raw()))
}

/// WASM has no filesystem; the frame always falls back to the drawn rect
#[cfg(target_arch = "wasm32")]
fn load_frame_texture(_path: &str) -> Option<Texture2D> {
    None
}
