use glam::Vec2;

use crate::{Arena, Color, Rect};

/// Clickable labelled rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
    pub color: Color,
    pub text_color: Color,
}

impl Button {
    pub fn new(rect: Rect, label: &'static str) -> Self {
        Self {
            rect,
            label,
            color: Color::GREEN,
            text_color: Color::WHITE,
        }
    }

    /// Button on the title screen, centred on the arena
    pub fn start(arena: &Arena) -> Self {
        let c = arena.center();
        Self::new(Rect::new(c.x - 50.0, c.y - 25.0, 100.0, 50.0), "Start")
    }

    /// Button on the game-over screen, below the result line
    pub fn restart(arena: &Arena) -> Self {
        let c = arena.center();
        Self::new(Rect::new(c.x - 50.0, c.y + 100.0, 100.0, 50.0), "Restart")
    }

    pub fn is_clicked(&self, pos: Vec2) -> bool {
        self.rect.contains(pos)
    }
}
