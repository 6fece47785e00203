//! Software renderer
//!
//! Draws the current [`GameState`] into an RGBA8 [`Frame`]. The frame is plain
//! memory, so screens can be checked in tests and the client only has to
//! upload it.

pub mod font;

use rand::Rng;

use crate::{Button, Color, GamePhase, GameState, PaddleRole, Rect, Winner};

pub const SCALE_SMALL: u32 = 2;
pub const SCALE_NORMAL: u32 = 3;
pub const SCALE_LARGE: u32 = 6;

pub const TITLE: &str = "Ping-pong Game";
pub const CONTROLS: &str = "Controls: W (up), S (down)";
pub const GAME_OVER: &str = "GAME OVER!";
pub const YOU_WIN: &str = "You Win!";
pub const YOU_LOSE: &str = "You Lose!";

/// Fixed-size RGBA8 raster
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major RGBA bytes, ready for a texture upload
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some(Color::rgb(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]))
    }

    pub fn clear(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, 255]);
        }
    }

    /// Fill the pixels covered by `rect`, clipped to the frame
    pub fn fill_rect(&mut self, rect: &Rect, color: Color) {
        let x0 = rect.left().round().max(0.0) as u32;
        let y0 = rect.top().round().max(0.0) as u32;
        let x1 = (rect.right().round().max(0.0) as u32).min(self.width);
        let y1 = (rect.bottom().round().max(0.0) as u32).min(self.height);

        for y in y0..y1 {
            let row = (y * self.width) as usize;
            for x in x0..x1 {
                let i = (row + x as usize) * 4;
                self.pixels[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, 255]);
            }
        }
    }

    /// Draw `text` with its top-left corner at (`x`, `y`)
    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, scale: u32, color: Color) {
        let s = scale as f32;
        for (i, c) in text.chars().enumerate() {
            let origin_x = x as f32 + (i as u32 * font::ADVANCE * scale) as f32;
            for row in 0..font::GLYPH_HEIGHT {
                for col in 0..font::GLYPH_WIDTH {
                    if font::is_lit(c, col, row) {
                        let cell = Rect::new(
                            origin_x + col as f32 * s,
                            y as f32 + row as f32 * s,
                            s,
                            s,
                        );
                        self.fill_rect(&cell, color);
                    }
                }
            }
        }
    }

    /// Draw `text` horizontally centred on the frame, top edge at `y`
    pub fn draw_text_centered(&mut self, text: &str, y: i32, scale: u32, color: Color) {
        let x = self.width as i32 / 2 - font::text_width(text, scale) as i32 / 2;
        self.draw_text(text, x, y, scale, color);
    }

    pub fn draw_button(&mut self, button: &Button) {
        self.fill_rect(&button.rect, button.color);
        let c = button.rect.center();
        let x = c.x as i32 - font::text_width(button.label, SCALE_SMALL) as i32 / 2;
        let y = c.y as i32 - font::text_height(SCALE_SMALL) as i32 / 2;
        self.draw_text(button.label, x, y, SCALE_SMALL, button.text_color);
    }
}

/// Render the whole screen for `state` at client time `now` (seconds)
pub fn draw<R: Rng>(state: &GameState<R>, now: f64) -> Frame {
    let mut frame = Frame::new(state.arena.width as u32, state.arena.height as u32);
    draw_into(&mut frame, state, now);
    frame
}

/// Like [`draw`], reusing an existing frame
pub fn draw_into<R: Rng>(frame: &mut Frame, state: &GameState<R>, now: f64) {
    frame.clear(Color::BLACK);
    match state.phase() {
        GamePhase::Playing => draw_playing(frame, state, now),
        GamePhase::GameOver => draw_game_over(frame, state),
        GamePhase::NotStarted => draw_title(frame, state),
    }
}

fn draw_playing<R: Rng>(frame: &mut Frame, state: &GameState<R>, now: f64) {
    let w = frame.width() as i32;
    let h = frame.height() as i32;

    for role in [PaddleRole::Player, PaddleRole::Opponent, PaddleRole::Interference] {
        if role == PaddleRole::Interference && !state.interference.is_active() {
            continue;
        }
        if let Some(paddle) = state.paddle(role) {
            frame.fill_rect(&paddle.rect, paddle.color());
        }
    }
    if let Some(ball) = state.ball() {
        frame.fill_rect(&ball.rect, Color::WHITE);
    }

    frame.draw_text(&state.score.player.to_string(), w / 4, 20, SCALE_NORMAL, Color::WHITE);
    frame.draw_text(&state.score.opponent.to_string(), 3 * w / 4, 20, SCALE_NORMAL, Color::WHITE);

    if let Some(text) = state.banner_text(now) {
        frame.draw_text_centered(text, h / 2, SCALE_NORMAL, Color::RED);
    }
}

fn draw_game_over<R: Rng>(frame: &mut Frame, state: &GameState<R>) {
    let h = frame.height() as i32;

    frame.draw_text_centered(GAME_OVER, h / 4, SCALE_LARGE, Color::RED);
    let final_score = format!("{} - {}", state.score.player, state.score.opponent);
    frame.draw_text_centered(&final_score, h / 2 - 50, SCALE_LARGE, Color::WHITE);

    let player_won = state.winner == Some(Winner::Player);
    let (result, color) = if player_won {
        (YOU_WIN, Color::GREEN)
    } else {
        (YOU_LOSE, Color::RED)
    };
    frame.draw_text_centered(result, h / 2 + 50, SCALE_LARGE, color);

    frame.draw_button(&state.restart_button);
}

fn draw_title<R: Rng>(frame: &mut Frame, state: &GameState<R>) {
    let h = frame.height() as i32;

    frame.draw_text_centered(TITLE, h / 4, SCALE_LARGE, Color::WHITE);
    frame.draw_button(&state.start_button);
    frame.draw_text_centered(CONTROLS, h / 2 + 50, SCALE_NORMAL, Color::WHITE);
    let rule = format!("First to score {} points wins!", state.config.win_score);
    frame.draw_text_centered(&rule, h / 2 + 100, SCALE_NORMAL, Color::WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, InputState, Score};
    use glam::Vec2;

    fn count(frame: &Frame, color: Color) -> usize {
        let mut n = 0;
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                if frame.pixel(x, y) == Some(color) {
                    n += 1;
                }
            }
        }
        n
    }

    fn count_in(frame: &Frame, rect: Rect, color: Color) -> usize {
        let mut n = 0;
        for y in rect.top() as u32..rect.bottom() as u32 {
            for x in rect.left() as u32..rect.right() as u32 {
                if frame.pixel(x, y) == Some(color) {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn test_fill_rect_clips_to_frame() {
        let mut frame = Frame::new(10, 10);
        frame.fill_rect(&Rect::new(-5.0, 8.0, 8.0, 8.0), Color::RED);
        assert_eq!(count(&frame, Color::RED), 3 * 2);
        assert_eq!(frame.pixel(0, 9), Some(Color::RED));
        assert_eq!(frame.pixel(3, 9), Some(Color::BLACK));
    }

    #[test]
    fn test_frame_bytes_are_rgba() {
        let mut frame = Frame::new(2, 1);
        frame.clear(Color::rgb(1, 2, 3));
        assert_eq!(frame.as_bytes(), &[1, 2, 3, 255, 1, 2, 3, 255]);
    }

    #[test]
    fn test_draw_text_lights_glyph_pixels() {
        let mut frame = Frame::new(20, 10);
        frame.draw_text("-", 0, 0, 1, Color::WHITE);
        // The dash is a single five-pixel row
        assert_eq!(count(&frame, Color::WHITE), 5);
        assert_eq!(frame.pixel(0, 3), Some(Color::WHITE));
    }

    #[test]
    fn test_button_labels_fit_inside_buttons() {
        let arena = crate::Arena::new(800.0, 600.0);
        for button in [crate::Button::start(&arena), crate::Button::restart(&arena)] {
            let mut frame = Frame::new(800, 600);
            frame.draw_button(&button);

            let label = count(&frame, Color::WHITE);
            assert!(label > 0);
            assert_eq!(count_in(&frame, button.rect, Color::WHITE), label);
            assert!(font::text_width(button.label, SCALE_SMALL) <= button.rect.size.x as u32);
            assert!(font::text_height(SCALE_SMALL) <= button.rect.size.y as u32);
        }
        // "Restart" would overflow the button at the normal HUD scale
        assert!(font::text_width("Restart", SCALE_NORMAL) > 100);
    }

    #[test]
    fn test_title_screen_shows_start_button() {
        let state = GameState::new(Config::default()).unwrap();
        let frame = draw(&state, 0.0);

        assert_eq!(frame.width(), 800);
        assert_eq!(frame.height(), 600);
        let button = state.start_button.rect;
        assert!(count_in(&frame, button, Color::GREEN) > 0);
        assert!(count_in(&frame, button, Color::WHITE) > 0, "Label is drawn");
        assert_eq!(count(&frame, Color::RED), 0);
    }

    #[test]
    fn test_playing_screen_draws_paddles_and_ball() {
        let mut state = GameState::new(Config::default()).unwrap();
        state.click(Vec2::new(400.0, 300.0));
        let frame = draw(&state, 0.0);

        assert_eq!(count(&frame, Color::GREEN), 10 * 100, "Player paddle");
        assert_eq!(count(&frame, Color::BLUE), 0, "Interference hidden while inactive");
        let ball = state.ball().unwrap().rect;
        assert_eq!(count_in(&frame, ball, Color::WHITE), 30 * 30);
        // Opponent paddle is red, and no banner yet
        assert_eq!(count(&frame, Color::RED), 10 * 100);
    }

    #[test]
    fn test_interference_drawn_while_active() {
        let mut state = GameState::new(Config::default()).unwrap();
        state.click(Vec2::new(400.0, 300.0));
        state.interference = crate::InterferenceState::Active { remaining: 10 };

        let frame = draw(&state, 0.0);
        assert_eq!(count(&frame, Color::BLUE), 10 * 100);
    }

    #[test]
    fn test_banner_drawn_for_one_second() {
        let mut state = GameState::new(Config::default()).unwrap();
        state.click(Vec2::new(400.0, 300.0));
        state.banner.show("Point Lost!", 5.0);
        let paddle_red = 10 * 100;

        let shown = draw(&state, 5.5);
        assert!(count(&shown, Color::RED) > paddle_red);

        let expired = draw(&state, 6.0);
        assert_eq!(count(&expired, Color::RED), paddle_red);
    }

    #[test]
    fn test_game_over_screen_win_and_lose() {
        let mut state = GameState::new(Config::default()).unwrap();
        state.click(Vec2::new(400.0, 300.0));
        state.score = Score {
            player: 5,
            opponent: 2,
        };
        state.winner = Some(Winner::Player);
        state.fsm.transition(crate::GameAction::GameOver);
        state.step(&InputState::new(), 0.0);

        let won = draw(&state, 0.0);
        assert!(count(&won, Color::GREEN) > 0);
        assert!(count_in(&won, state.restart_button.rect, Color::GREEN) > 0);

        state.winner = Some(Winner::Opponent);
        let lost = draw(&state, 0.0);
        // Only the restart button remains green
        assert_eq!(
            count(&lost, Color::GREEN),
            count_in(&lost, state.restart_button.rect, Color::GREEN)
        );
    }
}
