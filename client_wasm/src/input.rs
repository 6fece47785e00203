//! Keyboard and mouse input handling

use game_core::InputState;
use glam::Vec2;

/// Update held keys for a key down (`pressed`) or key up event.
/// Returns true when the key controls the paddle.
pub fn handle_key(input: &mut InputState, key: &str, pressed: bool) -> bool {
    match key {
        "ArrowUp" | "w" | "W" => input.up = pressed,
        "ArrowDown" | "s" | "S" => input.down = pressed,
        _ => return false,
    }
    true
}

/// Map a click in client coordinates to canvas pixels, accounting for CSS scaling
pub fn to_canvas_coords(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    canvas_size: Vec2,
) -> Vec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return client - rect_origin;
    }
    (client - rect_origin) * canvas_size / rect_size
}

/// Read `seed=N` from a location search string such as `?seed=42&x=1`
pub fn seed_from_query(search: &str) -> Option<u64> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "seed")
        .and_then(|(_, value)| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_set_and_release_direction() {
        let mut input = InputState::new();
        assert!(handle_key(&mut input, "w", true));
        assert_eq!(input.dir(), -1);
        assert!(handle_key(&mut input, "ArrowDown", true));
        assert_eq!(input.dir(), 0, "Both held cancel out");
        assert!(handle_key(&mut input, "W", false));
        assert_eq!(input.dir(), 1);
        assert!(handle_key(&mut input, "s", false));
        assert_eq!(input, InputState::new());
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut input = InputState::new();
        assert!(!handle_key(&mut input, " ", true));
        assert!(!handle_key(&mut input, "Escape", true));
        assert_eq!(input, InputState::new());
    }

    #[test]
    fn test_canvas_coords_scale_with_css_size() {
        let canvas = Vec2::new(800.0, 600.0);
        let origin = Vec2::new(100.0, 50.0);

        let same = to_canvas_coords(Vec2::new(500.0, 350.0), origin, canvas, canvas);
        assert_eq!(same, Vec2::new(400.0, 300.0));

        let half = to_canvas_coords(Vec2::new(300.0, 200.0), origin, canvas * 0.5, canvas);
        assert_eq!(half, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_seed_from_query() {
        assert_eq!(seed_from_query("?seed=42"), Some(42));
        assert_eq!(seed_from_query("?mode=x&seed=7"), Some(7));
        assert_eq!(seed_from_query("?seed=abc"), None);
        assert_eq!(seed_from_query(""), None);
    }
}
