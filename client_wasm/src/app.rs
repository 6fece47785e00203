use std::cell::RefCell;
use std::rc::Rc;

use game_core::render::{self, Frame};
use game_core::{Config, FrameClock, GameState, InputState};
use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

use crate::input;
use crate::renderer::Renderer;

/// Everything the browser callbacks share
struct App {
    state: GameState,
    input: InputState,
    clock: FrameClock,
    frame: Frame,
    renderer: Renderer,
}

impl App {
    /// Run the ticks owed since the last frame, then draw and present
    fn frame(&mut self, time_ms: f64) -> Result<(), String> {
        let now = time_ms / 1000.0;
        for _ in 0..self.clock.advance(now) {
            let game_over = self.state.step(&self.input, now).game_over;
            if game_over {
                log::info!(
                    "Final score {} - {}",
                    self.state.score.player,
                    self.state.score.opponent
                );
            }
        }

        render::draw_into(&mut self.frame, &self.state, now);
        self.renderer.draw(&self.frame)
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run().await {
            log::error!("Failed to start: {:?}", e);
            web_sys::console::error_1(&e);
        }
    });
}

async fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&format!("Failed to init logger: {e}")))?;

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id("canvas")
        .ok_or("no canvas")?
        .dyn_into()?;

    let seed = window
        .location()
        .search()
        .ok()
        .as_deref()
        .and_then(input::seed_from_query)
        .unwrap_or_else(|| js_sys::Date::now() as u64);
    let state = GameState::new(Config::with_seed(seed))
        .map_err(|e| JsValue::from_str(&format!("{e:#}")))?;
    log::info!("Game initialized with seed: {}", seed);

    let width = state.arena.width as u32;
    let height = state.arena.height as u32;
    canvas.set_width(width);
    canvas.set_height(height);

    let renderer = Renderer::new(canvas.clone(), (width, height))
        .await
        .map_err(|e| JsValue::from_str(&e))?;

    let app = Rc::new(RefCell::new(App {
        state,
        input: InputState::new(),
        clock: FrameClock::new(),
        frame: Frame::new(width, height),
        renderer,
    }));

    setup_keyboard(&window, app.clone())?;
    setup_mouse(&canvas, app.clone())?;
    request_animation_frame(app);

    log::info!("Pong running");
    Ok(())
}

fn setup_keyboard(window: &Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
    for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut app = app.borrow_mut();
            if input::handle_key(&mut app.input, &event.key(), pressed) {
                // Keep the arrow keys from scrolling the page
                event.prevent_default();
            }
        });
        window.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn setup_mouse(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
    let canvas_clone = canvas.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        let rect = canvas_clone.get_bounding_client_rect();
        let pos = input::to_canvas_coords(
            Vec2::new(event.client_x() as f32, event.client_y() as f32),
            Vec2::new(rect.left() as f32, rect.top() as f32),
            Vec2::new(rect.width() as f32, rect.height() as f32),
            Vec2::new(canvas_clone.width() as f32, canvas_clone.height() as f32),
        );

        let mut app = app.borrow_mut();
        if app.state.click(pos) {
            // Drop keys held across the screen change
            app.input = InputState::new();
        }
    });
    canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn request_animation_frame(app: Rc<RefCell<App>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |time: f64| {
        game_loop(app, time);
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
    closure.forget();
}

fn game_loop(app: Rc<RefCell<App>>, time: f64) {
    if let Err(e) = app.borrow_mut().frame(time) {
        log::error!("Frame failed: {}", e);
    }
    request_animation_frame(app);
}
