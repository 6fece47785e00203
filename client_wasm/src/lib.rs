//! WebGPU client for single-screen Pong
//!
//! The simulation and the raster both live in `game_core`. This crate wires
//! the browser to them: keyboard and mouse listeners, a requestAnimationFrame
//! loop paced by a fixed-tick clock, and a WebGPU blit of each frame.
//!
//! Load it on a page with a `<canvas id="canvas">`. Append `?seed=N` to the
//! URL for a reproducible match.

pub mod input;
pub mod surface;

#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
mod app;
