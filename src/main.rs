extern crate sdl2;
mod drawing;
mod events;
mod fractal;
mod geometry;
mod windows;

use drawing::Viewport;
use events::{ControlEvent, ControlSurface};
use fractal::FractalParams;
use geometry::{IdCounter, Vector2D};
use sdl2::pixels::Color;
use sdl2::video::WindowPos;
use windows::{Window, WindowBuilder};

const MAIN_WIDTH: u32 = 480;
const MAIN_HEIGHT: u32 = 520;

// Base side of the triangle, in logical coordinates. Horizontal and
// non-degenerate, so the direction of every derived vector is defined.
const BASE_TAIL: (f64, f64) = (-150., -75.);
const BASE_HEAD: (f64, f64) = (150., -75.);

pub fn main() -> Result<(), String> {
    env_logger::init();

    // Call setup functions for sdl2
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let mut main_window = WindowBuilder::new(
        &video_subsystem,
        "❄ Koch Snowflake ❄",
        MAIN_WIDTH,
        MAIN_HEIGHT,
    )
    .set_position(WindowPos::Centered, WindowPos::Centered)
    .build()?;

    let mut controls = ControlSurface::new();
    log::info!(
        "starting at level {}, {}",
        controls.params().level,
        controls.params().variant.label()
    );

    // First frame before any input arrives
    redraw(&mut main_window, controls.params())?;

    // Block on the event pump; nothing animates, so there is no reason
    // to poll. Each event that changes a parameter triggers a full
    // regeneration and redraw on this thread with a snapshot of the
    // parameter triple.
    let mut event_pump = sdl_context.event_pump()?;
    'running: loop {
        let event = event_pump.wait_event();
        match events::translate(&event) {
            Some(ControlEvent::Quit) => break 'running,
            Some(control_event) => {
                if controls.apply(control_event) {
                    redraw(&mut main_window, controls.params())?;
                }
            }
            None => {}
        }
    }
    Ok(())
}

fn redraw(window: &mut Window, params: FractalParams) -> Result<(), String> {
    let (width, height) = window.size();
    let viewport = Viewport::new(width, height);

    let mut ids = IdCounter::new();
    let base = Vector2D::from_coords(
        BASE_TAIL.0,
        BASE_TAIL.1,
        BASE_HEAD.0,
        BASE_HEAD.1,
        &mut ids,
    );
    let segments = fractal::compose_snowflake(params, base, &mut ids);
    log::debug!(
        "regenerated {} segments (level {}, {})",
        segments.len(),
        params.level,
        params.variant.label()
    );

    let canvas = window.canvas_mut();
    canvas.set_draw_color(Color::WHITE);
    canvas.clear();
    drawing::draw_grid(canvas, &viewport)?;
    drawing::draw_segments(canvas, &viewport, &segments)?;
    canvas.present();
    Ok(())
}
