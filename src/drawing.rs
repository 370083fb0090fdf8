// Render sink: maps logical coordinates onto the canvas and draws the
// background grid, the axes, and the generated segments.
use crate::fractal::Segment;
use crate::geometry::Point;
use sdl2::pixels::Color;
use sdl2::rect::Point as ScreenPoint;
use sdl2::render::{Canvas, RenderTarget};

pub const GRID_SPACING: u32 = 20;
const GRID_COLOR: Color = Color::RGB(192, 192, 192);

/// Logical-to-screen mapping: origin at the canvas center, logical y up,
/// screen y down.
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Viewport {
        Viewport { width, height }
    }

    pub fn to_screen(&self, point: Point) -> ScreenPoint {
        let center_x = self.width as i32 / 2;
        let center_y = self.height as i32 / 2;
        ScreenPoint::new(center_x + point.x as i32, center_y - point.y as i32)
    }
}

/// Fixed-spacing background grid plus the two centered axis lines.
/// Independent of the fractal parameters.
pub fn draw_grid<T: RenderTarget>(
    canvas: &mut Canvas<T>,
    viewport: &Viewport,
) -> Result<(), String> {
    let width = viewport.width as i32;
    let height = viewport.height as i32;
    canvas.set_draw_color(GRID_COLOR);

    // Central axis lines
    canvas.draw_line(
        ScreenPoint::new(0, height / 2),
        ScreenPoint::new(width, height / 2),
    )?;
    canvas.draw_line(
        ScreenPoint::new(width / 2, 0),
        ScreenPoint::new(width / 2, height),
    )?;

    let spacing = GRID_SPACING as i32;
    let mut x = 0;
    while x <= width {
        canvas.draw_line(ScreenPoint::new(x, 0), ScreenPoint::new(x, height))?;
        x += spacing;
    }
    let mut y = 0;
    while y <= height {
        canvas.draw_line(ScreenPoint::new(0, y), ScreenPoint::new(width, y))?;
        y += spacing;
    }
    Ok(())
}

/// Draws each segment as a canvas line in its own color, in traversal
/// order.
pub fn draw_segments<T: RenderTarget>(
    canvas: &mut Canvas<T>,
    viewport: &Viewport,
    segments: &[Segment],
) -> Result<(), String> {
    for segment in segments {
        canvas.set_draw_color(segment.color);
        canvas.draw_line(
            viewport.to_screen(segment.tail),
            viewport.to_screen(segment.head),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Viewport;
    use crate::geometry::Point;
    use sdl2::rect::Point as ScreenPoint;

    #[test]
    fn origin_maps_to_canvas_center() {
        let viewport = Viewport::new(480, 520);
        assert_eq!(
            viewport.to_screen(Point::new(0., 0.)),
            ScreenPoint::new(240, 260)
        );
    }

    #[test]
    fn logical_y_points_up() {
        let viewport = Viewport::new(480, 520);
        assert_eq!(
            viewport.to_screen(Point::new(10., 10.)),
            ScreenPoint::new(250, 250)
        );
        assert_eq!(
            viewport.to_screen(Point::new(-150., -75.)),
            ScreenPoint::new(90, 335)
        );
    }
}
