// Holds the 2D vector primitives the curve generation is built on.
// Everything here is plain euclidean geometry; no SDL calls.
use sdl2::pixels::Color;
use std::fmt;

/// An immutable 2D coordinate. No identity beyond its components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

/// Hands out monotonically increasing diagnostic ids for vectors.
/// Owned by whichever context constructs vectors, so there is no
/// global mutable counter.
#[derive(Debug, Default)]
pub struct IdCounter {
    next: u32,
}

impl IdCounter {
    pub fn new() -> IdCounter {
        IdCounter { next: 0 }
    }

    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// A directed segment from `tail` to `head`, carrying a stroke color and
/// a diagnostic id. The mutating operations (`scale`, `rotate`,
/// `translate_forward`) replace the endpoints in place and keep the id,
/// while `copy` produces an independent vector with a fresh id.
///
/// Degenerate (zero-length) vectors have an undefined direction; callers
/// must not hand them to `direction_radians` or `translate_forward`.
#[derive(Debug, Clone)]
pub struct Vector2D {
    tail: Point,
    head: Point,
    color: Color,
    id: u32,
}

#[allow(dead_code)]
impl Vector2D {
    pub fn new(tail: Point, head: Point, ids: &mut IdCounter) -> Vector2D {
        Vector2D {
            tail,
            head,
            color: Color::BLACK,
            id: ids.next_id(),
        }
    }

    pub fn from_coords(
        tail_x: f64,
        tail_y: f64,
        head_x: f64,
        head_y: f64,
        ids: &mut IdCounter,
    ) -> Vector2D {
        Vector2D::new(Point::new(tail_x, tail_y), Point::new(head_x, head_y), ids)
    }

    pub fn tail(&self) -> Point {
        self.tail
    }

    pub fn head(&self) -> Point {
        self.head
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Euclidean distance from tail to head.
    pub fn length(&self) -> f64 {
        let dx = self.head.x - self.tail.x;
        let dy = self.head.y - self.tail.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Rise over run. Non-finite for vertical segments.
    pub fn slope(&self) -> f64 {
        (self.head.y - self.tail.y) / (self.head.x - self.tail.x)
    }

    /// Full four-quadrant heading of the tail->head displacement, in
    /// radians over (-pi, pi]. atan2 already distinguishes left-facing
    /// from right-facing vectors, so no quadrant fix-up is needed.
    pub fn direction_radians(&self) -> f64 {
        let dx = self.head.x - self.tail.x;
        let dy = self.head.y - self.tail.y;
        dy.atan2(dx)
    }

    pub fn direction_degrees(&self) -> f64 {
        self.direction_radians().to_degrees()
    }

    /// Moves the head to `tail + factor * (head - tail)`; the tail stays put.
    pub fn scale(&mut self, factor: f64) {
        self.head = Point::new(
            self.tail.x + factor * (self.head.x - self.tail.x),
            self.tail.y + factor * (self.head.y - self.tail.y),
        );
    }

    /// Rotates the head about the tail by `radians` (counterclockwise in
    /// logical coordinates); the tail stays put.
    pub fn rotate(&mut self, radians: f64) {
        let x = self.head.x - self.tail.x;
        let y = self.head.y - self.tail.y;
        let (sine, cosine) = radians.sin_cos();
        self.head = Point::new(
            self.tail.x + (x * cosine - y * sine),
            self.tail.y + (x * sine + y * cosine),
        );
    }

    /// Translates the whole vector, tail and head, by `distance` along its
    /// current heading.
    pub fn translate_forward(&mut self, distance: f64) {
        let direction = self.direction_radians();
        let (sine, cosine) = direction.sin_cos();
        let dx = distance * cosine;
        let dy = distance * sine;
        self.tail = Point::new(self.tail.x + dx, self.tail.y + dy);
        self.head = Point::new(self.head.x + dx, self.head.y + dy);
    }

    /// An independent vector with the same endpoints and color but a
    /// fresh identity.
    pub fn copy(&self, ids: &mut IdCounter) -> Vector2D {
        Vector2D {
            tail: self.tail,
            head: self.head,
            color: self.color,
            id: ids.next_id(),
        }
    }

    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.head.x + self.tail.x) / 2.,
            (self.head.y + self.tail.y) / 2.,
        )
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "id: {}, tail({:.1}, {:.1}) -> head({:.1}, {:.1}) | direction: {:.4} | length: {:.4}",
            self.id,
            self.tail.x,
            self.tail.y,
            self.head.x,
            self.head.y,
            self.direction_degrees(),
            self.length()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{IdCounter, Point, Vector2D};
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
            "({}, {}) != ({}, {})",
            a.x,
            a.y,
            b.x,
            b.y
        );
    }

    #[test]
    fn length_is_euclidean() {
        let mut ids = IdCounter::new();
        let v = Vector2D::from_coords(0., 0., 3., 4., &mut ids);
        assert!((v.length() - 5.).abs() < EPS);
    }

    #[test]
    fn direction_covers_all_quadrants() {
        let mut ids = IdCounter::new();
        let ne = Vector2D::from_coords(0., 0., 1., 1., &mut ids);
        assert!((ne.direction_radians() - PI / 4.).abs() < EPS);
        let west = Vector2D::from_coords(0., 0., -1., 0., &mut ids);
        assert!((west.direction_radians() - PI).abs() < EPS);
        let south = Vector2D::from_coords(0., 0., 0., -5., &mut ids);
        assert!((south.direction_radians() + PI / 2.).abs() < EPS);
    }

    #[test]
    fn rotate_then_unrotate_restores_head() {
        let mut ids = IdCounter::new();
        let mut v = Vector2D::from_coords(1., 2., 4., 6., &mut ids);
        v.rotate(0.7);
        v.rotate(-0.7);
        assert_close(v.head(), Point::new(4., 6.));
        assert_close(v.tail(), Point::new(1., 2.));
    }

    #[test]
    fn scale_by_third_three_times() {
        let mut ids = IdCounter::new();
        let mut v = Vector2D::from_coords(0., 0., 300., 0., &mut ids);
        v.scale(1. / 3.);
        v.scale(1. / 3.);
        v.scale(1. / 3.);
        assert!((v.length() - 300. / 27.).abs() < EPS);
        assert_close(v.tail(), Point::new(0., 0.));
    }

    // The forward direction must be right for every quadrant the
    // generator can produce, including leftward and vertical headings.
    #[test]
    fn translate_forward_left_and_up() {
        let mut ids = IdCounter::new();
        let mut v = Vector2D::from_coords(0., 0., -3., 4., &mut ids);
        v.translate_forward(5.);
        assert_close(v.tail(), Point::new(-3., 4.));
        assert_close(v.head(), Point::new(-6., 8.));
    }

    #[test]
    fn translate_forward_left_and_down() {
        let mut ids = IdCounter::new();
        let mut v = Vector2D::from_coords(0., 0., -3., -4., &mut ids);
        v.translate_forward(5.);
        assert_close(v.tail(), Point::new(-3., -4.));
        assert_close(v.head(), Point::new(-6., -8.));
    }

    #[test]
    fn translate_forward_horizontal_left() {
        let mut ids = IdCounter::new();
        let mut v = Vector2D::from_coords(0., 0., -2., 0., &mut ids);
        v.translate_forward(2.);
        assert_close(v.tail(), Point::new(-2., 0.));
        assert_close(v.head(), Point::new(-4., 0.));
    }

    #[test]
    fn translate_forward_rightward() {
        let mut ids = IdCounter::new();
        let mut v = Vector2D::from_coords(1., 1., 4., 5., &mut ids);
        v.translate_forward(5.);
        assert_close(v.tail(), Point::new(4., 5.));
        assert_close(v.head(), Point::new(7., 9.));
    }

    #[test]
    fn translate_forward_vertical() {
        let mut ids = IdCounter::new();
        let mut v = Vector2D::from_coords(0., 0., 0., 2., &mut ids);
        v.translate_forward(2.);
        assert_close(v.tail(), Point::new(0., 2.));
        assert_close(v.head(), Point::new(0., 4.));
    }

    #[test]
    fn midpoint_averages_endpoints() {
        let mut ids = IdCounter::new();
        let v = Vector2D::from_coords(-2., 0., 4., 6., &mut ids);
        assert_close(v.midpoint(), Point::new(1., 3.));
    }

    #[test]
    fn ids_are_monotone_and_copies_get_fresh_ones() {
        let mut ids = IdCounter::new();
        let a = Vector2D::from_coords(0., 0., 1., 0., &mut ids);
        let b = Vector2D::from_coords(0., 0., 2., 0., &mut ids);
        let c = a.copy(&mut ids);
        assert_eq!(a.id(), 0);
        assert_eq!(b.id(), 1);
        assert_eq!(c.id(), 2);
    }
}
