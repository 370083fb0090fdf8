// Holds the recursive Koch construction and the snowflake composer.
// The generation is pure and stateless: it is re-run from scratch on
// every parameter change, reading only the snapshot it was handed.
use crate::geometry::{IdCounter, Point, Vector2D};
use sdl2::pixels::Color;
use std::f64::consts::PI;

pub const MIN_LEVEL: u32 = 0;
pub const MAX_LEVEL: u32 = 6;
pub const DEFAULT_COLOR: Color = Color::BLUE;

// Rotation applied at each subdivision step (60 deg) and at the inner
// point / triangle corners (120 deg).
const THETA: f64 = PI / 3.;
const DELTA: f64 = 2. * PI / 3.;

/// Which way the bumps point: away from the triangle interior
/// (Snowflake) or into it (Antisnowflake).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Snowflake,
    Antisnowflake,
}

impl Variant {
    pub fn toggled(self) -> Variant {
        match self {
            Variant::Snowflake => Variant::Antisnowflake,
            Variant::Antisnowflake => Variant::Snowflake,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Variant::Snowflake => "Snowflake",
            Variant::Antisnowflake => "Antisnowflake",
        }
    }
}

/// The current parameter triple. The control layer owns one of these and
/// the render pass reads a copy, so a mid-pass change can never produce
/// an inconsistent fractal.
#[derive(Debug, Clone, Copy)]
pub struct FractalParams {
    pub level: u32,
    pub variant: Variant,
    pub color: Color,
}

impl FractalParams {
    pub fn new() -> FractalParams {
        FractalParams {
            level: MIN_LEVEL,
            variant: Variant::Snowflake,
            color: DEFAULT_COLOR,
        }
    }

    /// Clamps to the supported range; the generator itself never
    /// re-validates.
    pub fn set_level(&mut self, level: u32) {
        self.level = level.min(MAX_LEVEL);
    }
}

impl Default for FractalParams {
    fn default() -> FractalParams {
        FractalParams::new()
    }
}

/// One drawable line, in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub tail: Point,
    pub head: Point,
    pub color: Color,
}

/// Builds the closed snowflake boundary: the base vector plus two more
/// sides forming an equilateral triangle, each run through the curve
/// generator independently with the same level and variant.
pub fn compose_snowflake(
    params: FractalParams,
    base: Vector2D,
    ids: &mut IdCounter,
) -> Vec<Segment> {
    let mut base = base;
    base.set_color(params.color);

    let mut side2 = base.copy(ids);
    side2.translate_forward(base.length());
    side2.rotate(DELTA);
    let mut side3 = side2.copy(ids);
    side3.translate_forward(side2.length());
    side3.rotate(DELTA);

    let mut segments = Vec::with_capacity(3 * 4usize.pow(params.level));
    generate_curve(params.level, base, params.variant, ids, &mut segments);
    generate_curve(params.level, side2, params.variant, ids, &mut segments);
    generate_curve(params.level, side3, params.variant, ids, &mut segments);
    segments
}

/// Recursive Koch subdivision of one side. At level 0 the vector itself
/// is emitted; otherwise it is shrunk to a third and replaced by four
/// sub-vectors:
///
///   A  the first third of the original span
///   B  A moved forward by its own length, rotated by -theta (+theta
///      for the antisnowflake) to form the rising flank of the bump
///   C  B moved forward, rotated by +delta (-delta) back down
///   D  C moved forward, rotated by -theta (+theta) onto the last third
///
/// Recursion order is A, C, D, B, kept from the reference construction
/// so per-segment coloring would layer the same way if added.
pub fn generate_curve(
    level: u32,
    vector: Vector2D,
    variant: Variant,
    ids: &mut IdCounter,
    out: &mut Vec<Segment>,
) {
    if level == 0 {
        log::trace!("leaf {}", vector);
        out.push(Segment {
            tail: vector.tail(),
            head: vector.head(),
            color: vector.color(),
        });
        return;
    }

    let (theta, delta) = match variant {
        Variant::Snowflake => (-THETA, DELTA),
        Variant::Antisnowflake => (THETA, -DELTA),
    };

    let mut vector = vector;
    vector.scale(1. / 3.);

    let a = vector.copy(ids);
    let mut b = a.copy(ids);
    b.translate_forward(a.length());
    b.rotate(theta);
    let mut c = b.copy(ids);
    c.translate_forward(b.length());
    c.rotate(delta);
    let mut d = c.copy(ids);
    d.translate_forward(c.length());
    d.rotate(theta);

    generate_curve(level - 1, a, variant, ids, out);
    generate_curve(level - 1, c, variant, ids, out);
    generate_curve(level - 1, d, variant, ids, out);
    generate_curve(level - 1, b, variant, ids, out);
}
