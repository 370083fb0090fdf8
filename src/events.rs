// Control surface: turns raw SDL input into parameter-change messages
// and applies them to the current parameter triple. The generator never
// sees SDL events, only the resulting snapshot.
use crate::fractal::{FractalParams, DEFAULT_COLOR, MAX_LEVEL};
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;

/// Stroke colors cycled by the color control; index 0 is the documented
/// default the reset key falls back to.
pub const PALETTE: [Color; 6] = [
    Color::BLUE,
    Color::RED,
    Color::GREEN,
    Color::MAGENTA,
    Color::CYAN,
    Color::BLACK,
];

pub enum ControlEvent {
    LevelUp,
    LevelDown,
    SetLevel(u32),
    ToggleVariant,
    CycleColor,
    ResetColor,
    Redraw,
    Quit,
}

/// Keyboard mapping for the three controls: arrows or digits 0-6 set the
/// level, Tab/V flips the variant, C cycles the palette and B resets it.
pub fn translate(event: &Event) -> Option<ControlEvent> {
    match event {
        Event::Quit { .. } => Some(ControlEvent::Quit),
        Event::KeyDown {
            keycode: Some(key), ..
        } => match key {
            Keycode::Escape => Some(ControlEvent::Quit),
            Keycode::Up | Keycode::Right => Some(ControlEvent::LevelUp),
            Keycode::Down | Keycode::Left => Some(ControlEvent::LevelDown),
            Keycode::Num0 => Some(ControlEvent::SetLevel(0)),
            Keycode::Num1 => Some(ControlEvent::SetLevel(1)),
            Keycode::Num2 => Some(ControlEvent::SetLevel(2)),
            Keycode::Num3 => Some(ControlEvent::SetLevel(3)),
            Keycode::Num4 => Some(ControlEvent::SetLevel(4)),
            Keycode::Num5 => Some(ControlEvent::SetLevel(5)),
            Keycode::Num6 => Some(ControlEvent::SetLevel(6)),
            Keycode::Tab | Keycode::V => Some(ControlEvent::ToggleVariant),
            Keycode::C => Some(ControlEvent::CycleColor),
            Keycode::B => Some(ControlEvent::ResetColor),
            _ => None,
        },
        Event::Window {
            win_event: WindowEvent::Exposed,
            ..
        } => Some(ControlEvent::Redraw),
        _ => None,
    }
}

/// Owns the current parameter triple. Level changes are clamped to
/// [0, MAX_LEVEL] here so the core never has to re-validate.
pub struct ControlSurface {
    params: FractalParams,
    palette_ind: usize,
}

impl ControlSurface {
    pub fn new() -> ControlSurface {
        ControlSurface {
            params: FractalParams::new(),
            palette_ind: 0,
        }
    }

    pub fn params(&self) -> FractalParams {
        self.params
    }

    /// Applies one control event and reports whether a regeneration and
    /// redraw is needed.
    pub fn apply(&mut self, event: ControlEvent) -> bool {
        match event {
            ControlEvent::LevelUp => {
                if self.params.level >= MAX_LEVEL {
                    return false;
                }
                self.params.set_level(self.params.level + 1);
                log::debug!("level -> {}", self.params.level);
                true
            }
            ControlEvent::LevelDown => {
                if self.params.level == 0 {
                    return false;
                }
                self.params.set_level(self.params.level - 1);
                log::debug!("level -> {}", self.params.level);
                true
            }
            ControlEvent::SetLevel(level) => {
                let previous = self.params.level;
                self.params.set_level(level);
                if self.params.level == previous {
                    return false;
                }
                log::debug!("level -> {}", self.params.level);
                true
            }
            ControlEvent::ToggleVariant => {
                self.params.variant = self.params.variant.toggled();
                log::debug!("variant -> {}", self.params.variant.label());
                true
            }
            ControlEvent::CycleColor => {
                self.palette_ind = (self.palette_ind + 1) % PALETTE.len();
                self.params.color = PALETTE[self.palette_ind];
                log::debug!("color -> {:?}", self.params.color);
                true
            }
            ControlEvent::ResetColor => {
                self.palette_ind = 0;
                if self.params.color == DEFAULT_COLOR {
                    return false;
                }
                self.params.color = DEFAULT_COLOR;
                log::debug!("color -> default {:?}", self.params.color);
                true
            }
            ControlEvent::Redraw => true,
            ControlEvent::Quit => false,
        }
    }
}

impl Default for ControlSurface {
    fn default() -> ControlSurface {
        ControlSurface::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{ControlEvent, ControlSurface};
    use crate::fractal::{Variant, DEFAULT_COLOR, MAX_LEVEL};

    #[test]
    fn level_clamps_at_both_ends() {
        let mut controls = ControlSurface::new();
        assert!(!controls.apply(ControlEvent::LevelDown));
        assert_eq!(controls.params().level, 0);
        for _ in 0..10 {
            controls.apply(ControlEvent::LevelUp);
        }
        assert_eq!(controls.params().level, MAX_LEVEL);
        assert!(!controls.apply(ControlEvent::LevelUp));
        assert!(!controls.apply(ControlEvent::SetLevel(9)));
        assert_eq!(controls.params().level, MAX_LEVEL);
    }

    #[test]
    fn set_level_reports_real_changes_only() {
        let mut controls = ControlSurface::new();
        assert!(controls.apply(ControlEvent::SetLevel(4)));
        assert!(!controls.apply(ControlEvent::SetLevel(4)));
        assert_eq!(controls.params().level, 4);
    }

    #[test]
    fn toggle_flips_variant_every_time() {
        let mut controls = ControlSurface::new();
        assert_eq!(controls.params().variant, Variant::Snowflake);
        assert!(controls.apply(ControlEvent::ToggleVariant));
        assert_eq!(controls.params().variant, Variant::Antisnowflake);
        assert!(controls.apply(ControlEvent::ToggleVariant));
        assert_eq!(controls.params().variant, Variant::Snowflake);
    }

    #[test]
    fn color_reset_falls_back_to_default() {
        let mut controls = ControlSurface::new();
        assert_eq!(controls.params().color, DEFAULT_COLOR);
        controls.apply(ControlEvent::CycleColor);
        assert_ne!(controls.params().color, DEFAULT_COLOR);
        assert!(controls.apply(ControlEvent::ResetColor));
        assert_eq!(controls.params().color, DEFAULT_COLOR);
        assert!(!controls.apply(ControlEvent::ResetColor));
    }

    #[test]
    fn cycling_the_whole_palette_wraps_around() {
        let mut controls = ControlSurface::new();
        for _ in 0..super::PALETTE.len() {
            assert!(controls.apply(ControlEvent::CycleColor));
        }
        assert_eq!(controls.params().color, DEFAULT_COLOR);
    }
}
