//! Physics and gameplay tuning
//!
//! Every magic number the simulation depends on lives here so a frontend can
//! swap presets or load a JSON override without touching the core.

use serde::{Deserialize, Serialize};

/// Named tuning presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TuningPreset {
    /// Values the levels were authored against
    #[default]
    Classic,
    /// Wider landing window and no early vanish
    Forgiving,
}

impl TuningPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            TuningPreset::Classic => "Classic",
            TuningPreset::Forgiving => "Forgiving",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(TuningPreset::Classic),
            "forgiving" | "easy" => Some(TuningPreset::Forgiving),
            _ => None,
        }
    }
}

/// Physics and gameplay constants (per-tick units: pixels, pixels/tick, ticks)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub preset: TuningPreset,

    // === Actor ===
    /// Horizontal speed while an intent is held
    pub move_speed: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_impulse: f32,
    /// Downward acceleration added each airborne tick
    pub gravity: f32,
    /// Terminal fall speed
    pub max_fall_speed: f32,

    // === Collision ===
    /// How far below a surface top the actor's feet may be and still land
    pub ground_tolerance: f32,
    /// Depth of the edge strips used to tell which face is touching
    pub edge_strip_depth: f32,
    /// Inset of the edge strips from the box corners
    pub edge_strip_inset: f32,

    // === Vanishing surfaces ===
    /// Ticks of lookahead for the predictive vanish trigger (0 disables it)
    pub vanish_lookahead_ticks: u32,
    /// The actor's feet must be at least this far above a surface to trigger it
    pub vanish_margin: f32,

    // === Ice ===
    /// Fraction of the gap to the intended speed closed per tick on ice (1 snaps to it)
    pub ice_accel: f32,
    /// Velocity multiplier per tick on ice with no intent held
    pub ice_decay: f32,
    /// Below this speed an idle actor on ice comes to rest
    pub ice_rest_epsilon: f32,

    // === Cascade trap ===
    /// Vertical slack when deciding the actor is resting on the cascade top
    pub cascade_tolerance: f32,

    // === Boss ===
    /// Ticks after a stomp before the boss can be hit again
    pub boss_cooldown_ticks: u32,
    /// Vertical velocity given to the actor after a stomp
    pub boss_bounce: f32,
    /// How deep the actor's feet may sink into the boss and still count as a stomp
    pub boss_stomp_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::classic()
    }
}

impl Tuning {
    /// The values every built-in level was authored against
    pub fn classic() -> Self {
        Self {
            preset: TuningPreset::Classic,

            move_speed: 5.0,
            jump_impulse: -12.0,
            gravity: 0.3,
            max_fall_speed: 20.0,

            ground_tolerance: 5.0,
            edge_strip_depth: 5.0,
            edge_strip_inset: 2.0,

            vanish_lookahead_ticks: 5,
            vanish_margin: 5.0,

            ice_accel: 1.0,
            ice_decay: 0.97,
            ice_rest_epsilon: 0.3,

            cascade_tolerance: 5.0,

            boss_cooldown_ticks: 30,
            boss_bounce: -9.0,
            boss_stomp_margin: 20.0,
        }
    }

    /// Create tuning from a preset
    pub fn from_preset(preset: TuningPreset) -> Self {
        let mut tuning = Self::classic();
        tuning.apply_preset(preset);
        tuning
    }

    /// Apply a preset on top of the current values
    pub fn apply_preset(&mut self, preset: TuningPreset) {
        self.preset = preset;

        match preset {
            TuningPreset::Classic => {
                let classic = Self::classic();
                self.ground_tolerance = classic.ground_tolerance;
                self.vanish_lookahead_ticks = classic.vanish_lookahead_ticks;
                self.ice_decay = classic.ice_decay;
            }
            TuningPreset::Forgiving => {
                self.ground_tolerance = 8.0;
                self.vanish_lookahead_ticks = 0;
                self.ice_decay = 0.9;
            }
        }
    }

    /// Wider landing window, no predictive vanish, grippier ice
    pub fn forgiving() -> Self {
        Self::from_preset(TuningPreset::Forgiving)
    }

    /// Whether vanishing surfaces fire before the actor lands on them
    pub fn predictive_vanish_enabled(&self) -> bool {
        self.vanish_lookahead_ticks > 0
    }

    /// Decode tuning from JSON; missing fields take their classic values
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_values() {
        let t = Tuning::default();
        assert_eq!(t.preset, TuningPreset::Classic);
        assert_eq!(t.move_speed, 5.0);
        assert_eq!(t.jump_impulse, -12.0);
        assert_eq!(t.gravity, 0.3);
        assert_eq!(t.vanish_lookahead_ticks, 5);
        assert_eq!(t.ice_decay, 0.97);
        assert_eq!(t.ice_rest_epsilon, 0.3);
        assert_eq!(t.ice_accel, 1.0);
        assert!(t.predictive_vanish_enabled());
    }

    #[test]
    fn test_forgiving_preset() {
        let t = Tuning::from_preset(TuningPreset::Forgiving);
        assert_eq!(t.preset, TuningPreset::Forgiving);
        assert!(!t.predictive_vanish_enabled());
        assert!(t.ground_tolerance > Tuning::classic().ground_tolerance);
    }

    #[test]
    fn test_switching_back_to_classic() {
        let mut t = Tuning::forgiving();
        t.apply_preset(TuningPreset::Classic);
        assert_eq!(t, Tuning::classic());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "gravity": 0.5 }"#).unwrap();
        assert_eq!(t.gravity, 0.5);
        assert_eq!(t.move_speed, 5.0);
    }

    #[test]
    fn test_json_survives_encode() {
        let t = Tuning::from_preset(TuningPreset::Forgiving);
        let json = t.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), t);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Tuning::from_json("{ gravity: }").is_err());
    }

    #[test]
    fn test_preset_parse() {
        assert_eq!(TuningPreset::parse("EASY"), Some(TuningPreset::Forgiving));
        assert_eq!(TuningPreset::parse("classic"), Some(TuningPreset::Classic));
        assert_eq!(TuningPreset::parse("nightmare"), None);
        assert_eq!(TuningPreset::Forgiving.as_str(), "Forgiving");
    }
}
