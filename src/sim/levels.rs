//! Built-in level layouts
//!
//! Layouts are plain data: the table below is code, but any `LevelLayout` can
//! also be decoded from JSON and handed to `Arena::build_from_layout`.

use serde::{Deserialize, Serialize};

use super::hazard::HazardKind;
use super::rect::Rect;
use super::surface::{Axis, Surface, VanishConfig};
use crate::consts::*;
use crate::rgb;

/// Number of built-in levels
pub const LEVEL_COUNT: u32 = 8;

/// Level the table falls back to for unknown ids
pub const FALLBACK_LEVEL: u32 = 0;

/// How a surface behaves once built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Behavior {
    Static,
    Kinetic {
        axis: Axis,
        start: f32,
        end: f32,
        speed: f32,
    },
    Vanishing {
        duration: u32,
        #[serde(default)]
        config: VanishConfig,
    },
}

/// Construction parameters for one surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSpec {
    pub rect: Rect,
    #[serde(default)]
    pub color: Option<u32>,
    pub behavior: Behavior,
}

impl SurfaceSpec {
    pub fn build(&self) -> Surface {
        let surface = match &self.behavior {
            Behavior::Static => Surface::new_static(self.rect),
            Behavior::Kinetic {
                axis,
                start,
                end,
                speed,
            } => Surface::new_kinetic(self.rect, *axis, *start, *end, *speed),
            Behavior::Vanishing { duration, config } => {
                Surface::new_vanishing(self.rect, *duration, *config)
            }
        };
        match self.color {
            Some(color) => surface.with_color(color),
            None => surface,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardSpec {
    pub rect: Rect,
    pub kind: HazardKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossSpec {
    pub x: f32,
    pub y: f32,
    pub max_hits: u32,
}

/// A group of cascading surfaces (indices into `LevelLayout::surfaces`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CascadeSpec {
    pub members: Vec<usize>,
    /// Standing on this one drops the whole group
    pub top: usize,
}

/// Everything needed to build one arena
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub name: String,
    pub surfaces: Vec<SurfaceSpec>,
    #[serde(default)]
    pub hazards: Vec<HazardSpec>,
    pub goal: Rect,
    #[serde(default)]
    pub boss: Option<BossSpec>,
    #[serde(default)]
    pub cascade: Option<CascadeSpec>,
    #[serde(default = "default_respawn")]
    pub respawn: (f32, f32),
    #[serde(default = "default_ground_line")]
    pub ground_line: f32,
    #[serde(default = "default_fall_limit")]
    pub fall_limit: f32,
    /// Color for surfaces without their own
    #[serde(default = "default_palette")]
    pub palette: u32,
    #[serde(default = "default_background")]
    pub background: u32,
}

fn default_respawn() -> (f32, f32) {
    (RESPAWN_X, RESPAWN_Y)
}

fn default_ground_line() -> f32 {
    GROUND_LINE
}

fn default_fall_limit() -> f32 {
    FALL_LIMIT
}

fn default_palette() -> u32 {
    rgb(0, 255, 0)
}

fn default_background() -> u32 {
    rgb(25, 25, 50)
}

impl LevelLayout {
    /// Empty layout with the shared ground slab and goal
    fn base(name: &str) -> Self {
        Self {
            name: name.to_string(),
            surfaces: vec![solid(0.0, GROUND_LINE, WORLD_WIDTH, 50.0)],
            hazards: Vec::new(),
            goal: Rect::new(750.0, 430.0, 40.0, 70.0),
            boss: None,
            cascade: None,
            respawn: default_respawn(),
            ground_line: GROUND_LINE,
            fall_limit: FALL_LIMIT,
            palette: default_palette(),
            background: default_background(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn solid(x: f32, y: f32, w: f32, h: f32) -> SurfaceSpec {
    SurfaceSpec {
        rect: Rect::new(x, y, w, h),
        color: None,
        behavior: Behavior::Static,
    }
}

#[allow(clippy::too_many_arguments)]
fn sweep(x: f32, y: f32, w: f32, h: f32, start: f32, end: f32, speed: f32, axis: Axis) -> SurfaceSpec {
    SurfaceSpec {
        rect: Rect::new(x, y, w, h),
        color: None,
        behavior: Behavior::Kinetic {
            axis,
            start,
            end,
            speed,
        },
    }
}

fn vanishing(x: f32, y: f32, w: f32, h: f32, duration: u32, config: VanishConfig) -> SurfaceSpec {
    SurfaceSpec {
        rect: Rect::new(x, y, w, h),
        color: None,
        behavior: Behavior::Vanishing { duration, config },
    }
}

fn hazard(x: f32, y: f32, w: f32, h: f32, kind: HazardKind) -> HazardSpec {
    HazardSpec {
        rect: Rect::new(x, y, w, h),
        kind,
    }
}

/// Layout for a level id; unknown ids fall back to the sample level
pub fn layout(level_id: u32) -> LevelLayout {
    match level_id {
        0 => sample(),
        1 => basics(),
        2 => first_vanish(),
        3 => advanced(),
        4 => showcase(),
        5 => ice_rink(),
        6 => cascade_trap(),
        7 => boss_arena(),
        _ => {
            log::warn!("Unknown level {}, using fallback", level_id);
            layout(FALLBACK_LEVEL)
        }
    }
}

fn sample() -> LevelLayout {
    let mut level = LevelLayout::base("Sample");
    level.surfaces.extend([
        solid(200.0, 400.0, 100.0, 20.0),
        solid(350.0, 350.0, 100.0, 20.0),
        solid(500.0, 300.0, 100.0, 20.0),
        solid(200.0, 250.0, 100.0, 20.0),
        solid(50.0, 200.0, 100.0, 20.0),
    ]);
    level
}

fn basics() -> LevelLayout {
    let mut level = LevelLayout::base("Basics");
    level.surfaces.extend([
        solid(200.0, 400.0, 100.0, 20.0),
        sweep(350.0, 350.0, 100.0, 20.0, 350.0, 450.0, 1.0, Axis::Horizontal),
        solid(500.0, 300.0, 100.0, 20.0),
    ]);
    level.hazards.push(hazard(300.0, 480.0, 80.0, 20.0, HazardKind::Spike));
    level.palette = rgb(0, 200, 0);
    level.background = rgb(25, 25, 50);
    level
}

fn first_vanish() -> LevelLayout {
    let mut level = LevelLayout::base("First Vanish");
    level.surfaces.extend([
        solid(150.0, 450.0, 80.0, 20.0),
        solid(280.0, 400.0, 80.0, 20.0),
        vanishing(400.0, 350.0, 80.0, 20.0, 120, VanishConfig::PLAIN),
        solid(540.0, 300.0, 80.0, 20.0),
        sweep(650.0, 250.0, 80.0, 20.0, 550.0, 650.0, 1.5, Axis::Horizontal),
        solid(500.0, 200.0, 80.0, 20.0),
        solid(350.0, 150.0, 80.0, 20.0),
    ]);
    level.hazards.extend([
        hazard(250.0, 480.0, 100.0, 20.0, HazardKind::Spike),
        hazard(450.0, 480.0, 80.0, 20.0, HazardKind::Spike),
        hazard(620.0, 480.0, 70.0, 20.0, HazardKind::Lava),
    ]);
    level.palette = rgb(0, 150, 200);
    level.background = rgb(40, 40, 70);
    level
}

fn advanced() -> LevelLayout {
    let mut level = LevelLayout::base("Advanced");
    level.surfaces.extend([
        solid(120.0, 450.0, 60.0, 20.0),
        vanishing(220.0, 400.0, 60.0, 20.0, 100, VanishConfig::PLAIN),
        solid(320.0, 450.0, 60.0, 20.0),
        sweep(420.0, 400.0, 60.0, 20.0, 420.0, 520.0, 1.0, Axis::Horizontal),
        solid(520.0, 350.0, 60.0, 20.0),
        sweep(400.0, 300.0, 60.0, 20.0, 250.0, 400.0, 1.5, Axis::Vertical),
        solid(300.0, 250.0, 60.0, 20.0),
        vanishing(400.0, 200.0, 60.0, 20.0, 80, VanishConfig::PLAIN),
        solid(500.0, 150.0, 60.0, 20.0),
        solid(600.0, 200.0, 60.0, 20.0),
    ]);
    level.hazards.extend([
        hazard(190.0, 480.0, 400.0, 20.0, HazardKind::Spike),
        hazard(620.0, 480.0, 120.0, 20.0, HazardKind::Lava),
        hazard(350.0, 350.0, 40.0, 15.0, HazardKind::Spike),
    ]);
    level.palette = rgb(200, 100, 50);
    level.background = rgb(60, 30, 60);
    level
}

fn showcase() -> LevelLayout {
    let mut level = LevelLayout::base("Showcase");
    level.surfaces.extend([
        sweep(150.0, 400.0, 80.0, 20.0, 300.0, 450.0, 1.0, Axis::Vertical),
        sweep(300.0, 350.0, 80.0, 20.0, 250.0, 400.0, 1.2, Axis::Vertical),
        sweep(450.0, 350.0, 80.0, 20.0, 400.0, 600.0, 2.0, Axis::Horizontal),
        sweep(600.0, 250.0, 80.0, 20.0, 500.0, 700.0, 1.5, Axis::Horizontal),
        vanishing(250.0, 300.0, 80.0, 20.0, 60, VanishConfig::PLAIN),
        vanishing(400.0, 250.0, 80.0, 20.0, 120, VanishConfig::PLAIN),
        vanishing(550.0, 200.0, 80.0, 20.0, 180, VanishConfig::PLAIN),
    ]);
    level.hazards.extend([
        hazard(200.0, 480.0, 150.0, 20.0, HazardKind::Spike),
        hazard(400.0, 480.0, 150.0, 20.0, HazardKind::Lava),
        hazard(600.0, 480.0, 150.0, 20.0, HazardKind::Spike),
    ]);
    level.palette = rgb(100, 150, 200);
    level.background = rgb(30, 50, 80);
    level
}

fn ice_rink() -> LevelLayout {
    let mut level = LevelLayout::base("Ice Rink");
    level.surfaces.extend([
        solid(420.0, 380.0, 80.0, 20.0),
        vanishing(560.0, 320.0, 80.0, 20.0, 90, VanishConfig::ONCE),
    ]);
    level.hazards.extend([
        // Ice sits as a thin glaze on the ground slab
        hazard(150.0, 495.0, 250.0, 5.0, HazardKind::Ice),
        hazard(400.0, 490.0, 40.0, 10.0, HazardKind::Electric),
        hazard(500.0, 495.0, 200.0, 5.0, HazardKind::Ice),
        hazard(660.0, 290.0, 30.0, 30.0, HazardKind::Saw),
    ]);
    level.palette = rgb(140, 200, 230);
    level.background = rgb(20, 40, 70);
    level
}

fn cascade_trap() -> LevelLayout {
    let mut level = LevelLayout::base("Cascade");
    let first = level.surfaces.len();
    level.surfaces.extend([
        vanishing(150.0, 420.0, 90.0, 20.0, 600, VanishConfig::CASCADE),
        vanishing(280.0, 350.0, 90.0, 20.0, 600, VanishConfig::CASCADE),
        vanishing(410.0, 280.0, 90.0, 20.0, 600, VanishConfig::CASCADE),
        vanishing(540.0, 210.0, 90.0, 20.0, 600, VanishConfig::CASCADE),
    ]);
    level.surfaces.push(solid(680.0, 160.0, 100.0, 20.0));
    level.goal = Rect::new(720.0, 90.0, 40.0, 70.0);
    level.cascade = Some(CascadeSpec {
        members: (first..first + 4).collect(),
        top: first + 3,
    });
    level.hazards.push(hazard(250.0, 480.0, 400.0, 20.0, HazardKind::Lava));
    level.palette = rgb(180, 120, 220);
    level.background = rgb(35, 20, 50);
    level
}

fn boss_arena() -> LevelLayout {
    let mut level = LevelLayout::base("Boss");
    level.surfaces.extend([
        solid(100.0, 380.0, 140.0, 20.0),
        solid(330.0, 320.0, 140.0, 20.0),
        solid(560.0, 380.0, 140.0, 20.0),
        solid(330.0, 200.0, 140.0, 20.0),
    ]);
    // Defeating the boss is the only way out
    level.goal = Rect::new(-200.0, -200.0, 40.0, 70.0);
    level.boss = Some(BossSpec {
        x: 375.0,
        y: 320.0 - BOSS_HEIGHT,
        max_hits: 5,
    });
    level.palette = rgb(200, 60, 60);
    level.background = rgb(40, 10, 10);
    level
}
