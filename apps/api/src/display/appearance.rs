//! Display appearance: orientation, background, gradient palette, text colour.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::FitDefaults;

/// Alpha applied to colours when a control is rendered disabled.
pub const DISABLED_ALPHA: f32 = 0.38;

const BLACK: u32 = 0x000000;
const WHITE: u32 = 0xFFFFFF;

// ────────────────────────────────────────────────────────────────────────────
// Orientation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
}

impl Orientation {
    pub const fn label(&self) -> &'static str {
        match self {
            Orientation::Landscape => "Landscape",
            Orientation::Portrait => "Portrait",
        }
    }

    /// How many line-count candidates the fit engine tries in this orientation.
    pub fn max_line_candidates(&self, defaults: &FitDefaults) -> i32 {
        match self {
            Orientation::Landscape => defaults.max_lines_landscape,
            Orientation::Portrait => defaults.max_lines_portrait,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Colours
// ────────────────────────────────────────────────────────────────────────────

/// A colour as CSS hex plus a separate alpha.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paint {
    pub hex: String,
    pub alpha: f32,
}

impl Paint {
    pub fn new(rgb: u32, alpha: f32) -> Self {
        Self {
            hex: format!("#{:06X}", rgb & 0x00FF_FFFF),
            alpha,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundColor {
    #[default]
    Black,
    White,
    Gradient,
}

impl BackgroundColor {
    pub const fn label(&self) -> &'static str {
        match self {
            BackgroundColor::Black => "Black",
            BackgroundColor::White => "White",
            BackgroundColor::Gradient => "Gradient",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientColor {
    PurplePink,
    BluePurple,
    PinkOrange,
    TealBlue,
    RedPurple,
    DarkPurpleCyan,
    YellowGreen,
    PeachRed,
}

impl GradientColor {
    pub const ALL: [GradientColor; 8] = [
        GradientColor::PurplePink,
        GradientColor::BluePurple,
        GradientColor::PinkOrange,
        GradientColor::TealBlue,
        GradientColor::RedPurple,
        GradientColor::DarkPurpleCyan,
        GradientColor::YellowGreen,
        GradientColor::PeachRed,
    ];

    pub const fn display_name(&self) -> &'static str {
        match self {
            GradientColor::PurplePink => "Purple to Pink",
            GradientColor::BluePurple => "Blue to Purple",
            GradientColor::PinkOrange => "Pink to Orange",
            GradientColor::TealBlue => "Teal to Blue",
            GradientColor::RedPurple => "Red to Purple",
            GradientColor::DarkPurpleCyan => "Dark Purple to Cyan",
            GradientColor::YellowGreen => "Yellow to Green",
            GradientColor::PeachRed => "Peach to Red",
        }
    }

    /// Start and end colours, drawn top-left to bottom-right.
    pub const fn stops(&self) -> [u32; 2] {
        match self {
            GradientColor::PurplePink => [0x6200EE, 0xBB86FC],
            GradientColor::BluePurple => [0x2196F3, 0x9C27B0],
            GradientColor::PinkOrange => [0xE91E63, 0xFF9800],
            GradientColor::TealBlue => [0x009688, 0x2196F3],
            GradientColor::RedPurple => [0xF44336, 0x9C27B0],
            GradientColor::DarkPurpleCyan => [0x42047E, 0x07F49E],
            GradientColor::YellowGreen => [0xF4F269, 0x5CB270],
            GradientColor::PeachRed => [0xFFB88E, 0xEA5753],
        }
    }
}

/// Uniform pick from the gradient palette.
pub fn pick_gradient<R: Rng>(rng: &mut R) -> GradientColor {
    GradientColor::ALL[rng.random_range(0..GradientColor::ALL.len())]
}

pub fn random_gradient() -> GradientColor {
    pick_gradient(&mut rand::rng())
}

/// What the renderer paints behind the text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BackgroundFill {
    Solid {
        color: Paint,
    },
    LinearGradient {
        gradient: GradientColor,
        name: &'static str,
        stops: Vec<Paint>,
    },
}

pub fn background_fill(
    background: BackgroundColor,
    gradient: GradientColor,
    enabled: bool,
) -> BackgroundFill {
    let alpha = alpha_for(enabled);
    match background {
        BackgroundColor::Black => BackgroundFill::Solid {
            color: Paint::new(BLACK, alpha),
        },
        BackgroundColor::White => BackgroundFill::Solid {
            color: Paint::new(WHITE, alpha),
        },
        BackgroundColor::Gradient => BackgroundFill::LinearGradient {
            gradient,
            name: gradient.display_name(),
            stops: gradient
                .stops()
                .iter()
                .map(|&rgb| Paint::new(rgb, alpha))
                .collect(),
        },
    }
}

/// Black text on white, white text on everything else.
pub fn text_color(background: BackgroundColor, enabled: bool) -> Paint {
    let alpha = alpha_for(enabled);
    match background {
        BackgroundColor::White => Paint::new(BLACK, alpha),
        BackgroundColor::Black | BackgroundColor::Gradient => Paint::new(WHITE, alpha),
    }
}

fn alpha_for(enabled: bool) -> f32 {
    if enabled {
        1.0
    } else {
        DISABLED_ALPHA
    }
}
