//! Static font-metric tables for the four display fonts.
//!
//! Advance widths are in em units (relative to font size). Tables cover ASCII
//! 0x20..=0x7E (95 printable characters), index = `(char as usize) - 32`.
//! Anything outside that range (accents, CJK, emoji) falls back to
//! `average_char_width`, which slightly overestimates narrow glyphs and
//! underestimates wide ones. The fit tolerance absorbs the difference for the
//! short strings this service displays.

use serde::{Deserialize, Serialize};

use crate::layout::lines::LINE_BREAK;
use crate::layout::measure::{TextExtent, TextMeasurer, TextStyle};

// ────────────────────────────────────────────────────────────────────────────
// Font enum
// ────────────────────────────────────────────────────────────────────────────

/// Fonts the user can pick for the full-screen display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFont {
    /// Geometric sans, Black weight. The default display font.
    #[default]
    Montserrat,
    /// Rounded handwritten face.
    Pangolin,
    /// Slab serif.
    RobotoSlab,
    /// High-contrast display serif.
    PlayfairDisplay,
}

impl InputFont {
    pub const ALL: [InputFont; 4] = [
        InputFont::Montserrat,
        InputFont::Pangolin,
        InputFont::RobotoSlab,
        InputFont::PlayfairDisplay,
    ];

    /// Short label shown under the font swatch.
    pub const fn label(&self) -> &'static str {
        match self {
            InputFont::Montserrat => "Montserrat",
            InputFont::Pangolin => "Pangolin",
            InputFont::RobotoSlab => "Roboto",
            InputFont::PlayfairDisplay => "Playfair",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a display font.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    pub font: InputFont,
    widths: [f32; 95],
    /// Fallback width for characters outside the table.
    pub average_char_width: f32,
    /// Baseline-to-baseline distance as a multiple of the font size.
    pub line_height: f32,
}

impl FontMetricTable {
    /// Width of a single line of text in em units. Line breaks are not special here.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Measures a block with hard line breaks: `(widest line in em, line count)`.
    ///
    /// Empty text has zero lines. A trailing break still opens a (blank) line.
    pub fn measure_block(&self, text: &str) -> (f32, usize) {
        if text.is_empty() {
            return (0.0, 0);
        }
        text.split(LINE_BREAK)
            .fold((0.0_f32, 0_usize), |(widest, count), line| {
                (widest.max(self.measure_str(line)), count + 1)
            })
    }

    /// Pixel extent of `text` rendered at `font_size`.
    pub fn extent(&self, text: &str, font_size: f32) -> TextExtent {
        let (widest_em, lines) = self.measure_block(text);
        TextExtent::new(
            widest_em * font_size,
            lines as f32 * self.line_height * font_size,
        )
    }
}

/// Measurer backed by the static tables, dispatching on the style's font.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticFontMetrics;

impl TextMeasurer for StaticFontMetrics {
    fn measure(&self, text: &str, font_size: f32, style: &TextStyle) -> TextExtent {
        metrics_for(style.font).extent(text, font_size)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Montserrat Black. Wide and heavy; the widest of the four.
static MONTSERRAT_TABLE: FontMetricTable = FontMetricTable {
    font: InputFont::Montserrat,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.27, 0.32, 0.41, 0.60, 0.60, 0.96, 0.72, 0.24, 0.36, 0.36, 0.42, 0.64, 0.30, 0.36, 0.30, 0.33,
        // 0     1     2     3     4     5     6     7     8     9
        0.66, 0.66, 0.66, 0.66, 0.66, 0.66, 0.66, 0.66, 0.66, 0.66,
        // :     ;     <     =     >     ?     @
        0.30, 0.30, 0.64, 0.64, 0.64, 0.54, 1.10,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.82, 0.74, 0.74, 0.82, 0.68, 0.61, 0.82, 0.82, 0.30, 0.48, 0.74, 0.65, 1.00,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.82, 0.88, 0.68, 0.88, 0.74, 0.61, 0.68, 0.82, 0.82, 1.13, 0.74, 0.74, 0.68,
        // [     \     ]     ^     _     `
        0.30, 0.33, 0.30, 0.51, 0.60, 0.37,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.64, 0.64, 0.57, 0.64, 0.64, 0.35, 0.64, 0.64, 0.25, 0.25, 0.60, 0.25, 0.97,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.64, 0.64, 0.64, 0.64, 0.38, 0.50, 0.44, 0.64, 0.57, 0.82, 0.57, 0.57, 0.50,
        // {     |     }     ~
        0.36, 0.28, 0.36, 0.64,
    ],
    average_char_width: 0.60,
    line_height: 1.22,
};

/// Pangolin. Handwritten, with roomy i/l/j strokes.
static PANGOLIN_TABLE: FontMetricTable = FontMetricTable {
    font: InputFont::Pangolin,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
        // 0     1     2     3     4     5     6     7     8     9
        0.55, 0.55, 0.55, 0.55, 0.55, 0.55, 0.55, 0.55, 0.55, 0.55,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.68, 0.62, 0.62, 0.68, 0.57, 0.51, 0.68, 0.68, 0.26, 0.40, 0.62, 0.54, 0.80,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.68, 0.73, 0.57, 0.73, 0.62, 0.51, 0.57, 0.68, 0.68, 0.91, 0.62, 0.62, 0.57,
        // [     \     ]     ^     _     `
        0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.54, 0.54, 0.48, 0.54, 0.54, 0.30, 0.54, 0.54, 0.25, 0.23, 0.51, 0.25, 0.81,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.54, 0.54, 0.54, 0.54, 0.32, 0.43, 0.38, 0.54, 0.48, 0.70, 0.48, 0.48, 0.43,
        // {     |     }     ~
        0.33, 0.26, 0.33, 0.59,
    ],
    average_char_width: 0.52,
    line_height: 1.30,
};

/// Roboto Slab. Serifs widen I, i, l and f.
static ROBOTO_SLAB_TABLE: FontMetricTable = FontMetricTable {
    font: InputFont::RobotoSlab,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
        // 0     1     2     3     4     5     6     7     8     9
        0.57, 0.57, 0.57, 0.57, 0.57, 0.57, 0.57, 0.57, 0.57, 0.57,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.72, 0.66, 0.66, 0.72, 0.60, 0.54, 0.72, 0.72, 0.35, 0.42, 0.66, 0.57, 0.84,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.72, 0.78, 0.60, 0.78, 0.66, 0.54, 0.60, 0.72, 0.72, 0.96, 0.66, 0.66, 0.60,
        // [     \     ]     ^     _     `
        0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.57, 0.57, 0.51, 0.57, 0.57, 0.34, 0.57, 0.57, 0.27, 0.22, 0.54, 0.27, 0.84,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.57, 0.57, 0.57, 0.57, 0.33, 0.44, 0.39, 0.57, 0.51, 0.73, 0.51, 0.51, 0.44,
        // {     |     }     ~
        0.33, 0.26, 0.33, 0.59,
    ],
    average_char_width: 0.55,
    line_height: 1.32,
};

/// Playfair Display. Narrow lowercase, tall line box.
static PLAYFAIR_DISPLAY_TABLE: FontMetricTable = FontMetricTable {
    font: InputFont::PlayfairDisplay,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.24, 0.28, 0.36, 0.53, 0.53, 0.85, 0.64, 0.21, 0.31, 0.31, 0.37, 0.56, 0.27, 0.31, 0.27, 0.29,
        // 0     1     2     3     4     5     6     7     8     9
        0.53, 0.53, 0.53, 0.53, 0.53, 0.53, 0.53, 0.53, 0.53, 0.53,
        // :     ;     <     =     >     ?     @
        0.27, 0.27, 0.56, 0.56, 0.56, 0.47, 0.97,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.70, 0.63, 0.63, 0.70, 0.58, 0.52, 0.70, 0.70, 0.26, 0.41, 0.63, 0.55, 0.85,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.70, 0.75, 0.58, 0.75, 0.63, 0.52, 0.58, 0.70, 0.70, 0.98, 0.63, 0.63, 0.58,
        // [     \     ]     ^     _     `
        0.27, 0.29, 0.27, 0.45, 0.53, 0.32,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.50, 0.50, 0.45, 0.50, 0.50, 0.28, 0.50, 0.50, 0.20, 0.20, 0.48, 0.20, 0.75,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.50, 0.50, 0.50, 0.50, 0.30, 0.38, 0.35, 0.50, 0.45, 0.65, 0.45, 0.45, 0.40,
        // {     |     }     ~
        0.31, 0.25, 0.31, 0.56,
    ],
    average_char_width: 0.48,
    line_height: 1.33,
};

/// Returns the static metric table for a display font.
pub fn metrics_for(font: InputFont) -> &'static FontMetricTable {
    match font {
        InputFont::Montserrat => &MONTSERRAT_TABLE,
        InputFont::Pangolin => &PANGOLIN_TABLE,
        InputFont::RobotoSlab => &ROBOTO_SLAB_TABLE,
        InputFont::PlayfairDisplay => &PLAYFAIR_DISPLAY_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
