//! Auto-fit engine: picks line breaks and the largest font size for a box.
//!
//! # Algorithm
//! 1. Tokenize the text into words. No words → empty result at the minimum size.
//! 2. For each line count `1..=min(max_line_candidates, word_count)`:
//!    - build a balanced candidate layout (`build_balanced_lines`),
//!    - binary-search the largest font size at which it fits the box,
//!    - score it by the fraction of the box area it covers at that size.
//! 3. Keep the best candidate: higher utilization wins; on equal utilization
//!    the larger font size wins.
//!
//! Measurement dominates the cost: every candidate costs about
//! `log2((max - min) / precision) + 1` calls to the measurer. The function is
//! pure and synchronous; async callers run it inside `spawn_blocking`.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::layout::lines::{build_balanced_lines, tokenize_words, LINE_BREAK};
use crate::layout::measure::{TextExtent, TextMeasurer, TextStyle};

pub const DEFAULT_MIN_FONT_SIZE: f32 = 6.0;
pub const DEFAULT_MAX_FONT_SIZE: f32 = 900.0;

/// The size search stops once the bracket is this narrow.
pub const SIZE_PRECISION: f32 = 0.5;

/// Slack in pixels allowed on each axis when comparing against the box.
pub const FIT_TOLERANCE_PX: f32 = 0.5;

/// Enough bisection steps to narrow the whole finite `f32` range to
/// `SIZE_PRECISION`: `ceil(log2(f32::MAX / 0.5)) + 1`.
pub const MAX_SEARCH_ITERATIONS: u32 = 130;

// ────────────────────────────────────────────────────────────────────────────
// Request / result types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq)]
pub enum FitError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// One layout pass worth of input. Built fresh per text/box/style change.
#[derive(Debug, Clone, PartialEq)]
pub struct FitRequest {
    pub text: String,
    /// Available width in pixels, already reduced by padding.
    pub box_width: f32,
    /// Available height in pixels, already reduced by padding.
    pub box_height: f32,
    pub style: TextStyle,
    pub min_font_size: f32,
    pub max_font_size: f32,
    /// Largest line count to try. Values below 1 behave as 1.
    pub max_line_candidates: i32,
}

impl FitRequest {
    pub fn new(text: impl Into<String>, box_width: f32, box_height: f32, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            box_width,
            box_height,
            style,
            min_font_size: DEFAULT_MIN_FONT_SIZE,
            max_font_size: DEFAULT_MAX_FONT_SIZE,
            max_line_candidates: 1,
        }
    }

    pub fn with_font_range(mut self, min_font_size: f32, max_font_size: f32) -> Self {
        self.min_font_size = min_font_size;
        self.max_font_size = max_font_size;
        self
    }

    pub fn with_max_line_candidates(mut self, max_line_candidates: i32) -> Self {
        self.max_line_candidates = max_line_candidates;
        self
    }

    /// Rejects contract violations the engine will not paper over.
    pub fn validate(&self) -> Result<(), FitError> {
        if !self.min_font_size.is_finite() || !self.max_font_size.is_finite() {
            return Err(FitError::InvalidArgument(format!(
                "font size bounds must be finite (min={}, max={})",
                self.min_font_size, self.max_font_size
            )));
        }
        if self.min_font_size > self.max_font_size {
            return Err(FitError::InvalidArgument(format!(
                "min_font_size {} exceeds max_font_size {}",
                self.min_font_size, self.max_font_size
            )));
        }
        if !self.box_width.is_finite() || !self.box_height.is_finite() {
            return Err(FitError::InvalidArgument(format!(
                "box dimensions must be finite (width={}, height={})",
                self.box_width, self.box_height
            )));
        }
        Ok(())
    }

    fn line_budget(&self) -> usize {
        usize::try_from(self.max_line_candidates.max(1)).unwrap_or(1)
    }

    fn fits(&self, extent: TextExtent) -> bool {
        extent.width <= self.box_width + FIT_TOLERANCE_PX
            && extent.height <= self.box_height + FIT_TOLERANCE_PX
    }

    fn utilization(&self, extent: TextExtent) -> f64 {
        if self.box_width <= 0.0 || self.box_height <= 0.0 {
            return 0.0;
        }
        let used_w = f64::from(extent.width.min(self.box_width).max(0.0));
        let used_h = f64::from(extent.height.min(self.box_height).max(0.0));
        let total = f64::from(self.box_width) * f64::from(self.box_height);
        (used_w * used_h) / total
    }
}

/// The chosen layout, consumed immediately by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Input words re-flowed with `'\n'` between lines.
    pub rendered_text: String,
    pub font_size: f32,
    /// Fraction (0.0 – 1.0) of the box covered by the block at `font_size`.
    pub utilization_fraction: f64,
    pub line_count: usize,
}

impl FitResult {
    fn empty(min_font_size: f32) -> Self {
        Self {
            rendered_text: String::new(),
            font_size: min_font_size,
            utilization_fraction: 0.0,
            line_count: 0,
        }
    }
}

/// A line-broken layout together with its best font size and score.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub text: String,
    pub font_size: f32,
    pub utilization_fraction: f64,
}

impl Candidate {
    /// True if `self` should replace `best`.
    ///
    /// More area wins; equal area goes to the bigger, more legible font.
    pub fn beats(&self, best: &Candidate) -> bool {
        self.utilization_fraction > best.utilization_fraction
            || (self.utilization_fraction == best.utilization_fraction
                && self.font_size > best.font_size)
    }

    fn into_result(self) -> FitResult {
        let line_count = self.text.split(LINE_BREAK).count();
        FitResult {
            rendered_text: self.text,
            font_size: self.font_size,
            utilization_fraction: self.utilization_fraction,
            line_count,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry point
// ────────────────────────────────────────────────────────────────────────────

/// Chooses line breaks and font size so `request.text` fills its box.
///
/// Only a malformed font range or non-finite box is an error. Every other
/// input (empty text, a box too small for the minimum size, more lines than
/// words) produces a best-effort result.
pub fn fit<M>(request: &FitRequest, measurer: &M) -> Result<FitResult, FitError>
where
    M: TextMeasurer + ?Sized,
{
    request.validate()?;

    let words = tokenize_words(&request.text);
    if words.is_empty() {
        return Ok(FitResult::empty(request.min_font_size));
    }

    let max_try = request.line_budget().min(words.len());

    // The single-line layout is always a valid fallback.
    let mut best = evaluate_candidate(build_balanced_lines(&words, 1), request, measurer);
    debug!(
        lines = 1,
        font_size = best.font_size,
        utilization = best.utilization_fraction,
        "fit candidate"
    );

    for lines_count in 2..=max_try {
        let candidate =
            evaluate_candidate(build_balanced_lines(&words, lines_count), request, measurer);
        debug!(
            lines = lines_count,
            font_size = candidate.font_size,
            utilization = candidate.utilization_fraction,
            "fit candidate"
        );
        if candidate.beats(&best) {
            best = candidate;
        }
    }

    let result = best.into_result();
    debug!(
        words = words.len(),
        tried = max_try,
        chosen_lines = result.line_count,
        font_size = result.font_size,
        utilization = result.utilization_fraction,
        "fit complete"
    );
    Ok(result)
}

// ────────────────────────────────────────────────────────────────────────────
// Candidate evaluation
// ────────────────────────────────────────────────────────────────────────────

/// Sizes one candidate layout and scores the area it covers.
pub fn evaluate_candidate<M>(text: String, request: &FitRequest, measurer: &M) -> Candidate
where
    M: TextMeasurer + ?Sized,
{
    let font_size = search_font_size(&text, request, measurer);
    let extent = measurer.measure(&text, font_size, &request.style);
    Candidate {
        utilization_fraction: request.utilization(extent),
        font_size,
        text,
    }
}

/// Largest size in `[min, max]` at which `candidate` fits the box.
///
/// Never returns below `min_font_size`: if even the floor overflows, the floor
/// is the answer (degraded fit, not an error).
pub fn search_font_size<M>(candidate: &str, request: &FitRequest, measurer: &M) -> f32
where
    M: TextMeasurer + ?Sized,
{
    let mut low = request.min_font_size;
    let mut high = request.max_font_size;
    let mut best = low;

    let cap = iteration_cap(low, high);
    let mut iterations = 0;
    while high - low > SIZE_PRECISION && iterations < cap {
        iterations += 1;
        let mid = (low + high) / 2.0;
        let extent = measurer.measure(candidate, mid, &request.style);
        if request.fits(extent) {
            best = mid;
            low = mid;
        } else {
            high = mid;
        }
    }
    best
}

/// Upper bound on bisection steps for a `[min, max]` bracket.
///
/// Halving converges in `ceil(log2(range / precision))` steps; the cap adds
/// one step of headroom and guards against a misbehaving measurer. Computed in
/// `f64` so brackets near `f32::MAX` do not overflow.
pub fn iteration_cap(min_font_size: f32, max_font_size: f32) -> u32 {
    let range = f64::from(max_font_size) - f64::from(min_font_size);
    if range.is_nan() || range <= f64::from(SIZE_PRECISION) {
        return 1;
    }
    let steps = (range / f64::from(SIZE_PRECISION)).log2().ceil();
    if !steps.is_finite() {
        return MAX_SEARCH_ITERATIONS;
    }
    (steps as u32).saturating_add(1).min(MAX_SEARCH_ITERATIONS)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::layout::font_metrics::{InputFont, StaticFontMetrics};

    const PANGRAM: &str = "The quick brown fox jumps over the lazy dog";

    /// Monospace measurer: every char is `char_em` wide, every line `line_em` tall.
    struct MonoMeasurer {
        char_em: f32,
        line_em: f32,
        calls: AtomicUsize,
    }

    impl MonoMeasurer {
        fn new(char_em: f32, line_em: f32) -> Self {
            Self {
                char_em,
                line_em,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl TextMeasurer for MonoMeasurer {
        fn measure(&self, text: &str, font_size: f32, _style: &TextStyle) -> TextExtent {
            self.calls.fetch_add(1, Ordering::Relaxed);
            if text.is_empty() {
                return TextExtent::default();
            }
            let widest = text
                .split(LINE_BREAK)
                .map(|l| l.chars().count())
                .max()
                .unwrap_or(0);
            let lines = text.split(LINE_BREAK).count();
            TextExtent::new(
                widest as f32 * self.char_em * font_size,
                lines as f32 * self.line_em * font_size,
            )
        }
    }

    fn style() -> TextStyle {
        TextStyle::new(InputFont::Montserrat)
    }

    fn request(text: &str, w: f32, h: f32, max_lines: i32) -> FitRequest {
        FitRequest::new(text, w, h, style()).with_max_line_candidates(max_lines)
    }

    fn assert_fits(result: &FitResult, req: &FitRequest, measurer: &dyn TextMeasurer) {
        let extent = measurer.measure(&result.rendered_text, result.font_size, &req.style);
        assert!(
            extent.width <= req.box_width + FIT_TOLERANCE_PX,
            "width {} overflows box {}",
            extent.width,
            req.box_width
        );
        assert!(
            extent.height <= req.box_height + FIT_TOLERANCE_PX,
            "height {} overflows box {}",
            extent.height,
            req.box_height
        );
    }

    // ── validation ──────────────────────────────────────────────────────────

    #[test]
    fn test_inverted_font_range_is_invalid_argument() {
        let measurer = MonoMeasurer::new(0.5, 1.0);
        let req = request("Hello", 100.0, 100.0, 3).with_font_range(50.0, 10.0);
        let err = fit(&req, &measurer).unwrap_err();
        assert!(matches!(err, FitError::InvalidArgument(_)));
        assert_eq!(measurer.calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_nan_bounds_are_invalid_argument() {
        let measurer = MonoMeasurer::new(0.5, 1.0);
        let req = request("Hello", 100.0, 100.0, 3).with_font_range(f32::NAN, 10.0);
        assert!(fit(&req, &measurer).is_err());
        let req = request("Hello", f32::INFINITY, 100.0, 3);
        assert!(fit(&req, &measurer).is_err());
    }

    // ── empty input ─────────────────────────────────────────────────────────

    #[test]
    fn test_empty_text_returns_min_font_size() {
        let measurer = MonoMeasurer::new(0.5, 1.0);
        for text in ["", "   ", "\n\t \n"] {
            let result = fit(&request(text, 400.0, 300.0, 5), &measurer).unwrap();
            assert_eq!(result.rendered_text, "");
            assert_eq!(result.font_size, DEFAULT_MIN_FONT_SIZE);
            assert_eq!(result.line_count, 0);
        }
        assert_eq!(measurer.calls.load(Ordering::Relaxed), 0);
    }

    // ── font-size search ────────────────────────────────────────────────────

    #[test]
    fn test_search_converges_below_exact_fit() {
        // "abcd" at 0.5em/char: width = 2·size → exact fit at size 50 in a 100px box.
        let measurer = MonoMeasurer::new(0.5, 1.0);
        let req = request("abcd", 100.0, 1000.0, 1);
        let size = search_font_size("abcd", &req, &measurer);
        assert!(size <= 50.0 + FIT_TOLERANCE_PX / 2.0, "size {size} overflows");
        assert!(size > 50.0 - 2.0 * SIZE_PRECISION, "size {size} too small");
    }

    #[test]
    fn test_search_never_goes_below_floor() {
        let measurer = MonoMeasurer::new(0.5, 1.0);
        let req = request("a very long line of text", 5.0, 5.0, 1);
        assert_eq!(
            search_font_size("a very long line of text", &req, &measurer),
            DEFAULT_MIN_FONT_SIZE
        );
    }

    #[test]
    fn test_search_call_count_is_bounded_by_cap() {
        let measurer = MonoMeasurer::new(0.5, 1.0);
        let req = request("abc", 300.0, 300.0, 1);
        search_font_size("abc", &req, &measurer);
        let calls = measurer.calls.load(Ordering::Relaxed) as u32;
        assert!(calls <= iteration_cap(DEFAULT_MIN_FONT_SIZE, DEFAULT_MAX_FONT_SIZE));
        assert!(calls >= 10, "expected ~11 bisection steps, got {calls}");
    }

    #[test]
    fn test_iteration_cap_for_default_range() {
        // 894 / 0.5 = 1788 → ceil(log2) = 11, plus one step of headroom.
        assert_eq!(iteration_cap(6.0, 900.0), 12);
        assert_eq!(iteration_cap(10.0, 10.0), 1);
        assert_eq!(iteration_cap(10.0, 10.4), 1);
    }

    #[test]
    fn test_iteration_cap_for_huge_range_stays_bounded() {
        assert_eq!(iteration_cap(6.0, f32::MAX), MAX_SEARCH_ITERATIONS);
        assert_eq!(iteration_cap(-f32::MAX, f32::MAX), MAX_SEARCH_ITERATIONS);
    }

    #[test]
    fn test_huge_max_font_size_still_finds_largest_fit() {
        // "Hello\nworld" at 0.5em/char fits 400x300 up to size 150.
        let measurer = MonoMeasurer::new(0.5, 1.0);
        let req = request("Hello world", 400.0, 300.0, 2).with_font_range(6.0, f32::MAX);
        let result = fit(&req, &measurer).unwrap();

        assert_eq!(result.rendered_text, "Hello\nworld");
        assert!(result.font_size > 149.0, "size {} stuck near floor", result.font_size);
        assert_fits(&result, &req, &measurer);
    }

    #[test]
    fn test_equal_bounds_return_that_size() {
        let measurer = MonoMeasurer::new(0.5, 1.0);
        let req = request("Hello there", 1000.0, 1000.0, 2).with_font_range(42.0, 42.0);
        let result = fit(&req, &measurer).unwrap();
        assert_eq!(result.font_size, 42.0);
    }

    // ── selection ───────────────────────────────────────────────────────────

    #[test]
    fn test_tie_break_prefers_larger_font() {
        let small = Candidate {
            text: "a b".to_string(),
            font_size: 40.0,
            utilization_fraction: 0.5,
        };
        let large = Candidate {
            text: "a\nb".to_string(),
            font_size: 60.0,
            utilization_fraction: 0.5,
        };
        assert!(large.beats(&small));
        assert!(!small.beats(&large));
        assert!(!small.beats(&small.clone()), "identical candidate must not replace");
    }

    #[test]
    fn test_higher_utilization_beats_larger_font() {
        let big_font = Candidate {
            text: "a b".to_string(),
            font_size: 90.0,
            utilization_fraction: 0.3,
        };
        let more_area = Candidate {
            text: "a\nb".to_string(),
            font_size: 50.0,
            utilization_fraction: 0.4,
        };
        assert!(more_area.beats(&big_font));
        assert!(!big_font.beats(&more_area));
    }

    /// Reports a fixed extent for every layout so all candidates tie on area;
    /// a 2-line layout is allowed to grow larger than the others.
    struct TieMeasurer;

    impl TextMeasurer for TieMeasurer {
        fn measure(&self, text: &str, font_size: f32, _style: &TextStyle) -> TextExtent {
            let limit = if text.split(LINE_BREAK).count() == 2 {
                80.0
            } else {
                40.0
            };
            if font_size <= limit {
                TextExtent::new(50.0, 50.0)
            } else {
                TextExtent::new(500.0, 500.0)
            }
        }
    }

    #[test]
    fn test_fit_breaks_area_tie_toward_larger_font() {
        let req = request("one two three four", 100.0, 100.0, 3);
        let result = fit(&req, &TieMeasurer).unwrap();
        assert_eq!(result.rendered_text, "one two\nthree four");
        assert!(result.font_size > 40.0);
        assert!((result.utilization_fraction - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_pangram_picks_three_lines_in_square_box() {
        // 1 line: 43 chars → size ≈ 4.6, covers ~5% of the box.
        // 2 lines: widest 25 chars → size ≈ 8, covers ~16%.
        // 3 lines: widest 15 chars → size ≈ 13.3, covers ~40%.
        let measurer = MonoMeasurer::new(0.5, 1.0);
        let req = request(PANGRAM, 100.0, 100.0, 3).with_font_range(1.0, 900.0);
        let result = fit(&req, &measurer).unwrap();

        assert_eq!(
            result.rendered_text,
            "The quick brown\nfox jumps over\nthe lazy dog"
        );
        assert_eq!(result.line_count, 3);
        assert!(result.utilization_fraction > 0.35);
        assert_fits(&result, &req, &measurer);
    }

    #[test]
    fn test_wide_box_keeps_single_line() {
        let measurer = MonoMeasurer::new(0.5, 1.0);
        let req = request(PANGRAM, 2000.0, 100.0, 3).with_font_range(1.0, 900.0);
        let result = fit(&req, &measurer).unwrap();
        assert_eq!(result.rendered_text, PANGRAM);
        assert_eq!(result.line_count, 1);
    }

    #[test]
    fn test_zero_area_box_returns_single_line_at_floor() {
        let measurer = MonoMeasurer::new(0.5, 1.0);
        let req = request(PANGRAM, 0.0, 0.0, 5);
        let result = fit(&req, &measurer).unwrap();
        assert_eq!(result.rendered_text, PANGRAM);
        assert_eq!(result.font_size, DEFAULT_MIN_FONT_SIZE);
        assert_eq!(result.utilization_fraction, 0.0);
    }

    #[test]
    fn test_negative_box_has_zero_utilization() {
        let measurer = MonoMeasurer::new(0.5, 1.0);
        let req = request("Hi there", -10.0, -10.0, 2);
        let result = fit(&req, &measurer).unwrap();
        assert_eq!(result.utilization_fraction, 0.0);
        assert_eq!(result.font_size, DEFAULT_MIN_FONT_SIZE);
    }

    #[test]
    fn test_non_positive_line_budget_tries_single_line() {
        let measurer = MonoMeasurer::new(0.5, 1.0);
        for budget in [0, -3] {
            let req = request(PANGRAM, 100.0, 100.0, budget).with_font_range(1.0, 900.0);
            let result = fit(&req, &measurer).unwrap();
            assert_eq!(result.line_count, 1);
        }
    }

    #[test]
    fn test_input_newlines_are_not_significant() {
        let measurer = MonoMeasurer::new(0.5, 1.0);
        let req = request("Hello\n\n   world", 1000.0, 100.0, 1);
        let result = fit(&req, &measurer).unwrap();
        assert_eq!(result.rendered_text, "Hello world");
    }

    // ── properties over a sample of inputs ──────────────────────────────────

    #[test]
    fn test_properties_hold_for_sample_inputs() {
        let texts = [
            "Hi",
            "OnlyWord",
            PANGRAM,
            "Gate B12 boarding now",
            "Happy birthday Alex! 🎉 🎂",
            "  spaced\tout\n\ninput with   many gaps ",
            "Supercalifragilisticexpialidocious is long",
            "a b c d e f g h i j k l m n o p q r s t u v w x y z",
        ];
        let boxes = [(1000.0, 500.0), (360.0, 640.0), (640.0, 360.0), (50.0, 400.0)];
        let measurer = StaticFontMetrics;

        for text in texts {
            for (w, h) in boxes {
                for max_lines in [1, 3, 5, 10] {
                    let req = request(text, w, h, max_lines);
                    let first = fit(&req, &measurer).unwrap();
                    let second = fit(&req, &measurer).unwrap();
                    assert_eq!(first, second, "fit must be deterministic");

                    assert_eq!(
                        tokenize_words(&first.rendered_text),
                        tokenize_words(text),
                        "words changed for {text:?}"
                    );

                    let word_count = tokenize_words(text).len();
                    assert!(first.line_count <= (max_lines as usize).min(word_count));

                    assert!(first.font_size >= req.min_font_size);
                    assert!(first.font_size <= req.max_font_size);
                    assert!((0.0..=1.0).contains(&first.utilization_fraction));

                    if first.font_size > req.min_font_size {
                        assert_fits(&first, &req, &measurer);
                    }
                }
            }
        }
    }
}
