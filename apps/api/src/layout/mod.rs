// Auto-fit layout engine: balanced line candidates, font-size bisection,
// area-utilization selection. CPU-bound fitting runs inside tokio::task::spawn_blocking.

pub mod fit;
pub mod font_metrics;
pub mod handlers;
pub mod lines;
pub mod measure;

// Re-export the public API consumed by other modules (display, handlers, state).
pub use fit::{fit, FitError, FitRequest, FitResult};
pub use font_metrics::{InputFont, StaticFontMetrics};
pub use measure::{TextAlign, TextMeasurer, TextStyle};
