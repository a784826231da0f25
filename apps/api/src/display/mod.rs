//! Full-screen display composition: fits the text into the padded viewport
//! and resolves the colours the renderer paints with.

pub mod appearance;
pub mod handlers;
pub mod preview;
