//! Viewport classification
use super::surface::Placement;

/// Widths below this are treated as a constrained (mobile) viewport
pub const NARROW_BREAKPOINT: u32 = 768;

/// Behavioral branch controlling single-item vs. stacked display.
/// Classified once at engine startup and never re-evaluated on resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    Narrow,
    Wide,
}

impl ViewportMode {
    pub fn classify(width: u32) -> Self {
        if width < NARROW_BREAKPOINT {
            ViewportMode::Narrow
        } else {
            ViewportMode::Wide
        }
    }

    pub fn placement(&self) -> Placement {
        match self {
            ViewportMode::Narrow => Placement::Centered,
            ViewportMode::Wide => Placement::TopRight,
        }
    }
}
