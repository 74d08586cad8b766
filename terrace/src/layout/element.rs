//! Measurable leaf elements.
//!
//! The arranger treats children as opaque boxes: anything implementing
//! `FlowElement` can be wrapped in a `FlowChild` and flowed into rows. The
//! element reports its own size against the offered specs; the arranger
//! never looks inside it.

use unicode_width::UnicodeWidthChar;

use crate::primitives::Size;

use super::constraints::MeasureSpec;
use super::margins::{CHAR_WIDTH, LINE_HEIGHT};

/// A child's measurement seam.
///
/// Called once per measure pass. The offered specs describe the space the
/// container was given; the element is free to report a size larger than
/// the offer (an oversized element is never clipped here, it just ends up
/// alone on its row).
pub trait FlowElement {
    /// Report this element's measured size against the offered specs.
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size;
}

/// Estimate display width in cell units (1 for Latin, 2 for CJK, 0 for
/// combining marks).
pub(crate) fn unicode_display_width(text: &str) -> f32 {
    text.chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0) as f32)
        .sum()
}

// =========================================================================
// BoxElement
// =========================================================================

/// An element with a fixed intrinsic size.
///
/// Ignores the offered space entirely. The workhorse for hosts whose
/// children are pre-sized (images, badges) and for tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxElement {
    size: Size,
}

impl BoxElement {
    /// Create a fixed-size element.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }
}

impl FlowElement for BoxElement {
    fn measure(&self, _width: MeasureSpec, _height: MeasureSpec) -> Size {
        self.size
    }
}

// =========================================================================
// LabelElement
// =========================================================================

/// A monospace text chip.
///
/// Width is estimated from unicode display width and clamped to a bounded
/// width offer; a label never reports wider than the space it was given.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelElement {
    text: String,
}

impl LabelElement {
    /// Create a label element.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The label's text content.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl FlowElement for LabelElement {
    fn measure(&self, width: MeasureSpec, _height: MeasureSpec) -> Size {
        let intrinsic = unicode_display_width(&self.text) * CHAR_WIDTH;
        Size::new(intrinsic.min(width.available()), LINE_HEIGHT)
    }
}
