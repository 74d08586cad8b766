//! Layout driver - the host's seam onto the two-pass protocol.
//!
//! The host runtime owns the driver; the container only implements the
//! two-method [`FlowLayout`] interface. One `run` call is one layout pass:
//! measure against the viewport policy, resolve the final width, arrange.
//! The passes never run concurrently and never suspend.

use crate::primitives::Size;

use super::constraints::MeasureSpec;
use super::flow::{FlowArranger, Placements};

/// The two-method interface a layout driver invokes.
///
/// `measure` is always called before `arrange` within a pass, and `arrange`
/// receives a final width derived from `measure`'s report.
pub trait FlowLayout {
    /// Measure against the offered specs and report the desired size.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Compute destination boxes against the final resolved width.
    fn arrange(&self, final_width: f32) -> Placements;
}

impl FlowLayout for FlowArranger {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        FlowArranger::measure(self, width, height)
    }

    fn arrange(&self, final_width: f32) -> Placements {
        FlowArranger::arrange(self, final_width)
    }
}

/// Host-owned viewport policy driving a full layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutDriver {
    width: MeasureSpec,
    height: MeasureSpec,
}

impl LayoutDriver {
    /// The host dictates both dimensions.
    pub fn exact(width: f32, height: f32) -> Self {
        Self {
            width: MeasureSpec::exact(width),
            height: MeasureSpec::exact(height),
        }
    }

    /// Fixed width, content-driven height. The usual policy for wrapping
    /// containers inside a scrollable host.
    pub fn fit_width(width: f32) -> Self {
        Self {
            width: MeasureSpec::exact(width),
            height: MeasureSpec::unbounded(),
        }
    }

    /// Both dimensions content-driven.
    pub fn unbounded() -> Self {
        Self {
            width: MeasureSpec::unbounded(),
            height: MeasureSpec::unbounded(),
        }
    }

    /// Custom per-axis specs.
    pub fn with_specs(width: MeasureSpec, height: MeasureSpec) -> Self {
        Self { width, height }
    }

    /// Run one full layout pass: measure, then arrange at the resolved
    /// width. Returns the container's final size and the placements for
    /// the host to commit.
    pub fn run(&self, layout: &mut impl FlowLayout) -> (Size, Placements) {
        let size = layout.measure(self.width, self.height);
        let placements = layout.arrange(size.width);
        (size, placements)
    }
}
