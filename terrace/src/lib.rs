//! Terrace: a wrapping flow-layout container.
//!
//! Terrace arranges child elements into left-to-right rows, wrapping to a
//! new row when the accumulated width would exceed the available width,
//! the way inline text wraps. It computes its own preferred size when
//! unconstrained and reports a destination box for every child once its
//! final width is known.
//!
//! # Architecture
//!
//! Layout is a strict two-pass protocol driven by the host runtime:
//!
//! 1. **Measure** - every child reports its own size against the offered
//!    specs; the container accumulates row totals and reports its desired
//!    size.
//! 2. **Arrange** - rows are rebuilt against the final width and each
//!    child receives an absolute bounding box, returned as an explicit
//!    [`Placements`] map for the host to commit.
//!
//! Nothing persists between passes; row state is freshly allocated per
//! call.
//!
//! # Usage
//!
//! ```ignore
//! use terrace::{BoxElement, FlowArranger, LayoutDriver};
//!
//! let mut flow = FlowArranger::new()
//!     .push(BoxElement::new(40.0, 10.0))
//!     .push(BoxElement::new(40.0, 10.0));
//!
//! let (size, placements) = LayoutDriver::fit_width(100.0).run(&mut flow);
//! for (child, bounds) in placements.iter() {
//!     // commit bounds to the host widget identified by `child`
//! }
//! ```

// Core primitives
pub mod primitives;

// Layout system
pub mod layout;

// Re-export core types
pub use primitives::{Point, Rect, Size};

// Layout system exports
pub use layout::{
    BoxElement, ChildId, FlowArranger, FlowAttrs, FlowChild, FlowElement, FlowLayout,
    LabelElement, LayoutDriver, Margins, MeasureSpec, Placements, SpecMode, Visibility,
    CHAR_WIDTH, LINE_HEIGHT,
};
