//! Layout system for Terrace.
//!
//! Two-pass flow layout: the host measures the container against per-axis
//! specs, then arranges it at the final resolved width. Row membership is
//! rebuilt from scratch in each pass.
//!
//! ```text
//! host specs -> measure() delegates to children -> desired Size
//! final width -> arrange() rebuilds rows -> Placements (ChildId -> Rect)
//! ```

pub mod constraints;
pub mod margins;

pub mod element;
pub mod child;

pub mod flow;
pub mod driver;

// Re-export core types
pub use constraints::{MeasureSpec, SpecMode};
pub use margins::{Margins, CHAR_WIDTH, LINE_HEIGHT};

pub use element::{BoxElement, FlowElement, LabelElement};
pub use child::{ChildId, FlowChild, Visibility};

pub use flow::{FlowArranger, FlowAttrs, Placements};
pub use driver::{FlowLayout, LayoutDriver};
