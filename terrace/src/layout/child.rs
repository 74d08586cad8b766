//! Child entries.
//!
//! A `FlowChild` is what the arranger actually walks: a measurable element
//! plus the per-child layout state the container reads (margins, visibility)
//! and writes (the measured size from the latest pass).

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::primitives::Size;

use super::constraints::MeasureSpec;
use super::element::FlowElement;
use super::margins::Margins;

/// Counter for generating unique child IDs.
static CHILD_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a child, the key placements are reported under.
///
/// IDs survive re-measurement and re-arrangement; the host uses them to map
/// placements back onto its own widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChildId(pub u64);

impl ChildId {
    /// Create a new unique child ID. Each call returns a different ID.
    pub fn new() -> Self {
        Self(CHILD_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Create a child ID from an existing value.
    ///
    /// Use this for deterministic IDs (e.g. derived from host widget keys).
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric value.
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl Default for ChildId {
    fn default() -> Self {
        Self::new()
    }
}

/// Visibility state of a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Laid out and drawn.
    #[default]
    Visible,
    /// Laid out but not drawn; still receives a placement.
    Hidden,
    /// Occupies no space and receives no placement.
    Collapsed,
}

impl Visibility {
    /// Whether this child is skipped during placement.
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        matches!(self, Visibility::Collapsed)
    }
}

/// A child entry in a flow container.
pub struct FlowChild {
    id: ChildId,
    element: Box<dyn FlowElement>,
    pub(crate) margins: Margins,
    /// Whether margins were set explicitly (container defaults apply
    /// only when they were not).
    explicit_margins: bool,
    pub(crate) visibility: Visibility,
    /// Size recorded by the most recent measure pass.
    measured: Size,
}

impl FlowChild {
    /// Wrap an element with zero margins and `Visible` visibility.
    pub fn new(element: impl FlowElement + 'static) -> Self {
        Self {
            id: ChildId::new(),
            element: Box::new(element),
            margins: Margins::ZERO,
            explicit_margins: false,
            visibility: Visibility::Visible,
            measured: Size::ZERO,
        }
    }

    /// Override the auto-assigned ID with a host-provided one.
    pub fn with_id(mut self, id: ChildId) -> Self {
        self.id = id;
        self
    }

    /// Set explicit margins.
    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self.explicit_margins = true;
        self
    }

    /// Set the visibility state.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Mark this child collapsed.
    pub fn collapsed(self) -> Self {
        self.visibility(Visibility::Collapsed)
    }

    /// The child's stable identity.
    pub fn id(&self) -> ChildId {
        self.id
    }

    /// Size recorded by the most recent measure pass.
    pub fn measured(&self) -> Size {
        self.measured
    }

    /// Delegate measurement to the element and record the result.
    pub(crate) fn run_measure(&mut self, width: MeasureSpec, height: MeasureSpec) {
        self.measured = self.element.measure(width, height);
    }

    /// Apply container-level default margins unless the child carries its
    /// own.
    pub(crate) fn apply_default_margins(&mut self, defaults: Margins) {
        if !self.explicit_margins {
            self.margins = defaults;
        }
    }

    /// Footprint width in a row: measured width plus horizontal margins.
    #[inline]
    pub(crate) fn outer_width(&self) -> f32 {
        self.measured.width + self.margins.horizontal()
    }

    /// Footprint height in a row: measured height plus vertical margins.
    #[inline]
    pub(crate) fn outer_height(&self) -> f32 {
        self.measured.height + self.margins.vertical()
    }
}

impl<E: FlowElement + 'static> From<E> for FlowChild {
    fn from(element: E) -> Self {
        Self::new(element)
    }
}
