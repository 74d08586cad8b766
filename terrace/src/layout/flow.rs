//! FlowArranger - wrapping row layout.
//!
//! Children are laid out left to right in insertion order until the next
//! child would exceed the available width, then wrap to a new row. Two
//! passes: `measure` delegates per-child measurement and reports the
//! container's desired size; `arrange` rebuilds rows against the final
//! width and computes every child's bounding box.
//!
//! Row membership is never carried between the passes. The final width may
//! differ from the width measured against (the host only dictates it for an
//! `Exact` spec), so each pass recomputes row boundaries from the primitive
//! per-child sizes.

use std::ops::Range;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::primitives::{Point, Rect, Size};

use super::child::{ChildId, FlowChild};
use super::constraints::MeasureSpec;
use super::margins::Margins;

// =========================================================================
// FlowAttrs
// =========================================================================

/// Construction-time style attributes.
///
/// Hosts that configure containers from serialized UI descriptions
/// deserialize this bag and hand it to [`FlowArranger::with_attrs`].
/// Unknown fields are ignored; the only attribute with a layout effect is
/// `default_margins`, applied to children pushed without explicit margins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowAttrs {
    /// Margins assigned to children that do not carry their own.
    pub default_margins: Margins,
}

// =========================================================================
// Placements
// =========================================================================

/// The result of an arrange pass: an insertion-ordered map from child
/// identity to destination box.
///
/// The arranger computes placements; the host commits them. Collapsed
/// children have no entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Placements {
    inner: IndexMap<ChildId, Rect>,
}

impl Placements {
    fn new() -> Self {
        Self {
            inner: IndexMap::new(),
        }
    }

    fn insert(&mut self, id: ChildId, bounds: Rect) {
        self.inner.insert(id, bounds);
    }

    /// Destination box for a child, if it received one.
    pub fn get(&self, id: ChildId) -> Option<Rect> {
        self.inner.get(&id).copied()
    }

    /// Iterate placements in child insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ChildId, Rect)> + '_ {
        self.inner.iter().map(|(id, rect)| (*id, *rect))
    }

    /// Number of placed children.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Union of all destination boxes, or `Rect::ZERO` when nothing was
    /// placed.
    pub fn bounds(&self) -> Rect {
        let mut iter = self.inner.values();
        let first = match iter.next() {
            Some(rect) => *rect,
            None => return Rect::ZERO,
        };
        iter.fold(first, |acc, rect| acc.union(rect))
    }
}

// =========================================================================
// FlowArranger
// =========================================================================

/// A row the arrange pass assigned children to. Rows index into the child
/// list, so membership is a contiguous range by construction.
struct Row {
    members: Range<usize>,
    height: f32,
}

/// A container that flows children into left-to-right rows, wrapping when
/// the accumulated width would exceed the available width.
pub struct FlowArranger {
    children: Vec<FlowChild>,
    attrs: FlowAttrs,
}

impl FlowArranger {
    /// Create an empty flow container with default attributes.
    pub fn new() -> Self {
        Self::with_attrs(FlowAttrs::default())
    }

    /// Create an empty flow container from construction attributes.
    pub fn with_attrs(attrs: FlowAttrs) -> Self {
        Self {
            children: Vec::new(),
            attrs,
        }
    }

    /// Add a child element.
    pub fn push(mut self, child: impl Into<FlowChild>) -> Self {
        let mut child = child.into();
        child.apply_default_margins(self.attrs.default_margins);
        self.children.push(child);
        self
    }

    /// The children in insertion order.
    pub fn children(&self) -> &[FlowChild] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Measure pass: delegate measurement to every child and report the
    /// container's desired size.
    ///
    /// All children are measured and contribute to the totals, collapsed
    /// ones included; visibility is respected only during [`arrange`].
    /// An `Exact` spec dictates the reported size on its axis, anything
    /// else reports the accumulated content size.
    ///
    /// [`arrange`]: Self::arrange
    pub fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        let available = width_spec.available();
        tracing::debug!(
            available,
            children = self.children.len(),
            "flow measure pass"
        );

        let mut row_width = 0.0f32;
        let mut row_height = 0.0f32;
        let mut total_width = 0.0f32;
        let mut total_height = 0.0f32;

        let count = self.children.len();
        for i in 0..count {
            let child = &mut self.children[i];
            child.run_measure(width_spec, height_spec);
            let child_width = child.outer_width();
            let child_height = child.outer_height();

            // Wrap when this child would overflow a row that already holds
            // something. A row's first member is accepted unconditionally,
            // even wider than the available width: children are never split.
            if row_width > 0.0 && row_width + child_width > available {
                total_width = total_width.max(row_width);
                total_height += row_height;
                row_width = child_width;
                row_height = child_height;
            } else {
                row_width += child_width;
                row_height = row_height.max(child_height);
            }

            // The trailing row never sees a break; close it by hand.
            if i + 1 == count {
                total_width = total_width.max(row_width);
                total_height += row_height;
            }
        }

        let size = Size::new(
            width_spec.resolve(total_width),
            height_spec.resolve(total_height),
        );
        tracing::debug!(width = size.width, height = size.height, "flow measured");
        size
    }

    /// Arrange pass: reassign every child to a row against the final
    /// container width and compute each destination box.
    ///
    /// Uses the sizes recorded by the latest [`measure`] call; nothing is
    /// re-measured. Collapsed children still occupy their row slot (they
    /// participate in break decisions and row heights) but receive no box
    /// and do not advance the cursor.
    ///
    /// [`measure`]: Self::measure
    pub fn arrange(&self, final_width: f32) -> Placements {
        let rows = self.assign_rows(final_width);

        let mut placements = Placements::new();
        let mut top = 0.0f32;
        for (index, row) in rows.iter().enumerate() {
            tracing::debug!(
                row = index,
                members = row.members.len(),
                height = row.height,
                "flow row"
            );

            let mut left = 0.0f32;
            for child in &self.children[row.members.clone()] {
                if child.visibility.is_collapsed() {
                    continue;
                }
                let margins = child.margins;
                let measured = child.measured();
                let origin = Point::new(left + margins.left, top + margins.top);
                placements.insert(child.id(), Rect::from_origin_size(origin, measured));
                left += measured.width + margins.horizontal();
            }
            top += row.height;
        }
        placements
    }

    /// Split the children into rows with the same break rule as `measure`,
    /// using the final width. Freshly built on every call.
    fn assign_rows(&self, final_width: f32) -> Vec<Row> {
        let mut rows = Vec::new();
        let mut row_start = 0usize;
        let mut row_width = 0.0f32;
        let mut row_height = 0.0f32;

        for (i, child) in self.children.iter().enumerate() {
            let child_width = child.outer_width();
            if row_width > 0.0 && row_width + child_width > final_width {
                rows.push(Row {
                    members: row_start..i,
                    height: row_height,
                });
                row_start = i;
                row_width = 0.0;
                row_height = 0.0;
            }
            row_width += child_width;
            row_height = row_height.max(child.outer_height());
        }

        // The trailing row is closed unconditionally. An empty child set
        // produces no rows at all.
        if !self.children.is_empty() {
            rows.push(Row {
                members: row_start..self.children.len(),
                height: row_height,
            });
        }
        rows
    }
}

impl Default for FlowArranger {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::child::Visibility;
    use crate::layout::element::BoxElement;

    fn boxes(sizes: &[(f32, f32)]) -> FlowArranger {
        sizes.iter().fold(FlowArranger::new(), |flow, &(w, h)| {
            flow.push(BoxElement::new(w, h))
        })
    }

    #[test]
    fn test_two_on_first_row_third_wraps() {
        // Width 100, three 40x10 children: two fit, the third wraps.
        let mut flow = boxes(&[(40.0, 10.0), (40.0, 10.0), (40.0, 10.0)]);
        let size = flow.measure(MeasureSpec::exact(100.0), MeasureSpec::unbounded());
        assert_eq!(size, Size::new(100.0, 20.0));

        let placements = flow.arrange(100.0);
        let ids: Vec<_> = flow.children().iter().map(|c| c.id()).collect();
        assert_eq!(placements.get(ids[0]).unwrap().edges(), (0.0, 0.0, 40.0, 10.0));
        assert_eq!(placements.get(ids[1]).unwrap().edges(), (40.0, 0.0, 80.0, 10.0));
        assert_eq!(placements.get(ids[2]).unwrap().edges(), (0.0, 10.0, 40.0, 20.0));
    }

    #[test]
    fn test_oversized_child_gets_own_row() {
        // A child wider than the container is never split.
        let mut flow = boxes(&[(80.0, 20.0)]);
        let size = flow.measure(MeasureSpec::at_most(50.0), MeasureSpec::unbounded());
        assert_eq!(size, Size::new(80.0, 20.0));

        let placements = flow.arrange(50.0);
        let id = flow.children()[0].id();
        assert_eq!(placements.get(id).unwrap().edges(), (0.0, 0.0, 80.0, 20.0));
    }

    #[test]
    fn test_empty_container() {
        let mut flow = FlowArranger::new();
        let size = flow.measure(MeasureSpec::unbounded(), MeasureSpec::unbounded());
        assert_eq!(size, Size::ZERO);
        assert!(flow.arrange(100.0).is_empty());
    }

    #[test]
    fn test_three_fit_fourth_wraps() {
        // Widths [30, 30, 30, 30] at width 100: 90 fits, the fourth wraps.
        let mut flow = boxes(&[(30.0, 10.0), (30.0, 10.0), (30.0, 10.0), (30.0, 10.0)]);
        let size = flow.measure(MeasureSpec::at_most(100.0), MeasureSpec::unbounded());
        assert_eq!(size, Size::new(90.0, 20.0));

        let placements = flow.arrange(100.0);
        let ids: Vec<_> = flow.children().iter().map(|c| c.id()).collect();
        assert_eq!(placements.get(ids[0]).unwrap().origin(), Point::new(0.0, 0.0));
        assert_eq!(placements.get(ids[1]).unwrap().origin(), Point::new(30.0, 0.0));
        assert_eq!(placements.get(ids[2]).unwrap().origin(), Point::new(60.0, 0.0));
        assert_eq!(placements.get(ids[3]).unwrap().origin(), Point::new(0.0, 10.0));
    }

    #[test]
    fn test_margins_expand_footprint() {
        // 40x10 children with 2px margins occupy 44x14 row slots.
        let margins = Margins::all(2.0);
        let mut flow = FlowArranger::new()
            .push(FlowChild::new(BoxElement::new(40.0, 10.0)).margins(margins))
            .push(FlowChild::new(BoxElement::new(40.0, 10.0)).margins(margins))
            .push(FlowChild::new(BoxElement::new(40.0, 10.0)).margins(margins));
        let size = flow.measure(MeasureSpec::exact(100.0), MeasureSpec::unbounded());
        // Rows: 88 wide and 44 wide, each 14 tall.
        assert_eq!(size, Size::new(100.0, 28.0));

        let placements = flow.arrange(100.0);
        let ids: Vec<_> = flow.children().iter().map(|c| c.id()).collect();
        assert_eq!(placements.get(ids[0]).unwrap().edges(), (2.0, 2.0, 42.0, 12.0));
        assert_eq!(placements.get(ids[1]).unwrap().edges(), (46.0, 2.0, 86.0, 12.0));
        assert_eq!(placements.get(ids[2]).unwrap().edges(), (2.0, 16.0, 42.0, 26.0));
    }

    #[test]
    fn test_exact_specs_override_content_size() {
        let mut flow = boxes(&[(40.0, 10.0)]);
        let size = flow.measure(MeasureSpec::exact(300.0), MeasureSpec::exact(200.0));
        assert_eq!(size, Size::new(300.0, 200.0));
    }

    #[test]
    fn test_row_height_is_max_of_members() {
        // Total height is the sum of per-row max heights.
        let mut flow = boxes(&[(40.0, 10.0), (40.0, 25.0), (40.0, 5.0)]);
        let size = flow.measure(MeasureSpec::at_most(100.0), MeasureSpec::unbounded());
        // Row 1 holds the first two (height 25), row 2 the third (height 5).
        assert_eq!(size.height, 30.0);

        let placements = flow.arrange(100.0);
        let third = flow.children()[2].id();
        assert_eq!(placements.get(third).unwrap().origin(), Point::new(0.0, 25.0));
    }

    #[test]
    fn test_no_child_spans_rows() {
        // Every child sits in exactly one row, and no row except a
        // single oversized member exceeds the width.
        let widths = [30.0f32, 55.0, 20.0, 90.0, 10.0, 45.0, 50.0];
        let sizes = widths.map(|w| (w, 10.0));
        let mut flow = boxes(&sizes);
        flow.measure(MeasureSpec::at_most(100.0), MeasureSpec::unbounded());
        let placements = flow.arrange(100.0);
        assert_eq!(placements.len(), widths.len());

        for (i, child) in flow.children().iter().enumerate() {
            let rect = placements.get(child.id()).unwrap();
            assert_eq!(rect.width, widths[i]);
            // A box never straddles a row boundary: its top is a whole
            // number of 10-tall rows down.
            assert_eq!(rect.y.rem_euclid(10.0), 0.0);
            // Only a row's first member may poke past the available width.
            assert!(rect.x == 0.0 || rect.right() <= 100.0);
        }
    }

    #[test]
    fn test_arrange_is_idempotent() {
        let mut flow = boxes(&[(40.0, 10.0), (40.0, 10.0), (40.0, 10.0)]);
        flow.measure(MeasureSpec::exact(100.0), MeasureSpec::unbounded());
        assert_eq!(flow.arrange(100.0), flow.arrange(100.0));
    }

    #[test]
    fn test_collapsed_child_skipped_in_placement() {
        // A collapsed child gets no box and no cursor advance, but its
        // row slot remains.
        let mut flow = FlowArranger::new()
            .push(FlowChild::new(BoxElement::new(40.0, 10.0)).collapsed())
            .push(FlowChild::new(BoxElement::new(40.0, 20.0)));
        flow.measure(MeasureSpec::exact(100.0), MeasureSpec::unbounded());
        let placements = flow.arrange(100.0);

        let collapsed = flow.children()[0].id();
        let visible = flow.children()[1].id();
        assert!(placements.get(collapsed).is_none());
        // The cursor did not advance past the collapsed child.
        assert_eq!(placements.get(visible).unwrap().origin(), Point::new(0.0, 0.0));
        assert_eq!(placements.len(), 1);
    }

    #[test]
    fn test_collapsed_child_still_counts_in_measure() {
        // Measurement ignores visibility; the asymmetry is deliberate.
        let mut flow = FlowArranger::new()
            .push(FlowChild::new(BoxElement::new(60.0, 10.0)).collapsed())
            .push(FlowChild::new(BoxElement::new(60.0, 10.0)));
        let size = flow.measure(MeasureSpec::at_most(100.0), MeasureSpec::unbounded());
        // Two rows even though one child is collapsed.
        assert_eq!(size, Size::new(60.0, 20.0));
    }

    #[test]
    fn test_collapsed_child_occupies_row_slot() {
        // A collapsed child still forces later children onto the next row.
        let mut flow = FlowArranger::new()
            .push(FlowChild::new(BoxElement::new(40.0, 10.0)))
            .push(FlowChild::new(BoxElement::new(40.0, 10.0)).collapsed())
            .push(FlowChild::new(BoxElement::new(40.0, 10.0)));
        flow.measure(MeasureSpec::exact(100.0), MeasureSpec::unbounded());
        let placements = flow.arrange(100.0);
        let third = flow.children()[2].id();
        assert_eq!(placements.get(third).unwrap().origin(), Point::new(0.0, 10.0));
    }

    #[test]
    fn test_hidden_child_still_placed() {
        let mut flow = FlowArranger::new()
            .push(FlowChild::new(BoxElement::new(40.0, 10.0)).visibility(Visibility::Hidden));
        flow.measure(MeasureSpec::unbounded(), MeasureSpec::unbounded());
        let placements = flow.arrange(100.0);
        assert_eq!(placements.len(), 1);
    }

    #[test]
    fn test_rearrange_at_narrower_final_width() {
        // Row membership from measurement is not reused: arranging at a
        // narrower final width produces more rows.
        let mut flow = boxes(&[(40.0, 10.0), (40.0, 10.0)]);
        let size = flow.measure(MeasureSpec::unbounded(), MeasureSpec::unbounded());
        assert_eq!(size, Size::new(80.0, 10.0));

        let placements = flow.arrange(50.0);
        let second = flow.children()[1].id();
        assert_eq!(placements.get(second).unwrap().origin(), Point::new(0.0, 10.0));
    }

    #[test]
    fn test_placements_bounds() {
        let mut flow = boxes(&[(40.0, 10.0), (40.0, 10.0), (40.0, 10.0)]);
        flow.measure(MeasureSpec::exact(100.0), MeasureSpec::unbounded());
        let placements = flow.arrange(100.0);
        assert_eq!(placements.bounds(), Rect::new(0.0, 0.0, 80.0, 20.0));
    }

    #[test]
    fn test_attrs_default_margins() {
        let attrs: FlowAttrs =
            serde_json::from_str(r#"{"default_margins": {"left": 2.0, "right": 2.0}}"#).unwrap();
        let mut flow = FlowArranger::with_attrs(attrs)
            .push(BoxElement::new(40.0, 10.0))
            .push(FlowChild::new(BoxElement::new(40.0, 10.0)).margins(Margins::ZERO));
        flow.measure(MeasureSpec::unbounded(), MeasureSpec::unbounded());
        let placements = flow.arrange(200.0);

        let first = flow.children()[0].id();
        let second = flow.children()[1].id();
        // Default margins applied to the first child only; the second opted
        // out explicitly.
        assert_eq!(placements.get(first).unwrap().origin(), Point::new(2.0, 0.0));
        assert_eq!(placements.get(second).unwrap().origin(), Point::new(44.0, 0.0));
    }
}
