//! Margins and layout metrics.

use serde::{Deserialize, Serialize};

// Layout metrics for monospace label estimation, 14px base size.
pub const CHAR_WIDTH: f32 = 8.4;
pub const LINE_HEIGHT: f32 = 18.0;

/// Outer margins around a child element.
///
/// Margins belong to the space a child occupies in its row: a child's
/// footprint during row assembly is its measured size plus its margins,
/// while the committed bounds cover the measured size only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Margins {
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Create margins with explicit values for each side.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Uniform margins on all sides.
    pub fn all(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// Symmetric margins (horizontal, vertical).
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            top: vertical,
            right: horizontal,
            bottom: vertical,
        }
    }

    /// Total horizontal margin.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical margin.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric() {
        let m = Margins::symmetric(4.0, 2.0);
        assert_eq!(m.horizontal(), 8.0);
        assert_eq!(m.vertical(), 4.0);
        assert_eq!(m.left, 4.0);
        assert_eq!(m.top, 2.0);
    }

    #[test]
    fn test_deserialize_partial() {
        let m: Margins = serde_json::from_str(r#"{"left": 3.0, "right": 5.0}"#).unwrap();
        assert_eq!(m, Margins::new(3.0, 0.0, 5.0, 0.0));
    }
}
