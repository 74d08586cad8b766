//! Measurement constraints.
//!
//! The host describes each axis with a `MeasureSpec`: an extent plus a mode
//! saying how binding that extent is. Specs flow down from the host during
//! the measure pass; children report sizes influenced by, but not
//! necessarily equal to, the offered space.

/// How binding a spec's extent is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecMode {
    /// The final size on this axis is dictated by the host.
    Exact,
    /// The extent is an upper bound; the container's computed size is used.
    AtMost,
    /// No bound at all; the container's computed size is used.
    #[default]
    Unbounded,
}

/// A single-axis measurement constraint `(size, mode)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureSpec {
    pub size: f32,
    pub mode: SpecMode,
}

impl MeasureSpec {
    /// Spec offering infinite extent.
    pub const UNBOUNDED: Self = Self {
        size: f32::INFINITY,
        mode: SpecMode::Unbounded,
    };

    /// The host dictates this exact extent.
    #[inline]
    pub fn exact(size: f32) -> Self {
        debug_assert!(!size.is_nan(), "NaN extent in measure spec");
        Self {
            size,
            mode: SpecMode::Exact,
        }
    }

    /// The extent is available but not mandatory.
    #[inline]
    pub fn at_most(size: f32) -> Self {
        debug_assert!(!size.is_nan(), "NaN extent in measure spec");
        Self {
            size,
            mode: SpecMode::AtMost,
        }
    }

    /// No bound on this axis.
    #[inline]
    pub fn unbounded() -> Self {
        Self::UNBOUNDED
    }

    /// Whether the host dictates the final size on this axis.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.mode == SpecMode::Exact
    }

    /// The space available to lay content into.
    ///
    /// `Unbounded` offers infinite extent regardless of the stored size.
    #[inline]
    pub fn available(&self) -> f32 {
        match self.mode {
            SpecMode::Exact | SpecMode::AtMost => self.size,
            SpecMode::Unbounded => f32::INFINITY,
        }
    }

    /// Resolve the reported size: an `Exact` spec overrides the computed
    /// desired size, anything else passes it through.
    #[inline]
    pub fn resolve(&self, desired: f32) -> f32 {
        if self.is_exact() {
            self.size
        } else {
            desired
        }
    }
}

impl Default for MeasureSpec {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}
