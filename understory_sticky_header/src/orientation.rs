// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll orientation and reverse-layout queries.

use kurbo::{Insets, Rect, Size};

use crate::{ListHost, UnsupportedLayoutError};

/// Scroll axis of a list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Rows stack top to bottom; the leading edge is the top.
    Vertical,
    /// Rows stack left to right; the leading edge is the left.
    Horizontal,
}

// Axis helpers. "Main" is the scroll axis, "cross" the other one.
impl Orientation {
    pub(crate) const fn leading(self, rect: Rect) -> f64 {
        match self {
            Self::Vertical => rect.y0,
            Self::Horizontal => rect.x0,
        }
    }

    pub(crate) const fn trailing(self, rect: Rect) -> f64 {
        match self {
            Self::Vertical => rect.y1,
            Self::Horizontal => rect.x1,
        }
    }

    pub(crate) const fn cross_leading(self, rect: Rect) -> f64 {
        match self {
            Self::Vertical => rect.x0,
            Self::Horizontal => rect.y0,
        }
    }

    pub(crate) const fn leading_inset(self, insets: Insets) -> f64 {
        match self {
            Self::Vertical => insets.y0,
            Self::Horizontal => insets.x0,
        }
    }

    pub(crate) const fn trailing_inset(self, insets: Insets) -> f64 {
        match self {
            Self::Vertical => insets.y1,
            Self::Horizontal => insets.x1,
        }
    }

    pub(crate) const fn cross_leading_inset(self, insets: Insets) -> f64 {
        match self {
            Self::Vertical => insets.x0,
            Self::Horizontal => insets.y0,
        }
    }

    /// Size along the scroll axis.
    pub(crate) const fn extent(self, size: Size) -> f64 {
        match self {
            Self::Vertical => size.height,
            Self::Horizontal => size.width,
        }
    }

    /// Rectangle of `size` whose origin is `main` along the scroll axis and
    /// `cross` along the other.
    pub(crate) fn place(self, main: f64, cross: f64, size: Size) -> Rect {
        let (x, y) = match self {
            Self::Vertical => (cross, main),
            Self::Horizontal => (main, cross),
        };
        Rect::new(x, y, x + size.width, y + size.height)
    }

    /// Moves `rect` by `delta` along the scroll axis.
    pub(crate) fn shift(self, rect: Rect, delta: f64) -> Rect {
        match self {
            Self::Vertical => Rect::new(rect.x0, rect.y0 + delta, rect.x1, rect.y1 + delta),
            Self::Horizontal => Rect::new(rect.x0 + delta, rect.y0, rect.x1 + delta, rect.y1),
        }
    }
}

/// Layout strategy of a host list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutStrategy {
    /// A single column (or row) of items.
    Linear {
        /// Scroll axis.
        orientation: Orientation,
        /// Items are laid out back to front.
        reverse_layout: bool,
    },
    /// A uniform grid with `span_count` cells across.
    Grid {
        /// Scroll axis.
        orientation: Orientation,
        /// Items are laid out back to front.
        reverse_layout: bool,
        /// Cells per row (or column).
        span_count: usize,
    },
    /// A grid whose lanes are filled independently.
    StaggeredGrid {
        /// Scroll axis.
        orientation: Orientation,
        /// Items are laid out back to front.
        reverse_layout: bool,
        /// Number of lanes.
        span_count: usize,
    },
    /// Any other layout; sticky headers cannot reason about it.
    Custom {
        /// Name reported in [`UnsupportedLayoutError`].
        name: &'static str,
    },
}

/// Reports the scroll orientation and reverse-layout flag of a list.
pub trait OrientationProvider<L: ?Sized> {
    /// Scroll axis of `list`.
    fn orientation(&self, list: &L) -> Result<Orientation, UnsupportedLayoutError>;

    /// Whether `list` lays its items out back to front.
    fn is_reverse_layout(&self, list: &L) -> Result<bool, UnsupportedLayoutError>;
}

/// [`OrientationProvider`] backed by [`ListHost::layout_strategy`].
#[derive(Copy, Clone, Debug, Default)]
pub struct LayoutOrientationProvider;

impl<L: ListHost + ?Sized> OrientationProvider<L> for LayoutOrientationProvider {
    fn orientation(&self, list: &L) -> Result<Orientation, UnsupportedLayoutError> {
        match list.layout_strategy() {
            LayoutStrategy::Linear { orientation, .. }
            | LayoutStrategy::Grid { orientation, .. }
            | LayoutStrategy::StaggeredGrid { orientation, .. } => Ok(orientation),
            LayoutStrategy::Custom { name } => Err(UnsupportedLayoutError { layout: name }),
        }
    }

    fn is_reverse_layout(&self, list: &L) -> Result<bool, UnsupportedLayoutError> {
        match list.layout_strategy() {
            LayoutStrategy::Linear { reverse_layout, .. }
            | LayoutStrategy::Grid { reverse_layout, .. }
            | LayoutStrategy::StaggeredGrid { reverse_layout, .. } => Ok(reverse_layout),
            LayoutStrategy::Custom { name } => Err(UnsupportedLayoutError { layout: name }),
        }
    }
}
