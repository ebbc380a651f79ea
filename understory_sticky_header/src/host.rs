// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traits describing the host list, its adapter, and its header views.
//!
//! The host framework owns all of these. Header placement only reads them.

use kurbo::{Insets, Rect};

use crate::LayoutStrategy;

/// Identifier shared by every row in one header group.
///
/// Negative values mean "this row has no header".
pub type HeaderId = i64;

/// Header id used for rows outside the adapter's range.
///
/// It never equals a valid (non-negative) header id.
pub const NO_HEADER: HeaderId = -1;

/// A laid-out view: a rendered row or a measured header.
pub trait View {
    /// Bounds in the list's coordinate space.
    ///
    /// Header views are usually laid out at the origin, so their bounds are
    /// `(0, 0, width, height)`.
    fn bounds(&self) -> Rect;

    /// Margins reserved around the view, if it carries margin metadata.
    fn margins(&self) -> Option<Insets> {
        None
    }
}

impl<V: View + ?Sized> View for &V {
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn margins(&self) -> Option<Insets> {
        (**self).margins()
    }
}

/// The item source of a list with sectioned headers.
pub trait HeaderAdapter {
    /// Number of items in the list.
    fn item_count(&self) -> usize;

    /// Header id owning the item at `position`, negative for none.
    fn header_id(&self, position: usize) -> HeaderId;

    /// Number of columns in a grid layout.
    fn num_columns(&self) -> usize {
        1
    }

    /// Number of columns the item at `position` occupies.
    fn span_size(&self, _position: usize) -> usize {
        1
    }
}

impl<A: HeaderAdapter + ?Sized> HeaderAdapter for &A {
    fn item_count(&self) -> usize {
        (**self).item_count()
    }

    fn header_id(&self, position: usize) -> HeaderId {
        (**self).header_id(position)
    }

    fn num_columns(&self) -> usize {
        (**self).num_columns()
    }

    fn span_size(&self, position: usize) -> usize {
        (**self).span_size(position)
    }
}

/// Resolves the header view for an adapter position.
///
/// Implementations must return the *same* view (by address) for every
/// position that shares a header id; obscured-row checks compare headers by
/// identity.
pub trait HeaderProvider<L: ?Sized> {
    /// Header view type.
    type Header: View;

    /// Returns the header view for the group owning `position`, if any.
    fn header(&self, list: &L, position: usize) -> Option<&Self::Header>;
}

/// Read access to the rows a list currently has on screen.
pub trait ListHost {
    /// Rendered child view type.
    type Child: View;

    /// Number of currently rendered children.
    fn child_count(&self) -> usize;

    /// Rendered child at `index`, in layout order.
    fn child_at(&self, index: usize) -> Option<&Self::Child>;

    /// Adapter position bound to `child`, or `None` while it is unresolved
    /// (for example, during an item removal animation).
    fn adapter_position(&self, child: &Self::Child) -> Option<usize>;

    /// Padding of the list.
    fn padding(&self) -> Insets;

    /// Whether the layout clips children to the padded area.
    fn clip_to_padding(&self) -> bool;

    /// Layout strategy currently in use.
    fn layout_strategy(&self) -> LayoutStrategy;
}
