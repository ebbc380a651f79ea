// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One decoration draw pass: which rows get a header, and where it goes.

use kurbo::Rect;
use smallvec::SmallVec;

use crate::{
    HeaderAdapter, HeaderId, HeaderPositionCalculator, HeaderProvider, ListHost,
    OrientationProvider, StickyHeaderConfig, StickyHeaderError,
};

/// A header placed during a draw pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderPlacement {
    /// Header group the header belongs to.
    pub header_id: HeaderId,
    /// Adapter position of the row the header was placed against.
    pub position: usize,
    /// Where to draw the header, in list coordinates.
    pub bounds: Rect,
    /// Whether the header belongs to the row at the list's leading edge.
    ///
    /// With [`StickyHeaderConfig::sticky`] set, this is the pinned header.
    pub sticky: bool,
}

/// Placements from one pass. Lists rarely show more than a few headers at once.
pub type HeaderPlacements = SmallVec<[HeaderPlacement; 4]>;

/// Observer of header positions.
///
/// Called once per placed header on every pass, whether or not the bounds
/// changed since the previous pass; implementations that care about changes
/// must track them.
pub trait PositionChangeListener<H: ?Sized> {
    /// `header` for `header_id` was placed at `bounds` against `position`.
    fn header_position_changed(
        &mut self,
        header_id: HeaderId,
        header: &H,
        position: usize,
        bounds: Rect,
    );
}

struct Unobserved;

impl<H: ?Sized> PositionChangeListener<H> for Unobserved {
    fn header_position_changed(&mut self, _: HeaderId, _: &H, _: usize, _: Rect) {}
}

impl<A, P, O> HeaderPositionCalculator<'_, A, P, O>
where
    A: HeaderAdapter + ?Sized,
    P: ?Sized,
    O: ?Sized,
{
    /// Places headers for the rows currently rendered in `list`.
    ///
    /// See [`place_headers_with`](Self::place_headers_with).
    ///
    /// # Errors
    ///
    /// Same as [`place_headers_with`](Self::place_headers_with).
    pub fn place_headers<L>(
        &self,
        list: &L,
        config: &StickyHeaderConfig,
    ) -> Result<HeaderPlacements, StickyHeaderError>
    where
        L: ListHost + ?Sized,
        P: HeaderProvider<L>,
        O: OrientationProvider<L>,
    {
        self.place_headers_with(list, config, &mut Unobserved)
    }

    /// Places headers for the rows currently rendered in `list`, reporting
    /// each one to `listener`.
    ///
    /// Children are visited in layout order. A child gets a header if it
    /// still sits at the list's leading edge (the pinned header) or if it
    /// starts a new header group. Each header group is placed at most once
    /// per pass, so the cells of one grid row share a single header while a
    /// later run of the same id gets its own. Children without a resolved
    /// position or without a header view are skipped.
    ///
    /// # Errors
    ///
    /// [`StickyHeaderError::UnsupportedLayout`] if the list's orientation is
    /// unknown, or [`StickyHeaderError::InvalidSpan`] from the group scan.
    pub fn place_headers_with<L, N>(
        &self,
        list: &L,
        config: &StickyHeaderConfig,
        listener: &mut N,
    ) -> Result<HeaderPlacements, StickyHeaderError>
    where
        L: ListHost + ?Sized,
        P: HeaderProvider<L>,
        O: OrientationProvider<L>,
        N: PositionChangeListener<P::Header> + ?Sized,
    {
        let orientation = self.orientation_provider.orientation(list)?;
        let reverse_layout = self.orientation_provider.is_reverse_layout(list)?;

        let mut placements = HeaderPlacements::new();
        for index in 0..list.child_count() {
            let Some(item) = list.child_at(index) else {
                continue;
            };
            let Some(position) = list.adapter_position(item) else {
                continue;
            };

            let sticky = self.has_sticky_header(Some(item), orientation, position);
            if !sticky && !self.has_new_header(position, reverse_layout)? {
                continue;
            }
            let header_id = self.adapter.header_id(position);
            if placements
                .iter()
                .any(|placed| self.same_group(placed, position, header_id))
            {
                continue;
            }
            let Some(header) = self.header_provider.header(list, position) else {
                continue;
            };

            let bounds =
                self.header_bounds(list, Some(header), Some(item), sticky, config.sticky)?;
            log::trace!("header {header_id} for item {position} at {bounds:?}");
            listener.header_position_changed(header_id, header, position, bounds);
            placements.push(HeaderPlacement {
                header_id,
                position,
                bounds,
                sticky,
            });
        }
        Ok(placements)
    }

    /// Returns `true` if `position` belongs to the same contiguous run of
    /// `header_id` as an already placed header.
    fn same_group(
        &self,
        placed: &HeaderPlacement,
        position: usize,
        header_id: HeaderId,
    ) -> bool {
        if placed.header_id != header_id {
            return false;
        }
        let (low, high) = if placed.position <= position {
            (placed.position, position)
        } else {
            (position, placed.position)
        };
        (low..=high).all(|between| self.adapter.header_id(between) == header_id)
    }
}
