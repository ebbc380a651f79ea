// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Header position and visibility calculations.

use core::ptr;

use kurbo::Rect;

use crate::{
    DimensionCalculator, HeaderAdapter, HeaderProvider, ListHost, NO_HEADER, Orientation,
    OrientationProvider, StickyHeaderError, View,
};

/// Computes where sticky headers go and which rows they cover.
///
/// The calculator holds no state of its own. Every query reads the borrowed
/// adapter, header provider, and orientation provider, plus the list passed
/// in, so it must not run while the host is relaying out its children.
#[derive(Debug)]
pub struct HeaderPositionCalculator<'a, A: ?Sized, P: ?Sized, O: ?Sized> {
    pub(crate) adapter: &'a A,
    pub(crate) header_provider: &'a P,
    pub(crate) orientation_provider: &'a O,
    dimension_calculator: DimensionCalculator,
}

impl<'a, A, P, O> HeaderPositionCalculator<'a, A, P, O>
where
    A: HeaderAdapter + ?Sized,
    P: ?Sized,
    O: ?Sized,
{
    /// Creates a calculator over the given collaborators.
    #[must_use]
    pub const fn new(adapter: &'a A, header_provider: &'a P, orientation_provider: &'a O) -> Self {
        Self {
            adapter,
            header_provider,
            orientation_provider,
            dimension_calculator: DimensionCalculator,
        }
    }

    /// Returns `true` if the row at `position` should show a pinned header.
    ///
    /// That is the case while the row's leading edge has not scrolled past
    /// its own leading margin and the row belongs to a header group. A row
    /// that is not rendered (`item` is `None`) counts as scrolled to the
    /// origin.
    #[must_use]
    pub fn has_sticky_header<V: View + ?Sized>(
        &self,
        item: Option<&V>,
        orientation: Orientation,
        position: usize,
    ) -> bool {
        let (offset, margin) = match item {
            Some(item) => (
                orientation.leading(item.bounds()),
                orientation.leading_inset(self.dimension_calculator.margins(Some(item))),
            ),
            None => (-1.0, 0.0),
        };
        offset <= margin && self.adapter.header_id(position) >= 0
    }

    /// Returns `true` if the item at `position` starts a header group.
    ///
    /// The neighbour consulted is the previous item, or the next one when the
    /// layout is reversed. Items without a header and positions outside the
    /// adapter never start a group.
    ///
    /// In multi-column layouts every item is first folded onto the first
    /// column of its row, so all cells of a leading row report a new header.
    ///
    /// # Errors
    ///
    /// [`StickyHeaderError::InvalidSpan`] if an item spans more columns than
    /// the adapter has.
    pub fn has_new_header(
        &self,
        position: usize,
        reverse_layout: bool,
    ) -> Result<bool, StickyHeaderError> {
        let Some(position) = self.first_in_row(position)? else {
            return Ok(false);
        };

        let header_id = self.adapter.header_id(position);
        if header_id < 0 {
            return Ok(false);
        }

        let neighbor = if reverse_layout {
            position.checked_add(1)
        } else {
            position.checked_sub(1)
        };
        let neighbor_header_id = neighbor
            .filter(|&neighbor| !self.out_of_bounds(neighbor))
            .map_or(NO_HEADER, |neighbor| self.adapter.header_id(neighbor));

        // Reversed lists lead with the last item. Unlike the forward case
        // this is not folded onto a row start.
        let first_position = if reverse_layout {
            self.adapter.item_count().saturating_sub(1)
        } else {
            0
        };

        Ok(position == first_position || header_id != neighbor_header_id)
    }

    /// Folds `position` onto the first column of its grid row.
    ///
    /// Returns `None` if any position visited lies outside the adapter. Each
    /// step moves to a strictly smaller position, so this terminates.
    fn first_in_row(&self, mut position: usize) -> Result<Option<usize>, StickyHeaderError> {
        loop {
            if self.out_of_bounds(position) {
                return Ok(None);
            }
            let num_columns = self.adapter.num_columns();
            let span_size = self.adapter.span_size(position);
            let row_width = num_columns.saturating_add(1).saturating_sub(span_size);
            if row_width == 0 {
                log::warn!(
                    "item {position} spans {span_size} columns but the adapter only has {num_columns}"
                );
                return Err(StickyHeaderError::InvalidSpan {
                    position,
                    span_size,
                    num_columns,
                });
            }
            let column = position % row_width;
            if column == 0 {
                return Ok(Some(position));
            }
            position -= column;
        }
    }

    fn out_of_bounds(&self, position: usize) -> bool {
        position >= self.adapter.item_count()
    }
}

impl<A, P, O> HeaderPositionCalculator<'_, A, P, O>
where
    A: HeaderAdapter + ?Sized,
    P: ?Sized,
    O: ?Sized,
{
    /// Returns `true` if `header` covers any currently rendered row of its
    /// own group.
    ///
    /// # Errors
    ///
    /// [`StickyHeaderError::UnsupportedLayout`] if the list's orientation is
    /// unknown.
    pub fn header_obscuring_some_item<L>(
        &self,
        list: &L,
        header: &P::Header,
    ) -> Result<bool, StickyHeaderError>
    where
        L: ListHost + ?Sized,
        P: HeaderProvider<L>,
        O: OrientationProvider<L>,
    {
        let orientation = self.orientation_provider.orientation(list)?;
        Ok((0..list.child_count())
            .filter_map(|index| list.child_at(index))
            .any(|child| self.item_is_obscured_by_header(list, child, header, orientation)))
    }

    /// Computes where `header` should be drawn this frame.
    ///
    /// The header is stacked immediately before `first_visible` along the
    /// scroll axis. With `sticky` set it is clamped so it never scrolls past
    /// the list's padded origin, and when it is also the first (pinned)
    /// header it gets pushed out by the next group's header as that one
    /// approaches. Pushing moves the whole rectangle, so both edges along the
    /// scroll axis (`y0`/`y1`, or `x0`/`x1` when horizontal) shift and the
    /// header keeps its measured size.
    ///
    /// If either view is missing the header's own margin box is returned.
    ///
    /// # Errors
    ///
    /// [`StickyHeaderError::UnsupportedLayout`] if the list's orientation is
    /// unknown, or [`StickyHeaderError::InvalidSpan`] from the group scan.
    pub fn header_bounds<L>(
        &self,
        list: &L,
        header: Option<&P::Header>,
        first_visible: Option<&L::Child>,
        is_first_header: bool,
        sticky: bool,
    ) -> Result<Rect, StickyHeaderError>
    where
        L: ListHost + ?Sized,
        P: HeaderProvider<L>,
        O: OrientationProvider<L>,
    {
        let orientation = self.orientation_provider.orientation(list)?;
        let (Some(header), Some(first_visible)) = (header, first_visible) else {
            let margins = self.dimension_calculator.margins(header);
            return Ok(Rect::new(margins.x0, margins.y0, margins.x1, margins.y1));
        };

        let bounds = self.default_header_bounds(list, header, first_visible, orientation, sticky);
        if !(sticky && is_first_header) {
            return Ok(bounds);
        }
        let Some((next_item, next_header)) = self.pushing_header(list, header)? else {
            return Ok(bounds);
        };
        Ok(self.translate_header_with_next_header(
            list,
            orientation,
            bounds,
            header,
            next_item,
            next_header,
        ))
    }

    fn default_header_bounds<L>(
        &self,
        list: &L,
        header: &P::Header,
        first_visible: &L::Child,
        orientation: Orientation,
        sticky: bool,
    ) -> Rect
    where
        L: ListHost + ?Sized,
        P: HeaderProvider<L>,
    {
        let header_margins = self.dimension_calculator.margins(Some(header));
        let item_margins = self.dimension_calculator.margins(Some(first_visible));
        let item_bounds = first_visible.bounds();
        let header_size = header.bounds().size();

        let cross = orientation.cross_leading(item_bounds)
            - orientation.cross_leading_inset(item_margins)
            + orientation.cross_leading_inset(header_margins);
        let mut main = orientation.leading(item_bounds)
            - orientation.leading_inset(item_margins)
            - orientation.extent(header_size)
            - orientation.trailing_inset(header_margins);
        if sticky {
            main = main
                .max(list_leading(list, orientation) + orientation.leading_inset(header_margins));
        }
        orientation.place(main, cross, header_size)
    }

    /// Returns `true` if the next group's header is close enough to start
    /// pushing `sticky_header` out of view.
    ///
    /// # Errors
    ///
    /// [`StickyHeaderError::UnsupportedLayout`] if the list's orientation is
    /// unknown, or [`StickyHeaderError::InvalidSpan`] from the group scan.
    pub fn is_sticky_header_being_pushed_offscreen<L>(
        &self,
        list: &L,
        sticky_header: &P::Header,
    ) -> Result<bool, StickyHeaderError>
    where
        L: ListHost + ?Sized,
        P: HeaderProvider<L>,
        O: OrientationProvider<L>,
    {
        Ok(self.pushing_header(list, sticky_header)?.is_some())
    }

    /// Finds the first unobscured row and its header if that header overlaps
    /// `sticky_header`.
    fn pushing_header<'l, L>(
        &'l self,
        list: &'l L,
        sticky_header: &P::Header,
    ) -> Result<Option<(&'l L::Child, &'l P::Header)>, StickyHeaderError>
    where
        L: ListHost + ?Sized,
        P: HeaderProvider<L>,
        O: OrientationProvider<L>,
    {
        let Some(item) = self.first_view_unobscured_by_header(list, sticky_header)? else {
            return Ok(None);
        };
        let Some(position) = list.adapter_position(item) else {
            return Ok(None);
        };

        let reverse_layout = self.orientation_provider.is_reverse_layout(list)?;
        if position == 0 || !self.has_new_header(position, reverse_layout)? {
            return Ok(None);
        }
        let Some(next_header) = self.header_provider.header(list, position) else {
            return Ok(None);
        };

        let orientation = self.orientation_provider.orientation(list)?;
        let next_margins = self.dimension_calculator.margins(Some(next_header));
        let sticky_margins = self.dimension_calculator.margins(Some(sticky_header));

        let next_leading = orientation.leading(item.bounds())
            - orientation.trailing_inset(next_margins)
            - orientation.extent(next_header.bounds().size())
            - orientation.leading_inset(next_margins);
        // Measured from the raw padding, whether or not the list clips to it.
        let sticky_trailing = orientation.leading_inset(list.padding())
            + orientation.trailing(sticky_header.bounds())
            + orientation.leading_inset(sticky_margins)
            + orientation.trailing_inset(sticky_margins);

        Ok((next_leading < sticky_trailing).then_some((item, next_header)))
    }

    /// Moves `bounds` back along the scroll axis so the current header ends
    /// where `next_header` begins.
    ///
    /// Both the leading and trailing edges move by the same amount.
    fn translate_header_with_next_header<L>(
        &self,
        list: &L,
        orientation: Orientation,
        bounds: Rect,
        current_header: &P::Header,
        next_item: &L::Child,
        next_header: &P::Header,
    ) -> Rect
    where
        L: ListHost + ?Sized,
        P: HeaderProvider<L>,
    {
        let next_margins = self.dimension_calculator.margins(Some(next_header));
        let sticky_margins = self.dimension_calculator.margins(Some(current_header));

        let sticky_leading = list_leading(list, orientation)
            + orientation.leading_inset(sticky_margins)
            + orientation.trailing_inset(sticky_margins);
        let shift = orientation.leading(next_item.bounds())
            - orientation.extent(next_header.bounds().size())
            - orientation.trailing_inset(next_margins)
            - orientation.leading_inset(next_margins)
            - orientation.extent(current_header.bounds().size())
            - sticky_leading;

        if shift < sticky_leading {
            log::debug!("pinned header pushed by {shift} along {orientation:?}");
            orientation.shift(bounds, shift)
        } else {
            bounds
        }
    }

    /// Returns the first rendered row, in layout order, that `header` does
    /// not cover.
    ///
    /// # Errors
    ///
    /// [`StickyHeaderError::UnsupportedLayout`] if the list's orientation is
    /// unknown.
    pub fn first_view_unobscured_by_header<'l, L>(
        &self,
        list: &'l L,
        header: &P::Header,
    ) -> Result<Option<&'l L::Child>, StickyHeaderError>
    where
        L: ListHost + ?Sized,
        P: HeaderProvider<L>,
        O: OrientationProvider<L>,
    {
        let reverse_layout = self.orientation_provider.is_reverse_layout(list)?;
        let orientation = self.orientation_provider.orientation(list)?;
        let count = list.child_count();
        let unobscured = |index: usize| {
            list.child_at(index).filter(|child| {
                !self.item_is_obscured_by_header(list, child, header, orientation)
            })
        };
        Ok(if reverse_layout {
            (0..count).rev().find_map(unobscured)
        } else {
            (0..count).find_map(unobscured)
        })
    }

    /// Returns `true` if `header` covers the leading edge of `item`.
    ///
    /// Only rows whose own header is `header` (by identity) can be covered;
    /// a smaller header trailing the pinned one must not be conflated with
    /// it. Rows with an unresolved position are never covered.
    pub fn item_is_obscured_by_header<L>(
        &self,
        list: &L,
        item: &L::Child,
        header: &P::Header,
        orientation: Orientation,
    ) -> bool
    where
        L: ListHost + ?Sized,
        P: HeaderProvider<L>,
    {
        let Some(position) = list.adapter_position(item) else {
            return false;
        };
        match self.header_provider.header(list, position) {
            Some(current) if ptr::eq(current, header) => {}
            _ => return false,
        }

        let header_margins = self.dimension_calculator.margins(Some(header));
        let item_margins = self.dimension_calculator.margins(Some(item));
        let item_leading =
            orientation.leading(item.bounds()) - orientation.leading_inset(item_margins);
        let header_trailing = list_leading(list, orientation)
            + orientation.trailing(header.bounds())
            + orientation.trailing_inset(header_margins)
            + orientation.leading_inset(header_margins);
        item_leading < header_trailing
    }
}

/// The list's origin along the scroll axis: its leading padding when the
/// layout clips to padding, zero otherwise.
fn list_leading<L: ListHost + ?Sized>(list: &L, orientation: Orientation) -> f64 {
    if list.clip_to_padding() {
        orientation.leading_inset(list.padding())
    } else {
        0.0
    }
}
