// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sticky_header --heading-base-level=0

//! Understory Sticky Header: section headers that float above a scrolling list.
//!
//! A sectioned list assigns every row a [`HeaderId`]. Contiguous rows sharing
//! an id form a header group, and each group is introduced by a header view.
//! While a group's first rows are scrolled past the list's leading edge, its
//! header stays *pinned* there. As the next group's header approaches, it pushes
//! the pinned one out of view.
//!
//! This crate answers the geometric questions behind that behavior:
//!
//! - [`HeaderPositionCalculator::has_new_header`]: does a row start a group?
//!   It folds grid cells onto their row and honors reverse layouts.
//! - [`HeaderPositionCalculator::has_sticky_header`]: is a row still at the
//!   leading edge, so its header should be pinned?
//! - [`HeaderPositionCalculator::header_bounds`]: where is a header drawn this
//!   frame, pinned or following its row, and pushed by the next header?
//! - [`HeaderPositionCalculator::item_is_obscured_by_header`] and friends:
//!   which rendered rows does the pinned header cover?
//! - [`HeaderPositionCalculator::place_headers`]: one complete draw pass over
//!   the rendered rows, reporting to a [`PositionChangeListener`].
//!
//! Like the rest of Understory, this crate does not know about widgets. Host
//! frameworks describe themselves through a few traits:
//!
//! - [`ListHost`]: rendered children, their adapter positions, padding, and the
//!   [`LayoutStrategy`] in use.
//! - [`HeaderAdapter`]: item count, header ids, and grid spans.
//! - [`HeaderProvider`]: the measured header view for a position. A
//!   [`HeaderCache`] keyed by header id is provided.
//! - [`OrientationProvider`]: scroll axis and reverse-layout flag, with
//!   [`LayoutOrientationProvider`] reading them from the [`LayoutStrategy`].
//!
//! Geometry is expressed with [`kurbo::Rect`] for bounds and [`kurbo::Insets`]
//! for margins and padding, all in the list's coordinate space.
//!
//! ## Minimal example
//!
//! Finding the rows that start a header group:
//!
//! ```rust
//! use understory_sticky_header::{
//!     HeaderAdapter, HeaderId, HeaderPositionCalculator, LayoutOrientationProvider,
//! };
//!
//! struct Sections(Vec<HeaderId>);
//!
//! impl HeaderAdapter for Sections {
//!     fn item_count(&self) -> usize {
//!         self.0.len()
//!     }
//!
//!     fn header_id(&self, position: usize) -> HeaderId {
//!         self.0[position]
//!     }
//! }
//!
//! let sections = Sections(vec![7, 7, 8, 8]);
//! let calculator = HeaderPositionCalculator::new(&sections, &(), &LayoutOrientationProvider);
//!
//! let leading: Vec<usize> = (0..4)
//!     .filter(|&i| calculator.has_new_header(i, false).unwrap())
//!     .collect();
//! assert_eq!(leading, [0, 2]);
//!
//! // Reversed lists lead each group with its last item.
//! let leading: Vec<usize> = (0..4)
//!     .filter(|&i| calculator.has_new_header(i, true).unwrap())
//!     .collect();
//! assert_eq!(leading, [1, 3]);
//! ```
//!
//! See `examples/sticky_list.rs` for a full draw pass against a small list host.
//!
//! ## Errors
//!
//! Layouts without an orientation ([`LayoutStrategy::Custom`]) surface
//! [`UnsupportedLayoutError`]. Items spanning more columns than the adapter
//! reports surface [`StickyHeaderError::InvalidSpan`]. Out-of-range
//! positions, missing views, and rows without headers are not errors. They
//! just produce "no header".
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo` and `thiserror`.
//! - `libm`: `no_std` builds relying on `libm` for `kurbo`'s float math.
//!
//! This crate is `no_std`. [`HeaderCache`] allocates through `hashbrown`.

#![no_std]

extern crate alloc;

mod cache;
mod calculator;
mod config;
mod dimension;
mod error;
mod host;
mod orientation;
mod placement;

#[cfg(test)]
mod test_util;

pub use cache::{CachedHeaders, HeaderCache};
pub use calculator::HeaderPositionCalculator;
pub use config::StickyHeaderConfig;
pub use dimension::DimensionCalculator;
pub use error::{StickyHeaderError, UnsupportedLayoutError};
pub use host::{HeaderAdapter, HeaderId, HeaderProvider, ListHost, NO_HEADER, View};
pub use orientation::{LayoutOrientationProvider, LayoutStrategy, Orientation, OrientationProvider};
pub use placement::{HeaderPlacement, HeaderPlacements, PositionChangeListener};
