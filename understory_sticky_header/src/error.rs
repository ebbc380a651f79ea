// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for header placement.

use thiserror::Error;

/// The host list uses a layout strategy that has no notion of orientation.
///
/// Sticky headers need a scroll axis and a reverse-layout flag. Only linear,
/// grid, and staggered-grid layouts provide them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("sticky headers need a linear, grid, or staggered-grid layout; got `{layout}`")]
pub struct UnsupportedLayoutError {
    /// Name of the rejected layout strategy.
    pub layout: &'static str,
}

/// Errors surfaced by [`HeaderPositionCalculator`](crate::HeaderPositionCalculator).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StickyHeaderError {
    /// Orientation or reverse-layout was requested from an unsupported layout.
    #[error(transparent)]
    UnsupportedLayout(#[from] UnsupportedLayoutError),
    /// An item spans more columns than the adapter reports, leaving no room
    /// to fold it onto a row.
    #[error(
        "item {position} spans {span_size} columns but the adapter only has {num_columns}"
    )]
    InvalidSpan {
        /// Adapter position of the offending item.
        position: usize,
        /// Span reported for `position`.
        span_size: usize,
        /// Column count reported by the adapter.
        num_columns: usize,
    },
}
