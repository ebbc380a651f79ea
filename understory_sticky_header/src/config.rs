// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw-pass configuration.

/// Options for [`HeaderPositionCalculator::place_headers`](crate::HeaderPositionCalculator::place_headers).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StickyHeaderConfig {
    /// Pin the header of the topmost group to the list's leading edge.
    ///
    /// When `false`, every header scrolls with the row that starts its group.
    pub sticky: bool,
}

impl StickyHeaderConfig {
    /// Sticky headers enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self { sticky: true }
    }

    /// Returns a copy with [`sticky`](Self::sticky) set.
    #[must_use]
    pub const fn with_sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }
}

impl Default for StickyHeaderConfig {
    fn default() -> Self {
        Self::new()
    }
}
