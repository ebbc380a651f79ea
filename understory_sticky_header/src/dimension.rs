// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Margin extraction for rows and headers.

use kurbo::Insets;

use crate::View;

/// Reads the margin box around a view.
#[derive(Copy, Clone, Debug, Default)]
pub struct DimensionCalculator;

impl DimensionCalculator {
    /// Returns the margins of `view`.
    ///
    /// Missing views and views without margin metadata yield [`Insets::ZERO`].
    #[must_use]
    pub fn margins<V: View + ?Sized>(&self, view: Option<&V>) -> Insets {
        view.and_then(|view| view.margins()).unwrap_or(Insets::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Insets, Rect};

    use super::DimensionCalculator;
    use crate::test_util::Row;

    #[test]
    fn missing_view_has_no_margins() {
        assert_eq!(DimensionCalculator.margins::<Row>(None), Insets::ZERO);
    }

    #[test]
    fn view_without_margin_metadata_has_no_margins() {
        let row = Row::new(0, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(DimensionCalculator.margins(Some(&row)), Insets::ZERO);
    }

    #[test]
    fn margins_are_reported_per_side() {
        let row = Row::new(0, Rect::new(0.0, 0.0, 10.0, 10.0))
            .with_margins(Insets::new(1.0, 2.0, 3.0, 4.0));
        let margins = DimensionCalculator.margins(Some(&row));
        assert_eq!(margins.x0, 1.0);
        assert_eq!(margins.y0, 2.0);
        assert_eq!(margins.x1, 3.0);
        assert_eq!(margins.y1, 4.0);
    }
}
