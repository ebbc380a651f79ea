// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixtures shared by the unit tests: a fake list, its rows, an adapter, and
//! header views.

use alloc::vec::Vec;

use kurbo::{Insets, Rect, Size};

use crate::{HeaderAdapter, HeaderCache, HeaderId, LayoutStrategy, ListHost, Orientation, View};

/// A rendered row bound to an adapter position.
#[derive(Clone, Debug)]
pub(crate) struct Row {
    pub(crate) position: Option<usize>,
    pub(crate) bounds: Rect,
    pub(crate) margins: Option<Insets>,
}

impl Row {
    pub(crate) fn new(position: usize, bounds: Rect) -> Self {
        Self {
            position: Some(position),
            bounds,
            margins: None,
        }
    }

    pub(crate) fn unbound(bounds: Rect) -> Self {
        Self {
            position: None,
            bounds,
            margins: None,
        }
    }

    pub(crate) fn with_margins(mut self, margins: Insets) -> Self {
        self.margins = Some(margins);
        self
    }
}

impl View for Row {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn margins(&self) -> Option<Insets> {
        self.margins
    }
}

/// A measured header view, laid out at the origin.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Header {
    pub(crate) size: Size,
    pub(crate) margins: Option<Insets>,
}

impl Header {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            margins: None,
        }
    }

    pub(crate) fn with_margins(mut self, margins: Insets) -> Self {
        self.margins = Some(margins);
        self
    }
}

impl View for Header {
    fn bounds(&self) -> Rect {
        self.size.to_rect()
    }

    fn margins(&self) -> Option<Insets> {
        self.margins
    }
}

/// Adapter over a fixed list of header ids.
#[derive(Clone, Debug, Default)]
pub(crate) struct TestAdapter {
    pub(crate) ids: Vec<HeaderId>,
    pub(crate) columns: usize,
    pub(crate) spans: Vec<usize>,
}

impl TestAdapter {
    pub(crate) fn new(ids: &[HeaderId]) -> Self {
        Self {
            ids: ids.to_vec(),
            columns: 1,
            spans: Vec::new(),
        }
    }

    pub(crate) fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub(crate) fn with_spans(mut self, spans: &[usize]) -> Self {
        self.spans = spans.to_vec();
        self
    }
}

impl HeaderAdapter for TestAdapter {
    fn item_count(&self) -> usize {
        self.ids.len()
    }

    fn header_id(&self, position: usize) -> HeaderId {
        self.ids.get(position).copied().unwrap_or(-1)
    }

    fn num_columns(&self) -> usize {
        self.columns
    }

    fn span_size(&self, position: usize) -> usize {
        self.spans.get(position).copied().unwrap_or(1)
    }
}

/// A list host with explicit children, padding, and layout.
#[derive(Clone, Debug)]
pub(crate) struct TestList {
    pub(crate) children: Vec<Row>,
    pub(crate) padding: Insets,
    pub(crate) clip_to_padding: bool,
    pub(crate) layout: LayoutStrategy,
}

impl TestList {
    pub(crate) fn new(layout: LayoutStrategy) -> Self {
        Self {
            children: Vec::new(),
            padding: Insets::ZERO,
            clip_to_padding: true,
            layout,
        }
    }

    pub(crate) fn vertical() -> Self {
        Self::new(LayoutStrategy::Linear {
            orientation: Orientation::Vertical,
            reverse_layout: false,
        })
    }

    pub(crate) fn horizontal() -> Self {
        Self::new(LayoutStrategy::Linear {
            orientation: Orientation::Horizontal,
            reverse_layout: false,
        })
    }

    /// Stacks rows of `extent` along the scroll axis, starting at `start`.
    pub(crate) fn with_rows(mut self, start: f64, extent: f64, positions: &[usize]) -> Self {
        let horizontal = matches!(
            self.layout,
            LayoutStrategy::Linear {
                orientation: Orientation::Horizontal,
                ..
            }
        );
        let mut leading = start;
        for &position in positions {
            let bounds = if horizontal {
                Rect::new(leading, 0.0, leading + extent, 100.0)
            } else {
                Rect::new(0.0, leading, 100.0, leading + extent)
            };
            self.children.push(Row::new(position, bounds));
            leading += extent;
        }
        self
    }

    pub(crate) fn with_padding(mut self, padding: Insets, clip_to_padding: bool) -> Self {
        self.padding = padding;
        self.clip_to_padding = clip_to_padding;
        self
    }
}

impl ListHost for TestList {
    type Child = Row;

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child_at(&self, index: usize) -> Option<&Row> {
        self.children.get(index)
    }

    fn adapter_position(&self, child: &Row) -> Option<usize> {
        child.position
    }

    fn padding(&self) -> Insets {
        self.padding
    }

    fn clip_to_padding(&self) -> bool {
        self.clip_to_padding
    }

    fn layout_strategy(&self) -> LayoutStrategy {
        self.layout
    }
}

/// Builds one `header` per distinct non-negative id in `adapter`.
pub(crate) fn cache_for(adapter: &TestAdapter, header: &Header) -> HeaderCache<Header> {
    let mut cache = HeaderCache::new();
    cache.prepare(adapter, 0..adapter.item_count(), |_, _| header.clone());
    cache
}
