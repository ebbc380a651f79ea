// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sticky headers over a scrolling contact list.
//!
//! This example shows how a host list plugs into `understory_sticky_header`:
//! - a `ListHost` exposing the rows currently on screen,
//! - a `HeaderAdapter` grouping contacts by initial,
//! - a `HeaderCache` holding one measured header per group,
//! - a draw pass per scroll offset, reporting placements to a listener.
//!
//! Run:
//! - `cargo run -p understory_sticky_header --example sticky_list`

use kurbo::{Insets, Rect, Size};
use understory_sticky_header::{
    HeaderAdapter, HeaderCache, HeaderId, HeaderPositionCalculator, LayoutOrientationProvider,
    LayoutStrategy, ListHost, Orientation, PositionChangeListener, StickyHeaderConfig, View,
};

const ROW_HEIGHT: f64 = 32.0;
const HEADER_HEIGHT: f64 = 24.0;
const VIEWPORT: f64 = 200.0;
const WIDTH: f64 = 240.0;

struct Contacts(Vec<&'static str>);

impl HeaderAdapter for Contacts {
    fn item_count(&self) -> usize {
        self.0.len()
    }

    fn header_id(&self, position: usize) -> HeaderId {
        self.0
            .get(position)
            .and_then(|name| name.bytes().next())
            .map_or(-1, HeaderId::from)
    }
}

struct RowView {
    position: usize,
    bounds: Rect,
}

impl View for RowView {
    fn bounds(&self) -> Rect {
        self.bounds
    }
}

struct HeaderView {
    label: char,
    size: Size,
}

impl View for HeaderView {
    fn bounds(&self) -> Rect {
        self.size.to_rect()
    }

    fn margins(&self) -> Option<Insets> {
        Some(Insets::new(8.0, 0.0, 8.0, 0.0))
    }
}

/// Rows realized for one scroll offset, like a recycler after layout.
struct ContactList {
    rows: Vec<RowView>,
}

impl ContactList {
    fn realize(item_count: usize, scroll_offset: f64) -> Self {
        let rows = (0..item_count)
            .map(|position| {
                let top = position as f64 * ROW_HEIGHT - scroll_offset;
                RowView {
                    position,
                    bounds: Rect::new(0.0, top, WIDTH, top + ROW_HEIGHT),
                }
            })
            .filter(|row| row.bounds.y1 > 0.0 && row.bounds.y0 < VIEWPORT)
            .collect();
        Self { rows }
    }
}

impl ListHost for ContactList {
    type Child = RowView;

    fn child_count(&self) -> usize {
        self.rows.len()
    }

    fn child_at(&self, index: usize) -> Option<&RowView> {
        self.rows.get(index)
    }

    fn adapter_position(&self, child: &RowView) -> Option<usize> {
        Some(child.position)
    }

    fn padding(&self) -> Insets {
        Insets::ZERO
    }

    fn clip_to_padding(&self) -> bool {
        true
    }

    fn layout_strategy(&self) -> LayoutStrategy {
        LayoutStrategy::Linear {
            orientation: Orientation::Vertical,
            reverse_layout: false,
        }
    }
}

/// Prints every placement; a renderer would draw the header here instead.
struct Printer;

impl PositionChangeListener<HeaderView> for Printer {
    fn header_position_changed(
        &mut self,
        _header_id: HeaderId,
        header: &HeaderView,
        position: usize,
        bounds: Rect,
    ) {
        println!(
            "  header {:?} for item {position:>2}: y = {:>6.1} .. {:>6.1}",
            header.label, bounds.y0, bounds.y1
        );
    }
}

fn main() {
    let contacts = Contacts(vec![
        "Ada", "Alan", "Anita", "Barbara", "Bjarne", "Brian", "Dennis", "Donald", "Edsger",
        "Frances", "Grace", "Guido",
    ]);

    let mut cache = HeaderCache::new();
    cache.prepare(&contacts, 0..contacts.item_count(), |_, position| HeaderView {
        label: contacts.0[position].chars().next().unwrap_or('?'),
        size: Size::new(WIDTH - 16.0, HEADER_HEIGHT),
    });
    let headers = cache.provider(&contacts);
    let calculator =
        HeaderPositionCalculator::new(&contacts, &headers, &LayoutOrientationProvider);
    let config = StickyHeaderConfig::default();

    for scroll_offset in [0.0, 40.0, 80.0, 90.0, 100.0, 200.0] {
        let list = ContactList::realize(contacts.item_count(), scroll_offset);
        println!("scroll offset {scroll_offset}:");
        if let Err(err) = calculator.place_headers_with(&list, &config, &mut Printer) {
            eprintln!("  placement failed: {err}");
        }
    }
}
