// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A header-view cache keyed by header id.
//!
//! Every row in a header group shares one live header view. [`HeaderCache`]
//! stores those views, and [`CachedHeaders`] exposes them as a
//! [`HeaderProvider`] by routing positions through the adapter.
//!
//! The cache does not build views on its own. Hosts measure a view for a
//! header id (typically against the list's width) and hand it to
//! [`HeaderCache::get_or_insert_with`] or [`HeaderCache::prepare`] before
//! the draw pass.

use core::fmt;

use hashbrown::HashMap;

use crate::{HeaderAdapter, HeaderId, HeaderProvider, View};

/// At most one header view per header id.
pub struct HeaderCache<V> {
    headers: HashMap<HeaderId, V>,
}

impl<V> Default for HeaderCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for HeaderCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderCache")
            .field("len", &self.headers.len())
            .finish_non_exhaustive()
    }
}

impl<V> HeaderCache<V> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            headers: HashMap::new(),
        }
    }

    /// Returns the cached view for `header_id`.
    #[must_use]
    pub fn get(&self, header_id: HeaderId) -> Option<&V> {
        self.headers.get(&header_id)
    }

    /// Returns the cached view for `header_id`, building it first if needed.
    pub fn get_or_insert_with(
        &mut self,
        header_id: HeaderId,
        build: impl FnOnce(HeaderId) -> V,
    ) -> &V {
        self.headers
            .entry(header_id)
            .or_insert_with(|| build(header_id))
    }

    /// Ensures a view exists for the header of every position in `positions`.
    ///
    /// `build` receives the header id and the first position that needed it.
    /// Positions without a header, or outside the adapter, are skipped.
    pub fn prepare<A: HeaderAdapter + ?Sized>(
        &mut self,
        adapter: &A,
        positions: impl IntoIterator<Item = usize>,
        mut build: impl FnMut(HeaderId, usize) -> V,
    ) {
        let count = adapter.item_count();
        for position in positions {
            if position >= count {
                continue;
            }
            let header_id = adapter.header_id(position);
            if header_id < 0 {
                continue;
            }
            self.headers
                .entry(header_id)
                .or_insert_with(|| build(header_id, position));
        }
    }

    /// Drops every cached view, for example after the data set changed.
    pub fn invalidate(&mut self) {
        self.headers.clear();
    }

    /// Number of cached views.
    #[must_use]
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Returns `true` if no views are cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Pairs this cache with `adapter` to form a [`HeaderProvider`].
    #[must_use]
    pub fn provider<'a, A: HeaderAdapter + ?Sized>(
        &'a self,
        adapter: &'a A,
    ) -> CachedHeaders<'a, A, V> {
        CachedHeaders {
            cache: self,
            adapter,
        }
    }
}

/// [`HeaderProvider`] resolving positions through an adapter into a [`HeaderCache`].
pub struct CachedHeaders<'a, A: ?Sized, V> {
    cache: &'a HeaderCache<V>,
    adapter: &'a A,
}

impl<A: ?Sized, V> fmt::Debug for CachedHeaders<'_, A, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedHeaders")
            .field("cache", self.cache)
            .finish_non_exhaustive()
    }
}

impl<A: ?Sized, V> Clone for CachedHeaders<'_, A, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: ?Sized, V> Copy for CachedHeaders<'_, A, V> {}

impl<L, A, V> HeaderProvider<L> for CachedHeaders<'_, A, V>
where
    L: ?Sized,
    A: HeaderAdapter + ?Sized,
    V: View,
{
    type Header = V;

    fn header(&self, _list: &L, position: usize) -> Option<&V> {
        if position >= self.adapter.item_count() {
            return None;
        }
        let header_id = self.adapter.header_id(position);
        if header_id < 0 {
            return None;
        }
        self.cache.get(header_id)
    }
}
