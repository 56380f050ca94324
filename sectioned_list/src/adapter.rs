// Copyright 2025 the Sectioned Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The adapter facade: count, view-type, span, and bind dispatch.

use core::num::NonZeroUsize;

use crate::{FlatEntry, HeaderIndex, LayoutSlot, SectionSource, SectionedListError, view_type};

/// Translates between the host renderer's flat positions and a
/// [`SectionSource`]'s two-level (section, item) address space.
///
/// The renderer drives this type through [`total_count`], [`view_type`],
/// [`span_size`], and [`bind`]. Each total-count query rebuilds the cached
/// [`HeaderIndex`] from scratch, because section sizes may have changed since
/// the last layout pass; position lookups are only trustworthy after at least
/// one rebuild against the current counts.
///
/// All operations are synchronous and expect a single logical owner (the
/// thread owning the rendering surface). The rebuild takes `&mut self`, so
/// the borrow checker already rules out a lookup racing a rebuild; no internal
/// locking is performed.
///
/// [`total_count`]: Self::total_count
/// [`view_type`]: Self::view_type
/// [`span_size`]: Self::span_size
/// [`bind`]: Self::bind
#[derive(Debug)]
pub struct SectionedList<S: SectionSource> {
    source: S,
    index: HeaderIndex,
    show_headers_for_empty_sections: bool,
}

impl<S: SectionSource> SectionedList<S> {
    /// Creates an adapter over `source`. Headers for empty sections are off
    /// by default.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            index: HeaderIndex::new(),
            show_headers_for_empty_sections: false,
        }
    }

    /// Returns a shared reference to the source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns a mutable reference to the source.
    ///
    /// Mutations that change section or item counts leave the cached index
    /// stale until the next [`total_count`](Self::total_count) call.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Whether sections with zero items still receive a header slot.
    #[must_use]
    pub const fn shows_headers_for_empty_sections(&self) -> bool {
        self.show_headers_for_empty_sections
    }

    /// Sets whether sections with zero items still receive a header slot.
    ///
    /// Takes effect at the next rebuild.
    pub fn set_show_headers_for_empty_sections(&mut self, show: bool) {
        self.show_headers_for_empty_sections = show;
    }

    /// Returns the cached header index.
    #[must_use]
    pub fn header_index(&self) -> &HeaderIndex {
        &self.index
    }

    /// Rebuilds the header index and returns the total number of flat
    /// positions.
    ///
    /// The index is cleared and repopulated wholesale on every call; hosts
    /// are expected to call this whenever they need the flat length,
    /// typically once per layout pass.
    pub fn total_count(&mut self) -> usize {
        let source = &self.source;
        self.index = HeaderIndex::build(
            source.section_count(),
            |section| source.item_count(section),
            self.show_headers_for_empty_sections,
        );
        self.index.len()
    }

    /// Returns `true` iff `position` is a header slot.
    #[must_use]
    pub fn is_header(&self, position: usize) -> bool {
        self.index.is_header(position)
    }

    /// Resolves `position` against the cached index.
    pub fn resolve(&self, position: usize) -> Result<FlatEntry, SectionedListError> {
        self.index.resolve(position)
    }

    /// View-type tag for `position`.
    ///
    /// Headers delegate to [`SectionSource::header_view_type`], items to
    /// [`SectionSource::item_view_type`]. A delegate may return either its
    /// reserved sentinel (the default) or a tag `>= 0`; any other negative
    /// tag fails with [`SectionedListError::ViewTypeCollision`].
    pub fn view_type(&self, position: usize) -> Result<i32, SectionedListError> {
        let (tag, sentinel) = match self.index.resolve(position)? {
            FlatEntry::Header { section } => {
                (self.source.header_view_type(section), view_type::HEADER)
            }
            FlatEntry::Item { section, index } => (
                self.source.item_view_type(section, index, index),
                view_type::ITEM,
            ),
        };
        if tag < 0 && tag != sentinel {
            return Err(SectionedListError::ViewTypeCollision { tag });
        }
        Ok(tag)
    }

    /// Number of columns the view at `position` spans in a `columns`-wide
    /// grid.
    ///
    /// Headers always occupy the full row. Items delegate to
    /// [`SectionSource::row_span`]; the returned span is clamped into
    /// `1..=columns`.
    pub fn span_size(
        &self,
        position: usize,
        columns: NonZeroUsize,
    ) -> Result<usize, SectionedListError> {
        match self.index.resolve(position)? {
            FlatEntry::Header { .. } => Ok(columns.get()),
            FlatEntry::Item { section, index } => {
                let span = self.source.row_span(columns.get(), section, index, index);
                debug_assert!(
                    (1..=columns.get()).contains(&span),
                    "row_span must be within 1..={}; got {span}",
                    columns.get()
                );
                Ok(span.clamp(1, columns.get()))
            }
        }
    }

    /// Binds the view at `position` into `holder`.
    ///
    /// Headers force the holder's full-row flag on (when the holder supports
    /// the override) and delegate to [`SectionSource::bind_header`]; items
    /// force the flag off and delegate to [`SectionSource::bind_item`].
    pub fn bind(
        &mut self,
        position: usize,
        holder: &mut S::Holder,
    ) -> Result<(), SectionedListError>
    where
        S::Holder: LayoutSlot,
    {
        match self.index.resolve(position)? {
            FlatEntry::Header { section } => {
                if holder.supports_full_span_override() {
                    holder.set_full_span(true);
                }
                self.source.bind_header(holder, section);
            }
            FlatEntry::Item { section, index } => {
                if holder.supports_full_span_override() {
                    holder.set_full_span(false);
                }
                self.source.bind_item(holder, section, index, index);
            }
        }
        Ok(())
    }

    /// Flat position of `section`'s header, computed from live source counts.
    ///
    /// For a section that currently qualifies for no header slot (empty, flag
    /// off), this is the position its header would occupy. Useful for hosts
    /// that want to scroll to a section.
    pub fn section_base(&self, section: usize) -> Result<usize, SectionedListError> {
        let count = self.source.section_count();
        if section >= count {
            return Err(SectionedListError::SectionOutOfBounds { section, count });
        }
        let mut base = 0;
        for s in 0..section {
            let items = self.source.item_count(s);
            if items > 0 || self.show_headers_for_empty_sections {
                base += items + 1;
            }
        }
        Ok(base)
    }

    /// Flat position of item `item_index` of `section`, computed from live
    /// source counts. The `+ 1` skips the section's own header slot.
    pub fn flatten(
        &self,
        section: usize,
        item_index: usize,
    ) -> Result<usize, SectionedListError> {
        let base = self.section_base(section)?;
        debug_assert!(
            item_index < self.source.item_count(section),
            "item index {item_index} is not a current item of section {section}"
        );
        Ok(base + item_index + 1)
    }
}
