// Copyright 2025 the Sectioned Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The header index: an ordered map from flat header positions to sections.

use smallvec::SmallVec;

use crate::SectionedListError;

/// One synthetic header slot.
///
/// A section receives a header slot iff it has at least one item or the
/// empty-section flag is set at build time. The slot consumes exactly one
/// flat position, immediately before the section's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSlot {
    /// Flat position of the header.
    pub position: usize,
    /// Section the header introduces.
    pub section: usize,
}

/// What a flat position resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatEntry {
    /// The synthetic header of `section`.
    Header {
        /// Section the header introduces.
        section: usize,
    },
    /// An item of `section`.
    Item {
        /// Section the item belongs to.
        section: usize,
        /// Zero-based index of the item within its section.
        index: usize,
    },
}

impl FlatEntry {
    /// The section this entry belongs to.
    #[must_use]
    pub const fn section(&self) -> usize {
        match *self {
            Self::Header { section } | Self::Item { section, .. } => section,
        }
    }

    /// Returns `true` for header entries.
    #[must_use]
    pub const fn is_header(&self) -> bool {
        matches!(self, Self::Header { .. })
    }
}

/// Ordered mapping from flat header positions to section indices.
///
/// Built in one pass over the sections by [`HeaderIndex::build`]; slots are
/// recorded in strictly increasing flat-position order, so between two
/// consecutive slots `(p1, s1)` and `(p2, s2)` every flat position in
/// `p1 + 1..p2` is an item of `s1`.
///
/// Section sizes may change between renders, so an index is only trustworthy
/// until the counts it was built from change. Owners rebuild it on every
/// total-count query and replace the old value wholesale; it is never patched
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderIndex {
    slots: SmallVec<[HeaderSlot; 8]>,
    len: usize,
}

impl HeaderIndex {
    /// Creates an empty index. All lookups on it fail until it is replaced by
    /// a built one.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from per-section item counts.
    ///
    /// For each section in order: if it has items, or `show_empty_sections`
    /// is set, a header slot is recorded at the running flat offset and the
    /// offset advances by `item_count + 1`. Sections that qualify for no
    /// header contribute nothing and have no addressable flat positions.
    ///
    /// One `item_count` call is made per section.
    #[must_use]
    pub fn build(
        section_count: usize,
        mut item_count: impl FnMut(usize) -> usize,
        show_empty_sections: bool,
    ) -> Self {
        let mut slots = SmallVec::new();
        let mut offset = 0;
        for section in 0..section_count {
            let count = item_count(section);
            if count > 0 || show_empty_sections {
                slots.push(HeaderSlot {
                    position: offset,
                    section,
                });
                offset += count + 1;
            }
        }
        Self { slots, len: offset }
    }

    /// Total number of flat positions (headers plus items).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the index holds no flat positions.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of header slots.
    #[must_use]
    pub fn header_count(&self) -> usize {
        self.slots.len()
    }

    /// Iterates the header slots in flat-position order.
    pub fn headers(&self) -> impl Iterator<Item = HeaderSlot> + '_ {
        self.slots.iter().copied()
    }

    /// Returns `true` iff `position` is exactly a recorded header slot.
    #[must_use]
    pub fn is_header(&self, position: usize) -> bool {
        self.header_section(position).is_some()
    }

    /// The section whose header sits at `position`, if any.
    #[must_use]
    pub fn header_section(&self, position: usize) -> Option<usize> {
        self.slots
            .binary_search_by(|slot| slot.position.cmp(&position))
            .ok()
            .map(|i| self.slots[i].section)
    }

    /// Resolves a flat position to the header or item occupying it.
    ///
    /// The lookup finds the largest header position at or before `position`;
    /// items are addressed relative to it. Positions past the end fail with
    /// [`SectionedListError::PositionOutOfBounds`]. A position with no header
    /// at or before it fails with [`SectionedListError::StaleIndex`] instead
    /// of guessing a section; after a build, that can only happen when the
    /// index is empty or stale.
    pub fn resolve(&self, position: usize) -> Result<FlatEntry, SectionedListError> {
        if position >= self.len {
            return Err(SectionedListError::PositionOutOfBounds {
                position,
                len: self.len,
            });
        }
        let following = self.slots.partition_point(|slot| slot.position <= position);
        let Some(slot) = following.checked_sub(1).and_then(|i| self.slots.get(i)) else {
            return Err(SectionedListError::StaleIndex { position });
        };
        if slot.position == position {
            Ok(FlatEntry::Header {
                section: slot.section,
            })
        } else {
            Ok(FlatEntry::Item {
                section: slot.section,
                index: position - slot.position - 1,
            })
        }
    }
}
