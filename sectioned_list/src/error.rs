// Copyright 2025 the Sectioned Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for out-of-contract lookups.

/// Errors reported by position lookups and collaborator delegation.
///
/// All variants are local-usage errors: the caller passed a value outside
/// the documented contract, or consulted the header index before the first
/// [`total_count`] rebuild. None of them are retryable; this layer performs
/// no I/O.
///
/// Flat positions and section indices are `usize`, so the "negative index"
/// failure modes of the wider contract are unrepresentable here and only the
/// upper-bound checks remain.
///
/// [`total_count`]: crate::SectionedList::total_count
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SectionedListError {
    /// A flat position at or past the end of the indexed range.
    #[error("flat position {position} is out of bounds for {len} flat positions")]
    PositionOutOfBounds {
        /// The offending flat position.
        position: usize,
        /// Total number of flat positions in the index.
        len: usize,
    },

    /// No header slot exists at or before the queried flat position.
    ///
    /// A freshly built, non-empty index always places a header at position 0,
    /// so this means the index is empty or stale. The lookup fails explicitly
    /// rather than inventing a section for the position.
    #[error("no header slot at or before flat position {position}; header index is empty or stale")]
    StaleIndex {
        /// The flat position that could not be resolved.
        position: usize,
    },

    /// A section index outside `0..section_count` passed to a reverse lookup.
    #[error("section {section} is out of bounds for {count} sections")]
    SectionOutOfBounds {
        /// The offending section index.
        section: usize,
        /// Number of sections reported by the source.
        count: usize,
    },

    /// A view-type override returned a negative tag.
    ///
    /// Negative tags are reserved for the built-in header/item sentinels;
    /// collaborator overrides must return values `>= 0`.
    #[error("collaborator view type {tag} collides with the reserved sentinel range")]
    ViewTypeCollision {
        /// The offending view-type tag.
        tag: i32,
    },
}
