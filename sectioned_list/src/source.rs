// Copyright 2025 the Sectioned Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator traits supplied by the embedding host.

/// Reserved view-type tags.
///
/// Collaborator overrides are constrained to non-negative tags, so the two
/// negative sentinels can never collide with them.
pub mod view_type {
    /// Default tag for header positions.
    pub const HEADER: i32 = -2;
    /// Default tag for item positions.
    pub const ITEM: i32 = -1;
}

/// The data and binding callbacks behind a [`SectionedList`].
///
/// Implementations own the actual sectioned data. The core never stores
/// per-section state; it calls [`section_count`] and [`item_count`] on demand,
/// so counts may change freely between [`total_count`] rebuilds.
///
/// `item_view_type`, `bind_item`, and `row_span` receive the item's index both
/// as `relative_index` and `absolute_index`. The two values are always equal;
/// both are passed so implementations can name whichever reads better at the
/// call site.
///
/// [`SectionedList`]: crate::SectionedList
/// [`section_count`]: Self::section_count
/// [`item_count`]: Self::item_count
/// [`total_count`]: crate::SectionedList::total_count
pub trait SectionSource {
    /// The bindable view holder handed to [`bind_header`] and [`bind_item`].
    ///
    /// [`bind_header`]: Self::bind_header
    /// [`bind_item`]: Self::bind_item
    type Holder: ?Sized;

    /// Number of sections.
    fn section_count(&self) -> usize;

    /// Number of items in `section`, for `section` in `0..section_count()`.
    fn item_count(&self, section: usize) -> usize;

    /// Paints `holder` as the header of `section`.
    fn bind_header(&mut self, holder: &mut Self::Holder, section: usize);

    /// Paints `holder` as an item of `section`.
    fn bind_item(
        &mut self,
        holder: &mut Self::Holder,
        section: usize,
        relative_index: usize,
        absolute_index: usize,
    );

    /// View-type tag for the header of `section`.
    ///
    /// Overrides must return a tag `>= 0`; the default is the reserved
    /// [`view_type::HEADER`] sentinel.
    fn header_view_type(&self, section: usize) -> i32 {
        let _ = section;
        view_type::HEADER
    }

    /// View-type tag for an item.
    ///
    /// Overrides must return a tag `>= 0`; the default is the reserved
    /// [`view_type::ITEM`] sentinel.
    fn item_view_type(&self, section: usize, relative_index: usize, absolute_index: usize) -> i32 {
        let _ = (section, relative_index, absolute_index);
        view_type::ITEM
    }

    /// Number of grid columns an item occupies, in `1..=full_span`.
    ///
    /// Only consulted for column-based grid layouts, via
    /// [`span_size`](crate::SectionedList::span_size). Headers never reach
    /// this method; they always span the full row.
    fn row_span(
        &self,
        full_span: usize,
        section: usize,
        relative_index: usize,
        absolute_index: usize,
    ) -> usize {
        let _ = (full_span, section, relative_index, absolute_index);
        1
    }
}

/// Layout metadata capability of a view holder.
///
/// Staggered-grid layouts carry an "occupies full row" flag on each holder's
/// layout metadata. Rather than probing for a specific layout engine, the bind
/// dispatcher asks the holder whether it supports the override and, if so,
/// forces the flag on for headers and off for items before delegating the
/// bind. Holders managed by linear or fixed-grid layouts keep the defaults
/// (no capability, no-op setter).
pub trait LayoutSlot {
    /// Whether this holder's layout metadata carries a full-row flag.
    fn supports_full_span_override(&self) -> bool {
        false
    }

    /// Sets the full-row flag. Only called when
    /// [`supports_full_span_override`](Self::supports_full_span_override)
    /// returns `true`; implementations are responsible for reapplying mutated
    /// metadata to their view.
    fn set_full_span(&mut self, full_span: bool) {
        let _ = full_span;
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutSlot, SectionSource, view_type};

    struct Bare;

    impl SectionSource for Bare {
        type Holder = ();

        fn section_count(&self) -> usize {
            1
        }

        fn item_count(&self, _section: usize) -> usize {
            3
        }

        fn bind_header(&mut self, _holder: &mut (), _section: usize) {}

        fn bind_item(
            &mut self,
            _holder: &mut (),
            _section: usize,
            _relative_index: usize,
            _absolute_index: usize,
        ) {
        }
    }

    impl LayoutSlot for Bare {}

    #[test]
    fn default_view_types_are_the_reserved_sentinels() {
        let source = Bare;
        assert_eq!(source.header_view_type(0), view_type::HEADER);
        assert_eq!(source.item_view_type(0, 1, 1), view_type::ITEM);
        assert_ne!(view_type::HEADER, view_type::ITEM);
        assert!(view_type::HEADER < 0, "sentinels must stay negative");
        assert!(view_type::ITEM < 0, "sentinels must stay negative");
    }

    #[test]
    fn default_row_span_is_one_column() {
        let source = Bare;
        assert_eq!(source.row_span(4, 0, 2, 2), 1);
    }

    #[test]
    fn layout_slot_defaults_are_inert() {
        let mut slot = Bare;
        assert!(!slot.supports_full_span_override());
        // Default setter is a no-op; just make sure it is callable.
        slot.set_full_span(true);
    }
}
