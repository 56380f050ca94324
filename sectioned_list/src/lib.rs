// Copyright 2025 the Sectioned Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=sectioned_list --heading-base-level=0

//! Sectioned List: section/header position core for virtualized lists.
//!
//! Virtualized list renderers address their content through a single flat,
//! zero-based position space. This crate is the translation layer that lets
//! such a renderer display data partitioned into contiguous *sections*, each
//! preceded by a synthetic *header* slot that does not exist in the backing
//! per-section collections.
//!
//! The core concepts are:
//!
//! - [`SectionSource`]: the collaborator the embedding host implements. It
//!   supplies section and item counts on demand and paints headers and items
//!   into view holders; optional overrides customize view-type tags and
//!   per-item grid spans.
//! - [`HeaderIndex`]: an ordered map from flat header positions to section
//!   indices, rebuilt wholesale from the source's counts. It answers header
//!   membership tests and resolves flat positions to [`FlatEntry`] values.
//! - [`SectionedList`]: the adapter facade the renderer drives. It owns the
//!   source and the cached index and exposes total-count, view-type,
//!   grid-span, and bind entry points, plus reverse lookups
//!   ([`flatten`](SectionedList::flatten) /
//!   [`section_base`](SectionedList::section_base)) for section-aware
//!   scrolling.
//! - [`LayoutSlot`]: a capability trait for view holders whose layout
//!   metadata carries an "occupies full row" flag (staggered grids). The bind
//!   dispatcher forces the flag on for headers and off for items.
//!
//! This crate deliberately does **not** know about the renderer itself:
//! recycling, measuring, scrolling, and event handling stay in the host. The
//! host is responsible for:
//!
//! - Calling [`SectionedList::total_count`] whenever it needs the flat
//!   length (typically once per layout pass). Every call rebuilds the header
//!   index from the current counts; lookups are only trustworthy afterwards.
//! - Routing its per-position view-type, span, and bind callbacks through
//!   [`SectionedList::view_type`], [`SectionedList::span_size`], and
//!   [`SectionedList::bind`].
//!
//! Out-of-contract positions fail with an explicit [`SectionedListError`]
//! rather than being clamped to a guessed section, since silent clamping
//! would corrupt the position mapping invisibly.
//!
//! ## Example
//!
//! ```rust
//! use sectioned_list::{FlatEntry, LayoutSlot, SectionSource, SectionedList};
//!
//! struct Groups {
//!     groups: Vec<Vec<&'static str>>,
//! }
//!
//! #[derive(Default)]
//! struct Slot {
//!     text: String,
//! }
//!
//! // Plain holders carry no full-row flag; the defaults are no-ops.
//! impl LayoutSlot for Slot {}
//!
//! impl SectionSource for Groups {
//!     type Holder = Slot;
//!
//!     fn section_count(&self) -> usize {
//!         self.groups.len()
//!     }
//!
//!     fn item_count(&self, section: usize) -> usize {
//!         self.groups[section].len()
//!     }
//!
//!     fn bind_header(&mut self, holder: &mut Slot, section: usize) {
//!         holder.text = format!("Group {section}");
//!     }
//!
//!     fn bind_item(
//!         &mut self,
//!         holder: &mut Slot,
//!         section: usize,
//!         relative_index: usize,
//!         _absolute_index: usize,
//!     ) {
//!         holder.text = self.groups[section][relative_index].to_string();
//!     }
//! }
//!
//! let groups = Groups {
//!     groups: vec![vec!["ash", "birch"], vec![], vec!["cedar"]],
//! };
//! let mut list = SectionedList::new(groups);
//!
//! // Two non-empty sections: (2 + 1) + (1 + 1) flat positions.
//! assert_eq!(list.total_count(), 5);
//! assert!(list.is_header(0));
//! assert_eq!(
//!     list.resolve(4).unwrap(),
//!     FlatEntry::Item { section: 2, index: 0 }
//! );
//!
//! let mut slot = Slot::default();
//! list.bind(1, &mut slot).unwrap();
//! assert_eq!(slot.text, "ash");
//!
//! // Reverse lookup, e.g. for scrolling to a section's first item.
//! assert_eq!(list.flatten(2, 0).unwrap(), 4);
//! ```
//!
//! Headers for empty sections are off by default; enable them with
//! [`SectionedList::set_show_headers_for_empty_sections`] when empty groups
//! should still show their header.
//!
//! All operations are synchronous and single-owner: the rebuild takes
//! `&mut self`, so the borrow checker rules out a lookup racing a rebuild.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod error;
mod index;
mod source;

pub use adapter::SectionedList;
pub use error::SectionedListError;
pub use index::{FlatEntry, HeaderIndex, HeaderSlot};
pub use source::{LayoutSlot, SectionSource, view_type};

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{FlatEntry, LayoutSlot, SectionSource, SectionedList};

    struct Counts(Vec<usize>);

    impl SectionSource for Counts {
        type Holder = ();

        fn section_count(&self) -> usize {
            self.0.len()
        }

        fn item_count(&self, section: usize) -> usize {
            self.0[section]
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

    impl LayoutSlot for () {}

    /// Every flat position is exactly one of: a header, or a valid item of
    /// its section, across a sweep of count shapes and both flag settings.
    #[test]
    fn header_item_exclusivity_over_scenarios() {
        let scenarios: [&[usize]; 6] = [
            &[],
            &[0],
            &[2, 0, 3],
            &[0, 0, 0],
            &[1],
            &[3, 1, 0, 5, 2],
        ];
        for counts in scenarios {
            for show_empty in [false, true] {
                let mut list = SectionedList::new(Counts(counts.to_vec()));
                list.set_show_headers_for_empty_sections(show_empty);
                let total = list.total_count();

                let expected: usize = counts
                    .iter()
                    .map(|&n| if n > 0 || show_empty { n + 1 } else { 0 })
                    .sum();
                assert_eq!(total, expected, "count law for {counts:?}/{show_empty}");

                for position in 0..total {
                    match list.resolve(position).unwrap() {
                        FlatEntry::Header { .. } => {
                            assert!(list.is_header(position));
                        }
                        FlatEntry::Item { section, index } => {
                            assert!(!list.is_header(position));
                            assert!(
                                index < counts[section],
                                "item index {index} must be valid for section {section}"
                            );
                        }
                    }
                }
                assert!(list.resolve(total).is_err(), "one past the end must fail");
            }
        }
    }

    /// Round trip between the forward and reverse lookups, flag on and off.
    #[test]
    fn resolve_inverts_flatten() {
        for show_empty in [false, true] {
            let counts = vec![2_usize, 0, 3, 1];
            let mut list = SectionedList::new(Counts(counts.clone()));
            list.set_show_headers_for_empty_sections(show_empty);
            list.total_count();

            for (section, &n) in counts.iter().enumerate() {
                if n > 0 {
                    let base = list.section_base(section).unwrap();
                    assert!(list.is_header(base));
                }
                for item in 0..n {
                    let position = list.flatten(section, item).unwrap();
                    assert_eq!(
                        list.resolve(position).unwrap(),
                        FlatEntry::Item {
                            section,
                            index: item
                        }
                    );
                }
            }
        }
    }
}
