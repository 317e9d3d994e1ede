// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

/// An owned block of text with attributes applied to byte ranges within it.
///
/// Attributes may overlap and are kept in the order they were applied.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment<Attr: Debug> {
    text: String,
    attributes: Vec<(Range<usize>, Attr)>,
}

impl<Attr: Debug> Default for Fragment<Attr> {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl<Attr: Debug> Fragment<Attr> {
    /// Create a `Fragment` with no attributes applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributes: Vec::new(),
        }
    }

    /// Borrow the underlying text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the length of the text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Apply an `attribute` to the whole text.
    ///
    /// On an empty fragment this records an inert `0..0` attribute.
    pub fn apply_to_all(&mut self, attribute: Attr) {
        self.attributes.push((0..self.text.len(), attribute));
    }

    /// Append `other` to the end of this fragment.
    ///
    /// The attribute ranges of `other` are shifted by the current length so they keep covering
    /// the same characters.
    pub fn append(&mut self, other: Self) {
        let offset = self.text.len();
        self.text.push_str(&other.text);
        self.attributes.extend(
            other
                .attributes
                .into_iter()
                .map(|(range, attr)| (range.start + offset..range.end + offset, attr)),
        );
    }

    /// Iterate over all attributes and the ranges they apply to.
    ///
    /// Attributes are yielded in the order they were applied.
    pub fn attributes_iter(&self) -> impl ExactSizeIterator<Item = (&Range<usize>, &Attr)> {
        self.attributes.iter().map(|(range, attr)| (range, attr))
    }

    /// Get an iterator over the attributes that apply at the given byte `index`.
    pub fn attributes_at(&self, index: usize) -> impl Iterator<Item = &Attr> {
        self.attributes
            .iter()
            .filter(move |(range, _)| range.contains(&index))
            .map(|(_, attr)| attr)
    }

    /// Returns the number of attribute spans applied to the text.
    pub fn attributes_len(&self) -> usize {
        self.attributes.len()
    }
}
