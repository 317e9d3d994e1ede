// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attributed Fragment stores an owned run of text together with attributes applied to byte
//! ranges of that text.
//!
//! Fragments are built independently and then concatenated with [`Fragment::append`], which
//! shifts the attribute ranges of the appended fragment so that they keep covering the same
//! characters in the combined text.
//!
//! ```
//! use attributed_fragment::Fragment;
//!
//! let mut hello = Fragment::new("Hello");
//! hello.apply_to_all("bold");
//! let mut world = Fragment::new(", world");
//! world.apply_to_all("italic");
//!
//! hello.append(world);
//! assert_eq!(hello.as_str(), "Hello, world");
//! let ranges: Vec<_> = hello.attributes_iter().map(|(r, _)| r.clone()).collect();
//! assert_eq!(ranges, [0..5, 5..12]);
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod fragment;

pub use crate::fragment::Fragment;
