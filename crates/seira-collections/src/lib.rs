// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Seira Collections
//!
//! Growable sequence containers and the in-place sorting routines that
//! operate on them.
//!
//! The centerpiece is [`List`], a contiguous, owning, automatically-growing
//! sequence with O(1) random access, amortized O(1) append, O(n) arbitrary
//! insertion and removal, and three selectable in-place sorts (insertion
//! sort with an optional ordering predicate, quicksort with an optional key
//! extractor, and a stable mergesort).
//!
//! All containers in this crate are defined for single-threaded, sequential
//! use. They hold no interior mutability, so `Send` and `Sync` follow from
//! the element type, but concurrent *mutation* requires external
//! synchronization by the caller.

#![warn(missing_docs)]

pub mod error;
pub mod list;

pub use error::ListError;
pub use list::List;
