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

//! Defines the error types reported by the containers in this crate.

use std::fmt;

/// An error produced by a [`List`](crate::List) operation.
///
/// Container operations have exactly one failure mode: addressing a logical
/// position that does not currently exist. The error carries the offending
/// index and the length of the list at the time of the call so the caller
/// can diagnose the access without re-querying the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// An index argument fell outside the valid logical range for the
    /// requested operation.
    ///
    /// Negative indices are always rejected. Reads and removals require
    /// `0 <= index < len`; insertions allow `index == len` as well. Positional
    /// reads on an empty list report the position that was addressed.
    OutOfRange {
        /// The index that was requested.
        index: isize,
        /// The number of elements the list held when the access was made.
        len: usize,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::OutOfRange { index, len } => {
                write!(f, "index {index} is out of range for a list of length {len}")
            }
        }
    }
}

impl std::error::Error for ListError {}
