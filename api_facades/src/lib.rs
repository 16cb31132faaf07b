//! API Facades Layer
//!
//! Single entry point for consumers of obscure sequences.
//!
//! Each generator variant has its own constructor function returning a ready
//! [`Cursor`]; every transform is a method away through
//! [`SequenceTransforms`]:
//!
//! ```rust
//! use api_facades::*;
//!
//! let mut sequence = galois(4)?.obscure_bit(0).stagger(1);
//! while sequence.has_next() {
//!     let value = sequence.next_value()?;
//!     assert!(bit_length(&value) <= 3);
//! }
//! # Ok::<(), SequenceError>(())
//! ```

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Obscure Sequence Authors 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

pub mod sequence_facades;
pub mod slice_facades;

pub use sequence_facades::*;
pub use slice_facades::*;

// Re-export the types a consumer touches
pub use entities_sequence::{Cursor, CyclicGenerator, Limit, Lookahead, SequenceError};
pub use entities_utilities::{
    bit_length, combinadic, format_radix, insert_set_bit, is_bit_set, n_choose_k, remove_bit,
    weight, UInt,
};
pub use infrastructure_lfsr::{GaloisLfsr, PlainSequence, MAX_WIDTH};
pub use usecases_slicing::SlicedSequence;
pub use usecases_transforms::{
    BoxedSequence, ObscureBit, Permutation, SequenceTransforms, Staggered,
};
