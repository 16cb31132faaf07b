//! Use Cases Layer: Sequence Transforms
//!
//! Provides composable decorators over any sequence of wide values:
//!
//! - **[`obscure`](obscure/index.html)**: drop values with a chosen bit clear and
//!   delete that bit from the rest, narrowing the domain by one bit
//! - **[`permutation`](permutation/index.html)**: resolve an integer into a window
//!   size and a lexicographic permutation of that size
//! - **[`stagger`](stagger/index.html)**: reorder a sequence window by window
//!
//! ## Architecture
//!
//! Each transform owns its source and is itself a plain iterator, so it can
//! feed the next transform. [`SequenceTransforms`] wraps the results in a
//! [`Lookahead`] cursor, giving them `has_next`/`next_value`/`discard`/`limit`.
//!
//! ## See Also
//!
//! - [`entities_sequence`](../entities_sequence/index.html): the cursor contract

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

pub mod obscure;
pub mod permutation;
pub mod stagger;

pub use obscure::ObscureBit;
pub use permutation::Permutation;
pub use stagger::Staggered;

use entities_sequence::Lookahead;
use entities_utilities::UInt;

/// Type-erased cursor, for pipelines assembled at run time
pub type BoxedSequence<'a> = Lookahead<Box<dyn Iterator<Item = UInt> + Send + 'a>>;

/// Transform shortcuts available on every sequence of values
///
/// Implemented for all `Iterator<Item = UInt>`, which includes every cursor
/// in the workspace, so transforms chain freely:
///
/// ```rust
/// use entities_sequence::{Cursor, Lookahead};
/// use entities_utilities::UInt;
/// use usecases_transforms::SequenceTransforms;
///
/// let source = Lookahead::new((1u32..=15).map(UInt::from));
/// let mut narrowed = source.obscure_bit(0).stagger(1);
/// assert!(narrowed.has_next());
/// ```
pub trait SequenceTransforms: Iterator<Item = UInt> + Sized {
    /// Remove `bit` (0 -> lowest); see [`ObscureBit`]
    fn obscure_bit(self, bit: u64) -> Lookahead<ObscureBit<Self>> {
        Lookahead::new(ObscureBit::new(self, bit))
    }

    /// Reorder windows by the `permutation`'th permutation; see [`Staggered`]
    fn stagger(self, permutation: u64) -> Lookahead<Staggered<Self>> {
        Lookahead::new(Staggered::new(self, permutation))
    }

    /// Erase the concrete type
    fn boxed<'a>(self) -> BoxedSequence<'a>
    where
        Self: Send + 'a,
    {
        let source: Box<dyn Iterator<Item = UInt> + Send + 'a> = Box::new(self);
        Lookahead::new(source)
    }
}

impl<I: Iterator<Item = UInt>> SequenceTransforms for I {}
