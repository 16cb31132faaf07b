//! Infrastructure Layer: Cyclic Generators
//!
//! Provides the concrete bit-pattern generators the sequence transforms run on.
//!
//! ## Overview
//!
//! Both generators implement [`CyclicGenerator`](entities_sequence::CyclicGenerator):
//! they walk every nonzero value of a fixed width exactly once, can start from
//! a seed, and can stop at the next value of a given weight.
//!
//! ## Generators
//!
//! - **[`galois`](galois/index.html)**: Galois linear feedback shift register over
//!   arbitrarily wide values, with several primitive tap sets per width.
//!   Not a CSPRNG.
//! - **[`plain`](plain/index.html)**: Completely unobscured counter `1, 2, 3, ...`,
//!   useful for seeing what a transform does.
//!
//! ## See Also
//!
//! - [`usecases_slicing`](../usecases_slicing/index.html): drives a second generator to pick slice boundaries

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

mod common;
mod taps;

pub mod galois;
pub mod plain;

pub use galois::GaloisLfsr;
pub use plain::PlainSequence;
pub use taps::{tap_set_count, MAX_WIDTH};
