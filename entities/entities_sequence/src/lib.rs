//! Entities Layer: Sequences
//!
//! Provides the contract every sequence in the workspace honours:
//! - [`Cursor`]: pull-based access with a single value of lookahead
//! - [`Lookahead`]: the cursor over any plain iterator of values
//! - [`Limit`]: a bounded view over another cursor
//! - [`CyclicGenerator`]: the capability a bit-pattern generator offers
//! - [`SequenceError`]: construction and contract errors
//!
//! Transforms and generators live in outer layers and only depend on the
//! types defined here.

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

pub mod cursor;
pub mod error;
pub mod generator;

pub use cursor::{Cursor, Limit, Lookahead};
pub use error::SequenceError;
pub use generator::CyclicGenerator;
pub use entities_utilities::UInt;
