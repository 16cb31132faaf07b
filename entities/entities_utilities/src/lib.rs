//! Entities Layer: Utilities
//!
//! Provides utility functions:
//! - Wide bit pattern operations (weight, bit length, bit removal)
//! - Binomial coefficients and combinadics
//!
//! Every value in the workspace is an unbounded unsigned integer
//! (`malachite::Natural`), re-exported here as [`UInt`].

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

pub mod big;
pub mod combinatorics;

pub use big::{
    bit_length, format_radix, insert_set_bit, is_bit_set, low_mask, remove_bit, weight, UInt,
};
pub use combinatorics::{combinadic, n_choose_k};
