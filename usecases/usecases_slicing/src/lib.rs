//! Use Cases Layer: Slicing
//!
//! Splits the full cycle of an `n`-bit generator into independent slices.
//! Each slice runs from one value with exactly `k` bits set (a boundary) up
//! to, but not including, the next boundary the generator reaches.
//!
//! Slices share no state, so they can be handed to separate workers and
//! consumed without coordination.
//!
//! Picking the boundary for each slice is inspired by
//! <https://math.stackexchange.com/questions/467212/generate-all-k-weight-n-bit-numbers-in-pseudo-random-sequence>,
//! with the combinadic doing the rank-to-pattern step.

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

pub mod sliced;

pub use sliced::SlicedSequence;
