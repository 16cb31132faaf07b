//! Tap Table
//!
//! Primitive feedback polynomials over GF(2), up to four per width. Each set
//! lists the exponents of its nonzero terms, highest first; the `x^0` term is
//! implied. The first set of each width is the default.
//!
//! Every entry has order `2^width - 1`, so a register built from it runs
//! through all nonzero values before repeating. Proving that needs the full
//! factorisation of `2^width - 1`; widths where that is out of reach have no
//! entry, so the table has gaps above 192 bits (193 and 211 among them).
//! 1024 bits is covered through the Fermat factors of `2^1024 - 1`.

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

/// Widest register with a known tap set
pub const MAX_WIDTH: u64 = 1024;

// Indexed by width - 1; an empty entry is a width with no proven taps.
static TAP_SETS: [&[&[u16]]; MAX_WIDTH as usize] = [
    &[&[1]],
    &[&[2, 1]],
    &[&[3, 2], &[3, 1]],
    &[&[4, 3], &[4, 1]],
    &[&[5, 3], &[5, 2], &[5, 4, 3, 2], &[5, 4, 3, 1]],
    &[&[6, 5], &[6, 1], &[6, 5, 4, 1], &[6, 5, 3, 2]],
    &[&[7, 6], &[7, 4], &[7, 3], &[7, 1]],
    &[&[8, 7, 6, 1], &[8, 7, 5, 3], &[8, 7, 3, 2], &[8, 7, 2, 1]],
    &[&[9, 5], &[9, 4], &[9, 8, 7, 2], &[9, 8, 6, 5]],
    &[&[10, 7], &[10, 3], &[10, 9, 8, 5], &[10, 9, 7, 6]],
    &[&[11, 9], &[11, 2], &[11, 10, 9, 7], &[11, 10, 9, 5]],
    &[&[12, 11, 10, 4], &[12, 11, 10, 2], &[12, 11, 8, 6], &[12, 11, 7, 4]],
    &[&[13, 12, 11, 8], &[13, 12, 11, 2], &[13, 12, 11, 1], &[13, 12, 10, 9]],
    &[&[14, 13, 12, 2], &[14, 13, 11, 9], &[14, 13, 11, 4], &[14, 13, 10, 8]],
    &[&[15, 14], &[15, 11], &[15, 8], &[15, 7]],
    &[&[16, 15, 13, 4], &[16, 15, 12, 10], &[16, 15, 12, 1], &[16, 15, 10, 4]],
    &[&[17, 14], &[17, 12], &[17, 11], &[17, 6]],
    &[&[18, 11], &[18, 7], &[18, 17, 16, 13], &[18, 17, 16, 10]],
    &[&[19, 18, 17, 14], &[19, 18, 17, 13], &[19, 18, 17, 5], &[19, 18, 16, 10]],
    &[&[20, 17], &[20, 3], &[20, 19, 16, 14], &[20, 19, 16, 2]],
    &[&[21, 19], &[21, 2], &[21, 20, 19, 16], &[21, 20, 19, 13]],
    &[&[22, 21], &[22, 1], &[22, 21, 20, 11], &[22, 21, 20, 7]],
    &[&[23, 18], &[23, 14], &[23, 9], &[23, 5]],
    &[&[24, 23, 22, 17], &[24, 23, 22, 7], &[24, 23, 21, 20], &[24, 23, 21, 11]],
    &[&[25, 22], &[25, 18], &[25, 7], &[25, 3]],
    &[&[26, 25, 24, 20], &[26, 25, 24, 8], &[26, 25, 24, 7], &[26, 25, 22, 17]],
    &[&[27, 26, 25, 22], &[27, 26, 25, 17], &[27, 26, 25, 11], &[27, 26, 24, 11]],
    &[&[28, 25], &[28, 19], &[28, 15], &[28, 13]],
    &[&[29, 27], &[29, 2], &[29, 28, 27, 25], &[29, 28, 27, 20]],
    &[&[30, 29, 28, 7], &[30, 29, 26, 24], &[30, 29, 26, 22], &[30, 29, 26, 4]],
    &[&[31, 28], &[31, 25], &[31, 24], &[31, 18]],
    &[&[32, 31, 30, 10], &[32, 31, 29, 1], &[32, 31, 26, 18], &[32, 31, 26, 9]],
    &[&[33, 20], &[33, 13], &[33, 32, 31, 26], &[33, 32, 31, 25]],
    &[&[34, 33, 32, 7], &[34, 33, 32, 4], &[34, 33, 31, 6], &[34, 33, 30, 21]],
    &[&[35, 33], &[35, 2], &[35, 34, 33, 26], &[35, 34, 32, 6]],
    &[&[36, 25], &[36, 11], &[36, 35, 32, 22], &[36, 35, 30, 26]],
    &[&[37, 36, 35, 28], &[37, 36, 35, 19], &[37, 36, 35, 2], &[37, 36, 34, 11]],
    &[&[38, 37, 35, 25], &[38, 37, 35, 16], &[38, 37, 35, 13], &[38, 37, 33, 32]],
    &[&[39, 35], &[39, 31], &[39, 25], &[39, 14]],
    &[&[40, 39, 38, 5], &[40, 39, 37, 31], &[40, 39, 37, 18], &[40, 39, 35, 5]],
    &[&[41, 38], &[41, 21], &[41, 20], &[41, 3]],
    &[&[42, 41, 40, 13], &[42, 41, 40, 5], &[42, 41, 38, 21], &[42, 41, 38, 10]],
    &[&[43, 42, 41, 31], &[43, 42, 41, 17], &[43, 42, 40, 22], &[43, 42, 40, 5]],
    &[&[44, 43, 41, 6], &[44, 43, 40, 27], &[44, 43, 40, 8], &[44, 43, 40, 3]],
    &[&[45, 44, 42, 41], &[45, 44, 42, 23], &[45, 44, 41, 39], &[45, 44, 41, 19]],
    &[&[46, 45, 43, 37], &[46, 45, 43, 29], &[46, 45, 43, 16], &[46, 45, 43, 6]],
    &[&[47, 42], &[47, 33], &[47, 27], &[47, 26]],
    &[&[48, 47, 45, 20], &[48, 47, 45, 9], &[48, 47, 43, 37], &[48, 47, 43, 1]],
    &[&[49, 40], &[49, 37], &[49, 34], &[49, 27]],
    &[&[50, 49, 48, 34], &[50, 49, 48, 8], &[50, 49, 46, 21], &[50, 49, 46, 14]],
    &[&[51, 50, 49, 23], &[51, 50, 49, 7], &[51, 50, 49, 5], &[51, 50, 48, 45]],
    &[&[52, 49], &[52, 33], &[52, 31], &[52, 21]],
    &[&[53, 52, 51, 47], &[53, 52, 51, 41], &[53, 52, 51, 16], &[53, 52, 51, 1]],
    &[&[54, 53, 52, 37], &[54, 53, 51, 5], &[54, 53, 50, 27], &[54, 53, 49, 38]],
    &[&[55, 31], &[55, 24], &[55, 54, 53, 49], &[55, 54, 53, 37]],
    &[&[56, 55, 54, 14], &[56, 55, 53, 30], &[56, 55, 53, 27], &[56, 55, 53, 16]],
    &[&[57, 50], &[57, 35], &[57, 22], &[57, 7]],
    &[&[58, 39], &[58, 19], &[58, 57, 56, 23], &[58, 57, 56, 17]],
    &[&[59, 58, 57, 35], &[59, 58, 57, 25], &[59, 58, 56, 30], &[59, 58, 55, 47]],
    &[&[60, 59], &[60, 49], &[60, 11], &[60, 1]],
    &[&[61, 60, 59, 56], &[61, 60, 59, 32], &[61, 60, 59, 28], &[61, 60, 59, 25]],
    &[&[62, 61, 59, 34], &[62, 61, 59, 1], &[62, 61, 57, 46], &[62, 61, 57, 31]],
    &[&[63, 62], &[63, 58], &[63, 32], &[63, 31]],
    &[&[64, 63, 62, 53], &[64, 63, 61, 60], &[64, 63, 60, 18], &[64, 63, 58, 15]],
    &[&[65, 47], &[65, 33], &[65, 32], &[65, 18]],
    &[&[66, 65, 64, 49], &[66, 65, 64, 46], &[66, 65, 64, 35], &[66, 65, 64, 20]],
    &[&[67, 66, 65, 62], &[67, 66, 65, 59], &[67, 66, 65, 50], &[67, 66, 65, 47]],
    &[&[68, 59], &[68, 35], &[68, 33], &[68, 9]],
    &[&[69, 68, 67, 35], &[69, 68, 67, 32], &[69, 68, 67, 22], &[69, 68, 66, 11]],
    &[&[70, 69, 67, 65], &[70, 69, 67, 48], &[70, 69, 67, 36], &[70, 69, 67, 1]],
    &[&[71, 65], &[71, 62], &[71, 53], &[71, 51]],
    &[&[72, 71, 68, 1], &[72, 71, 65, 51], &[72, 71, 65, 49], &[72, 71, 61, 47]],
    &[&[73, 48], &[73, 45], &[73, 42], &[73, 31]],
    &[&[74, 73, 72, 52], &[74, 73, 71, 45], &[74, 73, 70, 47], &[74, 73, 70, 18]],
    &[&[75, 74, 72, 69], &[75, 74, 72, 17], &[75, 74, 71, 69], &[75, 74, 71, 68]],
    &[&[76, 75, 74, 56], &[76, 75, 74, 2], &[76, 75, 73, 65], &[76, 75, 73, 26]],
    &[&[77, 76, 75, 67], &[77, 76, 75, 55], &[77, 76, 75, 40], &[77, 76, 75, 19]],
    &[&[78, 77, 76, 71], &[78, 77, 75, 24], &[78, 77, 75, 8], &[78, 77, 74, 67]],
    &[&[79, 70], &[79, 60], &[79, 19], &[79, 9]],
    &[&[80, 79, 78, 26], &[80, 79, 77, 48], &[80, 79, 77, 16], &[80, 79, 77, 6]],
    &[&[81, 77], &[81, 65], &[81, 46], &[81, 35]],
    &[&[82, 81, 80, 50], &[82, 81, 80, 32], &[82, 81, 80, 14], &[82, 81, 78, 61]],
    &[&[83, 82, 81, 38], &[83, 82, 81, 25], &[83, 82, 80, 19], &[83, 82, 79, 69]],
    &[&[84, 71], &[84, 13], &[84, 83, 82, 40], &[84, 83, 82, 2]],
    &[&[85, 84, 83, 77], &[85, 84, 83, 73], &[85, 84, 83, 67], &[85, 84, 83, 64]],
    &[&[86, 85, 84, 79], &[86, 85, 84, 65], &[86, 85, 83, 55], &[86, 85, 83, 19]],
    &[&[87, 74], &[87, 13], &[87, 86, 85, 31], &[87, 86, 85, 28]],
    &[&[88, 87, 83, 22], &[88, 87, 82, 69], &[88, 87, 82, 21], &[88, 87, 81, 3]],
    &[&[89, 51], &[89, 38], &[89, 88, 87, 82], &[89, 88, 87, 74]],
    &[&[90, 89, 88, 64], &[90, 89, 88, 46], &[90, 89, 88, 4], &[90, 89, 87, 41]],
    &[&[91, 90, 89, 70], &[91, 90, 89, 62], &[91, 90, 89, 47], &[91, 90, 89, 41]],
    &[&[92, 91, 90, 74], &[92, 91, 90, 32], &[92, 91, 88, 62], &[92, 91, 88, 56]],
    &[&[93, 91], &[93, 2], &[93, 92, 91, 71], &[93, 92, 91, 50]],
    &[&[94, 73], &[94, 21], &[94, 93, 91, 64], &[94, 93, 91, 43]],
    &[&[95, 84], &[95, 78], &[95, 17], &[95, 11]],
    &[&[96, 95, 94, 77], &[96, 95, 94, 53], &[96, 95, 93, 80], &[96, 95, 93, 36]],
    &[&[97, 91], &[97, 85], &[97, 64], &[97, 63]],
    &[&[98, 87], &[98, 71], &[98, 27], &[98, 11]],
    &[&[99, 98, 96, 59], &[99, 98, 95, 69], &[99, 98, 95, 35], &[99, 98, 95, 13]],
    &[&[100, 63], &[100, 37], &[100, 99, 98, 64], &[100, 99, 98, 56]],
    &[&[101, 100, 99, 62], &[101, 100, 98, 85], &[101, 100, 98, 79], &[101, 100, 97, 86]],
    &[&[102, 101, 100, 71], &[102, 101, 100, 61], &[102, 101, 99, 5], &[102, 101, 98, 86]],
    &[&[103, 94], &[103, 90], &[103, 73], &[103, 72]],
    &[&[104, 103, 102, 77], &[104, 103, 102, 7], &[104, 103, 101, 25], &[104, 103, 99, 29]],
    &[&[105, 89], &[105, 88], &[105, 68], &[105, 62]],
    &[&[106, 91], &[106, 15], &[106, 105, 104, 41], &[106, 105, 103, 50]],
    &[&[107, 106, 105, 49], &[107, 106, 105, 37], &[107, 106, 104, 51], &[107, 106, 103, 47]],
    &[&[108, 77], &[108, 31], &[108, 107, 106, 88], &[108, 107, 106, 10]],
    &[&[109, 108, 107, 100], &[109, 108, 107, 85], &[109, 108, 107, 80], &[109, 108, 107, 70]],
    &[&[110, 109, 107, 57], &[110, 109, 107, 39], &[110, 109, 107, 25], &[110, 109, 107, 19]],
    &[&[111, 101], &[111, 62], &[111, 49], &[111, 10]],
    &[&[112, 111, 110, 49], &[112, 111, 110, 37], &[112, 111, 109, 76], &[112, 111, 109, 60]],
    &[&[113, 104], &[113, 98], &[113, 83], &[113, 30]],
    &[&[114, 113, 112, 103], &[114, 113, 112, 100], &[114, 113, 112, 82], &[114, 113, 112, 58]],
    &[&[115, 114, 113, 83], &[115, 114, 112, 95], &[115, 114, 111, 58], &[115, 114, 111, 49]],
    &[&[116, 115, 114, 68], &[116, 115, 112, 68], &[116, 115, 112, 63], &[116, 115, 112, 3]],
    &[&[117, 116, 115, 112], &[117, 116, 115, 103], &[117, 116, 115, 65], &[117, 116, 115, 29]],
    &[&[118, 85], &[118, 73], &[118, 45], &[118, 33]],
    &[&[119, 111], &[119, 81], &[119, 38], &[119, 8]],
    &[&[120, 119, 118, 71], &[120, 119, 117, 108], &[120, 119, 117, 24], &[120, 119, 113, 54]],
    &[&[121, 103], &[121, 18], &[121, 120, 119, 107], &[121, 120, 119, 94]],
    &[&[122, 121, 120, 116], &[122, 121, 120, 67], &[122, 121, 120, 52], &[122, 121, 120, 31]],
    &[&[123, 121], &[123, 2], &[123, 122, 121, 58], &[123, 122, 121, 50]],
    &[&[124, 87], &[124, 37], &[124, 123, 122, 112], &[124, 123, 122, 100]],
    &[&[125, 124, 123, 53], &[125, 124, 123, 38], &[125, 124, 123, 28], &[125, 124, 122, 69]],
    &[&[126, 125, 124, 79], &[126, 125, 124, 61], &[126, 125, 124, 55], &[126, 125, 124, 25]],
    &[&[127, 126], &[127, 120], &[127, 112], &[127, 97]],
    &[&[128, 127, 126, 121], &[128, 127, 125, 24], &[128, 127, 124, 69], &[128, 127, 123, 29]],
    &[&[129, 124], &[129, 98], &[129, 83], &[129, 46]],
    &[&[130, 127], &[130, 3], &[130, 129, 128, 125], &[130, 129, 128, 70]],
    &[&[131, 130, 129, 118], &[131, 130, 129, 26], &[131, 130, 128, 97], &[131, 130, 127, 68]],
    &[&[132, 103], &[132, 29], &[132, 131, 130, 116], &[132, 131, 130, 37]],
    &[&[133, 132, 131, 107], &[133, 132, 131, 67], &[133, 132, 131, 62], &[133, 132, 131, 61]],
    &[&[134, 77], &[134, 57], &[134, 133, 131, 46], &[134, 133, 131, 19]],
    &[&[135, 124], &[135, 119], &[135, 113], &[135, 22]],
    &[&[136, 135, 133, 3], &[136, 135, 131, 25], &[136, 135, 130, 54], &[136, 135, 130, 14]],
    &[&[137, 116], &[137, 102], &[137, 80], &[137, 57]],
    &[&[138, 137, 136, 116], &[138, 137, 136, 100], &[138, 137, 136, 88], &[138, 137, 135, 125]],
    &[&[139, 138, 136, 69], &[139, 138, 135, 93], &[139, 138, 135, 81], &[139, 138, 135, 3]],
    &[&[140, 111], &[140, 29], &[140, 139, 138, 97], &[140, 139, 138, 89]],
    &[&[141, 140, 139, 88], &[141, 140, 139, 46], &[141, 140, 139, 32], &[141, 140, 139, 4]],
    &[&[142, 121], &[142, 21], &[142, 141, 140, 71], &[142, 141, 140, 35]],
    &[&[143, 142, 141, 56], &[143, 142, 141, 55], &[143, 142, 140, 114], &[143, 142, 140, 60]],
    &[&[144, 143, 142, 133], &[144, 143, 141, 120], &[144, 143, 139, 125], &[144, 143, 139, 37]],
    &[&[145, 93], &[145, 76], &[145, 69], &[145, 52]],
    &[&[146, 145, 144, 112], &[146, 145, 144, 107], &[146, 145, 144, 4], &[146, 145, 143, 10]],
    &[&[147, 146, 145, 23], &[147, 146, 144, 41], &[147, 146, 143, 70], &[147, 146, 143, 36]],
    &[&[148, 121], &[148, 27], &[148, 147, 146, 31], &[148, 147, 145, 1]],
    &[&[149, 148, 147, 127], &[149, 148, 147, 107], &[149, 148, 147, 64], &[149, 148, 147, 44]],
    &[&[150, 97], &[150, 53], &[150, 149, 147, 135], &[150, 149, 146, 131]],
    &[&[151, 148], &[151, 142], &[151, 136], &[151, 120]],
    &[&[152, 151, 150, 55], &[152, 151, 149, 87], &[152, 151, 148, 101], &[152, 151, 147, 25]],
    &[&[153, 152], &[153, 145], &[153, 8], &[153, 1]],
    &[&[154, 153, 152, 100], &[154, 153, 152, 58], &[154, 153, 152, 28], &[154, 153, 151, 71]],
    &[&[155, 154, 153, 31], &[155, 154, 152, 93], &[155, 154, 152, 78], &[155, 154, 152, 75]],
    &[&[156, 155, 154, 142], &[156, 155, 154, 80], &[156, 155, 152, 144], &[156, 155, 152, 129]],
    &[&[157, 156, 155, 49], &[157, 156, 155, 28], &[157, 156, 155, 5], &[157, 156, 154, 141]],
    &[&[158, 157, 155, 96], &[158, 157, 155, 3], &[158, 157, 154, 98], &[158, 157, 154, 84]],
    &[&[159, 128], &[159, 125], &[159, 119], &[159, 40]],
    &[&[160, 159, 157, 144], &[160, 159, 157, 90], &[160, 159, 157, 88], &[160, 159, 156, 141]],
    &[&[161, 143], &[161, 122], &[161, 101], &[161, 60]],
    &[&[162, 161, 160, 113], &[162, 161, 160, 104], &[162, 161, 158, 97], &[162, 161, 158, 82]],
    &[&[163, 162, 161, 155], &[163, 162, 161, 77], &[163, 162, 161, 31], &[163, 162, 159, 129]],
    &[&[164, 163, 162, 115], &[164, 163, 162, 53], &[164, 163, 162, 25], &[164, 163, 160, 119]],
    &[&[165, 164, 163, 140], &[165, 164, 163, 80], &[165, 164, 163, 16], &[165, 164, 162, 131]],
    &[&[166, 165, 164, 41], &[166, 165, 163, 19], &[166, 165, 163, 4], &[166, 165, 161, 80]],
    &[&[167, 161], &[167, 132], &[167, 108], &[167, 90]],
    &[&[168, 167, 166, 103], &[168, 167, 166, 55], &[168, 167, 165, 116], &[168, 167, 165, 54]],
    &[&[169, 135], &[169, 127], &[169, 112], &[169, 85]],
    &[&[170, 147], &[170, 23], &[170, 169, 168, 152], &[170, 169, 168, 58]],
    &[&[171, 170, 168, 129], &[171, 170, 167, 140], &[171, 170, 167, 127], &[171, 170, 167, 124]],
    &[&[172, 165], &[172, 7], &[172, 171, 170, 112], &[172, 171, 170, 107]],
    &[&[173, 172, 171, 163], &[173, 172, 171, 116], &[173, 172, 171, 91], &[173, 172, 171, 83]],
    &[&[174, 161], &[174, 13], &[174, 173, 171, 153], &[174, 173, 171, 75]],
    &[&[175, 169], &[175, 159], &[175, 157], &[175, 118]],
    &[&[176, 175, 174, 133], &[176, 175, 171, 37], &[176, 175, 170, 157], &[176, 175, 170, 91]],
    &[&[177, 169], &[177, 155], &[177, 89], &[177, 88]],
    &[&[178, 91], &[178, 87], &[178, 177, 176, 160], &[178, 177, 176, 41]],
    &[&[179, 178, 177, 175], &[179, 178, 177, 38], &[179, 178, 176, 129], &[179, 178, 175, 131]],
    &[&[180, 179, 178, 128], &[180, 179, 178, 121], &[180, 179, 178, 106], &[180, 179, 177, 159]],
    &[&[181, 180, 179, 92], &[181, 180, 179, 28], &[181, 180, 179, 17], &[181, 180, 178, 143]],
    &[&[182, 181, 180, 61], &[182, 181, 180, 26], &[182, 181, 179, 22], &[182, 181, 178, 141]],
    &[&[183, 127], &[183, 56], &[183, 182, 181, 62], &[183, 182, 181, 43]],
    &[&[184, 183, 181, 143], &[184, 183, 181, 110], &[184, 183, 181, 4], &[184, 183, 176, 61]],
    &[&[185, 161], &[185, 144], &[185, 116], &[185, 69]],
    &[&[186, 185, 184, 133], &[186, 185, 184, 50], &[186, 185, 184, 22], &[186, 185, 183, 90]],
    &[&[187, 186, 185, 167], &[187, 186, 185, 154], &[187, 186, 185, 134], &[187, 186, 185, 7]],
    &[&[188, 187, 186, 2], &[188, 187, 185, 142], &[188, 187, 185, 33], &[188, 187, 184, 83]],
    &[&[189, 188, 187, 140], &[189, 188, 187, 77], &[189, 188, 185, 171], &[189, 188, 184, 139]],
    &[&[190, 189, 188, 143], &[190, 189, 188, 95], &[190, 189, 188, 43], &[190, 189, 187, 107]],
    &[&[191, 182], &[191, 173], &[191, 140], &[191, 120]],
    &[&[192, 191, 189, 80], &[192, 191, 188, 85], &[192, 191, 185, 114], &[192, 191, 185, 93]],
    &[],
    &[&[194, 87], &[194, 4, 3, 2]],
    &[&[195, 8, 3, 2], &[195, 10, 9, 1]],
    &[&[196, 11, 9, 2], &[196, 12, 8, 5]],
    &[&[197, 9, 4, 2], &[197, 10, 8, 4]],
    &[&[198, 65], &[198, 15, 8, 5]],
    &[&[199, 34], &[199, 67]],
    &[&[200, 5, 3, 2], &[200, 12, 3, 2]],
    &[&[201, 14], &[201, 17]],
    &[&[202, 55], &[202, 7, 6, 4]],
    &[&[203, 8, 7, 1], &[203, 8, 7, 6]],
    &[&[204, 10, 4, 3], &[204, 12, 7, 3]],
    &[&[205, 9, 5, 2], &[205, 11, 6, 1]],
    &[&[206, 10, 9, 5], &[206, 14, 13, 9]],
    &[&[207, 43], &[207, 9, 6, 1]],
    &[&[208, 9, 3, 1], &[208, 11, 10, 5]],
    &[&[209, 6], &[209, 8]],
    &[&[210, 12, 4, 3], &[210, 13, 10, 6]],
    &[],
    &[&[212, 105], &[212, 7, 4, 3]],
    &[&[213, 6, 5, 2], &[213, 8, 7, 1]],
    &[&[214, 5, 3, 1], &[214, 5, 4, 2]],
    &[&[215, 23], &[215, 51]],
    &[&[216, 7, 3, 1], &[216, 13, 10, 6]],
    &[],
    &[&[218, 11], &[218, 15]],
    &[],
    &[&[220, 12, 10, 9], &[220, 13, 5, 2]],
    &[&[221, 8, 6, 2], &[221, 11, 6, 3]],
    &[&[222, 8, 5, 2], &[222, 12, 5, 3]],
    &[],
    &[&[224, 12, 7, 2], &[224, 17, 9, 2]],
    &[&[225, 32], &[225, 74]],
    &[&[226, 10, 7, 3], &[226, 12, 5, 2]],
    &[&[227, 10, 9, 4], &[227, 12, 10, 7]],
    &[&[228, 12, 11, 2], &[228, 13, 9, 7]],
    &[&[229, 10, 4, 1], &[229, 12, 7, 3]],
    &[&[230, 8, 7, 6], &[230, 11, 8, 2]],
    &[&[231, 26], &[231, 34]],
    &[&[232, 11, 9, 4], &[232, 13, 4, 3]],
    &[&[233, 74], &[233, 9, 4, 1]],
    &[&[234, 31], &[234, 103]],
    &[&[235, 9, 6, 1], &[235, 10, 3, 2]],
    &[&[236, 5], &[236, 10, 8, 7]],
    &[],
    &[&[238, 5, 2, 1], &[238, 13, 10, 9]],
    &[&[239, 36], &[239, 81]],
    &[&[240, 8, 5, 3], &[240, 12, 5, 2]],
    &[&[241, 70], &[241, 9, 8, 4]],
    &[&[242, 11, 6, 1], &[242, 11, 8, 6]],
    &[&[243, 8, 5, 1], &[243, 12, 10, 6]],
    &[&[244, 9, 4, 1], &[244, 10, 9, 2]],
    &[&[245, 6, 4, 1], &[245, 8, 3, 1]],
    &[&[246, 11, 2, 1], &[246, 13, 6, 1]],
    &[],
    &[&[248, 15, 14, 10], &[248, 16, 15, 13]],
    &[&[249, 86], &[249, 7, 4, 1]],
    &[&[250, 103], &[250, 10, 5, 3]],
    &[],
    &[&[252, 67], &[252, 11, 5, 1]],
    &[],
    &[&[254, 7, 2, 1], &[254, 15, 11, 6]],
    &[&[255, 52], &[255, 56]],
    &[&[256, 10, 5, 2], &[256, 16, 3, 1]],
    &[],
    &[&[258, 83], &[258, 9, 6, 4]],
    &[&[259, 10, 6, 2], &[259, 11, 10, 3]],
    &[&[260, 10, 8, 7], &[260, 16, 12, 11]],
    &[&[261, 7, 6, 4], &[261, 8, 6, 3]],
    &[&[262, 9, 8, 4], &[262, 9, 8, 5]],
    &[],
    &[&[264, 10, 9, 1], &[264, 13, 11, 4]],
    &[],
    &[&[266, 47], &[266, 7, 6, 1]],
    &[&[267, 8, 6, 3], &[267, 11, 4, 2]],
    &[&[268, 25], &[268, 61]],
    &[&[269, 7, 6, 1], &[269, 10, 8, 6]],
    &[&[270, 53], &[270, 133]],
    &[&[271, 58], &[271, 70]],
    &[&[272, 9, 6, 2], &[272, 13, 10, 6]],
    &[&[273, 23], &[273, 53]],
    &[],
    &[],
    &[&[276, 6, 3, 1], &[276, 12, 7, 3]],
    &[],
    &[&[278, 5], &[278, 5, 4, 1]],
    &[&[279, 5], &[279, 10]],
    &[&[280, 9, 5, 2], &[280, 13, 11, 2]],
    &[&[281, 93], &[281, 99]],
    &[&[282, 35], &[282, 43]],
    &[&[283, 12, 7, 5], &[283, 13, 10, 6]],
    &[&[284, 119], &[284, 8, 6, 5]],
    &[],
    &[&[286, 69], &[286, 73]],
    &[&[287, 71], &[287, 116]],
    &[&[288, 11, 10, 1], &[288, 25, 23, 13]],
    &[],
    &[&[290, 5, 3, 2], &[290, 11, 7, 4]],
    &[&[291, 12, 11, 5], &[291, 14, 8, 6]],
    &[&[292, 97], &[292, 7, 3, 1]],
    &[],
    &[&[294, 61], &[294, 9, 3, 2]],
    &[],
    &[&[296, 11, 9, 4], &[296, 14, 5, 2]],
    &[&[297, 5], &[297, 83]],
    &[],
    &[],
    &[&[300, 7], &[300, 73]],
    &[],
    &[&[302, 41], &[302, 12, 9, 5]],
    &[&[303, 13, 12, 6], &[303, 15, 4, 3]],
    &[],
    &[&[305, 102], &[305, 7, 6, 2]],
    &[&[306, 7, 3, 1], &[306, 11, 7, 4]],
    &[&[307, 8, 4, 2], &[307, 13, 10, 7]],
    &[&[308, 15, 9, 2], &[308, 15, 14, 4]],
    &[],
    &[&[310, 8, 5, 1], &[310, 9, 8, 7]],
    &[],
    &[&[312, 11, 10, 5], &[312, 14, 7, 1]],
    &[],
    &[],
    &[&[315, 10, 9, 1], &[315, 14, 9, 5]],
    &[],
    &[],
    &[&[318, 8, 6, 5], &[318, 12, 7, 1]],
    &[&[319, 36], &[319, 52]],
    &[&[320, 4, 3, 1], &[320, 8, 3, 2]],
    &[&[321, 31], &[321, 56]],
    &[&[322, 67], &[322, 17, 2, 1]],
    &[],
    &[&[324, 6, 4, 3], &[324, 11, 8, 3]],
    &[&[325, 10, 5, 2], &[325, 14, 3, 2]],
    &[&[326, 10, 3, 1], &[326, 11, 10, 6]],
    &[],
    &[&[328, 9, 7, 5], &[328, 14, 11, 1]],
    &[&[329, 50], &[329, 54]],
    &[&[330, 8, 7, 2], &[330, 12, 7, 3]],
    &[],
    &[&[332, 123], &[332, 12, 11, 7]],
    &[&[333, 2], &[333, 8, 4, 2]],
    &[&[334, 7, 4, 1], &[334, 13, 8, 2]],
    &[&[335, 10, 7, 2], &[335, 13, 7, 2]],
    &[&[336, 7, 4, 1], &[336, 11, 6, 5]],
    &[&[337, 55], &[337, 57]],
    &[],
    &[],
    &[&[340, 11, 4, 3], &[340, 12, 7, 3]],
    &[],
    &[&[342, 125], &[342, 11, 2, 1]],
    &[&[343, 75], &[343, 135]],
    &[],
    &[&[345, 22], &[345, 37]],
    &[&[346, 11, 7, 2], &[346, 14, 11, 7]],
    &[],
    &[&[348, 8, 7, 4], &[348, 11, 9, 5]],
    &[],
    &[&[350, 53], &[350, 14, 13, 10]],
    &[&[351, 34], &[351, 55]],
    &[&[352, 13, 11, 6], &[352, 19, 11, 5]],
    &[],
    &[&[354, 14, 13, 5], &[354, 17, 11, 5]],
    &[&[355, 6, 5, 1], &[355, 12, 6, 1]],
    &[],
    &[],
    &[&[358, 14, 8, 7], &[358, 17, 7, 3]],
    &[],
    &[&[360, 26, 25, 1], &[360, 27, 17, 6]],
    &[],
    &[&[362, 63], &[362, 107]],
    &[&[363, 8, 5, 3], &[363, 8, 6, 2]],
    &[&[364, 67], &[364, 12, 5, 1]],
    &[],
    &[&[366, 29], &[366, 14, 7, 4]],
    &[],
    &[],
    &[&[369, 91], &[369, 110]],
    &[&[370, 139], &[370, 183]],
    &[],
    &[&[372, 15, 7, 3], &[372, 15, 11, 3]],
    &[&[373, 8, 7, 2], &[373, 9, 6, 1]],
    &[&[374, 8, 6, 5], &[374, 12, 9, 8]],
    &[&[375, 16], &[375, 64]],
    &[],
    &[&[377, 41], &[377, 75]],
    &[&[378, 43], &[378, 107]],
    &[&[379, 10, 8, 5], &[379, 10, 9, 4]],
    &[&[380, 47], &[380, 14, 6, 3]],
    &[&[381, 5, 2, 1], &[381, 8, 6, 5]],
    &[],
    &[],
    &[&[384, 16, 15, 6], &[384, 27, 6, 1]],
    &[&[385, 6], &[385, 24]],
    &[],
    &[],
    &[],
    &[&[389, 10, 9, 5], &[389, 11, 8, 6]],
    &[&[390, 89], &[390, 13, 10, 2]],
    &[],
    &[&[392, 13, 10, 6], &[392, 21, 11, 2]],
    &[&[393, 7], &[393, 62]],
    &[],
    &[&[395, 11, 6, 5], &[395, 14, 12, 10]],
    &[&[396, 25], &[396, 109]],
    &[],
    &[&[398, 14, 6, 5], &[398, 15, 4, 2]],
    &[&[399, 86], &[399, 109]],
    &[&[400, 5, 3, 2], &[400, 14, 11, 1]],
    &[],
    &[&[402, 9, 4, 3], &[402, 16, 11, 10]],
    &[&[403, 9, 8, 5], &[403, 13, 7, 6]],
    &[],
    &[&[405, 17, 8, 7], &[405, 18, 15, 7]],
    &[&[406, 157], &[406, 13, 9, 4]],
    &[],
    &[&[408, 7, 5, 1], &[408, 14, 5, 2]],
    &[],
    &[&[410, 10, 4, 3], &[410, 13, 10, 9]],
    &[],
    &[],
    &[],
    &[&[414, 16, 13, 9], &[414, 17, 12, 6]],
    &[],
    &[],
    &[&[417, 107], &[417, 113]],
    &[],
    &[],
    &[&[420, 13, 10, 8], &[420, 14, 12, 3]],
    &[&[421, 5, 4, 2], &[421, 7, 4, 1]],
    &[],
    &[],
    &[],
    &[&[425, 12], &[425, 21]],
    &[&[426, 14, 12, 11], &[426, 15, 12, 8]],
    &[&[427, 11, 6, 5], &[427, 13, 6, 5]],
    &[],
    &[],
    &[&[430, 15, 13, 11], &[430, 17, 12, 5]],
    &[],
    &[&[432, 13, 4, 3], &[432, 14, 5, 2]],
    &[],
    &[],
    &[],
    &[],
    &[&[437, 6, 2, 1], &[437, 7, 4, 2]],
    &[],
    &[],
    &[&[440, 4, 3, 1], &[440, 8, 3, 2]],
    &[],
    &[&[442, 7, 5, 2], &[442, 11, 8, 7]],
    &[&[443, 10, 6, 1], &[443, 16, 9, 8]],
    &[&[444, 13, 12, 9], &[444, 15, 14, 3]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[450, 79], &[450, 16, 12, 7]],
    &[],
    &[],
    &[&[453, 15, 6, 4], &[453, 18, 14, 6]],
    &[],
    &[&[455, 38], &[455, 62]],
    &[&[456, 23, 11, 2], &[456, 25, 11, 1]],
    &[&[457, 16], &[457, 61]],
    &[&[458, 203], &[458, 13, 10, 5]],
    &[],
    &[&[460, 61], &[460, 9, 5, 1]],
    &[],
    &[&[462, 73], &[462, 12, 11, 5]],
    &[],
    &[&[464, 23, 9, 4], &[464, 25, 19, 5]],
    &[&[465, 59], &[465, 103]],
    &[&[466, 14, 11, 6], &[466, 16, 7, 3]],
    &[],
    &[&[468, 15, 9, 4], &[468, 24, 13, 6]],
    &[],
    &[],
    &[],
    &[&[472, 11, 3, 2], &[472, 17, 15, 13]],
    &[],
    &[],
    &[],
    &[&[476, 15], &[476, 141]],
    &[&[477, 16, 15, 7], &[477, 16, 15, 12]],
    &[],
    &[],
    &[&[480, 16, 13, 7], &[480, 23, 22, 13]],
    &[],
    &[&[482, 9, 6, 5], &[482, 11, 6, 1]],
    &[],
    &[],
    &[],
    &[&[486, 14, 8, 5], &[486, 20, 13, 7]],
    &[&[487, 94], &[487, 127]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[493, 10, 5, 3], &[493, 16, 15, 4]],
    &[],
    &[],
    &[&[496, 16, 5, 2], &[496, 21, 9, 3]],
    &[&[497, 78], &[497, 216]],
    &[&[498, 11, 9, 3], &[498, 18, 11, 8]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[504, 21, 14, 2], &[504, 25, 16, 10]],
    &[],
    &[],
    &[&[507, 13, 6, 3], &[507, 14, 8, 5]],
    &[],
    &[],
    &[&[510, 12, 10, 9], &[510, 21, 16, 12]],
    &[],
    &[&[512, 8, 5, 2], &[512, 20, 9, 6]],
    &[],
    &[],
    &[],
    &[&[516, 7, 5, 2], &[516, 13, 7, 2]],
    &[],
    &[],
    &[&[519, 79], &[519, 12, 8, 2]],
    &[&[520, 17, 13, 11], &[520, 23, 18, 10]],
    &[&[521, 32], &[521, 48]],
    &[&[522, 15, 13, 4], &[522, 19, 9, 4]],
    &[],
    &[],
    &[&[525, 6, 4, 1], &[525, 17, 14, 11]],
    &[],
    &[],
    &[&[528, 11, 6, 2], &[528, 21, 16, 6]],
    &[],
    &[],
    &[],
    &[&[532, 1], &[532, 37]],
    &[&[533, 4, 3, 2], &[533, 13, 9, 2]],
    &[&[534, 7, 5, 1], &[534, 12, 9, 7]],
    &[],
    &[&[536, 7, 5, 3], &[536, 12, 5, 3]],
    &[&[537, 94], &[537, 10, 2, 1]],
    &[],
    &[],
    &[&[540, 179], &[540, 211]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[546, 8, 2, 1], &[546, 8, 7, 2]],
    &[],
    &[],
    &[&[549, 16, 4, 3], &[549, 17, 6, 5]],
    &[],
    &[&[551, 135], &[551, 240]],
    &[],
    &[&[553, 39], &[553, 57]],
    &[],
    &[&[555, 10, 9, 4], &[555, 18, 8, 2]],
    &[],
    &[],
    &[],
    &[],
    &[&[560, 11, 9, 6], &[560, 17, 15, 5]],
    &[&[561, 71], &[561, 109]],
    &[&[562, 11, 4, 2], &[562, 14, 7, 2]],
    &[],
    &[&[564, 163], &[564, 6, 3, 1]],
    &[],
    &[&[566, 153], &[566, 6, 5, 2]],
    &[&[567, 143], &[567, 275]],
    &[&[568, 17, 11, 10], &[568, 17, 15, 10]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[574, 13], &[574, 14, 9, 5]],
    &[&[575, 146], &[575, 6, 5, 3]],
    &[],
    &[&[577, 25], &[577, 27]],
    &[],
    &[],
    &[],
    &[],
    &[&[582, 85], &[582, 11, 6, 3]],
    &[],
    &[&[584, 14, 13, 3], &[584, 17, 14, 6]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[591, 9, 6, 4], &[591, 14, 13, 8]],
    &[&[592, 24, 19, 1], &[592, 25, 23, 14]],
    &[],
    &[&[594, 19], &[594, 35]],
    &[],
    &[],
    &[&[597, 14, 12, 9], &[597, 17, 8, 7]],
    &[],
    &[],
    &[&[600, 11, 10, 1], &[600, 13, 6, 3]],
    &[],
    &[],
    &[],
    &[],
    &[&[605, 10, 7, 5], &[605, 11, 6, 1]],
    &[&[606, 15, 7, 4], &[606, 16, 13, 7]],
    &[&[607, 105], &[607, 147]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[616, 19, 10, 3], &[616, 19, 12, 5]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[624, 12, 9, 7], &[624, 16, 15, 1]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[630, 7, 4, 2], &[630, 11, 7, 2]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[648, 23, 22, 1], &[648, 25, 22, 11]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[658, 55], &[658, 12, 10, 7]],
    &[],
    &[&[660, 12, 4, 3], &[660, 17, 11, 2]],
    &[],
    &[],
    &[],
    &[],
    &[&[665, 33], &[665, 53]],
    &[&[666, 10, 7, 2], &[666, 12, 7, 4]],
    &[],
    &[],
    &[],
    &[&[670, 153], &[670, 273]],
    &[],
    &[&[672, 11, 6, 5], &[672, 13, 7, 5]],
    &[],
    &[&[674, 14, 9, 3], &[674, 17, 14, 3]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[690, 10, 7, 3], &[690, 17, 8, 6]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[697, 267], &[697, 310]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[708, 287], &[708, 301]],
    &[],
    &[&[710, 15, 14, 1], &[710, 15, 14, 6]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[720, 11, 8, 2], &[720, 23, 13, 1]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[726, 5], &[726, 241]],
    &[],
    &[&[728, 4, 3, 2], &[728, 5, 4, 3]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[738, 347], &[738, 11, 9, 8]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[744, 13, 11, 1], &[744, 25, 24, 15]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[754, 19], &[754, 147]],
    &[&[755, 12, 10, 1], &[755, 14, 11, 6]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[775, 367], &[775, 7, 6, 4]],
    &[],
    &[],
    &[],
    &[],
    &[&[780, 16, 8, 5], &[780, 17, 15, 6]],
    &[],
    &[],
    &[],
    &[&[784, 13, 9, 6], &[784, 25, 5, 3]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[790, 9, 7, 3], &[790, 17, 14, 9]],
    &[],
    &[&[792, 23, 17, 13], &[792, 26, 25, 17]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[806, 141], &[806, 10, 9, 5]],
    &[&[807, 7], &[807, 308]],
    &[],
    &[],
    &[&[810, 299], &[810, 13, 12, 7]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[816, 23, 15, 5], &[816, 23, 17, 8]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[840, 11, 5, 1], &[840, 26, 25, 19]],
    &[],
    &[],
    &[&[843, 11, 10, 7], &[843, 15, 3, 2]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[864, 21, 10, 6], &[864, 23, 21, 8]],
    &[&[865, 1], &[865, 9]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[873, 7, 3, 1], &[873, 11, 9, 3]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[881, 78], &[881, 84]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[889, 169], &[889, 310]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[909, 14, 4, 1], &[909, 23, 18, 3]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[930, 18, 14, 11], &[930, 19, 16, 4]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[944, 14, 3, 2], &[944, 19, 18, 1]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[954, 11, 8, 6], &[954, 17, 12, 9]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[960, 13, 9, 6], &[960, 20, 5, 3]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[1008, 27, 13, 10], &[1008, 37, 34, 10]],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[],
    &[&[1015, 186], &[1015, 258]],
    &[],
    &[],
    &[],
    &[],
    &[&[1020, 461], &[1020, 15, 12, 7]],
    &[],
    &[],
    &[],
    &[&[1024, 23, 22, 9], &[1024, 25, 12, 10]],
];

/// All tap sets for `width`, or `None` if the width has no entry
pub(crate) fn tap_sets(width: u64) -> Option<&'static [&'static [u16]]> {
    let index = usize::try_from(width.checked_sub(1)?).ok()?;
    TAP_SETS.get(index).copied().filter(|sets| !sets.is_empty())
}

/// Number of alternate tap sets for `width` (zero if unsupported)
pub fn tap_set_count(width: u64) -> usize {
    tap_sets(width).map_or(0, <[_]>::len)
}
