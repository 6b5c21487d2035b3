/*
 * Copyright (C) 2026 taylor.fish <contact@taylor.fish>
 *
 * This file is part of z85ext.
 *
 * z85ext is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * z85ext is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with z85ext. If not, see <https://www.gnu.org/licenses/>.
 */

//! The Z85 alphabet, as defined by ZeroMQ RFC 32.

/// Maps a digit value `0..85` to its character.
pub const ENCODER: [u8; 85] = *b"0123456789\
    abcdefghijklmnopqrstuvwxyz\
    ABCDEFGHIJKLMNOPQRSTUVWXYZ\
    .-:+=^!/*?&<>()[]{}@%$#";

/// Marks bytes of [`DECODER`] that are not part of the alphabet.
pub const INVALID: u8 = 0xff;

/// Maps a character, indexed by its byte value, to its digit value.
///
/// Entries for bytes outside the alphabet hold [`INVALID`]. The codecs do
/// not check for it, so decoding such bytes produces meaningless output.
pub const DECODER: [u8; 256] = build_decoder();

const fn build_decoder() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ENCODER.len() {
        table[ENCODER[i] as usize] = i as u8;
        i += 1;
    }
    table
}
