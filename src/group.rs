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

//! Digit arithmetic shared by the strict and extended codecs.
//!
//! A group of `n` bytes (1 to 4) is read as a big-endian integer and written
//! as `n + 1` base-85 digits. A full group is therefore 4 bytes and 5
//! characters; shorter groups only occur at the end of extended data.
//!
//! Callers are responsible for slicing the input and output to matching
//! lengths. Nothing here fails or checks alphabet membership.

use super::alphabet::{DECODER, ENCODER};
use super::{BASE, BYTES_PER_GROUP, CHARS_PER_GROUP};

/// Encodes `bytes` (1 to 4 of them) into `out`, which must be exactly one
/// character longer.
pub fn encode_group(bytes: &[u8], out: &mut [u8]) {
    debug_assert!((1..=BYTES_PER_GROUP).contains(&bytes.len()));
    debug_assert_eq!(out.len(), bytes.len() + 1);
    let mut value = bytes
        .iter()
        .fold(0_u64, |sum, &b| (sum << 8) | u64::from(b));
    out.iter_mut().rev().for_each(|c| {
        *c = ENCODER[(value % BASE) as usize];
        value /= BASE;
    });
}

/// Decodes `chars` (2 to 5 of them) into `out`, which must be exactly one
/// byte shorter.
///
/// Digit values are accumulated in a `u64`, so no input can overflow it;
/// only the low `8 * out.len()` bits of the sum are kept.
pub fn decode_group(chars: &[u8], out: &mut [u8]) {
    debug_assert!((2..=CHARS_PER_GROUP).contains(&chars.len()));
    debug_assert_eq!(out.len() + 1, chars.len());
    let value = chars.iter().fold(0_u64, |sum, &c| {
        sum * BASE + u64::from(DECODER[usize::from(c)])
    });
    let bytes = value.to_be_bytes();
    out.copy_from_slice(&bytes[bytes.len() - out.len()..]);
}

/// Encodes every full group of `bytes` into the corresponding group of
/// `out`. Lengths must already be validated.
pub fn encode_groups(bytes: &[u8], out: &mut [u8]) {
    debug_assert_eq!(bytes.len() % BYTES_PER_GROUP, 0);
    debug_assert_eq!(
        bytes.len() / BYTES_PER_GROUP * CHARS_PER_GROUP,
        out.len(),
    );
    bytes
        .chunks_exact(BYTES_PER_GROUP)
        .zip(out.chunks_exact_mut(CHARS_PER_GROUP))
        .for_each(|(group, out)| encode_group(group, out));
}

/// Decodes every full group of `chars` into the corresponding group of
/// `out`. Lengths must already be validated.
pub fn decode_groups(chars: &[u8], out: &mut [u8]) {
    debug_assert_eq!(chars.len() % CHARS_PER_GROUP, 0);
    debug_assert_eq!(
        chars.len() / CHARS_PER_GROUP * BYTES_PER_GROUP,
        out.len(),
    );
    chars
        .chunks_exact(CHARS_PER_GROUP)
        .zip(out.chunks_exact_mut(BYTES_PER_GROUP))
        .for_each(|(group, out)| decode_group(group, out));
}
