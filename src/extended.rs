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

//! Z85 for data of any length.
//!
//! Full groups are encoded exactly as in [`strict`](crate::strict), so for
//! input that is a multiple of 4 bytes both codecs agree. A trailing partial
//! group of 1 to 3 bytes is encoded as one more character than it has bytes:
//!
//! | bytes | characters |
//! |-------|------------|
//! | 1     | 2          |
//! | 2     | 3          |
//! | 3     | 4          |
//!
//! Encoded data can therefore never end in a group of 1 character, and such
//! lengths are rejected when decoding.

use super::error::{reserve, too_long, Error, Result};
use super::group;
use super::{BYTES_PER_GROUP, CHARS_PER_GROUP};

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

/// The number of characters `len` bytes encode to.
///
/// Any length is valid, but fails with [`Error::TooLong`] if the result
/// would not fit in a `usize`. This never happens for the length of an
/// actual slice.
pub fn encoded_len(len: usize) -> Result<usize> {
    let tail = len % BYTES_PER_GROUP;
    (len / BYTES_PER_GROUP)
        .checked_mul(CHARS_PER_GROUP)
        .and_then(|n| n.checked_add(if tail == 0 { 0 } else { tail + 1 }))
        .ok_or_else(|| too_long(len))
}

/// The number of bytes `len` characters decode to.
///
/// Fails with [`Error::BadLength`] if `len` leaves a single character after
/// the last full group of 5.
pub fn decoded_len(len: usize) -> Result<usize> {
    let full = len / CHARS_PER_GROUP * BYTES_PER_GROUP;
    match len % CHARS_PER_GROUP {
        0 => Ok(full),
        1 => {
            log::debug!("length {} leaves a lone trailing character", len);
            Err(Error::BadLength {
                len,
                group: CHARS_PER_GROUP,
            })
        }
        tail => Ok(full + tail - 1),
    }
}

/// Encodes `bytes` into the start of `out`, returning the number of
/// characters written.
///
/// Nothing is written on error.
pub fn encode_into(bytes: &[u8], out: &mut [u8]) -> Result<usize> {
    let out = reserve(out, encoded_len(bytes.len())?)?;
    let written = out.len();
    let split = bytes.len() - bytes.len() % BYTES_PER_GROUP;
    let (full, tail) = bytes.split_at(split);
    log::trace!("encoding {} bytes + {} tail bytes", full.len(), tail.len());

    let (out, out_tail) =
        out.split_at_mut(full.len() / BYTES_PER_GROUP * CHARS_PER_GROUP);
    group::encode_groups(full, out);
    if !tail.is_empty() {
        group::encode_group(tail, out_tail);
    }
    Ok(written)
}

/// Decodes `chars` into the start of `out`, returning the number of bytes
/// written.
///
/// `chars` must consist of Z85 characters only; anything else decodes to
/// unspecified bytes. Nothing is written on error.
pub fn decode_into<C>(chars: C, out: &mut [u8]) -> Result<usize>
where
    C: AsRef<[u8]>,
{
    let chars = chars.as_ref();
    let out = reserve(out, decoded_len(chars.len())?)?;
    let written = out.len();
    let split = chars.len() - chars.len() % CHARS_PER_GROUP;
    let (full, tail) = chars.split_at(split);
    log::trace!("decoding {} chars + {} tail chars", full.len(), tail.len());

    let (out, out_tail) =
        out.split_at_mut(full.len() / CHARS_PER_GROUP * BYTES_PER_GROUP);
    group::decode_groups(full, out);
    if !tail.is_empty() {
        group::decode_group(tail, out_tail);
    }
    Ok(written)
}

/// Encodes `bytes` as a new [`String`]. This cannot fail.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode_to_string(bytes: &[u8]) -> String {
    // A slice holds at most `isize::MAX` bytes, and 5/4 of that still fits.
    let len = encoded_len(bytes.len()).expect("slice length cannot overflow");
    let mut out = alloc::vec![0; len];
    let written = encode_into(bytes, &mut out);
    debug_assert_eq!(written, Ok(out.len()));
    super::ascii_to_string(out)
}

/// Decodes `chars` into a new [`Vec`].
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn decode_to_vec<C>(chars: C) -> Result<Vec<u8>>
where
    C: AsRef<[u8]>,
{
    let chars = chars.as_ref();
    let mut out = alloc::vec![0; decoded_len(chars.len())?];
    decode_into(chars, &mut out)?;
    Ok(out)
}
