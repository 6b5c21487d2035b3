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

//! Plain Z85, as specified by ZeroMQ RFC 32.
//!
//! Binary input must be a multiple of 4 bytes and encoded input a multiple
//! of 5 characters. Use [`extended`](crate::extended) for other lengths.

use super::error::{reserve, too_long, Error, Result};
use super::group;
use super::{BYTES_PER_GROUP, CHARS_PER_GROUP};

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

fn check_len(len: usize, group: usize) -> Result<usize> {
    if len % group == 0 {
        Ok(len / group)
    } else {
        log::debug!("length {} is not a multiple of {}", len, group);
        Err(Error::BadLength {
            len,
            group,
        })
    }
}

/// The number of characters `len` bytes encode to.
///
/// Fails with [`Error::BadLength`] if `len` is not a multiple of 4, or with
/// [`Error::TooLong`] if the result would not fit in a `usize`.
pub fn encoded_len(len: usize) -> Result<usize> {
    check_len(len, BYTES_PER_GROUP)?
        .checked_mul(CHARS_PER_GROUP)
        .ok_or_else(|| too_long(len))
}

/// The number of bytes `len` characters decode to.
///
/// Fails with [`Error::BadLength`] if `len` is not a multiple of 5.
pub fn decoded_len(len: usize) -> Result<usize> {
    check_len(len, CHARS_PER_GROUP).map(|n| n * BYTES_PER_GROUP)
}

/// Encodes `bytes` into the start of `out`, returning the number of
/// characters written.
///
/// Nothing is written on error.
pub fn encode_into(bytes: &[u8], out: &mut [u8]) -> Result<usize> {
    let out = reserve(out, encoded_len(bytes.len())?)?;
    group::encode_groups(bytes, out);
    Ok(out.len())
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
    group::decode_groups(chars, out);
    Ok(out.len())
}

/// Encodes `bytes` as a new [`String`].
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode_to_string(bytes: &[u8]) -> Result<String> {
    let mut out = alloc::vec![0; encoded_len(bytes.len())?];
    encode_into(bytes, &mut out)?;
    Ok(super::ascii_to_string(out))
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
