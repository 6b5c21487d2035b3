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

/// An error encountered while encoding or decoding.
///
/// Errors are always detected before anything is written to the
/// destination buffer.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input length cannot be processed in groups of `group`.
    ///
    /// Returned by the strict codec for lengths that are not a multiple of
    /// the group width, and by the extended decoder for character counts
    /// that leave a single trailing character.
    #[error("bad input length {len} for groups of {group}")]
    BadLength {
        /// The rejected input length.
        len: usize,
        /// The group width the length was checked against.
        group: usize,
    },
    /// The output length of an input of `len` units does not fit in a
    /// `usize`.
    #[error("input length {len} is too long to encode")]
    TooLong {
        /// The rejected input length.
        len: usize,
    },
    /// The destination buffer cannot hold the output.
    #[error("buffer too small: need {needed}, have {available}")]
    BufferTooSmall {
        /// The exact output length.
        needed: usize,
        /// The length of the buffer that was provided.
        available: usize,
    },
}

/// Alias of <code>[Result]\<T, [Error]></code>.
pub type Result<T> = core::result::Result<T, Error>;

pub(crate) fn too_long(len: usize) -> Error {
    log::debug!("encoded length of {} overflows", len);
    Error::TooLong {
        len,
    }
}

/// Checks that `out` can hold `needed` units and returns the writable part.
pub(crate) fn reserve(out: &mut [u8], needed: usize) -> Result<&mut [u8]> {
    let available = out.len();
    out.get_mut(..needed).ok_or_else(|| {
        log::debug!("output of {} does not fit in {}", needed, available);
        Error::BufferTooSmall {
            needed,
            available,
        }
    })
}
