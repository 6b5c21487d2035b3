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

use super::error::Result;
use super::{extended, strict};

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

/// Selects which codec to use at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Plain Z85; see [`strict`].
    Strict,
    /// Z85 for any length; see [`extended`]. This is the default.
    Extended,
}

impl Variant {
    /// Returns the default variant, [`Variant::Extended`].
    pub const fn new() -> Self {
        Self::Extended
    }

    /// The number of characters `len` bytes encode to.
    pub fn encoded_len(self, len: usize) -> Result<usize> {
        match self {
            Self::Strict => strict::encoded_len(len),
            Self::Extended => extended::encoded_len(len),
        }
    }

    /// The number of bytes `len` characters decode to.
    pub fn decoded_len(self, len: usize) -> Result<usize> {
        match self {
            Self::Strict => strict::decoded_len(len),
            Self::Extended => extended::decoded_len(len),
        }
    }

    /// Encodes `bytes` into the start of `out`; see [`strict::encode_into`].
    pub fn encode_into(self, bytes: &[u8], out: &mut [u8]) -> Result<usize> {
        match self {
            Self::Strict => strict::encode_into(bytes, out),
            Self::Extended => extended::encode_into(bytes, out),
        }
    }

    /// Decodes `chars` into the start of `out`; see [`strict::decode_into`].
    pub fn decode_into<C>(self, chars: C, out: &mut [u8]) -> Result<usize>
    where
        C: AsRef<[u8]>,
    {
        match self {
            Self::Strict => strict::decode_into(chars, out),
            Self::Extended => extended::decode_into(chars, out),
        }
    }

    /// Encodes `bytes` as a new [`String`].
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    pub fn encode_to_string(self, bytes: &[u8]) -> Result<String> {
        match self {
            Self::Strict => strict::encode_to_string(bytes),
            Self::Extended => Ok(extended::encode_to_string(bytes)),
        }
    }

    /// Decodes `chars` into a new [`Vec`].
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    pub fn decode_to_vec<C>(self, chars: C) -> Result<Vec<u8>>
    where
        C: AsRef<[u8]>,
    {
        match self {
            Self::Strict => strict::decode_to_vec(chars),
            Self::Extended => extended::decode_to_vec(chars),
        }
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::new()
    }
}
