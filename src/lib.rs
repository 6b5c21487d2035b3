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

//! Z85 encoding, plus an extension for data of any length.
//!
//! [`strict`] implements Z85 exactly as ZeroMQ RFC 32 defines it: every 4
//! bytes become 5 characters from a fixed printable alphabet, and lengths
//! that don't fit that grid are rejected. [`extended`] additionally encodes
//! a trailing group of 1 to 3 bytes as 2 to 4 characters.
//!
//! ```
//! # #[cfg(feature = "alloc")] {
//! let bytes = [0x86, 0x4f, 0xd2, 0x6f, 0xb5, 0x59, 0xf7, 0x5b];
//! let text = z85ext::strict::encode_to_string(&bytes).unwrap();
//! assert_eq!(text, "HelloWorld");
//! assert_eq!(z85ext::extended::encode_to_string(&bytes[..5]), "Hello2b");
//! # }
//! ```
//!
//! Decoders don't validate their input: characters outside the alphabet
//! produce unspecified bytes (but never a panic). Use [`Digit::from_char`]
//! to check untrusted input first.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod alphabet;
mod digit;
mod error;
pub mod extended;
mod group;
pub mod strict;
mod variant;

#[cfg(test)]
mod tests;

const BYTES_PER_GROUP: usize = 4;
const CHARS_PER_GROUP: usize = 5;
const BASE: u64 = 85;

pub use digit::Digit;
pub use error::{Error, Result};
pub use variant::Variant;

#[cfg(feature = "alloc")]
fn ascii_to_string(ascii: alloc::vec::Vec<u8>) -> alloc::string::String {
    #[cfg(debug_assertions)]
    let ascii = alloc::string::String::from_utf8(ascii)
        .expect("[debug] encoded data is not valid ascii -- this is UB!")
        .into_bytes();

    // SAFETY: The encoders only write bytes from `alphabet::ENCODER`, which
    // are all ASCII.
    unsafe { alloc::string::String::from_utf8_unchecked(ascii) }
}
