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

use super::alphabet::{DECODER, ENCODER, INVALID};
use super::BASE;

/// A single base-85 digit, always less than 85.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Returns [`None`] if `x` is not less than 85.
    pub fn new(x: u8) -> Option<Self> {
        (u64::from(x) < BASE).then(|| Self(x))
    }

    /// Looks up the digit for a character of the Z85 alphabet.
    ///
    /// Returns [`None`] if `c` is not part of the alphabet. This is the only
    /// place the crate checks alphabet membership; the codecs themselves
    /// trust their input.
    pub fn from_char(c: u8) -> Option<Self> {
        match DECODER[usize::from(c)] {
            INVALID => None,
            d => Some(Self(d)),
        }
    }

    /// The alphabet character for this digit.
    pub fn to_char(self) -> u8 {
        ENCODER[usize::from(self.0)]
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> u8 {
        d.0
    }
}
