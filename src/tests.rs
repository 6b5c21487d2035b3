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

use super::*;

const HELLO: [u8; 8] = [0x86, 0x4f, 0xd2, 0x6f, 0xb5, 0x59, 0xf7, 0x5b];

fn round_trip_core(variant: Variant, data: &[u8]) {
    let mut encoded = [0; 64];
    let len = variant
        .encode_into(data, &mut encoded)
        .expect("encoding failed");
    assert_eq!(Ok(len), variant.encoded_len(data.len()));

    let mut decoded = [0; 64];
    let back = variant
        .decode_into(&encoded[..len], &mut decoded)
        .expect("decoding failed");
    assert_eq!(&decoded[..back], data);
}

#[test]
fn round_trip_extended() {
    let data: [u8; 48] = core::array::from_fn(|i| (i * 37) as u8);
    for len in 0..=data.len() {
        round_trip_core(Variant::Extended, &data[..len]);
    }
}

#[test]
fn round_trip_strict() {
    let data: [u8; 48] = core::array::from_fn(|i| (i * 37 + 3) as u8);
    for len in (0..=data.len()).step_by(4) {
        round_trip_core(Variant::Strict, &data[..len]);
    }
}

#[test]
fn variants_agree_on_full_groups() {
    for len in [0, 4, 8] {
        let mut strict = [0; 10];
        let mut extended = [0; 10];
        let a = Variant::Strict.encode_into(&HELLO[..len], &mut strict);
        let b = Variant::Extended.encode_into(&HELLO[..len], &mut extended);
        assert_eq!(a, b);
        assert_eq!(strict, extended);
    }
}

#[test]
fn strict_rejects_what_extended_accepts() {
    let mut out = [0; 16];
    Variant::Strict.encode_into(&HELLO[..3], &mut out).expect_err("3 bytes");
    assert_eq!(Variant::Extended.encode_into(&HELLO[..3], &mut out), Ok(4));
    Variant::Strict.decode_into(&out[..4], &mut [0; 16]).expect_err("4 chars");
}

#[test]
fn lone_char_rejected_by_both() {
    for len in (1..40).step_by(5) {
        let chars = [b'0'; 40];
        for variant in [Variant::Strict, Variant::Extended] {
            variant
                .decode_into(&chars[..len], &mut [0; 40])
                .expect_err("remainder of 1");
        }
    }
}

#[test]
fn digits_match_alphabet() {
    for v in 0..85 {
        let d = Digit::new(v).expect("digit in range");
        assert_eq!(Digit::from_char(d.to_char()), Some(d));
    }
    for c in alphabet::ENCODER {
        let d = Digit::from_char(c).expect("char in alphabet");
        assert_eq!(d.to_char(), c);
    }
}

#[test]
fn variant_lengths_never_overflow() {
    for variant in [Variant::Strict, Variant::Extended] {
        variant.encoded_len(usize::MAX - 3).expect_err("overflows");
        assert_eq!(
            variant.encoded_len(usize::MAX / 5 * 4),
            Ok(usize::MAX / 5 * 5),
        );
    }
}

#[test]
fn default_variant() {
    assert_eq!(Variant::default(), Variant::Extended);
}

#[cfg(feature = "std")]
#[test]
fn error_display() {
    let err = Error::BadLength {
        len: 6,
        group: 5,
    };
    assert_eq!(err.to_string(), "bad input length 6 for groups of 5");
    let err = Error::BufferTooSmall {
        needed: 10,
        available: 9,
    };
    assert_eq!(err.to_string(), "buffer too small: need 10, have 9");
    let err = Error::TooLong {
        len: usize::MAX,
    };
    assert_eq!(
        err.to_string(),
        format!("input length {} is too long to encode", usize::MAX),
    );
}

#[cfg(feature = "alloc")]
#[test]
fn allocating_variants() {
    assert_eq!(
        Variant::Strict.encode_to_string(&HELLO).as_deref(),
        Ok("HelloWorld"),
    );
    assert_eq!(
        Variant::Extended.decode_to_vec("HelloWorld").as_deref(),
        Ok(&HELLO[..]),
    );
    Variant::Strict.decode_to_vec("Hello2b").expect_err("7 chars");
    assert_eq!(
        Variant::Extended.decode_to_vec("Hello2b").as_deref(),
        Ok(&HELLO[..5]),
    );
}
