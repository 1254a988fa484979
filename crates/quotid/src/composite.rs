use chrono::{Datelike, TimeDelta, TimeZone, Utc};

use crate::alphabet::{filter_symbols, render};
use crate::error::{Error, Result};
use crate::fingerprint::name_fingerprint;
use crate::pack::{from_symbols, to_symbols, xor_mix, xor_unmix};
use crate::time::birth_epoch;

/// Characters in a composite identifier.
pub const COMPOSITE_LEN: usize = 12;

const DAY_BITS: u32 = 16;
const ID_BITS: u32 = 32;
const DAY_MASK: u64 = (1 << DAY_BITS) - 1;

/// Encodes an id, a name, and a date of birth as a twelve-character
/// identifier.
///
/// The 60-bit payload is, high to low: the 12-bit name fingerprint, the id
/// bit-reinterpreted as unsigned, and the whole days from the birth epoch
/// to noon UTC of the given date. Id and date are recoverable; the name
/// enters only through [`name_fingerprint`] and serves as a confirmation
/// check on decode.
///
/// Dates on or before the birth epoch, and dates that do not exist on the
/// calendar, encode as day zero.
///
/// # Example
///
/// ```
/// let key = quotid::encode_composite(601_123_456, "NG", 1980, 6, 15);
/// assert_eq!(key, "8HTRDXBFFZXJ");
/// ```
pub fn encode_composite(id: i32, name: &str, year: i32, month: u32, day: u32) -> String {
    let fingerprint = u64::from(name_fingerprint(name));
    let days = days_since_birth_epoch(year, month, day) as u64 & DAY_MASK;
    let payload = (fingerprint << (ID_BITS + DAY_BITS)) | (u64::from(id as u32) << DAY_BITS) | days;
    let symbols =
        to_symbols(payload, COMPOSITE_LEN).expect("sixty-bit payload fits the composite width");
    render(&xor_mix(&symbols))
}

/// Recovers `(id, name fingerprint, year, month, day)` from a composite
/// identifier.
///
/// Unknown characters are dropped before decoding and case is ignored.
/// Random noise of a workable length decodes to whatever the bits say;
/// the fingerprint is the caller's confirmation that the identifier
/// belongs to the name they hold.
///
/// # Errors
///
/// [`Error::InvalidLength`] if fewer than two symbols survive filtering.
pub fn decode_composite(s: &str) -> Result<(i32, u32, i32, u32, u32)> {
    let symbols = filter_symbols(s);
    if symbols.len() < 2 {
        return Err(Error::InvalidLength(symbols.len()));
    }
    let mut payload = from_symbols(&xor_unmix(&symbols));

    let days = (payload & DAY_MASK) as i64;
    payload >>= DAY_BITS;
    let id = (payload & u64::from(u32::MAX)) as u32 as i32;
    payload >>= ID_BITS;
    let fingerprint = payload as u32;

    let dob = birth_epoch() + TimeDelta::days(days);
    Ok((id, fingerprint, dob.year(), dob.month(), dob.day()))
}

/// Whole days from the birth epoch to noon UTC of the given date, clamped
/// at zero.
fn days_since_birth_epoch(year: i32, month: u32, day: u32) -> i64 {
    match Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).single() {
        Some(dob) => (dob - birth_epoch()).num_days().max(0),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn known_vector_round_trips() {
        let key = encode_composite(601_123_456, "NG", 1980, 6, 15);
        assert_eq!(key.len(), COMPOSITE_LEN);
        assert_eq!(key, "8HTRDXBFFZXJ");
        assert_eq!(
            decode_composite(&key).unwrap(),
            (601_123_456, 822, 1980, 6, 15)
        );
    }

    #[test]
    fn id_extremes_round_trip_with_intact_fingerprint() {
        for id in [0, 1, -1, i32::MIN, i32::MAX] {
            let key = encode_composite(id, "smith", 1955, 11, 30);
            let (back_id, fingerprint, y, m, d) = decode_composite(&key).unwrap();
            assert_eq!(back_id, id, "id {id}");
            assert_eq!(fingerprint, u32::from(name_fingerprint("smith")));
            assert_eq!((y, m, d), (1955, 11, 30));
        }
    }

    #[test]
    fn birth_epoch_date_is_day_zero() {
        let key = encode_composite(42, "ng", 1910, 1, 1);
        assert_eq!(decode_composite(&key).unwrap(), (42, 822, 1910, 1, 1));
    }

    #[test]
    fn pre_epoch_and_impossible_dates_clamp_to_day_zero() {
        let epoch_key = encode_composite(7, "abc", 1910, 1, 1);
        assert_eq!(encode_composite(7, "abc", 1900, 5, 4), epoch_key);
        assert_eq!(encode_composite(7, "abc", 2001, 2, 30), epoch_key);
    }

    #[test]
    fn name_matters_only_through_its_fingerprint() {
        let base = encode_composite(99, "O'Brien", 1970, 2, 3);
        assert_eq!(encode_composite(99, "obrien", 1970, 2, 3), base);
        assert_eq!(encode_composite(99, "OBRIEN", 1970, 2, 3), base);
        // 822 vs 131: different fingerprints must produce different keys.
        assert_ne!(
            encode_composite(99, "ng", 1970, 2, 3),
            encode_composite(99, "abc", 1970, 2, 3)
        );
    }

    #[test]
    fn output_stays_inside_the_alphabet() {
        let key = encode_composite(i32::MAX, "hernandez", 2024, 12, 31);
        for c in key.chars() {
            assert!(!"AIOU".contains(c), "ambiguous {c} in {key}");
            assert!(crate::alphabet::ALPHABET.contains(&(c as u8)));
        }
    }

    #[test]
    fn decode_ignores_case_and_punctuation() {
        let key = encode_composite(314, "walker", 1988, 7, 21);
        let mangled = format!("{} {}", &key[..6].to_lowercase(), &key[6..]);
        assert_eq!(
            decode_composite(&mangled).unwrap(),
            decode_composite(&key).unwrap()
        );
    }

    #[test]
    fn decode_rejects_inputs_without_symbols() {
        assert_eq!(decode_composite(""), Err(Error::InvalidLength(0)));
        assert_eq!(decode_composite("?!"), Err(Error::InvalidLength(0)));
    }

    #[test]
    fn random_triples_round_trip() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let id: i32 = rng.random();
            let year = rng.random_range(1910..2060);
            let month = rng.random_range(1..=12);
            let day = rng.random_range(1..=28);
            let len = rng.random_range(2..=12);
            let name: String = (0..len).map(|_| rng.random_range('a'..='z')).collect();

            let key = encode_composite(id, &name, year, month, day);
            assert_eq!(key.len(), COMPOSITE_LEN);
            assert_eq!(
                decode_composite(&key).unwrap(),
                (id, u32::from(name_fingerprint(&name)), year, month, day),
                "id {id} name {name} dob {year}-{month}-{day}"
            );
        }
    }
}
