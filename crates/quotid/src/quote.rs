use std::thread;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

use crate::alphabet::{filter_symbols, render};
use crate::error::{Error, Result};
use crate::pack::{
    TICK_SPAN, TIMESTAMP_BITS, from_symbols, power, salt, to_symbols, unsalt, xor_mix, xor_unmix,
};
use crate::random::{RandSource, ThreadRandom};
use crate::time::{SystemClock, TimeSource, epoch};

/// Characters in a quote number.
pub const QUOTE_LEN: usize = 9;

/// Shortest identifier [`is_valid`] accepts.
pub const MIN_LEN: usize = 8;

/// Longest identifier [`is_valid`] accepts. Wider than anything this codec
/// produces, to admit externally issued identifiers.
pub const MAX_LEN: usize = 15;

/// Random high-order bits in a quote number: whatever the timestamp leaves
/// of the nine-symbol budget.
const SALT_BITS: u32 = QUOTE_LEN as u32 * 5 - TIMESTAMP_BITS as u32;

/// One tick is 100 µs.
const TICK_MICROS: i64 = 100;

/// Mask applied to raw tick counts before salting. One bit wider than the
/// timestamp field; when that extra bit is set it folds into the salt and
/// the decode-time wrap compensation recovers it.
const TICK_MASK: i64 = power(2, TIMESTAMP_BITS + 1) - 1;

/// Everything nine symbols can carry. The salted value is truncated to
/// this so output width never drifts.
const WIDTH_MASK: u64 = (1 << (QUOTE_LEN as u32 * 5)) - 1;

/// Encodes and decodes nine-character quote numbers.
///
/// A quote number carries the 100-µs tick count since [`epoch`], salted
/// with three random high-order bits and run through the XOR cascade so
/// back-to-back issuances look unrelated.
///
/// The default codec reads the system clock and thread-local randomness;
/// tests inject fixed sources through the type parameters.
///
/// # Example
///
/// ```
/// use quotid::QuoteCodec;
///
/// let codec = QuoteCodec::new();
/// let quote = codec.encode(None);
/// assert_eq!(quote.len(), 9);
/// assert!(codec.decode(&quote).unwrap() <= chrono::Utc::now());
/// ```
#[derive(Clone, Debug, Default)]
pub struct QuoteCodec<T = SystemClock, R = ThreadRandom> {
    time: T,
    rng: R,
}

impl QuoteCodec {
    /// Creates a codec over the system clock and thread-local randomness.
    pub fn new() -> Self {
        Self::with_parts(SystemClock, ThreadRandom)
    }
}

impl<T, R> QuoteCodec<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    /// Creates a codec from explicit clock and randomness handles.
    pub const fn with_parts(time: T, rng: R) -> Self {
        Self { time, rng }
    }

    /// Encodes `at` (or the current time) as a quote number.
    ///
    /// When no instant is supplied the codec sleeps 100 µs before reading
    /// the clock, so back-to-back calls land on distinct ticks. Two calls
    /// that still observe the same tick collide with probability 1/8 per
    /// pair; callers needing uniqueness at scale must layer their own
    /// mechanism on top.
    pub fn encode(&self, at: Option<DateTime<Utc>>) -> String {
        let at = at.unwrap_or_else(|| {
            thread::sleep(Duration::from_micros(100));
            self.time.now()
        });
        let ticks = ticks_since_epoch(at);
        let salted = salt(ticks, SALT_BITS, &self.rng) & WIDTH_MASK;
        let symbols = to_symbols(salted, QUOTE_LEN).expect("masked value fits the quote width");
        render(&xor_mix(&symbols))
    }

    /// Recovers the issue instant from a quote number.
    ///
    /// Unknown characters are dropped before decoding and case is
    /// ignored. When the recovered tick count would place the instant
    /// more than one full 42-bit window before now, whole windows are
    /// re-added: the result is the latest interpretation that is not in
    /// the future.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLength`] if fewer than two symbols survive
    /// filtering.
    pub fn decode(&self, s: &str) -> Result<DateTime<Utc>> {
        let symbols = filter_symbols(s);
        if symbols.len() < 2 {
            return Err(Error::InvalidLength(symbols.len()));
        }
        let mut ticks = unsalt(from_symbols(&xor_unmix(&symbols))) as i64;
        let now = self.time.now();
        let span = TimeDelta::microseconds(TICK_SPAN * TICK_MICROS);
        loop {
            let at = epoch() + TimeDelta::microseconds(ticks * TICK_MICROS);
            if at + span > now {
                return Ok(at);
            }
            ticks += TICK_SPAN;
        }
    }

    /// Returns `s` when it passes [`is_valid`], otherwise a fresh quote
    /// number.
    pub fn ensure_valid(&self, s: Option<&str>) -> String {
        match s {
            Some(s) if is_valid(s) => s.to_owned(),
            _ => self.encode(None),
        }
    }
}

/// 100-µs ticks from [`epoch`] to `at`, masked to the tick field.
fn ticks_since_epoch(at: DateTime<Utc>) -> u64 {
    let micros = (at - epoch()).num_microseconds().unwrap_or(i64::MAX);
    ((micros / TICK_MICROS) & TICK_MASK) as u64
}

/// Encodes `at` (or the current time) as a quote number, using the system
/// clock and thread-local randomness. See [`QuoteCodec::encode`].
pub fn encode_quote(at: Option<DateTime<Utc>>) -> String {
    QuoteCodec::new().encode(at)
}

/// Recovers the issue instant from a quote number, using the system clock
/// for wrap compensation. See [`QuoteCodec::decode`].
///
/// # Errors
///
/// [`Error::InvalidLength`] if fewer than two symbols survive filtering.
pub fn decode_quote(s: &str) -> Result<DateTime<Utc>> {
    QuoteCodec::new().decode(s)
}

/// Whether `s` has a plausible identifier length: between [`MIN_LEN`] and
/// [`MAX_LEN`] bytes inclusive. Content is not inspected.
pub fn is_valid(s: &str) -> bool {
    (MIN_LEN..=MAX_LEN).contains(&s.len())
}

/// Returns `s` when it passes [`is_valid`], otherwise a fresh quote
/// number.
pub fn ensure_valid(s: Option<&str>) -> String {
    QuoteCodec::new().ensure_valid(s)
}
