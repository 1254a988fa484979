use crate::alphabet::BITS_PER_SYMBOL;
use crate::error::{Error, Result};
use crate::random::RandSource;

/// Bits devoted to the timestamp inside a quote number. 42 bits of 100-µs
/// ticks spans just under 14 years from the epoch.
pub const TIMESTAMP_BITS: i32 = 42;

/// Number of distinct timestamp payloads; also the span the decode-time
/// wrap compensation re-adds.
pub(crate) const TICK_SPAN: i64 = power(2, TIMESTAMP_BITS);

/// Raises `x` to the power `n` by repeated squaring.
///
/// The masks and spans of this codec are all powers of two derived through
/// this at compile time. No overflow checking: callers ensure the result
/// fits in 64 bits.
pub const fn power(x: i64, n: i32) -> i64 {
    if n == 0 {
        return 1;
    }
    if n == 1 {
        return x;
    }
    let squared = x * x;
    if n % 2 == 0 {
        power(squared, n / 2)
    } else {
        x * power(squared, (n - 1) / 2)
    }
}

/// Splits `value` into exactly `width` symbols, big-endian (index 0 is most
/// significant), zero-padded at the high end.
///
/// # Errors
///
/// [`Error::ValueTooWide`] if `value` needs more than `width * 5` bits.
/// The encoders mask their payloads before packing, so hitting this means
/// a caller bug.
pub fn to_symbols(value: u64, width: usize) -> Result<Vec<u8>> {
    let bits = width * BITS_PER_SYMBOL;
    if bits < u64::BITS as usize && (value >> bits) != 0 {
        return Err(Error::ValueTooWide { value, width });
    }
    let mut symbols = vec![0u8; width];
    let mut rest = value;
    for slot in symbols.iter_mut().rev() {
        *slot = (rest & 0x1F) as u8;
        rest >>= BITS_PER_SYMBOL;
    }
    Ok(symbols)
}

/// Folds a big-endian symbol sequence back into an integer.
///
/// Sequences wider than 64 bits lose their highest bits, which is the
/// accept-and-decode-anyway behaviour the identifier tolerance calls for.
pub fn from_symbols(symbols: &[u8]) -> u64 {
    symbols
        .iter()
        .fold(0u64, |acc, &s| (acc << BITS_PER_SYMBOL) | u64::from(s & 0x1F))
}

/// Adds `salt_bits` random high-order bits above the timestamp field, so
/// identifiers issued on the same tick (or on different machines) diverge.
pub fn salt<R: RandSource>(value: u64, salt_bits: u32, rng: &R) -> u64 {
    let r = rng.rand() & ((1u64 << salt_bits) - 1);
    (r << TIMESTAMP_BITS) + value
}

/// Strips the salt, leaving the timestamp field.
pub fn unsalt(value: u64) -> u64 {
    value & (TICK_SPAN as u64 - 1)
}

/// Cascades every symbol into all later ones: `o[0] = s[0] ^ s[L-1]`, then
/// `o[i] = o[i-1] ^ s[i]`.
///
/// The lowest-order input symbol moves 10 000 times a second, and the
/// cascade smears that movement across the whole sequence, so adjacent
/// issuances look unrelated. This is obfuscation, not a MAC.
///
/// Requires at least two symbols.
pub fn xor_mix(src: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len());
    out.push(src[0] ^ src[src.len() - 1]);
    for i in 1..src.len() {
        out.push(out[i - 1] ^ src[i]);
    }
    out
}

/// Inverse of [`xor_mix`]. Requires at least two symbols.
pub fn xor_unmix(src: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len());
    out.push(src[src.len() - 1] ^ src[src.len() - 2] ^ src[0]);
    for i in 1..src.len() {
        out.push(src[i - 1] ^ src[i]);
    }
    out
}
