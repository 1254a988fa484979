//! Reversible, human-readable identifier codec.
//!
//! Two encoders share one set of primitives:
//!
//! - a nine-character **quote number** packing a salted 100-µs tick count
//!   since 2015-01-01 UTC;
//! - a twelve-character **composite identifier** packing an id, a
//!   day-of-birth offset from 1910-01-01 UTC, and a 12-bit fingerprint of
//!   a name used for confirmation.
//!
//! Both render through a 32-symbol alphabet that never produces `A`, `I`,
//! `O`, or `U`, and both run a cascading XOR chain over the symbols so
//! adjacent issuances do not look sequential. The chain is obfuscation,
//! not encryption: nothing here resists a determined forger, and nothing
//! guarantees uniqueness beyond a 3-bit random salt per 100-µs tick.
//!
//! # Example
//!
//! ```
//! use quotid::{decode_quote, encode_quote, is_valid};
//!
//! let quote = encode_quote(None);
//! assert!(is_valid(&quote));
//! let issued = decode_quote(&quote)?;
//! assert!(issued <= chrono::Utc::now());
//! # Ok::<(), quotid::Error>(())
//! ```

mod alphabet;
mod composite;
mod error;
mod fingerprint;
mod pack;
mod quote;
mod random;
mod time;

pub use crate::alphabet::*;
pub use crate::composite::*;
pub use crate::error::*;
pub use crate::fingerprint::*;
pub use crate::pack::*;
pub use crate::quote::*;
pub use crate::random::*;
pub use crate::time::*;
