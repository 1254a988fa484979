use chrono::{DateTime, Utc};

/// Quote epoch: Thursday, January 1, 2015 00:00:00 UTC, in unix seconds.
///
/// Part of the wire format. Changing it silently re-dates every identifier
/// already issued.
pub const EPOCH_SECS: i64 = 1_420_070_400;

/// Birthdate epoch: Saturday, January 1, 1910 12:00:00 UTC, in unix
/// seconds. Composite identifiers store dates of birth as whole days after
/// this instant, which reaches about 179 years with 16 bits.
///
/// Also part of the wire format.
pub const BIRTH_EPOCH_SECS: i64 = -1_893_412_800;

/// The instant quote-number ticks are counted from.
pub fn epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(EPOCH_SECS, 0).expect("epoch is representable")
}

/// The instant composite day-of-birth offsets are counted from.
pub fn birth_epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(BIRTH_EPOCH_SECS, 0).expect("birth epoch is representable")
}

/// A source of the current UTC wall-clock time.
///
/// This seam lets tests pin the clock; production code uses
/// [`SystemClock`].
///
/// # Example
///
/// ```
/// use chrono::{DateTime, Utc};
/// use quotid::{TimeSource, epoch};
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn now(&self) -> DateTime<Utc> {
///         epoch()
///     }
/// }
///
/// assert_eq!(FixedTime.now(), epoch());
/// ```
pub trait TimeSource {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn epochs_land_on_the_documented_instants() {
        let e = epoch();
        assert_eq!((e.year(), e.month(), e.day()), (2015, 1, 1));
        assert_eq!((e.hour(), e.minute(), e.second()), (0, 0, 0));

        let b = birth_epoch();
        assert_eq!((b.year(), b.month(), b.day()), (1910, 1, 1));
        assert_eq!((b.hour(), b.minute(), b.second()), (12, 0, 0));
    }

    #[test]
    fn system_clock_tracks_utc() {
        let before = Utc::now();
        let observed = SystemClock.now();
        let after = Utc::now();
        assert!(before <= observed && observed <= after);
    }
}
