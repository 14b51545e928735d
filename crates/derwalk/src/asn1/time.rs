//! UTCTime decoding to POSIX seconds.

use super::Token;
use derwalk_types::Asn1Error;

const SECONDS_PER_YEAR: i64 = 31_536_000;
const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

// Y, M, D, H, "Z"
const MIN_TIME_LEN: usize = 4 * 2 + 1;

const DAYS_PER_MONTH: [i64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

fn decode_pair(data: &[u8], at: usize) -> Result<i64, Asn1Error> {
    match (data.get(at), data.get(at + 1)) {
        (Some(&a), Some(&b)) if a.is_ascii_digit() && b.is_ascii_digit() => {
            Ok(i64::from(a - b'0') * 10 + i64::from(b - b'0'))
        }
        _ => Err(Asn1Error::Invalid),
    }
}

impl<'a> Token<'a> {
    /// Decode a UTCTime of the form `YYMMDDHHMM[SS]Z` to POSIX seconds.
    ///
    /// Two-digit years map per the X.509 window: 00–49 to 2000–2049 and
    /// 50–99 to 1950–1999. Timezone offsets other than `Z` are rejected,
    /// as is anything after the terminator.
    pub fn time(&self) -> Result<i64, Asn1Error> {
        if !self.is_time() {
            return Err(Asn1Error::Invalid);
        }

        let data = self.data;
        if data.len() < MIN_TIME_LEN {
            return Err(Asn1Error::Invalid);
        }

        let mut year = decode_pair(data, 0)?;
        let month = decode_pair(data, 2)?;
        let day = decode_pair(data, 4)?;
        let hour = decode_pair(data, 6)?;
        let minute = decode_pair(data, 8)?;

        let mut pos = 10;
        let mut second = 0;
        if data.get(pos) != Some(&b'Z') {
            // Seconds plus the terminator still have to fit.
            if pos + 2 >= data.len() {
                return Err(Asn1Error::Invalid);
            }
            second = decode_pair(data, pos)?;
            pos += 2;
        }

        if data.get(pos) != Some(&b'Z') || pos + 1 != data.len() {
            return Err(Asn1Error::Invalid);
        }

        // 00 -> 2000, 49 -> 2049, 50 -> 1950, 99 -> 1999
        year += if year > 49 { 1900 } else { 2000 };

        let is_leap = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);

        if !(1..=12).contains(&month) {
            return Err(Asn1Error::Invalid);
        }

        let days_in_month = if is_leap && month == 2 {
            29
        } else {
            DAYS_PER_MONTH[(month - 1) as usize]
        };
        if !(1..=days_in_month).contains(&day) {
            return Err(Asn1Error::Invalid);
        }

        if hour > 23 || minute > 59 || second > 59 {
            return Err(Asn1Error::Invalid);
        }

        // Per-year accumulation with a corrective leap-day term; exact for
        // the 1950-2049 UTCTime window. The first term must round toward
        // negative infinity so pre-1968 years count 1968's leap day.
        let mut leap_days =
            (year - 1968).div_euclid(4) - (year - 1900) / 100 + (year - 1600) / 400;
        if is_leap && month < 3 {
            leap_days -= 1;
        }

        let mut time = (year - 1970) * SECONDS_PER_YEAR;
        for m in 0..(month - 1) as usize {
            time += DAYS_PER_MONTH[m] * SECONDS_PER_DAY;
        }
        time += (day - 1) * SECONDS_PER_DAY;
        time += hour * SECONDS_PER_HOUR;
        time += minute * SECONDS_PER_MINUTE;
        time += second;
        time += leap_days * SECONDS_PER_DAY;

        Ok(time)
    }
}
