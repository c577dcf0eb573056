//! Channel math for sampled pixels.
//!
//! Channels are coerced the way a lenient integer parser would read them:
//! floats truncate, strings read their leading digits, anything that is not
//! a number becomes 0. Numeric values are clamped to 0–255.

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// A value that can be coerced into a color channel.
pub trait Channel {
    /// Integer value of the channel, or `None` when it is not numeric.
    fn to_channel(&self) -> Option<i64>;
}

macro_rules! int_channel {
    ($($t:ty),*) => {
        $(impl Channel for $t {
            fn to_channel(&self) -> Option<i64> {
                Some(i64::from(*self))
            }
        })*
    };
}

int_channel!(u8, u16, u32, i8, i16, i32, i64);

impl Channel for u64 {
    fn to_channel(&self) -> Option<i64> {
        Some(i64::try_from(*self).unwrap_or(i64::MAX))
    }
}

impl Channel for usize {
    fn to_channel(&self) -> Option<i64> {
        Some(i64::try_from(*self).unwrap_or(i64::MAX))
    }
}

impl Channel for f64 {
    fn to_channel(&self) -> Option<i64> {
        // `as` saturates, so huge finite values still clamp to 255 below.
        self.is_finite().then(|| self.trunc() as i64)
    }
}

impl Channel for f32 {
    fn to_channel(&self) -> Option<i64> {
        f64::from(*self).to_channel()
    }
}

impl Channel for str {
    fn to_channel(&self) -> Option<i64> {
        let s = self.trim_start();
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let end = digits
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(digits.len());
        if end == 0 {
            return None;
        }
        // Overflowing digit runs saturate rather than failing.
        let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
        Some(if negative { -magnitude } else { magnitude })
    }
}

impl Channel for String {
    fn to_channel(&self) -> Option<i64> {
        self.as_str().to_channel()
    }
}

impl<T: Channel> Channel for Option<T> {
    fn to_channel(&self) -> Option<i64> {
        self.as_ref().and_then(Channel::to_channel)
    }
}

impl<T: Channel + ?Sized> Channel for &T {
    fn to_channel(&self) -> Option<i64> {
        (**self).to_channel()
    }
}

/// Two uppercase hex digits for one channel. Non-numeric input gives `"00"`.
pub fn channel_to_hex(n: impl Channel) -> String {
    let Some(n) = n.to_channel() else {
        return "00".to_string();
    };
    let n = n.clamp(0, 255) as usize;
    let mut out = String::with_capacity(2);
    out.push(HEX_DIGITS[n / 16] as char);
    out.push(HEX_DIGITS[n % 16] as char);
    out
}

/// Six uppercase hex digits (`RRGGBB`, no `#`) for a channel triple.
pub fn channels_to_hex(r: impl Channel, g: impl Channel, b: impl Channel) -> String {
    let mut out = channel_to_hex(r);
    out.push_str(&channel_to_hex(g));
    out.push_str(&channel_to_hex(b));
    out
}

/// Clamp `v` into `[lo, hi]`, collapsing to the midpoint when the span is inverted.
///
/// `f64::clamp` panics on an inverted span; degenerate geometry produces
/// exactly that, so every clamp in the picker goes through here.
pub(crate) fn clamp_span(v: f64, lo: f64, hi: f64) -> f64 {
    if lo > hi {
        return (lo + hi) / 2.0;
    }
    v.max(lo).min(hi)
}
