//! RGB24 colours as exchanged with the host: `"#rrggbb"` strings.
//!
//! Channels are stored as 8-bit sRGB values. Blending is a plain per-channel
//! linear mix in encoded space, matching what the consumer's colour ramp
//! expects.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EaselError;

/// An 8-bit-per-channel RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor(pub Srgb<u8>);

impl HexColor {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    pub fn channels(self) -> [u8; 3] {
        [self.0.red, self.0.green, self.0.blue]
    }

    /// Blend `a` towards `b` by `t` in `[0, 1]`.
    ///
    /// Each channel is computed as `a + (b - a) × t` and then truncated, so
    /// a midpoint blend of 0 and 255 gives 127.
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let [ar, ag, ab] = a.channels();
        let [br, bg, bb] = b.channels();
        Self::new(mix(ar, br, t), mix(ag, bg, t), mix(ab, bb, t))
    }

    /// RGBA8 with opaque alpha, for texture upload.
    pub fn to_rgba8(self) -> [u8; 4] {
        let [r, g, b] = self.channels();
        [r, g, b, 255]
    }
}

fn mix(a: u8, b: u8, t: f32) -> u8 {
    let a = f32::from(a);
    let b = f32::from(b);
    (a + (b - a) * t).floor().clamp(0.0, 255.0) as u8
}

impl Default for HexColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.channels();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for HexColor {
    type Err = EaselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(EaselError::InvalidColor(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| EaselError::InvalidColor(s.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
