use std::fmt::Display;
use std::str::FromStr;

use crate::error::{ColorFormatViolation, Error};
use crate::Result;

/// An 8-bit RGBA color value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Color {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, u8::MAX)
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Parses `RRGGBB` or `RRGGBBAA`, optionally prefixed by a single `#`.
    /// Hex digits are case-insensitive and alpha defaults to 255.
    pub fn parse(text: &str) -> Result<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        let invalid = |reason| Error::InvalidColorFormat {
            input: text.to_owned(),
            reason,
        };
        let length = digits.chars().count();
        if length != 6 && length != 8 {
            return Err(invalid(ColorFormatViolation::WrongLength(length)));
        }
        if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(invalid(ColorFormatViolation::NonHexCharacters));
        }
        // all bytes are ascii from here on
        let channel = |index: usize| {
            u8::from_str_radix(&digits[index..index + 2], 16)
                .map_err(|_| invalid(ColorFormatViolation::NonHexCharacters))
        };
        let alpha = if length == 8 { channel(6)? } else { u8::MAX };
        Ok(Color::new(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Eight uppercase hex digits without a leading `#`.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    fn channels(&self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// True if no channel differs from `other` by more than `tolerance`.
    /// Alpha takes part in the comparison like any other channel.
    pub fn matches(&self, other: &Color, tolerance: u8) -> bool {
        self.channels()
            .iter()
            .zip(other.channels().iter())
            .all(|(a, b)| a.abs_diff(*b) <= tolerance)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02X}{:02X}{:02X}{:02X}",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

impl From<[u8; 4]> for Color {
    fn from(value: [u8; 4]) -> Self {
        let [red, green, blue, alpha] = value;
        Color::new(red, green, blue, alpha)
    }
}

impl From<Color> for [u8; 4] {
    fn from(value: Color) -> Self {
        value.channels()
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(value: image::Rgba<u8>) -> Self {
        Color::from(value.0)
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(value: Color) -> Self {
        image::Rgba(value.channels())
    }
}
