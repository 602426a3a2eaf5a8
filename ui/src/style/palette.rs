//! Named color tokens used by utility classes (`bg-rabbit-red`, `text-gray-700`).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// An opaque sRGB color written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor([u8; 3]);

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse `#rgb` or `#rrggbb` (case-insensitive).
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor {
            value: value.to_string(),
        };
        let digits = value.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                let mut out = [0u8; 3];
                for (slot, i) in out.iter_mut().zip(0..3) {
                    let c = channel(&digits[i..i + 1])?;
                    *slot = c * 0x11;
                }
                Ok(Self(out))
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

/// Ordered mapping from token name to color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(BTreeMap<String, HexColor>);

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// The part of Tailwind's default palette the storefront markup uses.
    pub fn tailwind_base() -> Self {
        [
            ("black", HexColor::rgb(0x00, 0x00, 0x00)),
            ("white", HexColor::rgb(0xff, 0xff, 0xff)),
            ("gray-300", HexColor::rgb(0xd1, 0xd5, 0xdb)),
            ("gray-700", HexColor::rgb(0x37, 0x41, 0x51)),
        ]
        .into_iter()
        .collect()
    }

    pub fn insert(&mut self, name: impl Into<String>, color: HexColor) -> Option<HexColor> {
        self.0.insert(name.into(), color)
    }

    pub fn get(&self, name: &str) -> Option<HexColor> {
        self.0.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, HexColor)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Layer `extension` over `self`. Existing tokens are kept; a token
    /// present in both takes the extension's value.
    pub fn extended_with(&self, extension: &Palette) -> Palette {
        let mut merged = self.clone();
        merged
            .0
            .extend(extension.0.iter().map(|(k, v)| (k.clone(), *v)));
        merged
    }
}

impl<K: Into<String>> FromIterator<(K, HexColor)> for Palette {
    fn from_iter<I: IntoIterator<Item = (K, HexColor)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_forms() {
        assert_eq!(HexColor::parse("#EA2E0E").unwrap().to_string(), "#ea2e0e");
        assert_eq!(HexColor::parse("#fff").unwrap(), HexColor::rgb(255, 255, 255));
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["ea2e0e", "#ea2e0", "#gg0000", "#", "red", "#ea2e0e00"] {
            assert!(
                matches!(HexColor::parse(bad), Err(Error::InvalidColor { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn extension_adds_without_removing() {
        let base = Palette::tailwind_base();
        let ext: Palette = [("rabbit-red", HexColor::rgb(0xea, 0x2e, 0x0e))]
            .into_iter()
            .collect();
        let merged = base.extended_with(&ext);
        assert_eq!(merged.len(), base.len() + 1);
        for (name, color) in base.iter() {
            assert_eq!(merged.get(name), Some(color));
        }
        assert_eq!(merged.get("rabbit-red").unwrap().to_string(), "#ea2e0e");
    }

    #[test]
    fn extension_overrides_same_named_token() {
        let base = Palette::tailwind_base();
        let ext: Palette = [("black", HexColor::rgb(0x11, 0x11, 0x11))]
            .into_iter()
            .collect();
        let merged = base.extended_with(&ext);
        assert_eq!(merged.len(), base.len());
        assert_eq!(merged.get("black"), Some(HexColor::rgb(0x11, 0x11, 0x11)));
    }
}
