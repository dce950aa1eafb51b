//! RGB color type used for layer styles.

/// An opaque RGB color; transparency lives in the layer style.
///
/// # Examples
///
/// ```
/// use geoscriber::draw::Color;
/// let blue = Color::from_hex("#3388ff").unwrap();
/// assert_eq!(blue.to_hex(), "#3388ff");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Creates a new color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Formats as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Default stroke and fill color of every drawn shape
pub const LEAFLET_BLUE: Color = Color::new(0x33, 0x88, 0xff);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(Color::from_hex("#3388ff"), Some(LEAFLET_BLUE));
        assert_eq!(Color::from_hex("3388FF"), Some(LEAFLET_BLUE));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Color::from_hex("#38f"), None);
        assert_eq!(Color::from_hex("#zz88ff"), None);
        assert_eq!(Color::from_hex(""), None);
    }
}
