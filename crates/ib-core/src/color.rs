use crate::error::CoreError;

/// Couleur RGB 8 bits par canal.
///
/// # Example
/// ```
/// use ib_core::color::Rgb;
/// let red = Rgb::new(255, 0, 0);
/// assert_eq!(red.to_array(), [255, 0, 0]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Distance euclidienne au carré dans l'espace RGB.
    ///
    /// # Example
    /// ```
    /// use ib_core::color::Rgb;
    /// let d = Rgb::new(0, 0, 0).distance_sq(Rgb::new(3, 4, 0));
    /// assert_eq!(d, 25);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn distance_sq(self, other: Self) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Parse une couleur hexadécimale `RRGGBB` ou `RGB`, `#` optionnel.
///
/// The shorthand form doubles each digit, so `f0a` reads as `ff00aa`.
///
/// # Errors
/// Returns [`CoreError::InvalidHex`] if the string has the wrong length or
/// contains a non-hex digit.
///
/// # Example
/// ```
/// use ib_core::color::{parse_hex, Rgb};
/// assert_eq!(parse_hex("ff0000").unwrap(), Rgb::new(255, 0, 0));
/// assert_eq!(parse_hex("#0F0").unwrap(), Rgb::new(0, 255, 0));
/// assert!(parse_hex("nope").is_err());
/// ```
pub fn parse_hex(value: &str) -> Result<Rgb, CoreError> {
    let invalid = || CoreError::InvalidHex {
        value: value.to_string(),
    };

    let digits = value.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    match digits.len() {
        6 => Ok(Rgb::new(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        3 => {
            // Single digit d expands to dd, i.e. d * 0x11.
            let short = |s: &str| channel(s).map(|v| v * 0x11);
            Ok(Rgb::new(
                short(&digits[0..1])?,
                short(&digits[1..2])?,
                short(&digits[2..3])?,
            ))
        }
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_form_case_insensitive() {
        assert_eq!(parse_hex("FFFFFF").unwrap(), Rgb::new(255, 255, 255));
        assert_eq!(parse_hex("00ff7F").unwrap(), Rgb::new(0, 255, 127));
        assert_eq!(parse_hex("#222222").unwrap(), Rgb::new(34, 34, 34));
    }

    #[test]
    fn expands_shorthand() {
        assert_eq!(parse_hex("fff").unwrap(), Rgb::new(255, 255, 255));
        assert_eq!(parse_hex("#a1c").unwrap(), Rgb::new(0xaa, 0x11, 0xcc));
    }

    #[test]
    fn rejects_malformed_values() {
        for bad in ["", "#", "ff00", "ff00000", "gg0000", "+f0000", "ff 000"] {
            assert_eq!(
                parse_hex(bad),
                Err(CoreError::InvalidHex {
                    value: bad.to_string()
                }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Rgb::new(10, 200, 30);
        let b = Rgb::new(250, 0, 90);
        assert_eq!(a.distance_sq(b), b.distance_sq(a));
        assert_eq!(a.distance_sq(a), 0);
        assert_eq!(
            Rgb::new(0, 0, 0).distance_sq(Rgb::new(255, 255, 255)),
            3 * 255 * 255
        );
    }
}
