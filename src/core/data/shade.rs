/// A single pixel state on a 1-bit display.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Shade {
    White,
    Black,
}

impl Shade {
    #[must_use]
    pub fn is_black(self) -> bool {
        self == Shade::Black
    }

    /// Raw pixel bit as sent to the display: 0 draws white, 1 draws black.
    #[must_use]
    pub fn bit(self) -> u8 {
        match self {
            Shade::White => 0,
            Shade::Black => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_bit_is_one() {
        assert_eq!(Shade::Black.bit(), 1);
        assert!(Shade::Black.is_black());
    }

    #[test]
    fn test_white_bit_is_zero() {
        assert_eq!(Shade::White.bit(), 0);
        assert!(!Shade::White.is_black());
    }
}
