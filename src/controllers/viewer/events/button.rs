/// Edge-triggered pan/zoom input, consumed at most once per occurrence.
///
/// The discriminants match the wire codes reported by the button I/O
/// layer (1 through 4).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum ButtonEvent {
    ZoomIn = 1,
    ZoomOut = 2,
    PanLeft = 3,
    PanRight = 4,
}

impl ButtonEvent {
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::ZoomIn),
            2 => Some(Self::ZoomOut),
            3 => Some(Self::PanLeft),
            4 => Some(Self::PanRight),
            _ => None,
        }
    }

    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }
}
