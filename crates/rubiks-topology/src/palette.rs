//! Facelet colour palette.

/// RGB triple in the 0.0 - 1.0 range, as stored in vertex colour buffers.
pub type Rgb = [f32; 3];

/// Number of distinct facelet colours.
pub const COLOUR_COUNT: usize = 6;

/// Colour of every face that no facelet maps onto.
pub const NEUTRAL_HEX: u32 = 0x666666;

/// The six sticker colours, indexed by colour code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FaceletColour {
    White = 0,
    Green = 1,
    Red = 2,
    Blue = 3,
    Orange = 4,
    Yellow = 5,
}

impl FaceletColour {
    /// All colours in code order.
    pub const ALL: [FaceletColour; COLOUR_COUNT] = [
        FaceletColour::White,
        FaceletColour::Green,
        FaceletColour::Red,
        FaceletColour::Blue,
        FaceletColour::Orange,
        FaceletColour::Yellow,
    ];

    /// Look up a colour by its code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// The colour code used in facelet states.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Packed `0xRRGGBB` display colour.
    pub fn hex(self) -> u32 {
        match self {
            FaceletColour::White => 0xffffff,
            FaceletColour::Green => 0x009b48,
            FaceletColour::Red => 0xb71234,
            FaceletColour::Blue => 0x0046ad,
            FaceletColour::Orange => 0xff5800,
            FaceletColour::Yellow => 0xffd500,
        }
    }

    pub fn rgb(self) -> Rgb {
        rgb_from_hex(self.hex())
    }
}

/// Unpack a `0xRRGGBB` value into normalised channels.
pub fn rgb_from_hex(hex: u32) -> Rgb {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0)]
}

/// Neutral body colour.
pub fn neutral() -> Rgb {
    rgb_from_hex(NEUTRAL_HEX)
}

/// Display colour for a colour code. Codes outside the palette render neutral.
pub fn colour(code: u8) -> Rgb {
    FaceletColour::from_code(code)
        .map(FaceletColour::rgb)
        .unwrap_or_else(neutral)
}
