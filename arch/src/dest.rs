use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumIter, EnumString};

/// Destination field: bits `d1 d2 d3` select `A`, `D` and `M` respectively.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    EnumString,
    Display,
    EnumIter,
)]
#[repr(u8)]
pub enum Dest {
    #[strum(serialize = "null")]
    Null = 0b000,
    M = 0b001,
    D = 0b010,
    MD = 0b011,
    A = 0b100,
    AM = 0b101,
    AD = 0b110,
    AMD = 0b111,
}

impl Dest {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(dest) => Ok(dest),
            Err(_) => Err(format!("Unknown dest: `{s}`")),
        }
    }

    pub fn code(self) -> u8 {
        self.into()
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::try_from(code).ok()
    }
}
