use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumIter, EnumString};

/// ALU computation field of a compute instruction.
///
/// The discriminant is the 7-bit `a c1 c2 c3 c4 c5 c6` pattern, where `a`
/// selects `M` instead of `A` as the second operand.
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
pub enum Comp {
    #[strum(serialize = "0")]
    Zero = 0b0101010,
    #[strum(serialize = "1")]
    One = 0b0111111,
    #[strum(serialize = "-1")]
    MinusOne = 0b0111010,
    #[strum(serialize = "D")]
    D = 0b0001100,
    #[strum(serialize = "A")]
    A = 0b0110000,
    #[strum(serialize = "M")]
    M = 0b1110000,
    #[strum(serialize = "!D")]
    NotD = 0b0001101,
    #[strum(serialize = "!A")]
    NotA = 0b0110001,
    #[strum(serialize = "!M")]
    NotM = 0b1110001,
    #[strum(serialize = "-D")]
    NegD = 0b0001111,
    #[strum(serialize = "-A")]
    NegA = 0b0110011,
    #[strum(serialize = "-M")]
    NegM = 0b1110011,
    #[strum(serialize = "D+1")]
    IncD = 0b0011111,
    #[strum(serialize = "A+1")]
    IncA = 0b0110111,
    #[strum(serialize = "M+1")]
    IncM = 0b1110111,
    #[strum(serialize = "D-1")]
    DecD = 0b0001110,
    #[strum(serialize = "A-1")]
    DecA = 0b0110010,
    #[strum(serialize = "M-1")]
    DecM = 0b1110010,
    #[strum(serialize = "D+A")]
    AddDA = 0b0000010,
    #[strum(serialize = "D+M")]
    AddDM = 0b1000010,
    #[strum(serialize = "D-A")]
    SubDA = 0b0010011,
    #[strum(serialize = "D-M")]
    SubDM = 0b1010011,
    #[strum(serialize = "A-D")]
    SubAD = 0b0000111,
    #[strum(serialize = "M-D")]
    SubMD = 0b1000111,
    #[strum(serialize = "D&A")]
    AndDA = 0b0000000,
    #[strum(serialize = "D&M")]
    AndDM = 0b1000000,
    #[strum(serialize = "D|A")]
    OrDA = 0b0010101,
    #[strum(serialize = "D|M")]
    OrDM = 0b1010101,
}

impl Comp {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(comp) => Ok(comp),
            Err(_) => Err(format!("Unknown comp: `{s}`")),
        }
    }

    pub fn code(self) -> u8 {
        self.into()
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::try_from(code).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn table_size() {
        assert_eq!(Comp::iter().count(), 28);
    }

    #[test]
    fn mnemonic_round_trip() {
        for comp in Comp::iter() {
            assert_eq!(Comp::parse(&comp.to_string()), Ok(comp));
            assert_eq!(Comp::from_code(comp.code()), Some(comp));
        }
    }

    #[test]
    fn known_codes() {
        assert_eq!(Comp::parse("0").map(Comp::code), Ok(0b0101010));
        assert_eq!(Comp::parse("D+A").map(Comp::code), Ok(0b0000010));
        assert_eq!(Comp::parse("D|M").map(Comp::code), Ok(0b1010101));
        assert!(Comp::parse("A+D").is_err());
        assert!(Comp::parse("d").is_err());
    }
}
