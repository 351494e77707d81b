use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumIter, EnumString};

/// Jump condition: bits `j1 j2 j3` are "jump if < 0", "= 0", "> 0".
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
pub enum Jump {
    #[strum(serialize = "null")]
    Null = 0b000,
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

impl Jump {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(jump) => Ok(jump),
            Err(_) => Err(format!("Unknown jump: `{s}`")),
        }
    }

    pub fn code(self) -> u8 {
        self.into()
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::try_from(code).ok()
    }
}

#[test]
fn test() {
    use strum::IntoEnumIterator;
    assert_eq!(Jump::iter().count(), 8);
    for jump in Jump::iter() {
        assert_eq!(Jump::parse(&jump.to_string()), Ok(jump));
        assert_eq!(Jump::from_code(jump.code()), Some(jump));
    }
    assert_eq!(Jump::parse("JMP").map(Jump::code), Ok(0b111));
    assert!(Jump::parse("jmp").is_err());
}
