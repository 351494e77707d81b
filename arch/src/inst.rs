use crate::{comp::Comp, dest::Dest, jump::Jump};

use color_print::cformat;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// `@value`. Callers keep the value within `mem::ADDR_MAX`.
    Addr(u16),
    /// `dest=comp;jump`
    Calc { dest: Dest, comp: Comp, jump: Jump },
}

impl Inst {
    pub fn to_bin(&self) -> u16 {
        match *self {
            Inst::Addr(addr) => addr,
            Inst::Calc { dest, comp, jump } => {
                0b111 << 13
                    | (comp.code() as u16) << 6
                    | (dest.code() as u16) << 3
                    | jump.code() as u16
            }
        }
    }

    pub fn from_bin(bin: u16) -> Option<Inst> {
        if bin >> 15 == 0 {
            return Some(Inst::Addr(bin));
        }
        if bin >> 13 != 0b111 {
            return None;
        }
        Some(Inst::Calc {
            comp: Comp::from_code((bin >> 6 & 0x7F) as u8)?,
            dest: Dest::from_code((bin >> 3 & 0x07) as u8)?,
            jump: Jump::from_code((bin & 0x07) as u8)?,
        })
    }

    /// Output line: the word as 16 `0`/`1` characters.
    pub fn to_word(&self) -> String {
        format!("{:016b}", self.to_bin())
    }
}

impl fmt::Display for Inst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inst::Addr(addr) => write!(f, "@{}", addr),
            Inst::Calc { dest, comp, jump } => {
                if *dest != Dest::Null {
                    write!(f, "{}=", dest)?;
                }
                write!(f, "{}", comp)?;
                if *jump != Jump::Null {
                    write!(f, ";{}", jump)?;
                }
                Ok(())
            }
        }
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        match self {
            Inst::Addr(addr) => cformat!("<y>@{}</>", addr),
            Inst::Calc { dest, comp, jump } => {
                let dest = match dest {
                    Dest::Null => String::new(),
                    d => format!("{}=", d),
                };
                let jump = match jump {
                    Jump::Null => String::new(),
                    j => format!(";{}", j),
                };
                cformat!("<blue>{}</><red>{}</><green>{}</>", dest, comp, jump)
            }
        }
    }
}
