use arch::{comp::Comp, dest::Dest, inst::Inst, jump::Jump, mem::ADDR_MAX};

use crate::error::Error;

// ----------------------------------------------------------------------------
// Classifier

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Blank line or full-line comment
    Skip,
    /// `@value`
    Addr,
    /// `(LABEL)`
    Label,
    /// `dest=comp;jump`
    Calc,
}

/// Classify a trimmed source line by its first character.
pub fn classify(line: &str) -> LineKind {
    match line.chars().next() {
        None | Some('/') => LineKind::Skip,
        Some('@') => LineKind::Addr,
        Some('(') => LineKind::Label,
        Some(_) => LineKind::Calc,
    }
}

fn tail(line: &str) -> &str {
    let mut chars = line.chars();
    chars.next();
    chars.as_str()
}

/// Operand of an address-load line: everything after `@` up to the first whitespace.
pub fn operand(line: &str) -> Result<&str, Error> {
    let body = tail(line);
    let end = body.find(char::is_whitespace).unwrap_or(body.len());
    match &body[..end] {
        "" => Err(Error::MalformedLine("missing operand after `@`")),
        text => Ok(text),
    }
}

/// Name of a label declaration: everything after `(` up to the first `)`.
pub fn label_name(line: &str) -> Result<&str, Error> {
    match tail(line).split_once(')') {
        Some(("", _)) => Err(Error::MalformedLine("empty label name")),
        Some((name, _)) => Ok(name),
        None => Err(Error::MalformedLine("missing `)` after label name")),
    }
}

// ----------------------------------------------------------------------------
// Operand

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<'a> {
    Literal(u16),
    Symbol(&'a str),
}

impl<'a> Operand<'a> {
    pub fn parse(text: &'a str) -> Result<Self, Error> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(Operand::Symbol(text));
        }
        match text.parse::<u16>() {
            Ok(v) if v <= ADDR_MAX => Ok(Operand::Literal(v)),
            _ => Err(Error::AddressOutOfRange(text.to_string())),
        }
    }
}

// ----------------------------------------------------------------------------
// Mnemonic decomposer

/// Mnemonic fields of a compute line. Unset `dest` stores nothing, unset `jump` never jumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields<'a> {
    pub dest: Option<&'a str>,
    pub comp: &'a str,
    pub jump: Option<&'a str>,
}

/// Split `dest=comp;jump` into its fields. Scanning stops at the first
/// whitespace, so anything after it (e.g. a trailing comment) is ignored.
pub fn decompose(line: &str) -> Result<Fields<'_>, Error> {
    let end = line.find(char::is_whitespace).unwrap_or(line.len());
    let code = &line[..end];

    let mut dest = None;
    let mut comp = None;
    let mut start = 0;
    for (i, c) in code.char_indices() {
        match c {
            '=' => {
                if dest.is_some() || comp.is_some() {
                    return Err(Error::MalformedLine("unexpected `=`"));
                }
                dest = Some(&code[start..i]);
                start = i + 1;
            }
            ';' => {
                if comp.is_some() {
                    return Err(Error::MalformedLine("unexpected `;`"));
                }
                comp = Some(&code[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    let rest = &code[start..];
    let (comp, jump) = match comp {
        Some(comp) => (comp, Some(rest)),
        None => (rest, None),
    };

    if dest == Some("") {
        return Err(Error::MalformedLine("empty destination before `=`"));
    }
    if comp.is_empty() {
        return Err(Error::MalformedLine("missing computation"));
    }
    if jump == Some("") {
        return Err(Error::MalformedLine("empty jump after `;`"));
    }
    Ok(Fields { dest, comp, jump })
}

impl Fields<'_> {
    pub fn resolve(&self) -> Result<Inst, Error> {
        let dest = match self.dest {
            Some(text) => Dest::parse(text)
                .map_err(|_| Error::UnknownMnemonic("dest", text.to_string()))?,
            None => Dest::Null,
        };
        let comp = Comp::parse(self.comp)
            .map_err(|_| Error::UnknownMnemonic("comp", self.comp.to_string()))?;
        let jump = match self.jump {
            Some(text) => Jump::parse(text)
                .map_err(|_| Error::UnknownMnemonic("jump", text.to_string()))?,
            None => Jump::Null,
        };
        Ok(Inst::Calc { dest, comp, jump })
    }
}

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stmt<'a> {
    Addr(Operand<'a>),
    Calc(Fields<'a>),
    Label(&'a str),
}

impl<'a> Stmt<'a> {
    /// Parse a trimmed line. Blank and comment lines yield `None`.
    pub fn parse(line: &'a str) -> Result<Option<Stmt<'a>>, Error> {
        match classify(line) {
            LineKind::Skip => Ok(None),
            LineKind::Addr => Ok(Some(Stmt::Addr(Operand::parse(operand(line)?)?))),
            LineKind::Label => Ok(Some(Stmt::Label(label_name(line)?))),
            LineKind::Calc => Ok(Some(Stmt::Calc(decompose(line)?))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_lines() {
        assert_eq!(classify(""), LineKind::Skip);
        assert_eq!(classify("// comment"), LineKind::Skip);
        assert_eq!(classify("/"), LineKind::Skip);
        assert_eq!(classify("@12"), LineKind::Addr);
        assert_eq!(classify("@"), LineKind::Addr);
        assert_eq!(classify("(LOOP)"), LineKind::Label);
        assert_eq!(classify("D=M"), LineKind::Calc);
        assert_eq!(classify("0;JMP"), LineKind::Calc);
    }

    #[test]
    fn operand_extraction() {
        assert_eq!(operand("@21").unwrap(), "21");
        assert_eq!(operand("@i // counter").unwrap(), "i");
        assert_eq!(operand("@sum\t// total").unwrap(), "sum");
        assert!(matches!(operand("@"), Err(Error::MalformedLine(_))));
        assert!(matches!(operand("@ 3"), Err(Error::MalformedLine(_))));
    }

    #[test]
    fn label_extraction() {
        assert_eq!(label_name("(LOOP)").unwrap(), "LOOP");
        assert_eq!(label_name("(END) // done").unwrap(), "END");
        assert_eq!(label_name("(a.b$c_1)").unwrap(), "a.b$c_1");
        assert!(matches!(label_name("()"), Err(Error::MalformedLine(_))));
        assert!(matches!(label_name("(LOOP"), Err(Error::MalformedLine(_))));
    }

    #[test]
    fn operand_kinds() {
        assert_eq!(Operand::parse("0").unwrap(), Operand::Literal(0));
        assert_eq!(Operand::parse("32767").unwrap(), Operand::Literal(32767));
        assert_eq!(Operand::parse("i").unwrap(), Operand::Symbol("i"));
        assert_eq!(Operand::parse("R1").unwrap(), Operand::Symbol("R1"));
        assert_eq!(Operand::parse("-1").unwrap(), Operand::Symbol("-1"));
        assert!(matches!(
            Operand::parse("32768"),
            Err(Error::AddressOutOfRange(_))
        ));
        assert!(matches!(
            Operand::parse("123456789"),
            Err(Error::AddressOutOfRange(_))
        ));
    }

    macro_rules! test_decompose {
        ($($name:ident: $line:expr => ($dest:expr, $comp:expr, $jump:expr),)*) => {
            $(
                #[test]
                fn $name() {
                    let fields = decompose($line).unwrap();
                    assert_eq!(fields, Fields { dest: $dest, comp: $comp, jump: $jump });
                }
            )*
        }
    }

    test_decompose! {
        decompose_dest_comp: "D=M" => (Some("D"), "M", None),
        decompose_comp_jump: "0;JMP" => (None, "0", Some("JMP")),
        decompose_all: "AM=M-1;JNE" => (Some("AM"), "M-1", Some("JNE")),
        decompose_comp_only: "0" => (None, "0", None),
        decompose_trailing_comment: "D=D+A // add" => (Some("D"), "D+A", None),
        decompose_trailing_tab: "D;JGT\t// loop" => (None, "D", Some("JGT")),
    }

    #[test]
    fn decompose_malformed() {
        for line in ["=M", "D=", "D=;JMP", ";JMP", "0;", "A=D=M", "0;JMP;JMP", "0;A=D"] {
            assert!(
                matches!(decompose(line), Err(Error::MalformedLine(_))),
                "{line}"
            );
        }
    }

    #[test]
    fn resolve_fields() {
        let inst = decompose("0").unwrap().resolve().unwrap();
        assert_eq!(inst.to_word(), "1110101010000000");
        let inst = decompose("MD=D|M;JLT").unwrap().resolve().unwrap();
        assert_eq!(inst.to_string(), "MD=D|M;JLT");

        let err = decompose("D=Q").unwrap().resolve().unwrap_err();
        assert!(matches!(err, Error::UnknownMnemonic("comp", s) if s == "Q"));
        let err = decompose("X=D").unwrap().resolve().unwrap_err();
        assert!(matches!(err, Error::UnknownMnemonic("dest", s) if s == "X"));
        let err = decompose("D;JUMP").unwrap().resolve().unwrap_err();
        assert!(matches!(err, Error::UnknownMnemonic("jump", s) if s == "JUMP"));
    }

    #[test]
    fn statements() {
        assert_eq!(Stmt::parse("").unwrap(), None);
        assert_eq!(Stmt::parse("// hi").unwrap(), None);
        assert_eq!(
            Stmt::parse("@LOOP").unwrap(),
            Some(Stmt::Addr(Operand::Symbol("LOOP")))
        );
        assert_eq!(Stmt::parse("(LOOP)").unwrap(), Some(Stmt::Label("LOOP")));
        assert!(matches!(Stmt::parse("@"), Err(Error::MalformedLine(_))));
    }
}
