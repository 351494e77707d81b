use arch::{
    inst::Inst,
    mem::{ADDR_MAX, KBD, SCREEN, VAR_BASE},
};

use crate::{
    error::{Error, LineError},
    parser::{Operand, Stmt},
    symbol::{Kind, SymbolTable},
};

/// Hands out RAM addresses to variables, starting at `VAR_BASE`.
#[derive(Debug)]
pub struct Allocator {
    next: u16,
}

impl Allocator {
    pub fn new() -> Self {
        Allocator { next: VAR_BASE }
    }

    pub fn alloc(&mut self, name: &str) -> Result<u16, Error> {
        // never hand out the I/O bases
        if self.next == SCREEN || self.next == KBD {
            self.next += 1;
        }
        if self.next > ADDR_MAX {
            return Err(Error::AddressOutOfRange(name.to_string()));
        }
        let addr = self.next;
        self.next += 1;
        Ok(addr)
    }
}

impl Default for Allocator {
    fn default() -> Self {
        Self::new()
    }
}

/// One emitted instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    /// Source line index (0-based)
    pub idx: usize,
    /// Program counter
    pub pc: usize,
    pub inst: Inst,
}

/// Second pass: resolve operands and encode every real instruction, in
/// source order. Labels must already be in `table`.
pub fn generate<S: AsRef<str>>(
    lines: &[S],
    table: &mut SymbolTable,
) -> Result<Vec<Code>, LineError> {
    let mut alloc = Allocator::new();
    let mut codes = vec![];
    for (idx, raw) in lines.iter().enumerate() {
        let line = raw.as_ref().trim();
        let inst = match Stmt::parse(line) {
            Ok(Some(Stmt::Addr(op))) => resolve(op, idx, table, &mut alloc),
            Ok(Some(Stmt::Calc(fields))) => fields.resolve(),
            Ok(Some(Stmt::Label(_))) | Ok(None) => continue,
            Err(e) => Err(e),
        }
        .map_err(|e| e.at(idx, raw.as_ref()))?;
        codes.push(Code {
            idx,
            pc: codes.len(),
            inst,
        });
    }
    Ok(codes)
}

fn resolve(
    op: Operand,
    idx: usize,
    table: &mut SymbolTable,
    alloc: &mut Allocator,
) -> Result<Inst, Error> {
    let addr = match op {
        Operand::Literal(v) => v,
        Operand::Symbol(name) => {
            if !table.contains(name) {
                let addr = alloc.alloc(name)?;
                table.define(name, addr, Kind::Variable, Some(idx))?;
            }
            table.lookup(name)?
        }
    };
    if addr > ADDR_MAX {
        return Err(Error::AddressOutOfRange(addr.to_string()));
    }
    Ok(Inst::Addr(addr))
}
