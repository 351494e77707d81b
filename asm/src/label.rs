use arch::mem::ADDR_MAX;

use crate::{
    error::{Error, LineError},
    parser::{classify, label_name, LineKind},
    symbol::{Kind, SymbolTable},
};

/// First pass: bind every `(LABEL)` to the address of the next real
/// instruction. Returns the number of instructions in the program.
pub fn collect_labels<S: AsRef<str>>(
    lines: &[S],
    table: &mut SymbolTable,
) -> Result<usize, LineError> {
    let mut pc: usize = 0;
    for (idx, raw) in lines.iter().enumerate() {
        let line = raw.as_ref().trim();
        match classify(line) {
            LineKind::Addr | LineKind::Calc => pc += 1,
            LineKind::Label => {
                let name = label_name(line).map_err(|e| e.at(idx, raw.as_ref()))?;
                let addr = match u16::try_from(pc) {
                    Ok(addr) if addr <= ADDR_MAX => addr,
                    _ => {
                        let err = Error::AddressOutOfRange(pc.to_string());
                        return Err(err.at(idx, raw.as_ref()));
                    }
                };
                if let Some(prev) = table.get(name) {
                    return Err(
                        Error::DuplicateSymbol(name.to_string(), prev.addr, addr)
                            .at(idx, raw.as_ref()),
                    );
                }
                table
                    .define(name, addr, Kind::Label, Some(idx))
                    .map_err(|e| e.at(idx, raw.as_ref()))?;
            }
            LineKind::Skip => {}
        }
    }
    Ok(pc)
}
