pub mod codegen;
pub mod error;
pub mod label;
pub mod parser;
pub mod symbol;
pub mod util;

use std::path::{Path, PathBuf};

use codegen::Code;
use error::LineError;
use symbol::SymbolTable;

/// Extension of assembled output files.
pub const OUTPUT_EXT: &str = "hack";

#[derive(Debug, Clone)]
pub struct Assembly {
    pub codes: Vec<Code>,
    pub symbols: SymbolTable,
}

impl Assembly {
    /// Output lines, one 16-character word per instruction.
    pub fn words(&self) -> impl Iterator<Item = String> + '_ {
        self.codes.iter().map(|code| code.inst.to_word())
    }
}

/// Run both passes over `lines` with a fresh symbol table.
/// Every label is bound before any operand is resolved.
pub fn assemble<S: AsRef<str>>(lines: &[S]) -> Result<Assembly, LineError> {
    let mut symbols = SymbolTable::new();
    label::collect_labels(lines, &mut symbols)?;
    let codes = codegen::generate(lines, &mut symbols)?;
    Ok(Assembly { codes, symbols })
}

/// `dir/prog.asm` -> `dir/prog.hack`
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXT)
}
