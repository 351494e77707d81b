use arch::mem::ADDR_MAX;
use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown {0} mnemonic: `{1}`")]
    UnknownMnemonic(&'static str, String),

    #[error("Undefined symbol: `{0}`")]
    UnknownSymbol(String),

    #[error("Re-defined symbol: `{0}` is already bound to {1}, cannot bind it to {2}")]
    DuplicateSymbol(String, u16, u16),

    #[error("Malformed line: {0}")]
    MalformedLine(&'static str),

    #[error("Address out of range: `{0}` (max {})", ADDR_MAX)]
    AddressOutOfRange(String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read file: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to export symbols: {0}")]
    SymbolExport(String, #[source] serde_yaml::Error),
}

impl Error {
    /// Attach the source line the error was found on.
    pub fn at(self, idx: usize, raw: &str) -> LineError {
        LineError {
            idx,
            raw: raw.to_string(),
            error: self,
        }
    }

    pub fn print(&self) {
        cprintln!("<red,bold>error</>: {}", self);
        if let Some(source) = std::error::Error::source(self) {
            cprintln!("     <blue>=</> {}", source);
        }
    }
}

/// An [`Error`] raised while assembling a specific source line.
#[derive(Error, Debug)]
#[error("line {}: {error}", .idx + 1)]
pub struct LineError {
    /// 0-based line index
    pub idx: usize,
    pub raw: String,
    pub error: Error,
}

impl LineError {
    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str) {
        cprintln!("<red,bold>error</>: {}", self.error);

        let line_num = self.idx + 1;
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line_num, self.raw);
        cprintln!("      <blue>|</>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_error_message() {
        let err = Error::UnknownSymbol(format!("loop")).at(4, "@loop");
        assert_eq!(err.to_string(), "line 5: Undefined symbol: `loop`");
        assert_eq!(err.raw, "@loop");
    }

    #[test]
    fn range_message_names_limit() {
        let err = Error::AddressOutOfRange(format!("40000"));
        assert_eq!(err.to_string(), "Address out of range: `40000` (max 32767)");
    }
}
