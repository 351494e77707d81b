use color_print::cformat;
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    error::Error,
    parser::{classify, LineKind},
    symbol::SymbolTable,
    Assembly,
};

pub fn read_lines(path: &Path) -> Result<Vec<String>, Error> {
    let name = path.display().to_string();
    let file = File::open(path).map_err(|e| Error::FileOpen(name.clone(), e))?;
    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| Error::FileRead(name, e))
}

pub fn write_words<W: Write>(out: &mut W, assembly: &Assembly) -> std::io::Result<()> {
    for word in assembly.words() {
        writeln!(out, "{}", word)?;
    }
    out.flush()
}

pub fn write_file(path: &Path, assembly: &Assembly) -> Result<(), Error> {
    let name = path.display().to_string();
    let file = File::create(path).map_err(|e| Error::FileCreate(name.clone(), e))?;
    write_words(&mut BufWriter::new(file), assembly).map_err(|e| Error::FileWrite(name, e))
}

pub fn export_symbols(path: &Path, symbols: &SymbolTable) -> Result<(), Error> {
    let name = path.display().to_string();
    let file = File::create(path).map_err(|e| Error::FileCreate(name.clone(), e))?;
    serde_yaml::to_writer(BufWriter::new(file), symbols).map_err(|e| Error::SymbolExport(name, e))
}

pub fn print_dump<S: AsRef<str>>(path: &str, lines: &[S], assembly: &Assembly) {
    println!(
        "{}+------[{}]{}",
        "-".repeat(30),
        path,
        "-".repeat(45usize.saturating_sub(path.len()))
    );

    let mut codes = assembly.codes.iter().peekable();
    for (idx, raw) in lines.iter().enumerate() {
        let raw = raw.as_ref();
        let line_num = idx + 1;
        let code = codes.next_if(|code| code.idx == idx);
        let body = match code {
            Some(code) => {
                let bin = code.inst.to_bin();
                format!(
                    "[{:04X}] {:04X} {:016b} | {:>4}:   {}",
                    code.pc,
                    bin,
                    bin,
                    line_num,
                    code.inst.cformat()
                )
            }
            None => {
                let line = raw.trim();
                let text = match classify(line) {
                    LineKind::Label => cformat!("<g>{}</>", line),
                    _ => cformat!("<dim>{}</>", line),
                };
                format!("{:30}| {:>4}: {}", "", line_num, text)
            }
        };
        println!("{}", body);
    }
    println!("------------------------------+------------------------------------------------------");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_newline_terminated() {
        let assembly = crate::assemble(&["@2", "D=A"]).unwrap();
        let mut out = Vec::new();
        write_words(&mut out, &assembly).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0000000000000010\n1110110000010000\n"
        );
    }

    #[test]
    fn symbols_as_yaml() {
        let assembly = crate::assemble(&["(LOOP)", "@x", "@LOOP", "0;JMP"]).unwrap();
        let yaml = serde_yaml::to_string(&assembly.symbols).unwrap();
        assert!(yaml.starts_with("SP:\n  kind: predefined\n  addr: 0\n"));
        assert!(yaml.contains("LOOP:\n  kind: label\n  addr: 0\n  line_idx: 0\n"));
        assert!(yaml.contains("x:\n  kind: variable\n  addr: 16\n  line_idx: 1\n"));
    }
}
