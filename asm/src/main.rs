use color_print::cprintln;
use hackasm::{error::Error, util};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    input: PathBuf,

    /// Output file [default: input with `.hack` extension]
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,

    /// Export resolved symbols as YAML
    #[clap(short, long)]
    symbols: Option<PathBuf>,
}

fn fail(err: Error) -> ! {
    err.print();
    std::process::exit(1)
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("Hack Assembler");

    let input = args.input.display().to_string();
    println!("1. Read File");
    println!("  < {}", input);
    let lines = util::read_lines(&args.input).unwrap_or_else(|e| fail(e));

    println!("2. Collect Labels & Generate Code");
    let assembly = match hackasm::assemble(&lines) {
        Ok(assembly) => assembly,
        Err(err) => {
            err.print_diag(&input);
            std::process::exit(1);
        }
    };
    cprintln!(
        "  <g>{}</> instructions, <g>{}</> symbols",
        assembly.codes.len(),
        assembly.symbols.len()
    );

    println!("3. Write Output");
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| hackasm::output_path(&args.input));
    println!("  > {}", output.display());
    util::write_file(&output, &assembly).unwrap_or_else(|e| fail(e));

    if let Some(path) = &args.symbols {
        println!("  > {}", path.display());
        util::export_symbols(path, &assembly.symbols).unwrap_or_else(|e| fail(e));
    }

    if args.dump {
        util::print_dump(&input, &lines, &assembly);
    }
}
