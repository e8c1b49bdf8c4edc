use std::{fs, io, process::ExitCode};

use clap::Parser;
use log::LevelFilter;
use tally::{
    Error,
    interpreter::{
        evaluator::{core::Context, output::WriteOutput},
        lexer::tokenize,
        parser::core::parse,
    },
};

/// tally evaluates programs made of `print(<expr>);` statements, where an
/// expression adds and subtracts integers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tally to read the program from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Prints the token stream before running the program.
    #[arg(short, long)]
    tokens: bool,

    /// Prints the parsed program, fully parenthesized, before running it.
    #[arg(short, long)]
    ast: bool,

    /// Increases logging verbosity. Repeat for more detail. `RUST_LOG`
    /// overrides this flag.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

const fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Runs the program, printing the requested intermediate representations on
/// the way. Each stage runs once and hands its result to the next.
fn execute(source: &str, args: &Args) -> Result<(), Error> {
    let tokens = tokenize(source)?;
    if args.tokens {
        print!("{tokens}");
    }

    let program = parse(&tokens)?;
    if args.ast {
        print!("{program}");
    }

    let stdout = io::stdout();
    Context::new(WriteOutput::new(stdout.lock())).eval_program(&program)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new().filter_level(level_filter(args.verbose))
                              .parse_default_env()
                              .init();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents.clone()
    };

    match execute(&source, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.render(&source));
            ExitCode::FAILURE
        },
    }
}
