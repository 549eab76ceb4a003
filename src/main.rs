use std::{fs, process::ExitCode};

use calcfront::{lex, parse, parse_tree};
use clap::Parser;

/// calcfront tokenizes, parses, and evaluates dense integer arithmetic
/// expressions such as `2*(7+1)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calcfront to read the expression from a file instead of the
    /// command line.
    #[arg(short, long)]
    file: bool,

    /// Print the parsed tree as an s-expression instead of its value.
    #[arg(short, long)]
    tree: bool,

    /// Print the token sequence before parsing.
    #[arg(long)]
    tokens: bool,

    contents: String,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::from(1);
            },
        }
    } else {
        args.contents
    };

    let tokens = lex(&source);
    if args.tokens {
        let rendered = tokens.iter()
                             .map(|t| format!("{:?}", t.kind()))
                             .collect::<Vec<_>>()
                             .join(" ");
        println!("{rendered}");
    }

    let outcome = if args.tree {
        parse_tree(&tokens).map(|expr| expr.to_string())
    } else {
        parse(&tokens).map(|value| value.to_string())
    };

    match outcome {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        },
    }
}
