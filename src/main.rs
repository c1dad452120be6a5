use std::{fs::read_to_string, path::PathBuf, process::ExitCode, rc::Rc, time::Instant};

use adaexpr::{
    format_error,
    lexer::lexer::tokenize,
    parser::parser::{parse_with_options, ParseOptions},
};
use clap::Parser;

/// Parse an Ada expression and print its tree.
#[derive(Parser, Debug)]
#[command(name = "adaexpr", version, about)]
struct Args {
    /// File holding a single expression
    #[arg(required_unless_present = "expr", conflicts_with = "expr")]
    file: Option<PathBuf>,

    /// Expression text given inline
    #[arg(short, long)]
    expr: Option<String>,

    /// Reject chained relations and mixed logical operators
    #[arg(long)]
    strict: bool,

    /// Print the expression back as source instead of its tree
    #[arg(long)]
    unparse: bool,

    /// Print timings for each phase
    #[arg(long)]
    timings: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let (source, file_name) = match (&args.expr, &args.file) {
        (Some(expr), _) => (expr.clone(), String::from("shell")),
        (None, Some(path)) => {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| path.to_string_lossy().to_string());

            match read_to_string(path) {
                Ok(contents) => (contents, file_name),
                Err(error) => {
                    eprintln!("Failed to read {}: {}", path.display(), error);
                    return ExitCode::FAILURE;
                }
            }
        }
        (None, None) => return ExitCode::FAILURE,
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", format_error(&error, &source, &file_name));
            return ExitCode::FAILURE;
        }
    };

    if args.timings {
        println!("Tokenized in {:?}", start.elapsed());
    }

    let options = if args.strict {
        ParseOptions::strict()
    } else {
        ParseOptions::default()
    };

    let parse_start = Instant::now();
    let (_, result) = parse_with_options(tokens, Rc::new(file_name.clone()), options);

    if args.timings {
        println!("Parsed in {:?}", parse_start.elapsed());
    }

    let expr = match result {
        Ok(expr) => expr,
        Err(error) => {
            eprint!("{}", format_error(&error, &source, &file_name));
            return ExitCode::FAILURE;
        }
    };

    if args.unparse {
        println!("{}", expr);
    } else {
        println!("{}", expr.dump());
    }

    ExitCode::SUCCESS
}
