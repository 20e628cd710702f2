use std::{fs::read_to_string, path::Path, process, rc::Rc, time::Instant};

use clap::Parser;
use lolparse::{display_error, lexer::lexer::tokenize, parser::parser::parse};

#[derive(Parser, Debug)]
#[command(version, about = "Parse a LOLCODE program and print its syntax tree", long_about = None)]
struct Args {
    /// Path to the LOLCODE source file
    input_path: String,

    /// Print the token stream before parsing
    #[arg(short, long)]
    tokens: bool,

    /// Only report timings and errors, do not print the tree
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let file_name = Path::new(&args.input_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.input_path.clone());

    let source = match read_to_string(&args.input_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", args.input_path, error);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &args.input_path, &source);
            process::exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    if args.tokens {
        for token in &tokens {
            token.debug();
        }
    }

    let parse_start = Instant::now();
    let (parser, program) = parse(tokens, Rc::new(file_name));

    println!("Parsed in {:?}", parse_start.elapsed());

    let program = match program {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, &args.input_path, &source);
            process::exit(1);
        }
    };

    if !args.quiet {
        println!("{:#?}", program);

        if let Some(comment) = parser.pending_comment() {
            println!("Pending comment: {:?}", comment);
        }
    }

    println!(
        "{} statements, total time: {:?}",
        program.len(),
        start.elapsed()
    );
}
