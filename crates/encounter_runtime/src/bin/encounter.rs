//! Encounter CLI entry point.

use encounter_parser::{GrammarGuide, standard_vocabulary};
use encounter_runtime::{BatchSummary, Repl, ReplConfig};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
#[allow(clippy::struct_excessive_bools)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    show_grammar: bool,
    trace: bool,
    no_color: bool,
    no_banner: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-g" | "--grammar" => config.show_grammar = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--trace" => config.trace = true,
            "--no-color" => config.no_color = true,
            "--no-banner" => config.no_banner = true,
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

/// Installs the stderr subscriber. `--trace` wins over `RUST_LOG`.
fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("encounter {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(config.trace);

    let vocabulary = Arc::new(standard_vocabulary()?);

    if config.show_grammar {
        for rule in GrammarGuide::rules(&vocabulary) {
            println!("{rule}");
        }
        return Ok(());
    }

    let repl_config = ReplConfig::default()
        .with_color(!config.no_color)
        .with_grammar_banner(!config.no_banner);
    let mut repl = Repl::new(Arc::clone(&vocabulary), repl_config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut total = BatchSummary::default();
    for file in &config.files {
        let summary = repl.eval_file(file, &mut out)?;
        total.accepted += summary.accepted;
        total.rejected += summary.rejected;
    }

    if config.batch_mode {
        if config.files.is_empty() {
            let stdin = io::stdin();
            total = repl.eval_reader(stdin.lock(), "<stdin>", &mut out)?;
        }
        writeln!(
            out,
            "{} accepted, {} rejected",
            total.accepted, total.rejected
        )?;
        return Ok(());
    }

    // Files already showed the grammar in use
    if !config.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run_with(&mut out)?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mEncounter\x1b[0m - Parser for Pok\u{e9}mon encounter sentences

\x1b[1mUSAGE:\x1b[0m
    encounter [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Files of sentences to parse before starting the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -g, --grammar      Print the grammar guide and exit
    -b, --batch        Parse files (or stdin) and exit (no REPL)
    --no-color         Disable coloured output
    --no-banner        Do not print the grammar guide on startup

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace            Log tokenization and validation to stderr

\x1b[1mEXAMPLES:\x1b[0m
    encounter                        Start interactive REPL
    encounter -g                     Show the grammar
    encounter -b battles.txt         Parse every line of battles.txt and exit
    echo \"Misty sees a wild Eevee Got away safely!\" | encounter -b

\x1b[1mREPL:\x1b[0m
    <sentence>           Parse a sentence, e.g.
                         Ash sees a wild Rattata use Pokeball
    ENDGAME              Exit REPL
    Tab                  Complete a trainer, creature, move or phrase
    Ctrl+D               Exit REPL
    Ctrl+C               Cancel current input"
    );
}
