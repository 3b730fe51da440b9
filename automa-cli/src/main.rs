//! Automa CLI - Command line interface
//!
//! Loads a DFA from a config file and checks an input string against it,
//! printing the step-by-step trace and the verdict. Arguments omitted on
//! the command line are prompted for interactively.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

mod config;
mod logging;
mod platform;

use crate::config::{parse_log_level, LogConfig};
use crate::logging::LogFormat;
use crate::platform::print_error_with_source;
use automa_api::{
    check_machine, init_config, load, CheckOutput, EngineConfig, ParserConfig, RunConfig, Verdict,
};

#[derive(Parser)]
#[command(
    name = "automa",
    about = "Automa - DFA configuration loader and simulator",
    version = "0.1.0"
)]
struct Cli {
    /// Configuration file path (prompted for when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Input string to check (prompted for when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Run the invariant validation pass after loading
    #[arg(long)]
    strict: bool,

    /// Print the outcome as JSON instead of the human-readable trace
    #[arg(long)]
    json: bool,

    /// Suppress per-step trace lines
    #[arg(long)]
    quiet: bool,

    /// Print the loaded machine back in config format before running
    #[arg(long)]
    dump_machine: bool,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log format: pretty, compact, json
    #[arg(long, value_name = "FORMAT", default_value = "compact")]
    log_format: String,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let mut log_config = LogConfig::default();
    if let Some(level) = cli.log_level.as_deref().and_then(parse_log_level) {
        log_config.global = level;
    }
    let format = parse_log_format(&cli.log_format);
    logging::init_with_file(&log_config, format, cli.log_file.as_ref());

    let run_config = RunConfig {
        dump_machine: cli.dump_machine,
        parser: ParserConfig { strict: cli.strict },
        engine: EngineConfig { trace: !cli.quiet },
    };

    // Initialize API config (global singleton for convenience)
    init_config(run_config.clone());

    // Resolve config path and input, prompting for whatever was omitted
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(prompt("Ingrese la ruta del archivo de configuración: ")));

    let source = match std::fs::read_to_string(&config_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error al abrir el archivo '{}': {}", config_path.display(), e);
            process::exit(1);
        }
    };

    let dfa = match load(&source, &run_config) {
        Ok(d) => d,
        Err(e) => {
            print_error_with_source(&e, &source);
            process::exit(1);
        }
    };

    let input = cli
        .input
        .unwrap_or_else(|| prompt("Ingrese la cadena de entrada: "));

    let output = check_machine(&dfa, &input, &run_config);

    if let Some(dump) = &output.machine_dump {
        println!("[Machine]");
        print!("{}", dump);
        println!("[Execution]");
    }

    if cli.json {
        print_json_output(&output);
    } else {
        print_human_output(&output, !cli.quiet);
    }
}

/// Parse the log format flag, defaulting to compact
fn parse_log_format(s: &str) -> LogFormat {
    match s.to_lowercase().as_str() {
        "pretty" => LogFormat::Pretty,
        "json" => LogFormat::Json,
        _ => LogFormat::Compact,
    }
}

/// Prompt on stdout and read one whitespace-delimited token from stdin
fn prompt(message: &str) -> String {
    print!("{}", message);
    if io::stdout().flush().is_err() {
        process::exit(1);
    }

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => {
            eprintln!("Error: no se recibió entrada.");
            process::exit(1);
        }
        Ok(_) => {}
    }

    match line.split_whitespace().next() {
        Some(token) => token.to_string(),
        None => {
            eprintln!("Error: no se recibió entrada.");
            process::exit(1);
        }
    }
}

/// Render the step-by-step trace and the verdict
fn print_human_output(output: &CheckOutput, show_steps: bool) {
    for step in &output.trace {
        println!("Current state: {}, Symbol: {}", step.from, step.symbol);
        println!("Next state: {}", step.to);
    }

    match &output.verdict {
        Verdict::Accepted { .. } => println!("Resultado: La cadena fue aceptada."),
        Verdict::Rejected { .. } => println!("Resultado: La cadena fue rechazada."),
        Verdict::Stuck { state, symbol } => {
            // the step is announced before the lookup turns out empty
            if show_steps {
                println!("Current state: {}, Symbol: {}", state, symbol);
            }
            println!(
                "Error: Transición no definida para el estado '{}' con el símbolo '{}'.",
                state, symbol
            );
        }
    }
}

/// Machine-readable outcome for tool integration
fn print_json_output(output: &CheckOutput) {
    use serde_json::json;

    let mut result = match &output.verdict {
        Verdict::Accepted { state } => json!({
            "verdict": "accepted",
            "final_state": state
        }),
        Verdict::Rejected { state } => json!({
            "verdict": "rejected",
            "final_state": state
        }),
        Verdict::Stuck { state, symbol } => json!({
            "verdict": "stuck",
            "state": state,
            "symbol": symbol
        }),
    };
    result["trace"] = serde_json::to_value(&output.trace).unwrap();

    println!("{}", serde_json::to_string_pretty(&result).unwrap());
}
