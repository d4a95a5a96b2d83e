use std::env;
use std::fs;
use std::process;

use kernchord::{
    simplification_pairs, simplification_report, simplify_text, simplify_text_expanded, Notation,
    Strategy,
};

const REPORT_WIDTH: usize = 72;

fn usage() -> ! {
    eprintln!("Usage: kernchord [options] <input.krn>");
    eprintln!("  --strategy jazz5|majmin   classifier variant (default: jazz5)");
    eprintln!("  --notation mirex|plain    output convention (default: mirex)");
    eprintln!("  --expand                  repeat chords per their duration code");
    eprintln!("  --json                    emit chords and diagnostics as JSON");
    eprintln!("  --report                  print the simplification table instead");
    process::exit(1);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut strategy = Strategy::default();
    let mut notation = Notation::default();
    let mut expand = false;
    let mut json = false;
    let mut report = false;
    let mut input_path: Option<String> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--strategy" => {
                let value = match args.next() {
                    Some(v) => v,
                    None => usage(),
                };
                strategy = match Strategy::from_str(&value) {
                    Some(s) => s,
                    None => {
                        eprintln!("Unknown strategy '{}'. Expected: jazz5 or majmin", value);
                        process::exit(1);
                    }
                };
            }
            "--notation" => {
                let value = match args.next() {
                    Some(v) => v,
                    None => usage(),
                };
                notation = match Notation::from_str(&value) {
                    Some(n) => n,
                    None => {
                        eprintln!("Unknown notation '{}'. Expected: mirex or plain", value);
                        process::exit(1);
                    }
                };
            }
            "--expand" => expand = true,
            "--json" => json = true,
            "--report" => report = true,
            _ if arg.starts_with("--") => {
                eprintln!("Unknown option '{}'", arg);
                usage();
            }
            _ => input_path = Some(arg),
        }
    }

    let input_path = match input_path {
        Some(path) => path,
        None => usage(),
    };

    let text = match fs::read_to_string(&input_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", input_path, e);
            process::exit(1);
        }
    };

    if report {
        let (pairs, diagnostics) = match simplification_pairs(&text, strategy, notation) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Extraction error: {}", e);
                process::exit(1);
            }
        };
        print!("{}", simplification_report(&pairs, REPORT_WIDTH));
        warn_diagnostics_nonempty(&diagnostics);
        return;
    }

    let result = if expand {
        simplify_text_expanded(&text, strategy)
    } else {
        simplify_text(&text, strategy)
    };
    let (chords, diagnostics) = match result {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Extraction error: {}", e);
            process::exit(1);
        }
    };

    let rendered: Vec<String> = chords.iter().map(|c| c.render(notation)).collect();

    if json {
        let output = serde_json::json!({
            "chords": rendered,
            "diagnostics": diagnostics,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    } else {
        for chord in &rendered {
            println!("{}", chord);
        }
    }

    warn_diagnostics_nonempty(&diagnostics);
}

fn warn_diagnostics_nonempty(diagnostics: &kernchord::Diagnostics) {
    if !diagnostics.is_empty() {
        eprintln!(
            "{} token(s) fell through to the fallback quality; rerun with --json for details",
            diagnostics.not_found.len() + diagnostics.unhandled.len()
        );
    }
}
