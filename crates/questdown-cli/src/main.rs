//! Questdown CLI - Render AI reply markdown to HTML fragments
//!
//! Usage:
//!   qdcli [OPTIONS] [COMMAND] <FILE>
//!
//! Commands:
//!   render    Convert input and print the HTML fragment (default)
//!   check     Report whether input would be converted or passed through
//!   stats     Show line classification counts

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use questdown_core::{classify, is_html_fragment, render_message, ListKind, Tagged};
use serde::Serialize;

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = parse_args(args)?;

    let input = read_input(&config.file)?;

    match config.command {
        Command::Render => cmd_render(&input, &config),
        Command::Check => cmd_check(&input, &config),
        Command::Stats => cmd_stats(&input, &config),
    }
}

fn read_input(file: &str) -> Result<String, String> {
    if file == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {}", e))?;
        Ok(buf)
    } else {
        fs::read_to_string(file).map_err(|e| format!("failed to read '{}': {}", file, e))
    }
}

#[derive(Debug)]
struct Config {
    command: Command,
    file: String,
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Render,
    Check,
    Stats,
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut command = Command::Render;
    let mut format = OutputFormat::Text;
    let mut file = None;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("qdcli {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-j" | "--json" => format = OutputFormat::Json,
            "render" => command = Command::Render,
            "check" => command = Command::Check,
            "stats" => command = Command::Stats,
            "-" => {
                if file.is_some() {
                    return Err("multiple inputs specified".to_string());
                }
                file = Some(arg.clone());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {}", arg));
            }
            _ => {
                if file.is_some() {
                    return Err("multiple inputs specified".to_string());
                }
                file = Some(arg.clone());
            }
        }
        i += 1;
    }

    let file = file.ok_or_else(|| "no input specified (use '-' for stdin)".to_string())?;

    Ok(Config {
        command,
        file,
        format,
    })
}

fn print_help() {
    eprintln!(
        r#"qdcli - AI reply markdown renderer

USAGE:
    qdcli [OPTIONS] [COMMAND] <FILE>

COMMANDS:
    render      Convert input and print the HTML fragment (default)
    check       Report whether input would be converted or passed through
    stats       Show line classification counts

OPTIONS:
    -j, --json       Output in JSON format
    -h, --help       Print help information
    -V, --version    Print version information

EXAMPLES:
    qdcli reply.md              Render a reply to HTML
    qdcli -j reply.md           Render, JSON-wrapped
    qdcli check reply.md        Show the dispatch decision
    qdcli stats -               Classify stdin and print counts

Input that already contains HTML (a closing </p>, </h*>, or </div>)
is passed through unchanged, matching the editor's dispatch rule.
"#
    );
}

// =============================================================================
// Render Command
// =============================================================================

#[derive(Serialize)]
struct JsonRender<'a> {
    converted: bool,
    html: &'a str,
}

fn cmd_render(input: &str, config: &Config) -> Result<(), String> {
    let converted = !is_html_fragment(input);
    let html = render_message(input);

    match config.format {
        OutputFormat::Json => {
            let out = JsonRender {
                converted,
                html: html.as_ref(),
            };
            println!("{}", serde_json::to_string_pretty(&out).unwrap());
        }
        OutputFormat::Text => println!("{}", html),
    }

    Ok(())
}

// =============================================================================
// Check Command
// =============================================================================

fn cmd_check(input: &str, config: &Config) -> Result<(), String> {
    let html = is_html_fragment(input);

    match config.format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "html_fragment": html }));
        }
        OutputFormat::Text => {
            if html {
                println!("already HTML: would pass through unchanged");
            } else {
                println!("markdown: would convert");
            }
        }
    }

    Ok(())
}

// =============================================================================
// Stats Command
// =============================================================================

#[derive(Serialize, Default)]
struct LineStats {
    headings: usize,
    bullet_items: usize,
    numbered_items: usize,
    code_blocks: usize,
    code_lines: usize,
    plain: usize,
    blank: usize,
    chars: usize,
    words: usize,
}

impl LineStats {
    fn from_input(input: &str) -> Self {
        let mut stats = Self {
            chars: input.len(),
            words: input.split_whitespace().count(),
            ..Self::default()
        };

        for tag in classify(input) {
            match tag {
                Tagged::Blank => stats.blank += 1,
                Tagged::Heading { .. } => stats.headings += 1,
                Tagged::Item {
                    kind: ListKind::Unordered,
                    ..
                } => stats.bullet_items += 1,
                Tagged::Item {
                    kind: ListKind::Ordered,
                    ..
                } => stats.numbered_items += 1,
                Tagged::Code { body, .. } => {
                    stats.code_blocks += 1;
                    stats.code_lines += body.len();
                }
                Tagged::Plain(_) => stats.plain += 1,
            }
        }

        stats
    }
}

fn cmd_stats(input: &str, config: &Config) -> Result<(), String> {
    let stats = LineStats::from_input(input);

    match config.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats).unwrap());
        }
        OutputFormat::Text => {
            println!("Reply Statistics");
            println!("----------------");
            println!("Headings:        {}", stats.headings);
            println!("Bullet items:    {}", stats.bullet_items);
            println!("Numbered items:  {}", stats.numbered_items);
            println!("Code blocks:     {}", stats.code_blocks);
            println!("Code lines:      {}", stats.code_lines);
            println!("Plain lines:     {}", stats.plain);
            println!("Blank lines:     {}", stats.blank);
            println!();
            println!("Characters:      {}", stats.chars);
            println!("Words (est.):    {}", stats.words);
        }
    }

    Ok(())
}
