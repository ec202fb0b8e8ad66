use std::{
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Args, Parser, Subcommand, ValueEnum};
use enhancy::{
    EnhanceRequest, EnhancementOptions, Tone,
    api::{self, RequestError},
    logging::init_tracing,
    score, suggest,
};
use thiserror::Error;

#[derive(Debug, Error)]
enum EnhancyError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("input is not valid UTF-8")]
    Utf8,

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "enhancy", version, about = "Rule-based grammar and style enhancement")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rewrite text and report improvements, suggestions and readability.
    Enhance {
        #[command(flatten)]
        input: InputArgs,
        /// Target register; `formal` expands contractions.
        #[arg(long, value_enum)]
        tone: Option<ToneArg>,
        /// Print the full response as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the readability score (0-100, higher is simpler).
    Score {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print style suggestions, one per line.
    Suggest {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Read one JSON request from stdin, write the JSON response to stdout.
    ServeJson,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Text to process. Read from --file or stdin when omitted.
    text: Option<String>,
    /// Read text from this file.
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ToneArg {
    Neutral,
    Formal,
}

impl From<ToneArg> for Tone {
    fn from(tone: ToneArg) -> Self {
        match tone {
            ToneArg::Neutral => Tone::Neutral,
            ToneArg::Formal => Tone::Formal,
        }
    }
}

#[cfg(feature = "simd")]
fn decode(bytes: Vec<u8>) -> Result<String, EnhancyError> {
    simdutf8::basic::from_utf8(&bytes)
        .map(str::to_owned)
        .map_err(|_| EnhancyError::Utf8)
}

#[cfg(not(feature = "simd"))]
fn decode(bytes: Vec<u8>) -> Result<String, EnhancyError> {
    String::from_utf8(bytes).map_err(|_| EnhancyError::Utf8)
}

impl InputArgs {
    fn read(self) -> Result<String, EnhancyError> {
        if let Some(text) = self.text {
            return Ok(text);
        }
        let bytes = match self.file {
            Some(path) => std::fs::read(path)?,
            None => {
                let mut buf = Vec::new();
                io::stdin().read_to_end(&mut buf)?;
                buf
            }
        };
        decode(bytes)
    }
}

fn run(cli: Cli) -> Result<ExitCode, EnhancyError> {
    let mut out = io::stdout().lock();
    match cli.command {
        Command::Enhance { input, tone, json } => {
            let options = EnhancementOptions {
                tone: tone.map(Tone::from),
            };
            let request = EnhanceRequest::new(input.read()?).with_options(options);
            let response = api::handle(&request)?;
            if json {
                serde_json::to_writer_pretty(&mut out, &response)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", response.enhanced)?;
                writeln!(out)?;
                writeln!(out, "Improvements:")?;
                for item in &response.improvements {
                    writeln!(out, "  - {item}")?;
                }
                writeln!(out, "Suggestions:")?;
                for item in &response.suggestions {
                    writeln!(out, "  - {item}")?;
                }
                writeln!(
                    out,
                    "Readability: {:.1} -> {:.1}",
                    response.readability.original, response.readability.enhanced
                )?;
            }
        }
        Command::Score { input } => {
            writeln!(out, "{:.1}", score(&input.read()?))?;
        }
        Command::Suggest { input } => {
            for item in suggest(&input.read()?) {
                writeln!(out, "{item}")?;
            }
        }
        Command::ServeJson => {
            let mut body = String::new();
            io::stdin().read_to_string(&mut body)?;
            let (status, json) = api::handle_json(&body);
            writeln!(out, "{json}")?;
            if status != 200 {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    init_tracing();
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
