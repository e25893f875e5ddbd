//! Reads an HTML page from a file or stdin and prints one JSON candidate per line.
//!
//! Usage: `extract_links <page-url> [--title-from MODE] [--links-re REGEX]... [--dump PATH] [FILE]`
//!
//! Log output goes to stderr and follows `RUST_LOG` (default `info`).

use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::process;

use linkharvest::{ExtractionConfig, HtmlInput};
use tracing_subscriber::EnvFilter;

const USAGE: &str =
    "usage: extract_links <page-url> [--title-from MODE] [--links-re REGEX]... [--dump PATH] [FILE]";

struct Args {
    config: ExtractionConfig,
    file: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let url = args.next().ok_or_else(|| USAGE.to_string())?;
    let mut config = ExtractionConfig::new(url);
    let mut file = None;

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| format!("{flag} needs a value"));
        match arg.as_str() {
            "--title-from" => config.title_from = value("--title-from")?,
            "--links-re" => config.links_re.push(value("--links-re")?),
            "--dump" => config.dump = Some(value("--dump")?.into()),
            "-h" | "--help" => return Err(USAGE.to_string()),
            flag if flag.starts_with("--") => return Err(format!("unknown option {flag}\n{USAGE}")),
            path if file.is_none() => file = Some(path.to_string()),
            _ => return Err(USAGE.to_string()),
        }
    }

    Ok(Args { config, file })
}

fn read_page(file: Option<&str>) -> io::Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path),
        None => {
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes)?;
            Ok(bytes)
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let page = read_page(args.file.as_deref())?;
    let mut input = HtmlInput::new(args.config)?;
    let candidates = input.run_bytes(&page)?;

    let mut out = BufWriter::new(io::stdout().lock());
    for candidate in &candidates {
        writeln!(out, "{}", serde_json::to_string(candidate)?)?;
    }
    out.flush()?;

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            process::exit(2);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("extract_links: {err}");
        process::exit(1);
    }
}
