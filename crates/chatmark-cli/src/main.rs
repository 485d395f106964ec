use anyhow::{Context, Result, bail};
use chatmark_config::Config;
use chatmark_engine::{
    ChatMessage, NoCopies, RenderCache, render::html::to_html, transcript_html,
};
use std::{
    env,
    io::{self, Read},
    path::PathBuf,
    process,
};

const USAGE: &str = "Usage: chatmark [--config PATH] [--format html|json] [--transcript] [--message-index N] [FILE]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Html,
    Json,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    config: Option<PathBuf>,
    format: Format,
    transcript: bool,
    message_index: usize,
    input: Option<PathBuf>,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut parsed = Args {
            config: None,
            format: Format::Html,
            transcript: false,
            message_index: 0,
            input: None,
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args.next().context("--config needs a path")?;
                    parsed.config = Some(PathBuf::from(path));
                }
                "--format" => {
                    parsed.format = match args.next().as_deref() {
                        Some("html") => Format::Html,
                        Some("json") => Format::Json,
                        Some(other) => bail!("unknown format `{other}` (expected html or json)"),
                        None => bail!("--format needs a value"),
                    };
                }
                "--transcript" => parsed.transcript = true,
                "--message-index" => {
                    let value = args.next().context("--message-index needs a number")?;
                    parsed.message_index = value
                        .parse()
                        .with_context(|| format!("invalid message index `{value}`"))?;
                }
                flag if flag.starts_with("--") => bail!("unknown option `{flag}`"),
                path => {
                    if parsed.input.is_some() {
                        bail!("only one input file may be given");
                    }
                    parsed.input = Some(PathBuf::from(path));
                }
            }
        }

        Ok(parsed)
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file '{}'", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read standard input")?;
            Ok(input)
        }
    }
}

fn render(args: &Args, config: &Config, input: &str) -> Result<String> {
    let mut cache = RenderCache::new(config.cache_capacity);

    if args.transcript {
        let messages: Vec<ChatMessage> =
            serde_json::from_str(input).context("Failed to parse transcript JSON")?;
        let rendered = cache.render_transcript(&messages, &NoCopies, &config.render);
        log::info!("rendered transcript of {} messages", rendered.len());
        return Ok(match args.format {
            Format::Html => transcript_html(&rendered),
            Format::Json => serde_json::to_string_pretty(&rendered)?,
        });
    }

    let blocks = cache.render(input, args.message_index, &NoCopies, &config.render);
    log::info!("rendered message into {} blocks", blocks.len());
    Ok(match args.format {
        Format::Html => to_html(&blocks),
        Format::Json => serde_json::to_string_pretty(&blocks)?,
    })
}

fn run() -> Result<()> {
    let args = Args::parse(env::args().skip(1))?;

    let config = Config::load_or_default(args.config.as_deref()).with_context(|| {
        let path = args.config.clone().unwrap_or_else(Config::config_path);
        format!("Failed to load config from '{}'", path.display())
    })?;
    log::debug!("render options: {:?}", config.render);

    let input = read_input(args.input.as_ref())?;
    let output = render(&args, &config, &input)?;
    println!("{output}");
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        eprintln!("{USAGE}");
        process::exit(1);
    }
}
