use bootslide::render::{
    HeadlessError, MessageSeverities, RenderOptions, Severity, SliderRenderer,
    sanitize_client_id,
};
use bootslide::{FormData, SliderState, WidgetConfig, resolve_value};
use serde::Serialize;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Slider(HeadlessError),
    Json(serde_json::Error),
    Toml(toml::de::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Slider(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Toml(err) => write!(f, "TOML error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<HeadlessError> for CliError {
    fn from(value: HeadlessError) -> Self {
        Self::Slider(value)
    }
}

impl From<bootslide::Error> for CliError {
    fn from(value: bootslide::Error) -> Self {
        Self::Slider(value.into())
    }
}

impl From<bootslide::render::Error> for CliError {
    fn from(value: bootslide::render::Error) -> Self {
        Self::Slider(value.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<toml::de::Error> for CliError {
    fn from(value: toml::de::Error) -> Self {
        Self::Toml(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Render,
    Config,
    Decode,
}

#[derive(Debug, Clone, Copy, Default)]
enum StateFormat {
    #[default]
    Json,
    Toml,
}

impl FromStr for StateFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    format: Option<StateFormat>,
    client_id: Option<String>,
    form: Option<String>,
    message: Option<Severity>,
    pretty: bool,
    verbose: bool,
    out: Option<String>,
}

#[derive(Serialize)]
struct DecodeOut<'a> {
    client_id: &'a str,
    accepted: bool,
    state: &'a SliderState,
}

fn usage() -> &'static str {
    "bootslide-cli\n\
\n\
USAGE:\n\
  bootslide-cli [render] [--client-id <id>] [--form <urlencoded>] [--message info|warning|error|fatal] [--format json|toml] [--out <path>] [--verbose] [<path>|-]\n\
  bootslide-cli config [--client-id <id>] [--form <urlencoded>] [--format json|toml] [--pretty] [--verbose] [<path>|-]\n\
  bootslide-cli decode --form <urlencoded> [--client-id <id>] [--format json|toml] [--pretty] [--verbose] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the slider state is read from stdin.\n\
  - The state format follows the file extension (.toml is TOML, anything else JSON); --format overrides it.\n\
  - The client id defaults to the sanitized file stem, or 'slider' for stdin.\n\
  - render prints the slider markup and scripts; --form decodes a request first.\n\
  - config prints the client widget options; decode prints the state after decoding --form.\n\
  - Log verbosity follows RUST_LOG; --verbose defaults it to debug.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "render" => args.command = Command::Render,
            "config" => args.command = Command::Config,
            "decode" => args.command = Command::Decode,
            "--pretty" => args.pretty = true,
            "--verbose" | "-v" => args.verbose = true,
            "--client-id" | "--id" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.client_id = Some(id.clone());
            }
            "--form" => {
                let Some(body) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.form = Some(body.clone());
            }
            "--message" => {
                let Some(severity) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.message = Some(
                    serde_json::from_value(serde_json::Value::from(severity.as_str()))
                        .map_err(|_| CliError::Usage(usage()))?,
                );
            }
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.format = Some(
                    fmt.parse::<StateFormat>()
                        .map_err(|_| CliError::Usage(usage()))?,
                );
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if matches!(args.command, Command::Decode) && args.form.is_none() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn detect_format(input: Option<&str>) -> StateFormat {
    match input {
        Some(path) if path != "-" => {
            let is_toml = Path::new(path)
                .extension()
                .is_some_and(|e| e.eq_ignore_ascii_case("toml"));
            if is_toml {
                StateFormat::Toml
            } else {
                StateFormat::Json
            }
        }
        _ => StateFormat::Json,
    }
}

fn parse_state(text: &str, format: StateFormat) -> Result<SliderState, CliError> {
    Ok(match format {
        StateFormat::Json => serde_json::from_str(text)?,
        StateFormat::Toml => toml::from_str(text)?,
    })
}

fn default_client_id(input: Option<&str>) -> String {
    match input {
        Some(path) if path != "-" => Path::new(path)
            .file_stem()
            .map(|stem| sanitize_client_id(&stem.to_string_lossy()))
            .unwrap_or_else(|| "slider".to_string()),
        _ => "slider".to_string(),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    } else {
        serde_json::to_writer(&mut stdout, value)?;
    }
    writeln!(stdout)?;
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let format = args
        .format
        .unwrap_or_else(|| detect_format(args.input.as_deref()));
    let mut state = parse_state(&text, format)?;
    let client_id = args
        .client_id
        .clone()
        .unwrap_or_else(|| default_client_id(args.input.as_deref()));
    tracing::debug!(client_id = %client_id, ?format, "loaded slider state");

    let mut messages = MessageSeverities::new();
    if let Some(severity) = args.message {
        messages.add(client_id.clone(), severity);
    }
    let renderer = SliderRenderer::new(RenderOptions::with_messages(messages));

    let accepted = match args.form.as_deref() {
        Some(body) => renderer.decode(&mut state, &client_id, &FormData::from_urlencoded(body)),
        None => false,
    };

    match args.command {
        Command::Render => {
            let html = renderer.encode_to_string(&mut state, &client_id)?;
            match args.out.as_deref() {
                Some(path) => std::fs::write(path, format!("{html}\n"))?,
                None => {
                    let mut stdout = std::io::stdout().lock();
                    writeln!(stdout, "{html}")?;
                }
            }
            Ok(())
        }
        Command::Config => {
            let resolved = resolve_value(&state)?;
            let config = WidgetConfig::from_state(&state, resolved.display);
            write_json(config.as_map(), args.pretty)
        }
        Command::Decode => write_json(
            &DecodeOut {
                client_id: &client_id,
                accepted,
                state: &state,
            },
            args.pretty,
        ),
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    init_logging(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
