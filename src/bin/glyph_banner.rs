//! `glyph-banner` - render text as glyph-painted block letters
//!
//! # Usage
//!
//! ```bash
//! glyph-banner hello world
//! glyph-banner --direction horizontal --style 🌻 🌿 --style 🍓 🫐 "hi there"
//! glyph-banner --state-dir ~/.local/state/glyph-banner --svg banner.svg
//! ```
//!
//! The banner is printed to stdout verbatim, ready to pipe into a clipboard
//! tool.

use glyph_banner::export::{DEFAULT_FONT_PX, FONT_PX_RANGE, write_svg};
use glyph_banner::{
    ApplyStylesOn, Direction, Editor, Error, FileStore, FillSpaces, LogLevel, MemoryStore,
    OptionsPatch, Palette, StateStore, Style, render_with_stats, set_log_callback,
};
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "glyph-banner - render text as glyph-painted block letters

USAGE:
    glyph-banner [OPTIONS] [TEXT]...

ARGS:
    [TEXT]...                  Text to render (words are joined with spaces).
                               Without text, the stored input is rendered.

OPTIONS:
    -h, --help                 Print this help message and exit
    -d, --direction <DIR>      vertical | horizontal
        --hpad <N>             Horizontal padding, 0-10
        --vpad <N>             Vertical padding, 0-10
        --space-size <N>       Space size, 1-10
        --fill <MODE>          Fill spaces with: background | nothing
        --apply-on <UNIT>      Rotate styles per: letter | word
    -s, --style <FG> <BG>      Use this glyph pair (repeat for more styles)
        --random-style         Append a random emoji style

        --state-dir <DIR>      Load and save editor state in DIR
                               (default: $GLYPH_BANNER_STATE_DIR, else none)
        --svg <PATH>           Also export the banner as an SVG image
        --font-px <N>          SVG font size in pixels, 1-4096 (default: 100)
        --stats                Log render statistics

ENVIRONMENT:
    GLYPH_BANNER_LOG           Log filter (default: warn)
    GLYPH_BANNER_STATE_DIR     Default state directory

EXAMPLES:
    glyph-banner hello
    glyph-banner -d horizontal --hpad 0 --vpad 0 -s '#' '.' hi
    glyph-banner --fill nothing --apply-on word \"two words\"
";

/// Command-line configuration.
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub text: Option<String>,
    pub patch: OptionsPatch,
    pub styles: Vec<Style>,
    pub random_style: bool,
    pub state_dir: Option<PathBuf>,
    pub svg: Option<PathBuf>,
    pub font_px: u32,
    pub stats: bool,
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self {
            font_px: DEFAULT_FONT_PX,
            ..Self::default()
        };
        let mut words: Vec<String> = Vec::new();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy().to_string();

            match arg_str.as_str() {
                "-h" | "--help" => return ParseResult::Help,

                "-d" | "--direction" => {
                    let value = match next_value(&mut args, "--direction") {
                        Ok(v) => v,
                        Err(e) => return ParseResult::Error(e),
                    };
                    config.patch.direction = match value.to_lowercase().as_str() {
                        "vertical" | "v" => Some(Direction::Vertical),
                        "horizontal" | "h" => Some(Direction::Horizontal),
                        _ => {
                            return ParseResult::Error(format!(
                                "Unknown --direction: {value} (valid: vertical, horizontal)"
                            ));
                        }
                    };
                }

                "--hpad" | "--vpad" | "--space-size" | "--font-px" => {
                    let value = match next_value(&mut args, &arg_str) {
                        Ok(v) => v,
                        Err(e) => return ParseResult::Error(e),
                    };
                    let Ok(n) = value.parse::<u32>() else {
                        return ParseResult::Error(format!(
                            "Invalid {arg_str} value: {value} (must be a non-negative integer)"
                        ));
                    };
                    match arg_str.as_str() {
                        "--hpad" => config.patch.horizontal_padding = Some(n),
                        "--vpad" => config.patch.vertical_padding = Some(n),
                        "--space-size" => config.patch.space_size = Some(n),
                        _ => {
                            if !FONT_PX_RANGE.contains(&n) {
                                return ParseResult::Error(format!(
                                    "Invalid --font-px value: {n} (must be {}-{})",
                                    FONT_PX_RANGE.start(),
                                    FONT_PX_RANGE.end()
                                ));
                            }
                            config.font_px = n;
                        }
                    }
                }

                "--fill" => {
                    let value = match next_value(&mut args, "--fill") {
                        Ok(v) => v,
                        Err(e) => return ParseResult::Error(e),
                    };
                    config.patch.fill_spaces_with = match value.to_lowercase().as_str() {
                        "background" => Some(FillSpaces::Background),
                        "nothing" => Some(FillSpaces::Nothing),
                        _ => {
                            return ParseResult::Error(format!(
                                "Unknown --fill: {value} (valid: background, nothing)"
                            ));
                        }
                    };
                }

                "--apply-on" => {
                    let value = match next_value(&mut args, "--apply-on") {
                        Ok(v) => v,
                        Err(e) => return ParseResult::Error(e),
                    };
                    config.patch.apply_styles_on = match value.to_lowercase().as_str() {
                        "letter" => Some(ApplyStylesOn::Letter),
                        "word" => Some(ApplyStylesOn::Word),
                        _ => {
                            return ParseResult::Error(format!(
                                "Unknown --apply-on: {value} (valid: letter, word)"
                            ));
                        }
                    };
                }

                "-s" | "--style" => {
                    let pair = next_value(&mut args, "--style")
                        .and_then(|fg| next_value(&mut args, "--style").map(|bg| (fg, bg)));
                    let (fg, bg) = match pair {
                        Ok(pair) => pair,
                        Err(_) => {
                            return ParseResult::Error(
                                "--style requires two values: <FG> <BG>".to_string(),
                            );
                        }
                    };
                    match Style::from_strs(&fg, &bg) {
                        Ok(style) => config.styles.push(style),
                        Err(e) => return ParseResult::Error(format!("Invalid --style: {e}")),
                    }
                }

                "--random-style" => config.random_style = true,

                "--state-dir" | "--svg" => {
                    let value = match args.next() {
                        Some(v) => PathBuf::from(v),
                        None => return ParseResult::Error(format!("{arg_str} requires a value")),
                    };
                    if arg_str == "--svg" {
                        config.svg = Some(value);
                    } else {
                        config.state_dir = Some(value);
                    }
                }

                "--stats" => config.stats = true,

                "--" => words.extend(args.by_ref().map(|a| a.to_string_lossy().to_string())),

                other => {
                    if other.starts_with('-') && other.len() > 1 {
                        return ParseResult::Error(format!("Unknown option: {other}"));
                    }
                    words.push(other.to_string());
                }
            }
        }

        if !words.is_empty() {
            config.text = Some(words.join(" "));
        }
        ParseResult::Config(config)
    }
}

fn next_value<I>(args: &mut I, flag: &str) -> Result<String, String>
where
    I: Iterator<Item = OsString>,
{
    args.next()
        .map(|v| v.to_string_lossy().to_string())
        .ok_or_else(|| format!("{flag} requires a value"))
}

// ============================================================================
// Logging
// ============================================================================

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("GLYPH_BANNER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();

    set_log_callback(|level, message| match level {
        LogLevel::Debug => tracing::debug!("{message}"),
        LogLevel::Info => tracing::info!("{message}"),
        LogLevel::Warn => tracing::warn!("{message}"),
        LogLevel::Error => tracing::error!("{message}"),
    });
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> ExitCode {
    init_logging();

    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(mut config) => {
            if config.state_dir.is_none() {
                config.state_dir = std::env::var_os("GLYPH_BANNER_STATE_DIR").map(PathBuf::from);
            }
            let result = match config.state_dir.clone() {
                Some(dir) => run(&config, FileStore::new(dir)),
                None => run(&config, MemoryStore::new()),
            };
            match result {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            ExitCode::SUCCESS
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            ExitCode::from(2)
        }
    }
}

fn run<S: StateStore>(config: &Config, store: S) -> Result<(), Error> {
    let mut editor = Editor::open(store);

    editor.state().options.patched(&config.patch).validate()?;

    if !config.styles.is_empty() {
        for glyph in config.styles.iter().flat_map(|s| [&s.foreground, &s.background]) {
            let graphemes = glyph.graphemes();
            if graphemes > 1 {
                tracing::warn!(%glyph, graphemes, "glyph spans several cells");
            }
        }
        editor.set_styles(Palette::new(config.styles.clone())?);
    }
    if config.random_style {
        editor.add_random_style(&mut rand::rng());
    }
    if config.patch != OptionsPatch::default() {
        editor.update_options(&config.patch);
    }
    if let Some(text) = &config.text {
        editor.set_input_text(text.as_str());
    }

    let state = editor.state();
    if config.stats {
        let (_, stats) = render_with_stats(&state.input_text, &state.styles, &state.options);
        tracing::info!(
            characters = stats.characters,
            blocks = stats.blocks,
            rows = stats.rows,
            width = stats.width,
            elapsed_us = stats.elapsed.as_micros() as u64,
            "rendered banner"
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(editor.output().as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;

    if let Some(path) = &config.svg {
        let mut file = BufWriter::new(File::create(path)?);
        write_svg(&mut file, editor.output(), config.font_px)?;
        tracing::info!(path = %path.display(), "wrote SVG export");
    }

    Ok(())
}
