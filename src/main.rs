use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::path::Path;
use std::process::ExitCode;

use termselect::core::config::{self, DEFAULT_LOG_LEVEL, ResolvedConfig};
use termselect::{SelectError, SelectRequest, Selection};

/// Exit code when the user cancels (matches the shell's Ctrl-C convention).
const EXIT_CANCELED: u8 = 130;
/// Distinct from clap's usage-error code 2.
const EXIT_NOT_A_TERMINAL: u8 = 3;
const EXIT_FAILURE: u8 = 1;

#[derive(Parser)]
#[command(
    name = "termselect",
    version,
    about = "Pick one item from a list with the arrow keys"
)]
struct Args {
    /// Items to choose from
    items: Vec<String>,

    /// Prompt shown above the list
    #[arg(short, long)]
    prompt: Option<String>,

    /// Hint shown below the list
    #[arg(long)]
    hint: Option<String>,

    /// Index of the initially highlighted item (out of range selects the first)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    default: i64,

    /// Initially highlight the first item with this label (wins over --default)
    #[arg(long)]
    default_item: Option<String>,

    /// Sort items before showing them
    #[arg(short, long)]
    sort: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logging starts before config so load and resolve warnings are kept
    if let Some(dir) = config::config_dir() {
        init_logging(&dir);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("{}", e);
            eprintln!("termselect: {e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    let resolved = config::resolve(
        &file_config,
        args.prompt.as_deref(),
        args.hint.as_deref(),
        args.sort,
    );
    log::set_max_level(resolved.log_level);
    log::info!("termselect starting with {} items", args.items.len());

    let result = termselect::select_stdio(build_request(args, &resolved));
    match &result {
        Ok(Selection::Selected { label, .. }) => println!("{label}"),
        Ok(Selection::Canceled) => {}
        Err(SelectError::NotATerminal) => {
            eprintln!("termselect: not a terminal (pass the choice non-interactively)");
        }
        Err(e) => {
            log::warn!("Selection failed: {}", e);
            eprintln!("termselect: {e}");
        }
    }
    ExitCode::from(exit_code(&result))
}

fn exit_code(result: &Result<Selection, SelectError>) -> u8 {
    match result {
        Ok(Selection::Selected { .. }) => 0,
        Ok(Selection::Canceled) => EXIT_CANCELED,
        Err(SelectError::NotATerminal) => EXIT_NOT_A_TERMINAL,
        Err(SelectError::NoItems | SelectError::Io(_)) => EXIT_FAILURE,
    }
}

fn build_request(args: Args, resolved: &ResolvedConfig) -> SelectRequest {
    let mut items = args.items;
    if resolved.sort {
        items.sort();
    }

    let mut request = SelectRequest::new(items)
        .prompt(resolved.prompt.as_str())
        .hint(resolved.hint.as_str())
        .default_index(usize::try_from(args.default).unwrap_or(0));
    if let Some(label) = args.default_item.as_deref() {
        request = request.default_label(label);
    }
    request
}

/// File logger at `<dir>/termselect.log`. The terminal belongs to the menu.
///
/// The logger itself passes everything; `log::set_max_level` does the filtering,
/// so the level can be raised or lowered once config is resolved.
fn init_logging(dir: &Path) -> bool {
    if fs::create_dir_all(dir).is_err() {
        return false;
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let Ok(log_file) = File::create(dir.join("termselect.log")) else {
        return false;
    };
    if WriteLogger::init(LevelFilter::Trace, log_config, log_file).is_err() {
        return false;
    }
    log::set_max_level(DEFAULT_LOG_LEVEL);
    true
}
