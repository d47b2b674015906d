use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

/// Narrower `COLUMNS` values are ignored.
const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

/// What the process can see of its terminal.
#[derive(Clone, Copy, Debug, Default)]
struct Terminal {
    stdout_tty: bool,
    stderr_tty: bool,
    no_color: bool,
    columns: Option<usize>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            stderr_tty: std::io::stderr().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS")
                .ok()
                .and_then(|value| value.parse::<usize>().ok()),
        }
    }
}

impl UiPrefs {
    fn resolve(flags: &GlobalFlags, terminal: Terminal) -> Self {
        let table = flags.format == OutputFormat::Table;
        let table_color = match flags.color {
            ColorMode::Always => table,
            ColorMode::Never => false,
            ColorMode::Auto => table && terminal.stdout_tty && !terminal.no_color && !flags.quiet,
        };

        // The spinner draws on stderr, so a piped stdout keeps it.
        let progress = !flags.quiet
            && match flags.progress {
                ProgressMode::On => true,
                ProgressMode::Off => false,
                ProgressMode::Auto => terminal.stderr_tty,
            };

        Self {
            table_color,
            progress,
            term_width: terminal.columns.filter(|width| *width >= MIN_TERM_WIDTH),
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(UiPrefs::resolve(flags, Terminal::detect()));
}

/// Preferences set by [`init`]; plain output before that.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}
