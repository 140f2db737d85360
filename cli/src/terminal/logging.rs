use std::env;
use std::io::{self, IsTerminal};

use cloudrange_common::config::Config;
use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Glyph-prefixed event lines for stderr.
///
/// Debug and trace events also name the module that emitted them, with the
/// workspace crate prefix dropped (`providers::google: manifest parsed ...`).
/// Colour follows stderr rather than stdout, since stdout usually carries
/// NDJSON into a pipe while stderr is still a terminal.
pub struct CloudrangeFormatter {
    ansi: bool,
}

impl CloudrangeFormatter {
    pub fn new(ansi: bool) -> Self {
        Self { ansi }
    }

    fn prefix(&self, level: &Level, target: &str) -> String {
        let (symbol, color_func) = glyph(level);
        let symbol = if self.ansi {
            color_func(symbol.into()).to_string()
        } else {
            symbol.to_string()
        };

        match *level {
            Level::DEBUG | Level::TRACE => {
                let target = short_target(target);
                if self.ansi {
                    format!("{symbol} {}: ", target.dimmed())
                } else {
                    format!("{symbol} {target}: ")
                }
            }
            _ => format!("{symbol} "),
        }
    }
}

impl<S, N> FormatEvent<S, N> for CloudrangeFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        write!(writer, "{}", self.prefix(meta.level(), meta.target()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn glyph(level: &Level) -> (&'static str, fn(ColoredString) -> ColoredString) {
    match *level {
        Level::TRACE => ("[ ]", |s| s.dimmed()),
        Level::DEBUG => ("[?]", |s| s.blue()),
        Level::INFO => ("[+]", |s| s.green().bold()),
        Level::WARN => ("[*]", |s| s.yellow().bold()),
        Level::ERROR => ("[-]", |s| s.red().bold()),
    }
}

/// `cloudrange_core::providers::azure` -> `providers::azure`.
fn short_target(target: &str) -> &str {
    match target.split_once("::") {
        Some((krate, rest)) if krate.starts_with("cloudrange") => rest,
        _ => target,
    }
}

/// Installs the global subscriber. Logs go to stderr; stdout is reserved
/// for JSON output.
///
/// `RUST_LOG` wins over the `-v`/`-q` flags when it is set. `NO_COLOR`
/// turns colour off even on a terminal.
pub fn init_logging(cfg: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(cfg.verbose, cfg.quiet)));

    let ansi = io::stderr().is_terminal() && env::var_os("NO_COLOR").is_none();
    colored::control::set_override(ansi);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .event_format(CloudrangeFormatter::new(ansi))
        .init();
}

fn default_level(verbose: u8, quiet: u8) -> &'static str {
    match (quiet, verbose) {
        (0, 0) => "info",
        (0, 1) => "debug",
        (0, _) => "trace",
        (1, _) => "warn",
        _ => "error",
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
