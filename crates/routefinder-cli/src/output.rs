//! Output formatting for route and inspection results.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use routefinder_lib::{RouteRenderMode, RouteSummary};

/// Output format accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Header plus one numbered line per stop.
    #[default]
    Text,
    /// Keys only, marked `+` / `|` / `-`.
    Basic,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    fn render_mode(self) -> RouteRenderMode {
        match self {
            OutputFormat::Basic => RouteRenderMode::Basic,
            OutputFormat::Text | OutputFormat::Json => RouteRenderMode::PlainText,
        }
    }
}

/// Write a route summary to `out` in the requested format.
pub fn write_route<W: Write>(
    out: &mut W,
    summary: &RouteSummary,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, summary),
        other => out.write_all(summary.render(other.render_mode()).as_bytes()),
    }
}

/// Pretty-print any serialisable value followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
