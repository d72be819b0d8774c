//! Line oriented diagnostics.
//!
//! Every event becomes a single `<prefix>: <message>` line. Errors and
//! warnings go to stderr with a `-` prefix, everything else to stdout with
//! a `+` prefix:
//!
//! ```text
//! +info: RENAMING '/tv/One Piece 12.mkv' to '/tv/One Piece S02E04.mkv'
//! -error: Does not match: notes.txt
//! ```

use std::fmt;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

#[derive(Debug, Default, Clone, Copy)]
pub struct PrefixFormat;

pub fn prefix(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "-error",
        Level::WARN => "-warn",
        Level::INFO => "+info",
        Level::DEBUG => "+debug",
        _ => "+trace",
    }
}

impl<S, N> FormatEvent<S, N> for PrefixFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "{}: ", prefix(event.metadata().level()))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks between info and debug.
pub fn init(verbose: bool) {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if verbose {
            "debug".to_string()
        } else {
            "info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_writer(std::io::stderr.with_max_level(Level::WARN).or_else(std::io::stdout))
        .event_format(PrefixFormat)
        .init();
}
