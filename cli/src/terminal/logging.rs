use std::fmt;
use std::io::IsTerminal;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Events on this target are guide output and are written without decoration.
pub const PRINT_TARGET: &str = "guide::print";
const RAW_FIELD: &str = "raw_msg";

pub struct GuideFormatter;

impl<S, N> FormatEvent<S, N> for GuideFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0.unwrap_or_default());
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        if writer.has_ansi_escapes() {
            write!(writer, "{} ", color_func(symbol.into()))?;
        } else {
            write!(writer, "{symbol} ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

#[derive(Default)]
struct RawMessage(Option<String>);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == RAW_FIELD {
            self.0 = Some(value.to_owned());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == RAW_FIELD {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

/// Builds the filter from `RUST_LOG`-style directives (default `warn`).
///
/// The print target is forced to `info` afterwards, so no directive can
/// filter guide output away.
pub fn build_filter(directives: &str) -> anyhow::Result<EnvFilter> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
        .add_directive(format!("{PRINT_TARGET}=info").parse()?);

    Ok(filter)
}

/// Installs the global subscriber.
///
/// ANSI escapes are only written when color is allowed and stdout is a terminal.
pub fn init_logging(no_color: bool) -> anyhow::Result<()> {
    let directives: String = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let ansi: bool = !no_color && std::io::stdout().is_terminal();

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&directives)?)
        .with_writer(std::io::stdout)
        .with_ansi(ansi)
        .event_format(GuideFormatter)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}
