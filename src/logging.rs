// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Tracing subscriber setup.
//!
//! `LOG_FORMAT` picks the formatter (`json` or `pretty`, default `pretty`).
//! Filter precedence: explicit `-v`/`-q` flags, then `RUST_LOG`, then the
//! default, which is `info` for production builds and `debug` otherwise.

use clap_verbosity_flag::{LogLevel, Verbosity};
use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; anything unrecognised falls back to pretty.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Default filter directive when `RUST_LOG` is unset.
pub fn default_directive(production: bool) -> &'static str {
    if production {
        "info"
    } else {
        "debug"
    }
}

/// Directive requested by `-v`/`-q`, or `None` when the flags leave the level
/// at its default.
pub fn verbosity_directive<L: LogLevel>(verbosity: &Verbosity<L>) -> Option<String> {
    let level = verbosity.log_level();
    if level == <L as LogLevel>::default() {
        return None;
    }
    Some(level.map_or_else(|| "off".to_string(), |l| l.as_str().to_ascii_lowercase()))
}

/// Install the global subscriber.
pub fn init<L: LogLevel>(
    verbosity: &Verbosity<L>,
    production: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = match verbosity_directive(verbosity) {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(production))),
    };
    let format = LogFormat::parse(std::env::var(LOG_FORMAT_ENV).ok().as_deref());

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use clap_verbosity_flag::InfoLevel;

    #[derive(Parser)]
    struct Flags {
        #[command(flatten)]
        verbosity: Verbosity<InfoLevel>,
    }

    fn directive(args: &[&str]) -> Option<String> {
        let argv = std::iter::once("coffee-env").chain(args.iter().copied());
        let flags = Flags::try_parse_from(argv).unwrap();
        verbosity_directive(&flags.verbosity)
    }

    #[test]
    fn no_flags_defer_to_rust_log_and_default() {
        assert_eq!(directive(&[]), None);
    }

    #[test]
    fn verbose_and_quiet_flags_set_the_level() {
        assert_eq!(directive(&["-v"]).as_deref(), Some("debug"));
        assert_eq!(directive(&["-vv"]).as_deref(), Some("trace"));
        assert_eq!(directive(&["-q"]).as_deref(), Some("warn"));
        assert_eq!(directive(&["-qqq"]).as_deref(), Some("off"));
    }

    #[test]
    fn production_logs_less() {
        assert_eq!(default_directive(true), "info");
        assert_eq!(default_directive(false), "debug");
    }

    #[test]
    fn log_format_parsing() {
        assert_eq!(LogFormat::parse(Some("json")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some(" JSON ")), LogFormat::Json);
        assert_eq!(LogFormat::parse(Some("pretty")), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(Some("xml")), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(None), LogFormat::Pretty);
    }
}
