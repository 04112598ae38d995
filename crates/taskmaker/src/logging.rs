//! Log setup for the binary
//!
//! `RUST_LOG` picks the base filter. `-v` raises the workspace crates to
//! debug on top of whatever it says.

use std::io;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "taskmaker=info,tm_db=info";
const VERBOSE_DIRECTIVES: [&str; 2] = ["taskmaker=debug", "tm_db=debug"];

/// `RUST_LOG` if set and valid, else the default, with `-v` applied
pub fn env_filter(verbose: bool) -> EnvFilter {
    let base = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    with_verbose(base, verbose)
}

/// Add the debug directives to `filter` when `verbose` is set
pub fn with_verbose(filter: EnvFilter, verbose: bool) -> EnvFilter {
    if !verbose {
        return filter;
    }
    VERBOSE_DIRECTIVES
        .iter()
        .filter_map(|d| d.parse::<Directive>().ok())
        .fold(filter, EnvFilter::add_directive)
}

/// Install the global subscriber, writing to stderr
pub fn init_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_overrides_quiet_filter() {
        let filter = with_verbose(EnvFilter::new("warn"), true).to_string();
        assert!(filter.contains("taskmaker=debug"));
        assert!(filter.contains("tm_db=debug"));
        assert!(filter.contains("warn"));
    }

    #[test]
    fn test_verbose_replaces_crate_level() {
        let filter = with_verbose(EnvFilter::new("tm_db=error"), true).to_string();
        assert!(filter.contains("tm_db=debug"));
        assert!(!filter.contains("tm_db=error"));
    }

    #[test]
    fn test_quiet_leaves_filter_alone() {
        let filter = with_verbose(EnvFilter::new("warn"), false).to_string();
        assert_eq!(filter, "warn");
    }
}
