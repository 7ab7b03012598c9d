use std::num::NonZeroU64;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use proxy_domain_sync::fetch::{GistSource, DEFAULT_SOURCE};
use proxy_domain_sync::store::DEFAULT_STORE;
use proxy_domain_sync::{run_sync, SyncOutcome};

/// Appends the proxied wildcard domains of a ZeroOmega auto switch profile
/// to a DOMAIN-SUFFIX rule list.
#[derive(Parser)]
struct Cli {
    /// Gist page or raw-content URL of the ZeroOmega configuration
    #[clap(long, default_value = DEFAULT_SOURCE)]
    source: String,

    /// Rule list to append to
    #[clap(long, default_value = DEFAULT_STORE)]
    output: PathBuf,

    #[clap(long, default_value = "30")]
    timeout_secs: NonZeroU64,

    /// Only report the domains that would be added
    #[clap(long)]
    dry_run: bool,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        source,
        output,
        timeout_secs,
        dry_run,
    } = cli;

    let source = GistSource::new(source, Duration::from_secs(timeout_secs.get()));
    let outcome = run_sync(&source, &output, dry_run)
        .with_context(|| format!("Syncing proxy domains into {}", output.display()))?;

    log::debug!("Finished with {outcome:?}");
    if let SyncOutcome::DryRun { domains } = outcome {
        log::info!("Dry run, {} domains not written", domains.len());
    }

    Ok(())
}

fn main() {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }

    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{e:?}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_locations() {
        let cli = Cli::try_parse_from(["proxy-domain-sync"]).expect("to parse");
        assert_eq!(cli.source, DEFAULT_SOURCE);
        assert_eq!(cli.output, PathBuf::from(DEFAULT_STORE));
        assert_eq!(cli.timeout_secs.get(), 30);
        assert!(!cli.dry_run);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["proxy-domain-sync", "--timeout-secs", "0"]).is_err());
        assert!(Cli::try_parse_from(["proxy-domain-sync", "--timeout-secs", "5"]).is_ok());
    }
}
