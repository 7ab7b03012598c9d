use std::collections::BTreeSet;
use std::path::Path;

use crate::domain::DomainSuffix;
use crate::error::SyncError;
use crate::fetch::ConfigSource;
use crate::rule::extract_proxy_domains;
use crate::store::{append_domains, read_existing_domains};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    NoRemoteDomains,
    UpToDate { existing: usize },
    Appended { domains: BTreeSet<DomainSuffix> },
    DryRun { domains: BTreeSet<DomainSuffix> },
}

/// Remote domains that the store doesn't know about yet.
pub fn new_domains(
    remote: &BTreeSet<DomainSuffix>,
    existing: &BTreeSet<DomainSuffix>,
) -> BTreeSet<DomainSuffix> {
    remote.difference(existing).cloned().collect()
}

/// Fetch, extract, diff against the store, then append what's new.
pub fn run_sync(
    source: &impl ConfigSource,
    store: &Path,
    dry_run: bool,
) -> Result<SyncOutcome, SyncError> {
    log::info!("Starting domain extraction process...");

    let config = source.fetch()?;
    let remote = extract_proxy_domains(&config);
    if remote.is_empty() {
        log::warn!("No wildcard domains found in the remote configuration");
        return Ok(SyncOutcome::NoRemoteDomains);
    }
    log::info!("Found {} wildcard domains", remote.len());

    let existing = read_existing_domains(store)?;
    log::info!(
        "Found {} existing domains in {}",
        existing.len(),
        store.display()
    );

    let domains = new_domains(&remote, &existing);
    if domains.is_empty() {
        log::info!("All domains already exist in the file");
        return Ok(SyncOutcome::UpToDate {
            existing: existing.len(),
        });
    }

    log::info!("Will add {} new domains", domains.len());

    if dry_run {
        for domain in &domains {
            log::info!("Would add: {}", domain.to_store_line());
        }
        return Ok(SyncOutcome::DryRun { domains });
    }

    append_domains(store, &domains)?;
    log::info!(
        "Successfully added {} new domains to {}",
        domains.len(),
        store.display()
    );

    Ok(SyncOutcome::Appended { domains })
}
