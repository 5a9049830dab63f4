//! Installed font lookup through fontconfig.

use eyre::{Context, Result, bail};
use melops_caption::fonts::FontRegistry;
use std::collections::BTreeSet;
use std::process::Command;

/// Font families reported by `fc-list`, queried once per run.
#[derive(Clone, Debug)]
pub struct SystemFonts {
    families: Vec<String>,
}

impl SystemFonts {
    pub fn query() -> Result<Self> {
        tracing::debug!("querying fontconfig for installed fonts");

        let output = Command::new("fc-list")
            .args([":", "family"])
            .output()
            .wrap_err("failed to run fc-list")?;

        if !output.status.success() {
            bail!("fc-list exited with {}", output.status);
        }

        let families = parse_families(&String::from_utf8_lossy(&output.stdout));
        tracing::info!(count = families.len(), "available fonts retrieved");

        Ok(Self { families })
    }
}

impl FontRegistry for SystemFonts {
    fn families(&self) -> Vec<String> {
        self.families.clone()
    }
}

/// Parse `fc-list : family` output; a line may list comma-separated aliases.
fn parse_families(listing: &str) -> Vec<String> {
    listing
        .lines()
        .flat_map(|line| line.split(','))
        .map(|family| family.trim().replace("\\-", "-"))
        .filter(|family| !family.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
