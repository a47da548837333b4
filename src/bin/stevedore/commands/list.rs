//! `stevedore list` command

use anyhow::Result;
use serde::Serialize;

use crate::cli::ListArgs;
use crate::commands::install::resolve_manifest_path;
use stevedore::core::manifest::Manifest;

pub fn execute(args: ListArgs) -> Result<()> {
    let manifest_path = resolve_manifest_path(args.manifest)?;
    let manifest = Manifest::load(&manifest_path)?;

    if args.json {
        #[derive(Serialize)]
        struct Entry<'a> {
            name: &'a str,
            source: &'static str,
            identifier: String,
        }

        let entries: Vec<Entry> = manifest
            .plan
            .iter()
            .map(|spec| Entry {
                name: spec.name(),
                source: if spec.is_git() { "git" } else { "registry" },
                identifier: spec.to_string(),
            })
            .collect();

        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for spec in &manifest.plan {
        println!("{}", spec);
    }

    Ok(())
}
