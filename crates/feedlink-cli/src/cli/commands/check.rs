//! `feedlink check` – classify every URL in a file.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use feedlink_core::link::{FeedTarget, LinkResolver};
use url::Url;

pub fn run_check(resolver: &LinkResolver, path: &Path) -> Result<()> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("cannot read URL list {}", path.display()))?;

    let mut failures = 0usize;
    println!("{:<10} {:<10} {:<30} {}", "PROVIDER", "KIND", "ID", "URL");
    for line in data.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match classify_line(resolver, line) {
            Ok(target) => println!(
                "{:<10} {:<10} {:<30} {}",
                target.provider().to_string(),
                target.kind(),
                target.id(),
                line
            ),
            Err(err) => {
                failures += 1;
                println!("{:<10} {:<10} {:<30} {}", "-", "-", format!("{err:#}"), line);
            }
        }
    }

    if failures > 0 {
        bail!("{failures} URL(s) failed to classify");
    }
    Ok(())
}

fn classify_line(resolver: &LinkResolver, line: &str) -> Result<FeedTarget> {
    let url = Url::parse(line).with_context(|| format!("invalid URL: {line}"))?;
    Ok(resolver.resolve(&url)?)
}
