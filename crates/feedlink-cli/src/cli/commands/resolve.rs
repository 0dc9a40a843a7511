//! `feedlink resolve` – classify a single URL.

use anyhow::{Context, Result};
use feedlink_core::link::LinkResolver;
use url::Url;

pub fn run_resolve(resolver: &LinkResolver, raw: &str, json: bool) -> Result<()> {
    let url = Url::parse(raw).with_context(|| format!("invalid URL: {raw}"))?;
    let target = resolver.resolve(&url)?;

    if json {
        let obj = serde_json::json!({
            "provider": target.provider().to_string(),
            "kind": target.kind(),
            "id": target.id(),
        });
        println!("{obj}");
    } else {
        println!("{} {} {}", target.provider(), target.kind(), target.id());
    }
    Ok(())
}
