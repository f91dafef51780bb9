use std::process::Command;

use anyhow::{Context, Result};

/// Feature tiers of `geofleet-common` that must build on their own
const FEATURE_COMBINATIONS: &[&[&str]] = &[
    &[], // default (no tiers)
    &["foundation"],
    &["observability"],
];

/// Check that every `geofleet-common` feature tier compiles in isolation.
pub fn test_feature_matrix() -> Result<()> {
    println!("Testing {} geofleet-common feature combinations...", FEATURE_COMBINATIONS.len());

    for (index, features) in FEATURE_COMBINATIONS.iter().enumerate() {
        let joined = features.join(",");
        let display_label = if features.is_empty() { "default".to_string() } else { joined.clone() };

        println!(
            "\n[{}/{}] cargo test -p geofleet-common --no-default-features{}",
            index + 1,
            FEATURE_COMBINATIONS.len(),
            if features.is_empty() { String::new() } else { format!(" --features {joined}") }
        );

        let mut command = Command::new("cargo");
        command.args(["test", "-p", "geofleet-common", "--no-default-features"]);
        if !features.is_empty() {
            command.arg("--features").arg(&joined);
        }

        let status = command
            .status()
            .with_context(|| format!("Failed to run cargo test for '{display_label}'"))?;

        if !status.success() {
            anyhow::bail!("Feature combination '{display_label}' failed");
        }

        println!("✅ Features '{display_label}' passed");
    }

    println!("\n✅ All {} feature combinations pass!", FEATURE_COMBINATIONS.len());

    Ok(())
}
