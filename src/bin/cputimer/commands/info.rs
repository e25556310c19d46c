//! `cputimer info` command

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::cli::InfoArgs;
use cputimer::core::{BuildSettings, BuildType, PackageDescriptor};
use cputimer::util::GlobalContext;

#[derive(Serialize)]
struct InfoOutput<'a> {
    #[serde(flatten)]
    descriptor: &'a PackageDescriptor,
    settings_values: BTreeMap<String, String>,
    package_id: String,
}

pub fn execute(ctx: &GlobalContext, manifest: Option<&Path>, args: InfoArgs) -> Result<()> {
    let desc = ctx.descriptor(manifest)?;
    let config = ctx.config();

    // CLI > config > default
    let build_type = match args.build_type {
        Some(raw) => raw.parse::<BuildType>().map_err(|e| anyhow!(e))?,
        None => config.build_type().unwrap_or_default(),
    };
    let settings = BuildSettings::new(build_type);
    let package_id = desc.package_id(&settings);

    let settings_values: BTreeMap<String, String> = desc
        .settings()
        .iter()
        .filter_map(|axis| settings.value(axis).map(|v| (axis.clone(), v)))
        .collect();

    if args.json {
        let output = InfoOutput {
            descriptor: &desc,
            settings_values,
            package_id,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", desc.reference());
    if !desc.description().is_empty() {
        println!("  description: {}", desc.description());
    }
    if !desc.license().is_empty() {
        println!("  license:     {}", desc.license());
    }
    if !desc.author().is_empty() {
        println!("  author:      {}", desc.author());
    }
    if !desc.homepage().is_empty() {
        println!("  homepage:    {}", desc.homepage());
    }
    println!("  exports:     {}", desc.exported_source_pattern());
    for (axis, value) in &settings_values {
        println!("  {:<12} {}", format!("{}:", axis), value);
    }
    println!("  package id:  {}", package_id);

    Ok(())
}
