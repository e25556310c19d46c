//! `cputimer check` command

use std::path::Path;

use anyhow::{anyhow, Result};

use crate::cli::CheckArgs;
use cputimer::ops::{check_requirements, DirectoryResolver};
use cputimer::util::GlobalContext;

pub fn execute(ctx: &GlobalContext, manifest: Option<&Path>, args: CheckArgs) -> Result<()> {
    let desc = ctx.descriptor(manifest)?;
    let config = ctx.config();

    let registry = args
        .registry
        .or(config.registry.path)
        .map(|p| ctx.resolve_path(&p))
        .ok_or_else(|| {
            anyhow!(
                "no registry given\n\
                 help: Pass `--registry <DIR>` or set `registry.path` in .cputimer/config.toml"
            )
        })?;

    let resolver = DirectoryResolver::new(registry);
    let resolved = check_requirements(&desc, &resolver)?;

    for dep in &resolved {
        println!("{} -> {}", dep.dependency, dep.location.display());
    }
    eprintln!(
        "     Checked {} dependencies of `{}`",
        resolved.len(),
        desc.reference()
    );

    Ok(())
}
