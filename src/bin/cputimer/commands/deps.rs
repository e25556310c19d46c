//! `cputimer deps` command

use std::path::Path;

use anyhow::Result;

use crate::cli::DepsArgs;
use cputimer::util::GlobalContext;

pub fn execute(ctx: &GlobalContext, manifest: Option<&Path>, args: DepsArgs) -> Result<()> {
    let desc = ctx.descriptor(manifest)?;
    let deps = desc.declare_dependencies();

    if args.json {
        println!("{}", serde_json::to_string_pretty(deps)?);
        return Ok(());
    }

    for dep in deps {
        println!("{}", dep);
    }

    Ok(())
}
