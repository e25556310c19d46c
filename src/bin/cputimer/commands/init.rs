//! `cputimer init` command

use anyhow::{bail, Context, Result};

use crate::cli::InitArgs;
use cputimer::core::{to_manifest_string, PackageDescriptor, MANIFEST_NAME};
use cputimer::util::fs::write_string;
use cputimer::util::GlobalContext;

pub fn execute(ctx: &GlobalContext, args: InitArgs) -> Result<()> {
    let dir = match args.path {
        Some(path) => ctx.resolve_path(&path),
        None => ctx.cwd().to_path_buf(),
    };
    let manifest_path = dir.join(MANIFEST_NAME);

    if manifest_path.exists() {
        bail!("{} already exists", manifest_path.display());
    }

    let desc = PackageDescriptor::cputimer();
    let contents = to_manifest_string(&desc).context("failed to render Recipe.toml")?;
    write_string(&manifest_path, &contents)?;

    eprintln!("     Created {} for `{}`", MANIFEST_NAME, desc.reference());

    Ok(())
}
