//! `cputimer export` command

use anyhow::{anyhow, Result};

use crate::cli::ExportArgs;
use cputimer::ops::export_package;
use cputimer::util::fs::normalize_path;
use cputimer::util::GlobalContext;

pub fn execute(ctx: &GlobalContext, args: ExportArgs) -> Result<()> {
    let config = ctx.config();

    // CLI > config > cwd
    let source = args
        .source
        .or(config.export.source)
        .map(|p| ctx.resolve_path(&p))
        .unwrap_or_else(|| ctx.cwd().to_path_buf());

    let package = args
        .package
        .or(config.export.package)
        .map(|p| ctx.resolve_path(&p))
        .ok_or_else(|| {
            anyhow!(
                "no package directory given\n\
                 help: Pass `--package <DIR>` or set `export.package` in .cputimer/config.toml"
            )
        })?;

    let report = export_package(&source, &package)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for file in &report.files {
            println!("{}  {}", &file.sha256[..16], file.relative.display());
        }
    }

    eprintln!(
        "    Exported {} header(s) to {}",
        report.files.len(),
        normalize_path(&report.destination).display()
    );

    Ok(())
}
