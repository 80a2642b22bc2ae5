//! Implementation of the `vplc filter` command.
//!
//! Lists which files under a source directory the native build keeps.

use std::path::Path;

use anyhow::{Context, Result};

use vovkplc_lib::filter::{SourceNode, scan_sources};

use crate::output::{plural, print_info, print_source, print_stat};

pub fn cmd_filter(dir: &Path) -> Result<()> {
  let sources = scan_sources(dir).with_context(|| format!("Failed to scan sources in {}", dir.display()))?;

  print_info(&format!("Native build sources in {}", dir.display()));

  for source in &sources {
    let shown = source.node.path().strip_prefix(dir).unwrap_or(source.node.path());
    print_source(source.decision, &shown.display().to_string());
  }

  let included = sources.iter().filter(|s| s.decision.is_included()).count();
  let excluded = sources.len() - included;

  println!();
  print_stat("Included", &plural(included, "file"));
  print_stat("Excluded", &plural(excluded, "file"));

  Ok(())
}
