//! Human-readable status written around a script run.

use std::io::{self, Write};

use super::profile::DispatchProfile;
use super::types::ScriptTarget;

/// LLVM note and the script about to run.
pub fn write_banner<W: Write>(out: &mut W, profile: &DispatchProfile, target: &ScriptTarget) -> io::Result<()> {
  let note = format!(
    "Note: to compile the {}, you need to have LLVM installed.",
    profile.subject
  );
  let rule = "-".repeat(note.len());

  writeln!(out, "{rule}")?;
  writeln!(out, "{note}")?;
  writeln!(out, "{rule}")?;
  writeln!(out, "Executing: {}", target.display_relative())
}

/// Artifact locations and harness usage; only the completion line for
/// profiles without artifacts.
pub fn write_success<W: Write>(out: &mut W, profile: &DispatchProfile) -> io::Result<()> {
  writeln!(out, "Done.")?;

  let (Some(artifacts), Some((module, wrapper))) = (profile.artifacts, profile.artifact_paths()) else {
    return Ok(());
  };

  let located = format!("The compiled WASM file is located in: {module}");
  let rule = "-".repeat(located.len());

  writeln!(out, "{rule}")?;
  writeln!(out, "{located}")?;
  writeln!(out, "Along with the JS wrapper: {wrapper}")?;
  writeln!(out, "{rule}")?;
  writeln!(out, "To use it, navigate into the ./{} directory", profile.base_dir)?;
  writeln!(out, "and you can either test it like for example:")?;
  writeln!(out, "   - Node.JS -> cd into 'node-test' and run 'node run.js'")?;
  writeln!(out, "   - Browser -> cd into 'web-server-test' and run 'node server.js'")?;
  writeln!(
    out,
    "Or you can copy the '{}' and '{}' files into your project and use them there as you wish.",
    artifacts.module, artifacts.wrapper
  )
}

/// Short failure message and the exit code, nothing else.
pub fn write_failure<W: Write>(out: &mut W, profile: &DispatchProfile, exit_code: i32) -> io::Result<()> {
  writeln!(out, "Error building the {}.", profile.subject)?;
  writeln!(out, "Exit code: {exit_code}")
}
