//! vovkplc-lib: build orchestration for the VovkPLC WebAssembly targets
//!
//! This crate provides the pieces driven by the `vplc` entry points:
//! - `PlatformKind`: coarse host classification used to pick a script
//! - `dispatch`: resolve, run and report a native build or test script
//! - `filter`: the source-file predicate registered with a native build system

pub mod consts;
pub mod dispatch;
pub mod filter;
pub mod platform;
