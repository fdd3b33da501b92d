//! # registry-export - protocol id exporter for generated registry reports
//!
//! The game's data generator writes a `registries.json` report listing every
//! registry entry with its numeric protocol id. This crate turns one registry
//! from that report into two artifacts used by the client code base:
//!
//! - a C# fragment with one `ResourceLocation` constant per entry
//! - a JSON object mapping protocol id to bare entry name
//!
//! ## Architecture
//!
//! - `registry`: document loading and entry extraction (document order)
//! - `index`: protocol id to name index, with duplicate handling
//! - `render`: constant fragment and index JSON text
//! - `output`: staged file writes
//! - `config`: defaults, YAML config files and CLI overrides
//! - `export`: runs the stages for one conversion
//! - `error`: the `ExportError` type shared by all stages
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use registry_export::{config::ExportConfig, export};
//!
//! let config = ExportConfig {
//!     version: "16".to_string(),
//!     ..ExportConfig::default()
//! };
//! let summary = export::run(&config)?;
//! println!("exported {} entries", summary.entries);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Output Format
//!
//! For entries `minecraft:cow` (id 5) and `minecraft:pig` (id 7):
//!
//! ```text
//! public static readonly ResourceLocation COW_ID = new("cow");
//! public static readonly ResourceLocation PIG_ID = new("pig");
//! ```
//!
//! ```json
//! {
//!     "5": "cow",
//!     "7": "pig"
//! }
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`error::Result`] with a typed [`error::ExportError`].
//! The binary wraps these with `color_eyre` context.

pub mod config;
pub mod error;
pub mod export;
pub mod index;
pub mod output;
pub mod registry;
pub mod render;
