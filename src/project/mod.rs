//! Project module for nxplorer.
//!
//! Finds `project.json` manifests, parses them, detects the framework each
//! project uses and expands everything into runnable command entries.

mod commands;
mod discovery;
mod framework;
mod manifest;
mod scanner;
mod types;

pub use commands::{synthesize, without_matching};
pub use discovery::{discover, Discovery, DiscoveryResult};
pub use framework::{
    Classifier, DeepMatcher, DetectionRule, Framework, FrameworkRegistry, Strategy,
};
pub use manifest::{parse_manifest, parse_manifest_str};
pub use scanner::Scanner;
pub use types::{CommandEntry, Project, ProjectType, Task};
