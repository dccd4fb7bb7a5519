//! Flat configuration system
//!
//! This module provides the configuration data model and resolution engine:
//! - JSON/JSONC/YAML configuration file support
//! - Auto-discovery by traversing up directories
//! - Per-path resolution of an ordered fragment sequence
//! - Strong typing with serde and JSON Schema generation via schemars
//!
//! ## Configuration Files
//!
//! A configuration file is an ordered sequence of fragments. Each fragment
//! scopes its settings with `files`/`ignores` glob patterns; later fragments
//! override earlier ones key-by-key for every path matched by both.
//!
//! ```jsonc
//! [
//!   {
//!     "files": ["**/*.js"],
//!     "ignores": ["node_modules/**", "dist/**", "build/**"],
//!     "languageOptions": {
//!       "ecmaVersion": "latest",
//!       "sourceType": "module",
//!       "globals": { "window": true, "process": "readonly" }
//!     },
//!     "rules": {
//!       "no-unused-vars": ["warn", { "argsIgnorePattern": "^_" }],
//!       "no-undef": "error",
//!       "no-console": "off"
//!     }
//!   }
//! ]
//! ```
//!
//! ## Resolution
//!
//! The consuming lint engine calls [`ConfigSet::resolve`] once per source
//! file it discovers. Resolution is a pure pass over the immutable compiled
//! sequence, so the caller is free to resolve many paths in parallel.

mod fragment;
pub mod globals;
mod loader;
mod resolver;

// Re-export main types
pub use fragment::{
    ConfigFragment, EcmaVersion, GlobalValue, LanguageOptions, RuleEntry, Severity, SourceType,
};
pub use loader::ConfigLoader;
pub use resolver::{ConfigSet, ConflictPolicy, EffectiveConfig, ResolveOptions};
