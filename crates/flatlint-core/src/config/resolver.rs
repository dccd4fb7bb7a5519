//! Configuration resolution
//!
//! Compiles an ordered fragment sequence into a [`ConfigSet`] and resolves
//! the effective configuration for individual file paths. Resolution is a
//! single pure pass over the sequence: later fragments override earlier ones
//! key-by-key for every path matched by both, and a fragment's `ignores`
//! patterns always win over its `files` patterns.

use std::path::Path;

use glob::Pattern;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use super::fragment::{
    ConfigFragment, EcmaVersion, GlobalValue, LanguageOptions, RuleEntry, Severity, SourceType,
};
use crate::{FlatlintError, Result};

/// What to do when two matching fragments assign `ecmaVersion` values of
/// different source shapes (symbolic `"latest"` vs a numeric year)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// The later fragment wins; the override is logged
    #[default]
    LastWins,
    /// Resolution for the current path aborts with
    /// [`FlatlintError::ConflictingOptionType`]
    Fail,
}

/// Options controlling resolution behavior
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions {
    pub scalar_conflicts: ConflictPolicy,
}

/// A fragment with its glob patterns compiled up front
///
/// Pattern compilation happens once at load time so that resolution never
/// pays for it and malformed patterns are reported before any path is
/// resolved.
#[derive(Debug, Clone)]
struct CompiledFragment {
    files: Vec<Pattern>,
    ignores: Vec<Pattern>,
    language_options: Option<LanguageOptions>,
    rules: IndexMap<String, RuleEntry>,
}

impl CompiledFragment {
    fn compile(fragment: ConfigFragment) -> Result<Self> {
        Ok(Self {
            files: compile_patterns(&fragment.files)?,
            ignores: compile_patterns(&fragment.ignores)?,
            language_options: fragment.language_options,
            rules: fragment.rules,
        })
    }

    /// `ignores` takes precedence over `files`; an empty `files` list is a
    /// wildcard
    fn applies_to(&self, path: &Path) -> bool {
        if self.ignores.iter().any(|pattern| pattern.matches_path(path)) {
            return false;
        }
        self.files.is_empty() || self.files.iter().any(|pattern| pattern.matches_path(path))
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|e| FlatlintError::invalid_pattern(pattern, e))
        })
        .collect()
}

/// The effective configuration for one file path
///
/// Contains exactly one severity decision per rule name and one permission
/// marker per global identifier ever mentioned by a matching, non-ignored
/// fragment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecma_version: Option<EcmaVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub globals: IndexMap<String, GlobalValue>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub rules: IndexMap<String, RuleEntry>,
}

impl EffectiveConfig {
    /// The effective severity for a rule, if any fragment mentioned it
    pub fn rule_severity(&self, rule: &str) -> Option<Severity> {
        self.rules.get(rule).map(RuleEntry::severity)
    }

    /// Whether an identifier is declared as a global (and not retracted)
    pub fn is_global(&self, name: &str) -> bool {
        matches!(
            self.globals.get(name),
            Some(GlobalValue::Readonly) | Some(GlobalValue::Writable)
        )
    }
}

/// An immutable, compiled fragment sequence
///
/// Loaded once per lint run. `resolve` takes `&self` only, so a caller may
/// resolve many paths in parallel against the same set.
#[derive(Debug, Clone)]
pub struct ConfigSet {
    fragments: Vec<CompiledFragment>,
    options: ResolveOptions,
}

impl ConfigSet {
    /// Compile an ordered fragment sequence
    ///
    /// Fails with [`FlatlintError::InvalidPattern`] if any glob pattern does
    /// not compile, and with a configuration error if the sequence is empty.
    pub fn compile(fragments: Vec<ConfigFragment>) -> Result<Self> {
        if fragments.is_empty() {
            return Err(FlatlintError::config_error(
                "configuration must contain at least one fragment",
            ));
        }

        let fragments = fragments
            .into_iter()
            .map(CompiledFragment::compile)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            fragments,
            options: ResolveOptions::default(),
        })
    }

    /// Replace the resolution options
    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    /// Number of fragments in the sequence
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Resolve the effective configuration for one file path
    ///
    /// Pure function of the compiled sequence and the path: no filesystem
    /// access, no side effects, deterministic. The path is matched as given
    /// and should be normalized by the caller.
    pub fn resolve(&self, path: impl AsRef<Path>) -> Result<EffectiveConfig> {
        let path = path.as_ref();
        let mut effective = EffectiveConfig::default();

        for fragment in &self.fragments {
            if !fragment.applies_to(path) {
                continue;
            }

            if let Some(options) = &fragment.language_options {
                self.merge_language_options(&mut effective, options)?;
            }

            for (rule, entry) in &fragment.rules {
                effective.rules.insert(rule.clone(), entry.clone());
            }
        }

        Ok(effective)
    }

    fn merge_language_options(
        &self,
        effective: &mut EffectiveConfig,
        options: &LanguageOptions,
    ) -> Result<()> {
        if let Some(incoming) = options.ecma_version {
            if let Some(current) = effective.ecma_version
                && current.shape() != incoming.shape()
            {
                match self.options.scalar_conflicts {
                    ConflictPolicy::Fail => {
                        return Err(FlatlintError::conflicting_option_type(
                            "ecmaVersion",
                            current,
                            incoming,
                        ));
                    }
                    ConflictPolicy::LastWins => {
                        debug!("ecmaVersion {current} overridden by {incoming}");
                    }
                }
            }
            effective.ecma_version = Some(incoming);
        }

        if let Some(source_type) = options.source_type {
            effective.source_type = Some(source_type);
        }

        for (name, value) in &options.globals {
            effective.globals.insert(name.clone(), *value);
        }

        Ok(())
    }
}
