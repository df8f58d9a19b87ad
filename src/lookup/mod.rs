//! Where to look for Systemd unit files.
//!
//! The search path is computed from the scope, an optional root directory and
//! a handful of environment variables. It only names directories, none of them
//! have to exist.

pub mod constants;
mod enumerate;
mod environment;
mod overrides;
mod path_ext;
mod search_paths;

pub use self::enumerate::enumerate;
pub use self::environment::{Environment, ProcessEnvironment};
pub use self::overrides::{parse_overrides, Overrides};
pub use self::path_ext::PathExt;
pub use self::search_paths::*;

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Scope {
    #[default]
    System,
    User,
    Global,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::System => "system",
            Scope::User => "user",
            Scope::Global => "global",
        }
    }

    /// Variable replacing the search path for this scope only
    pub fn unit_path_env(&self) -> &'static str {
        match self {
            Scope::System => "SYSTEMD_SYSTEM_UNIT_PATH",
            Scope::User => "SYSTEMD_USER_UNIT_PATH",
            Scope::Global => "SYSTEMD_GLOBAL_UNIT_PATH",
        }
    }

    /// Variable adding to the search path for this scope only
    pub fn unit_path_extra_env(&self) -> &'static str {
        match self {
            Scope::System => "SYSTEMD_SYSTEM_UNIT_PATH_EXTRA",
            Scope::User => "SYSTEMD_USER_UNIT_PATH_EXTRA",
            Scope::Global => "SYSTEMD_GLOBAL_UNIT_PATH_EXTRA",
        }
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("unknown scope {0:?}, expected one of \"system\", \"user\" or \"global\"")]
pub struct ScopeParseError(pub String);

impl FromStr for Scope {
    type Err = ScopeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(Scope::System),
            "user" => Ok(Scope::User),
            "global" => Ok(Scope::Global),
            _ => Err(ScopeParseError(s.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LookupFlags {
    /// Leave out the directories generators write units to
    pub exclude_generated: bool,
}

pub struct LookupPaths;

impl LookupPaths {
    #[allow(clippy::new_ret_no_self)]
    pub fn new(scope: Scope) -> LookupPathsBuilder {
        LookupPathsBuilder {
            scope,
            root_dir: PathBuf::from("/"),
            flags: LookupFlags::default(),
        }
    }
}

pub struct LookupPathsBuilder {
    scope: Scope,
    root_dir: PathBuf,
    flags: LookupFlags,
}

impl LookupPathsBuilder {
    pub fn build(&self, env: &dyn Environment) -> SearchPathSet {
        let base_dir = env.current_dir().unwrap_or_else(|| PathBuf::from("/"));
        let overrides = parse_overrides(self.scope, env);
        if overrides.is_empty() {
            debug!("No unit path overrides for {}", self.scope);
        }

        let search_paths = if let Some(replace) = overrides.replace {
            normalize(
                replace
                    .into_iter()
                    .map(|dir| CandidatePath::new(dir, DirectoryTier::EnvironmentInjected)),
                &base_dir,
            )
        } else {
            let root_dir = self.root_dir.absolute_from(&base_dir);

            let mut candidates: Vec<CandidatePath> = overrides
                .extra
                .into_iter()
                .map(|dir| CandidatePath::new(dir, DirectoryTier::EnvironmentInjected))
                .collect();
            candidates.extend(enumerate(self.scope, &root_dir, self.flags, env));
            // stable, so the order within a tier is kept
            candidates.sort_by_key(|c| c.tier);

            normalize(candidates, &base_dir)
        };

        debug!("Looking for {} unit files in (higher priority first):", self.scope);
        for search_path in search_paths.entries() {
            debug!("\t{:?} ({})", search_path.path, search_path.tier);
        }

        search_paths
    }

    pub fn exclude_generated(mut self, exclude_generated: bool) -> Self {
        self.flags.exclude_generated = exclude_generated;
        self
    }

    pub fn root_dir<P: AsRef<Path>>(mut self, root_dir: P) -> Self {
        self.root_dir = root_dir.as_ref().to_path_buf();
        self
    }
}

/// Computes the unit search path for `scope` with all directories inside of `root_dir`.
pub fn resolve<P: AsRef<Path>>(scope: Scope, root_dir: P, env: &dyn Environment) -> SearchPathSet {
    LookupPaths::new(scope).root_dir(root_dir).build(env)
}
