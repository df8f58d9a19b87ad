use std::env;
use std::path::{Path, PathBuf};

use log::debug;

use super::constants::*;
use super::environment::Environment;
use super::path_ext::PathExt;
use super::search_paths::CandidatePath;
use super::{LookupFlags, Scope};

use super::search_paths::DirectoryTier::*;

/// Lists the directories `scope` looks for units in, joined to `root`.
///
/// Directories come in the order Systemd documents them, ordering by tier is
/// left to the caller. Nothing is checked for existence.
pub fn enumerate(scope: Scope, root: &Path, flags: LookupFlags, env: &dyn Environment) -> Vec<CandidatePath> {
    let candidates = match scope {
        Scope::System => system_dirs(),
        Scope::User => user_dirs(env),
        Scope::Global => global_dirs(),
    };

    candidates
        .into_iter()
        .filter(|c| !(flags.exclude_generated && c.tier == GeneratorOutput))
        .map(|c| CandidatePath {
            path: c.path.rooted_at(root),
            tier: c.tier,
        })
        .collect()
}

fn system_dirs() -> Vec<CandidatePath> {
    let mut dirs = vec![
        CandidatePath::new(SYSTEM_CONTROL_UNIT_DIR, AdministratorOverride),
        CandidatePath::new(SYSTEM_RUNTIME_CONTROL_UNIT_DIR, RuntimeGenerated),
        CandidatePath::new(SYSTEM_TRANSIENT_UNIT_DIR, RuntimeGenerated),
        CandidatePath::new(SYSTEM_GENERATOR_EARLY_DIR, GeneratorOutput),
        CandidatePath::new(SYSTEM_CONFIG_UNIT_DIR, AdministratorOverride),
        CandidatePath::new(SYSTEM_ATTACHED_UNIT_DIR, PersistentConfig),
        CandidatePath::new(SYSTEM_RUNTIME_UNIT_DIR, RuntimeGenerated),
        CandidatePath::new(SYSTEM_RUNTIME_ATTACHED_UNIT_DIR, RuntimeGenerated),
        CandidatePath::new(SYSTEM_GENERATOR_DIR, GeneratorOutput),
    ];
    dirs.extend(
        SYSTEM_DATA_UNIT_DIRS
            .iter()
            .map(|dir| CandidatePath::new(*dir, VendorSupplied)),
    );
    dirs.push(CandidatePath::new(SYSTEM_GENERATOR_LATE_DIR, GeneratorOutput));

    dirs
}

// no runtime or generator directories, these only exist per user
fn global_dirs() -> Vec<CandidatePath> {
    let mut dirs = vec![CandidatePath::new(USER_CONFIG_UNIT_DIR, AdministratorOverride)];
    dirs.extend(
        GLOBAL_DATA_UNIT_DIRS
            .iter()
            .chain(USER_DATA_UNIT_DIRS)
            .map(|dir| CandidatePath::new(*dir, VendorSupplied)),
    );

    dirs
}

fn user_dirs(env: &dyn Environment) -> Vec<CandidatePath> {
    let xdg = XdgDirs::from_env(env);
    let runtime_dir = &xdg.runtime_dir;

    let mut dirs = Vec::new();

    if let Some(config_home) = &xdg.config_home {
        dirs.push(CandidatePath::new(
            config_home.join(USER_CONTROL_UNIT_SUFFIX),
            AdministratorOverride,
        ));
    }
    dirs.push(CandidatePath::new(
        runtime_dir.join(USER_CONTROL_UNIT_SUFFIX),
        RuntimeGenerated,
    ));
    dirs.push(CandidatePath::new(
        runtime_dir.join(USER_TRANSIENT_UNIT_SUFFIX),
        RuntimeGenerated,
    ));
    dirs.push(CandidatePath::new(
        runtime_dir.join(USER_GENERATOR_EARLY_SUFFIX),
        GeneratorOutput,
    ));
    if let Some(config_home) = &xdg.config_home {
        dirs.push(CandidatePath::new(
            config_home.join(USER_UNIT_SUFFIX),
            AdministratorOverride,
        ));
    }
    dirs.extend(
        xdg.config_dirs
            .iter()
            .map(|dir| CandidatePath::new(dir.join(USER_UNIT_SUFFIX), PersistentConfig)),
    );
    // global config has lower priority than the user config of the same type
    dirs.push(CandidatePath::new(USER_CONFIG_UNIT_DIR, PersistentConfig));
    dirs.push(CandidatePath::new(
        runtime_dir.join(USER_UNIT_SUFFIX),
        RuntimeGenerated,
    ));
    dirs.push(CandidatePath::new(USER_RUNTIME_UNIT_DIR, RuntimeGenerated));
    dirs.push(CandidatePath::new(
        runtime_dir.join(USER_GENERATOR_SUFFIX),
        GeneratorOutput,
    ));
    if let Some(data_home) = &xdg.data_home {
        dirs.push(CandidatePath::new(
            data_home.join(USER_UNIT_SUFFIX),
            VendorSupplied,
        ));
    }
    dirs.extend(
        xdg.data_dirs
            .iter()
            .map(|dir| CandidatePath::new(dir.join(USER_UNIT_SUFFIX), VendorSupplied)),
    );
    dirs.extend(
        USER_DATA_UNIT_DIRS
            .iter()
            .map(|dir| CandidatePath::new(*dir, VendorSupplied)),
    );
    dirs.push(CandidatePath::new(
        runtime_dir.join(USER_GENERATOR_LATE_SUFFIX),
        GeneratorOutput,
    ));

    dirs
}

/// see https://specifications.freedesktop.org/basedir-spec/latest/
#[derive(Clone, Debug, Eq, PartialEq)]
struct XdgDirs {
    // `None` when there's no home directory to fall back to
    config_home: Option<PathBuf>,
    data_home: Option<PathBuf>,
    runtime_dir: PathBuf,
    config_dirs: Vec<PathBuf>,
    data_dirs: Vec<PathBuf>,
}

impl XdgDirs {
    fn from_env(env: &dyn Environment) -> Self {
        let home_dir = env.home_dir().filter(|home| {
            if home.is_absolute() {
                return true;
            }

            debug!("Ignoring home directory {home:?}: not an absolute path");
            false
        });
        if home_dir.is_none() {
            debug!("No home directory found, skipping user config and data directories");
        }

        let config_home = absolute_path_var(env, XDG_CONFIG_HOME).or_else(|| {
            home_dir
                .as_ref()
                .map(|home| home.join(DEFAULT_XDG_CONFIG_HOME_SUFFIX))
        });
        let data_home = absolute_path_var(env, XDG_DATA_HOME).or_else(|| {
            home_dir
                .as_ref()
                .map(|home| home.join(DEFAULT_XDG_DATA_HOME_SUFFIX))
        });
        let runtime_dir = absolute_path_var(env, XDG_RUNTIME_DIR).unwrap_or_else(|| {
            Path::new(DEFAULT_XDG_RUNTIME_DIR_PARENT).join(env.current_uid().to_string())
        });

        XdgDirs {
            config_home,
            data_home,
            runtime_dir,
            config_dirs: absolute_path_list_var(env, XDG_CONFIG_DIRS, DEFAULT_XDG_CONFIG_DIRS),
            data_dirs: absolute_path_list_var(env, XDG_DATA_DIRS, DEFAULT_XDG_DATA_DIRS),
        }
    }
}

// relative paths are invalid and must be ignored
fn absolute_path_var(env: &dyn Environment, name: &str) -> Option<PathBuf> {
    let value = env.var_os(name)?;
    if value.is_empty() {
        return None;
    }

    let path = PathBuf::from(value);
    if !path.is_absolute() {
        debug!("Ignoring ${name}={path:?}: not an absolute path");
        return None;
    }

    Some(path)
}

fn absolute_path_list_var(env: &dyn Environment, name: &str, defaults: &[&str]) -> Vec<PathBuf> {
    let dirs: Vec<PathBuf> = env
        .var_os(name)
        .map(|value| {
            env::split_paths(&value)
                .filter(|p| {
                    if p.is_absolute() {
                        return true;
                    }

                    if !p.as_os_str().is_empty() {
                        debug!("Ignoring {p:?} in ${name}: not an absolute path");
                    }
                    false
                })
                .collect()
        })
        .unwrap_or_default();

    if dirs.is_empty() {
        return defaults.iter().map(PathBuf::from).collect();
    }

    dirs
}
