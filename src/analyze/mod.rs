pub(crate) mod logger;

use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use log::{error, warn, LevelFilter};

use systemd_unit_paths::lookup::{Environment, LookupPaths, Scope, SearchPathSet};

#[derive(Debug, thiserror::Error)]
pub(crate) enum RuntimeError {
    #[error("unknown argument {0:?}")]
    CliUnknownArgument(String),
    #[error("option {0} requires a value")]
    CliMissingValue(String),
    #[error("--{0} and --{1} can't be used together")]
    CliConflictingScope(Scope, Scope),
    #[error("Failed to initialize lookup paths: {0}")]
    Init(#[source] io::Error),
    #[error("{0}: {1}")]
    Io(String, #[source] io::Error),
}

impl RuntimeError {
    /// Whether printing the usage would help
    pub(crate) fn is_usage_error(&self) -> bool {
        matches!(
            self,
            RuntimeError::CliUnknownArgument(_)
                | RuntimeError::CliMissingValue(_)
                | RuntimeError::CliConflictingScope(_, _)
        )
    }
}

#[derive(Debug, Default, PartialEq)]
pub(crate) struct CliOptions {
    pub(crate) scope: Scope,
    pub(crate) root_dir: Option<PathBuf>,
    pub(crate) exclude_generated: bool,
    pub(crate) show_tiers: bool,
    pub(crate) verbose: bool,
    pub(crate) version: bool,
    pub(crate) help: bool,
}

pub(crate) fn help() -> &'static str {
    "Usage:
unit-paths --version
unit-paths [--system|--user|--global] [--root=PATH] [--exclude-generated] [--tiers] [-v|--debug]

Prints the directories Systemd loads units from, highest priority first."
}

fn version() -> String {
    format!("unit-paths {}", env!("CARGO_PKG_VERSION"))
}

/// Arguments don't have to be valid UTF-8, only the option names do.
pub(crate) fn parse_args(args: Vec<OsString>) -> Result<CliOptions, RuntimeError> {
    let mut cfg = CliOptions::default();
    let mut scope: Option<Scope> = None;

    let mut set_scope = |new_scope: Scope| match scope {
        Some(old_scope) if old_scope != new_scope => {
            Err(RuntimeError::CliConflictingScope(old_scope, new_scope))
        }
        _ => {
            scope = Some(new_scope);
            Ok(())
        }
    };

    // skip program name
    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.to_str() {
            Some("--system") => set_scope(Scope::System)?,
            Some("--user") => set_scope(Scope::User)?,
            Some("--global") => set_scope(Scope::Global)?,
            Some("--root") => match args.next() {
                Some(root) if !root.is_empty() => cfg.root_dir = Some(root.into()),
                _ => return Err(RuntimeError::CliMissingValue("--root".into())),
            },
            Some("--exclude-generated") => cfg.exclude_generated = true,
            Some("--tiers") => cfg.show_tiers = true,
            Some("-v" | "--verbose" | "--debug") => cfg.verbose = true,
            Some("--version") => cfg.version = true,
            Some("-h" | "--help") => cfg.help = true,
            _ => {
                if let Some(root) = arg.as_bytes().strip_prefix(b"--root=") {
                    if root.is_empty() {
                        return Err(RuntimeError::CliMissingValue("--root".into()));
                    }
                    cfg.root_dir = Some(PathBuf::from(OsStr::from_bytes(root)));
                } else {
                    return Err(RuntimeError::CliUnknownArgument(
                        arg.to_string_lossy().into_owned(),
                    ));
                }
            }
        }
    }

    cfg.scope = scope.unwrap_or_default();

    Ok(cfg)
}

/// Relative root directories are resolved against the current directory.
pub(crate) fn absolute_root_dir(
    root_dir: Option<&Path>,
    current_dir: impl FnOnce() -> io::Result<PathBuf>,
) -> Result<PathBuf, RuntimeError> {
    match root_dir {
        None => Ok(PathBuf::from("/")),
        Some(root_dir) if root_dir.is_absolute() => Ok(root_dir.to_path_buf()),
        Some(root_dir) => Ok(current_dir().map_err(RuntimeError::Init)?.join(root_dir)),
    }
}

pub(crate) fn write_search_paths<W: Write>(
    search_paths: &SearchPathSet,
    show_tiers: bool,
    writer: &mut W,
) -> io::Result<()> {
    for entry in search_paths.entries() {
        if show_tiers {
            write!(writer, "{}\t", entry.tier)?;
        }
        writer.write_all(entry.path.as_os_str().as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()
}

/// The `unit-paths` verb
pub(crate) fn unit_paths<W: Write>(
    cfg: &CliOptions,
    env: &dyn Environment,
    writer: &mut W,
) -> Result<(), RuntimeError> {
    let root_dir = absolute_root_dir(cfg.root_dir.as_deref(), std::env::current_dir)?;

    let search_paths = LookupPaths::new(cfg.scope)
        .root_dir(root_dir)
        .exclude_generated(cfg.exclude_generated)
        .build(env);

    write_search_paths(&search_paths, cfg.show_tiers, writer)
        .map_err(|e| RuntimeError::Io("Failed to write search paths".into(), e))
}

fn print_text<W: Write>(text: &str, writer: &mut W) -> Result<(), RuntimeError> {
    writeln!(writer, "{text}")
        .and_then(|()| writer.flush())
        .map_err(|e| RuntimeError::Io("Failed to write to stdout".into(), e))
}

/// Runs `unit-paths` for `args` and returns the exit status.
///
/// Usage errors go to `err`, everything else is reported through the logger.
pub(crate) fn run<W: Write, E: Write>(
    args: Vec<OsString>,
    env: &dyn Environment,
    out: &mut W,
    err: &mut E,
) -> i32 {
    let cfg = match parse_args(args) {
        Ok(cfg) => cfg,
        Err(e) => {
            let _ = writeln!(err, "Error: {e}");
            if e.is_usage_error() {
                let _ = writeln!(err, "{}", help());
            }
            return 1;
        }
    };

    let env_log_level = env.var_os(logger::LOG_LEVEL_ENV);
    let (log_level, invalid_log_level) =
        match logger::log_level(cfg.verbose, env_log_level.as_deref()) {
            Ok(level) => (level, None),
            Err(value) => (LevelFilter::Info, Some(value)),
        };
    log::set_max_level(log_level);
    if let Some(value) = invalid_log_level {
        warn!("Ignoring invalid ${}={value:?}", logger::LOG_LEVEL_ENV);
    }

    let result = if cfg.help {
        print_text(help(), out)
    } else if cfg.version {
        print_text(&version(), out)
    } else {
        unit_paths(&cfg, env, out)
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("{e}");
            1
        }
    }
}
