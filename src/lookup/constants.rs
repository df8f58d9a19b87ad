// Directories are written relative to the root directory, they get joined to it during enumeration.

/// see https://www.freedesktop.org/software/systemd/man/latest/systemd.unit.html#System%20Unit%20Search%20Path
pub const SYSTEM_CONFIG_UNIT_DIR: &str = "etc/systemd/system";
pub const SYSTEM_CONTROL_UNIT_DIR: &str = "etc/systemd/system.control";
pub const SYSTEM_ATTACHED_UNIT_DIR: &str = "etc/systemd/system.attached";
pub const SYSTEM_RUNTIME_UNIT_DIR: &str = "run/systemd/system";
pub const SYSTEM_RUNTIME_CONTROL_UNIT_DIR: &str = "run/systemd/system.control";
pub const SYSTEM_RUNTIME_ATTACHED_UNIT_DIR: &str = "run/systemd/system.attached";
pub const SYSTEM_TRANSIENT_UNIT_DIR: &str = "run/systemd/transient";
pub const SYSTEM_GENERATOR_DIR: &str = "run/systemd/generator";
pub const SYSTEM_GENERATOR_EARLY_DIR: &str = "run/systemd/generator.early";
pub const SYSTEM_GENERATOR_LATE_DIR: &str = "run/systemd/generator.late";
/// Directories for Systemd units shipped by packages, most specific first
pub const SYSTEM_DATA_UNIT_DIRS: &[&str] = &["usr/local/lib/systemd/system", "usr/lib/systemd/system"];

/// see https://www.freedesktop.org/software/systemd/man/latest/systemd.unit.html#User%20Unit%20Search%20Path
pub const USER_CONFIG_UNIT_DIR: &str = "etc/systemd/user";
pub const USER_RUNTIME_UNIT_DIR: &str = "run/systemd/user";
pub const USER_DATA_UNIT_DIRS: &[&str] = &["usr/local/lib/systemd/user", "usr/lib/systemd/user"];
/// Vendor directories only the global scope looks at (the user scope gets them from $XDG_DATA_DIRS)
pub const GLOBAL_DATA_UNIT_DIRS: &[&str] = &["usr/local/share/systemd/user", "usr/share/systemd/user"];

// Suffixes for directories below the user's XDG base directories
pub const USER_UNIT_SUFFIX: &str = "systemd/user";
pub const USER_CONTROL_UNIT_SUFFIX: &str = "systemd/user.control";
pub const USER_TRANSIENT_UNIT_SUFFIX: &str = "systemd/transient";
pub const USER_GENERATOR_SUFFIX: &str = "systemd/generator";
pub const USER_GENERATOR_EARLY_SUFFIX: &str = "systemd/generator.early";
pub const USER_GENERATOR_LATE_SUFFIX: &str = "systemd/generator.late";

/// see https://specifications.freedesktop.org/basedir-spec/latest/
/// $XDG_CONFIG_HOME defaults to "$HOME/.config"
/// $XDG_CONFIG_DIRS defaults to "/etc/xdg"
/// $XDG_DATA_DIRS defaults to "/usr/local/share" and "/usr/share"
/// $XDG_DATA_HOME defaults to "$HOME/.local/share"
/// $XDG_RUNTIME_DIR defaults to "/run/user/$UID"
pub const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
pub const XDG_CONFIG_DIRS: &str = "XDG_CONFIG_DIRS";
pub const XDG_DATA_HOME: &str = "XDG_DATA_HOME";
pub const XDG_DATA_DIRS: &str = "XDG_DATA_DIRS";
pub const XDG_RUNTIME_DIR: &str = "XDG_RUNTIME_DIR";
pub const HOME: &str = "HOME";

pub const DEFAULT_XDG_CONFIG_HOME_SUFFIX: &str = ".config";
pub const DEFAULT_XDG_DATA_HOME_SUFFIX: &str = ".local/share";
pub const DEFAULT_XDG_CONFIG_DIRS: &[&str] = &["/etc/xdg"];
pub const DEFAULT_XDG_DATA_DIRS: &[&str] = &["/usr/local/share", "/usr/share"];
pub const DEFAULT_XDG_RUNTIME_DIR_PARENT: &str = "/run/user";

/// Replaces the computed search path, regardless of scope
pub const UNIT_PATH_ENV: &str = "SYSTEMD_UNIT_PATH";
/// Is prepended to the computed search path, regardless of scope
pub const UNIT_PATH_EXTRA_ENV: &str = "SYSTEMD_UNIT_PATH_EXTRA";
