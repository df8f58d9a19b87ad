use std::env;
use std::path::PathBuf;

use log::debug;

use super::constants::*;
use super::environment::Environment;
use super::Scope;

/// Directories requested through the environment
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Overrides {
    /// Takes the place of the whole computed search path
    pub replace: Option<Vec<PathBuf>>,
    /// Goes in front of the computed search path
    pub extra: Vec<PathBuf>,
}

impl Overrides {
    pub fn is_empty(&self) -> bool {
        self.replace.is_none() && self.extra.is_empty()
    }
}

/// Reads the override variables for `scope`. The scope specific variable is
/// looked at before the scope independent one.
///
/// Unset, empty or otherwise useless values just don't contribute any
/// directories, this never fails.
pub fn parse_overrides(scope: Scope, env: &dyn Environment) -> Overrides {
    let replace = [scope.unit_path_env(), UNIT_PATH_ENV]
        .into_iter()
        .find_map(|name| {
            let dirs = split_paths_var(env, name);
            if dirs.is_empty() {
                return None;
            }

            debug!("${name} replaces the unit search path with {dirs:?}");
            Some(dirs)
        });

    let extra = [scope.unit_path_extra_env(), UNIT_PATH_EXTRA_ENV]
        .into_iter()
        .flat_map(|name| {
            let dirs = split_paths_var(env, name);
            if !dirs.is_empty() {
                debug!("${name} adds {dirs:?} in front of the unit search path");
            }
            dirs
        })
        .collect();

    Overrides { replace, extra }
}

// splits on the platform's path list separator and drops empty elements
fn split_paths_var(env: &dyn Environment, name: &str) -> Vec<PathBuf> {
    env.var_os(name)
        .map(|value| {
            env::split_paths(&value)
                .filter(|p| !p.as_os_str().is_empty())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::environment::MapEnvironment;

    mod parse_overrides {
        use super::*;

        #[test]
        fn without_variables() {
            let env = MapEnvironment::new();

            for scope in [Scope::System, Scope::User, Scope::Global] {
                let overrides = parse_overrides(scope, &env);

                assert!(overrides.is_empty(), "{scope:?}");
                assert_eq!(overrides, Overrides::default());
            }
        }

        #[test]
        fn replace_splits_on_separator() {
            let env = MapEnvironment::new().with_var(UNIT_PATH_ENV, "/a:/b");

            for scope in [Scope::System, Scope::User, Scope::Global] {
                assert_eq!(
                    parse_overrides(scope, &env).replace,
                    Some(vec![PathBuf::from("/a"), PathBuf::from("/b")]),
                    "{scope:?}"
                );
            }
        }

        #[test]
        fn replace_drops_empty_elements() {
            let env = MapEnvironment::new().with_var(UNIT_PATH_ENV, "::/a:::/b:");

            assert_eq!(
                parse_overrides(Scope::System, &env).replace,
                Some(vec![PathBuf::from("/a"), PathBuf::from("/b")])
            );
        }

        #[test]
        fn replace_with_only_separators_is_no_override() {
            let inputs = vec!["", ":", ":::"];

            for input in inputs {
                let env = MapEnvironment::new().with_var(UNIT_PATH_ENV, input);

                assert_eq!(parse_overrides(Scope::System, &env).replace, None, "{input:?}");
            }
        }

        #[test]
        fn replace_prefers_scope_specific_variable() {
            let env = MapEnvironment::new()
                .with_var(UNIT_PATH_ENV, "/generic")
                .with_var("SYSTEMD_USER_UNIT_PATH", "/user");

            assert_eq!(
                parse_overrides(Scope::User, &env).replace,
                Some(vec![PathBuf::from("/user")])
            );
            assert_eq!(
                parse_overrides(Scope::System, &env).replace,
                Some(vec![PathBuf::from("/generic")])
            );
        }

        #[test]
        fn replace_falls_back_when_scope_specific_variable_is_empty() {
            let env = MapEnvironment::new()
                .with_var(UNIT_PATH_ENV, "/generic")
                .with_var("SYSTEMD_SYSTEM_UNIT_PATH", ":");

            assert_eq!(
                parse_overrides(Scope::System, &env).replace,
                Some(vec![PathBuf::from("/generic")])
            );
        }

        #[test]
        fn extra_does_not_replace() {
            let env = MapEnvironment::new().with_var(UNIT_PATH_EXTRA_ENV, "/x");

            let overrides = parse_overrides(Scope::System, &env);

            assert_eq!(overrides.replace, None);
            assert_eq!(overrides.extra, vec![PathBuf::from("/x")]);
            assert!(!overrides.is_empty());
        }

        #[test]
        fn extra_combines_scope_specific_and_independent_variables() {
            let env = MapEnvironment::new()
                .with_var(UNIT_PATH_EXTRA_ENV, "/generic1::/generic2")
                .with_var("SYSTEMD_GLOBAL_UNIT_PATH_EXTRA", "/global");

            assert_eq!(
                parse_overrides(Scope::Global, &env).extra,
                vec![
                    PathBuf::from("/global"),
                    PathBuf::from("/generic1"),
                    PathBuf::from("/generic2"),
                ]
            );
            assert_eq!(
                parse_overrides(Scope::User, &env).extra,
                vec![PathBuf::from("/generic1"), PathBuf::from("/generic2")]
            );
        }

        #[test]
        fn values_are_taken_verbatim() {
            let env = MapEnvironment::new().with_var(UNIT_PATH_EXTRA_ENV, "relative/./dir:/a//b/");

            assert_eq!(
                parse_overrides(Scope::System, &env)
                    .extra
                    .iter()
                    .map(|p| p.as_os_str())
                    .collect::<Vec<_>>(),
                vec!["relative/./dir", "/a//b/"]
            );
        }
    }
}
