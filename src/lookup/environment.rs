use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Read-only view of the process state the lookup depends on.
///
/// The lookup never reads the process environment directly, so it can be
/// exercised without touching global state.
pub trait Environment {
    fn var_os(&self, name: &str) -> Option<OsString>;
    /// The invoking user's home directory, if it can be determined.
    fn home_dir(&self) -> Option<PathBuf>;
    fn current_uid(&self) -> u32;
    fn current_dir(&self) -> Option<PathBuf>;
}

/// The environment of the running process.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var_os(&self, name: &str) -> Option<OsString> {
        env::var_os(name)
    }

    // $HOME first, then the password database
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn current_uid(&self) -> u32 {
        users::get_current_uid()
    }

    fn current_dir(&self) -> Option<PathBuf> {
        env::current_dir().ok()
    }
}

#[cfg(test)]
pub(crate) use self::test_utils::MapEnvironment;


#[cfg(test)]
mod tests {
    use super::*;

    mod process_environment {
        use super::*;

        static TEST_VAR: &str = "SYSTEMD_UNIT_PATHS_TEST_VAR";

        #[test]
        #[serial_test::serial]
        fn reads_process_variables() {
            // remember global state
            let _test_var = env::var_os(TEST_VAR);

            env::set_var(TEST_VAR, "/some/dir");

            assert_eq!(
                ProcessEnvironment.var_os(TEST_VAR),
                Some(OsString::from("/some/dir"))
            );

            env::remove_var(TEST_VAR);

            assert_eq!(ProcessEnvironment.var_os(TEST_VAR), None);

            // restore global state
            if let Some(val) = _test_var {
                env::set_var(TEST_VAR, val);
            }
        }

        #[test]
        #[serial_test::parallel]
        fn current_uid_matches_users_crate() {
            assert_eq!(ProcessEnvironment.current_uid(), users::get_current_uid());
        }

        #[test]
        #[serial_test::parallel]
        fn current_dir_matches_process() {
            assert_eq!(ProcessEnvironment.current_dir(), env::current_dir().ok());
        }
    }

    mod map_environment {
        use super::*;

        #[test]
        fn home_dir_comes_from_home_var() {
            let env = MapEnvironment::new().with_var("HOME", "/home/jane");

            assert_eq!(env.home_dir(), Some(PathBuf::from("/home/jane")));
            assert_eq!(MapEnvironment::new().home_dir(), None);
        }
    }
}
