use std::path::{Component, Path, PathBuf};

pub trait PathExt {
    fn absolute_from(&self, base: &Path) -> PathBuf;
    fn cleaned(&self) -> PathBuf;
    fn rooted_at(&self, root: &Path) -> PathBuf;
}

impl PathExt for Path {
    /// Relative paths are resolved against `base`, all paths get cleaned.
    fn absolute_from(&self, base: &Path) -> PathBuf {
        if !self.is_absolute() {
            return base.join(self).cleaned();
        }

        self.cleaned()
    }

    /// This function normalizes paths by dropping multiple slashes and trailing
    /// slashes, removing "." elements and making ".." drop the parent element
    /// as long as there is one. A ".." directly below the root is dropped, at
    /// the start of a relative path it is kept. All without accessing the filesystem.
    /// NOTE: this is not the same as `std::path::absolute()` or `std::fs::canonicalize()`.
    /// Symlinks are not resolved, so nonexistent paths can be cleaned just as well.
    fn cleaned(&self) -> PathBuf {
        // normalized path could be shorter, but never longer
        let mut normalized = PathBuf::with_capacity(self.as_os_str().len());

        for element in self.components() {
            match element {
                Component::CurDir => continue,
                Component::ParentDir => match normalized.components().next_back() {
                    Some(Component::Normal(_)) => {
                        normalized.pop();
                    }
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => continue,
                    _ => normalized.push(element),
                },
                _ => normalized.push(element),
            }
        }

        normalized
    }

    /// Treats `self` as a path inside of `root`, e.g. `/etc/foo` becomes `/sysroot/etc/foo`.
    /// Paths can't escape `root` with "..".
    fn rooted_at(&self, root: &Path) -> PathBuf {
        let inside = Path::new("/").join(self).cleaned();
        let relative = inside.strip_prefix("/").unwrap_or(&inside);

        root.join(relative).cleaned()
    }
}

impl PathExt for PathBuf {
    fn absolute_from(&self, base: &Path) -> PathBuf {
        self.as_path().absolute_from(base)
    }

    fn cleaned(&self) -> PathBuf {
        self.as_path().cleaned()
    }

    fn rooted_at(&self, root: &Path) -> PathBuf {
        self.as_path().rooted_at(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod absolute_from {
        use super::*;

        #[test]
        fn with_absolute_base_path() {
            let base_path = PathBuf::from("/x/y/z");
            let inputs = vec![
                ("", "/x/y/z"),
                ("/", "/"),
                (".", "/x/y/z"),
                ("..", "/x/y"),
                ("/foo/bar/baz.js", "/foo/bar/baz.js"),
                ("/foo/bar/baz/", "/foo/bar/baz"),
                ("/dirty//path///", "/dirty/path"),
                ("dev.txt", "/x/y/z/dev.txt"),
                ("../todo.txt", "/x/y/todo.txt"),
                ("./b/c", "/x/y/z/b/c"),
                ("../../../../b/c", "/b/c"),
            ];

            for input in inputs {
                let path = PathBuf::from(input.0);
                let expected = PathBuf::from(input.1);
                assert_eq!(path.absolute_from(base_path.as_path()), expected, "{input:?}");
            }
        }

        #[test]
        fn with_root_base_path() {
            let base_path = PathBuf::from("/");
            let inputs = vec![
                ("", "/"),
                ("..", "/"),
                ("foo/bar", "/foo/bar"),
                ("../foo/./bar", "/foo/bar"),
            ];

            for input in inputs {
                let path = PathBuf::from(input.0);
                let expected = PathBuf::from(input.1);
                assert_eq!(path.absolute_from(base_path.as_path()), expected, "{input:?}");
            }
        }
    }

    mod cleaned {
        use super::*;

        #[test]
        fn test_cases() {
            let inputs = vec![
                ("", ""),
                ("/", "/"),
                (".", ""),
                ("..", ".."),
                ("/..", "/"),
                ("/../etc", "/etc"),
                ("/foo/bar/baz.js", "/foo/bar/baz.js"),
                ("/foo/bar/baz/", "/foo/bar/baz"),
                ("/dirty//path///", "/dirty/path"),
                ("dev.txt", "dev.txt"),
                ("../todo.txt", "../todo.txt"),
                ("../../todo.txt", "../../todo.txt"),
                ("a/b/../../../xyz", "../xyz"),
                ("/a/b/../../../xyz", "/xyz"),
                ("a/./b/.././../../xyz", "../xyz"),
                ("/etc/systemd/./system/../user/", "/etc/systemd/user"),
            ];

            for input in inputs {
                let path = PathBuf::from(input.0);
                let expected = PathBuf::from(input.1);
                assert_eq!(path.cleaned(), expected, "{path:?}");
                // compare the strings, `PathBuf`'s `Eq` ignores trailing slashes
                assert_eq!(
                    path.cleaned().as_os_str(),
                    expected.as_os_str(),
                    "{path:?}"
                );
            }
        }

        #[test]
        fn is_idempotent() {
            let inputs = vec!["/", "/etc/systemd/system", "../xyz", "a/b"];

            for input in inputs {
                let path = PathBuf::from(input);
                assert_eq!(path.cleaned().as_os_str(), path.as_os_str(), "{path:?}");
            }
        }
    }

    mod rooted_at {
        use super::*;

        #[test]
        fn test_cases() {
            let root = PathBuf::from("/sysroot");
            let inputs = vec![
                ("", "/sysroot"),
                ("/", "/sysroot"),
                ("etc/systemd/system", "/sysroot/etc/systemd/system"),
                ("/etc/systemd/system", "/sysroot/etc/systemd/system"),
                ("/home/jane/.config/", "/sysroot/home/jane/.config"),
                ("../../etc", "/sysroot/etc"),
                ("/run/../../../etc", "/sysroot/etc"),
            ];

            for input in inputs {
                let path = PathBuf::from(input.0);
                let expected = PathBuf::from(input.1);
                assert_eq!(path.rooted_at(root.as_path()), expected, "{input:?}");
            }
        }

        #[test]
        fn with_real_root_is_the_cleaned_absolute_path() {
            let root = PathBuf::from("/");

            assert_eq!(
                PathBuf::from("usr/lib/systemd/system").rooted_at(&root),
                PathBuf::from("/usr/lib/systemd/system")
            );
            assert_eq!(
                PathBuf::from("/usr//lib/").rooted_at(&root).as_os_str(),
                "/usr/lib"
            );
        }
    }
}
