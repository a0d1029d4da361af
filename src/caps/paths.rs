//! Filesystem checks for path-like values.
//!
//! These probe the filesystem at assertion time; a path that cannot be
//! read simply fails the check.

use std::fmt;
use std::path::Path;

use crate::descriptor::var;
use crate::expect::{Expectation, Subject};

/// Metadata predicates for any node wrapping something path-like.
pub trait PathAssert: Subject {
    fn exists(self) -> Self;
    fn does_not_exist(self) -> Self;
    fn is_file(self) -> Self;
    fn is_directory(self) -> Self;
    fn has_extension(self, expected: &str) -> Self;
    fn has_file_name(self, expected: &str) -> Self;

    /// Pivot onto the final path component. A path without one (for
    /// example `/`) is an ordinary assertion failure.
    fn as_file_name(&self) -> Expectation<String>;
}

impl<S> PathAssert for S
where
    S: Subject,
    S::Actual: AsRef<Path> + fmt::Debug,
{
    fn exists(self) -> Self {
        if self.actual().as_ref().exists() {
            self
        } else {
            let vars = [var("actual", self.actual())];
            self.fail_with("must exist on the filesystem", vars)
        }
    }

    fn does_not_exist(self) -> Self {
        if self.actual().as_ref().exists() {
            let vars = [var("actual", self.actual())];
            self.fail_with("must not exist on the filesystem", vars)
        } else {
            self
        }
    }

    fn is_file(self) -> Self {
        if self.actual().as_ref().is_file() {
            self
        } else {
            let vars = [var("actual", self.actual())];
            self.fail_with("must be a file", vars)
        }
    }

    fn is_directory(self) -> Self {
        if self.actual().as_ref().is_dir() {
            self
        } else {
            let vars = [var("actual", self.actual())];
            self.fail_with("must be a directory", vars)
        }
    }

    fn has_extension(self, expected: &str) -> Self {
        let matched = self
            .actual()
            .as_ref()
            .extension()
            .is_some_and(|ext| ext.to_string_lossy() == expected);
        if matched {
            self
        } else {
            let vars = [var("actual", self.actual()), var("expected extension", expected)];
            self.fail_with("must have the expected extension", vars)
        }
    }

    fn has_file_name(self, expected: &str) -> Self {
        let matched = self
            .actual()
            .as_ref()
            .file_name()
            .is_some_and(|name| name.to_string_lossy() == expected);
        if matched {
            self
        } else {
            let vars = [var("actual", self.actual()), var("expected name", expected)];
            self.fail_with("must have the expected file name", vars)
        }
    }

    fn as_file_name(&self) -> Expectation<String> {
        match self.actual().as_ref().file_name() {
            Some(name) => Expectation::derived_from(
                self,
                name.to_string_lossy().into_owned(),
                "file name",
            ),
            None => self
                .descriptor()
                .fail_with_default("must have a file name", [var("actual", self.actual())]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caps::strings::StringAssert;
    use crate::error::capture;
    use crate::expect::expect;

    #[test]
    fn test_existing_file_checks() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        expect(file.path()).exists().is_file();
    }

    #[test]
    fn test_directory_checks() {
        let dir = tempfile::tempdir().expect("temp dir");
        expect(dir.path()).exists().is_directory();
    }

    #[test]
    fn test_missing_path() {
        expect("/definitely/not/here.txt").does_not_exist();

        assert!(capture(|| {
            expect("/definitely/not/here.txt").exists();
        })
        .is_err());
    }

    #[test]
    fn test_name_and_extension() {
        expect(Path::new("/tmp/notes.txt"))
            .has_extension("txt")
            .has_file_name("notes.txt");
    }

    #[test]
    fn test_as_file_name_pivots_onto_the_component() {
        expect(Path::new("/tmp/notes.txt"))
            .as_file_name()
            .ends_with(".txt");
    }

    #[test]
    fn test_root_has_no_file_name() {
        let error = capture(|| {
            expect(Path::new("/")).as_file_name();
        })
        .unwrap_err();
        assert!(error.message().contains("must have a file name"));
    }
}
