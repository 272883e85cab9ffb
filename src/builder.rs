use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, trace, warn};

use crate::error::{ScaffoldError, ScaffoldResult};

/// Creates directories and files under one root, stopping at the first failure.
///
/// Once an operation fails every later call is a no-op and the original error is
/// kept, so a whole layout can be issued unconditionally and checked once with
/// [`ScaffoldBuilder::finish`] or [`ScaffoldBuilder::last_error`].
#[derive(Debug)]
pub struct ScaffoldBuilder {
    base: Utf8PathBuf,
    error: Option<ScaffoldError>,
}

impl ScaffoldBuilder {
    /// Create the root directory (and missing parents) and bind a builder to it.
    pub fn new(base: impl Into<Utf8PathBuf>) -> Self {
        let base = base.into();
        let error = match fs::create_dir_all(&base) {
            Ok(()) => {
                debug!("created project root {}", base);
                None
            }
            Err(source) => {
                warn!("could not create project root {}: {}", base, source);
                Some(ScaffoldError::DirectoryCreationFailed {
                    path: base.clone(),
                    source,
                })
            }
        };
        Self { base, error }
    }

    pub fn is_failed(&self) -> bool {
        self.last_error().is_some()
    }

    pub fn create_dir(&mut self, relative: impl AsRef<Utf8Path>) -> &mut Self {
        let relative = relative.as_ref();
        if self.is_failed() {
            trace!("skipping directory {} after earlier failure", relative);
            return self;
        }

        let target = self.base.join(relative);
        match fs::create_dir_all(&target) {
            Ok(()) => debug!("created directory {}", relative),
            Err(source) => self.fail(ScaffoldError::DirectoryCreationFailed {
                path: relative.to_owned(),
                source,
            }),
        }
        self
    }

    /// Write `contents` (surrounding whitespace trimmed) to `relative`, creating
    /// its parent directory first.
    pub fn write_file(&mut self, relative: impl AsRef<Utf8Path>, contents: &str) -> &mut Self {
        let relative = relative.as_ref();
        if self.is_failed() {
            trace!("skipping file {} after earlier failure", relative);
            return self;
        }

        if let Some(parent) = relative.parent().filter(|parent| !parent.as_str().is_empty()) {
            self.create_dir(parent);
            if self.is_failed() {
                return self;
            }
        }

        let target = self.base.join(relative);
        match fs::write(&target, contents.trim()) {
            Ok(()) => debug!("wrote file {}", relative),
            Err(source) => self.fail(ScaffoldError::FileWriteFailed {
                path: relative.to_owned(),
                source,
            }),
        }
        self
    }

    /// The first error recorded by this builder, if any.
    pub fn last_error(&self) -> Option<&ScaffoldError> {
        self.error.as_ref()
    }

    pub fn finish(self) -> ScaffoldResult<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fail(&mut self, err: ScaffoldError) {
        warn!("scaffold step failed under {}: {}", self.base, err);
        self.error.get_or_insert(err);
    }
}
