/// Helpers for turning a destination path into the names templates interpolate.
pub mod naming {
    use std::sync::OnceLock;

    use camino::{Utf8Component, Utf8Path};
    use regex::Regex;

    use crate::error::{ScaffoldError, ScaffoldResult};

    /// Used when stripping a project name leaves nothing behind.
    pub const FALLBACK_IDENT: &str = "app";

    /// The project name is the last normal component of the destination path.
    pub fn project_name(destination: &Utf8Path) -> ScaffoldResult<String> {
        match destination.components().next_back() {
            Some(Utf8Component::Normal(name)) => Ok(name.to_owned()),
            _ => Err(ScaffoldError::InvalidProjectName(destination.to_owned())),
        }
    }

    /// Strip everything that is not an ASCII letter or digit, then any leading digits.
    pub fn identifier(name: &str) -> String {
        static NON_IDENT: OnceLock<Regex> = OnceLock::new();
        let pattern = NON_IDENT
            .get_or_init(|| Regex::new("[^A-Za-z0-9]+").expect("identifier pattern is valid"));
        let stripped = pattern.replace_all(name, "");
        let stripped = stripped.trim_start_matches(|c: char| c.is_ascii_digit());
        if stripped.is_empty() {
            FALLBACK_IDENT.to_owned()
        } else {
            stripped.to_owned()
        }
    }

    /// Upper-case the first character, leaving the rest as-is.
    pub fn capitalize(value: &str) -> String {
        let mut chars = value.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

}
