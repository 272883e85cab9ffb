use std::sync::OnceLock;

use regex::{Captures, Regex};
use rust_embed::RustEmbed;

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::util::naming;

#[derive(RustEmbed)]
#[folder = "templates"]
struct Templates;

pub fn get_string(path: &str) -> ScaffoldResult<String> {
    let file = Templates::get(path).ok_or_else(|| ScaffoldError::MissingAsset(path.to_owned()))?;
    decode(path, file.data.as_ref())
}

fn decode(path: &str, bytes: &[u8]) -> ScaffoldResult<String> {
    std::str::from_utf8(bytes)
        .map(|value| value.to_owned())
        .map_err(|source| ScaffoldError::InvalidAsset {
            name: path.to_owned(),
            source,
        })
}

/// Values substituted into template paths and file bodies.
///
/// - `{{name}}`: the project name verbatim
/// - `{{ident}}`: the name with non-alphanumerics stripped
/// - `{{Ident}}`: `{{ident}}` with a leading capital
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    name: String,
    ident: String,
    class: String,
}

impl Placeholders {
    pub fn for_project(name: &str) -> Self {
        let ident = naming::identifier(name);
        let class = naming::capitalize(&ident);
        Self {
            name: name.to_owned(),
            ident,
            class,
        }
    }

    /// Substitute in a single pass so placeholder text inside the name stays literal.
    pub fn apply(&self, text: &str) -> String {
        static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
        let pattern = PLACEHOLDER.get_or_init(|| {
            Regex::new(r"\{\{(name|ident|Ident)\}\}").expect("placeholder pattern is valid")
        });
        pattern
            .replace_all(text, |caps: &Captures<'_>| match &caps[1] {
                "name" => self.name.as_str(),
                "ident" => self.ident.as_str(),
                _ => self.class.as_str(),
            })
            .into_owned()
    }
}
