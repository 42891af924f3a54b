//! Text mutations applied to the generated app config and the settings file.
//!
//! Both operations are pure functions over the file content so they can be
//! exercised without a filesystem. The settings mutation is a guarded ordered
//! insertion: add the registration entry immediately before the anchor line,
//! unless an equivalent entry is already present anywhere in the file.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::AppName;

/// Line that terminates the `INSTALLED_APPS` list in the settings module.
/// Matched at column 0.
pub const INSTALLED_APPS_ANCHOR: &str = "] + DEFAULT_INSTALLED_APPS";

/// Indentation used for inserted registration entries.
const ENTRY_INDENT: &str = "    ";

static NAME_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"name = '[^']*'").expect("valid name-line pattern"));

/// Result of attempting to register an app in the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// A new entry was inserted before the anchor line.
    Inserted,
    /// An equivalent entry already exists; content returned unchanged.
    AlreadyPresent,
    /// The anchor line is missing; content returned unchanged.
    AnchorMissing,
}

/// Rewrite every `name = '...'` assignment in a generated `apps.py` so the
/// value becomes the namespaced module path `apps.<name>`.
///
/// A freshly generated config contains exactly one such line, but the
/// substitution is global by contract.
pub fn rewrite_app_config(source: &str, name: &AppName) -> (String, bool) {
    let replacement = format!("name = '{}'", name.module_path());
    // NoExpand: the app name is user input and must not be treated as a
    // capture-group reference.
    let rewritten = NAME_LINE.replace_all(source, regex::NoExpand(&replacement));
    let changed = matches!(rewritten, std::borrow::Cow::Owned(_));
    (rewritten.into_owned(), changed)
}

/// Insert the registration entry for `name` immediately before the first
/// anchor line, unless the entry is already present.
///
/// Returns the (possibly unchanged) content together with the outcome. When
/// nothing is inserted the returned content is byte-identical to the input.
pub fn register_app(settings: &str, name: &AppName) -> (String, RegisterOutcome) {
    let entry = name.settings_entry();
    if settings.contains(&entry) {
        return (settings.to_string(), RegisterOutcome::AlreadyPresent);
    }

    let mut out = String::with_capacity(settings.len() + entry.len() + ENTRY_INDENT.len() + 1);
    let mut inserted = false;
    for chunk in settings.split_inclusive('\n') {
        if !inserted && chunk.starts_with(INSTALLED_APPS_ANCHOR) {
            out.push_str(ENTRY_INDENT);
            out.push_str(&entry);
            out.push('\n');
            inserted = true;
        }
        out.push_str(chunk);
    }

    if inserted {
        (out, RegisterOutcome::Inserted)
    } else {
        (settings.to_string(), RegisterOutcome::AnchorMissing)
    }
}
