use std::fmt;

/// A user-supplied Django app name.
///
/// Names are carried verbatim: no trimming, no case folding, no uniqueness
/// enforcement. The name is used as a directory name under `apps/`, as the
/// dotted module path `apps.<name>`, and as the registration entry inserted
/// into the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppName(String);

impl AppName {
    pub fn new<S: Into<String>>(raw: S) -> Self {
        AppName(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Dotted module path under the apps package, e.g. `apps.users`.
    pub fn module_path(&self) -> String {
        format!("apps.{}", self.0)
    }

    /// The literal registration entry expected in the settings file,
    /// e.g. `'apps.users',`.
    pub fn settings_entry(&self) -> String {
        format!("'{}',", self.module_path())
    }

    /// Whether the name is a valid Python identifier and therefore a safe
    /// module/directory token. Unsafe names are still processed; callers may
    /// warn.
    pub fn is_python_identifier(&self) -> bool {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
            _ => return false,
        }
        chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
