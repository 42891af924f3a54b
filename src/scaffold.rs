//! Embedded template files stamped into each scaffolded app.

use include_dir::{Dir, include_dir};

static SCAFFOLD_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/scaffold");

/// A file written into every scaffolded app directory.
#[derive(Debug, Clone)]
pub struct ScaffoldFile {
    /// File name inside the app directory, e.g. `urls.py`.
    pub name: &'static str,
    /// File content as UTF-8 text. Static boilerplate; the app name is never
    /// interpolated into it.
    pub content: &'static str,
}

/// Returns the template files, sorted by name.
pub fn app_files() -> Vec<ScaffoldFile> {
    let mut files = Vec::new();
    for file in SCAFFOLD_DIR.files() {
        if let (Some(name), Some(content)) =
            (file.path().to_str(), file.contents_utf8())
        {
            files.push(ScaffoldFile { name, content });
        }
    }

    files.sort_by(|a, b| a.name.cmp(b.name));
    files
}

/// Content of the routing template.
pub fn urls_template() -> &'static str {
    template("urls.py")
}

/// Content of the serializer template.
pub fn serializers_template() -> &'static str {
    template("serializers.py")
}

fn template(name: &str) -> &'static str {
    SCAFFOLD_DIR
        .get_file(name)
        .and_then(|f| f.contents_utf8())
        .unwrap_or_default()
}
