//! Shared utilities for integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Alias file exercising every match type, nesting and a legacy record.
#[allow(dead_code)]
pub const SAMPLE_ALIASES: &str = r#"
[logging]
level = "warn"

[[aliases]]
name = "docs"
definition = """
# Documentation shortcuts
docs -> /documentation
  api -> /docs/api/overview.html   # reference
    v2 -> /docs/api/v2
  *.pdf -> /files/docs [glob]
"""

[[aliases]]
name = "blog"
definition = "blog-* -> /posts [glob, ignore-case]"

[[aliases]]
name = "post"
definition = "post/<int:id> -> /posts/show [flask]"

[[aliases]]
name = "catch-all"
definition = "/.* -> /search [regex]"

[[aliases]]
name = "latest"
definition = ""

[[aliases]]
name = "old-home"
legacy = true
"#;

/// Write `content` to a temporary alias file.
pub fn alias_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}
