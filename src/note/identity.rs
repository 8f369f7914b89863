use std::cell::OnceCell;
use std::path::Path;
use std::time::UNIX_EPOCH;

use chrono::{DateTime, Local};
use uuid::Uuid;

/// `strftime` pattern for the timestamp that leads every derived name.
pub const TIMESTAMP_FORMAT: &str = "%y-%m-%dT%H-%M";

/// Unique id used for notes loaded from disk.
const LOADED_UNIQUE_ID: &str = "-";

/// Naming metadata for one note.
///
/// A name set from a path is authoritative. Otherwise the name is derived
/// from the content the first time it is asked for and kept for the rest
/// of the identity's life, even if the content later changes.
#[derive(Debug, Clone)]
pub struct FileIdentity {
    created_at: DateTime<Local>,
    unique_id: String,
    explicit_name: Option<String>,
    derived_name: OnceCell<String>,
}

impl FileIdentity {
    /// Identity for a note started now.
    pub fn new_document() -> Self {
        Self::with_parts(Local::now(), Uuid::new_v4().to_string())
    }

    /// Identity with a known creation time and id and no fixed name.
    pub fn with_parts(created_at: DateTime<Local>, unique_id: impl Into<String>) -> Self {
        Self {
            created_at,
            unique_id: unique_id.into(),
            explicit_name: None,
            derived_name: OnceCell::new(),
        }
    }

    /// Identity for a note loaded from `path`, named after its base name.
    pub fn from_path(path: &Path) -> Self {
        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        Self {
            created_at: DateTime::<Local>::from(UNIX_EPOCH),
            unique_id: LOADED_UNIQUE_ID.to_string(),
            explicit_name: Some(name),
            derived_name: OnceCell::new(),
        }
    }

    pub const fn created_at(&self) -> &DateTime<Local> {
        &self.created_at
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn explicit_name(&self) -> Option<&str> {
        self.explicit_name.as_deref()
    }

    /// The note's display name, deriving it from `content` on first use.
    pub fn name<'a>(&'a self, content: &str) -> &'a str {
        if let Some(name) = &self.explicit_name {
            return name;
        }
        self.derived_name
            .get_or_init(|| derive_name(content, &self.created_at, &self.unique_id))
    }
}

/// Build `"{timestamp}_{heading_}{unique_id}.md"` for `content`.
///
/// The heading part is present only when the first line is non-empty and
/// the second line is a setext `==` underline; spaces become `-`.
pub fn derive_name(content: &str, created_at: &DateTime<Local>, unique_id: &str) -> String {
    let mut lines = content.split('\n');
    let header = lines.next().unwrap_or_default();
    let heading = match lines.next() {
        Some(divider) if divider.starts_with("==") && !header.is_empty() => {
            format!("{}_", header.replace(' ', "-"))
        }
        _ => String::new(),
    };
    format!(
        "{}_{heading}{unique_id}.md",
        created_at.format(TIMESTAMP_FORMAT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::path::PathBuf;

    fn june_first() -> DateTime<Local> {
        Local.with_ymd_and_hms(2023, 6, 1, 14, 5, 0).unwrap()
    }

    #[test]
    fn test_derive_name_with_heading() {
        let name = derive_name("Title\n===\nbody", &june_first(), "abc");
        assert_eq!(name, "23-06-01T14-05_Title_abc.md");
    }

    #[test]
    fn test_derive_name_slugifies_spaces() {
        let name = derive_name("My first note\n==\n", &june_first(), "id");
        assert_eq!(name, "23-06-01T14-05_My-first-note_id.md");
    }

    #[test]
    fn test_derive_name_without_divider() {
        let name = derive_name("Title\nbody", &june_first(), "abc");
        assert_eq!(name, "23-06-01T14-05_abc.md");
    }

    #[test]
    fn test_derive_name_single_line() {
        let name = derive_name("Title", &june_first(), "abc");
        assert_eq!(name, "23-06-01T14-05_abc.md");
    }

    #[test]
    fn test_derive_name_empty_header_is_ignored() {
        let name = derive_name("\n===\nbody", &june_first(), "abc");
        assert_eq!(name, "23-06-01T14-05_abc.md");
    }

    #[test]
    fn test_single_equals_is_not_a_divider() {
        let name = derive_name("Title\n=\n", &june_first(), "abc");
        assert_eq!(name, "23-06-01T14-05_abc.md");
    }

    #[test]
    fn test_name_is_cached_after_first_derivation() {
        let identity = FileIdentity::with_parts(june_first(), "u");
        assert_eq!(identity.name("First\n==="), "23-06-01T14-05_First_u.md");
        assert_eq!(identity.name("Second\n==="), "23-06-01T14-05_First_u.md");
    }

    #[test]
    fn test_from_path_uses_base_name() {
        let identity = FileIdentity::from_path(&PathBuf::from("notes/sub/todo.md"));
        assert_eq!(identity.explicit_name(), Some("todo.md"));
        assert_eq!(identity.name("Other\n===\n"), "todo.md");
        assert_eq!(identity.unique_id(), "-");
        assert_eq!(identity.created_at().timestamp(), 0);
    }

    #[test]
    fn test_new_documents_get_distinct_ids() {
        let a = FileIdentity::new_document();
        let b = FileIdentity::new_document();
        assert_ne!(a.unique_id(), b.unique_id());
        assert!(a.explicit_name().is_none());
    }
}
