use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::editor::{DEFAULT_TAB_WIDTH, EditorSettings};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub verbose: bool,
    pub root: Option<PathBuf>,
    pub tab_width: Option<usize>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            verbose: self.verbose || other.verbose,
            root: other.root.clone().or_else(|| self.root.clone()),
            tab_width: other.tab_width.or(self.tab_width),
        }
    }

    /// Directory notes are saved into; the working directory by default.
    pub fn notes_root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn editor_settings(&self) -> EditorSettings {
        EditorSettings {
            tab_width: self.tab_width.unwrap_or(DEFAULT_TAB_WIDTH),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("marknote").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("marknote")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("marknote").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("marknote").join("config");
        }
    }

    PathBuf::from(".marknoterc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".marknoterc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# marknote defaults (saved with --save)".to_string());
    if flags.verbose {
        lines.push("--verbose".to_string());
    }
    if let Some(root) = &flags.root {
        lines.push(format!("--root {}", root.display()));
    }
    if let Some(width) = flags.tab_width {
        lines.push(format!("--tab-width {width}"));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--verbose" || token == "-v" {
            flags.verbose = true;
        } else if token == "--root" {
            if let Some(next) = tokens.get(i + 1) {
                flags.root = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--root=") {
            flags.root = Some(PathBuf::from(value));
        } else if token == "--tab-width" {
            if let Some(next) = tokens.get(i + 1) {
                flags.tab_width = parse_tab_width(next);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--tab-width=") {
            flags.tab_width = parse_tab_width(value);
        }
        i += 1;
    }
    flags
}

fn parse_tab_width(s: &str) -> Option<usize> {
    s.parse().ok().filter(|width| *width > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "marknote".to_string(),
            "--verbose".to_string(),
            "--root".to_string(),
            "notes".to_string(),
            "--tab-width=2".to_string(),
            "todo.md".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert!(flags.verbose);
        assert_eq!(flags.root, Some(PathBuf::from("notes")));
        assert_eq!(flags.tab_width, Some(2));
    }

    #[test]
    fn test_invalid_tab_width_is_ignored() {
        let args = vec!["--tab-width".to_string(), "0".to_string()];
        assert_eq!(parse_flag_tokens(&args).tab_width, None);
        let args = vec!["--tab-width=wide".to_string()];
        assert_eq!(parse_flag_tokens(&args).tab_width, None);
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            verbose: true,
            root: Some(PathBuf::from("file-notes")),
            tab_width: Some(8),
        };
        let cli = ConfigFlags {
            root: Some(PathBuf::from("cli-notes")),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.verbose);
        assert_eq!(merged.root, Some(PathBuf::from("cli-notes")));
        assert_eq!(merged.tab_width, Some(8));
    }

    #[test]
    fn test_defaults() {
        let flags = ConfigFlags::default();
        assert_eq!(flags.notes_root(), PathBuf::from("."));
        assert_eq!(flags.editor_settings().tab_width, DEFAULT_TAB_WIDTH);
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("marknote").join("config");
        let flags = ConfigFlags {
            verbose: true,
            root: Some(PathBuf::from("notes")),
            tab_width: Some(2),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }
}
