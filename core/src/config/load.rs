use std::path::{Path, PathBuf};

use super::types::AppConfig;

pub const LOCAL_CONFIG_FILE: &str = "daily-tasks.toml";

/// Get the default data directory: ~/.daily-tasks
pub fn get_data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".daily-tasks"))
}

pub fn load_from_path(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let cfg = toml::from_str::<AppConfig>(&s)
        .map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))?;
    Ok(cfg)
}

/// Loads the configuration.
///
/// An explicit path must exist. Otherwise `~/.daily-tasks/config.toml` wins
/// over `./daily-tasks.toml`, and built-in defaults apply when neither exists.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    let mut cfg = match explicit {
        Some(path) => load_from_path(path)?,
        None => {
            let home_config = get_data_dir().ok().map(|d| d.join("config.toml"));
            let local_config = Path::new(LOCAL_CONFIG_FILE);

            match home_config {
                Some(p) if p.is_file() => load_from_path(&p)?,
                _ if local_config.is_file() => load_from_path(local_config)?,
                _ => AppConfig::default(),
            }
        }
    };

    apply_env_overrides(&mut cfg, |k| std::env::var(k).ok());
    validate(&cfg)?;
    Ok(cfg)
}

/// Environment overrides; empty values are ignored.
pub fn apply_env_overrides(cfg: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = get("DAILY_TASKS_START") {
        cfg.defaults.start = v;
    }
    if let Some(v) = get("DAILY_TASKS_END") {
        cfg.defaults.end = v;
    }
    if let Some(v) = get("DAILY_TASKS_LOG") {
        cfg.logging.level = v;
    }
}

fn validate(cfg: &AppConfig) -> anyhow::Result<()> {
    if cfg.input.delimiters.is_empty() {
        anyhow::bail!("input.delimiters cannot be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.defaults.start, "9:00");
        assert_eq!(cfg.defaults.end, "21:00");
        assert_eq!(cfg.input.delimiters, ",;");
        assert!(cfg.logging.console);
        assert!(!cfg.logging.file);
    }

    #[test]
    fn test_partial_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
[defaults]
start = "7:30"

[logging]
level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(cfg.defaults.start, "7:30");
        assert_eq!(cfg.defaults.end, "21:00");
        assert_eq!(cfg.logging.level, "debug");
        assert!(cfg.logging.enabled);
    }

    #[test]
    fn test_load_explicit_path() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "[input]\ndelimiters = \"|\"").unwrap();
        let cfg = load_from_path(f.path()).unwrap();
        assert_eq!(cfg.input.delimiters, "|");
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_load_rejects_empty_delimiters() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "[input]\ndelimiters = \"\"").unwrap();
        let err = load(Some(f.path())).unwrap_err();
        assert!(err.to_string().contains("delimiters"));
    }

    #[test]
    fn test_env_overrides_skip_blank_values() {
        let env: HashMap<&str, &str> = [
            ("DAILY_TASKS_START", "6:00"),
            ("DAILY_TASKS_END", "  "),
            ("DAILY_TASKS_LOG", "daily_tasks_core=debug"),
        ]
        .into_iter()
        .collect();

        let mut cfg = AppConfig::default();
        apply_env_overrides(&mut cfg, |k| env.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.defaults.start, "6:00");
        assert_eq!(cfg.defaults.end, "21:00");
        assert_eq!(cfg.logging.level, "daily_tasks_core=debug");
    }
}
