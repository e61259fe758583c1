use anyhow::{Context, Result};
use jokerdraw_core::TableConfig;
use std::fs;
use std::path::{Path, PathBuf};

pub fn config_path_from_env() -> Option<PathBuf> {
    std::env::var_os("JOKERDRAW_CONFIG").map(PathBuf::from)
}

pub fn log_path_from_env() -> Option<PathBuf> {
    std::env::var_os("JOKERDRAW_LOG").map(PathBuf::from)
}

/// Reads a table config from JSON. Missing fields keep their defaults.
pub fn load_table_config(path: &Path) -> Result<TableConfig> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("read table config {}", path.display()))?;
    parse_table_config(&body).with_context(|| format!("parse table config {}", path.display()))
}

pub fn parse_table_config(body: &str) -> Result<TableConfig> {
    let config: TableConfig = serde_json::from_str(body).context("decode json")?;
    config.validate().context("validate config")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = parse_table_config(r#"{"first_seat": 2, "timing": {"draw_ms": 250}}"#)
            .expect("config");
        assert_eq!(config.first_seat, 2);
        assert_eq!(config.timing.draw_ms, 250);
        assert_eq!(config.timing.pair_ms, 800);
        assert_eq!(config.human_seat, Some(0));
    }

    #[test]
    fn null_human_seat_means_watch_mode() {
        let config = parse_table_config(r#"{"human_seat": null}"#).expect("config");
        assert_eq!(config.human_seat, None);
    }

    #[test]
    fn out_of_range_seat_is_rejected() {
        let err = parse_table_config(r#"{"human_seat": 7}"#).expect_err("invalid seat");
        assert!(format!("{err:#}").contains("seat 7 is out of range"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_table_config(Path::new("/nonexistent/jokerdraw.json"))
            .expect_err("missing file");
        assert!(format!("{err:#}").contains("/nonexistent/jokerdraw.json"));
    }
}
