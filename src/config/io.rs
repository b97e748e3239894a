use std::path::Path;

use super::{schema::Config, validate::ConfigError};

pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        let config = Config::default();
        config.validate()?;
        return Ok(config);
    }

    let path_str = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_str.clone(),
        source,
    })?;
    let config: Config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path_str,
        source,
    })?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::load_config;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempfile::tempdir().expect("temp dir");
        let config = load_config(temp.path().join("report.toml")).expect("defaults expected");
        assert_eq!(config.database.path, "../data/plants.db");
        assert_eq!(config.charts.output_dir, "charts");
    }

    #[test]
    fn file_overrides_are_applied() {
        let temp = tempfile::tempdir().expect("temp dir");
        let path = temp.path().join("report.toml");
        fs::write(
            &path,
            "[database]\npath = \"plants-copy.db\"\n\n[charts]\nwidth = 800\n",
        )
        .expect("write config");

        let config = load_config(&path).expect("config expected");
        assert_eq!(config.database.path, "plants-copy.db");
        assert_eq!(config.charts.width, 800);
        assert_eq!(config.charts.height, 900);
    }

    #[test]
    fn invalid_toml_is_rejected() {
        let temp = tempfile::tempdir().expect("temp dir");
        let path = temp.path().join("report.toml");
        fs::write(&path, "[database\npath = 1").expect("write config");

        assert!(load_config(&path).is_err());
    }
}
