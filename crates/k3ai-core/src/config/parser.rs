//! TOML parser for config.toml

use anyhow::{Context, Result};
use std::path::Path;

use super::schema::Settings;

/// Parse config.toml from disk
pub fn parse_settings(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_settings_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse config.toml content from string
pub fn parse_settings_str(content: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(content).map_err(|e| enhance_toml_error(e, content))?;

    settings.validate()?;

    Ok(settings)
}

/// Serialize settings back to TOML
pub fn to_toml(settings: &Settings) -> Result<String> {
    toml::to_string_pretty(settings).context("Failed to serialize settings to TOML")
}

/// Point at the offending line when the TOML error carries a span.
fn enhance_toml_error(error: toml::de::Error, content: &str) -> anyhow::Error {
    let Some(span) = error.span() else {
        return anyhow::anyhow!("Invalid TOML: {}", error.message());
    };

    let line = content[..span.start.min(content.len())]
        .matches('\n')
        .count()
        + 1;
    let text = content.lines().nth(line - 1).unwrap_or("").trim();

    anyhow::anyhow!(
        "Invalid TOML at line {}: {}\n  --> {}",
        line,
        error.message(),
        text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let settings = parse_settings_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn partial_remote_section_keeps_other_defaults() {
        let settings = parse_settings_str(
            r#"
[remote]
plugins_url = "https://example.com/plugins"
timeout_secs = 30
"#,
        )
        .unwrap();

        assert_eq!(settings.remote.plugins_url, "https://example.com/plugins");
        assert_eq!(settings.remote.timeout_secs, Some(30));
        assert_eq!(
            settings.remote.groups_url,
            Settings::default().remote.groups_url
        );
    }

    #[test]
    fn syntax_error_reports_line() {
        let err = parse_settings_str("[remote]\nplugins_url = \n").unwrap_err();
        assert!(err.to_string().contains("Invalid TOML"), "{err}");
    }

    #[test]
    fn invalid_url_fails_validation() {
        let err = parse_settings_str("[remote]\nplugins_url = \"not a url\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("plugins_url"));
    }

    #[test]
    fn to_toml_roundtrips() {
        let mut settings = Settings::default();
        settings.remote.token = Some("ghp_example".to_string());

        let text = to_toml(&settings).unwrap();
        assert_eq!(parse_settings_str(&text).unwrap(), settings);
    }
}
