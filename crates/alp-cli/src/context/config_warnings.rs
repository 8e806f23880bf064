use alp_config::AlpConfig;

/// Sections whose env overrides need a double underscore after the section name.
const SECTIONS: [&str; 3] = ["ANALYSIS", "CATALOG", "GENERAL"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &AlpConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &AlpConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = SECTIONS
        .iter()
        .filter(|section| has_single_underscore_key(&env_keys, section))
        .map(|section| {
            format!(
                "ALP_{section}_* env vars are ignored. Use double underscores (example: ALP_{section}__{})",
                example_field(section)
            )
        })
        .collect::<Vec<_>>();

    if !config.catalog.is_configured() && env_keys.iter().any(|key| key == "ALP_CATALOG__PATH") {
        warnings.push(
            "ALP_CATALOG__PATH is set but blank; the built-in plan catalog is used.".to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    let single = format!("ALP_{section}_");
    let double = format!("ALP_{section}__");
    keys.iter()
        .any(|key| key.starts_with(&single) && !key.starts_with(&double))
}

fn example_field(section: &str) -> &'static str {
    match section {
        "ANALYSIS" => "TARGET",
        "CATALOG" => "PATH",
        _ => "DEFAULT_FORMAT",
    }
}

#[cfg(test)]
mod tests {
    use alp_config::{AlpConfig, CatalogConfig};

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = AlpConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("ALP_ANALYSIS_TARGET".to_string(), "70".to_string()),
                ("ALP_CATALOG_PATH".to_string(), "plans.toml".to_string()),
                ("ALP_GENERAL_DEFAULT_FORMAT".to_string(), "table".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("ALP_ANALYSIS__TARGET"));
    }

    #[test]
    fn does_not_warn_for_well_formed_keys() {
        let config = AlpConfig {
            catalog: CatalogConfig {
                path: "plans.toml".into(),
            },
            ..AlpConfig::default()
        };

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("ALP_ANALYSIS__TARGET".to_string(), "70".to_string()),
                ("ALP_CATALOG__PATH".to_string(), "plans.toml".to_string()),
                ("ALP_LOG".to_string(), "debug".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn warns_when_catalog_path_env_is_blank() {
        let warnings = collect_unconfigured_warnings(
            &AlpConfig::default(),
            vec![("ALP_CATALOG__PATH".to_string(), "  ".to_string())],
        );

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("built-in plan catalog"));
    }
}
