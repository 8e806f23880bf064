use std::borrow::Cow;

use alp_config::AlpConfig;
use alp_engine::PlanCatalog;
use anyhow::Context;

use crate::cli::{GlobalFlags, OutputFormat};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub catalog: Cow<'static, PlanCatalog>,
    /// Effective target percentage after the `--target` override.
    pub target: f64,
    pub format: OutputFormat,
}

impl AppContext {
    /// Resolve the target, output format and plan catalog from config and flags.
    pub fn init(config: &AlpConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let target = resolve_target(config, flags.target)?;
        let catalog = load_catalog(config)?;
        let format = resolve_format(flags, config);

        Ok(Self {
            catalog,
            target,
            format,
        })
    }
}

/// `--format` wins over `general.default_format`.
#[must_use]
pub fn resolve_format(flags: &GlobalFlags, config: &AlpConfig) -> OutputFormat {
    flags
        .format
        .unwrap_or_else(|| config.general.default_format.into())
}

fn resolve_target(config: &AlpConfig, override_target: Option<f64>) -> anyhow::Result<f64> {
    let Some(target) = override_target else {
        return Ok(config.analysis.target);
    };

    alp_config::validate_target(target).context("invalid --target")?;
    tracing::debug!(target, configured = config.analysis.target, "target overridden by flag");
    Ok(target)
}

fn load_catalog(config: &AlpConfig) -> anyhow::Result<Cow<'static, PlanCatalog>> {
    let Some(path) = config.catalog.custom_path() else {
        return Ok(Cow::Borrowed(PlanCatalog::builtin()));
    };

    let catalog = PlanCatalog::from_path(&path)
        .with_context(|| format!("failed to load plan catalog from {}", path.display()))?;
    Ok(Cow::Owned(catalog))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use alp_config::{AlpConfig, CatalogConfig};
    use alp_engine::PlanCatalog;

    use super::{AppContext, resolve_format};
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(format: Option<OutputFormat>, target: Option<f64>) -> GlobalFlags {
        GlobalFlags {
            format,
            quiet: false,
            target,
        }
    }

    #[test]
    fn defaults_use_config_target_and_builtin_catalog() {
        let ctx = AppContext::init(&AlpConfig::default(), &flags(None, None))
            .expect("context should init");

        assert!((ctx.target - 60.0).abs() < f64::EPSILON);
        assert_eq!(ctx.format, OutputFormat::Json);
        assert_eq!(&*ctx.catalog, PlanCatalog::builtin());
    }

    #[test]
    fn target_flag_overrides_config() {
        let ctx = AppContext::init(&AlpConfig::default(), &flags(None, Some(75.0)))
            .expect("context should init");
        assert!((ctx.target - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_target_flag_is_rejected() {
        let err = AppContext::init(&AlpConfig::default(), &flags(None, Some(120.0)))
            .err()
            .expect("target above 100 should fail");
        assert!(format!("{err:#}").contains("--target"));

        assert!(AppContext::init(&AlpConfig::default(), &flags(None, Some(f64::NAN))).is_err());
    }

    #[test]
    fn format_flag_wins_over_config() {
        let mut config = AlpConfig::default();
        config.general.default_format = alp_config::DefaultFormat::Table;

        assert_eq!(resolve_format(&flags(None, None), &config), OutputFormat::Table);
        assert_eq!(
            resolve_format(&flags(Some(OutputFormat::Raw), None), &config),
            OutputFormat::Raw
        );
    }

    #[test]
    fn custom_catalog_is_loaded_from_config_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        let raw = include_str!("../../../alp-engine/data/catalog.toml")
            .replace("Watch basics first", "Rewatch the recorded lecture");
        file.write_all(raw.as_bytes()).expect("write catalog");

        let config = AlpConfig {
            catalog: CatalogConfig {
                path: file.path().display().to_string(),
            },
            ..AlpConfig::default()
        };

        let ctx = AppContext::init(&config, &flags(None, None)).expect("context should init");
        assert_ne!(&*ctx.catalog, PlanCatalog::builtin());
    }

    #[test]
    fn missing_custom_catalog_fails_with_path() {
        let config = AlpConfig {
            catalog: CatalogConfig {
                path: "/definitely/not/here/catalog.toml".into(),
            },
            ..AlpConfig::default()
        };

        let err = AppContext::init(&config, &flags(None, None))
            .err()
            .expect("missing catalog should fail");
        assert!(format!("{err:#}").contains("/definitely/not/here/catalog.toml"));
    }
}
