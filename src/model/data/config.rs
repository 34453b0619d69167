use std::env;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context};

use crate::constants;

#[derive(Debug, Clone)]
pub struct DumpConfig {
    pub output_directory: PathBuf,
    pub max_concurrent_fetches: usize
}

impl Default for DumpConfig {
    fn default() -> Self {
        return DumpConfig {
            output_directory: PathBuf::from(constants::DEFAULT_OUTPUT_DIRECTORY),
            max_concurrent_fetches: constants::DEFAULT_MAX_CONCURRENT_FETCHES
        }
    }
}

impl Display for DumpConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "output_directory: \'{}\', max_concurrent_fetches: {}",
            self.output_directory.display(),
            self.max_concurrent_fetches
        )?;

        return Ok(());
    }
}

impl DumpConfig {
    pub fn from_env() -> anyhow::Result<DumpConfig> {
        let output_directory = env::var("OUTPUT_DIRECTORY").ok();
        let max_concurrent_fetches = env::var("MAX_CONCURRENT_FETCHES").ok();

        return DumpConfig::from_values(
            output_directory.as_deref(),
            max_concurrent_fetches.as_deref()
        );
    }

    pub fn from_values(
        output_directory: Option<&str>,
        max_concurrent_fetches: Option<&str>
    ) -> anyhow::Result<DumpConfig> {
        let mut dump_config = DumpConfig::default();

        if let Some(output_directory) = output_directory {
            if !output_directory.trim().is_empty() {
                dump_config.output_directory = PathBuf::from(output_directory);
            }
        }

        if let Some(max_concurrent_fetches) = max_concurrent_fetches {
            let value = usize::from_str(max_concurrent_fetches.trim())
                .with_context(|| {
                    return format!(
                        "from_values() Failed to parse MAX_CONCURRENT_FETCHES \'{}\'",
                        max_concurrent_fetches
                    );
                })?;

            if value == 0 {
                return Err(anyhow!("from_values() MAX_CONCURRENT_FETCHES must be greater than 0"));
            }

            dump_config.max_concurrent_fetches = value;
        }

        return Ok(dump_config);
    }
}

#[test]
fn test_dump_config_defaults() {
    let dump_config = DumpConfig::from_values(None, None).unwrap();

    assert_eq!(PathBuf::from("."), dump_config.output_directory);
    assert_eq!(1, dump_config.max_concurrent_fetches);
}

#[test]
fn test_dump_config_overrides() {
    let dump_config = DumpConfig::from_values(Some("out/posts"), Some(" 4 ")).unwrap();

    assert_eq!(PathBuf::from("out/posts"), dump_config.output_directory);
    assert_eq!(4, dump_config.max_concurrent_fetches);

    let dump_config = DumpConfig::from_values(Some("  "), None).unwrap();
    assert_eq!(PathBuf::from("."), dump_config.output_directory);
}

#[test]
fn test_dump_config_rejects_bad_concurrency() {
    assert!(DumpConfig::from_values(None, Some("0")).is_err());
    assert!(DumpConfig::from_values(None, Some("many")).is_err());
    assert!(DumpConfig::from_values(None, Some("-1")).is_err());
}
