use directories::ProjectDirs;
use once_cell::sync::OnceCell;
use page_headers::{ExtractOptions, TocConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

static CONFIG: OnceCell<ConfigInner> = OnceCell::new();

#[derive(Debug)]
struct ConfigInner {
    config: Config,
    file_path: PathBuf,
}

/// Error occurred while reading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

pub struct LoadedConfig {
    pub config: Config,
    pub file_path: PathBuf,
    pub maybe_error: Option<ConfigError>,
}

/// Default location of the config file.
///
/// Linux: ~/.config/docheaders/config.toml
/// macOS: ~/Library/Application Support/org.docheaders.docheaders/config.toml
/// Windows: ~\AppData\Roaming\docheaders\docheaders\config\config.toml
pub fn default_config_file() -> Option<PathBuf> {
    ProjectDirs::from("org", "docheaders", "docheaders")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Reads the config file, falling back to the defaults on any error.
///
/// A missing file is not an error, a file that cannot be read or parsed is
/// reported in [`LoadedConfig::maybe_error`].
pub fn load_config(specified_config_file: Option<PathBuf>) -> LoadedConfig {
    let Some(config_file) = specified_config_file.or_else(default_config_file) else {
        return LoadedConfig {
            config: Config::default(),
            file_path: PathBuf::new(),
            maybe_error: None,
        };
    };

    let contents = match std::fs::read_to_string(&config_file) {
        Ok(contents) => contents,
        Err(err) => {
            let maybe_error =
                (err.kind() != std::io::ErrorKind::NotFound).then(|| ConfigError::Io {
                    path: config_file.clone(),
                    source: err,
                });
            return LoadedConfig {
                config: Config::default(),
                file_path: config_file,
                maybe_error,
            };
        }
    };

    match toml::from_str(&contents) {
        Ok(config) => LoadedConfig {
            config,
            file_path: config_file,
            maybe_error: None,
        },
        Err(err) => LoadedConfig {
            config: Config::default(),
            maybe_error: Some(ConfigError::Toml {
                path: config_file.clone(),
                source: err,
            }),
            file_path: config_file,
        },
    }
}

/// Loads the global config once, returning it with the load error if any.
///
/// Subsequent calls return the config loaded by the first one.
pub fn load_config_on_startup(
    specified_config_file: Option<PathBuf>,
) -> (&'static Config, Option<ConfigError>) {
    let mut maybe_error = None;

    let inner = CONFIG.get_or_init(|| {
        let LoadedConfig {
            config,
            file_path,
            maybe_error: err,
        } = load_config(specified_config_file);
        maybe_error = err;
        ConfigInner { config, file_path }
    });

    (&inner.config, maybe_error)
}

pub fn config_file() -> Option<&'static PathBuf> {
    CONFIG.get().map(|inner| &inner.file_path)
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct LogConfig {
    /// Specify the log file path.
    pub log_file: Option<String>,

    /// Specify the max log level.
    pub max_level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            max_level: "debug".into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct HeadersConfig {
    /// Heading levels extracted from a page.
    pub levels: Vec<usize>,

    /// Whether to decode the entities in the extracted titles.
    pub decode_entities: bool,
}

impl Default for HeadersConfig {
    fn default() -> Self {
        Self {
            levels: vec![2, 3],
            decode_entities: true,
        }
    }
}

impl HeadersConfig {
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions::with_levels(self.levels.iter().copied())
    }
}

/// Table of contents formatting.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct TocSection {
    pub bullet: String,
    pub indent: usize,
    pub max_depth: Option<usize>,
    pub min_depth: usize,
    /// Line printed above the entries, none when empty.
    pub header: String,
    pub no_link: bool,
}

impl Default for TocSection {
    fn default() -> Self {
        let TocConfig {
            bullet,
            indent,
            max_depth,
            min_depth,
            header,
            no_link,
        } = TocConfig::default();

        Self {
            bullet,
            indent,
            max_depth,
            min_depth,
            header: header.unwrap_or_default(),
            no_link,
        }
    }
}

impl TocSection {
    pub fn toc_config(&self) -> TocConfig {
        TocConfig {
            bullet: self.bullet.clone(),
            indent: self.indent,
            max_depth: self.max_depth,
            min_depth: self.min_depth,
            header: (!self.header.is_empty()).then(|| self.header.clone()),
            no_link: self.no_link,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// Log configuration.
    pub log: LogConfig,

    /// Header extraction configuration.
    pub headers: HeadersConfig,

    /// Table of contents configuration.
    pub toc: TocSection,
}
