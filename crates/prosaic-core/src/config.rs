//! Layered settings for detection thresholds, rewrite tone and logging.
//!
//! Sources, lowest precedence first:
//!
//! | Source | Example |
//! |---|---|
//! | built-in defaults | [`Config::default`] |
//! | user file | `~/.config/prosaic/config.toml` |
//! | project files | `.prosaic.yaml`, then `prosaic.toml` |
//! | explicit files | `prosaic --config ci.json` |
//! | environment | `PROSAIC_TONE=business` |
//!
//! Project files come from the nearest directory (walking up from the search
//! root) holding at least one of them; the walk halts at a repository root
//! (`.git`). Within one directory every extension found is merged, in the
//! order toml, yaml, yml, json.
//!
//! ```no_run
//! use camino::Utf8PathBuf;
//! use prosaic_core::config::ConfigLoader;
//!
//! let cwd = Utf8PathBuf::from(".");
//! let (config, sources) = ConfigLoader::new().with_project_search(&cwd).load()?;
//! println!("{} from {:?}", config.tone, sources.primary_file());
//! # Ok::<(), prosaic_core::error::ConfigError>(())
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::DEFAULT_MAX_INPUT_BYTES;
use crate::error::{ConfigError, ConfigResult};
use crate::humanize::{DEFAULT_FLAG_THRESHOLD, DEFAULT_PASS_THRESHOLD, HumanizeOptions};
use crate::rewrite::Tone;

/// Merged settings. Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// File log level when neither `-v` nor `RUST_LOG` is given.
    pub log_level: LogLevel,
    /// Directory for `prosaic.log`; platform data dir when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Default tone for `paraphrase` and `humanize`.
    pub tone: Tone,
    /// Seed for the rewrite engine's random source.
    ///
    /// When set, rewrites are reproducible across runs.
    pub seed: Option<u64>,
    /// Detection scores above this are reported as machine-generated.
    pub flag_threshold: u8,
    /// Rewrites scoring below this pass.
    pub pass_threshold: u8,
    /// Upper bound on rewrite passes in `humanize`.
    pub max_passes: u32,
    /// Largest accepted input, CLI and MCP alike. Defaults to 5 MiB.
    pub max_input_bytes: Option<usize>,
    /// Skip the size check altogether.
    pub disable_input_limit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_dir: None,
            tone: Tone::default(),
            seed: None,
            flag_threshold: DEFAULT_FLAG_THRESHOLD,
            pass_threshold: DEFAULT_PASS_THRESHOLD,
            max_passes: 1,
            max_input_bytes: None,
            disable_input_limit: false,
        }
    }
}

impl Config {
    /// The effective input size limit, or `None` when disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
        }
    }

    /// Humanize options from this config, with `tone` overriding the default.
    pub fn humanize_options(&self, tone: Option<Tone>) -> HumanizeOptions {
        HumanizeOptions {
            tone: tone.unwrap_or(self.tone),
            flag_threshold: self.flag_threshold,
            pass_threshold: self.pass_threshold,
            max_passes: self.max_passes,
        }
    }
}

/// Default level for the file log.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Everything, including per-feature scoring.
    Debug,
    /// Command lifecycle events.
    #[default]
    Info,
    /// Recoverable problems only.
    Warn,
    /// Failures only.
    Error,
}

impl LogLevel {
    /// Directive string accepted by `EnvFilter`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// The files a [`ConfigLoader::load`] call actually merged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// User file, if one existed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Project files in merge order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// Files named on the command line or added with [`ConfigLoader::with_file`].
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The file whose values won, ignoring environment overrides.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        fn last(files: &[Utf8PathBuf]) -> Option<&Utf8Path> {
            files.last().map(Utf8PathBuf::as_path)
        }
        last(&self.explicit_files)
            .or_else(|| last(&self.project_files))
            .or(self.user_file.as_deref())
    }
}

const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];
const APP_NAME: &str = "prosaic";
const ENV_PREFIX: &str = "PROSAIC_";
const REPO_MARKER: &str = ".git";

/// Collects config sources and merges them with figment.
#[derive(Debug)]
pub struct ConfigLoader {
    project_search_root: Option<Utf8PathBuf>,
    include_user_config: bool,
    stop_at_repo_root: bool,
    explicit_files: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// A loader that reads the user file and stops project search at `.git`.
    pub const fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            stop_at_repo_root: true,
            explicit_files: Vec::new(),
        }
    }

    /// Walk up from `path` looking for project files.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Toggle the user file under the platform config directory.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Keep walking past repository roots up to the filesystem root.
    pub const fn search_past_repo_root(mut self) -> Self {
        self.stop_at_repo_root = false;
        self
    }

    /// Merge `path` after discovered files; later calls win.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Merge every source and report which files took part.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Deserialize`] when a file cannot be parsed or
    /// a value has the wrong shape (for example an unknown tone).
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // PROSAIC_TONE=business, PROSAIC_SEED=7, etc.
        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            tone = config.tone.as_str(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Files from the closest directory that has any, dotfiles first.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();

            // Dotfiles first (lower precedence), then regular files.
            for stem in [format!(".{APP_NAME}"), APP_NAME.to_string()] {
                for ext in CONFIG_EXTENSIONS {
                    let candidate = dir.join(format!("{stem}.{ext}"));
                    if candidate.is_file() {
                        found.push(candidate);
                    }
                }
            }

            if !found.is_empty() {
                return found;
            }

            // A config beside the marker still counts.
            if self.stop_at_repo_root && dir != start && dir.join(REPO_MARKER).exists() {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let config_dir = user_config_dir()?;
        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|path| path.is_file())
    }

    /// Format follows the extension; anything unknown is read as TOML.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Platform config directory for prosaic, e.g. `~/.config/prosaic`.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    project_dirs().and_then(|dirs| Utf8PathBuf::from_path_buf(dirs.config_dir().into()).ok())
}

/// Machine-local data directory; the default home of the log file.
pub fn user_data_local_dir() -> Option<Utf8PathBuf> {
    project_dirs().and_then(|dirs| Utf8PathBuf::from_path_buf(dirs.data_local_dir().into()).ok())
}
