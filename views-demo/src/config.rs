//! Runner configuration

use std::fs;
use std::path::{Path, PathBuf};

use clap::{value_parser, Arg, ArgMatches, Command};
use serde::{Deserialize, Serialize};
use tracing::Level;
use views_core::RunConfig;

use crate::error::{Error, Result};
use crate::registry::Demo;

/// Environment variable naming a JSON configuration file
pub const CONFIG_ENV: &str = "VIEWS_DEMO_CONFIG";

/// Command-line interface of the runner
///
/// `--config` falls back to the path in [`CONFIG_ENV`] when it is not given.
pub fn command() -> Command {
    Command::new("views-demo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Runs lazy view demonstrations next to their index-based equivalents")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .env(CONFIG_ENV)
                .value_parser(value_parser!(PathBuf))
                .help("Path to a JSON configuration file"),
        )
}

/// Configuration for the demonstration runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Maximum tracing level: `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,

    /// Demonstrations to run by name; empty runs all of them
    pub demos: Vec<String>,

    /// How each demonstration's view is drained
    pub run: RunConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            demos: Vec::new(),
            run: RunConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Parse a configuration from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Load the file named by parsed [`command`] arguments, or defaults
    /// when neither the flag nor the environment names one
    pub fn resolve(matches: &ArgMatches) -> Result<Self> {
        match matches.get_one::<PathBuf>("config") {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// The configured tracing level
    pub fn level(&self) -> Result<Level> {
        self.log_level
            .parse()
            .map_err(|_| Error::Config(format!("invalid log level: {}", self.log_level)))
    }

    /// The demonstrations to run, in order
    pub fn selected(&self) -> Result<Vec<Demo>> {
        if self.demos.is_empty() {
            return Ok(Demo::ALL.to_vec());
        }
        self.demos.iter().map(String::as_str).map(Demo::from_name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.level().unwrap(), Level::INFO);
        assert_eq!(config.selected().unwrap().len(), Demo::ALL.len());
        assert_eq!(config.run, RunConfig::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DemoConfig::from_json(r#"{"demos": ["zip", "split"]}"#).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.selected().unwrap(), vec![Demo::Zip, Demo::Split]);
    }

    #[test]
    fn test_unknown_demo_is_rejected() {
        let config = DemoConfig::from_json(r#"{"demos": ["teleport"]}"#).unwrap();
        assert!(matches!(config.selected(), Err(Error::Config(_))));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(matches!(
            DemoConfig::from_json(r#"{"colour": "blue"}"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_invalid_level() {
        let config = DemoConfig {
            log_level: "loud".into(),
            ..DemoConfig::default()
        };
        assert!(matches!(config.level(), Err(Error::Config(_))));
    }

    fn config_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{json}").unwrap();
        file
    }

    #[test]
    fn test_load_from_flag() {
        let file = config_file(
            r#"{"log_level": "debug", "run": {"limit": 2, "flush_each": true}}"#,
        );
        let args = [
            OsStr::new("views-demo"),
            OsStr::new("--config"),
            file.path().as_os_str(),
        ];
        let matches = command().try_get_matches_from(args).unwrap();

        let config = DemoConfig::resolve(&matches).unwrap();
        assert_eq!(config.level().unwrap(), Level::DEBUG);
        assert_eq!(config.run.limit, Some(2));
        assert!(config.run.flush_each);
    }

    // The only test that touches the process environment.
    #[test]
    fn test_environment_names_config_file() {
        let from_env = config_file(r#"{"log_level": "warn"}"#);
        let from_flag = config_file(r#"{"log_level": "trace"}"#);
        std::env::set_var(CONFIG_ENV, from_env.path());

        let matches = command().try_get_matches_from(["views-demo"]).unwrap();
        let env_config = DemoConfig::resolve(&matches);

        let args = [
            OsStr::new("views-demo"),
            OsStr::new("-c"),
            from_flag.path().as_os_str(),
        ];
        let matches = command().try_get_matches_from(args).unwrap();
        let flag_config = DemoConfig::resolve(&matches);

        std::env::remove_var(CONFIG_ENV);
        assert_eq!(env_config.unwrap().level().unwrap(), Level::WARN);
        assert_eq!(flag_config.unwrap().level().unwrap(), Level::TRACE);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_is_loaded_not_ignored() {
        use std::os::unix::ffi::OsStrExt;

        let path = OsStr::from_bytes(b"/nonexistent/views-\xff.json");
        let matches = command()
            .try_get_matches_from([OsStr::new("views-demo"), OsStr::new("--config"), path])
            .unwrap();
        assert!(matches!(DemoConfig::resolve(&matches), Err(Error::Io(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(matches!(DemoConfig::load(missing), Err(Error::Io(_))));
    }
}
