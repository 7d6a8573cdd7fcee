// src/config.rs

use std::path::PathBuf;

/// Input/output locations for a single batch run.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: PathBuf::from("registrants.csv"),
            output_path: PathBuf::from("results.csv"),
        }
    }
}

impl Config {
    /// Build a config from positional arguments: `[input] [output]`,
    /// falling back to the defaults for anything not given.
    pub fn from_args<I>(mut args: I) -> Self
    where
        I: Iterator<Item = String>,
    {
        let mut config = Config::default();
        if let Some(input) = args.next() {
            config.input_path = PathBuf::from(input);
        }
        if let Some(output) = args.next() {
            config.output_path = PathBuf::from(output);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_no_args() {
        let config = Config::from_args(std::iter::empty());
        assert_eq!(config.input_path, PathBuf::from("registrants.csv"));
        assert_eq!(config.output_path, PathBuf::from("results.csv"));
    }

    #[test]
    fn positional_args_override_defaults() {
        let args = ["in.csv".to_string(), "out.csv".to_string()];
        let config = Config::from_args(args.into_iter());
        assert_eq!(config.input_path, PathBuf::from("in.csv"));
        assert_eq!(config.output_path, PathBuf::from("out.csv"));
    }

    #[test]
    fn input_only_keeps_default_output() {
        let args = ["in.csv".to_string()];
        let config = Config::from_args(args.into_iter());
        assert_eq!(config.input_path, PathBuf::from("in.csv"));
        assert_eq!(config.output_path, PathBuf::from("results.csv"));
    }
}
