//! Integration tests: configuration documents through the full pipeline.

mod config_test;
mod pipeline_test;

pub(crate) const CONFIG_TOML: &str = include_str!("../data/config.toml");
