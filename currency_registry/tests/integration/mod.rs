mod common;
mod genesis_from_config;
mod properties;
mod scenarios;
