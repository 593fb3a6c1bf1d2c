//! Declarative URL generation.
//!
//! A configuration tree describes URL parts per dotted path key, with
//! `{param}=value` branches for environment, locale or feature overrides.
//! [`UrlGenerator::get_url`] walks the tree ([`resolve`]) and compiles the
//! collected parts into a URL ([`compile`]).

pub mod compile;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod params;
pub mod parts;
pub mod resolve;
pub mod tree;

pub use error::{Result, UrlGenError};
pub use generator::{parse_path, UrlGenerator};
pub use params::{ParamValue, Params};
pub use parts::UrlParts;
pub use tree::{Condition, ConfigNode, Entry, PartValue, QueryConfig, UrlPart};
