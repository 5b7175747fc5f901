/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Suites get a `##` title and description unless a config turns it off
pub const DEFAULT_INCLUDE_SUITE_HEADERS: bool = true;
/// Config files with this extension are parsed as TOML; everything else as YAML
pub const TOML_EXTENSION: &str = "toml";
