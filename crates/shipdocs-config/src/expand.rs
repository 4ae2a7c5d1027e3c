//! Environment variable expansion for configuration strings.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` is the dotted config path reported on failure.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set ({})", e.var_name, e.cause),
        })
}

/// Expand an optional value, leaving `None` untouched.
pub(crate) fn expand_opt(value: Option<String>, field: &str) -> Result<Option<String>, ConfigError> {
    value.map(|v| expand_env(&v, field)).transpose()
}
