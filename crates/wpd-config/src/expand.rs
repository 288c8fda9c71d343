//! `${VAR}` expansion in configuration strings.

use crate::ConfigError;

/// Unset variable reported by the lookup closure.
struct UnsetVar(String);

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// An unset `${VAR}` without default is an error naming `field`. Bare `$VAR`
/// is left as-is so URLs containing `$` survive.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let lookup = |var: &str| {
        std::env::var(var)
            .map(Some)
            .map_err(|_| UnsetVar(var.to_owned()))
    };

    shellexpand::env_with_context(value, lookup)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.cause.0),
        })
}
