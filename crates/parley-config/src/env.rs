use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Failure while expanding a placeholder
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    #[error("environment variable not found: `{0}`")]
    MissingVariable(String),
    #[error("only variables scoped with 'env.' are supported: `{0}`")]
    UnsupportedScope(String),
}

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `{{ env.VAR }}` or `{{ env.VAR | default("fallback") }}`
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([A-Za-z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#).expect("must be valid regex")
    })
}

/// Expand `{{ env.VAR }}` placeholders in raw TOML text
///
/// `{{ env.VAR | default("x") }}` falls back to `x` when `VAR` is unset.
/// Comment lines are copied through untouched, so a commented-out secret
/// never has to exist in the environment.
pub fn expand_env(input: &str) -> Result<String, ExpandError> {
    let mut lines = Vec::new();

    for line in input.split('\n') {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut failure = None;
        let expanded = placeholder().replace_all(line, |caps: &Captures<'_>| {
            resolve(&caps[1], caps.get(2).map(|m| m.as_str())).unwrap_or_else(|e| {
                failure.get_or_insert(e);
                String::new()
            })
        });

        if let Some(e) = failure {
            return Err(e);
        }

        lines.push(expanded.into_owned());
    }

    Ok(lines.join("\n"))
}

fn resolve(key: &str, default: Option<&str>) -> Result<String, ExpandError> {
    let Some(name) = key.strip_prefix("env.").filter(|name| !name.contains('.')) else {
        return Err(ExpandError::UnsupportedScope(key.to_string()));
    };

    match (std::env::var(name), default) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(default)) => Ok(default.to_string()),
        (Err(_), None) => Err(ExpandError::MissingVariable(name.to_string())),
    }
}
