use crate::cli::{CliError, OkEnvelope};
use naval_core::version;
use tracing::instrument;

/// Target triple exported by the build script
pub const TARGET: &str = env!("NAVAL_CLI_TARGET");

/// Produce the version output.
///
/// Plain mode prints exactly `naval-cli v<version>`; JSON mode wraps the
/// full build information in an envelope.
#[instrument]
pub fn execute_version(json: bool) -> Result<String, CliError> {
    let info = version::info(Some(TARGET));
    tracing::info!(build = %info, "Version information compiled");

    if json {
        let json = serde_json::to_string(&OkEnvelope::new(&info))
            .map_err(|e| CliError::other(format!("JSON serialization failed: {e}")))?;
        Ok(format!("{json}\n"))
    } else {
        Ok(format!("{}\n", version::version()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_version_is_exact() {
        let output = execute_version(false).unwrap();
        assert_eq!(output, format!("naval-cli v{}\n", env!("CARGO_PKG_VERSION")));
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_json_version_envelope() {
        let output = execute_version(true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["data"]["name"], "naval-cli");
        assert_eq!(value["data"]["version"], "1.0.0");
        assert_eq!(value["data"]["target"], TARGET);
    }
}
