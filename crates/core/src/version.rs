use serde::{Deserialize, Serialize};
use std::fmt;

/// Name the binary reports itself as
pub const NAME: &str = "naval-cli";
/// Semantic version of this build
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEV_BUILD: &str = "dev";
const UNKNOWN: &str = "unknown";

/// Version line in the exact form `naval-cli v<semver>`
#[must_use]
pub fn version() -> String {
    format!("{NAME} v{VERSION}")
}

/// Bare semantic version
#[must_use]
pub const fn short() -> &'static str {
    VERSION
}

/// Version plus build metadata injected at compile time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    /// Binary name
    pub name: String,
    /// Semantic version
    pub version: String,
    /// Commit the build was made from
    pub git_commit: String,
    /// Build date, `dev` for local builds
    pub build_date: String,
    /// Target triple
    pub target: String,
}

impl BuildInfo {
    /// True when no build date was injected
    #[must_use]
    pub fn is_dev(&self) -> bool {
        self.build_date == DEV_BUILD
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}", self.name, self.version)?;
        if self.is_dev() {
            write!(f, " (development build)")
        } else {
            write!(f, " (built: {}, commit: {})", self.build_date, self.git_commit)
        }
    }
}

/// Build information for the running binary.
///
/// `target` is supplied by the caller because only the binary crate's build
/// script knows the target triple.
#[must_use]
pub fn info(target: Option<&str>) -> BuildInfo {
    let info = BuildInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        git_commit: option_env!("NAVAL_CLI_GIT_COMMIT")
            .unwrap_or(UNKNOWN)
            .to_string(),
        build_date: option_env!("NAVAL_CLI_BUILD_DATE")
            .unwrap_or(DEV_BUILD)
            .to_string(),
        target: target.unwrap_or(UNKNOWN).to_string(),
    };

    tracing::debug!(
        version = %info.version,
        git_commit = %info.git_commit,
        build_date = %info.build_date,
        target = %info.target,
        "Gathered build information"
    );

    info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        assert_eq!(version(), format!("naval-cli v{}", env!("CARGO_PKG_VERSION")));
        assert_eq!(version(), "naval-cli v1.0.0");
        assert_eq!(short(), "1.0.0");
    }

    #[test]
    fn test_build_info_display() {
        let mut info = BuildInfo {
            name: NAME.to_string(),
            version: "1.0.0".to_string(),
            git_commit: UNKNOWN.to_string(),
            build_date: DEV_BUILD.to_string(),
            target: UNKNOWN.to_string(),
        };
        assert!(info.is_dev());
        assert_eq!(info.to_string(), "naval-cli v1.0.0 (development build)");

        info.build_date = "2024-01-01".to_string();
        info.git_commit = "abc1234".to_string();
        assert_eq!(
            info.to_string(),
            "naval-cli v1.0.0 (built: 2024-01-01, commit: abc1234)"
        );
    }

    #[test]
    fn test_info_uses_supplied_target() {
        let build = info(Some("x86_64-unknown-linux-gnu"));
        assert_eq!(build.target, "x86_64-unknown-linux-gnu");
        assert_eq!(build.version, VERSION);
        assert!(build.to_string().starts_with("naval-cli v1.0.0"));
        assert_eq!(info(None).target, "unknown");
    }
}
