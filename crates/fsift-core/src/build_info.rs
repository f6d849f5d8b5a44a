//! Build metadata stamped in by `build.rs`.

/// Where and when this binary was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub rev: &'static str,
    pub built_at: &'static str,
    pub target: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            rev: option_env!("FSIFT_BUILD_GIT_SHA").unwrap_or("unknown"),
            built_at: option_env!("FSIFT_BUILD_TIMESTAMP").unwrap_or("unknown"),
            target: option_env!("FSIFT_BUILD_TARGET").unwrap_or("unknown"),
        }
    }

    /// `fsift 0.1.0 (abc1234 x86_64-unknown-linux-gnu, 2026-10-17T...)`
    pub fn version_line(&self, binary_name: &str) -> String {
        format!(
            "{binary_name} {} ({} {}, {})",
            self.version, self.rev, self.target, self.built_at
        )
    }
}
