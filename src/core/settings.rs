//! Build settings - the externally supplied axes a package's identity depends on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Names of the settings a descriptor may declare.
pub const BUILD_TYPE: &str = "build_type";

/// Build type selected by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BuildType {
    Debug,
    #[default]
    Release,
    RelWithDebInfo,
    MinSizeRel,
}

impl BuildType {
    /// All build types, in declaration order.
    pub const ALL: [BuildType; 4] = [
        BuildType::Debug,
        BuildType::Release,
        BuildType::RelWithDebInfo,
        BuildType::MinSizeRel,
    ];

    /// Canonical spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildType::Debug => "Debug",
            BuildType::Release => "Release",
            BuildType::RelWithDebInfo => "RelWithDebInfo",
            BuildType::MinSizeRel => "MinSizeRel",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuildType::ALL
            .iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| {
                format!(
                    "unknown build type `{}` (expected one of: Debug, Release, RelWithDebInfo, MinSizeRel)",
                    s
                )
            })
    }
}

/// Settings values supplied for one package invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BuildSettings {
    pub build_type: BuildType,
}

impl BuildSettings {
    /// Create settings with the given build type.
    pub fn new(build_type: BuildType) -> Self {
        BuildSettings { build_type }
    }

    /// Look up a setting value by name.
    pub fn value(&self, name: &str) -> Option<String> {
        match name {
            BUILD_TYPE => Some(self.build_type.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_type_parse_case_insensitive() {
        assert_eq!("debug".parse::<BuildType>().unwrap(), BuildType::Debug);
        assert_eq!("RELEASE".parse::<BuildType>().unwrap(), BuildType::Release);
        assert_eq!(
            "relwithdebinfo".parse::<BuildType>().unwrap(),
            BuildType::RelWithDebInfo
        );
        assert!("fast".parse::<BuildType>().is_err());
    }

    #[test]
    fn test_settings_value() {
        let settings = BuildSettings::new(BuildType::MinSizeRel);
        assert_eq!(settings.value(BUILD_TYPE).as_deref(), Some("MinSizeRel"));
        assert_eq!(settings.value("os"), None);
    }

    #[test]
    fn test_default_is_release() {
        assert_eq!(BuildSettings::default().build_type, BuildType::Release);
    }
}
