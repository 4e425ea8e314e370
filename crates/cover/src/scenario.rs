use std::fmt::Display;
use std::str::FromStr;

use crate::Error;

/// Urban growth scenario of the prediction archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Scenario {
    /// Growth continues at the historically observed pace.
    Inertial,
    /// Accelerated growth.
    Accelerated,
    /// Growth constrained by planning policy.
    Controlled,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Inertial, Scenario::Accelerated, Scenario::Controlled];

    /// Directory name of the scenario in the remote archive.
    pub const fn remote_dir(self) -> &'static str {
        match self {
            Scenario::Inertial => "normal",
            Scenario::Accelerated => "fast",
            Scenario::Controlled => "slow",
        }
    }

    /// Tag used in local file names.
    pub const fn file_tag(self) -> &'static str {
        match self {
            Scenario::Inertial => "inertial",
            Scenario::Accelerated => "accelerated",
            Scenario::Controlled => "controlled",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Scenario::Inertial => "Inertial",
            Scenario::Accelerated => "Accelerated",
            Scenario::Controlled => "Controlled",
        }
    }
}

impl Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Scenario {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.file_tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidArgument(format!("Unknown scenario '{s}', expected one of: inertial, accelerated, controlled")))
    }
}
