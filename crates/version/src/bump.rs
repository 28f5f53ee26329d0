use std::{fmt, str::FromStr};

use crate::{Error, Result};

const SEMVER_EXPECTED: &str = "x.y.z where x, y, and z are numbers";
const FONT_EXPECTED: &str = "major.minor (e.g. \"1.0\")";

/// Bump applied to the package version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    #[default]
    Patch,
}

impl FromStr for BumpKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            _ => Err(Error::InvalidBumpKind {
                target: "package",
                value: s.to_string(),
                allowed: "major, minor, patch",
            }),
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        })
    }
}

/// Bump applied to the font version. Fonts have no patch component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontBumpKind {
    Major,
    #[default]
    Minor,
}

impl FromStr for FontBumpKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            _ => Err(Error::InvalidBumpKind {
                target: "font",
                value: s.to_string(),
                allowed: "major, minor",
            }),
        }
    }
}

impl fmt::Display for FontBumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Major => "major",
            Self::Minor => "minor",
        })
    }
}

/// Package version (`major.minor.patch`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PackageVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl PackageVersion {
    pub fn bump(self, kind: BumpKind) -> Result<Self> {
        let overflow = || Error::Overflow(self.to_string());
        Ok(match kind {
            BumpKind::Major => Self {
                major: self.major.checked_add(1).ok_or_else(overflow)?,
                minor: 0,
                patch: 0,
            },
            BumpKind::Minor => Self {
                minor: self.minor.checked_add(1).ok_or_else(overflow)?,
                patch: 0,
                ..self
            },
            BumpKind::Patch => {
                Self { patch: self.patch.checked_add(1).ok_or_else(overflow)?, ..self }
            }
        })
    }
}

impl FromStr for PackageVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match parse_components(s).as_deref() {
            Some(&[major, minor, patch]) => Ok(Self { major, minor, patch }),
            _ => Err(Error::InvalidVersionFormat { value: s.to_string(), expected: SEMVER_EXPECTED }),
        }
    }
}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Font version (`major.minor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontVersion {
    pub major: u64,
    pub minor: u64,
}

impl FontVersion {
    pub fn bump(self, kind: FontBumpKind) -> Result<Self> {
        let overflow = || Error::Overflow(self.to_string());
        Ok(match kind {
            FontBumpKind::Major => {
                Self { major: self.major.checked_add(1).ok_or_else(overflow)?, minor: 0 }
            }
            FontBumpKind::Minor => {
                Self { minor: self.minor.checked_add(1).ok_or_else(overflow)?, ..self }
            }
        })
    }
}

impl FromStr for FontVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match parse_components(s).as_deref() {
            Some(&[major, minor]) => Ok(Self { major, minor }),
            _ => Err(Error::InvalidVersionFormat { value: s.to_string(), expected: FONT_EXPECTED }),
        }
    }
}

impl fmt::Display for FontVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Split on dots; every component must be a non-empty run of ASCII digits.
fn parse_components(s: &str) -> Option<Vec<u64>> {
    s.split('.')
        .map(|part| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            part.parse().ok()
        })
        .collect()
}

/// Bump a `major.minor.patch` string.
pub fn bump_semver(current: &str, kind: BumpKind) -> Result<String> {
    Ok(current.parse::<PackageVersion>()?.bump(kind)?.to_string())
}

/// Bump a `major.minor` string.
pub fn bump_font_version(current: &str, kind: FontBumpKind) -> Result<String> {
    Ok(current.parse::<FontVersion>()?.bump(kind)?.to_string())
}
