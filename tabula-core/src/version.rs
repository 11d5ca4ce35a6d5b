use std::{fmt, str::FromStr};

/// Marker scanned for in generated artifact headers.
const VERSION_TAG: &str = "@version ";

/// Minor step applied on each regeneration.
const MINOR_STEP: u32 = 10;

/// A `major.minor` version tag embedded in generated artifact headers.
///
/// The minor component is always rendered zero-padded to two digits
/// (`1.00`, `1.10`, `2.05`). External tooling parses this exact pattern to
/// track regeneration history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    major: u32,
    minor: u32,
}

impl Version {
    /// Tag assigned to a freshly generated artifact.
    pub const INITIAL: Self = Self { major: 1, minor: 0 };

    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// Extract the version tag from existing artifact text.
    ///
    /// A missing or unparseable tag is not an error; regeneration starts
    /// over from [`Version::INITIAL`].
    pub fn from_artifact(text: &str) -> Self {
        text.lines()
            .find_map(|line| {
                let (_, rest) = line.split_once(VERSION_TAG)?;
                rest.split_whitespace().next()?.parse().ok()
            })
            .unwrap_or(Self::INITIAL)
    }

    /// The tag for the next regeneration.
    ///
    /// Steps the minor component by 10. Past `.90` the major component
    /// rolls forward and minor resets, so the tag never needs a third
    /// digit (`2.90` -> `3.00`).
    pub fn next(self) -> Self {
        let minor = self.minor + MINOR_STEP;
        if minor > 99 {
            Self {
                major: self.major + 1,
                minor: 0,
            }
        } else {
            Self {
                major: self.major,
                minor,
            }
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.major, self.minor)
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, minor) = s
            .split_once('.')
            .ok_or_else(|| format!("invalid version '{}', expected 'X.YY'", s))?;
        Ok(Self {
            major: major.parse().map_err(|_| "invalid major")?,
            minor: minor.parse().map_err(|_| "invalid minor")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_minor() {
        assert_eq!(Version::INITIAL.to_string(), "1.00");
        assert_eq!(Version::new(1, 10).to_string(), "1.10");
        assert_eq!(Version::new(2, 5).to_string(), "2.05");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("1.00".parse::<Version>().unwrap(), Version::new(1, 0));
        assert_eq!("2.40".parse::<Version>().unwrap(), Version::new(2, 40));
        assert!("1".parse::<Version>().is_err());
        assert!("a.b".parse::<Version>().is_err());
        assert!("".parse::<Version>().is_err());
    }

    #[test]
    fn test_next_sequence() {
        let v = Version::INITIAL;
        let v = v.next();
        assert_eq!(v.to_string(), "1.10");
        let v = v.next();
        assert_eq!(v.to_string(), "1.20");
        let v = v.next();
        assert_eq!(v.to_string(), "1.30");
    }

    #[test]
    fn test_next_rolls_major_past_ninety() {
        assert_eq!(Version::new(2, 90).next(), Version::new(3, 0));
        assert_eq!(Version::new(2, 99).next(), Version::new(3, 0));
    }

    #[test]
    fn test_from_artifact() {
        let text = "<?php\n/**\n * @version 2.40\n */\n";
        assert_eq!(Version::from_artifact(text), Version::new(2, 40));
    }

    #[test]
    fn test_from_artifact_missing_tag() {
        assert_eq!(Version::from_artifact(""), Version::INITIAL);
        assert_eq!(Version::from_artifact("<?php\nclass Foo {}\n"), Version::INITIAL);
    }

    #[test]
    fn test_from_artifact_unparseable_tag() {
        let text = "/* @version not-a-number */";
        assert_eq!(Version::from_artifact(text), Version::INITIAL);
    }
}
