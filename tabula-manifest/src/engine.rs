use std::{fmt, str::FromStr};

use serde::Deserialize;

/// Database engine a project targets.
///
/// Each engine has its own catalog dialect in `tabula-schema`; the manifest
/// only records which one to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Mysql,
    Postgres,
}

impl Engine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mysql => "mysql",
            Self::Postgres => "postgres",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mysql" => Ok(Self::Mysql),
            "postgres" => Ok(Self::Postgres),
            _ => Err(format!(
                "unknown engine '{}', expected 'mysql' or 'postgres'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("mysql".parse::<Engine>().unwrap(), Engine::Mysql);
        assert_eq!("postgres".parse::<Engine>().unwrap(), Engine::Postgres);
        assert!("oracle".parse::<Engine>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for engine in [Engine::Mysql, Engine::Postgres] {
            assert_eq!(engine.to_string().parse::<Engine>().unwrap(), engine);
        }
    }
}
