use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Feet,
    Meters,
}

impl Unit {
    /// Name used by the elevation service in the `units` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Feet => "Feet",
            Unit::Meters => "Meters",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Unit::Feet => "as Feet",
            Unit::Meters => "as Meters",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("unknown unit '{0}', expected feet or meters")]
pub struct UnknownUnit(pub String);

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "feet" | "ft" => Ok(Unit::Feet),
            "meters" | "metres" | "m" => Ok(Unit::Meters),
            _ => Err(UnknownUnit(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("feet", Ok(Unit::Feet))]
    #[case("Feet", Ok(Unit::Feet))]
    #[case("FT", Ok(Unit::Feet))]
    #[case("meters", Ok(Unit::Meters))]
    #[case("Metres", Ok(Unit::Meters))]
    #[case("m", Ok(Unit::Meters))]
    #[case("yards", Err(UnknownUnit("yards".to_string())))]
    #[case("", Err(UnknownUnit("".to_string())))]
    fn parses_units(#[case] input: &str, #[case] expected: Result<Unit, UnknownUnit>) {
        assert_eq!(input.parse::<Unit>(), expected);
    }

    #[test]
    fn wire_names_match_the_service() {
        assert_eq!(Unit::Feet.to_string(), "Feet");
        assert_eq!(Unit::Meters.to_string(), "Meters");
    }
}
