use crate::domain::{MapPoint, Unit, UnknownUnit};
use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("missing {0}, expected '<x> <y> <feet|meters>'")]
    MissingField(&'static str),
    #[error("invalid {field} '{value}': {source}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        source: ParseFloatError,
    },
    #[error("{field} must be a finite number, got '{value}'")]
    NonFinite { field: &'static str, value: String },
    #[error(transparent)]
    UnknownUnit(#[from] UnknownUnit),
    #[error("unexpected trailing input '{0}'")]
    TrailingInput(String),
}

/// Parses a `<x> <y> <unit>` line, x and y being in the map's reference system.
pub fn parse_line(line: &str) -> Result<(MapPoint, Unit), InputError> {
    let mut fields = line.split_whitespace();

    let x = parse_number(fields.next(), "x")?;
    let y = parse_number(fields.next(), "y")?;
    let unit = fields.next().ok_or(InputError::MissingField("unit"))?.parse::<Unit>()?;

    let rest: Vec<&str> = fields.collect();
    if !rest.is_empty() {
        return Err(InputError::TrailingInput(rest.join(" ")));
    }

    Ok((MapPoint::new(x, y), unit))
}

fn parse_number(field: Option<&str>, name: &'static str) -> Result<f64, InputError> {
    let value = field.ok_or(InputError::MissingField(name))?;
    let number = value.parse::<f64>().map_err(|source| InputError::InvalidNumber {
        field: name,
        value: value.to_string(),
        source,
    })?;

    if !number.is_finite() {
        return Err(InputError::NonFinite {
            field: name,
            value: value.to_string(),
        });
    }
    Ok(number)
}
