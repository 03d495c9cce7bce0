//! A fixed-column decoder for the NORAD two-line element format

use crate::{checksum, LINE_LENGTH, NAME_LENGTH};
use nom::{bytes::complete::take, character::complete::anychar, error::ErrorKind};
use std::str::FromStr;
use tletypes::{prelude::*, time::resolve_two_digit_year};
use tracing::debug;

pub type Result<I, O, E = FormatError> = std::result::Result<(I, O), nom::Err<E>>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Expected 2 or 3 lines, found {0}")]
    WrongLineCount(usize),
    #[error("Line {line} has {len} columns, expected {}", LINE_LENGTH)]
    LineLength { line: u8, len: usize },
    #[error("Checksum mismatch on line {0}")]
    ChecksumMismatch(u8),
    #[error("Invalid field '{0}'")]
    InvalidField(&'static str),
}

/// Decode a two or three line record into a validated element set
pub fn parse(text: &str) -> std::result::Result<OrbitalElementSet, FormatError> {
    let tle = split_record(text)?;
    decode(&tle)
}

/// Split a record into its optional name line and two data lines.
///
/// Surrounding blank lines, trailing whitespace and CR line endings are ignored.
pub fn split_record(text: &str) -> std::result::Result<UnstructuredTle<'_>, FormatError> {
    let lines: Vec<&str> = text
        .trim_matches(|c| c == '\n' || c == '\r')
        .lines()
        .map(str::trim_end)
        .collect();

    match lines.as_slice() {
        [line1, line2] => Ok(UnstructuredTle {
            satellite_name: None,
            line1,
            line2,
        }),
        [name, line1, line2] => Ok(UnstructuredTle {
            satellite_name: Some(name_field(name)).filter(|n| !n.is_empty()),
            line1,
            line2,
        }),
        _ => Err(FormatError::WrongLineCount(lines.len())),
    }
}

/// Decode the data lines of an already split record
pub fn decode(tle: &UnstructuredTle<'_>) -> std::result::Result<OrbitalElementSet, FormatError> {
    check_length(tle.line1, 1)?;
    check_length(tle.line2, 2)?;
    checksum::verify(tle.line1, 1)?;
    checksum::verify(tle.line2, 2)?;

    let (_, l1) = line1(tle.line1)?;
    let (_, l2) = line2(tle.line2)?;

    if l1.catalog_number != l2.catalog_number {
        debug!(
            line1 = l1.catalog_number,
            line2 = l2.catalog_number,
            "Catalog numbers disagree"
        );
        return Err(FormatError::InvalidField("catalogNumber"));
    }

    let set = OrbitalElementSet::new(ElementSetFields {
        satellite_name: tle.satellite_name.map(str::to_owned),
        catalog_number: l1.catalog_number,
        classification: l1.classification,
        designator: l1.designator,
        epoch_year: l1.epoch_year,
        epoch_day: l1.epoch_day,
        ephemeris_type: l1.ephemeris_type,
        element_set_number: l1.element_set_number,
        elements: l2.elements,
        drag: l1.drag,
        revolution_number: l2.revolution_number,
    })
    .map_err(|InvalidElement(field)| {
        debug!(field, "Element out of range");
        FormatError::InvalidField(field)
    })?;

    debug!(
        catalog_number = set.catalog_number(),
        epoch = %set.epoch(),
        "Decoded element set"
    );
    Ok(set)
}

fn name_field(line: &str) -> &str {
    let end = line
        .char_indices()
        .nth(NAME_LENGTH)
        .map_or(line.len(), |(idx, _)| idx);
    line[..end].trim()
}

fn check_length(line: &str, line_number: u8) -> std::result::Result<(), FormatError> {
    let len = line.chars().count();
    if len == LINE_LENGTH {
        Ok(())
    } else {
        Err(FormatError::LineLength {
            line: line_number,
            len,
        })
    }
}

/// Line 1 fields
#[derive(Clone, Debug)]
struct Line1 {
    catalog_number: u32,
    classification: Classification,
    designator: Option<InternationalDesignator>,
    epoch_year: i32,
    epoch_day: f64,
    drag: DragTerms,
    ephemeris_type: u8,
    element_set_number: u16,
}

/// Line 2 fields
#[derive(Clone, Debug)]
struct Line2 {
    catalog_number: u32,
    elements: MeanElements,
    revolution_number: u32,
}

// Column numbers below are 1-based and inclusive.
fn line1(s: &str) -> Result<&str, Line1> {
    let (s, _) = line_number('1')(s)?; // 1
    let (s, _) = gap(s)?;
    let (s, catalog_number) = field("catalogNumber", 5, unsigned)(s)?; // 3-7
    let (s, classification) = field("classification", 1, classification)(s)?; // 8
    let (s, _) = gap(s)?;
    let (s, designator) = field("internationalDesignator", 8, designator)(s)?; // 10-17
    let (s, _) = gap(s)?;
    let (s, epoch_year) = field("epochYear", 2, two_digit_year)(s)?; // 19-20
    let (s, epoch_day) = field("epochDay", 12, decimal)(s)?; // 21-32
    let (s, _) = gap(s)?;
    let (s, mean_motion_dot) = field("meanMotionDot", 10, decimal)(s)?; // 34-43
    let (s, _) = gap(s)?;
    let (s, mean_motion_ddot) = field("meanMotionDdot", 8, exponent)(s)?; // 45-52
    let (s, _) = gap(s)?;
    let (s, bstar) = field("bstar", 8, exponent)(s)?; // 54-61
    let (s, _) = gap(s)?;
    let (s, ephemeris_type) = field("ephemerisType", 1, ephemeris_type)(s)?; // 63
    let (s, _) = gap(s)?;
    let (s, element_set_number) = field("elementSetNumber", 4, unsigned)(s)?; // 65-68
    Ok((
        s,
        Line1 {
            catalog_number,
            classification,
            designator,
            epoch_year,
            epoch_day,
            drag: DragTerms {
                mean_motion_dot,
                mean_motion_ddot,
                bstar,
            },
            ephemeris_type,
            element_set_number,
        },
    ))
}

fn line2(s: &str) -> Result<&str, Line2> {
    let (s, _) = line_number('2')(s)?; // 1
    let (s, _) = gap(s)?;
    let (s, catalog_number) = field("catalogNumber", 5, unsigned)(s)?; // 3-7
    let (s, _) = gap(s)?;
    let (s, inclination) = field("inclination", 8, decimal)(s)?; // 9-16
    let (s, _) = gap(s)?;
    let (s, right_ascension) = field("rightAscension", 8, decimal)(s)?; // 18-25
    let (s, _) = gap(s)?;
    let (s, eccentricity) = field("eccentricity", 7, implied_decimal)(s)?; // 27-33
    let (s, _) = gap(s)?;
    let (s, argument_of_perigee) = field("argumentOfPerigee", 8, decimal)(s)?; // 35-42
    let (s, _) = gap(s)?;
    let (s, mean_anomaly) = field("meanAnomaly", 8, decimal)(s)?; // 44-51
    let (s, _) = gap(s)?;
    let (s, mean_motion) = field("meanMotion", 11, decimal)(s)?; // 53-63
    let (s, revolution_number) = field("revolutionNumber", 5, unsigned)(s)?; // 64-68
    Ok((
        s,
        Line2 {
            catalog_number,
            elements: MeanElements {
                inclination,
                right_ascension,
                eccentricity,
                argument_of_perigee,
                mean_anomaly,
                mean_motion,
            },
            revolution_number,
        },
    ))
}

/// Take `width` columns and decode them, failing with the field's name
fn field<'a, O, F>(
    name: &'static str,
    width: usize,
    decode: F,
) -> impl FnMut(&'a str) -> Result<&'a str, O>
where
    F: Fn(&'a str) -> Option<O>,
{
    move |s: &'a str| {
        let (s, raw) = take::<_, _, FormatError>(width)(s)
            .map_err(|_| nom::Err::Failure(FormatError::InvalidField(name)))?;
        match decode(raw) {
            Some(v) => Ok((s, v)),
            None => {
                debug!(field = name, raw, "Rejected TLE field");
                Err(nom::Err::Failure(FormatError::InvalidField(name)))
            }
        }
    }
}

/// Separator column, content is not checked
fn gap(s: &str) -> Result<&str, char> {
    anychar(s)
}

fn line_number<'a>(expected: char) -> impl FnMut(&'a str) -> Result<&'a str, ()> {
    field("lineNumber", 1, move |raw: &str| {
        raw.starts_with(expected).then_some(())
    })
}

fn unsigned<T: FromStr>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Plain decimal, the leading zero may be omitted (e.g. "-.00002182")
fn decimal(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let well_formed = raw
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-'));
    if raw.is_empty() || !well_formed {
        return None;
    }
    raw.parse().ok().filter(|v: &f64| v.is_finite())
}

/// Digits with an implied leading "0."
fn implied_decimal(raw: &str) -> Option<f64> {
    let digits = raw.trim();
    unsigned::<u64>(digits)?;
    format!("0.{digits}").parse().ok()
}

/// Exponent notation with an implied leading "0.", e.g. "-11606-4" is -0.11606e-4
fn exponent(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.len() < 3 || !raw.is_ascii() {
        return None;
    }
    let (mantissa, exp) = raw.split_at(raw.len() - 2);
    let (sign, digits) = match mantissa.as_bytes()[0] {
        b'-' => ("-", &mantissa[1..]),
        b'+' => ("", &mantissa[1..]),
        _ => ("", mantissa),
    };
    unsigned::<u64>(digits)?;
    let exp: i32 = exp.parse().ok()?;
    let mantissa: f64 = format!("{sign}0.{digits}").parse().ok()?;
    Some(mantissa * 10_f64.powi(exp))
}

fn two_digit_year(raw: &str) -> Option<i32> {
    if raw.len() != 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u8>().ok().map(resolve_two_digit_year)
}

fn classification(raw: &str) -> Option<Classification> {
    raw.chars().next().and_then(Classification::from_char)
}

/// Blank means the default model, 0
fn ephemeris_type(raw: &str) -> Option<u8> {
    match raw.chars().next()? {
        ' ' => Some(0),
        c => c.to_digit(10).map(|d| d as u8),
    }
}

/// Columns 10-17: launch year, launch number, piece. All blank is `None`.
fn designator(raw: &str) -> Option<Option<InternationalDesignator>> {
    if raw.trim().is_empty() {
        return Some(None);
    }
    if !raw.is_ascii() {
        return None;
    }
    let launch_year = two_digit_year(&raw[..2])?;
    let launch_number = unsigned(&raw[2..5])?;
    let launch_piece = raw[5..].trim();
    if launch_piece.is_empty() || !launch_piece.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some(Some(InternationalDesignator {
        launch_year,
        launch_number,
        launch_piece: launch_piece.to_owned(),
    }))
}

impl<I> nom::error::ParseError<I> for FormatError {
    fn from_error_kind(_: I, _: ErrorKind) -> Self {
        FormatError::InvalidField("record")
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl From<nom::Err<FormatError>> for FormatError {
    fn from(e: nom::Err<FormatError>) -> Self {
        match e {
            nom::Err::Error(e) | nom::Err::Failure(e) => e,
            nom::Err::Incomplete(_) => FormatError::InvalidField("record"),
        }
    }
}
