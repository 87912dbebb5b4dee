use crate::format::ordinal;
use crate::grapher::Domain;
use anyhow::{Context, Result};
use log::debug;
use std::fmt;
use std::io::{BufRead, Write};

/// Something that can show a prompt and hand back one line of text.
pub trait LineSource {
    /// Returns `None` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
    fn say(&mut self, message: &str) -> Result<()>;
}

/// Plain buffered reader/writer pair. Stdin/stdout in the binary, in-memory
/// buffers in tests.
pub struct StdStreams<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StdStreams<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        StdStreams { reader, writer }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> LineSource for StdStreams<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    InvalidDegree,
    NegativeDegree,
    InvalidCoefficient,
    ZeroLeadingCoefficient { degree: usize },
    InvalidEndpoint,
    EndpointOrder,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidDegree => write!(f, "The degree should be a positive integer."),
            InputError::NegativeDegree => write!(f, "The degree cannot be negative."),
            InputError::InvalidCoefficient => write!(f, "That is not a valid coefficient."),
            InputError::ZeroLeadingCoefficient { degree } => write!(
                f,
                "The {} coefficient of a degree {} polynomial cannot be 0.",
                ordinal(*degree),
                degree
            ),
            InputError::InvalidEndpoint => write!(f, "Please enter a number."),
            InputError::EndpointOrder => {
                write!(f, "Your right endpoint must occur after your left endpoint.")
            }
        }
    }
}

impl std::error::Error for InputError {}

pub fn parse_degree(text: &str) -> Result<usize, InputError> {
    let value: i64 = text.trim().parse().map_err(|_| InputError::InvalidDegree)?;
    usize::try_from(value).map_err(|_| InputError::NegativeDegree)
}

/// The coefficient of x^`power` in a polynomial of `degree`. The leading
/// coefficient may only be zero for a constant.
pub fn parse_coefficient(text: &str, power: usize, degree: usize) -> Result<f64, InputError> {
    let value: f64 = text.trim().parse().map_err(|_| InputError::InvalidCoefficient)?;
    if power != 0 && power == degree && value == 0.0 {
        return Err(InputError::ZeroLeadingCoefficient { degree });
    }
    Ok(value)
}

pub fn parse_endpoint(text: &str) -> Result<f64, InputError> {
    text.trim().parse().map_err(|_| InputError::InvalidEndpoint)
}

pub fn parse_right_endpoint(text: &str, left: f64) -> Result<Domain, InputError> {
    let right = parse_endpoint(text)?;
    Domain::new(left, right)
}

/// Prompts until `validate` accepts the answer. Rejections are reported
/// through the source and never escape; only a closed input does.
pub fn ask<S, T, F>(source: &mut S, prompt: &str, field: &str, mut validate: F) -> Result<T>
where
    S: LineSource + ?Sized,
    F: FnMut(&str) -> Result<T, InputError>,
{
    loop {
        let line = source
            .read_line(prompt)?
            .with_context(|| format!("input closed while waiting for the {}", field))?;

        match validate(&line) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!("rejected {} {:?}: {:?}", field, line, e);
                source.say(&e.to_string())?;
            }
        }
    }
}

pub fn collect_coefficients<S: LineSource + ?Sized>(source: &mut S) -> Result<Vec<f64>> {
    let degree = ask(source, "What is the degree of your polynomial? ", "degree", parse_degree)?;

    // grows with the answers; the degree alone may be absurdly large
    let mut coefficients = Vec::new();
    for power in 0..=degree {
        let prompt = format!("What is the {} coefficient? ", ordinal(power));
        let field = format!("{} coefficient", ordinal(power));
        let coefficient = ask(source, &prompt, &field, |text| {
            parse_coefficient(text, power, degree)
        })?;
        coefficients.push(coefficient);
    }
    Ok(coefficients)
}

pub fn collect_domain<S: LineSource + ?Sized>(source: &mut S) -> Result<Domain> {
    let left = ask(source, "What is your leftmost endpoint? ", "left endpoint", parse_endpoint)?;
    ask(source, "What is your rightmost endpoint? ", "right endpoint", |text| {
        parse_right_endpoint(text, left)
    })
}
