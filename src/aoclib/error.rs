use derive_more::Display;

/// A line of puzzle input that doesn't have the expected shape.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[display(fmt = "cannot parse {:?} as {}; expected {}", input, what, expected)]
pub struct MalformedInput {
    input: String,
    what: &'static str,
    expected: &'static str,
}

impl MalformedInput {
    pub fn new(input: &str, what: &'static str, expected: &'static str) -> Self {
        Self {
            input: input.to_owned(),
            what,
            expected,
        }
    }
}

impl std::error::Error for MalformedInput {}
