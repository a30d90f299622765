use super::Parameters;

/// Expectation of the `Expect` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expectation {
    pub name: String,
    pub value: Option<String>,
    pub parameters: Parameters,
}

impl Expectation {
    #[inline]
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
            parameters: Parameters::new(),
        }
    }

    /// `100-continue`.
    #[inline]
    pub fn continue_response() -> Self {
        Self::new("100-continue", None)
    }
}
