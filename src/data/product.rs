/// Software product token, as found in `User-Agent` and `Server`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Product {
    pub name: String,
    pub version: Option<String>,
    pub comment: Option<String>,
}

impl Product {
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            comment: None,
        }
    }

    #[inline]
    pub fn with_version(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
            ..Self::new(name)
        }
    }
}
