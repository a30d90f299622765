/// Name and optional value pair, as found after `;` in most structured headers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub name: String,
    pub value: Option<String>,
}

impl Parameter {
    /// Create new [`Parameter`] with a value.
    #[inline]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Create new [`Parameter`] without value.
    #[inline]
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Returns the value as string slice.
    #[inline]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Ordered list of [`Parameter`].
///
/// Names may repeat, lookup returns the first match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Parameters {
    list: Vec<Parameter>,
}

impl Parameters {
    /// Create new empty [`Parameters`].
    #[inline]
    pub const fn new() -> Self {
        Self { list: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[inline]
    pub fn push(&mut self, param: Parameter) {
        self.list.push(param);
    }

    /// Append a parameter, builder style.
    #[inline]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.list.push(Parameter::new(name, value));
        self
    }

    /// Returns the first parameter with the given name.
    pub fn first(&self, name: &str, ignore_case: bool) -> Option<&Parameter> {
        self.list.iter().find(|e| eq_name(&e.name, name, ignore_case))
    }

    /// Returns the value of the first parameter with the given name.
    pub fn first_value(&self, name: &str, ignore_case: bool) -> Option<&str> {
        self.first(name, ignore_case).and_then(Parameter::value)
    }

    /// Removes and returns the first parameter with the given name.
    pub fn remove_first(&mut self, name: &str, ignore_case: bool) -> Option<Parameter> {
        let index = self.list.iter().position(|e| eq_name(&e.name, name, ignore_case))?;
        Some(self.list.remove(index))
    }

    /// Replace the value of the first parameter with the given name, or append it.
    pub fn set(&mut self, name: &str, value: impl Into<String>, ignore_case: bool) {
        match self.list.iter_mut().find(|e| eq_name(&e.name, name, ignore_case)) {
            Some(param) => param.value = Some(value.into()),
            None => self.list.push(Parameter::new(name, value)),
        }
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.list.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Parameter] {
        &self.list
    }
}

fn eq_name(a: &str, b: &str, ignore_case: bool) -> bool {
    if ignore_case {
        a.eq_ignore_ascii_case(b)
    } else {
        a == b
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a Parameter;

    type IntoIter = std::slice::Iter<'a, Parameter>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}

impl IntoIterator for Parameters {
    type Item = Parameter;

    type IntoIter = std::vec::IntoIter<Parameter>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl FromIterator<Parameter> for Parameters {
    fn from_iter<T: IntoIterator<Item = Parameter>>(iter: T) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl Extend<Parameter> for Parameters {
    fn extend<T: IntoIterator<Item = Parameter>>(&mut self, iter: T) {
        self.list.extend(iter);
    }
}
