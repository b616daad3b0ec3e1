use crate::StackEntry;

/// A stack flattened to display symbols and decimal numerals, in push order.
///
/// This is the only form in which a stack leaves a brain. It carries no type tags, so a
/// receiving brain resolves registry symbols first and numerals second.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program(Vec<String>);

impl Program {
    pub(crate) fn from_entries(entries: &[StackEntry]) -> Self {
        Program(entries.iter().map(StackEntry::to_string).collect())
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Program {
    fn from(tokens: Vec<String>) -> Self {
        Program(tokens)
    }
}

impl<S: Into<String>> FromIterator<S> for Program {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Program(iter.into_iter().map(Into::into).collect())
    }
}
