use std::ops::Index;

/// Ordered display units for one reading session.
///
/// Immutable once built; a new text means a new sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitSequence {
    units: Vec<String>,
}

impl UnitSequence {
    pub fn new(units: Vec<String>) -> Self {
        debug_assert!(units.iter().all(|u| !u.is_empty()));
        Self { units }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.units.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.units
    }

    /// Index of the last unit, `None` when empty.
    pub fn last_index(&self) -> Option<usize> {
        self.units.len().checked_sub(1)
    }

    /// All units joined back together.
    pub fn concat(&self) -> String {
        self.units.concat()
    }
}

impl Index<usize> for UnitSequence {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.units[index]
    }
}

impl From<Vec<String>> for UnitSequence {
    fn from(units: Vec<String>) -> Self {
        Self::new(units)
    }
}

impl<'a> FromIterator<&'a str> for UnitSequence {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence() {
        let units = UnitSequence::default();
        assert!(units.is_empty());
        assert_eq!(units.last_index(), None);
        assert_eq!(units.get(0), None);
    }

    #[test]
    fn test_indexing() {
        let units: UnitSequence = ["美丽的", "花"].into_iter().collect();
        assert_eq!(units.len(), 2);
        assert_eq!(&units[1], "花");
        assert_eq!(units.get(0), Some("美丽的"));
        assert_eq!(units.last_index(), Some(1));
        assert_eq!(units.concat(), "美丽的花");
    }
}
