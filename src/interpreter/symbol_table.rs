use std::collections::HashMap;

/// Variable bindings produced by a program.
///
/// Bindings keep the order in which each name was first assigned.
/// Reassigning a name replaces its value without moving it; names are never
/// removed.
///
/// # Examples
/// ```
/// use tally::interpret;
///
/// let table = interpret("b = 1; a = 2; b = 3;").unwrap();
/// let bindings: Vec<(&str, i64)> = table.iter().collect();
/// assert_eq!(bindings, [("b", 3), ("a", 2)]);
/// assert_eq!(table.to_string(), "b = 3\na = 2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: Vec<(String, i64)>,
    slots:   HashMap<String, usize>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, overwriting any earlier binding in place.
    pub fn assign(&mut self, name: String, value: i64) {
        if let Some(&slot) = self.slots.get(&name) {
            self.entries[slot].1 = value;
        } else {
            self.slots.insert(name.clone(), self.entries.len());
            self.entries.push((name, value));
        }
    }

    /// Returns the current value of `name`, if it has been assigned.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.slots.get(name).map(|&slot| self.entries[slot].1)
    }

    /// Returns `true` if `name` has been assigned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Number of distinct names bound.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in first-assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(borrow_entry)
    }
}

impl IntoIterator for SymbolTable {
    type IntoIter = std::vec::IntoIter<(String, i64)>;
    type Item = (String, i64);

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type IntoIter = std::iter::Map<std::slice::Iter<'a, (String, i64)>,
                                   fn(&'a (String, i64)) -> (&'a str, i64)>;
    type Item = (&'a str, i64);

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .iter()
            .map(borrow_entry as fn(&'a (String, i64)) -> (&'a str, i64))
    }
}

fn borrow_entry((name, value): &(String, i64)) -> (&str, i64) {
    (name.as_str(), *value)
}

/// One `name = value` line per binding, without a trailing newline.
impl std::fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{name} = {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reassignment_keeps_first_position() {
        let mut table = SymbolTable::new();
        table.assign("x".to_string(), 1);
        table.assign("y".to_string(), 2);
        table.assign("x".to_string(), 3);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("x"), Some(3));
        assert_eq!(table.iter().collect::<Vec<_>>(), [("x", 3), ("y", 2)]);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut table = SymbolTable::new();
        table.assign("x".to_string(), 1);

        assert!(table.contains("x"));
        assert!(!table.contains("X"));
        assert_eq!(table.get("X"), None);
    }

    #[test]
    fn empty_table_displays_nothing() {
        let table = SymbolTable::new();
        assert!(table.is_empty());
        assert_eq!(table.to_string(), "");
    }

    #[test]
    fn owned_iteration_moves_names_out() {
        let mut table = SymbolTable::new();
        table.assign("a".to_string(), -7);

        let entries: Vec<(String, i64)> = table.into_iter().collect();
        assert_eq!(entries, [("a".to_string(), -7)]);
    }
}
