//! Tables and table-scoped column references.

use crate::term::Term;

/// A relation in the FROM clause or a JOIN.
///
/// Identity covers both name and alias: a self-join uses two `Table` values
/// with the same name and distinct aliases.
///
/// # Example
/// ```
/// use sqb::Table;
///
/// let customers = Table::new("customers");
/// let c2 = customers.clone().as_("c2");
/// assert_ne!(customers, c2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    name: String,
    alias: Option<String>,
}

impl Table {
    /// Create a table reference by name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// Return a copy of this table carrying an alias.
    ///
    /// The alias distinguishes two uses of the same relation (self-joins);
    /// rendered join aliases are always the assigned `t0, t1, ...` sequence.
    pub fn as_(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The relation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The distinguishing alias, if any.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// A reference to one of this table's columns.
    pub fn field(&self, name: impl Into<String>) -> Term {
        Term::table_field(self.clone(), name.into())
    }

    /// The all-columns sentinel for this table, rendered `*` in single-table
    /// queries and `tN.*` under joins.
    pub fn star(&self) -> Term {
        Term::table_star(self.clone())
    }
}

impl From<&str> for Table {
    fn from(name: &str) -> Self {
        Table::new(name)
    }
}

impl From<String> for Table {
    fn from(name: String) -> Self {
        Table::new(name)
    }
}

impl From<&Table> for Table {
    fn from(table: &Table) -> Self {
        table.clone()
    }
}

/// Build several tables from their names in one call.
///
/// # Example
/// ```
/// use sqb::tables;
///
/// let [history, customers] = tables(["history", "customers"]);
/// assert_eq!(history.name(), "history");
/// assert_eq!(customers.name(), "customers");
/// ```
pub fn tables<const N: usize>(names: [&str; N]) -> [Table; N] {
    names.map(Table::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_includes_alias() {
        let a = Table::new("customers");
        let b = Table::new("customers");
        assert_eq!(a, b);
        assert_ne!(a, b.as_("c2"));
    }

    #[test]
    fn field_renders_unqualified_standalone() {
        let t = Table::new("customers");
        assert_eq!(t.field("id").to_sql(), "id");
        assert_eq!(t.star().to_sql(), "*");
    }

    #[test]
    fn tables_helper() {
        let [a, b, c] = tables(["a", "b", "c"]);
        assert_eq!(a.name(), "a");
        assert_eq!(b.name(), "b");
        assert_eq!(c.name(), "c");
    }
}
