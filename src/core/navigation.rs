//! Navigation state for the database/table menu.
//!
//! The menu lists every known database, with the currently expanded "parent"
//! database shown first and its tables indented beneath it. The lists are
//! replaced wholesale from server responses and mutated in place by the
//! delete operations; nothing here survives a page reload.

/// Client-side navigation state: the known databases, the tables of the
/// currently expanded database, and which database is expanded.
///
/// The table list is only meaningful while `parent` refers to a valid entry
/// of the database list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    databases: Vec<String>,
    tables: Vec<String>,
    parent: Option<usize>,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn databases(&self) -> &[String] {
        &self.databases
    }

    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    /// Index of the expanded database, if any. May be out of range; callers
    /// that dereference it must guard with `get`.
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Name of the expanded database, if the stored index refers to one.
    pub fn parent_name(&self) -> Option<&str> {
        self.parent
            .and_then(|i| self.databases.get(i))
            .map(String::as_str)
    }

    /// Replaces the database list wholesale. No validation is performed;
    /// an empty list is fine.
    pub fn set_databases(&mut self, databases: Vec<String>) {
        self.databases = databases;
    }

    /// Replaces the table list wholesale, independent of the parent index.
    /// The caller is responsible for only doing this while a database is
    /// actually expanded.
    pub fn set_tables(&mut self, tables: Vec<String>) {
        self.tables = tables;
    }

    /// Sets the expanded-database index. Not bounds-checked: an out-of-range
    /// index is accepted here and ignored at render time.
    pub fn set_parent(&mut self, parent: Option<usize>) {
        self.parent = parent;
    }

    /// Removes every database named `name`, preserving the order of the
    /// rest. If the expanded database is among the removed entries the
    /// parent resets to none; otherwise the parent index is shifted down
    /// past the removed predecessors so it keeps naming the same database.
    pub fn delete_database(&mut self, name: &str) {
        let mut removed_parent = false;
        let mut removed_before = 0usize;
        let mut kept = Vec::with_capacity(self.databases.len());
        for (i, db) in self.databases.drain(..).enumerate() {
            if db == name {
                match self.parent {
                    Some(p) if p == i => removed_parent = true,
                    Some(p) if i < p => removed_before += 1,
                    _ => {}
                }
            } else {
                kept.push(db);
            }
        }
        self.databases = kept;
        if removed_parent {
            self.parent = None;
        } else if let Some(p) = self.parent {
            self.parent = Some(p - removed_before);
        }
    }

    /// Removes every table named `name` by exact match, preserving the
    /// relative order of the survivors. Unknown names are a no-op.
    pub fn delete_table(&mut self, name: &str) {
        self.tables.retain(|t| t != name);
    }

    /// Builds the menu in display order: the expanded database first with
    /// its tables indented beneath it, then every other database at the top
    /// level. An out-of-range parent index renders as "none expanded".
    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        let expanded = self.parent.filter(|&i| i < self.databases.len());
        let mut entries = Vec::with_capacity(self.databases.len() + self.tables.len());
        if let Some(i) = expanded {
            entries.push(MenuEntry::database(&self.databases[i]));
            for table in &self.tables {
                entries.push(MenuEntry::table(table));
            }
        }
        for (i, db) in self.databases.iter().enumerate() {
            if Some(i) != expanded {
                entries.push(MenuEntry::database(db));
            }
        }
        entries
    }
}

/// What a menu line refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntryKind {
    Database,
    Table,
}

/// One line of the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub kind: MenuEntryKind,
    pub name: String,
    /// Nesting depth: 1 for databases, 2 for tables under the expanded one.
    pub indent: u8,
}

impl MenuEntry {
    fn database(name: &str) -> Self {
        Self {
            kind: MenuEntryKind::Database,
            name: name.to_owned(),
            indent: 1,
        }
    }

    fn table(name: &str) -> Self {
        Self {
            kind: MenuEntryKind::Table,
            name: name.to_owned(),
            indent: 2,
        }
    }
}
