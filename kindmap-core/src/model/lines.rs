use hashbrown::HashMap;

use crate::LineId;

/// Interns line names into dense [`LineId`]s
#[derive(Debug, Clone, Default)]
pub struct LineTable {
    names: Vec<String>,
    index: HashMap<String, LineId>,
}

impl LineTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `name`, allocating the next one if unseen
    pub fn intern(&mut self, name: &str) -> LineId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_owned());
        self.index.insert(name.to_owned(), id);
        id
    }

    pub fn get(&self, name: &str) -> Option<LineId> {
        self.index.get(name).copied()
    }

    pub fn name(&self, id: LineId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
