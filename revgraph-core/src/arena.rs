use std::collections::HashMap;

/// Dense index assigned to a revision id for the duration of one computation.
pub type RevIdx = usize;

/// Interns revision ids borrowed from the inputs into dense indices, so
/// per-revision state can live in plain vectors.
#[derive(Debug, Default)]
pub struct RevArena<'a> {
    names: Vec<&'a str>,
    index: HashMap<&'a str, RevIdx>,
}

impl<'a> RevArena<'a> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            names: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Index of `id`, assigning the next free one on first sight.
    pub fn intern(&mut self, id: &'a str) -> RevIdx {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.names.len();
        self.names.push(id);
        self.index.insert(id, idx);
        idx
    }

    pub fn get(&self, id: &str) -> Option<RevIdx> {
        self.index.get(id).copied()
    }

    pub fn name(&self, idx: RevIdx) -> &'a str {
        self.names[idx]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}
