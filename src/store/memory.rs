use super::*;

/// Insertion-ordered contact storage for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemStore {
    pub data: Vec<Contact>,
}

impl MemStore {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn iter(&self) -> MemStoreIter<'_> {
        MemStoreIter {
            inner: &self.data,
            idx: 0,
        }
    }

    /// Appends `contact` and hands back the stored record.
    pub fn push(&mut self, contact: Contact) -> &Contact {
        let index = self.data.len();
        self.data.push(contact);
        // filled by the push above
        &self.data[index]
    }

    /// Index of the first contact whose name equals `name` exactly.
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.data.iter().position(|c| c.name == name)
    }

    /// First contact whose name equals `name` exactly.
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.data.iter_mut().find(|c| c.name == name)
    }

    pub fn remove(&mut self, index: usize) -> Option<Contact> {
        if index < self.data.len() {
            Some(self.data.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

pub struct MemStoreIter<'a> {
    inner: &'a [Contact],
    idx: usize,
}

impl<'a> Iterator for MemStoreIter<'a> {
    type Item = &'a Contact;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.inner.len() {
            return None;
        }
        let contact = &self.inner[self.idx];
        self.idx += 1;
        Some(contact)
    }
}
