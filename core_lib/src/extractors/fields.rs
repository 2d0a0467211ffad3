//! Lookup capabilities the extractors read from

use std::collections::{BTreeMap, HashMap};

use crate::models::Attachment;

/// Named field lookup, e.g. a form's elements by `name` attribute.
pub trait FieldSource {
    fn get(&self, name: &str) -> Option<String>;

    fn value_or_empty(&self, name: &str) -> String {
        self.get(name).unwrap_or_default()
    }
}

/// Positional field lookup, e.g. a form's elements in markup order.
pub trait IndexedFields {
    fn get_at(&self, index: usize) -> Option<String>;

    fn value_at_or_empty(&self, index: usize) -> String {
        self.get_at(index).unwrap_or_default()
    }
}

/// File-selection controls reachable by element id.
pub trait FileSource {
    fn selected_files(&self, control_id: &str) -> Option<Vec<Attachment>>;
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

impl FieldSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        BTreeMap::get(self, name).cloned()
    }
}

impl FieldSource for [(&str, &str)] {
    fn get(&self, name: &str) -> Option<String> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    }
}

impl<T: IndexedFields + ?Sized> IndexedFields for &T {
    fn get_at(&self, index: usize) -> Option<String> {
        (**self).get_at(index)
    }
}

impl IndexedFields for [String] {
    fn get_at(&self, index: usize) -> Option<String> {
        self.get(index).cloned()
    }
}

impl IndexedFields for Vec<String> {
    fn get_at(&self, index: usize) -> Option<String> {
        self.as_slice().get_at(index)
    }
}

impl IndexedFields for [&str] {
    fn get_at(&self, index: usize) -> Option<String> {
        self.get(index).map(|value| value.to_string())
    }
}

impl<T: FileSource + ?Sized> FileSource for &T {
    fn selected_files(&self, control_id: &str) -> Option<Vec<Attachment>> {
        (**self).selected_files(control_id)
    }
}

impl FileSource for HashMap<String, Vec<Attachment>> {
    fn selected_files(&self, control_id: &str) -> Option<Vec<Attachment>> {
        self.get(control_id).cloned()
    }
}

/// A page without file controls.
impl FileSource for () {
    fn selected_files(&self, _control_id: &str) -> Option<Vec<Attachment>> {
        None
    }
}
