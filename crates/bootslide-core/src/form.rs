use indexmap::IndexMap;
use indexmap::map::Entry;

/// Request form fields keyed by client id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: IndexMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an `application/x-www-form-urlencoded` body.
    ///
    /// When a key repeats, the first occurrence wins, matching how request parameter maps
    /// expose single-valued fields.
    pub fn from_urlencoded(body: &str) -> Self {
        let mut fields = IndexMap::new();
        for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
            if let Entry::Vacant(slot) = fields.entry(key.into_owned()) {
                slot.insert(value.into_owned());
            }
        }
        Self { fields }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut out = Self::new();
        for (k, v) in iter {
            out.insert(k, v);
        }
        out
    }
}
