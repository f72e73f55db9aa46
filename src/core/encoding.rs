//! Categorical encoding of free-text labels.
//!
//! Codes are assigned in first-seen order and only mean something inside the
//! call that built the codec: they are never stored.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct LabelCodec {
    labels: Vec<String>,
    codes: HashMap<String, usize>,
}

impl LabelCodec {
    /// Build the codec and encode `labels` in one pass.
    pub fn fit_transform<'a, I>(labels: I) -> (Self, Vec<usize>)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut codec = Self::default();
        let codes = labels.into_iter().map(|l| codec.insert(l)).collect();
        (codec, codes)
    }

    fn insert(&mut self, label: &str) -> usize {
        if let Some(&code) = self.codes.get(label) {
            return code;
        }
        let code = self.labels.len();
        self.labels.push(label.to_string());
        self.codes.insert(label.to_string(), code);
        code
    }

    pub fn encode(&self, label: &str) -> Option<usize> {
        self.codes.get(label).copied()
    }

    pub fn decode(&self, code: usize) -> Option<&str> {
        self.labels.get(code).map(String::as_str)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
