const WILDCARD_PREFIX: &str = "*.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    entries: Vec<String>,
}

impl IgnoreList {
    pub fn parse(raw: &str) -> Self {
        Self::from_entries(split_entries(raw))
    }

    pub fn from_entries(entries: Vec<String>) -> Self {
        Self {
            entries: entries.into_iter().filter(|e| !e.is_empty()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_rename_allowed(&self, name: &str) -> bool {
        if self.entries.iter().any(|entry| entry == name) {
            return false;
        }
        let extension = extension_of(name);
        !self
            .entries
            .iter()
            .filter_map(|entry| wildcard_extension(entry))
            .any(|ignored| ignored == extension)
    }
}

pub fn split_entries(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn wildcard_extension(entry: &str) -> Option<&str> {
    entry.rsplit_once(WILDCARD_PREFIX).map(|(_, ext)| ext)
}

// A dotless name counts as its own extension, as the original tool treated it.
fn extension_of(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(_, ext)| ext)
}
