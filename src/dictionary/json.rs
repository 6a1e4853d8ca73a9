/*!
 * File-backed term dictionary.
 *
 * The dictionary file is a JSON object with one ordered substitution table
 * per category:
 *
 * ```json
 * {
 *   "number": [["十一", "11"], ["十", "10"]],
 *   "context": [["軟件", "軟體"]],
 *   "typo": [["好象", "好像"]]
 * }
 * ```
 *
 * Pairs are applied in file order; order matters because later pairs may
 * assume earlier replacements already happened.
 */

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use serde::Deserialize;

use crate::errors::DictionaryError;
use super::{TermCategory, TermDictionary};

/// Ordered substitution tables, one per category
#[derive(Debug, Default, Deserialize)]
struct DictionaryTables {
    #[serde(default)]
    number: Vec<(String, String)>,

    #[serde(default)]
    context: Vec<(String, String)>,

    #[serde(default)]
    typo: Vec<(String, String)>,
}

/// Term dictionary loaded from a JSON file
#[derive(Debug, Default)]
pub struct JsonDictionary {
    tables: DictionaryTables,
}

impl JsonDictionary {
    /// Load a dictionary from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| DictionaryError::ReadFailed(format!("{}: {}", path.display(), e)))?;
        let reader = BufReader::new(file);
        let tables: DictionaryTables = serde_json::from_reader(reader)
            .map_err(|e| DictionaryError::ParseError(format!("{}: {}", path.display(), e)))?;

        Ok(JsonDictionary { tables })
    }

    fn table(&self, category: TermCategory) -> &[(String, String)] {
        match category {
            TermCategory::Number => &self.tables.number,
            TermCategory::Context => &self.tables.context,
            TermCategory::Typo => &self.tables.typo,
        }
    }
}

impl TermDictionary for JsonDictionary {
    fn translate(&self, text: &str, category: TermCategory) -> String {
        let mut result = text.to_string();
        for (from, to) in self.table(category) {
            if result.contains(from.as_str()) {
                result = result.replace(from.as_str(), to);
            }
        }
        result
    }
}
