/*!
 * Mock dictionary implementations for testing.
 *
 * This module provides deterministic dictionaries that simulate different
 * behaviors:
 * - `MockDictionary::identity()` - Returns text unchanged for all categories
 * - `MockDictionary::with_pairs()` - Applies a fixed substitution list to one category
 * - `MockDictionary::tagging()` - Wraps text with a category marker, to assert
 *   which categories the pipeline consulted and in which order
 */

use super::{TermCategory, TermDictionary};

/// Behavior mode for the mock dictionary
#[derive(Debug, Clone)]
enum MockBehavior {
    /// Return text unchanged
    Identity,
    /// Apply the given pairs when the requested category matches
    Pairs {
        category: TermCategory,
        pairs: Vec<(String, String)>,
    },
    /// Append a category marker to the text
    Tagging,
}

/// Deterministic dictionary stub for pipeline and normalizer tests
#[derive(Debug, Clone)]
pub struct MockDictionary {
    behavior: MockBehavior,
}

impl MockDictionary {
    /// Create a mock that performs no substitutions
    pub fn identity() -> Self {
        MockDictionary { behavior: MockBehavior::Identity }
    }

    /// Create a mock that applies `pairs` in order for `category` only
    pub fn with_pairs(category: TermCategory, pairs: &[(&str, &str)]) -> Self {
        MockDictionary {
            behavior: MockBehavior::Pairs {
                category,
                pairs: pairs.iter()
                    .map(|(from, to)| (from.to_string(), to.to_string()))
                    .collect(),
            },
        }
    }

    /// Create a mock that appends `[category]` to every input
    pub fn tagging() -> Self {
        MockDictionary { behavior: MockBehavior::Tagging }
    }
}

impl TermDictionary for MockDictionary {
    fn translate(&self, text: &str, category: TermCategory) -> String {
        match &self.behavior {
            MockBehavior::Identity => text.to_string(),
            MockBehavior::Pairs { category: wanted, pairs } => {
                if category != *wanted {
                    return text.to_string();
                }
                let mut result = text.to_string();
                for (from, to) in pairs {
                    result = result.replace(from.as_str(), to);
                }
                result
            }
            MockBehavior::Tagging => format!("{}[{:?}]", text, category),
        }
    }
}
