//! Known item values.
//!
//! The value table is a plain text file with one `<item name>, <value>`
//! entry per line. An item that has an entry is kept and sold; an item
//! without one is treated as destroyed.

use super::error::InputError;
use crate::logging::DiagnosticSink;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use tracing::Level;

/// Immutable item name to platinum value lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueTable {
    values: HashMap<String, Decimal>,
}

impl ValueTable {
    /// Parse a value table from file contents.
    ///
    /// Blank lines are skipped. Each remaining line is split at its last
    /// comma so item names may themselves contain commas. Both fields are
    /// trimmed. Rows without a comma or with an unparseable value are
    /// reported as errors and skipped. A later row for the same item
    /// replaces the earlier one.
    pub fn parse(contents: &str, sink: &dyn DiagnosticSink) -> Self {
        let mut values = HashMap::new();

        for (index, line) in contents.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let Some((name, raw_value)) = trimmed.rsplit_once(',') else {
                sink.report(
                    Level::ERROR,
                    &format!(
                        "Value table line {}: missing ',' separator in {:?}",
                        index + 1,
                        trimmed
                    ),
                );
                continue;
            };

            let name = name.trim();
            let raw_value = raw_value.trim();
            match Decimal::from_str(raw_value) {
                Ok(value) if !name.is_empty() => {
                    values.insert(name.to_string(), value);
                }
                Ok(_) => sink.report(
                    Level::ERROR,
                    &format!("Value table line {}: empty item name", index + 1),
                ),
                Err(_) => sink.report(
                    Level::ERROR,
                    &format!(
                        "Failed to parse plat item {} - {} (line {})",
                        name,
                        raw_value,
                        index + 1
                    ),
                ),
            }
        }

        Self { values }
    }

    /// Load a value table from a file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist and
    /// `InputError::Io` if it cannot be read.
    pub fn load(path: &Path, sink: &dyn DiagnosticSink) -> Result<Self, InputError> {
        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let table = Self::parse(&contents, sink);

        tracing::info!(path = %path.display(), items = table.len(), "Loaded value table");
        Ok(table)
    }

    /// Platinum value of an item, if known.
    pub fn get(&self, item_name: &str) -> Option<Decimal> {
        self.values.get(item_name).copied()
    }

    /// Number of known items.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no items are known.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, Decimal)> for ValueTable {
    fn from_iter<I: IntoIterator<Item = (String, Decimal)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
