// SPDX-License-Identifier: MPL-2.0
//! Persistence of the two user input fields.
//!
//! Input is restored once at startup and written back on a timer. Writes
//! are whole-value and last-write-wins.

use crate::error::Result;
use crate::storage::Storage;

/// Storage key of the parameter names field.
pub const PARAMETERS_KEY: &str = "dtb-parameters";

/// Storage key of the training data field.
pub const TRAINING_DATA_KEY: &str = "dtb-training-data";

/// User-editable input, persisted verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pub parameters: String,
    pub training_data: String,
}

/// Reads the saved input. Missing keys yield empty text.
pub fn restore(storage: &dyn Storage) -> InputState {
    InputState {
        parameters: storage.get_item(PARAMETERS_KEY).unwrap_or_default(),
        training_data: storage.get_item(TRAINING_DATA_KEY).unwrap_or_default(),
    }
}

/// Writes both fields.
pub fn save(storage: &mut dyn Storage, input: &InputState) -> Result<()> {
    storage.set_item(PARAMETERS_KEY, &input.parameters)?;
    storage.set_item(TRAINING_DATA_KEY, &input.training_data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};
    use tempfile::tempdir;

    #[test]
    fn restore_from_empty_storage_yields_empty_input() {
        let storage = MemoryStorage::default();
        assert_eq!(restore(&storage), InputState::default());
    }

    #[test]
    fn restore_with_one_missing_key_keeps_the_other() {
        let mut storage = MemoryStorage::default();
        storage.set_item(PARAMETERS_KEY, "A,B").expect("write");

        let input = restore(&storage);
        assert_eq!(input.parameters, "A,B");
        assert_eq!(input.training_data, "");
    }

    #[test]
    fn save_then_restore_across_file_reopen() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("storage.cbor");
        let input = InputState {
            parameters: "Weather, Play".to_string(),
            training_data: "sunny,no\nrain,yes\n".to_string(),
        };

        let (mut storage, _) = FileStorage::open_at(path.clone());
        save(&mut storage, &input).expect("save");

        let (reopened, _) = FileStorage::open_at(path);
        assert_eq!(restore(&reopened), input);
    }

    #[test]
    fn later_save_wins() {
        let mut storage = MemoryStorage::default();
        let first = InputState {
            parameters: "A".into(),
            training_data: "1".into(),
        };
        let second = InputState {
            parameters: "B".into(),
            training_data: String::new(),
        };

        save(&mut storage, &first).expect("save");
        save(&mut storage, &second).expect("save");
        assert_eq!(restore(&storage), second);
    }
}
