//! Participant list loading.
//!
//! Reads a JSON array of [`Participant`] records. Spreadsheet import lives
//! outside this workspace; its output is expected in this shape.

use std::collections::HashSet;
use std::path::Path;

use crate::error::CoreError;
use crate::types::Participant;

pub fn load_participants(path: &Path) -> anyhow::Result<Vec<Participant>> {
    let content = std::fs::read_to_string(path)?;
    let participants: Vec<Participant> = serde_json::from_str(&content)?;
    check_unique(&participants)?;
    Ok(participants)
}

fn check_unique(participants: &[Participant]) -> Result<(), CoreError> {
    let mut seen = HashSet::with_capacity(participants.len());
    for p in participants {
        if !seen.insert(p.number) {
            return Err(CoreError::DuplicateParticipant(p.number.0));
        }
    }
    Ok(())
}
