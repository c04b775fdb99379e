// Snapshots: the immutable frames of an operation's animation

use rustc_hash::FxHashSet;
use serde::{Serialize, Serializer};
use std::fmt;

/// Which operation produced a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Push,
    Pop,
    Find,
    Slice,
    Splice,
    /// A freshly loaded array, before any operation ran
    Init,
    /// An operation name the generator does not know
    Unknown(String),
}

impl OperationKind {
    /// Map an operation name to its kind. Never fails: unrecognized names
    /// become [`OperationKind::Unknown`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "push" => OperationKind::Push,
            "pop" => OperationKind::Pop,
            "find" => OperationKind::Find,
            "slice" => OperationKind::Slice,
            "splice" => OperationKind::Splice,
            "init" => OperationKind::Init,
            _ => OperationKind::Unknown(name.trim().to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            OperationKind::Push => "push",
            OperationKind::Pop => "pop",
            OperationKind::Find => "find",
            OperationKind::Slice => "slice",
            OperationKind::Splice => "splice",
            OperationKind::Init => "init",
            OperationKind::Unknown(name) => name,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for OperationKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OperationKind::Unknown(_) => serializer.serialize_str("unknown"),
            kind => serializer.serialize_str(kind.name()),
        }
    }
}

/// One frame of array state plus its visual annotations.
///
/// Snapshots are only built by the step generator and never change after
/// construction; every field is owned, so a snapshot never aliases the
/// caller's live array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub elements: Vec<i64>,
    #[serde(serialize_with = "serialize_sorted")]
    pub highlighted: FxHashSet<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointer: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointer_label: Option<String>,
    pub operation: OperationKind,
    pub narration: String,
}

impl Snapshot {
    /// A snapshot with no highlight and no pointer
    pub fn plain(elements: &[i64], operation: OperationKind, narration: String) -> Self {
        Snapshot {
            elements: elements.to_vec(),
            highlighted: FxHashSet::default(),
            pointer: None,
            pointer_label: None,
            operation,
            narration,
        }
    }

    /// Highlight the given indices
    pub fn with_highlight(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.highlighted.extend(indices);
        self
    }

    /// Attach a labelled pointer
    pub fn with_pointer(mut self, index: usize, label: &str) -> Self {
        self.pointer = Some(index);
        self.pointer_label = Some(label.to_string());
        self
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.contains(&index)
    }

    /// Highlighted indices in ascending order
    pub fn highlighted_sorted(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.highlighted.iter().copied().collect();
        indices.sort_unstable();
        indices
    }

    /// Check that every annotation points inside `elements`.
    ///
    /// The pointer may sit one past the end only as the append-position
    /// marker of a push.
    pub fn indices_valid(&self) -> bool {
        let len = self.elements.len();
        if self.highlighted.iter().any(|&i| i >= len) {
            return false;
        }
        match self.pointer {
            None => true,
            Some(p) if p < len => true,
            Some(p) => {
                p == len && self.operation == OperationKind::Push && self.highlighted.is_empty()
            }
        }
    }
}

/// One-line text form: highlighted elements are starred, then the pointer
/// and the narration, e.g. `[5, *12*, 8] ^1 checking | Checking index 1: 12 != 8`
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self
            .elements
            .iter()
            .enumerate()
            .map(|(i, e)| {
                if self.is_highlighted(i) {
                    format!("*{}*", e)
                } else {
                    e.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{}]", cells)?;
        if let Some(pointer) = self.pointer {
            write!(f, " ^{}", pointer)?;
            if let Some(label) = &self.pointer_label {
                write!(f, " {}", label)?;
            }
        }
        write!(f, " | {}", self.narration)
    }
}

fn serialize_sorted<S: Serializer>(
    set: &FxHashSet<usize>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut indices: Vec<usize> = set.iter().copied().collect();
    indices.sort_unstable();
    indices.serialize(serializer)
}

/// Format elements the way narrations list them: `[1, 2, 3]`
pub fn format_elements(elements: &[i64]) -> String {
    let joined = elements
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}
