// Per-operation step builders

use super::errors::RequestError;
use crate::snapshot::{format_elements, OperationKind, Snapshot};

/// Accumulates snapshots over a private working copy of the source array
pub(super) struct StepRecorder {
    working: Vec<i64>,
    kind: OperationKind,
    steps: Vec<Snapshot>,
}

impl StepRecorder {
    pub(super) fn new(source: &[i64], kind: OperationKind) -> Self {
        StepRecorder {
            working: source.to_vec(),
            kind,
            steps: Vec::new(),
        }
    }

    pub(super) fn finish(self) -> Vec<Snapshot> {
        self.steps
    }

    /// A snapshot of the current working array, unannotated
    fn frame(&self, narration: String) -> Snapshot {
        Snapshot::plain(&self.working, self.kind.clone(), narration)
    }

    fn record(&mut self, snapshot: Snapshot) {
        debug_assert!(snapshot.indices_valid(), "out of range annotation: {:?}", snapshot);
        self.steps.push(snapshot);
    }

    /// Terminal snapshot for a request that cannot be animated
    fn reject(&mut self, error: RequestError) {
        tracing::debug!(operation = %self.kind, %error, "rejected request");
        let snapshot = self.frame(error.to_string());
        self.record(snapshot);
    }

    pub(super) fn push(&mut self, value: i64) {
        let append_at = self.working.len();
        let intent = self
            .frame(format!("Pushing {} to the end of array", value))
            .with_pointer(append_at, "insert here");
        self.record(intent);

        self.working.push(value);

        let last = self.working.len() - 1;
        let result = self
            .frame(format!("Pushed {} at index {}", value, last))
            .with_highlight([last])
            .with_pointer(last, "new element");
        self.record(result);
    }

    pub(super) fn pop(&mut self) {
        let Some(&removing) = self.working.last() else {
            self.reject(RequestError::PopFromEmpty);
            return;
        };
        let last = self.working.len() - 1;

        let intent = self
            .frame(format!("Popping last element: {}", removing))
            .with_highlight([last])
            .with_pointer(last, "removing");
        self.record(intent);

        self.working.pop();

        let result = self.frame(format!(
            "Popped {}. New length: {}",
            removing,
            self.working.len()
        ));
        self.record(result);
    }

    pub(super) fn find(&mut self, value: i64) {
        let start = self.frame(format!("Searching for {}...", value));
        self.record(start);

        let mut found = None;
        for i in 0..self.working.len() {
            let current = self.working[i];
            let comparison = if current == value { "==" } else { "!=" };
            let check = self
                .frame(format!(
                    "Checking index {}: {} {} {}",
                    i, current, comparison, value
                ))
                .with_highlight([i])
                .with_pointer(i, "checking");
            self.record(check);

            if current == value {
                found = Some(i);
                break;
            }
        }

        let outcome = match found {
            Some(i) => self
                .frame(format!("Found {} at index {}!", value, i))
                .with_highlight([i])
                .with_pointer(i, "found!"),
            None => self.frame(format!("{} not found in array", value)),
        };
        self.record(outcome);
    }

    /// `[start, end)` extraction; the working array is never touched
    pub(super) fn slice(&mut self, start: i64, end: i64) {
        let Some(range) = self.slice_range(start, end) else {
            self.reject(RequestError::InvalidSliceRange { start, end });
            return;
        };

        let mut range_frame = self
            .frame(format!(
                "Slicing from index {} to {} (exclusive)",
                start, end
            ))
            .with_highlight(range.clone());
        // An empty range at the very end has no element to point at.
        if range.start < self.working.len() {
            range_frame = range_frame.with_pointer(range.start, "start");
        }
        self.record(range_frame);

        let extracted = &self.working[range];
        let result = Snapshot::plain(
            extracted,
            self.kind.clone(),
            format!(
                "Sliced result: {}. Original array unchanged.",
                format_elements(extracted)
            ),
        )
        .with_highlight(0..extracted.len());
        self.record(result);

        let original = self.frame(format!(
            "Original array: {} (unchanged)",
            format_elements(&self.working)
        ));
        self.record(original);
    }

    fn slice_range(&self, start: i64, end: i64) -> Option<std::ops::Range<usize>> {
        let start = usize::try_from(start).ok()?;
        let end = usize::try_from(end).ok()?;
        if end > self.working.len() || start > end {
            return None;
        }
        Some(start..end)
    }

    /// Replace (`value` present) or delete exactly one element at `index`
    pub(super) fn splice(&mut self, index: i64, value: Option<i64>) {
        let Some(at) = usize::try_from(index)
            .ok()
            .filter(|&i| i < self.working.len())
        else {
            self.reject(RequestError::InvalidIndex { index });
            return;
        };
        let target = self.working[at];

        let intent_text = match value {
            Some(v) => format!(
                "Splicing at index {}: replacing {} with {}",
                at, target, v
            ),
            None => format!("Splicing at index {}: removing {}", at, target),
        };
        let intent = self
            .frame(intent_text)
            .with_highlight([at])
            .with_pointer(at, "splice here");
        self.record(intent);

        let removed = self.working.remove(at);
        if let Some(v) = value {
            self.working.insert(at, v);
        }

        let result_text = match value {
            Some(v) => format!("Replaced {} with {} at index {}", removed, v, at),
            None => format!(
                "Removed {}. Elements after index {} shifted left",
                removed, at
            ),
        };
        // Deleting the last element leaves nothing at `at` to annotate.
        let mut result = self.frame(result_text);
        if at < self.working.len() {
            result = result.with_highlight([at]).with_pointer(at, "modified");
        }
        self.record(result);

        let complete = self.frame(format!(
            "Splice complete. New array: {}",
            format_elements(&self.working)
        ));
        self.record(complete);
    }

    pub(super) fn init(&mut self) {
        let loaded = self.frame(format!(
            "Array loaded: {}",
            format_elements(&self.working)
        ));
        self.record(loaded);
    }

    pub(super) fn unknown(&mut self) {
        self.reject(RequestError::UnknownOperation(self.kind.clone()));
    }
}
