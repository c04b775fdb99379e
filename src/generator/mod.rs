//! Deterministic step generator
//!
//! Turns one [`OperationRequest`] into the ordered list of [`Snapshot`]s that
//! animate it. Every operation is broken into "show intent → mutate → show
//! result" on a private working copy of the source array; `find` additionally
//! emits one frame per comparison.
//!
//! The generator is total. Bad parameters (out-of-range bounds, popping an
//! empty array, an unknown operation name) yield a single snapshot whose
//! narration is the [`errors::RequestError`] text, with the array unchanged.
//! Missing required parameters yield no snapshots at all.
//!
//! ```
//! use arrviz::generator::{generate, OperationRequest};
//!
//! let steps = generate(&OperationRequest::find(&[5, 12, 8, 23, 16], 8));
//! assert_eq!(steps.last().unwrap().highlighted_sorted(), vec![2]);
//! ```

pub mod errors;
mod steps;

use crate::snapshot::{OperationKind, Snapshot};
use steps::StepRecorder;

/// One requested operation against a borrowed source array.
///
/// `index` and `value` are operation specific:
/// - `push(value)`, `find(value)`
/// - `slice(index = start, value = end)`, exclusive end
/// - `splice(index, value?)`: replace when `value` is present, delete otherwise
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRequest<'a> {
    pub source: &'a [i64],
    pub kind: OperationKind,
    pub index: Option<i64>,
    pub value: Option<i64>,
}

impl<'a> OperationRequest<'a> {
    pub fn new(source: &'a [i64], kind: OperationKind) -> Self {
        OperationRequest {
            source,
            kind,
            index: None,
            value: None,
        }
    }

    pub fn with_index(mut self, index: Option<i64>) -> Self {
        self.index = index;
        self
    }

    pub fn with_value(mut self, value: Option<i64>) -> Self {
        self.value = value;
        self
    }

    pub fn push(source: &'a [i64], value: i64) -> Self {
        Self::new(source, OperationKind::Push).with_value(Some(value))
    }

    pub fn pop(source: &'a [i64]) -> Self {
        Self::new(source, OperationKind::Pop)
    }

    pub fn find(source: &'a [i64], value: i64) -> Self {
        Self::new(source, OperationKind::Find).with_value(Some(value))
    }

    pub fn slice(source: &'a [i64], start: i64, end: i64) -> Self {
        Self::new(source, OperationKind::Slice)
            .with_index(Some(start))
            .with_value(Some(end))
    }

    pub fn splice(source: &'a [i64], index: i64, value: Option<i64>) -> Self {
        Self::new(source, OperationKind::Splice)
            .with_index(Some(index))
            .with_value(value)
    }
}

/// Generate the snapshot sequence animating `request`.
///
/// Never mutates `request.source` and never panics.
pub fn generate(request: &OperationRequest<'_>) -> Vec<Snapshot> {
    let mut recorder = StepRecorder::new(request.source, request.kind.clone());

    match (&request.kind, request.index, request.value) {
        (OperationKind::Push, _, Some(value)) => recorder.push(value),
        (OperationKind::Pop, _, _) => recorder.pop(),
        (OperationKind::Find, _, Some(value)) => recorder.find(value),
        (OperationKind::Slice, Some(start), Some(end)) => recorder.slice(start, end),
        (OperationKind::Splice, Some(index), value) => recorder.splice(index, value),
        (
            OperationKind::Push | OperationKind::Find | OperationKind::Slice | OperationKind::Splice,
            _,
            _,
        ) => {
            tracing::debug!(
                operation = %request.kind,
                "missing required parameter; no steps generated"
            );
        }
        (OperationKind::Init, _, _) => recorder.init(),
        (OperationKind::Unknown(_), _, _) => recorder.unknown(),
    }

    let steps = recorder.finish();
    tracing::debug!(
        operation = %request.kind,
        source_len = request.source.len(),
        steps = steps.len(),
        "generated timeline"
    );
    steps
}
