// Integration tests for the step generator

use arrviz::generator::{generate, OperationRequest};
use arrviz::snapshot::{OperationKind, Snapshot};

fn last(steps: &[Snapshot]) -> &Snapshot {
    steps.last().expect("expected at least one snapshot")
}

/// Every request shape against a given array
fn requests(source: &[i64]) -> Vec<OperationRequest<'_>> {
    let len = source.len() as i64;
    let mut requests = vec![
        OperationRequest::pop(source),
        OperationRequest::push(source, 7),
        OperationRequest::find(source, 8),
        OperationRequest::find(source, -1000),
        OperationRequest::new(source, OperationKind::from_name("reverse")),
    ];
    for a in -1..=len + 1 {
        requests.push(OperationRequest::splice(source, a, None));
        requests.push(OperationRequest::splice(source, a, Some(99)));
        for b in -1..=len + 1 {
            requests.push(OperationRequest::slice(source, a, b));
        }
    }
    requests
}

#[test]
fn test_generate_never_mutates_source() {
    for source in [vec![], vec![8], vec![5, 12, 8, 23, 16], vec![3, 3, 3]] {
        let before = source.clone();
        for request in requests(&source) {
            let _ = generate(&request);
            assert_eq!(source, before, "{:?} mutated its source", request.kind);
        }
    }
}

#[test]
fn test_every_snapshot_has_valid_indices() {
    for source in [vec![], vec![8], vec![5, 12, 8, 23, 16], vec![i64::MIN, i64::MAX]] {
        for request in requests(&source) {
            for snapshot in generate(&request) {
                assert!(
                    snapshot.indices_valid(),
                    "{:?} produced out-of-range annotation: {}",
                    request,
                    snapshot
                );
            }
        }
    }
}

#[test]
fn test_push_appends_one_element() {
    let source = [5, 12, 8];
    let steps = generate(&OperationRequest::push(&source, 42));
    assert_eq!(steps.len(), 2);
    assert_eq!(last(&steps).elements, vec![5, 12, 8, 42]);
    assert_eq!(last(&steps).highlighted_sorted(), vec![3]);
    assert_eq!(steps[0].narration, "Pushing 42 to the end of array");
    assert!(steps.iter().all(|s| s.operation == OperationKind::Push));
}

#[test]
fn test_push_onto_empty_array() {
    let steps = generate(&OperationRequest::push(&[], 1));
    assert_eq!(steps[0].pointer, Some(0));
    assert_eq!(last(&steps).elements, vec![1]);
    assert_eq!(last(&steps).highlighted_sorted(), vec![0]);
}

#[test]
fn test_pop_on_empty_is_single_explanation() {
    let steps = generate(&OperationRequest::pop(&[]));
    assert_eq!(steps.len(), 1);
    assert!(steps[0].elements.is_empty());
    assert_eq!(steps[0].pointer, None);
    assert_eq!(steps[0].narration, "Cannot pop from empty array");
}

#[test]
fn test_pop_removes_last() {
    let steps = generate(&OperationRequest::pop(&[5, 12, 8]));
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].narration, "Popping last element: 8");
    assert_eq!(last(&steps).elements, vec![5, 12]);
    assert_eq!(last(&steps).narration, "Popped 8. New length: 2");
}

#[test]
fn test_find_stops_at_first_match() {
    let steps = generate(&OperationRequest::find(&[5, 12, 8, 23, 16], 8));
    let checked: Vec<usize> = steps
        .iter()
        .filter(|s| s.pointer_label.as_deref() == Some("checking"))
        .filter_map(|s| s.pointer)
        .collect();
    assert_eq!(checked, vec![0, 1, 2]);

    let outcome = last(&steps);
    assert_eq!(outcome.highlighted_sorted(), vec![2]);
    assert_eq!(outcome.pointer_label.as_deref(), Some("found!"));
    assert_eq!(outcome.narration, "Found 8 at index 2!");
    assert_eq!(steps[3].narration, "Checking index 2: 8 == 8");
}

#[test]
fn test_find_on_empty_array() {
    let steps = generate(&OperationRequest::find(&[], 4));
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].narration, "Searching for 4...");
    assert_eq!(steps[1].narration, "4 not found in array");
}

#[test]
fn test_slice_is_non_destructive() {
    let source = [5, 12, 8, 23, 16];
    let steps = generate(&OperationRequest::slice(&source, 1, 4));
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0].highlighted_sorted(), vec![1, 2, 3]);
    assert_eq!(steps[0].pointer_label.as_deref(), Some("start"));
    assert_eq!(steps[1].elements, vec![12, 8, 23]);
    assert_eq!(steps[1].highlighted_sorted(), vec![0, 1, 2]);
    assert_eq!(last(&steps).elements, source.to_vec());
    assert!(last(&steps).highlighted.is_empty());
    assert_eq!(last(&steps).narration, "Original array: [5, 12, 8, 23, 16] (unchanged)");
}

#[test]
fn test_slice_rejects_invalid_ranges() {
    let source = [1, 2, 3];
    for (start, end) in [(2, 1), (-1, 2), (0, 4)] {
        let steps = generate(&OperationRequest::slice(&source, start, end));
        assert_eq!(steps.len(), 1, "slice({}, {})", start, end);
        assert_eq!(steps[0].elements, vec![1, 2, 3]);
        assert_eq!(
            steps[0].narration,
            format!("Invalid slice range: [{}, {})", start, end)
        );
    }
}

#[test]
fn test_splice_replace_and_delete() {
    let source = [1, 2, 3];

    let replaced = generate(&OperationRequest::splice(&source, 1, Some(9)));
    assert_eq!(replaced.len(), 3);
    assert_eq!(replaced[0].narration, "Splicing at index 1: replacing 2 with 9");
    assert_eq!(replaced[1].pointer_label.as_deref(), Some("modified"));
    assert_eq!(last(&replaced).elements, vec![1, 9, 3]);

    let deleted = generate(&OperationRequest::splice(&source, 1, None));
    assert_eq!(deleted[0].narration, "Splicing at index 1: removing 2");
    assert_eq!(
        deleted[1].narration,
        "Removed 2. Elements after index 1 shifted left"
    );
    assert_eq!(last(&deleted).elements, vec![1, 3]);
    assert_eq!(last(&deleted).narration, "Splice complete. New array: [1, 3]");
}

#[test]
fn test_splice_rejects_bad_index() {
    for index in [-1, 3, i64::MAX] {
        let steps = generate(&OperationRequest::splice(&[1, 2, 3], index, Some(0)));
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].narration, format!("Invalid index: {}", index));
    }
    let empty = generate(&OperationRequest::splice(&[], 0, None));
    assert_eq!(empty.len(), 1);
}

#[test]
fn test_generate_is_repeatable() {
    let source = [4, 1, 4];
    let request = OperationRequest::find(&source, 1);
    assert_eq!(generate(&request), generate(&request));
}
