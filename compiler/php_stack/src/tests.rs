use super::*;

/// Nesting depth far beyond what a default thread stack survives.
const DEPTH: u32 = 200_000;

#[test]
fn test_passes_result_through() {
    let result: Result<u8, &str> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(result, Ok(7));
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    fn nest(depth: u32) -> u32 {
        ensure_sufficient_stack(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
    }

    assert_eq!(nest(DEPTH), DEPTH);
}

#[test]
fn test_mutable_state_through_closure() {
    fn count_down(n: u32, visited: &mut Vec<u32>) {
        ensure_sufficient_stack(|| {
            visited.push(n);
            if n > 0 {
                count_down(n - 1, visited);
            }
        });
    }

    let mut visited = Vec::new();
    count_down(3, &mut visited);
    assert_eq!(visited, vec![3, 2, 1, 0]);
}
