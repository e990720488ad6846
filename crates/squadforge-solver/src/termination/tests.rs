//! Tests for termination conditions.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::*;

fn scope_with_nodes(nodes: u64) -> SearchScope {
    let mut scope = SearchScope::start();
    for _ in 0..nodes {
        scope.stats_mut().record_node();
    }
    scope
}

#[test]
fn test_node_count_termination() {
    let term = NodeCountTermination::new(3);

    assert!(!term.is_terminated(&scope_with_nodes(0)));
    assert!(!term.is_terminated(&scope_with_nodes(2)));
    assert!(term.is_terminated(&scope_with_nodes(3)));
}

#[test]
fn test_time_termination() {
    let scope = SearchScope::start();

    assert!(TimeTermination::new(Duration::ZERO).is_terminated(&scope));
    assert!(!TimeTermination::seconds(3600).is_terminated(&scope));
}

#[test]
fn test_external_termination() {
    let flag = Arc::new(AtomicBool::new(false));
    let term = ExternalTermination::new(Arc::clone(&flag));
    let scope = SearchScope::start();

    assert!(!term.is_terminated(&scope));
    flag.store(true, Ordering::SeqCst);
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_or_termination() {
    let term = OrTermination::new((
        TimeTermination::seconds(3600),
        NodeCountTermination::new(2),
    ));

    assert!(!term.is_terminated(&scope_with_nodes(1)));
    assert!(term.is_terminated(&scope_with_nodes(2)));
}

#[test]
fn test_optional_termination() {
    let absent: Option<NodeCountTermination> = None;
    let present = Some(NodeCountTermination::new(0));
    let scope = SearchScope::start();

    assert!(!absent.is_terminated(&scope));
    assert!(present.is_terminated(&scope));
    assert!(!NoTermination.is_terminated(&scope));
}
