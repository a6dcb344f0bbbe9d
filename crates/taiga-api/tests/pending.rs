use taiga_api::Pending;
use taiga_core::TaigaError;

#[test]
fn test_ready_handle_yields_result_once() {
    let mut pending = Pending::ok(42u32);
    assert_eq!(pending.try_take().unwrap().unwrap(), 42);
    assert!(pending.is_consumed());
    assert!(pending.try_take().is_none());
}

#[test]
fn test_unresolved_handle_is_empty_until_resolved() {
    let (resolver, mut pending) = Pending::<String>::channel();
    assert!(pending.try_take().is_none());
    assert!(pending.try_take().is_none());

    assert!(resolver.resolve(Ok("done".to_string())));
    assert_eq!(pending.try_take().unwrap().unwrap(), "done");
    assert!(pending.try_take().is_none());
}

#[test]
fn test_dropped_resolver_resolves_to_error() {
    let (resolver, mut pending) = Pending::<u8>::channel();
    drop(resolver);
    let result = pending.try_take().unwrap();
    assert!(matches!(result, Err(TaigaError::Internal(_))));
    assert!(pending.try_take().is_none());
}

#[test]
fn test_resolving_after_handle_dropped_reports_false() {
    let (resolver, pending) = Pending::<u8>::channel();
    drop(pending);
    assert!(!resolver.resolve(Ok(1)));
}

#[test]
fn test_error_handle() {
    let mut pending = Pending::<u8>::err(TaigaError::Validation("bad".to_string()));
    assert!(matches!(
        pending.try_take(),
        Some(Err(TaigaError::Validation(_)))
    ));
}

#[tokio::test]
async fn test_wait_receives_value_resolved_from_task() {
    let (resolver, pending) = Pending::<u32>::channel();
    tokio::spawn(async move {
        resolver.resolve(Ok(7));
    });
    assert_eq!(pending.wait().await.unwrap(), 7);
}
