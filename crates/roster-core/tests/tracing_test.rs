use roster_core::tracing::init_tracing;

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    tracing::info!(target: "roster_core", "tracing initialized twice without panicking");
}
