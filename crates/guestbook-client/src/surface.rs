use crate::render::RenderOp;

/// Seam between the controller and whatever is displaying the list — the
/// page markup in production, a terminal in the CLI, a recorder in tests.
/// Methods take `&self` because the controller can be shared; impls keep
/// their own interior mutability.
pub trait Surface: Send + Sync {
    /// Apply render instructions in order.
    fn apply(&self, ops: &[RenderOp]);

    /// Blocking user notification, the alert() equivalent.
    fn notify(&self, message: &str);

    /// Follow a login or logout link.
    fn navigate(&self, url: &str);

    /// Raw value of the max-results form control, if the view has one.
    /// Re-read on every refresh; validation happens in the controller.
    fn max_results_input(&self) -> Option<String> {
        None
    }
}
