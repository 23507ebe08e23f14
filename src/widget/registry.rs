// ============================================================================
// Binding Registry
// Process-wide list of live bindings, for enumeration by tools and tests
// ============================================================================

use crate::domain::BindingId;
use parking_lot::Mutex;

static ACTIVE: Mutex<Vec<BindingId>> = parking_lot::const_mutex(Vec::new());

/// Keeps a binding listed while alive; dropping it removes the entry.
#[derive(Debug)]
pub(crate) struct RegistryToken(BindingId);

impl Drop for RegistryToken {
    fn drop(&mut self) {
        ACTIVE.lock().retain(|id| *id != self.0);
    }
}

pub(crate) fn register(id: BindingId) -> RegistryToken {
    ACTIVE.lock().push(id);
    RegistryToken(id)
}

/// Ids of all live bindings, in bind order.
pub fn active_bindings() -> Vec<BindingId> {
    ACTIVE.lock().clone()
}

pub fn is_active(id: BindingId) -> bool {
    ACTIVE.lock().contains(&id)
}
