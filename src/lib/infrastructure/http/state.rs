//! Application state module

use std::fmt;
use std::sync::Arc;

use crate::domain::contact::service::ContactService;

/// Global application state
#[derive(Clone)]
pub struct AppState<C: ContactService> {
    /// Contact service
    pub contacts: Arc<C>,
}

impl<C: ContactService> AppState<C> {
    /// Create a new application state
    pub fn new(contacts: C) -> Self {
        Self {
            contacts: Arc::new(contacts),
        }
    }
}

impl<C: ContactService> fmt::Debug for AppState<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("contacts", &"ContactService")
            .finish()
    }
}

#[cfg(test)]
use crate::domain::contact::service::MockContactService;

#[cfg(test)]
pub fn test_state(contacts: Option<MockContactService>) -> AppState<MockContactService> {
    AppState {
        contacts: contacts
            .map(Arc::new)
            .unwrap_or_else(|| Arc::new(MockContactService::new())),
    }
}
