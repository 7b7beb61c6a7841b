use std::cell::{Cell, RefCell};

use super::{AuthObserver, IdentityProvider};
use crate::error::GlueError;
use crate::net::types::SessionUser;

/// In-process provider that records observers and scripts sign-out results.
#[derive(Default)]
pub(crate) struct MockProvider {
    observers: RefCell<Vec<AuthObserver>>,
    pub sign_out_error: RefCell<Option<String>>,
    pub sign_out_calls: Cell<usize>,
}

impl MockProvider {
    pub fn failing(message: &str) -> Self {
        let provider = Self::default();
        *provider.sign_out_error.borrow_mut() = Some(message.to_owned());
        provider
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Fire every registered observer, as the SDK does on a transition.
    pub fn emit(&self, user: Option<SessionUser>) {
        for observer in self.observers.borrow().iter() {
            observer(user.clone());
        }
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityProvider for MockProvider {
    fn subscribe(&self, observer: AuthObserver) {
        self.observers.borrow_mut().push(observer);
    }

    async fn sign_out(&self) -> Result<(), GlueError> {
        self.sign_out_calls.set(self.sign_out_calls.get() + 1);
        match self.sign_out_error.borrow().clone() {
            Some(message) => Err(GlueError::SignOut(message)),
            None => Ok(()),
        }
    }
}
