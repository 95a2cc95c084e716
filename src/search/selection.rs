use std::cell::RefCell;
use std::rc::Rc;

/// The record the visitor last clicked, shared by the result list and the map.
/// Either side may write it; both read it when rendering.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    current: Rc<RefCell<Option<String>>>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&self, id: impl Into<String>) {
        *self.current.borrow_mut() = Some(id.into());
    }

    pub fn clear(&self) {
        self.current.borrow_mut().take();
    }

    pub fn get(&self) -> Option<String> {
        self.current.borrow().clone()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.current.borrow().as_deref() == Some(id)
    }
}
