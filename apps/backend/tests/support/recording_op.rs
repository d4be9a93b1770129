//! Operation that records every apply/undo into a shared journal.

use std::sync::Arc;

use mars_backend::errors::domain::InfraErrorKind;
use mars_backend::{DomainError, Operation, Stores};
use parking_lot::Mutex;

pub type Journal = Arc<Mutex<Vec<String>>>;

pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

pub struct RecordingOp {
    name: String,
    journal: Journal,
    fail_apply: bool,
    fail_undo: bool,
}

impl RecordingOp {
    pub fn new(name: &str, journal: &Journal) -> Self {
        Self {
            name: name.to_string(),
            journal: Arc::clone(journal),
            fail_apply: false,
            fail_undo: false,
        }
    }

    pub fn failing(mut self) -> Self {
        self.fail_apply = true;
        self
    }

    pub fn failing_undo(mut self) -> Self {
        self.fail_undo = true;
        self
    }
}

impl Operation for RecordingOp {
    fn apply(&mut self, _stores: &Stores) -> Result<(), DomainError> {
        self.journal.lock().push(format!("apply:{}", self.name));
        if self.fail_apply {
            return Err(DomainError::other(format!("{} refused", self.name)));
        }
        Ok(())
    }

    fn undo(&mut self, _stores: &Stores) -> Result<(), DomainError> {
        self.journal.lock().push(format!("undo:{}", self.name));
        if self.fail_undo {
            return Err(DomainError::infra(
                InfraErrorKind::StoreWrite,
                format!("{} cannot be undone", self.name),
            ));
        }
        Ok(())
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}
