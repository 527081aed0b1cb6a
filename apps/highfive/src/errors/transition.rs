//! Error returned by the dispatcher, carrying enough context to diagnose a
//! failed transition without extra logging.

use thiserror::Error;

use crate::actions::Request;
use crate::domain::State;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Error)]
#[error("{request} rejected selection {selection:?}: {source}")]
pub struct TransitionError {
    pub request: Request,
    pub selection: Vec<usize>,
    pub state: Box<State>,
    #[source]
    pub source: DomainError,
}

impl TransitionError {
    pub fn is_invariant(&self) -> bool {
        self.source.is_invariant()
    }
}
