use crate::actions::Action;
use crate::middleware::Middleware;
use crate::state::StateTree;

/// LoggingMiddleware - logs all actions passing through
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &StateTree) -> bool {
        log::debug!("Action: {:?}", action);
        true
    }
}
