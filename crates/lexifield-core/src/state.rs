//! Request lifecycle state for presentation code
//!
//! Replaces separate loading / error / result flags with a single tagged value.

/// State of one outstanding request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState<T, E> {
    /// Nothing requested yet
    #[default]
    Idle,

    /// Request in flight
    Pending,

    /// Request completed
    Success(T),

    /// Request failed
    Failed(E),
}

impl<T, E> RequestState<T, E> {
    /// Start a new request, discarding any previous outcome
    pub fn begin(&mut self) {
        *self = Self::Pending;
    }

    /// Record the outcome of the request
    pub fn resolve(&mut self, outcome: Result<T, E>) {
        *self = match outcome {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failed(error),
        };
    }

    /// Drop any outcome and return to idle
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&E> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle() {
        let mut state: RequestState<u32, String> = RequestState::default();
        assert!(state.is_idle());

        state.begin();
        assert!(state.is_pending());
        assert_eq!(state.success(), None);

        state.resolve(Ok(7));
        assert_eq!(state.success(), Some(&7));
        assert_eq!(state.failure(), None);

        state.begin();
        state.resolve(Err("provider unavailable".to_string()));
        assert_eq!(state.failure().map(String::as_str), Some("provider unavailable"));

        state.reset();
        assert!(state.is_idle());
    }
}
