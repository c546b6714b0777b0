/// Lifecycle of a collection fetched once per view mount.
///
/// There is no error state: a failed fetch settles into an empty list, which
/// renders the same as a collection the server reports as empty.
#[derive(Clone, Debug, PartialEq)]
pub enum ListState<R> {
    Loading,
    Ready(Vec<R>),
}

impl<R> Default for ListState<R> {
    fn default() -> Self {
        ListState::Loading
    }
}

impl<R> ListState<R> {
    /// Settles a fetch outcome. The error is handed back so the caller decides
    /// whether it goes further than a log line.
    pub fn from_outcome<E>(outcome: Result<Vec<R>, E>) -> (Self, Option<E>) {
        match outcome {
            Ok(records) => (ListState::Ready(records), None),
            Err(err) => (ListState::Ready(Vec::new()), Some(err)),
        }
    }

    /// Records in server order; empty while loading.
    pub fn records(&self) -> &[R] {
        match self {
            ListState::Loading => &[],
            ListState::Ready(records) => records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading_and_empty() {
        let state = ListState::<u32>::default();
        assert_eq!(state, ListState::Loading);
        assert!(state.records().is_empty());
    }

    #[test]
    fn test_success_keeps_server_order() {
        let (state, failure) = ListState::from_outcome(Ok::<_, String>(vec![3, 1, 2]));
        assert!(failure.is_none());
        assert_eq!(state.records(), &[3, 1, 2]);
    }

    #[test]
    fn test_failure_settles_empty() {
        let (state, failure) = ListState::<u32>::from_outcome(Err("connection refused"));
        assert_eq!(failure, Some("connection refused"));
        assert_eq!(state, ListState::Ready(Vec::new()));
        assert!(state.records().is_empty());
    }
}
