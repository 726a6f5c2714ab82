//! UI state and the fetch-outcome transition.

use crate::error::ApiError;
use crate::types::NotaTarea;

/// What the screen shows. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    /// A fetch is in flight. Initial state.
    #[default]
    Loading,
    /// Records from the most recent successful fetch, in server order.
    Success(Vec<NotaTarea>),
    /// The last fetch failed. The cause is not retained.
    Error,
}

/// Which fetch failures are turned into `UiState::Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Every failure becomes `Error`.
    #[default]
    RecoverAll,
    /// Only I/O-class failures become `Error`. Anything else is returned to
    /// the fetch task and the state is left as it was.
    RecoverIoOnly,
}

impl FailurePolicy {
    pub fn recovers(&self, err: &ApiError) -> bool {
        match self {
            FailurePolicy::RecoverAll => true,
            FailurePolicy::RecoverIoOnly => err.is_io(),
        }
    }
}

impl UiState {
    /// Map a finished fetch to the next state. `Err` means the failure is
    /// not recovered under `policy` and must escape to the caller.
    pub fn from_fetch(
        result: Result<Vec<NotaTarea>, ApiError>,
        policy: FailurePolicy,
    ) -> Result<UiState, ApiError> {
        match result {
            Ok(notas) => Ok(UiState::Success(notas)),
            Err(err) if policy.recovers(&err) => Ok(UiState::Error),
            Err(err) => Err(err),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    pub fn notas(&self) -> Option<&[NotaTarea]> {
        match self {
            UiState::Success(notas) => Some(notas),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nota(id: u64) -> NotaTarea {
        NotaTarea {
            id,
            titulo: format!("nota {id}"),
            contenido: None,
            estatus: None,
            tipo: 0,
            fecha: "2024-01-01".to_string(),
            fecha_modi: "2024-01-01".to_string(),
            fecha_cum: None,
        }
    }

    #[test]
    fn default_is_loading() {
        assert_eq!(UiState::default(), UiState::Loading);
        assert!(UiState::default().is_loading());
    }

    #[test]
    fn success_keeps_records_verbatim() {
        let notas = vec![nota(2), nota(1), nota(2)];
        let state = UiState::from_fetch(Ok(notas.clone()), FailurePolicy::RecoverAll).unwrap();
        assert_eq!(state.notas(), Some(notas.as_slice()));
    }

    #[test]
    fn empty_result_is_success() {
        let state = UiState::from_fetch(Ok(Vec::new()), FailurePolicy::RecoverIoOnly).unwrap();
        assert_eq!(state, UiState::Success(Vec::new()));
    }

    #[test]
    fn io_failure_is_error_under_both_policies() {
        for policy in [FailurePolicy::RecoverAll, FailurePolicy::RecoverIoOnly] {
            let err = ApiError::Transport("timed out".to_string());
            assert_eq!(UiState::from_fetch(Err(err), policy).unwrap(), UiState::Error);
        }
    }

    #[test]
    fn parse_failure_depends_on_policy() {
        let err = ApiError::DeserializationError("bad".to_string());
        assert_eq!(
            UiState::from_fetch(Err(err), FailurePolicy::RecoverAll).unwrap(),
            UiState::Error
        );

        let err = ApiError::DeserializationError("bad".to_string());
        let escaped = UiState::from_fetch(Err(err), FailurePolicy::RecoverIoOnly).unwrap_err();
        assert!(matches!(escaped, ApiError::DeserializationError(_)));
    }
}
