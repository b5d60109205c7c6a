use contracts::shared::validation::ValidationErrors;

use crate::shared::http::ApiError;

/// Submission bookkeeping of a create/edit form.
///
/// Input values live in the form's own signals; this tracks only what the
/// last submit produced. While `submitting` is set further submits are
/// refused, and a failed submit never clears the user's input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub errors: ValidationErrors,
    pub server_error: Option<String>,
    pub submitting: bool,
}

impl FormState {
    /// Validates and, when the input is acceptable and nothing is in flight,
    /// marks the form submitting and returns the draft to send.
    pub fn submit<D>(&mut self, validate: impl FnOnce() -> Result<D, ValidationErrors>) -> Option<D> {
        if self.submitting {
            return None;
        }
        self.server_error = None;
        match validate() {
            Ok(draft) => {
                self.errors = ValidationErrors::new();
                self.submitting = true;
                Some(draft)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Records a rejected request. Field errors from a local check land on
    /// their fields; anything else is shown as one message, which is also
    /// returned for the notification sink.
    pub fn fail(&mut self, err: ApiError) -> Option<String> {
        self.submitting = false;
        match err {
            ApiError::Validation(errors) => {
                self.errors = errors;
                None
            }
            other => {
                let message = other.to_string();
                self.server_error = Some(message.clone());
                Some(message)
            }
        }
    }

    pub fn succeed(&mut self) {
        *self = Self::default();
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        self.errors.get(field).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::aggregate::CategoryForm;
    use contracts::domain::a002_book::aggregate::BookForm;

    #[test]
    fn test_empty_name_sends_nothing() {
        let mut state = FormState::default();
        let form = CategoryForm {
            name: "   ".into(),
            description: "Stories".into(),
        };
        assert!(state.submit(|| form.validate()).is_none());
        assert!(!state.submitting);
        assert_eq!(state.field_error("name").as_deref(), Some("Name is required"));
    }

    #[test]
    fn test_double_submit_refused() {
        let mut state = FormState::default();
        let form = CategoryForm {
            name: "Poetry".into(),
            description: String::new(),
        };
        assert!(state.submit(|| form.validate()).is_some());
        assert!(state.submit(|| form.validate()).is_none());
    }

    #[test]
    fn test_server_rejection_is_verbatim_and_retryable() {
        let mut state = FormState::default();
        let form = BookForm {
            name: "Dune".into(),
            description: "Desert planet".into(),
            unit_price: "1".into(),
            units_in_stock: "3".into(),
            discount: String::new(),
            category_id: "2".into(),
        };
        assert!(state.submit(|| form.validate()).is_some());
        let notice = state.fail(ApiError::from_response(
            400,
            r#"{"message":"UnitPrice must be positive"}"#,
        ));
        assert_eq!(notice.as_deref(), Some("UnitPrice must be positive"));
        assert_eq!(state.server_error.as_deref(), Some("UnitPrice must be positive"));
        assert!(!state.submitting);
        // input untouched, a second attempt goes through
        assert_eq!(form.name, "Dune");
        assert!(state.submit(|| form.validate()).is_some());
        assert!(state.server_error.is_none());
    }

    #[test]
    fn test_fixed_input_clears_field_errors() {
        let mut state = FormState::default();
        let mut form = CategoryForm::default();
        state.submit(|| form.validate());
        assert!(!state.errors.is_empty());
        form.name = "Drama".into();
        assert!(state.submit(|| form.validate()).is_some());
        assert!(state.errors.is_empty());
        state.succeed();
        assert_eq!(state, FormState::default());
    }

    #[test]
    fn test_field_errors_stay_inline() {
        let mut state = FormState::default();
        let errors = CategoryForm::default().validate().unwrap_err();
        assert!(state.fail(ApiError::Validation(errors)).is_none());
        assert!(state.server_error.is_none());
        assert_eq!(state.field_error("name").as_deref(), Some("Name is required"));
    }
}
