//! Loan request form state machine

use crate::service::{LoanApplication, LoanServiceTrait};
use crate::state::mask::MaskPattern;

/// Person type selected on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersonType {
    #[default]
    Individual,
    Company,
}

impl PersonType {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Individual => Self::Company,
            Self::Company => Self::Individual,
        }
    }

    /// Wire discriminator sent to the loan service
    pub fn request_value(&self) -> &'static str {
        match self {
            Self::Individual => "pf",
            Self::Company => "pj",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Company => "Company",
        }
    }

    /// Label for the document field
    pub fn document_label(&self) -> &'static str {
        match self {
            Self::Individual => "CPF",
            Self::Company => "CNPJ",
        }
    }

    /// Label for the name field
    pub fn name_label(&self) -> &'static str {
        match self {
            Self::Individual => "Name",
            Self::Company => "Company name",
        }
    }

    /// Display mask for the document field
    pub fn document_mask(&self) -> MaskPattern {
        match self {
            Self::Individual => MaskPattern::CPF,
            Self::Company => MaskPattern::CNPJ,
        }
    }
}

/// Lifecycle of the single outbound loan request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Succeeded(String),
    Failed(String),
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }
}

/// Loan request form
///
/// Owns every field value, the person-type selector, and the submission
/// state. The document is stored digit-only; its mask is derived from the
/// person type at render time.
#[derive(Debug, Clone, Default)]
pub struct LoanForm {
    pub person_type: PersonType,
    document: String,
    pub name: String,
    pub current_debt: String,
    pub requested_loan: String,
    pub submission: SubmissionState,
}

impl LoanForm {
    /// Replace the person type.
    ///
    /// The stored document is always cleared: digits entered under one mask
    /// would be misaligned under the other.
    pub fn set_person_type(&mut self, person_type: PersonType) {
        self.person_type = person_type;
        self.document.clear();
    }

    /// The canonical digit-only document value.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// The document rendered under the active mask.
    pub fn document_display(&self) -> String {
        self.person_type.document_mask().apply(&self.document)
    }

    /// Store a document value, dropping every non-digit character.
    pub fn set_document(&mut self, raw: &str) {
        self.document = raw.chars().filter(char::is_ascii_digit).collect();
    }

    /// Append one typed character to the document; non-digits are dropped.
    pub fn push_document_char(&mut self, c: char) {
        if c.is_ascii_digit() {
            self.document.push(c);
        }
    }

    /// Remove the last document digit.
    pub fn pop_document_char(&mut self) {
        self.document.pop();
    }

    /// Submit gate: every field filled and no request in flight.
    pub fn can_submit(&self) -> bool {
        !self.submission.is_in_flight()
            && !self.document.is_empty()
            && !self.name.is_empty()
            && !self.current_debt.is_empty()
            && !self.requested_loan.is_empty()
    }

    /// Request body for the loan service. Amounts are sent as the raw
    /// strings the user typed.
    pub fn application(&self) -> LoanApplication {
        LoanApplication {
            person_type: self.person_type.request_value().to_string(),
            document: self.document.clone(),
            name: self.name.clone(),
            current_debt: self.current_debt.clone(),
            requested_loan: self.requested_loan.clone(),
        }
    }

    /// Drive one submission through the loan service.
    ///
    /// Enters `InFlight` before the request is dispatched, discarding any
    /// prior settled payload, and settles into `Succeeded` or `Failed` on
    /// every exit path so the gate can never stay stuck. A call while a
    /// request is outstanding (or while any required field is empty) is a
    /// no-op.
    pub async fn submit<S: LoanServiceTrait>(&mut self, service: &S) {
        if !self.can_submit() {
            return;
        }

        self.submission = SubmissionState::InFlight;
        let outcome = service.request_loan(self.application()).await;
        self.submission = match outcome {
            Ok(message) => {
                tracing::info!("loan request succeeded");
                SubmissionState::Succeeded(message)
            }
            Err(err) => {
                tracing::warn!(error = %err, "loan request failed");
                SubmissionState::Failed(err.display_message())
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{MockLoanServiceTrait, ServiceError, FALLBACK_FAILURE_MESSAGE};
    use pretty_assertions::assert_eq;

    fn filled_form() -> LoanForm {
        let mut form = LoanForm::default();
        form.set_document("529.982.247-25");
        form.name = "Ana".to_string();
        form.current_debt = "1000".to_string();
        form.requested_loan = "500".to_string();
        form
    }

    mod document_input {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_document_strips_mask_literals() {
            let mut form = LoanForm::default();
            form.set_document("529.982.247-25");
            assert_eq!(form.document(), "52998224725");
        }

        #[test]
        fn test_set_document_strips_arbitrary_garbage() {
            let mut form = LoanForm::default();
            form.set_document("12a.3-4");
            assert_eq!(form.document(), "1234");
        }

        #[test]
        fn test_set_document_is_digit_only_for_any_input() {
            let inputs = ["", "abc", "1 2\t3", "//..--", "999", "١٢٣"];
            for input in inputs {
                let mut form = LoanForm::default();
                form.set_document(input);
                assert!(
                    form.document().chars().all(|c| c.is_ascii_digit()),
                    "stored value {:?} for input {:?} contains non-digits",
                    form.document(),
                    input
                );
            }
        }

        #[test]
        fn test_push_document_char_drops_non_digits() {
            let mut form = LoanForm::default();
            for c in "5a2.9-x9".chars() {
                form.push_document_char(c);
            }
            assert_eq!(form.document(), "5299");
        }

        #[test]
        fn test_pop_document_char() {
            let mut form = LoanForm::default();
            form.set_document("529");
            form.pop_document_char();
            assert_eq!(form.document(), "52");
        }

        #[test]
        fn test_excess_digits_are_kept_in_the_model() {
            // The mask renderer truncates; the model does not.
            let mut form = LoanForm::default();
            form.set_document("529982247259999");
            assert_eq!(form.document(), "529982247259999");
            assert_eq!(form.document_display(), "529.982.247-25");
        }

        #[test]
        fn test_document_display_follows_person_type() {
            let mut form = LoanForm::default();
            form.set_document("52998224725");
            assert_eq!(form.document_display(), "529.982.247-25");

            form.set_person_type(PersonType::Company);
            form.set_document("11222333000181");
            assert_eq!(form.document_display(), "11.222.333/0001-81");
        }
    }

    mod person_type {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_individual() {
            assert_eq!(LoanForm::default().person_type, PersonType::Individual);
        }

        #[test]
        fn test_switch_to_company_clears_document() {
            let mut form = LoanForm::default();
            form.set_document("52998224725");
            form.set_person_type(PersonType::Company);
            assert_eq!(form.document(), "");
        }

        #[test]
        fn test_switch_back_to_individual_clears_document() {
            let mut form = LoanForm::default();
            form.set_person_type(PersonType::Company);
            form.set_document("11222333000181");
            form.set_person_type(PersonType::Individual);
            assert_eq!(form.document(), "");
        }

        #[test]
        fn test_switch_invalidates_submit_gate() {
            let mut form = filled_form();
            assert!(form.can_submit());
            form.set_person_type(PersonType::Company);
            assert!(!form.can_submit());
            form.set_document("11222333000181");
            assert!(form.can_submit());
        }

        #[test]
        fn test_request_values() {
            assert_eq!(PersonType::Individual.request_value(), "pf");
            assert_eq!(PersonType::Company.request_value(), "pj");
        }

        #[test]
        fn test_labels_follow_person_type() {
            assert_eq!(PersonType::Individual.document_label(), "CPF");
            assert_eq!(PersonType::Company.document_label(), "CNPJ");
            assert_eq!(PersonType::Individual.name_label(), "Name");
            assert_eq!(PersonType::Company.name_label(), "Company name");
        }
    }

    mod submit_gate {
        use super::*;

        #[test]
        fn test_can_submit_with_all_fields_filled() {
            assert!(filled_form().can_submit());
        }

        #[test]
        fn test_cannot_submit_with_any_field_empty() {
            let mut form = filled_form();
            form.set_document("");
            assert!(!form.can_submit());

            let mut form = filled_form();
            form.name.clear();
            assert!(!form.can_submit());

            let mut form = filled_form();
            form.current_debt.clear();
            assert!(!form.can_submit());

            let mut form = filled_form();
            form.requested_loan.clear();
            assert!(!form.can_submit());
        }

        #[test]
        fn test_cannot_submit_while_in_flight() {
            let mut form = filled_form();
            form.submission = SubmissionState::InFlight;
            assert!(!form.can_submit());
        }

        #[test]
        fn test_settled_states_gate_like_idle() {
            let mut form = filled_form();
            form.submission = SubmissionState::Succeeded("ok".to_string());
            assert!(form.can_submit());
            form.submission = SubmissionState::Failed("no".to_string());
            assert!(form.can_submit());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_success_settles_with_response_message() {
            let mut service = MockLoanServiceTrait::new();
            service
                .expect_request_loan()
                .times(1)
                .withf(|application| {
                    application.person_type == "pf"
                        && application.document == "52998224725"
                        && application.name == "Ana"
                        && application.current_debt == "1000"
                        && application.requested_loan == "500"
                })
                .returning(|_| Ok("Approved".to_string()));

            let mut form = filled_form();
            form.submit(&service).await;

            assert_eq!(
                form.submission,
                SubmissionState::Succeeded("Approved".to_string())
            );
        }

        #[tokio::test]
        async fn test_rejection_settles_with_server_message() {
            let mut service = MockLoanServiceTrait::new();
            service.expect_request_loan().times(1).returning(|_| {
                Err(ServiceError::Rejected(
                    "Insufficient credit history".to_string(),
                ))
            });

            let mut form = filled_form();
            form.submit(&service).await;

            assert_eq!(
                form.submission,
                SubmissionState::Failed("Insufficient credit history".to_string())
            );
        }

        #[tokio::test]
        async fn test_transport_failure_settles_with_fallback() {
            let mut service = MockLoanServiceTrait::new();
            service
                .expect_request_loan()
                .times(1)
                .returning(|_| Err(ServiceError::Unavailable("connection refused".to_string())));

            let mut form = filled_form();
            form.submit(&service).await;

            assert!(!FALLBACK_FAILURE_MESSAGE.is_empty());
            assert_eq!(
                form.submission,
                SubmissionState::Failed(FALLBACK_FAILURE_MESSAGE.to_string())
            );
        }

        #[tokio::test]
        async fn test_submit_is_noop_when_gate_is_closed() {
            let mut service = MockLoanServiceTrait::new();
            service.expect_request_loan().times(0);

            let mut form = filled_form();
            form.name.clear();
            form.submit(&service).await;

            assert_eq!(form.submission, SubmissionState::Idle);
        }

        #[tokio::test]
        async fn test_submit_is_noop_while_in_flight() {
            let mut service = MockLoanServiceTrait::new();
            service.expect_request_loan().times(0);

            let mut form = filled_form();
            form.submission = SubmissionState::InFlight;
            form.submit(&service).await;

            assert_eq!(form.submission, SubmissionState::InFlight);
        }

        #[tokio::test]
        async fn test_resubmit_after_failure_discards_prior_payload() {
            let mut service = MockLoanServiceTrait::new();
            service
                .expect_request_loan()
                .times(1)
                .returning(|_| Ok("Approved".to_string()));

            let mut form = filled_form();
            form.submission = SubmissionState::Failed("Insufficient credit history".to_string());
            form.submit(&service).await;

            assert_eq!(
                form.submission,
                SubmissionState::Succeeded("Approved".to_string())
            );
        }
    }
}
