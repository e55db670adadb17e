use std::collections::HashSet;

use crate::validate::{validate_address, validate_host_count};

/// Live read of the currently allocated addresses. The gate calls this on
/// every submission attempt, so implementations must answer with the latest
/// set rather than a cached one.
pub trait AddressDirectory {
    fn known_addresses(&self) -> HashSet<String>;
}

impl AddressDirectory for HashSet<String> {
    fn known_addresses(&self) -> HashSet<String> {
        self.clone()
    }
}

/// The submission surface the gate drives: the two input fields
/// (`adresse_ip`, `nombre_hotes`) and the single error-message slot.
pub trait SubmissionForm {
    fn set_error(&mut self, message: &str);
    fn clear_error(&mut self);
    fn clear_address(&mut self);
    fn clear_host_count(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateAddress,
    MalformedAddress,
    InvalidHostCount,
}

impl ValidationError {
    /// The user-facing message shown in the error slot.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::DuplicateAddress => "Adresse IP déjà existante !",
            ValidationError::MalformedAddress => "Veuillez entrer une adresse IP valide.",
            ValidationError::InvalidHostCount => "Veuillez entrer un nombre d'hôtes valide.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The submission may proceed to the backend with these values.
    Allow { address: String, host_count: i64 },
    Veto(ValidationError),
}

pub struct Gatekeeper<D: AddressDirectory> {
    directory: D,
}

impl<D: AddressDirectory> Gatekeeper<D> {
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// Runs the submission checks in strict order; the first failing check
    /// wins. A duplicate or malformed address blanks both input fields, a
    /// bad host count blanks only its own field, and an allowed submission
    /// clears the error slot.
    pub fn attempt_submit(
        &self,
        form: &mut dyn SubmissionForm,
        candidate: &str,
        raw_host_count: &str,
    ) -> Outcome {
        let known = self.directory.known_addresses();

        if known.contains(candidate) {
            return Self::veto(form, ValidationError::DuplicateAddress);
        }

        if !validate_address(candidate) {
            return Self::veto(form, ValidationError::MalformedAddress);
        }

        match validate_host_count(raw_host_count) {
            None => Self::veto(form, ValidationError::InvalidHostCount),
            Some(host_count) => {
                form.clear_error();
                Outcome::Allow {
                    address: candidate.to_string(),
                    host_count,
                }
            }
        }
    }

    fn veto(form: &mut dyn SubmissionForm, err: ValidationError) -> Outcome {
        form.set_error(err.message());
        if !matches!(err, ValidationError::InvalidHostCount) {
            form.clear_address();
        }
        form.clear_host_count();
        Outcome::Veto(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestForm {
        address: String,
        host_count: String,
        error: Option<String>,
    }

    impl TestForm {
        fn filled(address: &str, host_count: &str) -> Self {
            TestForm {
                address: address.into(),
                host_count: host_count.into(),
                error: None,
            }
        }
    }

    impl SubmissionForm for TestForm {
        fn set_error(&mut self, message: &str) {
            self.error = Some(message.to_string());
        }

        fn clear_error(&mut self) {
            self.error = None;
        }

        fn clear_address(&mut self) {
            self.address.clear();
        }

        fn clear_host_count(&mut self) {
            self.host_count.clear();
        }
    }

    fn known(addresses: &[&str]) -> HashSet<String> {
        addresses.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn duplicate_address_wins_regardless_of_host_count() {
        let gate = Gatekeeper::new(known(&["10.0.0.0"]));
        let mut form = TestForm::filled("10.0.0.0", "not-a-number");

        let outcome = gate.attempt_submit(&mut form, "10.0.0.0", "not-a-number");

        assert_eq!(outcome, Outcome::Veto(ValidationError::DuplicateAddress));
        assert_eq!(form.error.as_deref(), Some("Adresse IP déjà existante !"));
        assert!(form.address.is_empty());
        assert!(form.host_count.is_empty());
    }

    #[test]
    fn malformed_address_blanks_both_fields() {
        let gate = Gatekeeper::new(known(&["10.0.0.0"]));
        let mut form = TestForm::filled("10.0.0.x", "50");

        let outcome = gate.attempt_submit(&mut form, "10.0.0.x", "50");

        assert_eq!(outcome, Outcome::Veto(ValidationError::MalformedAddress));
        assert_eq!(
            form.error.as_deref(),
            Some("Veuillez entrer une adresse IP valide.")
        );
        assert!(form.address.is_empty());
        assert!(form.host_count.is_empty());
    }

    #[test]
    fn bad_host_count_keeps_the_address_field() {
        let gate = Gatekeeper::new(known(&[]));
        let mut form = TestForm::filled("10.0.0.1", "0");

        let outcome = gate.attempt_submit(&mut form, "10.0.0.1", "0");

        assert_eq!(outcome, Outcome::Veto(ValidationError::InvalidHostCount));
        assert_eq!(
            form.error.as_deref(),
            Some("Veuillez entrer un nombre d'hôtes valide.")
        );
        assert_eq!(form.address, "10.0.0.1");
        assert!(form.host_count.is_empty());
    }

    #[test]
    fn allowed_submission_clears_the_error_slot() {
        let gate = Gatekeeper::new(known(&["10.0.0.0"]));
        let mut form = TestForm::filled("192.168.1.1", "50");
        form.error = Some("stale message".into());

        let outcome = gate.attempt_submit(&mut form, "192.168.1.1", "50");

        assert_eq!(
            outcome,
            Outcome::Allow {
                address: "192.168.1.1".into(),
                host_count: 50,
            }
        );
        assert_eq!(form.error, None);
        assert_eq!(form.address, "192.168.1.1");
        assert_eq!(form.host_count, "50");
    }

    #[test]
    fn out_of_range_octets_still_pass_the_gate() {
        // The shape check is lenient on purpose; the gate inherits that.
        let gate = Gatekeeper::new(known(&[]));
        let mut form = TestForm::filled("999.999.999.999", "10");

        let outcome = gate.attempt_submit(&mut form, "999.999.999.999", "10");

        assert_eq!(
            outcome,
            Outcome::Allow {
                address: "999.999.999.999".into(),
                host_count: 10,
            }
        );
    }
}
