use serde::{Deserialize, Serialize};

use crate::gate::SubmissionForm;

/// One network-address/host-count record, as stored and as listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AllocationEntry {
    pub address: String,
    pub host_count: i64,
}

/// The create form. Field names are the page's input names; the host count
/// arrives as raw text and only the gate decides whether it parses.
#[derive(Debug, Deserialize)]
pub struct AllocationForm {
    pub adresse_ip: String,
    pub nombre_hotes: String,
}

/// Form state echoed back when the gate vetoes a submission: the fields as
/// the gate left them (blanked or not) plus the error-slot message.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FormState {
    pub adresse_ip: String,
    pub nombre_hotes: String,
    pub error: String,
}

impl FormState {
    pub fn from_submission(adresse_ip: &str, nombre_hotes: &str) -> Self {
        FormState {
            adresse_ip: adresse_ip.to_string(),
            nombre_hotes: nombre_hotes.to_string(),
            error: String::new(),
        }
    }
}

impl SubmissionForm for FormState {
    fn set_error(&mut self, message: &str) {
        self.error = message.to_string();
    }

    fn clear_error(&mut self) {
        self.error.clear();
    }

    fn clear_address(&mut self) {
        self.adresse_ip.clear();
    }

    fn clear_host_count(&mut self) {
        self.nombre_hotes.clear();
    }
}

/// The edit form posted back from the edit page.
#[derive(Debug, Deserialize)]
pub struct EditForm {
    pub nouveau_nombre_hotes: String,
}

/// Payload backing the edit page for one address.
#[derive(Debug, Serialize, Deserialize)]
pub struct EditPage {
    pub adresse_ip: String,
}
