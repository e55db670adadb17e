use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};

use crate::dtos::{AllocationForm, EditForm, EditPage, FormState};
use crate::error::StoreError;
use crate::gate::{Gatekeeper, Outcome, SubmissionForm, ValidationError};
use crate::routes::AppState;
use crate::validate::validate_host_count;

pub async fn list_allocations(State(state): State<Arc<AppState>>) -> Response {
    match state.store.list().await {
        Ok(entries) => Json(entries).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Create submission. The gate runs against a fresh read of the allocation
/// set; on Allow the insert still goes through the UNIQUE constraint, which
/// catches the race the advisory check cannot.
pub async fn create_allocation(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AllocationForm>,
) -> Response {
    let known = match state.store.addresses().await {
        Ok(known) => known,
        Err(err) => return err.into_response(),
    };

    let mut surface = FormState::from_submission(&form.adresse_ip, &form.nombre_hotes);
    let gate = Gatekeeper::new(known);

    match gate.attempt_submit(&mut surface, &form.adresse_ip, &form.nombre_hotes) {
        Outcome::Veto(err) => {
            tracing::info!(address = %form.adresse_ip, ?err, "submission vetoed");
            (veto_status(err), Json(surface)).into_response()
        }
        Outcome::Allow {
            address,
            host_count,
        } => match state.store.insert(&address, host_count).await {
            Ok(()) => {
                tracing::info!(%address, host_count, "allocation created");
                Redirect::to("/allocations").into_response()
            }
            Err(StoreError::Duplicate) => {
                let err = ValidationError::DuplicateAddress;
                surface.set_error(err.message());
                surface.clear_address();
                surface.clear_host_count();
                (StatusCode::CONFLICT, Json(surface)).into_response()
            }
            Err(err) => err.into_response(),
        },
    }
}

/// Edit navigation target. Mirrors the original page: the form is rendered
/// for whatever address is in the URL, without an existence check.
pub async fn edit_page(Path(adresse): Path<String>) -> Json<EditPage> {
    Json(EditPage {
        adresse_ip: adresse,
    })
}

pub async fn save_edit(
    State(state): State<Arc<AppState>>,
    Path(adresse): Path<String>,
    Form(form): Form<EditForm>,
) -> Response {
    let host_count = match validate_host_count(&form.nouveau_nombre_hotes) {
        Some(n) => n,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                ValidationError::InvalidHostCount.message(),
            )
                .into_response();
        }
    };

    match state.store.update_host_count(&adresse, host_count).await {
        Ok(true) => Redirect::to("/allocations").into_response(),
        Ok(false) => (StatusCode::NOT_FOUND, "unknown address").into_response(),
        Err(err) => err.into_response(),
    }
}

/// Delete-by-address. Deleting an address that is no longer present still
/// redirects; the follow-up reload shows the backend's current state either
/// way.
pub async fn delete_allocation(
    State(state): State<Arc<AppState>>,
    Path(adresse): Path<String>,
) -> Response {
    match state.store.delete(&adresse).await {
        Ok(removed) => {
            if removed {
                tracing::info!(address = %adresse, "allocation deleted");
            }
            Redirect::to("/allocations").into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn dump_table(State(state): State<Arc<AppState>>) -> Response {
    match state.store.list().await {
        Ok(entries) => {
            for entry in &entries {
                tracing::info!(
                    address = %entry.address,
                    host_count = entry.host_count,
                    "adresse_ip row"
                );
            }
            "Les données de la base de données ont été affichées dans le terminal.".into_response()
        }
        Err(err) => err.into_response(),
    }
}

fn veto_status(err: ValidationError) -> StatusCode {
    match err {
        ValidationError::DuplicateAddress => StatusCode::CONFLICT,
        ValidationError::MalformedAddress | ValidationError::InvalidHostCount => {
            StatusCode::BAD_REQUEST
        }
    }
}
