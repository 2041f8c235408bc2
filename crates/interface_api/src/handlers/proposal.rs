//! Proposal handlers

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use tracing::warn;

use domain_proposal::{CreateProposalRequest, ErrorHandler, ProposalError, Violation};

use crate::dto::proposal::{
    CreateProposalRequestDto, CreateProposalResponse, BODY_FIELD, BODY_MESSAGE,
};
use crate::{error::ApiError, AppState};

/// Creates a proposal
///
/// Body decoding, salary parsing and the workflow all run inside the error
/// handler, so every failure is reported with the same `{code, message,
/// details}` body.
pub async fn create_proposal(
    State(state): State<AppState>,
    payload: Result<Json<CreateProposalRequestDto>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateProposalResponse>), ApiError> {
    let created = ErrorHandler::intercept("create_proposal", || async move {
        let Json(request) = payload.map_err(unreadable_body)?;
        let request = CreateProposalRequest::try_from(request)?;
        state.workflow.create(request).await
    })
    .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Turns an undecodable body into a field violation on `body`
///
/// The rejection text names serde internals, so it is only logged.
fn unreadable_body(rejection: JsonRejection) -> ProposalError {
    warn!(
        status = %rejection.status(),
        reason = %rejection.body_text(),
        "Rejected proposal body"
    );
    ProposalError::validation_failed(vec![Violation::new(BODY_FIELD, BODY_MESSAGE)])
}
