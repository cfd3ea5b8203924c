use std::path::{Path as FsPath, PathBuf};

use axum::extract::{Multipart, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    problem::validators::CreateProblemValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use civitas_core::domain::{
    analysis::ports::EnrichmentService,
    common::generate_uuid_v7,
    problem::{entities::Problem, ports::ProblemService, value_objects::CreateProblemInput},
    user::{services::resolve_reporter_ref, value_objects::ReporterRef},
};

const MAX_MEDIA_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateProblemResponse {
    pub data: Problem,
}

#[utoipa::path(
    post,
    path = "",
    tag = "problem",
    summary = "Report a problem",
    description = "Creates a problem from multipart fields plus an optional media file; media triggers background analysis",
    request_body(content = CreateProblemValidator, content_type = "multipart/form-data"),
    responses(
        (status = 201, body = CreateProblemResponse)
    )
)]
pub async fn create_problem(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<CreateProblemResponse>, ApiError> {
    let mut validator = CreateProblemValidator::default();
    let mut media: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "title" => validator.title = read_text(&name, field).await?,
            "description" => validator.description = read_text(&name, field).await?,
            "location" => validator.location = Some(read_text(&name, field).await?),
            "latitude" => validator.latitude = Some(read_number(&name, field).await?),
            "longitude" => validator.longitude = Some(read_number(&name, field).await?),
            "category" => validator.category = Some(read_text(&name, field).await?),
            "reported_by" => validator.reported_by = Some(read_text(&name, field).await?),
            "media" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read media: {}", e)))?;

                if data.len() > MAX_MEDIA_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Media too large. Max size is {} bytes",
                        MAX_MEDIA_SIZE
                    )));
                }

                media = Some((file_name, data.to_vec()));
            }
            _ => {}
        }
    }

    validator.validate().map_err(ApiError::from)?;

    let reported_by = match &validator.reported_by {
        Some(raw) => {
            let reporter: ReporterRef = raw
                .parse()
                .map_err(|_| ApiError::BadRequest(format!("Invalid reporter reference: {raw}")))?;
            Some(
                resolve_reporter_ref(&state.service.user_repository, reporter)
                    .await
                    .map_err(ApiError::from)?,
            )
        }
        None => None,
    };

    let media_url = match &media {
        Some((file_name, data)) => Some(store_media(&state, file_name, data).await?),
        None => None,
    };

    let result = state
        .service
        .create_problem(CreateProblemInput {
            title: validator.title,
            description: validator.description,
            location: validator.location,
            latitude: validator.latitude,
            longitude: validator.longitude,
            category: validator.category,
            reported_by,
            media_url: media_url.clone(),
        })
        .await;

    let created = match result {
        Ok(created) => created,
        Err(e) => {
            // Do not leave orphaned files behind a failed create. A failed
            // cleanup is logged and never masks the original error.
            if let Some(path) = media_url
                && let Err(cleanup_err) = tokio::fs::remove_file(&path).await
            {
                tracing::warn!(path, "Failed to clean up uploaded media: {}", cleanup_err);
            }
            return Err(ApiError::from(e));
        }
    };

    if created.has_media() {
        let service = state.service.clone();
        let problem_id = created.id;
        // Fire and forget: the report must not wait on the analysis service.
        tokio::spawn(async move {
            if let Err(e) = service.enrich_one(problem_id).await {
                tracing::warn!(problem_id = %problem_id, error = %e, "On-create enrichment failed");
            }
        });
    }

    Ok(Response::Created(CreateProblemResponse { data: created }))
}

async fn read_text(name: &str, field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read {}: {}", name, e)))
}

async fn read_number(
    name: &str,
    field: axum::extract::multipart::Field<'_>,
) -> Result<f64, ApiError> {
    read_text(name, field)
        .await?
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid number in field {}", name)))
}

async fn store_media(
    state: &AppState,
    original_name: &str,
    data: &[u8],
) -> Result<String, ApiError> {
    let extension = FsPath::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("bin");

    let dir = PathBuf::from(&state.args.uploads.uploads_dir).join("problems");
    tokio::fs::create_dir_all(&dir).await.map_err(|e| {
        tracing::error!("Failed to create uploads directory: {}", e);
        ApiError::InternalServerError("failed to store media".to_string())
    })?;

    let file_name = format!("{}.{extension}", generate_uuid_v7());
    let path = dir.join(&file_name);

    tokio::fs::write(&path, data).await.map_err(|e| {
        tracing::error!("Failed to write media file: {}", e);
        ApiError::InternalServerError("failed to store media".to_string())
    })?;

    Ok(path.to_string_lossy().into_owned())
}
