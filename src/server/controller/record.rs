use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, StatusDto},
        record::{
            CreateRecordDto, RecordListResponseDto, RecordResponseDto, UpdateRecordDto,
        },
    },
    server::{
        error::AppError,
        model::record::{CreateRecordParam, UpdateRecordParam},
        service::record::RecordService,
        state::AppState,
        util::payload::Payload,
    },
};

pub static RECORD_TAG: &str = "record";

#[utoipa::path(
    post,
    path = "/api/data/submit",
    tag = RECORD_TAG,
    request_body(content(
        (CreateRecordDto = "application/json"),
        (CreateRecordDto = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 200, description = "Successfully stored record", body = RecordResponseDto),
        (status = 415, description = "Unsupported content type", body = StatusDto),
        (status = 422, description = "Missing or unknown fields", body = StatusDto),
        (status = 500, description = "Failed to store record", body = ErrorDto)
    ),
)]
pub async fn create_record(
    State(state): State<AppState>,
    Payload(payload): Payload<CreateRecordDto>,
) -> Result<impl IntoResponse, AppError> {
    let record = RecordService::new(&state.db)
        .create(CreateRecordParam::from(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(RecordResponseDto {
            message: "Data stored successfully!".to_string(),
            data: record.into_dto(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/data/data",
    tag = RECORD_TAG,
    responses(
        (status = 200, description = "Successfully retrieved records", body = RecordListResponseDto),
        (status = 500, description = "Failed to fetch records", body = ErrorDto)
    ),
)]
pub async fn get_records(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let records = RecordService::new(&state.db).list().await?;

    Ok((
        StatusCode::OK,
        Json(RecordListResponseDto {
            message: "Data retrieved successfully!".to_string(),
            data: records.into_iter().map(|r| r.into_dto()).collect(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/data/data/{id}",
    tag = RECORD_TAG,
    params(
        ("id" = String, Path, description = "Record ID")
    ),
    request_body(content(
        (UpdateRecordDto = "application/json"),
        (UpdateRecordDto = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 200, description = "Successfully updated record", body = RecordResponseDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 422, description = "Unknown fields", body = StatusDto),
        (status = 500, description = "Failed to update record", body = ErrorDto)
    ),
)]
pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(payload): Payload<UpdateRecordDto>,
) -> Result<impl IntoResponse, AppError> {
    let record = RecordService::new(&state.db)
        .update(&id, UpdateRecordParam::from(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(RecordResponseDto {
            message: "Data updated successfully!".to_string(),
            data: record.into_dto(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/data/data/{id}",
    tag = RECORD_TAG,
    params(
        ("id" = String, Path, description = "Record ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted record", body = MessageDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 500, description = "Failed to delete record", body = ErrorDto)
    ),
)]
pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    RecordService::new(&state.db).delete(&id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Data deleted successfully!".to_string(),
        }),
    ))
}
