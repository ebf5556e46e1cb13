use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, StatusDto},
        record::{
            CreateRecordDto, RecordDto, RecordListResponseDto, RecordResponseDto,
            UpdateRecordDto,
        },
    },
    server::controller::{record, system},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        system::health,
        record::create_record,
        record::get_records,
        record::update_record,
        record::delete_record,
    ),
    components(schemas(
        RecordDto,
        CreateRecordDto,
        UpdateRecordDto,
        RecordResponseDto,
        RecordListResponseDto,
        ErrorDto,
        MessageDto,
        StatusDto,
    )),
    tags(
        (name = "record", description = "Record submission and management"),
        (name = "system", description = "Server status"),
    )
)]
pub struct ApiDoc;
