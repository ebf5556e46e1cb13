use crate::server::{
    data::record::RecordRepository,
    model::record::{CreateRecordParam, UpdateRecordParam},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;
