use crate::server::{
    data::board::BoardRepository,
    model::board::{BoardSearchParams, CreateBoardParams, UpdateBoardParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_detail;
mod search;
mod soft_delete;
mod toggle_like;
