use crate::server::{
    data::ingredient::IngredientRepository, model::ingredient::CreateIngredientParams,
};
use chrono::{Duration, NaiveDate};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_for_user;
mod get_all_by_user;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
