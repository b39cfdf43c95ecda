//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with one board post they wrote.
///
/// # Returns
/// - `Ok((user, board))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_board_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::board::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let board = crate::factory::board::create_board(db, user.id).await?;

    Ok((user, board))
}

/// Creates a user, a category and one ingredient owned by the user.
///
/// # Returns
/// - `Ok((user, category, ingredient))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_ingredient_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::ingredient_category::Model,
        entity::ingredient::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let category = crate::factory::ingredient_category::create_category(db).await?;
    let ingredient =
        crate::factory::ingredient::create_ingredient(db, user.id, category.id).await?;

    Ok((user, category, ingredient))
}
