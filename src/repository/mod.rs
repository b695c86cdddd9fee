use crate::db::{DbConnection, DbPool};
use crate::domain::promotion::{NewPromotion, Promotion, PromotionListQuery, UpdatePromotion};

pub mod errors;
pub mod promotion;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over promotion records.
pub trait PromotionReader {
    fn get_promotion_by_id(&self, id: i32) -> RepositoryResult<Option<Promotion>>;
    fn list_promotions(&self, query: PromotionListQuery) -> RepositoryResult<Vec<Promotion>>;
}

/// Write operations over promotion records.
pub trait PromotionWriter {
    fn create_promotion(&self, new_promotion: &NewPromotion) -> RepositoryResult<Promotion>;
    fn update_promotion(
        &self,
        promotion_id: i32,
        updates: &UpdatePromotion,
    ) -> RepositoryResult<Promotion>;
    fn set_promotion_active(&self, promotion_id: i32, is_active: bool)
    -> RepositoryResult<Promotion>;
    /// Remove the record; returns `false` when nothing matched.
    fn delete_promotion(&self, promotion_id: i32) -> RepositoryResult<bool>;
}
