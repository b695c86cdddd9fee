use mockall::mock;

use super::{PromotionReader, PromotionWriter, RepositoryResult};
use crate::domain::promotion::{NewPromotion, Promotion, PromotionListQuery, UpdatePromotion};

mock! {
    pub PromotionReader {}

    impl PromotionReader for PromotionReader {
        fn get_promotion_by_id(&self, id: i32) -> RepositoryResult<Option<Promotion>>;
        fn list_promotions(&self, query: PromotionListQuery) -> RepositoryResult<Vec<Promotion>>;
    }
}

mock! {
    pub PromotionWriter {}

    impl PromotionWriter for PromotionWriter {
        fn create_promotion(&self, new_promotion: &NewPromotion) -> RepositoryResult<Promotion>;
        fn update_promotion(&self, promotion_id: i32, updates: &UpdatePromotion) -> RepositoryResult<Promotion>;
        fn set_promotion_active(&self, promotion_id: i32, is_active: bool) -> RepositoryResult<Promotion>;
        fn delete_promotion(&self, promotion_id: i32) -> RepositoryResult<bool>;
    }
}

/// Combined reader/writer mock for services that need both sides.
pub struct MockPromotionRepository {
    pub reader: MockPromotionReader,
    pub writer: MockPromotionWriter,
}

impl MockPromotionRepository {
    pub fn new() -> Self {
        Self {
            reader: MockPromotionReader::new(),
            writer: MockPromotionWriter::new(),
        }
    }
}

impl PromotionReader for MockPromotionRepository {
    fn get_promotion_by_id(&self, id: i32) -> RepositoryResult<Option<Promotion>> {
        self.reader.get_promotion_by_id(id)
    }

    fn list_promotions(&self, query: PromotionListQuery) -> RepositoryResult<Vec<Promotion>> {
        self.reader.list_promotions(query)
    }
}

impl PromotionWriter for MockPromotionRepository {
    fn create_promotion(&self, new_promotion: &NewPromotion) -> RepositoryResult<Promotion> {
        self.writer.create_promotion(new_promotion)
    }

    fn update_promotion(
        &self,
        promotion_id: i32,
        updates: &UpdatePromotion,
    ) -> RepositoryResult<Promotion> {
        self.writer.update_promotion(promotion_id, updates)
    }

    fn set_promotion_active(
        &self,
        promotion_id: i32,
        is_active: bool,
    ) -> RepositoryResult<Promotion> {
        self.writer.set_promotion_active(promotion_id, is_active)
    }

    fn delete_promotion(&self, promotion_id: i32) -> RepositoryResult<bool> {
        self.writer.delete_promotion(promotion_id)
    }
}
