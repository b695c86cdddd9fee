use chrono::Utc;
use diesel::prelude::*;

use crate::domain::promotion::{
    NewPromotion as DomainNewPromotion, Promotion as DomainPromotion, PromotionListQuery,
    UpdatePromotion as DomainUpdatePromotion,
};
use crate::models::promotion::{
    NewPromotion as DbNewPromotion, Promotion as DbPromotion, SetPromotionActive,
    UpdatePromotion as DbUpdatePromotion,
};
use crate::repository::{DieselRepository, PromotionReader, PromotionWriter, RepositoryResult};

impl PromotionReader for DieselRepository {
    fn get_promotion_by_id(&self, id: i32) -> RepositoryResult<Option<DomainPromotion>> {
        use crate::schema::promotions;

        let mut conn = self.conn()?;

        let promotion = promotions::table
            .filter(promotions::id.eq(id))
            .first::<DbPromotion>(&mut conn)
            .optional()?;

        Ok(promotion.map(DomainPromotion::from))
    }

    fn list_promotions(&self, query: PromotionListQuery) -> RepositoryResult<Vec<DomainPromotion>> {
        use crate::schema::promotions;

        let mut conn = self.conn()?;

        let mut items_query = promotions::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(name) = query.name.as_ref() {
            items_query = items_query.filter(promotions::name.eq(name.clone()));
        }

        if let Some(products_type) = query.products_type.as_ref() {
            items_query = items_query.filter(promotions::products_type.eq(products_type.clone()));
        }

        if let Some(date) = query.active_on {
            items_query = items_query
                .filter(promotions::start_date.le(date))
                .filter(promotions::end_date.ge(date));
        }

        let db_promotions = items_query
            .order(promotions::id.asc())
            .load::<DbPromotion>(&mut conn)?;

        Ok(db_promotions
            .into_iter()
            .map(DomainPromotion::from)
            .collect())
    }
}

impl PromotionWriter for DieselRepository {
    fn create_promotion(
        &self,
        new_promotion: &DomainNewPromotion,
    ) -> RepositoryResult<DomainPromotion> {
        use crate::schema::promotions;

        let mut conn = self.conn()?;
        let insertable = DbNewPromotion::from(new_promotion);

        let created = diesel::insert_into(promotions::table)
            .values(&insertable)
            .get_result::<DbPromotion>(&mut conn)?;

        Ok(created.into())
    }

    fn update_promotion(
        &self,
        promotion_id: i32,
        updates: &DomainUpdatePromotion,
    ) -> RepositoryResult<DomainPromotion> {
        use crate::schema::promotions;

        let mut conn = self.conn()?;
        let db_updates = DbUpdatePromotion::from(updates);

        let target = promotions::table.filter(promotions::id.eq(promotion_id));

        let updated = diesel::update(target)
            .set(&db_updates)
            .get_result::<DbPromotion>(&mut conn)?;

        Ok(updated.into())
    }

    fn set_promotion_active(
        &self,
        promotion_id: i32,
        is_active: bool,
    ) -> RepositoryResult<DomainPromotion> {
        use crate::schema::promotions;

        let mut conn = self.conn()?;
        let changes = SetPromotionActive {
            is_active,
            updated_at: Utc::now().naive_utc(),
        };

        let target = promotions::table.filter(promotions::id.eq(promotion_id));

        let updated = diesel::update(target)
            .set(&changes)
            .get_result::<DbPromotion>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_promotion(&self, promotion_id: i32) -> RepositoryResult<bool> {
        use crate::schema::promotions;

        let mut conn = self.conn()?;
        let target = promotions::table.filter(promotions::id.eq(promotion_id));

        let deleted = diesel::delete(target).execute(&mut conn)?;

        Ok(deleted > 0)
    }
}
