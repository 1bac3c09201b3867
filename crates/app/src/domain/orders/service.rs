//! Orders service.

use async_trait::async_trait;
use frontdash_checkout::status::OrderStatus;
use jiff::{Span, Timestamp};
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        drivers::records::DriverUuid,
        orders::{
            data::{NewOrder, OrderFilter, StatusChange},
            errors::OrdersServiceError,
            records::{OrderRecord, OrderUuid},
            repositories::{PgOrderLinesRepository, PgOrdersRepository},
        },
    },
};

// Matches the estimate quoted to the customer at checkout.
const ESTIMATED_DELIVERY_MINUTES: i64 = 35;

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders_repository: PgOrdersRepository,
    lines_repository: PgOrderLinesRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders_repository: PgOrdersRepository::new(),
            lines_repository: PgOrderLinesRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn place_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError> {
        let estimated_delivery = initial_estimate(order.placed_at);

        let mut tx = self.db.begin().await?;

        let mut created = self
            .orders_repository
            .create_order(&mut tx, &order, estimated_delivery)
            .await?;

        for line in &order.draft.lines {
            let created_line = self
                .lines_repository
                .create_order_line(&mut tx, created.uuid, line)
                .await?;

            created.lines.push(created_line);
        }

        tx.commit().await?;

        info!(order = %created.uuid, number = %created.order_number, "order placed");

        Ok(created)
    }

    async fn get_order(&self, uuid: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut order = self.orders_repository.get_order(&mut tx, uuid).await?;

        order.lines = self.lines_repository.get_order_lines(&mut tx, uuid).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn list_orders(
        &self,
        filter: OrderFilter,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.orders_repository.list_orders(&mut tx, filter).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn advance_status(
        &self,
        uuid: OrderUuid,
        change: StatusChange,
    ) -> Result<OrderRecord, OrdersServiceError> {
        // Refuse illegal moves before any SQL runs.
        ensure_legal(&change)?;

        let mut tx = self.db.begin().await?;

        let updated = self
            .orders_repository
            .update_status(&mut tx, uuid, &change)
            .await?;

        let Some(mut order) = updated else {
            // The guarded update matched nothing: either the order is gone
            // or another actor moved it first.
            let current = self.orders_repository.get_order(&mut tx, uuid).await?;

            return Err(OrdersServiceError::Conflict {
                current: current.status,
            });
        };

        order.lines = self.lines_repository.get_order_lines(&mut tx, uuid).await?;

        tx.commit().await?;

        info!(order = %uuid, from = %change.expected, to = %change.to, "order status advanced");

        Ok(order)
    }

    async fn assign_driver(
        &self,
        uuid: OrderUuid,
        driver: DriverUuid,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .orders_repository
            .assign_driver(&mut tx, uuid, driver)
            .await?;

        let Some(mut order) = updated else {
            let current = self.orders_repository.get_order(&mut tx, uuid).await?;

            return Err(OrdersServiceError::Conflict {
                current: current.status,
            });
        };

        order.lines = self.lines_repository.get_order_lines(&mut tx, uuid).await?;

        tx.commit().await?;

        info!(order = %uuid, %driver, "driver assigned");

        Ok(order)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Persist a priced draft as a pending order with its lines.
    ///
    /// The write is atomic: either the order and every line land, or
    /// nothing does.
    async fn place_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError>;

    /// Retrieve a single order with its lines.
    async fn get_order(&self, uuid: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// List orders matching the filter, without lines.
    async fn list_orders(
        &self,
        filter: OrderFilter,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Move an order along its lifecycle.
    ///
    /// The update only applies while the order is still in the state the
    /// caller observed; a concurrent move surfaces as a conflict rather
    /// than a silent overwrite.
    async fn advance_status(
        &self,
        uuid: OrderUuid,
        change: StatusChange,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Record the assigned driver and confirm a pending order.
    async fn assign_driver(
        &self,
        uuid: OrderUuid,
        driver: DriverUuid,
    ) -> Result<OrderRecord, OrdersServiceError>;
}

fn ensure_legal(change: &StatusChange) -> Result<(), OrdersServiceError> {
    change.expected.transition(change.to)?;

    Ok(())
}

fn initial_estimate(placed_at: Timestamp) -> Timestamp {
    placed_at.saturating_add(Span::new().minutes(ESTIMATED_DELIVERY_MINUTES))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn illegal_moves_are_refused_before_touching_storage() {
        let change = StatusChange {
            expected: OrderStatus::Delivered,
            to: OrderStatus::Preparing,
            estimated_delivery: None,
        };

        let result = ensure_legal(&change);

        assert!(
            matches!(result, Err(OrdersServiceError::Transition(_))),
            "expected a transition refusal, got {result:?}"
        );
    }

    #[test]
    fn forward_moves_pass_the_lifecycle_guard() -> TestResult {
        let change = StatusChange {
            expected: OrderStatus::Pending,
            to: OrderStatus::Confirmed,
            estimated_delivery: None,
        };

        ensure_legal(&change)?;

        Ok(())
    }

    #[test]
    fn initial_estimate_is_thirty_five_minutes_out() -> TestResult {
        let placed_at: Timestamp = "2026-08-05T18:00:00Z".parse()?;
        let expected: Timestamp = "2026-08-05T18:35:00Z".parse()?;

        assert_eq!(initial_estimate(placed_at), expected);

        Ok(())
    }
}
