//! In-memory `OrderRepository` used by handler and service tests, so the HTTP
//! contract can be exercised without a database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{CategoryRef, NewOrderInput, OrderView, ProductView, UserRef};
use crate::domain::ports::OrderRepository;

pub(crate) struct MemoryOrderRepository {
    users: HashMap<Uuid, UserRef>,
    products: HashMap<Uuid, ProductView>,
    orders: Mutex<Vec<OrderView>>,
    clock: AtomicI64,
    fail: bool,
}

impl MemoryOrderRepository {
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
            products: HashMap::new(),
            orders: Mutex::new(Vec::new()),
            clock: AtomicI64::new(0),
            fail: false,
        }
    }

    pub fn with_user(mut self, id: Uuid, name: &str) -> Self {
        self.users.insert(
            id,
            UserRef {
                id,
                name: name.to_string(),
            },
        );
        self
    }

    pub fn with_product(mut self, id: Uuid, name: &str, price: f64) -> Self {
        self.products.insert(
            id,
            ProductView {
                id,
                name: name.to_string(),
                price,
                category: CategoryRef {
                    id: Uuid::new_v4(),
                    name: "Peripherals".to_string(),
                    icon: Some("keyboard".to_string()),
                    color: Some("#00aaff".to_string()),
                },
            },
        );
        self
    }

    /// Every repository call fails with `Internal`, for failure-path tests.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::Internal("store offline".to_string()));
        }
        Ok(())
    }

    /// Strictly increasing timestamps so sort assertions never tie.
    fn next_date(&self) -> DateTime<Utc> {
        let tick = self.clock.fetch_add(1, Ordering::SeqCst);
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(tick)
    }

    fn sorted_desc(mut orders: Vec<OrderView>) -> Vec<OrderView> {
        orders.sort_by(|a, b| b.date_ordered.cmp(&a.date_ordered));
        orders
    }
}

impl OrderRepository for MemoryOrderRepository {
    fn list(&self) -> Result<Vec<OrderView>, DomainError> {
        self.check()?;
        let orders = self.orders.lock().expect("lock poisoned").clone();
        Ok(Self::sorted_desc(orders))
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<OrderView>, DomainError> {
        self.check()?;
        let orders = self.orders.lock().expect("lock poisoned");
        Ok(orders.iter().find(|o| o.id == id).cloned())
    }

    fn create(&self, input: NewOrderInput) -> Result<OrderView, DomainError> {
        self.check()?;
        let user = self
            .users
            .get(&input.user_id)
            .cloned()
            .ok_or_else(|| DomainError::InvalidInput("unknown user reference".to_string()))?;
        let mut products = Vec::with_capacity(input.product_ids.len());
        for product_id in &input.product_ids {
            let product = self
                .products
                .get(product_id)
                .cloned()
                .ok_or_else(|| DomainError::InvalidInput("unknown product reference".to_string()))?;
            products.push(product);
        }

        let view = OrderView {
            id: Uuid::new_v4(),
            address: input.address,
            city: input.city,
            country: input.country,
            phone: input.phone,
            status: input.status.unwrap_or_else(|| "Pending".to_string()),
            total_price: input.total_price,
            quantity: input.quantity,
            user,
            products,
            date_ordered: self.next_date(),
        };
        self.orders.lock().expect("lock poisoned").push(view.clone());
        Ok(view)
    }

    fn update_status(&self, id: Uuid, status: String) -> Result<OrderView, DomainError> {
        self.check()?;
        let mut orders = self.orders.lock().expect("lock poisoned");
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(DomainError::NotFound)?;
        order.status = status;
        Ok(order.clone())
    }

    fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.check()?;
        let mut orders = self.orders.lock().expect("lock poisoned");
        let index = orders
            .iter()
            .position(|o| o.id == id)
            .ok_or(DomainError::NotFound)?;
        orders.remove(index);
        Ok(())
    }

    fn list_by_user(&self, user_id: Uuid) -> Result<Vec<OrderView>, DomainError> {
        self.check()?;
        let orders = self.orders.lock().expect("lock poisoned");
        let mine: Vec<OrderView> = orders
            .iter()
            .filter(|o| o.user.id == user_id)
            .cloned()
            .collect();
        Ok(Self::sorted_desc(mine))
    }

    fn total_sales(&self) -> Result<f64, DomainError> {
        self.check()?;
        let orders = self.orders.lock().expect("lock poisoned");
        Ok(orders.iter().map(|o| o.total_price).sum())
    }

    fn count(&self) -> Result<i64, DomainError> {
        self.check()?;
        Ok(self.orders.lock().expect("lock poisoned").len() as i64)
    }
}

pub(crate) fn order_input(user_id: Uuid, product_ids: Vec<Uuid>, total_price: f64) -> NewOrderInput {
    NewOrderInput {
        address: "1 Main St".to_string(),
        city: "Springfield".to_string(),
        country: "US".to_string(),
        phone: "555-0100".to_string(),
        status: None,
        total_price,
        quantity: product_ids.len() as i32,
        user_id,
        product_ids,
    }
}
