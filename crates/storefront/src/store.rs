//! The storefront facade.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use techstore_cart::{
    AddItem, Cart, CartCommand, CartEntry, CartEvent, CartId, ClearCart, RemoveItem,
    UpdateQuantity,
};
use techstore_catalog::{Catalog, FilterCriteria, FilteredProducts, Product, ProductId};
use techstore_core::{DomainError, DomainResult, EntityId};
use techstore_events::{Event, EventBus, InMemoryEventBus, Subscription, execute};
use techstore_notifications::{NotificationQueue, Severity, Toast, ToastId};

use crate::countdown::Countdown;

/// How long a cart toast stays up before self-dismissing.
pub fn default_toast_duration() -> Duration {
    Duration::seconds(3)
}

/// Read snapshot of the cart: entries in insertion order plus derived totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub entries: Vec<CartEntry>,
    pub total_items: u64,
    /// In smallest currency unit.
    pub total_price: u64,
}

/// The in-process contract between the core stores and the presentation
/// layer.
///
/// One `Storefront` owns the catalog, the cart, the notification queue, the
/// event bus and the sale countdown. It is passed explicitly to whatever
/// renders it — there is no global instance. All mutation runs to completion
/// before returning, so every read reflects the most recent write.
///
/// Time never comes from the wall clock here: mutations take `now` from the
/// caller, and timers advance only through [`Storefront::tick`].
#[derive(Debug)]
pub struct Storefront {
    catalog: Catalog,
    cart: Cart,
    notifications: NotificationQueue,
    bus: Arc<InMemoryEventBus<CartEvent>>,
    inbox: Subscription<CartEvent>,
    filtered: Option<FilteredProducts>,
    countdown: Countdown,
}

impl Storefront {
    /// Wire up a storefront over a loaded catalog.
    ///
    /// The visible product list starts out *not yet computed* — distinct
    /// from a computed-but-empty list — until the first
    /// [`Storefront::set_filter_criteria`] call.
    pub fn new(catalog: Catalog, sale_ends: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let bus = Arc::new(InMemoryEventBus::new());
        let inbox = bus.subscribe();

        Self {
            catalog,
            cart: Cart::new(CartId::new(EntityId::new())),
            notifications: NotificationQueue::new(),
            bus,
            inbox,
            filtered: None,
            countdown: Countdown::new(sale_ends, now),
        }
    }

    // ---- Presentation → core ----------------------------------------------

    /// Replace the filter criteria wholesale and recompute the visible list.
    pub fn set_filter_criteria(&mut self, criteria: FilterCriteria) {
        let snapshot = FilteredProducts::compute(&self.catalog, &criteria);
        tracing::debug!(
            matching = snapshot.matching(),
            total = snapshot.total(),
            "visible products recomputed"
        );
        self.filtered = Some(snapshot);
    }

    /// Add one unit of a catalog product to the cart.
    ///
    /// The product must exist in the catalog (its name and price go on the
    /// cart entry); anything else is [`DomainError::NotFound`].
    pub fn add_to_cart(&mut self, product_id: ProductId, now: DateTime<Utc>) -> DomainResult<()> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(DomainError::not_found)?;

        let cmd = CartCommand::AddItem(AddItem {
            cart_id: self.cart.id_typed(),
            product_id,
            name: product.name.clone(),
            unit_price: product.price,
            occurred_at: now,
        });
        self.run_cart_command(&cmd, now)
    }

    /// Drop an entry entirely, whatever its quantity. Absent entries are a
    /// no-op.
    pub fn remove_from_cart(
        &mut self,
        product_id: ProductId,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let cmd = CartCommand::RemoveItem(RemoveItem {
            cart_id: self.cart.id_typed(),
            product_id,
            occurred_at: now,
        });
        self.run_cart_command(&cmd, now)
    }

    /// Set an entry's quantity exactly; zero or less removes the entry.
    /// Absent entries are a no-op.
    pub fn update_cart_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let cmd = CartCommand::UpdateQuantity(UpdateQuantity {
            cart_id: self.cart.id_typed(),
            product_id,
            quantity,
            occurred_at: now,
        });
        self.run_cart_command(&cmd, now)
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        let cmd = CartCommand::ClearCart(ClearCart {
            cart_id: self.cart.id_typed(),
            occurred_at: now,
        });
        self.run_cart_command(&cmd, now)
    }

    /// Dismiss a toast; unknown ids are a no-op. Returns whether a toast was
    /// removed.
    pub fn dismiss_toast(&mut self, id: ToastId) -> bool {
        self.notifications.dismiss(id)
    }

    /// Advance all timer-driven state to `now`: expire due toasts and
    /// refresh the countdown. The owner calls this from its event loop.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        self.notifications.expire_due(now);
        self.countdown.tick(now);
    }

    /// Cancel the countdown when its view is torn down; the rest of the
    /// storefront keeps working.
    pub fn cancel_countdown(&mut self) {
        self.countdown.cancel();
    }

    // ---- Core → presentation ----------------------------------------------

    /// The visible product list, or `None` before the first criteria change.
    pub fn filtered(&self) -> Option<&FilteredProducts> {
        self.filtered.as_ref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Products currently on sale, for the featured-deals rail.
    pub fn featured_deals(&self) -> Vec<&Product> {
        self.catalog.featured_deals()
    }

    pub fn cart(&self) -> CartSnapshot {
        CartSnapshot {
            entries: self.cart.entries().to_vec(),
            total_items: self.cart.total_items(),
            total_price: self.cart.total_price(),
        }
    }

    /// Current toasts in enqueue order.
    pub fn toasts(&self) -> Vec<&Toast> {
        self.notifications.toasts()
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Subscribe to cart events. Each subscriber observes mutations in the
    /// order they were applied.
    pub fn subscribe(&self) -> Subscription<CartEvent> {
        self.bus.subscribe()
    }

    // ---- Wiring -----------------------------------------------------------

    fn run_cart_command(&mut self, command: &CartCommand, now: DateTime<Utc>) -> DomainResult<()> {
        let events = execute(&mut self.cart, command)?;

        for event in events {
            tracing::info!(event_type = event.event_type(), "cart event");
            if self.bus.publish(event).is_err() {
                tracing::warn!("failed to publish cart event");
            }
        }

        self.pump_notifications(now);
        Ok(())
    }

    /// Map freshly published cart events to toasts.
    ///
    /// The storefront consumes its own bus subscription, so toast order
    /// matches event order exactly.
    fn pump_notifications(&mut self, now: DateTime<Utc>) {
        for event in self.inbox.drain() {
            let (message, severity) = match &event {
                CartEvent::ItemAdded(e) => {
                    (format!("{} added to cart!", e.name), Severity::Success)
                }
                CartEvent::ItemRemoved(e) => {
                    (format!("{} removed from cart", e.name), Severity::Info)
                }
                CartEvent::CartCleared(_) => ("Cart cleared".to_string(), Severity::Info),
                // Quantity edits happen inside the cart view; no toast.
                CartEvent::QuantityUpdated(_) => continue,
            };

            self.notifications
                .enqueue(message, severity, Some(default_toast_duration()), now);
        }
    }
}
