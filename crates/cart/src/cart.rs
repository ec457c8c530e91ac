use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use techstore_catalog::ProductId;
use techstore_core::{Aggregate, AggregateRoot, DomainError, EntityId};
use techstore_events::Event;

/// Cart identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartId(pub EntityId);

impl CartId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CartId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Cart line: product, display name, unit price, quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product_id: ProductId,
    /// Denormalized for display and notification copy.
    pub name: String,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
    pub quantity: u32,
}

impl CartEntry {
    /// Line total: quantity × unit price.
    pub fn line_price(&self) -> u64 {
        u64::from(self.quantity) * self.unit_price
    }
}

/// Aggregate root: Cart.
///
/// At most one entry per product id — adding a product that is already in
/// the cart increments its quantity instead of appending a duplicate line.
/// Entries keep insertion order for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: CartId,
    entries: Vec<CartEntry>,
    version: u64,
}

impl Cart {
    /// Create an empty cart. Unlike a sales order there is no creation
    /// command; the storefront owns exactly one cart from startup.
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            entries: Vec::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> CartId {
        self.id
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn entry(&self, product_id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product_id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of quantities across all entries.
    pub fn total_items(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Sum of quantity × unit price across all entries, in the smallest
    /// currency unit.
    pub fn total_price(&self) -> u64 {
        self.entries.iter().map(CartEntry::line_price).sum()
    }
}

impl AggregateRoot for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: u64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveItem {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: UpdateQuantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateQuantity {
    pub cart_id: CartId,
    pub product_id: ProductId,
    /// Signed so callers can express "zero or less", which behaves exactly
    /// like [`RemoveItem`].
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ClearCart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearCart {
    pub cart_id: CartId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddItem(AddItem),
    RemoveItem(RemoveItem),
    UpdateQuantity(UpdateQuantity),
    ClearCart(ClearCart),
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: u64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: QuantityUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityUpdated {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CartCleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCleared {
    pub cart_id: CartId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
    ItemRemoved(ItemRemoved),
    QuantityUpdated(QuantityUpdated),
    CartCleared(CartCleared),
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded(_) => "cart.item.added",
            CartEvent::ItemRemoved(_) => "cart.item.removed",
            CartEvent::QuantityUpdated(_) => "cart.item.quantity_updated",
            CartEvent::CartCleared(_) => "cart.cleared",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ItemAdded(e) => e.occurred_at,
            CartEvent::ItemRemoved(e) => e.occurred_at,
            CartEvent::QuantityUpdated(e) => e.occurred_at,
            CartEvent::CartCleared(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::ItemAdded(e) => {
                if let Some(entry) = self.entries.iter_mut().find(|x| x.product_id == e.product_id)
                {
                    entry.quantity += 1;
                } else {
                    self.entries.push(CartEntry {
                        product_id: e.product_id,
                        name: e.name.clone(),
                        unit_price: e.unit_price,
                        quantity: 1,
                    });
                }
            }
            CartEvent::ItemRemoved(e) => {
                self.entries.retain(|x| x.product_id != e.product_id);
            }
            CartEvent::QuantityUpdated(e) => {
                if let Some(entry) = self.entries.iter_mut().find(|x| x.product_id == e.product_id)
                {
                    entry.quantity = e.quantity;
                }
            }
            CartEvent::CartCleared(_) => {
                self.entries.clear();
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CartCommand::AddItem(cmd) => self.handle_add_item(cmd),
            CartCommand::RemoveItem(cmd) => self.handle_remove_item(cmd),
            CartCommand::UpdateQuantity(cmd) => self.handle_update_quantity(cmd),
            CartCommand::ClearCart(cmd) => self.handle_clear(cmd),
        }
    }
}

impl Cart {
    fn ensure_cart_id(&self, cart_id: CartId) -> Result<(), DomainError> {
        if self.id != cart_id {
            return Err(DomainError::invariant("cart_id mismatch"));
        }
        Ok(())
    }

    fn handle_add_item(&self, cmd: &AddItem) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        if cmd.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        if cmd.unit_price == 0 {
            return Err(DomainError::validation("unit_price must be positive"));
        }

        Ok(vec![CartEvent::ItemAdded(ItemAdded {
            cart_id: cmd.cart_id,
            product_id: cmd.product_id,
            name: cmd.name.clone(),
            unit_price: cmd.unit_price,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove_item(&self, cmd: &RemoveItem) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        // Removing an absent entry is a no-op, not an error.
        let Some(entry) = self.entry(cmd.product_id) else {
            return Ok(Vec::new());
        };

        Ok(vec![CartEvent::ItemRemoved(ItemRemoved {
            cart_id: cmd.cart_id,
            product_id: cmd.product_id,
            name: entry.name.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_update_quantity(&self, cmd: &UpdateQuantity) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        // Zero or negative quantity behaves exactly like RemoveItem.
        if cmd.quantity <= 0 {
            return self.handle_remove_item(&RemoveItem {
                cart_id: cmd.cart_id,
                product_id: cmd.product_id,
                occurred_at: cmd.occurred_at,
            });
        }

        let quantity = u32::try_from(cmd.quantity)
            .map_err(|_| DomainError::validation("quantity out of range"))?;

        // Updating an absent entry is a no-op, not an error.
        if self.entry(cmd.product_id).is_none() {
            return Ok(Vec::new());
        }

        Ok(vec![CartEvent::QuantityUpdated(QuantityUpdated {
            cart_id: cmd.cart_id,
            product_id: cmd.product_id,
            quantity,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_clear(&self, cmd: &ClearCart) -> Result<Vec<CartEvent>, DomainError> {
        self.ensure_cart_id(cmd.cart_id)?;

        if self.entries.is_empty() {
            return Ok(Vec::new());
        }

        Ok(vec![CartEvent::CartCleared(CartCleared {
            cart_id: cmd.cart_id,
            occurred_at: cmd.occurred_at,
        })])
    }
}
