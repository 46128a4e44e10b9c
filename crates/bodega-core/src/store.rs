//! # Store Aggregate
//!
//! The inventory aggregate: an ordered collection of products, quantity
//! queries, and the multi-line order transaction.
//!
//! ## Order Processing
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  order([(id_a, 2), (id_b, 1), (id_a, 3)])                 │
//! │                                                           │
//! │  line 1 ──► find id_a ──► buy(2) ──► total += charge      │
//! │  line 2 ──► find id_b ──► buy(1) ──► total += charge      │
//! │  line 3 ──► find id_a ──► buy(3) ──► sees stock already   │
//! │                                      drawn by line 1      │
//! │                                                           │
//! │  First error aborts the batch. Stock drawn by earlier     │
//! │  lines STAYS drawn; there is no rollback.                 │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines run strictly in the given order, one at a time, because every
//! `buy` observes and mutates the current stock level.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::Product;

// =============================================================================
// Order Line
// =============================================================================

/// One (product, quantity) entry in an order batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: Uuid,
    pub quantity: i64,
}

impl OrderLine {
    pub fn new(product_id: Uuid, quantity: i64) -> Self {
        OrderLine {
            product_id,
            quantity,
        }
    }
}

// =============================================================================
// Store
// =============================================================================

/// An ordered collection of products with order processing.
///
/// ## Invariants
/// - Insertion order is preserved (listings and totals iterate in it)
/// - Products are identified by their `id`; duplicate names are legal
/// - Inactive products stay in the collection, hidden from listings and
///   totals but addressable for reactivation
///
/// Single-threaded by contract: callers serialize access when sharing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Store {
    products: Vec<Product>,
}

impl Store {
    /// Creates a store with an initial product sequence (possibly empty).
    ///
    /// Product validation happened at product construction; the store adds
    /// no checks of its own.
    pub fn new(products: Vec<Product>) -> Self {
        Store { products }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All products, active or not, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Active products in insertion order.
    pub fn active_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_active()).collect()
    }

    /// Sum of stock over the active products.
    ///
    /// NonStocked products report quantity 0 and so contribute nothing.
    pub fn total_quantity(&self) -> i64 {
        self.products
            .iter()
            .filter(|p| p.is_active())
            .map(|p| p.quantity())
            .sum()
    }

    /// Whether a product with this id is in the store.
    pub fn contains(&self, id: Uuid) -> bool {
        self.products.iter().any(|p| p.id() == id)
    }

    /// Looks up a product by id, active or not.
    pub fn product(&self, id: Uuid) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Mutable lookup by id, for reactivation, price changes, and promotion
    /// assignment. Mutation still goes through the product's validating
    /// setters.
    pub fn product_mut(&mut self, id: Uuid) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id() == id)
    }

    /// Number of products, active or not.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the store holds no products at all.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    // =========================================================================
    // Inventory Management
    // =========================================================================

    /// Appends a product. No uniqueness enforcement; two products may share
    /// a name (they never share an id).
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Removes the product with the given id and returns it.
    ///
    /// A missing id is an explicit [`CoreError::ProductNotFound`], never a
    /// silent no-op.
    pub fn remove_product(&mut self, id: Uuid) -> CoreResult<Product> {
        match self.products.iter().position(|p| p.id() == id) {
            Some(index) => Ok(self.products.remove(index)),
            None => Err(CoreError::ProductNotFound(id.to_string())),
        }
    }

    // =========================================================================
    // Order Processing
    // =========================================================================

    /// Processes an order batch and returns the total charged.
    ///
    /// Lines are processed strictly in the given order; each line resolves
    /// its product by id and calls [`Product::buy`]. The whole call fails at
    /// the first bad line (unknown id, non-positive amount, per-order cap,
    /// or insufficient stock).
    ///
    /// ## Non-atomicity
    /// Stock drawn by lines before the failing one stays drawn. Each
    /// committed line is independently valid business state; the batch is
    /// not a transactional unit.
    ///
    /// ```rust
    /// use bodega_core::{Money, OrderLine, Product, Store};
    ///
    /// let phone = Product::new("Phone", Money::from_cents(80_000), 2).unwrap();
    /// let charger = Product::new("Charger", Money::from_cents(2_000), 5).unwrap();
    /// let lines = [
    ///     OrderLine::new(phone.id(), 1),
    ///     OrderLine::new(charger.id(), 3),
    /// ];
    ///
    /// let mut store = Store::new(vec![phone, charger]);
    /// let total = store.order(&lines).unwrap();
    /// assert_eq!(total, Money::from_cents(86_000));
    /// ```
    pub fn order(&mut self, lines: &[OrderLine]) -> CoreResult<Money> {
        let mut total = Money::zero();

        for line in lines {
            let product = self
                .products
                .iter_mut()
                .find(|p| p.id() == line.product_id)
                .ok_or_else(|| CoreError::ProductNotFound(line.product_id.to_string()))?;

            total += product.buy(line.quantity)?;
        }

        Ok(total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::StockPolicy;
    use crate::promotion::Promotion;

    fn dollars(major: i64) -> Money {
        Money::from_major_minor(major, 0)
    }

    fn stocked(name: &str, price: i64, quantity: i64) -> Product {
        Product::new(name, dollars(price), quantity).unwrap()
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    #[test]
    fn test_initial_products_and_total_quantity() {
        let store = Store::new(vec![stocked("Camera", 300, 2), stocked("Tripod", 50, 3)]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.total_quantity(), 5);
    }

    #[test]
    fn test_active_products_filters_and_preserves_order() {
        let mut tripod = stocked("Tripod", 50, 3);
        tripod.deactivate();
        let store = Store::new(vec![
            stocked("Camera", 300, 2),
            tripod,
            stocked("Lens", 150, 4),
        ]);

        let active: Vec<&str> = store.active_products().iter().map(|p| p.name()).collect();
        assert_eq!(active, vec!["Camera", "Lens"]);
    }

    #[test]
    fn test_total_quantity_skips_inactive_and_non_stocked() {
        let mut hidden = stocked("Hidden", 10, 100);
        hidden.deactivate();
        let license = Product::non_stocked("License", dollars(125)).unwrap();
        let store = Store::new(vec![stocked("Camera", 300, 2), hidden, license]);

        assert_eq!(store.total_quantity(), 2);
    }

    #[test]
    fn test_duplicate_names_are_legal() {
        let a = stocked("Cable", 5, 1);
        let b = stocked("Cable", 5, 1);
        let (id_a, id_b) = (a.id(), b.id());
        let store = Store::new(vec![a, b]);

        assert_eq!(store.len(), 2);
        assert!(store.contains(id_a));
        assert!(store.contains(id_b));
    }

    // -------------------------------------------------------------------------
    // Inventory management
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_and_remove_product() {
        let microphone = stocked("Microphone", 100, 5);
        let id = microphone.id();

        let mut store = Store::default();
        store.add_product(microphone);
        assert!(store.contains(id));

        let removed = store.remove_product(id).unwrap();
        assert_eq!(removed.name(), "Microphone");
        assert!(!store.contains(id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_missing_product_is_an_error() {
        let mut store = Store::new(vec![stocked("Camera", 300, 2)]);
        let err = store.remove_product(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_inactive_products_stay_addressable() {
        let camera = stocked("Camera", 300, 2);
        let id = camera.id();
        let mut store = Store::new(vec![camera]);

        store.product_mut(id).unwrap().deactivate();
        assert!(store.active_products().is_empty());

        store.product_mut(id).unwrap().activate();
        assert_eq!(store.active_products().len(), 1);
    }

    // -------------------------------------------------------------------------
    // Order processing
    // -------------------------------------------------------------------------

    #[test]
    fn test_order_reduces_stock_and_returns_total() {
        let speaker = stocked("Speaker", 200, 4);
        let id = speaker.id();
        let mut store = Store::new(vec![speaker]);

        let total = store.order(&[OrderLine::new(id, 2)]).unwrap();
        assert_eq!(total, dollars(400));
        assert_eq!(store.product(id).unwrap().quantity(), 2);
    }

    #[test]
    fn test_order_sums_multiple_lines() {
        let phone = stocked("Phone", 800, 2);
        let charger = stocked("Charger", 20, 5);
        let (phone_id, charger_id) = (phone.id(), charger.id());
        let mut store = Store::new(vec![phone, charger]);

        let total = store
            .order(&[OrderLine::new(phone_id, 1), OrderLine::new(charger_id, 3)])
            .unwrap();
        assert_eq!(total, dollars(860));
        assert_eq!(store.product(phone_id).unwrap().quantity(), 1);
        assert_eq!(store.product(charger_id).unwrap().quantity(), 2);
    }

    #[test]
    fn test_order_applies_each_products_promotion() {
        let mut shirt = stocked("Shirt", 50, 5);
        shirt.set_promotion(Some(Promotion::half_price_on_pairs("Second Half Price")));
        let mug = stocked("Mug", 8, 10);
        let (shirt_id, mug_id) = (shirt.id(), mug.id());
        let mut store = Store::new(vec![shirt, mug]);

        let total = store
            .order(&[OrderLine::new(shirt_id, 5), OrderLine::new(mug_id, 2)])
            .unwrap();
        // 2*$50 + 3*$25 for the shirts, full price for the mugs
        assert_eq!(total, dollars(175 + 16));
    }

    #[test]
    fn test_failing_line_aborts_batch_but_keeps_prior_commits() {
        let camera = stocked("Camera", 300, 2);
        let mixer = stocked("Mixer", 500, 1);
        let lens = stocked("Lens", 150, 4);
        let (camera_id, mixer_id, lens_id) = (camera.id(), mixer.id(), lens.id());
        let mut store = Store::new(vec![camera, mixer, lens]);

        let err = store
            .order(&[
                OrderLine::new(camera_id, 1),
                OrderLine::new(mixer_id, 2), // only 1 in stock
                OrderLine::new(lens_id, 1),
            ])
            .unwrap_err();
        assert!(matches!(err, CoreError::InsufficientStock { .. }));

        // line 1 stays committed, line 3 was never attempted
        assert_eq!(store.product(camera_id).unwrap().quantity(), 1);
        assert_eq!(store.product(mixer_id).unwrap().quantity(), 1);
        assert_eq!(store.product(lens_id).unwrap().quantity(), 4);
    }

    #[test]
    fn test_same_product_twice_sees_earlier_line() {
        let camera = stocked("Camera", 300, 3);
        let id = camera.id();
        let mut store = Store::new(vec![camera]);

        // 2 + 2 > 3: the second line must observe the first line's draw
        let err = store
            .order(&[OrderLine::new(id, 2), OrderLine::new(id, 2)])
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock { available: 1, requested: 2, .. }
        ));
        assert_eq!(store.product(id).unwrap().quantity(), 1);

        // within stock both lines commit
        let mut store = Store::new(vec![stocked("Camera", 300, 3)]);
        let id = store.products()[0].id();
        let total = store
            .order(&[OrderLine::new(id, 2), OrderLine::new(id, 1)])
            .unwrap();
        assert_eq!(total, dollars(900));
    }

    #[test]
    fn test_order_with_unknown_product_fails() {
        let camera = stocked("Camera", 300, 2);
        let camera_id = camera.id();
        let mut store = Store::new(vec![camera]);

        let err = store
            .order(&[
                OrderLine::new(camera_id, 1),
                OrderLine::new(Uuid::new_v4(), 1),
            ])
            .unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(_)));

        // the first line already committed
        assert_eq!(store.product(camera_id).unwrap().quantity(), 1);
    }

    #[test]
    fn test_inventory_snapshot_round_trips() {
        let mut shirt = stocked("Shirt", 50, 5);
        shirt.set_promotion(Some(Promotion::half_price_on_pairs("Second Half Price")));
        let license = Product::non_stocked("License", dollars(125)).unwrap();
        let store = Store::new(vec![shirt, license]);

        let json = serde_json::to_string(&store).unwrap();
        let restored: Store = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), 2);
        assert_eq!(restored.products()[0].name(), "Shirt");
        assert_eq!(
            restored.products()[0].promotion().map(|p| p.name()),
            Some("Second Half Price")
        );
        assert_eq!(restored.products()[1].policy(), StockPolicy::NonStocked);
    }

    #[test]
    fn test_empty_order_charges_nothing() {
        let mut store = Store::new(vec![stocked("Camera", 300, 2)]);
        assert_eq!(store.order(&[]).unwrap(), Money::zero());
        assert_eq!(store.total_quantity(), 2);
    }
}
