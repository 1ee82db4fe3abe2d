use serde::{Deserialize, Serialize};

/// One priced line held in a cart.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// Menu item the line refers to.
    pub menu_item_id: i32,
    /// Menu item name at the time it was added.
    pub name: String,
    /// Unit price in cents, including any customization deltas.
    pub unit_price_cents: i64,
    /// Number of units in the cart, always at least one.
    pub quantity: i32,
}

/// Totals derived from a cart's current lines.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of line prices before tax.
    pub subtotal_cents: i64,
    /// Tax on the subtotal, rounded half-up.
    pub tax_cents: i64,
    /// Subtotal plus tax.
    pub grand_total_cents: i64,
}

impl CartTotals {
    /// Derive tax and grand total from a subtotal. The tax rate is given in
    /// basis points (825 = 8.25%) and rounded half-up.
    pub fn from_subtotal(subtotal_cents: i64, tax_rate_bp: i64) -> Self {
        let tax_cents = (subtotal_cents * tax_rate_bp + 5_000) / 10_000;
        Self {
            subtotal_cents,
            tax_cents,
            grand_total_cents: subtotal_cents + tax_cents,
        }
    }
}

/// An in-memory shopping cart.
///
/// The cart never stores totals: they are derived from the line collection on
/// every call to [`Cart::totals`], so they cannot drift from the lines the way
/// separately-mutated running sums can.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` units of a menu item, merging with an existing line for
    /// the same item.
    pub fn add_item(
        &mut self,
        menu_item_id: i32,
        name: impl Into<String>,
        unit_price_cents: i64,
        quantity: i32,
    ) {
        if quantity <= 0 {
            return;
        }
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.menu_item_id == menu_item_id)
        {
            line.quantity += quantity;
            return;
        }
        self.lines.push(CartLine {
            menu_item_id,
            name: name.into(),
            unit_price_cents,
            quantity,
        });
    }

    /// Drop the line for a menu item entirely.
    pub fn remove_item(&mut self, menu_item_id: i32) {
        self.lines.retain(|line| line.menu_item_id != menu_item_id);
    }

    /// Change a line's quantity by `delta`, removing the line once the
    /// quantity reaches zero or below. Unknown items are ignored.
    pub fn adjust_quantity(&mut self, menu_item_id: i32, delta: i32) {
        let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.menu_item_id == menu_item_id)
        else {
            return;
        };
        line.quantity += delta;
        if line.quantity <= 0 {
            self.remove_item(menu_item_id);
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Derive subtotal, tax and grand total from the current lines.
    pub fn totals(&self, tax_rate_bp: i64) -> CartTotals {
        let subtotal_cents: i64 = self
            .lines
            .iter()
            .map(|line| line.unit_price_cents * i64::from(line.quantity))
            .sum();
        CartTotals::from_subtotal(subtotal_cents, tax_rate_bp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_item_merges_lines_for_the_same_item() {
        let mut cart = Cart::new();
        cart.add_item(1, "Taco", 450, 2);
        cart.add_item(1, "Taco", 450, 1);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn adjust_quantity_removes_line_at_zero() {
        let mut cart = Cart::new();
        cart.add_item(1, "Taco", 450, 2);
        cart.adjust_quantity(1, -1);
        assert_eq!(cart.lines()[0].quantity, 1);

        cart.adjust_quantity(1, -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn adjust_quantity_ignores_unknown_items() {
        let mut cart = Cart::new();
        cart.add_item(1, "Taco", 450, 1);
        cart.adjust_quantity(99, -5);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn totals_are_derived_from_current_lines() {
        let mut cart = Cart::new();
        cart.add_item(1, "Taco", 450, 2);
        cart.add_item(2, "Horchata", 300, 1);

        let totals = cart.totals(825);
        assert_eq!(totals.subtotal_cents, 1_200);
        assert_eq!(totals.tax_cents, 99);
        assert_eq!(totals.grand_total_cents, 1_299);

        cart.remove_item(2);
        let totals = cart.totals(825);
        assert_eq!(totals.subtotal_cents, 900);
        assert_eq!(totals.grand_total_cents, 900 + 74);
    }

    #[test]
    fn totals_of_an_empty_cart_are_zero() {
        let cart = Cart::new();
        let totals = cart.totals(825);
        assert_eq!(totals.subtotal_cents, 0);
        assert_eq!(totals.tax_cents, 0);
        assert_eq!(totals.grand_total_cents, 0);
    }
}
