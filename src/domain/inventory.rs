//! Materials, stock movements, purchase orders and suppliers.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::types::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialCategory {
    Concrete,
    Steel,
    Lumber,
    Electrical,
    Plumbing,
    Tools,
    Safety,
    Hardware,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
    OnOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MovementType {
    In,
    Out,
    Transfer,
    Adjustment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Draft,
    Pending,
    Approved,
    Ordered,
    Received,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub category: MaterialCategory,
    pub sku: String,
    pub unit: String,
    pub cost_per_unit: f64,
    pub current_stock: u32,
    pub min_stock_level: u32,
    pub max_stock_level: u32,
    pub location: String,
    pub supplier: String,
    pub last_updated: NaiveDate,
    pub status: StockStatus,
}

impl Material {
    pub fn stock_value(&self) -> f64 {
        f64::from(self.current_stock) * self.cost_per_unit
    }

    /// At or below the reorder threshold.
    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= self.min_stock_level
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.current_stock == 0
    }

    /// Fill level relative to the maximum stock level, in percent.
    pub fn stock_percentage(&self) -> f64 {
        if self.max_stock_level == 0 {
            return 0.0;
        }
        f64::from(self.current_stock) / f64::from(self.max_stock_level) * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    pub id: EntityId,
    pub material_id: EntityId,
    pub material_name: String,
    #[serde(rename = "type")]
    pub kind: MovementType,
    pub quantity: u32,
    pub unit: String,
    pub cost_per_unit: f64,
    pub total_cost: f64,
    pub project_id: Option<EntityId>,
    pub project_name: Option<String>,
    pub reference: String,
    pub notes: Option<String>,
    pub performed_by: String,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderItem {
    pub id: EntityId,
    pub material_id: EntityId,
    pub material_name: String,
    pub quantity: u32,
    pub unit: String,
    pub unit_cost: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: EntityId,
    pub order_number: String,
    pub supplier: String,
    pub status: OrderStatus,
    pub order_date: NaiveDate,
    pub expected_delivery: Option<NaiveDate>,
    pub actual_delivery: Option<NaiveDate>,
    pub items: Vec<PurchaseOrderItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub created_by: String,
    pub approved_by: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: EntityId,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub payment_terms: String,
    pub rating: f32,
    pub is_active: bool,
}

/// Headline numbers shown above the materials table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub total_value: f64,
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
}

impl InventorySummary {
    pub fn from_materials(materials: &[Material]) -> Self {
        InventorySummary {
            total_value: stock_value(materials),
            low_stock_count: materials.iter().filter(|m| m.is_low_stock()).count(),
            out_of_stock_count: materials.iter().filter(|m| m.is_out_of_stock()).count(),
        }
    }
}

/// Headline numbers shown above the purchase order table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub total_value: f64,
    pub pending: usize,
    pub received: usize,
}

impl OrderSummary {
    pub fn from_orders(orders: &[PurchaseOrder]) -> Self {
        OrderSummary {
            total_value: orders.iter().map(|o| o.total).sum(),
            pending: orders.iter().filter(|o| o.status == OrderStatus::Pending).count(),
            received: orders.iter().filter(|o| o.status == OrderStatus::Received).count(),
        }
    }
}

pub fn stock_value(materials: &[Material]) -> f64 {
    materials.iter().map(Material::stock_value).sum()
}

pub fn low_stock_items(materials: &[Material]) -> Vec<&Material> {
    materials.iter().filter(|m| m.is_low_stock()).collect()
}

/// Movements recorded against one material, in fixture order.
pub fn movements_for<'a>(movements: &'a [StockMovement], material_id: &str) -> Vec<&'a StockMovement> {
    movements.iter().filter(|m| m.material_id == material_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    #[test]
    fn test_inventory_summary() {
        let fixtures = Fixtures::load();
        let summary = InventorySummary::from_materials(&fixtures.materials);
        assert!((summary.total_value - 6049.62).abs() < 1e-6);
        assert_eq!(summary.low_stock_count, 2);
        assert_eq!(summary.out_of_stock_count, 1);
        assert_eq!(InventorySummary::from_materials(&[]).total_value, 0.0);
    }

    #[test]
    fn test_low_stock_includes_threshold() {
        let fixtures = Fixtures::load();
        let low = low_stock_items(&fixtures.materials);
        let low: Vec<&str> = low.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(low, ["2", "3"]);

        let mut at_threshold = fixtures.materials[0].clone();
        at_threshold.current_stock = at_threshold.min_stock_level;
        assert!(at_threshold.is_low_stock());
        at_threshold.current_stock += 1;
        assert!(!at_threshold.is_low_stock());
    }

    #[test]
    fn test_stock_percentage() {
        let fixtures = Fixtures::load();
        assert_eq!(fixtures.materials[0].stock_percentage(), 50.0);
        assert_eq!(fixtures.materials[2].stock_percentage(), 0.0);

        let mut unbounded = fixtures.materials[0].clone();
        unbounded.max_stock_level = 0;
        assert_eq!(unbounded.stock_percentage(), 0.0);
    }

    #[test]
    fn test_order_summary() {
        let fixtures = Fixtures::load();
        let summary = OrderSummary::from_orders(&fixtures.purchase_orders);
        assert!((summary.total_value - 3213.0).abs() < 1e-9);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.received, 1);
    }

    #[test]
    fn test_movements_for_material() {
        let fixtures = Fixtures::load();
        let cement = movements_for(&fixtures.stock_movements, "1");
        let cement: Vec<&str> = cement.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(cement, ["1", "2"]);
        assert!(movements_for(&fixtures.stock_movements, "3").is_empty());
    }
}
