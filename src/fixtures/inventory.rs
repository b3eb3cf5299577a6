use crate::domain::{
    Material, MaterialCategory, MovementType, OrderStatus, PurchaseOrder, PurchaseOrderItem, StockMovement,
    StockStatus, Supplier,
};
use crate::fixtures::{at, s, ymd};

#[allow(clippy::too_many_arguments)]
fn material(
    id: &str,
    name: &str,
    description: &str,
    category: MaterialCategory,
    sku: &str,
    unit: &str,
    cost_per_unit: f64,
    (current_stock, min_stock_level, max_stock_level): (u32, u32, u32),
    location: &str,
    supplier: &str,
    last_updated_day: u32,
    status: StockStatus,
) -> Material {
    Material {
        id: s(id),
        name: s(name),
        description: s(description),
        category,
        sku: s(sku),
        unit: s(unit),
        cost_per_unit,
        current_stock,
        min_stock_level,
        max_stock_level,
        location: s(location),
        supplier: s(supplier),
        last_updated: ymd(2024, 3, last_updated_day),
        status,
    }
}

pub fn materials() -> Vec<Material> {
    use MaterialCategory::*;
    vec![
        material("1", "Portland Cement", "Type I Portland cement for general construction", Concrete,
            "CEM-001", "bags", 12.5, (150, 50, 300), "Warehouse A - Bay 1", "BuildMart Supply Co.", 12,
            StockStatus::InStock),
        material("2", "Rebar #4 (1/2 inch)", "Grade 60 deformed steel rebar, 20ft lengths", Steel,
            "REB-004", "pieces", 8.75, (25, 50, 200), "Yard - Steel Section", "Metro Steel Works", 11,
            StockStatus::LowStock),
        material("3", "2x4 Lumber (8ft)", "Pressure treated pine lumber, 2x4x8", Lumber,
            "LUM-248", "pieces", 4.25, (0, 100, 500), "Lumber Yard", "Forest Products Inc.", 10,
            StockStatus::OutOfStock),
        material("4", "12 AWG Electrical Wire", "THHN copper wire, 500ft roll", Electrical,
            "ELE-012", "rolls", 89.99, (12, 5, 25), "Warehouse B - Electrical", "ElectroMax Supply", 12,
            StockStatus::InStock),
        material("5", "PVC Pipe 4 inch", "Schedule 40 PVC pipe, 10ft lengths", Plumbing,
            "PVC-410", "pieces", 15.5, (35, 20, 100), "Warehouse C - Plumbing", "PlumbPro Distributors", 11,
            StockStatus::InStock),
        material("6", "Cordless Drill", "18V lithium-ion cordless drill with battery", Tools,
            "TOL-CD18", "units", 129.99, (8, 5, 15), "Tool Crib", "ToolMaster Pro", 9,
            StockStatus::InStock),
        material("7", "Safety Helmets", "ANSI Z89.1 compliant hard hats, white", Safety,
            "SAF-HH1", "units", 18.75, (45, 30, 100), "Safety Equipment Room", "SafetyFirst Equipment", 12,
            StockStatus::InStock),
        material("8", "Galvanized Bolts 1/2x6", "Hex head bolts with nuts and washers", Hardware,
            "HW-B126", "boxes", 24.99, (18, 10, 50), "Hardware Storage", "FastenerWorld", 11,
            StockStatus::InStock),
    ]
}

pub fn suppliers() -> Vec<Supplier> {
    let supplier = |id: &str, name: &str, contact: &str, email: &str, phone: &str, address: &str, terms: &str, rating: f32| Supplier {
        id: s(id),
        name: s(name),
        contact_person: s(contact),
        email: s(email),
        phone: s(phone),
        address: s(address),
        payment_terms: s(terms),
        rating,
        is_active: true,
    };
    vec![
        supplier("1", "BuildMart Supply Co.", "John Martinez", "john@buildmart.com", "(555) 123-4567",
            "1234 Industrial Blvd, Construction City, CC 12345", "Net 30", 4.5),
        supplier("2", "Metro Steel Works", "Sarah Chen", "sarah@metrosteel.com", "(555) 234-5678",
            "5678 Steel Ave, Industrial Park, IP 23456", "Net 15", 4.8),
        supplier("3", "Forest Products Inc.", "Mike Thompson", "mike@forestproducts.com", "(555) 345-6789",
            "9012 Lumber Rd, Timber Town, TT 34567", "Net 30", 4.2),
        supplier("4", "ElectroMax Supply", "Lisa Wang", "lisa@electromax.com", "(555) 456-7890",
            "3456 Electric St, Power City, PC 45678", "Net 30", 4.6),
    ]
}

pub fn stock_movements() -> Vec<StockMovement> {
    vec![
        StockMovement {
            id: s("1"),
            material_id: s("1"),
            material_name: s("Portland Cement"),
            kind: MovementType::In,
            quantity: 100,
            unit: s("bags"),
            cost_per_unit: 12.5,
            total_cost: 1250.0,
            project_id: None,
            project_name: None,
            reference: s("PO-2024-001"),
            notes: Some(s("Delivery from BuildMart Supply Co.")),
            performed_by: s("Mike Chen"),
            timestamp: at(2024, 3, 12, 8, 30),
        },
        StockMovement {
            id: s("2"),
            material_id: s("1"),
            material_name: s("Portland Cement"),
            kind: MovementType::Out,
            quantity: 25,
            unit: s("bags"),
            cost_per_unit: 12.5,
            total_cost: 312.5,
            project_id: Some(s("1")),
            project_name: Some(s("Downtown Office Complex")),
            reference: s("WO-2024-015"),
            notes: Some(s("Used for foundation work")),
            performed_by: s("Sarah Johnson"),
            timestamp: at(2024, 3, 12, 14, 15),
        },
        StockMovement {
            id: s("3"),
            material_id: s("2"),
            material_name: s("Rebar #4 (1/2 inch)"),
            kind: MovementType::Out,
            quantity: 50,
            unit: s("pieces"),
            cost_per_unit: 8.75,
            total_cost: 437.5,
            project_id: Some(s("1")),
            project_name: Some(s("Downtown Office Complex")),
            reference: s("WO-2024-016"),
            notes: Some(s("Foundation reinforcement")),
            performed_by: s("Mike Chen"),
            timestamp: at(2024, 3, 11, 10, 45),
        },
        StockMovement {
            id: s("4"),
            material_id: s("4"),
            material_name: s("12 AWG Electrical Wire"),
            kind: MovementType::In,
            quantity: 5,
            unit: s("rolls"),
            cost_per_unit: 89.99,
            total_cost: 449.95,
            project_id: None,
            project_name: None,
            reference: s("PO-2024-002"),
            notes: Some(s("Emergency restock")),
            performed_by: s("Lisa Rodriguez"),
            timestamp: at(2024, 3, 10, 16, 20),
        },
    ]
}

fn single_item(id: &str, material_id: &str, material_name: &str, quantity: u32, unit: &str, unit_cost: f64) -> Vec<PurchaseOrderItem> {
    vec![PurchaseOrderItem {
        id: s(id),
        material_id: s(material_id),
        material_name: s(material_name),
        quantity,
        unit: s(unit),
        unit_cost,
        total_cost: f64::from(quantity) * unit_cost,
    }]
}

pub fn purchase_orders() -> Vec<PurchaseOrder> {
    vec![
        PurchaseOrder {
            id: s("1"),
            order_number: s("PO-2024-001"),
            supplier: s("BuildMart Supply Co."),
            status: OrderStatus::Received,
            order_date: ymd(2024, 3, 8),
            expected_delivery: Some(ymd(2024, 3, 12)),
            actual_delivery: Some(ymd(2024, 3, 12)),
            items: single_item("1", "1", "Portland Cement", 100, "bags", 12.5),
            subtotal: 1250.0,
            tax: 100.0,
            total: 1350.0,
            created_by: s("Sarah Johnson"),
            approved_by: Some(s("John Smith")),
            notes: Some(s("Regular cement restock")),
        },
        PurchaseOrder {
            id: s("2"),
            order_number: s("PO-2024-002"),
            supplier: s("Metro Steel Works"),
            status: OrderStatus::Ordered,
            order_date: ymd(2024, 3, 13),
            expected_delivery: Some(ymd(2024, 3, 18)),
            actual_delivery: None,
            items: single_item("2", "2", "Rebar #4 (1/2 inch)", 100, "pieces", 8.75),
            subtotal: 875.0,
            tax: 70.0,
            total: 945.0,
            created_by: s("Mike Chen"),
            approved_by: Some(s("Sarah Johnson")),
            notes: Some(s("Urgent restock - low inventory")),
        },
        PurchaseOrder {
            id: s("3"),
            order_number: s("PO-2024-003"),
            supplier: s("Forest Products Inc."),
            status: OrderStatus::Pending,
            order_date: ymd(2024, 3, 14),
            expected_delivery: Some(ymd(2024, 3, 20)),
            actual_delivery: None,
            items: single_item("3", "3", "2x4 Lumber (8ft)", 200, "pieces", 4.25),
            subtotal: 850.0,
            tax: 68.0,
            total: 918.0,
            created_by: s("Sarah Johnson"),
            approved_by: None,
            notes: Some(s("Restock lumber for upcoming phase")),
        },
    ]
}
