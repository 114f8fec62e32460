//! Static sample content shown next to the revenue chart.
//!
//! None of this is generated or interactive; it is the fixed mock content of
//! the dashboard until a real metrics backend exists.

/// A headline metric card.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSummary {
    pub title: &'static str,
    /// Display string, shown verbatim.
    pub value: &'static str,
    /// Signed percentage change.
    pub change_percent: f32,
}

impl MetricSummary {
    /// Whether the change is non-negative (rendered as an increase).
    pub fn is_increase(&self) -> bool {
        self.change_percent >= 0.0
    }

    /// Signed change with one decimal, e.g. `+2.5%` or `-0.8%`.
    pub fn format_change(&self) -> String {
        format!("{:+.1}%", self.change_percent)
    }
}

/// A top-performing product row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSale {
    pub name: &'static str,
    /// Revenue in whole dollars.
    pub revenue: u32,
}

/// A recent transaction row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: u32,
    /// Signed amount in whole dollars.
    pub amount: i64,
}

impl Transaction {
    pub fn label(&self) -> String {
        format!("Transaction #{}", self.id)
    }

    pub fn is_credit(&self) -> bool {
        self.amount >= 0
    }
}

pub const METRICS: [MetricSummary; 4] = [
    MetricSummary {
        title: "Total Revenue",
        value: "$12,345",
        change_percent: 2.5,
    },
    MetricSummary {
        title: "New Customers",
        value: "120",
        change_percent: -0.8,
    },
    MetricSummary {
        title: "Sales",
        value: "1,234",
        change_percent: 5.1,
    },
    MetricSummary {
        title: "Growth Rate",
        value: "3.2%",
        change_percent: 1.2,
    },
];

pub const TOP_PRODUCTS: [ProductSale; 3] = [
    ProductSale {
        name: "Product A",
        revenue: 3_456,
    },
    ProductSale {
        name: "Product B",
        revenue: 2_345,
    },
    ProductSale {
        name: "Product C",
        revenue: 1_234,
    },
];

pub const RECENT_TRANSACTIONS: [Transaction; 3] = [
    Transaction {
        id: 1234,
        amount: 567,
    },
    Transaction {
        id: 5678,
        amount: 890,
    },
    Transaction {
        id: 9012,
        amount: -123,
    },
];

/// Entries of the navigation drawer. Labels only; selecting them does nothing.
pub const NAV_ENTRIES: [&str; 4] = ["Dashboard", "Analytics", "Settings", "Help"];
