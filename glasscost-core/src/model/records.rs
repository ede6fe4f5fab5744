//! Saved shop records: quotes, door orders and clients.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CostBreakdown, GlassSpecification};

/// A named, client-attributed quote: the specification together with the
/// breakdown it priced to on the day it was saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedQuote {
    pub id: Uuid,
    pub name: String,
    pub client: String,
    pub specification: GlassSpecification,
    pub cost: CostBreakdown,
    pub date: NaiveDate,
}

impl SavedQuote {
    /// Create a quote with a fresh id.
    pub fn new(
        name: impl Into<String>,
        client: impl Into<String>,
        specification: GlassSpecification,
        cost: CostBreakdown,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            client: client.into(),
            specification,
            cost,
            date,
        }
    }
}

/// A door order tracked by the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorOrder {
    pub id: Uuid,
    /// Agreed price for the order.
    pub price: f64,
    pub order_date: NaiveDate,
    /// Unset until a delivery is scheduled.
    pub delivery_date: Option<NaiveDate>,
    pub client: String,
    pub notes: String,
}

impl DoorOrder {
    /// Create an order with a fresh id.
    pub fn new(
        price: f64,
        order_date: NaiveDate,
        delivery_date: Option<NaiveDate>,
        client: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            price,
            order_date,
            delivery_date,
            client: client.into(),
            notes: notes.into(),
        }
    }
}

/// A client on record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub company: String,
    pub contact: String,
    pub email: String,
    pub phone: String,
    /// Default markup applied to this client's quotes, percent (0-100).
    pub default_markup_pct: u8,
}

impl Client {
    /// Create a client record with a fresh id.
    pub fn new(
        company: impl Into<String>,
        contact: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        default_markup_pct: u8,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            company: company.into(),
            contact: contact.into(),
            email: email.into(),
            phone: phone.into(),
            default_markup_pct,
        }
    }
}
