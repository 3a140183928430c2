//! Domain types for the institute portal.
//!
//! Entities are immutable snapshots of backend records: the portal fetches
//! them, derives filtered/paginated views, and never mutates them in place.
//!
//! - **Catalog**: courses, products, laboratories, equipment, service centers
//! - **Orders**: purchases and their payment lifecycle
//! - **Money**: cents-based amounts with fixed-rate display conversion

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod events;
pub mod orders;
pub mod user;

pub use error::PortalError;
pub use ids::*;
pub use money::{Currency, ExchangeRate, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::PortalError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, ExchangeRate, Money};

    pub use crate::catalog::{
        CenterRef, CenterType, Course, Equipment, Laboratory, Product, ServiceCenter,
    };
    pub use crate::events::Event;
    pub use crate::orders::{Order, PaymentStatus};
    pub use crate::user::UserProfile;
}
