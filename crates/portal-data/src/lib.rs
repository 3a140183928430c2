//! Data acquisition for the portal.
//!
//! The core pipeline works over already-fetched in-memory arrays; this
//! crate is the asynchronous boundary that produces them: a typed REST
//! client, the IP-geolocation lookup consulted by currency detection, and
//! a generation guard so a superseded fetch can never overwrite newer
//! state.

pub mod client;
pub mod error;
pub mod generation;
pub mod geo;

pub use client::PortalClient;
pub use error::FetchError;
pub use generation::RequestGeneration;
pub use geo::{GeoLocation, GeoLookup, IpApiGeo};
