//! Display-currency detection policy.
//!
//! Order of preference: the stored profile country, then one IP-geolocation
//! lookup, then the configured fallback. Lookup failure is logged and
//! swallowed; checkout renders either way.

use portal_data::geo::GeoLookup;
use portal_domain::money::Currency;
use portal_domain::user::UserProfile;
use tracing::warn;

/// Map a country (name or ISO code) to its display currency.
pub fn currency_for_country(country: &str) -> Option<Currency> {
    match country.trim().to_lowercase().as_str() {
        "egypt" | "eg" | "egy" => Some(Currency::EGP),
        "united states" | "united states of america" | "us" | "usa" => Some(Currency::USD),
        "united kingdom" | "gb" | "uk" => Some(Currency::GBP),
        "germany" | "de" | "france" | "fr" | "italy" | "it" | "spain" | "es"
        | "netherlands" | "nl" => Some(Currency::EUR),
        _ => None,
    }
}

/// Pick the display currency for the current visitor.
pub async fn detect_currency(
    profile: Option<&UserProfile>,
    geo: &dyn GeoLookup,
    fallback: Currency,
) -> Currency {
    if let Some(country) = profile.and_then(|p| p.country.as_deref()) {
        if let Some(currency) = currency_for_country(country) {
            return currency;
        }
    }

    match geo.lookup().await {
        Ok(location) => currency_for_country(&location.country_name)
            .or_else(|| currency_for_country(&location.country_code))
            .unwrap_or_else(|| {
                warn!(
                    country = %location.country_name,
                    "no currency mapping for geolocated country, using fallback"
                );
                fallback
            }),
        Err(e) => {
            warn!(error = %e, "geolocation lookup failed, using fallback currency");
            fallback
        }
    }
}
