use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::config::Config;

/// A skip offering returned by the inventory API.
///
/// Only the fields the page displays are strictly typed. The rest are carried
/// as-is when they decode and become `None` when they are missing or odd, so a
/// single unexpected value never rejects the whole list.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Skip {
    pub id: u64,
    /// Capacity in cubic yards
    pub size: u32,
    pub hire_period_days: u32,
    #[serde(default, deserialize_with = "lenient")]
    pub transport_cost: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub per_tonne_cost: Option<f64>,
    pub price_before_vat: f64,
    /// Percentage, 0-100
    pub vat: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub postcode: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub area: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub forbidden: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient")]
    pub updated_at: Option<NaiveDateTime>,
    pub allowed_on_road: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub allows_heavy_waste: Option<bool>,
}

/// Decodes `T` if the value has the expected shape, `None` otherwise.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// How many decimals a displayed price keeps.
///
/// Cards show a whole-pound figure while the selection panel shows pence.
/// Both call sites name their policy so the difference stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRounding {
    Whole,
    Pence,
}

impl PriceRounding {
    pub const fn decimals(self) -> usize {
        match self {
            Self::Whole => 0,
            Self::Pence => 2,
        }
    }

    /// Formats a pound amount, e.g. `£240` or `£240.00`.
    pub fn format(self, amount: f64) -> String {
        format!("£{amount:.prec$}", prec = self.decimals())
    }
}

/// Price used on skip cards.
pub const CARD_ROUNDING: PriceRounding = PriceRounding::Whole;
/// Price used in the selection panel.
pub const SUMMARY_ROUNDING: PriceRounding = PriceRounding::Pence;

impl Skip {
    /// Price including VAT, unrounded.
    pub fn price_inc_vat(&self) -> f64 {
        self.price_before_vat * (1.0 + self.vat / 100.0)
    }

    pub fn display_price(&self, rounding: PriceRounding) -> String {
        rounding.format(self.price_inc_vat())
    }

    pub fn title(&self) -> String {
        format!("{} Yard Skip", self.size)
    }

    pub fn image_url(&self) -> String {
        format!(
            "{}/{}-yarder-skip.jpg",
            Config::SKIP_IMAGE_BASE_URL,
            self.size
        )
    }

    pub fn image_alt(&self) -> String {
        format!("{}-yarder skip", self.size)
    }

    /// Whether the card carries the "Not Allowed On The Road" badge.
    pub const fn shows_road_badge(&self) -> bool {
        !self.allowed_on_road
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skip(price_before_vat: f64, vat: f64) -> Skip {
        Skip {
            id: 17933,
            size: 4,
            hire_period_days: 14,
            transport_cost: None,
            per_tonne_cost: None,
            price_before_vat,
            vat,
            postcode: Some("NR32".to_string()),
            area: Some("Lowestoft".to_string()),
            forbidden: Some(false),
            created_at: None,
            updated_at: None,
            allowed_on_road: true,
            allows_heavy_waste: Some(true),
        }
    }

    #[test]
    fn test_price_inc_vat() {
        assert_eq!(skip(200.0, 20.0).display_price(CARD_ROUNDING), "£240");
        assert_eq!(skip(200.0, 20.0).display_price(SUMMARY_ROUNDING), "£240.00");
    }

    #[test]
    fn test_zero_vat_leaves_price_unchanged() {
        let s = skip(278.0, 0.0);
        assert_eq!(s.price_inc_vat(), 278.0);
        assert_eq!(s.display_price(SUMMARY_ROUNDING), "£278.00");
    }

    #[test]
    fn test_zero_price_ignores_vat() {
        let s = skip(0.0, 20.0);
        assert_eq!(s.price_inc_vat(), 0.0);
        assert_eq!(s.display_price(CARD_ROUNDING), "£0");
    }

    #[test]
    fn test_card_and_summary_rounding_differ() {
        let s = skip(311.0, 20.0);
        assert_eq!(s.display_price(CARD_ROUNDING), "£373");
        assert_eq!(s.display_price(SUMMARY_ROUNDING), "£373.20");
    }

    #[test]
    fn test_image_url_uses_size() {
        let s = skip(200.0, 20.0);
        assert!(s.image_url().ends_with("/skip-sizes/4-yarder-skip.jpg"));
        assert_eq!(s.image_alt(), "4-yarder skip");
    }
}
