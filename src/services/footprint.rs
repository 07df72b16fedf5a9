use crate::models::report::BYTES_PER_MB;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Full transfer energy chain, in kWh per GB of data moved.
pub const ENERGY_PER_GB_KWH: f64 = 1.8;

/// Litres of water per MB transferred, used for the annualized water figure.
pub const WATER_PER_MB_LITERS: f64 = 0.015;

/// Fallback grid intensity (g CO2 / kWh) when the hosting country is unknown
/// or not in the table.
pub const GLOBAL_GRID_INTENSITY: f64 = 475.0;

/// Illustrative percentile banding over grams of CO2 per visit. Each band is
/// an exclusive upper bound paired with the percentile it grants.
pub const PERCENTILE_BANDS: [(f64, u8); 3] = [(0.5, 90), (1.0, 70), (2.0, 40)];
pub const PERCENTILE_FLOOR: u8 = 20;

lazy_static! {
    /// Grid carbon intensity per country, in grams of CO2 per kWh.
    static ref GRID_INTENSITY: HashMap<&'static str, f64> = {
        let mut m = HashMap::new();
        m.insert("FR", 52.0);
        m.insert("DE", 401.0);
        m.insert("GB", 208.0);
        m.insert("US", 384.0);
        m
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct FootprintEstimate {
    pub co2_grams: f64,
    pub total_data_mb: f64,
    pub annual_co2_kg: f64,
    pub water_liters: f64,
    pub percentile: u8,
}

pub fn grid_intensity(country: &str) -> f64 {
    GRID_INTENSITY
        .get(country)
        .copied()
        .unwrap_or(GLOBAL_GRID_INTENSITY)
}

pub fn percentile(co2_grams: f64) -> u8 {
    for (bound, pct) in PERCENTILE_BANDS {
        if co2_grams < bound {
            return pct;
        }
    }
    PERCENTILE_FLOOR
}

/// The fixed heuristic formula: bytes -> GB, times transfer energy, times the
/// grid intensity of the hosting country. Annualized figures scale by the
/// requested monthly visit count.
pub fn estimate(total_bytes: u64, country: &str, monthly_visits: u64) -> FootprintEstimate {
    let total_data_mb = total_bytes as f64 / BYTES_PER_MB;
    let total_data_gb = total_data_mb / 1024.0;

    let co2_grams = total_data_gb * ENERGY_PER_GB_KWH * grid_intensity(country);
    let annual_co2_kg = co2_grams / 1000.0 * monthly_visits as f64 * 12.0;
    let water_liters = total_data_mb * WATER_PER_MB_LITERS * monthly_visits as f64 * 12.0;

    FootprintEstimate {
        co2_grams,
        total_data_mb,
        annual_co2_kg,
        water_liters,
        percentile: percentile(co2_grams),
    }
}
