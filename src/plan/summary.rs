use std::fmt::Write;

use serde::Serialize;

use crate::{partition::DistrictSet, types::Population};

/// Population and affiliation totals of one district.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictSummary {
    pub district: usize,
    pub blocks: usize,
    pub population: f64,
    pub favorable: f64,
    pub complement: f64,
    /// Favorable share of the population, zero for an empty district.
    pub favorable_share: f64,
    /// Relative deviation from the target population.
    pub deviation: f64,
}

/// Summarize every district against a target population.
pub fn summarize(districts: &DistrictSet, target: Population) -> Vec<DistrictSummary> {
    let target = target.to_f64();
    districts.districts().iter().map(|district| {
        let population = district.population().to_f64();
        let favorable = district.favorable().to_f64();
        DistrictSummary {
            district: district.id(),
            blocks: district.len(),
            population,
            favorable,
            complement: district.complement().to_f64(),
            favorable_share: if population == 0.0 { 0.0 } else { favorable / population },
            deviation: if target == 0.0 { 0.0 } else { population / target - 1.0 },
        }
    }).collect()
}

/// Render summaries as a fixed-width text table.
pub fn format_summaries(summaries: &[DistrictSummary]) -> String {
    let mut out = format!("{:>8} {:>7} {:>12} {:>12} {:>12} {:>7} {:>9}\n",
        "district", "blocks", "population", "favorable", "complement", "share", "deviation");
    for s in summaries {
        let _ = writeln!(out, "{:>8} {:>7} {:>12.1} {:>12.1} {:>12.1} {:>6.1}% {:>+8.2}%",
            s.district, s.blocks, s.population, s.favorable, s.complement,
            s.favorable_share * 100.0, s.deviation * 100.0);
    }
    out
}
