use super::catalog::Catalog;
use super::domain::{ExperienceTier, Industry, SalaryBand, SalaryRange};

/// Scales a base band by the tier's salary factors.
pub fn resolve_salary(band: SalaryBand, tier: ExperienceTier) -> SalaryRange {
    let multiplier = tier.multiplier();
    let min = scale(band.min, multiplier.salary_min);
    let max = scale(band.max, multiplier.salary_max);

    SalaryRange {
        min,
        max,
        display: format!("${} - ${}", group_thousands(min), group_thousands(max)),
    }
}

/// Band for titles without their own catalog row, derived from the industry base.
pub fn resolve_industry_salary(industry: Industry, tier: ExperienceTier) -> SalaryRange {
    resolve_salary(Catalog::industry_salary_base(industry), tier)
}

fn scale(amount: u32, factor: f64) -> u32 {
    (f64::from(amount) * factor).round() as u32
}

fn group_thousands(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mid_tier_keeps_the_base_band() {
        let range = resolve_salary(SalaryBand { min: 80_000, max: 150_000 }, ExperienceTier::Mid);
        assert_eq!((range.min, range.max), (80_000, 150_000));
        assert_eq!(range.display, "$80,000 - $150,000");
    }

    #[test]
    fn entry_tier_scales_bounds_independently() {
        let range = resolve_industry_salary(Industry::Technology, ExperienceTier::Entry);
        assert_eq!(range.min, 49_000);
        assert_eq!(range.max, 96_000);
    }

    #[test]
    fn executive_tier_widens_the_band() {
        let range = resolve_industry_salary(Industry::Education, ExperienceTier::Executive);
        assert_eq!(range.min, 64_000);
        assert_eq!(range.max, 126_000);
        assert_eq!(range.display, "$64,000 - $126,000");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
