//! Plain-text rendering of breakdowns and the regime comparison.

use std::fmt::Write;

use itax_core::TaxComparison;
use itax_core::models::{Regime, TaxBreakdown};

use crate::format::{inr, percent};

const LABEL_WIDTH: usize = 28;

fn line(
    out: &mut String,
    label: &str,
    value: String,
) {
    let _ = writeln!(out, "  {label:<LABEL_WIDTH$}{value:>14}");
}

/// Renders one regime's full breakdown.
pub fn render_breakdown(
    regime: Regime,
    b: &TaxBreakdown,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", regime.display_name());

    line(&mut out, "Gross Salary", inr(b.gross_salary));
    line(&mut out, "Standard Deduction", inr(b.standard_deduction));
    if regime == Regime::Old {
        line(&mut out, "HRA Exemption", inr(b.hra_exemption));
        line(&mut out, "Section 80C", inr(b.section_80c));
        line(&mut out, "Other Deductions", inr(b.other_deductions));
    }
    line(&mut out, "Taxable Income", inr(b.taxable_income));
    line(&mut out, "Income Tax", inr(b.income_tax));
    line(&mut out, "Health & Education Cess (4%)", inr(b.cess));
    line(&mut out, "Total Tax", inr(b.total_tax));
    line(&mut out, "Net Salary", inr(b.net_salary));
    line(&mut out, "Effective Rate", percent(b.effective_rate));

    out
}

/// Renders both breakdowns plus the comparison verdict.
pub fn render(result: &TaxComparison) -> String {
    let mut out = String::new();

    out.push_str(&render_breakdown(Regime::Old, &result.old));
    out.push('\n');
    out.push_str(&render_breakdown(Regime::New, &result.new));
    out.push('\n');

    let _ = writeln!(
        out,
        "{} is cheaper for you: you save {} annually.",
        result.comparison.cheaper.display_name(),
        inr(result.comparison.savings),
    );

    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use itax_core::calculate;
    use itax_core::models::{CityClass, SalaryIncome, TaxInput};

    fn sample_result() -> TaxComparison {
        let input = TaxInput {
            salary: SalaryIncome::Total {
                annual_salary: dec!(1200000),
            },
            city_class: CityClass::Metro,
        };
        calculate(&input).unwrap()
    }

    #[test]
    fn render_breakdown_old_lists_all_deductions() {
        let result = sample_result();

        let text = render_breakdown(Regime::Old, &result.old);

        assert!(text.starts_with("Old Regime"));
        assert!(text.contains("HRA Exemption"));
        assert!(text.contains("Section 80C"));
        assert!(text.contains("Other Deductions"));
    }

    #[test]
    fn render_breakdown_new_omits_itemized_deductions() {
        let result = sample_result();

        let text = render_breakdown(Regime::New, &result.new);

        assert!(text.starts_with("New Regime"));
        assert!(!text.contains("HRA Exemption"));
        assert!(!text.contains("Section 80C"));
        assert!(text.contains("Standard Deduction"));
    }

    #[test]
    fn render_formats_amounts_in_indian_grouping() {
        let result = sample_result();

        let text = render(&result);

        assert!(text.contains("₹12,00,000"));
        assert!(text.contains("₹71,500"));
    }

    #[test]
    fn render_names_the_cheaper_regime_and_savings() {
        let result = sample_result();

        let text = render(&result);
        let verdict = text.lines().last().unwrap();

        assert_eq!(
            verdict,
            "New Regime is cheaper for you: you save ₹47,060 annually."
        );
    }
}
