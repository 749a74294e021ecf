// src/report/mod.rs
//! Text rendering of report rows and the period summary.
pub mod table;

use crate::analysis::{PeriodSummary, ReportRow};
use crate::utils::format::{format_fixed, format_number, or_absent, ABSENT, NOT_AVAILABLE};
use table::Table;

/// Which ratio columns are printed and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioStyle {
    /// PER only, as a thousands-separated integer.
    PerInteger,
    /// PER to one decimal and PBR to two.
    PerPbrFixed,
}

const BASE_COLUMNS: [&str; 9] = [
    "DisclosedDate",
    "NetSales",
    "OperatingProfit",
    "OrdinaryProfit",
    "Profit",
    "EarningsPerShare",
    "BookValuePerShare",
    "ClosingPrice",
    "PER",
];

pub fn build_table(rows: &[ReportRow], style: RatioStyle) -> Table {
    let mut headers = BASE_COLUMNS.to_vec();
    if style == RatioStyle::PerPbrFixed {
        headers.push("PBR");
    }

    let mut table = Table::new(headers);
    for row in rows {
        let mut cells = vec![
            or_absent(row.disclosed_date.clone()),
            or_absent(format_number(row.net_sales)),
            or_absent(format_number(row.operating_profit)),
            or_absent(format_number(row.ordinary_profit)),
            or_absent(format_number(row.profit)),
            or_absent(row.earnings_per_share.clone()),
            or_absent(row.book_value_per_share.clone()),
            or_absent(format_number(row.closing_price)),
        ];
        match style {
            RatioStyle::PerInteger => cells.push(or_absent(format_number(row.per))),
            RatioStyle::PerPbrFixed => {
                cells.push(or_absent(format_fixed(row.per, 1)));
                cells.push(or_absent(format_fixed(row.pbr, 2)));
            }
        }
        table.push_row(cells);
    }
    table
}

pub fn render_rows(rows: &[ReportRow], style: RatioStyle) -> String {
    build_table(rows, style).render()
}

/// Trailing block printed after the PER/PBR table.
pub fn render_summary(summary: &PeriodSummary) -> String {
    let bound = |b: &Option<String>| b.clone().filter(|s| !s.is_empty()).unwrap_or_else(|| ABSENT.to_string());
    let per = |v: Option<f64>| format_fixed(v, 1).unwrap_or_else(|| NOT_AVAILABLE.to_string());

    format!(
        "\nPeriod: {} ~ {}\nHigh Price: {}\nLow Price: {}\nHigh PER: {}\nLow PER: {}\n",
        bound(&summary.start),
        bound(&summary.end),
        or_absent(format_number(summary.high_price)),
        or_absent(format_number(summary.low_price)),
        per(summary.high_per),
        per(summary.low_per),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row() -> ReportRow {
        ReportRow {
            disclosed_date: Some("2023-05-10".into()),
            net_sales: Some(990089000000.0),
            operating_profit: Some(150000000000.0),
            ordinary_profit: None,
            profit: Some(-5000.0),
            earnings_per_share: Some("10".into()),
            book_value_per_share: Some("500".into()),
            closing_price: Some(1000.0),
            per: Some(100.0),
            pbr: Some(2.0),
        }
    }

    fn column_of<'a>(header: &str, line: &'a str, name: &str) -> &'a str {
        let start = header.find(name).unwrap();
        line[start..].split_whitespace().next().unwrap_or("")
    }

    #[test]
    fn test_per_integer_style() {
        let text = render_rows(&[row()], RatioStyle::PerInteger);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split_whitespace().collect::<Vec<_>>(), BASE_COLUMNS.to_vec());
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            vec!["2023-05-10", "990,089,000,000", "150,000,000,000", "None", "-5,000", "10", "500", "1,000", "100"]
        );
        assert_eq!(column_of(lines[0], lines[1], "PER"), "100");
        assert_eq!(column_of(lines[0], lines[1], "OrdinaryProfit"), "None");
    }

    #[test]
    fn test_per_pbr_fixed_style() {
        let mut absent = row();
        absent.per = None;
        let text = render_rows(&[row(), absent], RatioStyle::PerPbrFixed);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].ends_with("PBR"));
        assert_eq!(column_of(lines[0], lines[1], "PER"), "100.0");
        assert_eq!(column_of(lines[0], lines[1], "PBR"), "2.00");
        assert_eq!(column_of(lines[0], lines[2], "PER"), "None");
        assert_eq!(column_of(lines[0], lines[2], "PBR"), "2.00");
    }

    #[test]
    fn test_render_summary() {
        let summary = PeriodSummary {
            start: Some("2022-04-01".into()),
            end: Some("2023-03-31".into()),
            high_price: Some(1300.0),
            low_price: Some(1000.0),
            high_per: Some(13.0),
            low_per: None,
        };
        assert_eq!(
            render_summary(&summary),
            "\nPeriod: 2022-04-01 ~ 2023-03-31\nHigh Price: 1,300\nLow Price: 1,000\nHigh PER: 13.0\nLow PER: N/A\n"
        );
    }
}
