// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2025-present Datadog, Inc.

//! Hand-authored sample tables served when live data is unavailable.
//!
//! Only population, labour, cpi and housing have a dedicated sample. Every
//! other topic gets the population table.

use serde_json::json;

use crate::table::{Column, Table, row};

const SAMPLE_NOTE: &str = "Illustrative sample data; live Statistics Canada data was unavailable.";

/// Sample table for `topic`. Never fails.
pub fn sample(topic: &str) -> Table {
    match topic {
        "labour" => labour(),
        "cpi" => cpi(),
        "housing" => housing(),
        // TODO: gdp, trade, crime and education have catalogue entries but no
        // sample of their own and currently show population figures.
        _ => population(),
    }
}

fn sample_table(title: &str, table_id: &str, period: &str, geography: &str) -> Table {
    Table::empty(title)
        .with_note("table_id", table_id)
        .with_note("reference_period", period)
        .with_note("geography", geography)
        .with_note("sample", SAMPLE_NOTE)
}

fn population() -> Table {
    let mut t = sample_table(
        "Population Estimates by Province (2024 Q2)",
        "17-10-0009-01",
        "2024 Q2 (April 1, 2024)",
        "Canada, provinces and territories",
    );
    t.columns = vec![
        Column::text("GEO", "Geography"),
        Column::numeric("VALUE", "Population"),
        Column::change("QUARTERLY_CHANGE", "Quarterly Change (%)"),
    ];
    t.rows = [
        ("Canada", 41_219_569, 0.6),
        ("Newfoundland and Labrador", 545_579, 0.4),
        ("Prince Edward Island", 177_081, 0.8),
        ("Nova Scotia", 1_076_374, 0.5),
        ("New Brunswick", 850_894, 0.5),
        ("Quebec", 9_030_684, 0.5),
        ("Ontario", 16_124_116, 0.6),
        ("Manitoba", 1_494_301, 0.6),
        ("Saskatchewan", 1_239_865, 0.6),
        ("Alberta", 4_849_906, 0.9),
        ("British Columbia", 5_698_430, 0.7),
        ("Yukon", 46_704, 0.5),
        ("Northwest Territories", 44_920, 0.1),
        ("Nunavut", 40_715, 0.3),
    ]
    .into_iter()
    .map(|(geo, value, change)| {
        row([
            ("GEO", json!(geo)),
            ("VALUE", json!(value)),
            ("QUARTERLY_CHANGE", json!(change)),
        ])
    })
    .collect();
    t
}

fn labour() -> Table {
    let mut t = sample_table(
        "Labour Force Characteristics by Province (September 2024)",
        "14-10-0287-01",
        "September 2024, seasonally adjusted",
        "Canada and provinces",
    );
    t.columns = vec![
        Column::text("GEO", "Geography"),
        Column::numeric("EMPLOYMENT", "Employment (thousands)"),
        Column::numeric("UNEMPLOYMENT_RATE", "Unemployment Rate (%)"),
        Column::numeric("PARTICIPATION_RATE", "Participation Rate (%)"),
        Column::change("MONTHLY_CHANGE", "Employment Change (thousands)"),
    ];
    t.rows = [
        ("Canada", 20_843.2, 6.5, 64.9, 46.7),
        ("Newfoundland and Labrador", 242.1, 10.1, 58.3, 1.2),
        ("Prince Edward Island", 95.8, 7.6, 66.1, 0.4),
        ("Nova Scotia", 511.9, 6.4, 61.7, 2.9),
        ("New Brunswick", 398.0, 6.7, 61.0, -1.5),
        ("Quebec", 4_507.3, 5.8, 64.4, 9.2),
        ("Ontario", 8_049.5, 7.1, 64.9, 20.2),
        ("Manitoba", 717.6, 5.2, 66.1, 1.9),
        ("Saskatchewan", 604.5, 5.3, 66.8, 2.5),
        ("Alberta", 2_559.4, 7.3, 69.8, 6.4),
        ("British Columbia", 2_875.8, 5.6, 64.4, 3.5),
    ]
    .into_iter()
    .map(|(geo, employment, unemployment, participation, change)| {
        row([
            ("GEO", json!(geo)),
            ("EMPLOYMENT", json!(employment)),
            ("UNEMPLOYMENT_RATE", json!(unemployment)),
            ("PARTICIPATION_RATE", json!(participation)),
            ("MONTHLY_CHANGE", json!(change)),
        ])
    })
    .collect();
    t
}

fn cpi() -> Table {
    let mut t = sample_table(
        "Consumer Price Index, All-Items (2024)",
        "18-10-0004-01",
        "January to December 2024 (2002=100)",
        "Canada",
    );
    t.columns = vec![
        Column::text("REF_DATE", "Reference Date"),
        Column::numeric("VALUE", "All-Items CPI"),
        Column::change("YEAR_OVER_YEAR", "12-Month Change (%)"),
    ];
    t.rows = [
        ("2024-01", 158.3, 2.9),
        ("2024-02", 158.8, 2.8),
        ("2024-03", 159.8, 2.9),
        ("2024-04", 160.6, 2.7),
        ("2024-05", 161.5, 2.9),
        ("2024-06", 161.4, 2.7),
        ("2024-07", 162.1, 2.5),
        ("2024-08", 161.8, 2.0),
        ("2024-09", 161.1, 1.6),
        ("2024-10", 161.8, 2.0),
        ("2024-11", 161.8, 1.9),
        ("2024-12", 161.2, 1.8),
    ]
    .into_iter()
    .map(|(date, value, change)| {
        row([
            ("REF_DATE", json!(date)),
            ("VALUE", json!(value)),
            ("YEAR_OVER_YEAR", json!(change)),
        ])
    })
    .collect();
    t
}

fn housing() -> Table {
    let mut t = sample_table(
        "Housing Starts, Under Construction and Completions (2024 Q2)",
        "34-10-0135-01",
        "2024 Q2",
        "Canada and provinces, all areas",
    );
    t.columns = vec![
        Column::text("GEO", "Geography"),
        Column::numeric("STARTS", "Housing Starts"),
        Column::numeric("UNDER_CONSTRUCTION", "Under Construction"),
        Column::numeric("COMPLETIONS", "Completions"),
    ];
    t.rows = [
        ("Canada", 64_270, 378_905, 53_112),
        ("Newfoundland and Labrador", 401, 1_186, 362),
        ("Prince Edward Island", 374, 1_792, 298),
        ("Nova Scotia", 1_602, 9_127, 1_288),
        ("New Brunswick", 1_451, 5_031, 1_006),
        ("Quebec", 11_265, 68_410, 10_043),
        ("Ontario", 19_823, 136_802, 17_904),
        ("Manitoba", 2_014, 9_874, 1_711),
        ("Saskatchewan", 1_285, 4_460, 902),
        ("Alberta", 12_406, 48_391, 9_488),
        ("British Columbia", 13_649, 93_832, 10_110),
    ]
    .into_iter()
    .map(|(geo, starts, under_construction, completions)| {
        row([
            ("GEO", json!(geo)),
            ("STARTS", json!(starts)),
            ("UNDER_CONSTRUCTION", json!(under_construction)),
            ("COMPLETIONS", json!(completions)),
        ])
    })
    .collect();
    t
}
