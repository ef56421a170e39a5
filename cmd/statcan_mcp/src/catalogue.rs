// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2025-present Datadog, Inc.

//! Fixed catalogue of the Statistics Canada tables we know how to present.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Population,
    Labour,
    Cpi,
    Gdp,
    Housing,
    Trade,
    Crime,
    Education,
}

impl Topic {
    pub const ALL: [Topic; 8] = [
        Topic::Population,
        Topic::Labour,
        Topic::Cpi,
        Topic::Gdp,
        Topic::Housing,
        Topic::Trade,
        Topic::Crime,
        Topic::Education,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Population => "population",
            Topic::Labour => "labour",
            Topic::Cpi => "cpi",
            Topic::Gdp => "gdp",
            Topic::Housing => "housing",
            Topic::Trade => "trade",
            Topic::Crime => "crime",
            Topic::Education => "education",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown topic '{0}'")]
pub struct UnknownTopic(pub String);

impl FromStr for Topic {
    type Err = UnknownTopic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTopic(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogueEntry {
    pub topic: Topic,
    /// External dataset identifier, `NN-NN-NNNN-NN`.
    pub identifier: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub theme_label: &'static str,
}

static CATALOGUE: [CatalogueEntry; 8] = [
    CatalogueEntry {
        topic: Topic::Population,
        identifier: "17-10-0009-01",
        title: "Population Estimates, Quarterly",
        description: "Quarterly population estimates for Canada, the provinces and territories.",
        theme_label: "Population & Demography",
    },
    CatalogueEntry {
        topic: Topic::Labour,
        identifier: "14-10-0287-01",
        title: "Labour Force Characteristics by Province",
        description: "Monthly, seasonally adjusted employment, unemployment and participation rates.",
        theme_label: "Labour",
    },
    CatalogueEntry {
        topic: Topic::Cpi,
        identifier: "18-10-0004-01",
        title: "Consumer Price Index, Monthly",
        description: "Monthly consumer price index, not seasonally adjusted (2002=100).",
        theme_label: "Prices & Inflation",
    },
    CatalogueEntry {
        topic: Topic::Gdp,
        identifier: "36-10-0434-01",
        title: "Gross Domestic Product by Industry, Monthly",
        description: "Monthly real GDP at basic prices by industry, chained 2017 dollars.",
        theme_label: "Economy",
    },
    CatalogueEntry {
        topic: Topic::Housing,
        identifier: "34-10-0135-01",
        title: "Housing Starts, Under Construction and Completions",
        description: "CMHC quarterly housing starts, units under construction and completions.",
        theme_label: "Housing",
    },
    CatalogueEntry {
        topic: Topic::Trade,
        identifier: "12-10-0011-01",
        title: "International Merchandise Trade by Partner",
        description: "Monthly imports and exports of goods by principal trading partner.",
        theme_label: "International Trade",
    },
    CatalogueEntry {
        topic: Topic::Crime,
        identifier: "35-10-0177-01",
        title: "Incident-Based Crime Statistics",
        description: "Police-reported incidents by detailed violation, Canada, provinces and territories.",
        theme_label: "Justice & Crime",
    },
    CatalogueEntry {
        topic: Topic::Education,
        identifier: "37-10-0018-01",
        title: "Postsecondary Enrolments",
        description: "Postsecondary enrolments by registration status, institution type and gender.",
        theme_label: "Education",
    },
];

/// Looks up a topic by its key. Returns `None` for anything outside the
/// fixed set.
pub fn lookup(topic: &str) -> Option<&'static CatalogueEntry> {
    CATALOGUE.iter().find(|e| e.topic.as_str() == topic)
}

/// All entries in catalogue order.
pub fn entries() -> &'static [CatalogueEntry] {
    &CATALOGUE
}
