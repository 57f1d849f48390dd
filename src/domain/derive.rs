// src/domain/derive.rs

use crate::catalog::SkipRecord;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    BySize,
    /// Sorts on the pre-VAT base, not the total.
    ByPrice,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoadFilter {
    #[default]
    All,
    RoadAllowedOnly,
    PermitRequiredOnly,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::BySize => "size",
            SortKey::ByPrice => "price",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::BySize => "Sort by Size",
            SortKey::ByPrice => "Sort by Price",
        }
    }

    pub const ALL: [SortKey; 2] = [SortKey::BySize, SortKey::ByPrice];
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "size" => Ok(SortKey::BySize),
            "price" => Ok(SortKey::ByPrice),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

impl RoadFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            RoadFilter::All => "all",
            RoadFilter::RoadAllowedOnly => "road",
            RoadFilter::PermitRequiredOnly => "no-road",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RoadFilter::All => "All Skips",
            RoadFilter::RoadAllowedOnly => "Road Placement OK",
            RoadFilter::PermitRequiredOnly => "Permit Required",
        }
    }

    pub fn keeps(self, record: &SkipRecord) -> bool {
        match self {
            RoadFilter::All => true,
            RoadFilter::RoadAllowedOnly => record.allowed_on_road,
            RoadFilter::PermitRequiredOnly => !record.allowed_on_road,
        }
    }

    pub const ALL: [RoadFilter; 3] = [
        RoadFilter::All,
        RoadFilter::RoadAllowedOnly,
        RoadFilter::PermitRequiredOnly,
    ];
}

impl FromStr for RoadFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(RoadFilter::All),
            "road" => Ok(RoadFilter::RoadAllowedOnly),
            "no-road" => Ok(RoadFilter::PermitRequiredOnly),
            other => Err(format!("unknown road filter: {other}")),
        }
    }
}

/// Filter then sort a copy of `items`. The input is never reordered and
/// records comparing equal keep their original relative order.
pub fn derive(items: &[SkipRecord], sort: SortKey, filter: RoadFilter) -> Vec<SkipRecord> {
    let mut out: Vec<SkipRecord> = items.iter().filter(|r| filter.keeps(r)).cloned().collect();

    // sort_by is stable
    match sort {
        SortKey::BySize => out.sort_by_key(|r| r.size),
        // -0.0 and 0.0 tie
        SortKey::ByPrice => out.sort_by(|a, b| {
            a.price_before_vat
                .partial_cmp(&b.price_before_vat)
                .unwrap_or(Ordering::Equal)
        }),
    }

    out
}
