use crate::error::{HunterError, Result};
use crate::models::Property;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Result ordering, applied after filtering
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Keep store order
    #[default]
    None,
    PriceAsc,
    PriceDesc,
    SizeAsc,
    SizeDesc,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::None => "none",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::SizeAsc => "size-asc",
            SortOption::SizeDesc => "size-desc",
        }
    }

    /// Order two listings by this option's key.
    /// `None` treats every pair as equal, which a stable sort leaves untouched.
    pub fn compare(&self, a: &Property, b: &Property) -> Ordering {
        match self {
            SortOption::None => Ordering::Equal,
            SortOption::PriceAsc => a.price.total_cmp(&b.price),
            SortOption::PriceDesc => b.price.total_cmp(&a.price),
            SortOption::SizeAsc => a.size.total_cmp(&b.size),
            SortOption::SizeDesc => b.size.total_cmp(&a.size),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = HunterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(SortOption::None),
            "price-asc" => Ok(SortOption::PriceAsc),
            "price-desc" => Ok(SortOption::PriceDesc),
            "size-asc" => Ok(SortOption::SizeAsc),
            "size-desc" => Ok(SortOption::SizeDesc),
            other => Err(HunterError::ValidationFailure(format!(
                "unknown sort option '{other}'"
            ))),
        }
    }
}
