//! Newtype IDs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Backend identifier of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_is_transparent_in_json() {
        assert_eq!(serde_json::to_string(&ProductId(7)).unwrap(), "7");
        let id: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(id, ProductId(42));
    }

    #[test]
    fn test_product_id_parse() {
        assert_eq!(" 12 ".parse::<ProductId>().unwrap(), ProductId(12));
        assert!("abc".parse::<ProductId>().is_err());
    }
}
