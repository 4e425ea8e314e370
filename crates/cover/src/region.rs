use std::fmt::Display;

use crate::{Error, Result};

/// A study region, identified by its country and city name as used in the
/// remote prediction archive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    country: String,
    city: String,
}

impl Region {
    pub fn new(country: impl Into<String>, city: impl Into<String>) -> Result<Self> {
        let country = country.into();
        let city = city.into();
        if country.trim().is_empty() || city.trim().is_empty() {
            return Err(Error::InvalidArgument("Region country and city may not be empty".into()));
        }

        Ok(Region { country, city })
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// A filesystem-safe key for this region, used as its directory name in
    /// the local store. Characters that are not safe in file names are
    /// replaced by underscores.
    pub fn key(&self) -> String {
        const UNSAFE: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

        format!("{}_{}", self.country, self.city)
            .chars()
            .map(|c| if UNSAFE.contains(&c) { '_' } else { c })
            .collect()
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.city, self.country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_key_is_filesystem_safe() -> Result {
        assert_eq!(Region::new("Mexico", "Monterrey")?.key(), "Mexico_Monterrey");
        assert_eq!(Region::new("Mexico", "Ciudad Juarez")?.key(), "Mexico_Ciudad Juarez");
        assert_eq!(Region::new("Peru", "Lima/Callao")?.key(), "Peru_Lima_Callao");
        Ok(())
    }

    #[test]
    fn rejects_blank_names() {
        assert!(Region::new("", "Monterrey").is_err());
        assert!(Region::new("Mexico", "  ").is_err());
    }

    #[test]
    fn display_reads_city_first() -> Result {
        assert_eq!(Region::new("Mexico", "Monterrey")?.to_string(), "Monterrey, Mexico");
        Ok(())
    }
}
