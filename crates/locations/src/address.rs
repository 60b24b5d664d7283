use avalans_core::guard::{ensure_max_chars, require_non_blank};
use avalans_core::{DomainResult, ValueObject};

pub const MAX_STREET_CHARS: usize = 200;
pub const MAX_CITY_CHARS: usize = 100;
pub const MAX_POSTAL_CODE_CHARS: usize = 20;
pub const MAX_COUNTRY_CHARS: usize = 100;

/// Value object: a physical address.
///
/// Immutable once built; compared field by field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    street: String,
    city: String,
    postal_code: String,
    country: String,
    state: Option<String>,
}

impl Address {
    pub fn create(
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
        state: Option<String>,
    ) -> DomainResult<Self> {
        let (street, city, postal_code, country) =
            (street.into(), city.into(), postal_code.into(), country.into());

        require_non_blank("street", &street)?;
        require_non_blank("city", &city)?;
        require_non_blank("postal_code", &postal_code)?;
        require_non_blank("country", &country)?;

        ensure_max_chars(&street, MAX_STREET_CHARS, "Street address cannot exceed 200 characters")?;
        ensure_max_chars(&city, MAX_CITY_CHARS, "City name cannot exceed 100 characters")?;
        ensure_max_chars(
            &postal_code,
            MAX_POSTAL_CODE_CHARS,
            "Postal code cannot exceed 20 characters",
        )?;
        ensure_max_chars(&country, MAX_COUNTRY_CHARS, "Country name cannot exceed 100 characters")?;

        Ok(Self {
            street,
            city,
            postal_code,
            country,
            state,
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }
}

impl ValueObject for Address {}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let parts = [
            Some(self.street.as_str()),
            Some(self.city.as_str()),
            self.state.as_deref(),
            Some(self.postal_code.as_str()),
            Some(self.country.as_str()),
        ];
        let joined = parts
            .into_iter()
            .flatten()
            .filter(|p| !p.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&joined)
    }
}
