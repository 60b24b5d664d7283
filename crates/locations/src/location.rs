use chrono::{DateTime, Utc};

use avalans_core::guard::{ensure_max_chars, ensure_optional_max_chars, require_non_blank};
use avalans_core::{DomainResult, Entity};

use crate::address::Address;

avalans_core::aggregate_id!(
    /// Location identifier.
    LocationId
);

pub const MAX_NAME_CHARS: usize = 200;
pub const MAX_NUMBER_CHARS: usize = 50;
pub const MAX_CONTACT_NAME_CHARS: usize = 100;
pub const MAX_CONTACT_EMAIL_CHARS: usize = 100;
pub const MAX_CONTACT_PHONE_CHARS: usize = 50;

/// Every persisted field of a [`Location`]; see [`Location::rehydrate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSnapshot {
    pub id: LocationId,
    pub name: String,
    pub number: String,
    pub address: Address,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Aggregate root: Location.
///
/// `number` is the business key. Its uniqueness across all locations (active or
/// not) is checked by the create/update handlers, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    state: LocationSnapshot,
}

impl Location {
    pub fn create(
        name: impl Into<String>,
        number: impl Into<String>,
        address: Address,
    ) -> DomainResult<Self> {
        let (name, number) = (name.into(), number.into());
        validate_basic_info(&name, &number)?;

        Ok(Self {
            state: LocationSnapshot {
                id: LocationId::new(),
                name,
                number,
                address,
                contact_name: None,
                contact_email: None,
                contact_phone: None,
                is_active: true,
                created_at: Utc::now(),
                updated_at: None,
            },
        })
    }

    /// Rebuild a location from persisted fields. No validation runs here.
    pub fn rehydrate(snapshot: LocationSnapshot) -> Self {
        Self { state: snapshot }
    }

    pub fn snapshot(&self) -> &LocationSnapshot {
        &self.state
    }

    pub fn update_basic_info(
        &mut self,
        name: impl Into<String>,
        number: impl Into<String>,
    ) -> DomainResult<()> {
        let (name, number) = (name.into(), number.into());
        validate_basic_info(&name, &number)?;

        self.state.name = name;
        self.state.number = number;
        self.touch();
        Ok(())
    }

    /// Replace the address wholesale.
    pub fn update_address(&mut self, address: Address) {
        self.state.address = address;
        self.touch();
    }

    /// Full replace of all three contact fields; a `None` clears that field.
    pub fn set_contact_info(
        &mut self,
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> DomainResult<()> {
        ensure_optional_max_chars(
            name.as_deref(),
            MAX_CONTACT_NAME_CHARS,
            "Contact name cannot exceed 100 characters",
        )?;
        ensure_optional_max_chars(
            email.as_deref(),
            MAX_CONTACT_EMAIL_CHARS,
            "Contact email cannot exceed 100 characters",
        )?;
        ensure_optional_max_chars(
            phone.as_deref(),
            MAX_CONTACT_PHONE_CHARS,
            "Contact phone cannot exceed 50 characters",
        )?;

        self.state.contact_name = name;
        self.state.contact_email = email;
        self.state.contact_phone = phone;
        self.touch();
        Ok(())
    }

    pub fn activate(&mut self) {
        self.state.is_active = true;
        self.touch();
    }

    /// Soft delete.
    pub fn deactivate(&mut self) {
        self.state.is_active = false;
        self.touch();
    }

    pub fn name(&self) -> &str {
        &self.state.name
    }

    pub fn number(&self) -> &str {
        &self.state.number
    }

    pub fn address(&self) -> &Address {
        &self.state.address
    }

    pub fn contact_name(&self) -> Option<&str> {
        self.state.contact_name.as_deref()
    }

    pub fn contact_email(&self) -> Option<&str> {
        self.state.contact_email.as_deref()
    }

    pub fn contact_phone(&self) -> Option<&str> {
        self.state.contact_phone.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.state.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.state.updated_at
    }

    fn touch(&mut self) {
        self.state.updated_at = Some(Utc::now());
    }
}

impl Entity for Location {
    type Id = LocationId;

    fn id(&self) -> LocationId {
        self.state.id
    }
}

fn validate_basic_info(name: &str, number: &str) -> DomainResult<()> {
    require_non_blank("name", name)?;
    require_non_blank("number", number)?;

    ensure_max_chars(name, MAX_NAME_CHARS, "Location name cannot exceed 200 characters")?;
    ensure_max_chars(number, MAX_NUMBER_CHARS, "Location number cannot exceed 50 characters")
}
