use chrono::{DateTime, Utc};

use avalans_core::guard::{ensure_max_chars, require_non_blank};
use avalans_core::{DomainError, DomainResult, Entity};

avalans_core::aggregate_id!(
    /// Item identifier.
    ItemId
);

pub const MAX_NAME_CHARS: usize = 200;
pub const DEFAULT_DIMENSION_UNIT: &str = "cm";
pub const DEFAULT_WEIGHT_UNIT: &str = "kg";
pub const DEFAULT_CURRENCY: &str = "USD";

/// Every persisted field of an [`Item`], without any rules attached.
///
/// Storage adapters read this out with [`Item::snapshot`] and hand it back to
/// [`Item::rehydrate`]. Nothing else should build one.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSnapshot {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub sku: Option<String>,
    pub barcode: Option<String>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub dimension_unit: Option<String>,
    pub weight: Option<f64>,
    pub weight_unit: Option<String>,
    pub volume: Option<f64>,
    pub volume_unit: Option<String>,
    pub is_fragile: bool,
    pub is_perishable: bool,
    pub shelf_life: Option<i32>,
    pub value: Option<f64>,
    pub currency: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Aggregate root: Item.
///
/// State is private; every change goes through a named mutator that validates its
/// input first and stamps `updated_at` on success. A failed mutator leaves the
/// item untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    state: ItemSnapshot,
}

impl Item {
    /// Create a new item with a fresh id and the current UTC time.
    pub fn create(
        name: impl Into<String>,
        description: Option<String>,
        sku: Option<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;

        Ok(Self {
            state: ItemSnapshot {
                id: ItemId::new(),
                name,
                description,
                sku,
                barcode: None,
                length: None,
                width: None,
                height: None,
                dimension_unit: None,
                weight: None,
                weight_unit: None,
                volume: None,
                volume_unit: None,
                is_fragile: false,
                is_perishable: false,
                shelf_life: None,
                value: None,
                currency: None,
                category: None,
                created_at: Utc::now(),
                updated_at: None,
            },
        })
    }

    /// Rebuild an item from persisted fields. No validation runs here.
    pub fn rehydrate(snapshot: ItemSnapshot) -> Self {
        Self { state: snapshot }
    }

    pub fn snapshot(&self) -> &ItemSnapshot {
        &self.state
    }

    /// Overwrite name, description, SKU and barcode in one go.
    pub fn update_basic_info(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
        sku: Option<String>,
        barcode: Option<String>,
    ) -> DomainResult<()> {
        let name = name.into();
        validate_name(&name)?;

        self.state.name = name;
        self.state.description = description;
        self.state.sku = sku;
        self.state.barcode = barcode;
        self.touch();
        Ok(())
    }

    /// Store whichever dimensions are given.
    ///
    /// Volume is recomputed only when all three are present; otherwise the
    /// previously stored volume stays as it was.
    pub fn set_dimensions(
        &mut self,
        length: Option<f64>,
        width: Option<f64>,
        height: Option<f64>,
        unit: &str,
    ) -> DomainResult<()> {
        ensure_positive_if_set(length, "Length must be greater than zero")?;
        ensure_positive_if_set(width, "Width must be greater than zero")?;
        ensure_positive_if_set(height, "Height must be greater than zero")?;

        self.state.length = length;
        self.state.width = width;
        self.state.height = height;
        self.state.dimension_unit = Some(unit.to_string());
        self.touch();

        if let (Some(l), Some(w), Some(h)) = (length, width, height) {
            self.state.volume = Some(l * w * h);
            self.state.volume_unit = Some(cubic_unit(unit));
        }
        Ok(())
    }

    pub fn set_weight(&mut self, weight: f64, unit: &str) -> DomainResult<()> {
        // NaN fails this comparison as well.
        if !(weight > 0.0) {
            return Err(DomainError::validation("Weight must be greater than zero"));
        }

        self.state.weight = Some(weight);
        self.state.weight_unit = Some(unit.to_string());
        self.touch();
        Ok(())
    }

    /// Perishable items need a positive shelf life; non-perishable items must not
    /// carry one. Pass `(false, None)` to clear.
    pub fn set_perishability(
        &mut self,
        is_perishable: bool,
        shelf_life_days: Option<i32>,
    ) -> DomainResult<()> {
        match (is_perishable, shelf_life_days) {
            (true, Some(days)) if days > 0 => {}
            (true, _) => {
                return Err(DomainError::invariant(
                    "Perishable items must have a positive shelf life in days",
                ));
            }
            (false, Some(_)) => {
                return Err(DomainError::invariant(
                    "Non-perishable items cannot have a shelf life",
                ));
            }
            (false, None) => {}
        }

        self.state.is_perishable = is_perishable;
        self.state.shelf_life = shelf_life_days;
        self.touch();
        Ok(())
    }

    /// Set the monetary value. The currency is stored upper-cased.
    pub fn set_value(&mut self, value: f64, currency: &str) -> DomainResult<()> {
        if !(value >= 0.0) {
            return Err(DomainError::validation("Item value cannot be negative"));
        }
        if currency.trim().is_empty() || currency.chars().count() != 3 {
            return Err(DomainError::validation(
                "Currency must be a valid 3-letter ISO code",
            ));
        }

        self.state.value = Some(value);
        self.state.currency = Some(currency.to_uppercase());
        self.touch();
        Ok(())
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.state.category = category;
        self.touch();
    }

    pub fn mark_as_fragile(&mut self) {
        self.state.is_fragile = true;
        self.touch();
    }

    pub fn mark_as_non_fragile(&mut self) {
        self.state.is_fragile = false;
        self.touch();
    }

    /// `length × width × height` when all three are known, else the stored volume.
    pub fn calculate_volume(&self) -> Option<f64> {
        match (self.state.length, self.state.width, self.state.height) {
            (Some(l), Some(w), Some(h)) => Some(l * w * h),
            _ => self.state.volume,
        }
    }

    pub fn name(&self) -> &str {
        &self.state.name
    }

    pub fn description(&self) -> Option<&str> {
        self.state.description.as_deref()
    }

    pub fn sku(&self) -> Option<&str> {
        self.state.sku.as_deref()
    }

    pub fn barcode(&self) -> Option<&str> {
        self.state.barcode.as_deref()
    }

    pub fn length(&self) -> Option<f64> {
        self.state.length
    }

    pub fn width(&self) -> Option<f64> {
        self.state.width
    }

    pub fn height(&self) -> Option<f64> {
        self.state.height
    }

    pub fn dimension_unit(&self) -> Option<&str> {
        self.state.dimension_unit.as_deref()
    }

    pub fn weight(&self) -> Option<f64> {
        self.state.weight
    }

    pub fn weight_unit(&self) -> Option<&str> {
        self.state.weight_unit.as_deref()
    }

    pub fn volume(&self) -> Option<f64> {
        self.state.volume
    }

    pub fn volume_unit(&self) -> Option<&str> {
        self.state.volume_unit.as_deref()
    }

    pub fn is_fragile(&self) -> bool {
        self.state.is_fragile
    }

    pub fn is_perishable(&self) -> bool {
        self.state.is_perishable
    }

    pub fn shelf_life(&self) -> Option<i32> {
        self.state.shelf_life
    }

    pub fn value(&self) -> Option<f64> {
        self.state.value
    }

    pub fn currency(&self) -> Option<&str> {
        self.state.currency.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.state.category.as_deref()
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

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.state.id
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    require_non_blank("name", name)?;
    ensure_max_chars(name, MAX_NAME_CHARS, "Item name cannot exceed 200 characters")
}

fn ensure_positive_if_set(value: Option<f64>, message: &str) -> DomainResult<()> {
    match value {
        Some(v) if !(v > 0.0) => Err(DomainError::validation(message)),
        _ => Ok(()),
    }
}

/// Unit of a volume measured in `unit`. Unknown units pass through unchanged.
pub fn cubic_unit(unit: &str) -> String {
    match unit {
        "cm" => "cm³".to_string(),
        "m" => "m³".to_string(),
        "inch" => "in³".to_string(),
        other => other.to_string(),
    }
}
