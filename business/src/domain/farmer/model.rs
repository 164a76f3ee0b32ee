use super::errors::FarmerError;
use crate::domain::shared::value_objects::Email;

const MAX_NAME_LENGTH: usize = 255;
const MAX_LOCATION_LENGTH: usize = 500;

/// An agricultural producer profile, owned by exactly one user account.
#[derive(Debug, Clone, PartialEq)]
pub struct Farmer {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub verified: bool,
}

/// A validated profile that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFarmer {
    pub user_id: i64,
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub location: Option<String>,
}

pub struct NewFarmerProps {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// Partial update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct FarmerChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

fn validate_name(name: &str) -> Result<String, FarmerError> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(FarmerError::NameEmpty);
    }
    Ok(trimmed.to_string())
}

fn validate_location(location: Option<String>) -> Result<Option<String>, FarmerError> {
    match location {
        Some(l) if l.chars().count() > MAX_LOCATION_LENGTH => Err(FarmerError::LocationTooLong),
        other => Ok(normalize_optional(other)),
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl NewFarmer {
    pub fn new(props: NewFarmerProps) -> Result<Self, FarmerError> {
        Ok(Self {
            user_id: props.user_id,
            name: validate_name(&props.name)?,
            email: Email::parse(&props.email).map_err(|_| FarmerError::InvalidEmail)?,
            phone: normalize_optional(props.phone),
            location: validate_location(props.location)?,
        })
    }
}

impl Farmer {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        user_id: i64,
        name: String,
        email: String,
        phone: Option<String>,
        location: Option<String>,
        verified: bool,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            email: Email::from_repository(email),
            phone,
            location,
            verified,
        }
    }

    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }

    /// Applies the provided fields after validating them. Nothing is changed
    /// when any field is invalid.
    pub fn apply(&mut self, changes: FarmerChanges) -> Result<(), FarmerError> {
        let name = changes.name.as_deref().map(validate_name).transpose()?;
        let email = changes
            .email
            .as_deref()
            .map(Email::parse)
            .transpose()
            .map_err(|_| FarmerError::InvalidEmail)?;
        let location = match changes.location {
            Some(location) => Some(validate_location(Some(location))?),
            None => None,
        };

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(phone) = changes.phone {
            self.phone = normalize_optional(Some(phone));
        }
        if let Some(location) = location {
            self.location = location;
        }
        Ok(())
    }
}
