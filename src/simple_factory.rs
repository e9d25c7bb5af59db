//! Simple Factory pattern: one function mapping a string key to a freshly
//! constructed user variant, with a typed error for unrecognized keys.

use thiserror::Error;

/// Base account holder. The factory leaves `name` unset; callers fill it in
/// afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct User {
    pub name: Option<String>,
}

/// An account tied to a company.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Customer {
    pub name: Option<String>,
    pub company: Option<String>,
}

/// An operator account; `is_root` starts out `false`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Admin {
    pub name: Option<String>,
    pub is_root: bool,
}

/// The factory's return payload: exactly one of the user variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyUser {
    User(User),
    Customer(Customer),
    Admin(Admin),
}

impl AnyUser {
    pub fn kind_name(&self) -> &'static str {
        match self {
            AnyUser::User(_) => "user",
            AnyUser::Customer(_) => "customer",
            AnyUser::Admin(_) => "admin",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("Wrong user type passed.")]
    InvalidArgument,
}

/// Maps a key to a user variant.
pub struct UserSimpleFactory;

impl UserSimpleFactory {
    /// Recognized keys are `"user"`, `"customer"` and `"admin"`, matched
    /// exactly. Anything else is rejected without constructing an instance.
    pub fn create(kind: &str) -> Result<AnyUser, FactoryError> {
        match kind {
            "user" => Ok(AnyUser::User(User::default())),
            "customer" => Ok(AnyUser::Customer(Customer::default())),
            "admin" => Ok(AnyUser::Admin(Admin::default())),
            _ => Err(FactoryError::InvalidArgument),
        }
    }
}
