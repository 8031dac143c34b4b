//! Domain value objects and types.
//!
//! This module contains the validated fields a contact record is built from.
//! Every field goes through [`Field`], which validates on construction and on
//! every later write, so an invalid value can never be represented.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BirthdayKind, BIRTHDAY_FORMAT};
pub use errors::ValidationError;
pub use field::{Field, FieldKind};
pub use name::{Name, NameKind};
pub use phone::{Phone, PhoneKind, PHONE_LENGTH};
