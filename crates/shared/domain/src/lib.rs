//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the user entity, the form shapes accepted by the web layer and the
//! pagination rules shared by the store and the views.

pub mod constants;
pub mod error;
pub mod forms;
pub mod pagination;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use forms::{FormErrors, NameForm, UserForm};
pub use pagination::{parse_page, PageRequest, Paginated, PaginationMeta};
pub use user::{NewUser, User};
