//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Pagination
// =============================================================================

/// Number of users shown on one page of the user list
pub const ROWS_PER_PAGE: u64 = 5;

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

// =============================================================================
// Validation
// =============================================================================

/// Minimum length of the name accepted by the name form
pub const NAME_MIN_LENGTH: u64 = 5;

/// Maximum length of the name accepted by the name form
pub const NAME_MAX_LENGTH: u64 = 20;

/// Message reported for a missing or blank field
pub const MSG_FIELD_REQUIRED: &str = "This field is required.";

/// Message reported for a name outside the allowed length range
pub const MSG_NAME_LENGTH: &str = "Field must be between 5 and 20 characters long.";

/// Message reported for a malformed email address
pub const MSG_INVALID_EMAIL: &str = "Please enter valid email address!";

/// Message reported for an unparseable page number
pub const MSG_INVALID_PAGE: &str = "Page must be a positive integer";

// =============================================================================
// Notices
// =============================================================================

/// Shown after a valid name form submission
pub const NOTICE_FORM_SUBMITTED: &str = "Form successfully submitted!";

/// Shown on the user list after a user was created
pub const NOTICE_USER_ADDED: &str = "User successfully added!";
