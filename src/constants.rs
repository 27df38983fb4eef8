/// Role granting day-to-day access to a shop
pub const ROLE_STAFF: &str = "staff";

/// Role granting administrative access to a shop
pub const ROLE_ADMIN: &str = "admin";

/// The full set of roles assignable to a user within a shop
pub const ALLOWED_ROLES: [&str; 2] = [ROLE_STAFF, ROLE_ADMIN];

// =============================================================================
// Error Messages
// =============================================================================

/// Error message when a mutation arrives without a JSON object body
pub const ERR_NO_DATA: &str = "No data provided";

/// Error message for a role outside the allowed set
pub const ERR_INVALID_ROLE: &str = "Invalid role value";
