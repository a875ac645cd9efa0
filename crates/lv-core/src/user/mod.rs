//! User records.
//!
//! The sign-up wizard accumulates a [`UserDraft`]; a complete draft converts
//! into a [`NewUser`] for the create-user call. [`UserProfile`] is the record
//! the session holds for an authenticated user.

mod draft;
mod profile;

pub use draft::{DraftError, NewUser, UserDraft};
pub use profile::{AccessToken, CreatedUser, UserProfile};

/// Canonical form field names, shared by step screens, schemas and the
/// draft merge. These match the remote operation's input field names.
pub mod field {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const CONTACT_LINK: &str = "contactLink";
    pub const COMPANY: &str = "company";
    pub const PHONE: &str = "phone";
    pub const IS_CERTIFIED: &str = "isCertified";
    pub const AVATAR: &str = "avatar";
}
