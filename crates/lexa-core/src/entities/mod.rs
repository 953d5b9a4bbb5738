//! Wire entities for the marketplace API.
//!
//! Field names follow the API's camelCase JSON. The client never holds an
//! authoritative copy of any of these: every view re-fetches after a write.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`.

mod application;
mod case;
mod comment;
mod document;
mod invitation;
mod message;
mod profile;
mod user;

pub use application::Application;
pub use case::Case;
pub use comment::Comment;
pub use document::Document;
pub use invitation::Invitation;
pub use message::Message;
pub use profile::{ClientProfile, ContactInfo, FullName, LawyerProfile, Profile, Specialty};
pub use user::{AuthenticatedUser, UserAccount};
