pub mod application;
pub mod auth;
pub mod case;
pub mod client;
pub mod comment;
pub mod dispatch;
pub mod document;
pub mod feed;
pub mod invitation;
pub mod lawyer;
pub mod message;
pub mod schema;
pub mod shared;
pub mod specialty;
