//! # lexa-core
//!
//! Core types and client-side rules for the Lexa legal marketplace client.
//!
//! This crate provides the foundational types shared across all Lexa crates:
//! - Wire entities as served by the marketplace API (cases, applications,
//!   invitations, documents, comments, messages, profiles)
//! - Status enums with the case / application / invitation state machines
//! - Request payloads for every write endpoint
//! - Advisory permission guards (the server re-checks everything)
//! - Pre-network validation for uploads and forms
//! - Derived views: the case timeline, the recommendation feed, the case board
//!
//! Nothing in here performs I/O.

pub mod board;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod feed;
pub mod permissions;
pub mod requests;
pub mod timeline;
pub mod validation;
pub mod wire;
