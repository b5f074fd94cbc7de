//! # mkash Backend
//!
//! Account-management backend for the mkash mobile-cash service: user
//! registration, PIN-based login, account listing/search, and account-status
//! transitions (activate/block), backed by a document store. The backend
//! exposes a REST API via Axum for the React frontend.
//!
//! ## Architecture
//!
//! The crate is organized into a few logical modules:
//!
//! - [`db`]: Repository pattern over the user collection, service layer, and
//!   the concrete storage backends (MongoDB and in-memory)
//! - [`validation`]: Input shape checks run before any persistence call
//! - [`http`]: Axum-based HTTP server, handlers, and error mapping
//!
//! Storage backends are selected via cargo features (`mongo-repo`,
//! `local-repo`); handlers only ever see the [`db::UserRepository`] trait, so
//! they are testable without a live store.

pub mod db;
pub mod validation;

#[cfg(feature = "http-server")]
pub mod http;
