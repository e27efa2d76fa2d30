//! modpanel-app - Page builders, navigation and command routing for the moderation panel
//!
//! Turns host state into surfaces: configuration and feature flags, the
//! collaborator traits the host implements, pagination and grid layout, the
//! page builders, and the [`Router`] that handles every panel command.

pub mod action;
pub mod config;
pub mod grid;
pub mod handler;
pub mod lang;
pub mod message;
pub mod navigation;
pub mod pages;
pub mod pagination;
pub mod router;
pub mod services;
pub mod session;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Re-export primary types
pub use action::{Capability, ModerationAction};
pub use config::{FeatureFlags, Settings, UiSettings};
pub use handler::Outcome;
pub use lang::CatalogTranslator;
pub use message::Message;
pub use navigation::{NavigationState, Page};
pub use pagination::{page, Pagination};
pub use router::Router;
pub use services::{
    ActionDispatcher, PermissionService, Services, SurfaceSink, Translator, UserRegistry,
    ViewerMessenger,
};
pub use session::{SessionStore, ViewerSession};
