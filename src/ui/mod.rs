// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`home`] - Hero banner, about blurb, and today's specials
//! - [`about`] - Story, timeline, specialties, and restaurant spaces
//! - [`gallery`] - Category-filtered gallery with a full-screen lightbox
//! - [`menu`] - Hand-off to the external flipbook menu
//! - [`locate`] - Address, highlights, and map links
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (media tiles)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Top navigation bar with hamburger menu
//! - [`welcome`] - Startup welcome modal

pub mod about;
pub mod components;
pub mod design_tokens;
pub mod gallery;
pub mod home;
pub mod locate;
pub mod menu;
pub mod navbar;
pub mod styles;
pub mod theming;
pub mod welcome;
