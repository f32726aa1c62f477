// SPDX-License-Identifier: MPL-2.0
//! `chatore` is a desktop showcase application for the Baba Chatore
//! restaurant, built with the Iced GUI framework.
//!
//! It presents the restaurant across five screens (home, about, gallery,
//! menu, locate) and demonstrates component-based UI design with a pure,
//! testable state machine driving the gallery lightbox.

pub mod app;
pub mod assets;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gallery_navigation;
pub mod ui;
