// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across screens.

pub mod media_tile;
