// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localization core types for Hangar.
//!
//! This crate holds the pure data model for localization: dictionary trees
//! addressed by dotted key paths, and `{name}` placeholder templating. It
//! has no locale policy and no shared state; the runtime engine that layers
//! active/fallback resolution on top lives in `hangar-i18n`.
//!
//! # Example
//!
//! ```
//! use hangar_i18n_core::{template, Dictionary};
//!
//! let dict = Dictionary::from_json(serde_json::json!({
//!     "mods": { "card": { "remove_success": "{modName} supprimé" } },
//! }))
//! .unwrap();
//!
//! let message = dict.message("mods.card.remove_success").unwrap();
//! let out = template::render(message, &[("modName", "SuperMod")]);
//! assert_eq!(out, "SuperMod supprimé");
//! ```

pub mod dictionary;
pub mod error;
pub mod template;

pub use dictionary::{Dictionary, Node};
pub use error::DictionaryError;
