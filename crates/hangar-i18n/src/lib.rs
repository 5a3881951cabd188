// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localization engine for Hangar.
//!
//! Resolves hierarchical dot-notation keys to display strings for the
//! active locale, falling back per key to the reference locale and finally
//! to the key path itself. Lookups never fail and never block behind a
//! locale switch: readers resolve against an immutable snapshot that
//! switches and dictionary loads replace wholesale.
//!
//! # Key Naming Convention
//!
//! Translatable strings use dot-notation key paths grouped by surface:
//!
//! - `menu.*` - Main menu entries (`menu.play`, `menu.mods`)
//! - `mods.*` - Mod management (`mods.card.remove_success`)
//! - `settings.*` - Settings panes (`settings.language`)
//!
//! Messages embed runtime values as `{name}` placeholders, substituted by
//! [`Translator::translate_fmt`].
//!
//! # Example
//!
//! ```
//! use hangar_i18n::{resolve_locale, Translator};
//!
//! let translator = Translator::new("en");
//! translator
//!     .load_json("en", serde_json::json!({ "menu": { "play": "Play" } }))
//!     .unwrap();
//! translator
//!     .load_json("fr", serde_json::json!({ "menu": { "play": "Jouer" } }))
//!     .unwrap();
//!
//! // Pick the startup locale from the saved preference and the host
//! // system locale, then switch to it.
//! let locale = resolve_locale(Some("fr"), None, &translator.locales(), "en");
//! translator.set_locale(&locale).unwrap();
//!
//! assert_eq!(translator.translate("menu.play"), "Jouer");
//! ```

pub mod coverage;
pub mod error;
pub mod resolve;
pub mod translator;

pub use coverage::{CoverageReport, LocaleCoverage, PlaceholderMismatch};
pub use error::TranslatorError;
pub use resolve::{resolve_locale, system_locale, DEFAULT_LOCALE};
pub use translator::Translator;

// Re-export the core model so engine users need a single dependency.
pub use hangar_i18n_core::{Dictionary, DictionaryError, Node};
