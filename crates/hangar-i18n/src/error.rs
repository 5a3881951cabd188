// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the translation engine.

use hangar_i18n_core::DictionaryError;
use thiserror::Error;

/// Errors from the translator operations that can actually fail.
///
/// Resolution itself never errors: [`Translator::translate`] degrades to
/// the fallback locale or the key path instead of failing.
///
/// [`Translator::translate`]: crate::Translator::translate
#[derive(Debug, Error)]
pub enum TranslatorError {
	/// A locale switch named a locale with no loaded dictionary.
	#[error("no dictionary loaded for locale '{0}'")]
	UnknownLocale(String),

	/// Dictionary data handed to the translator was rejected.
	#[error(transparent)]
	Dictionary(#[from] DictionaryError),
}
