// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for dictionary construction.

use thiserror::Error;

/// Errors raised while building a [`Dictionary`](crate::Dictionary) from
/// untrusted input. Only ingestion can fail; lookups and rendering never do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
	/// The root of the supplied data was not a mapping.
	#[error("dictionary root must be an object, found {found}")]
	InvalidRoot {
		/// JSON type name of the rejected root value.
		found: &'static str,
	},

	/// A value in the tree was neither a string nor a nested mapping.
	#[error("dictionary entry at '{path}' must be a string or an object, found {found}")]
	InvalidValue {
		/// Dotted key path of the rejected value.
		path: String,
		/// JSON type name of the rejected value.
		found: &'static str,
	},
}
