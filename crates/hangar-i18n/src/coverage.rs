// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation coverage audit across loaded dictionaries.
//!
//! The audit answers the translator-facing question "which keys still need
//! work where". Per-locale gaps are therefore computed against each
//! locale's own tree, without fallback resolution: falling back would hide
//! exactly the gaps the audit exists to surface.

use std::sync::Arc;

use hangar_i18n_core::{template, Dictionary};
use serde::Serialize;

use crate::translator::Translator;

/// Coverage of every loaded locale against the union of all known keys.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
	/// Number of distinct key paths across all loaded dictionaries.
	pub total_keys: usize,
	/// Per-locale coverage, sorted by locale identifier.
	pub locales: Vec<LocaleCoverage>,
}

/// Coverage numbers for one loaded locale.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleCoverage {
	/// Locale identifier.
	pub locale: String,
	/// Reference keys this locale's own tree provides.
	pub present: usize,
	/// Reference keys this locale's own tree lacks, sorted.
	pub missing: Vec<String>,
	/// Keys whose placeholders differ from the fallback locale's.
	pub placeholder_mismatches: Vec<PlaceholderMismatch>,
	/// `present` as a share of the reference set, 100.0 when empty.
	pub coverage_percent: f32,
}

/// A key translated with different placeholder names than the fallback
/// locale uses, so interpolation params will not line up at runtime.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceholderMismatch {
	/// Dotted key path.
	pub key: String,
	/// Placeholder names in the fallback locale's message, sorted.
	pub expected: Vec<String>,
	/// Placeholder names in this locale's message, sorted.
	pub found: Vec<String>,
}

impl Translator {
	/// Audit every loaded dictionary for missing keys and placeholder
	/// drift.
	///
	/// The reference set is the union of key paths across all loaded
	/// dictionaries, so a key translated only in one locale shows up as
	/// missing everywhere else, the fallback locale included. Placeholder
	/// drift is reported for keys present in both a locale and the
	/// fallback locale, comparing name sets without regard to order.
	pub fn coverage_report(&self) -> CoverageReport {
		let state = self.snapshot();

		let mut reference: Vec<String> = state
			.dictionaries
			.values()
			.flat_map(|dictionary| dictionary.keys())
			.collect();
		reference.sort_unstable();
		reference.dedup();

		let fallback = state.dictionaries.get(&state.fallback);

		let mut entries: Vec<(&String, &Arc<Dictionary>)> = state.dictionaries.iter().collect();
		entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

		let locales = entries
			.into_iter()
			.map(|(locale, dictionary)| {
				let mut present = 0usize;
				let mut missing = Vec::new();
				for key in &reference {
					if dictionary.contains(key) {
						present += 1;
					} else {
						missing.push(key.clone());
					}
				}
				let placeholder_mismatches = if locale == &state.fallback {
					Vec::new()
				} else {
					placeholder_drift(dictionary, fallback)
				};
				let coverage_percent = if reference.is_empty() {
					100.0
				} else {
					(present as f32 / reference.len() as f32) * 100.0
				};
				LocaleCoverage {
					locale: locale.clone(),
					present,
					missing,
					placeholder_mismatches,
					coverage_percent,
				}
			})
			.collect();

		CoverageReport {
			total_keys: reference.len(),
			locales,
		}
	}
}

fn placeholder_drift(
	dictionary: &Dictionary,
	fallback: Option<&Arc<Dictionary>>,
) -> Vec<PlaceholderMismatch> {
	let fallback = match fallback {
		Some(fallback) => fallback,
		None => return Vec::new(),
	};
	let mut mismatches = Vec::new();
	for key in dictionary.keys() {
		let reference = match fallback.message(&key) {
			Some(message) => message,
			None => continue,
		};
		let message = match dictionary.message(&key) {
			Some(message) => message,
			None => continue,
		};
		let mut expected = template::placeholders(reference);
		let mut found = template::placeholders(message);
		expected.sort_unstable();
		found.sort_unstable();
		if expected != found {
			mismatches.push(PlaceholderMismatch { key, expected, found });
		}
	}
	mismatches
}
