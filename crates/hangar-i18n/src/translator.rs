// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The translation resolver: shared locale state plus key lookups.

use std::collections::HashMap;
use std::sync::Arc;

use hangar_i18n_core::{template, Dictionary};
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::error::TranslatorError;
use crate::resolve::DEFAULT_LOCALE;

/// One consistent view of the translator: the active locale, the fallback
/// locale, and every loaded dictionary.
///
/// Swapped wholesale behind the lock and never mutated in place, so a
/// reader holding an `Arc<LocaleState>` keeps a coherent snapshot.
pub(crate) struct LocaleState {
	pub(crate) active: String,
	pub(crate) fallback: String,
	pub(crate) dictionaries: HashMap<String, Arc<Dictionary>>,
}

impl LocaleState {
	fn message_in(&self, locale: &str, key: &str) -> Option<&str> {
		self.dictionaries.get(locale)?.message(key)
	}
}

struct TranslatorInner {
	state: RwLock<Arc<LocaleState>>,
}

/// Resolves dotted translation keys to display strings for the active
/// locale, with per-key fallback and `{name}` interpolation.
///
/// Cloning is cheap and clones share state, so a single translator can
/// serve every thread in the application. Lookups never block loads for
/// longer than an `Arc` clone: each lookup grabs a snapshot and resolves
/// against it, so a concurrent locale switch or dictionary load is either
/// fully visible or not visible at all.
///
/// # Example
///
/// ```
/// use hangar_i18n::{Dictionary, Translator};
///
/// let translator = Translator::new("en");
///
/// let mut en = Dictionary::new();
/// en.insert("mods.card.remove_success", "{modName} removed");
/// translator.load_dictionary("en", en);
///
/// let mut fr = Dictionary::new();
/// fr.insert("mods.card.remove_success", "{modName} supprimé");
/// translator.load_dictionary("fr", fr);
///
/// translator.set_locale("fr").unwrap();
/// let out = translator.translate_fmt("mods.card.remove_success", &[("modName", "SuperMod")]);
/// assert_eq!(out, "SuperMod supprimé");
/// ```
#[derive(Clone)]
pub struct Translator {
	inner: Arc<TranslatorInner>,
}

impl Translator {
	/// Create a translator with `fallback` as both the fallback and the
	/// initial active locale.
	///
	/// The fallback locale is fixed for the translator's lifetime; only the
	/// active locale moves. A translator starts with no dictionaries, so
	/// every lookup degrades to the key until one is loaded.
	pub fn new(fallback: impl Into<String>) -> Self {
		let fallback = fallback.into();
		Self {
			inner: Arc::new(TranslatorInner {
				state: RwLock::new(Arc::new(LocaleState {
					active: fallback.clone(),
					fallback,
					dictionaries: HashMap::new(),
				})),
			}),
		}
	}

	/// Register or replace the dictionary for `locale`.
	///
	/// Replacement is wholesale: a lookup running concurrently resolves
	/// against the previous tree or the new one, never a mixture.
	pub fn load_dictionary(&self, locale: impl Into<String>, dictionary: Dictionary) {
		let locale = locale.into();
		let messages = dictionary.len();
		let mut guard = self.inner.state.write();
		let mut dictionaries = guard.dictionaries.clone();
		let replaced = dictionaries
			.insert(locale.clone(), Arc::new(dictionary))
			.is_some();
		*guard = Arc::new(LocaleState {
			active: guard.active.clone(),
			fallback: guard.fallback.clone(),
			dictionaries,
		});
		drop(guard);
		info!(
			locale = %locale,
			messages = messages,
			replaced = replaced,
			"loaded locale dictionary"
		);
	}

	/// Validate a parsed JSON value and load it as `locale`'s dictionary.
	///
	/// Rejected data registers nothing: a dictionary already loaded for
	/// `locale` stays in effect.
	pub fn load_json(
		&self,
		locale: impl Into<String>,
		value: serde_json::Value,
	) -> Result<(), TranslatorError> {
		let locale = locale.into();
		let dictionary = match Dictionary::from_json(value) {
			Ok(dictionary) => dictionary,
			Err(e) => {
				warn!(locale = %locale, error = %e, "rejected locale dictionary");
				return Err(e.into());
			}
		};
		self.load_dictionary(locale, dictionary);
		Ok(())
	}

	/// Switch the active locale.
	///
	/// Fails with [`TranslatorError::UnknownLocale`] when no dictionary is
	/// loaded for `locale`, leaving the active locale unchanged. Strings
	/// already resolved by callers are unaffected either way; only lookups
	/// made after the switch see the new locale.
	pub fn set_locale(&self, locale: &str) -> Result<(), TranslatorError> {
		let mut guard = self.inner.state.write();
		if !guard.dictionaries.contains_key(locale) {
			drop(guard);
			warn!(locale = %locale, "locale switch rejected, no dictionary loaded");
			return Err(TranslatorError::UnknownLocale(locale.to_string()));
		}
		let previous = guard.active.clone();
		*guard = Arc::new(LocaleState {
			active: locale.to_string(),
			fallback: guard.fallback.clone(),
			dictionaries: guard.dictionaries.clone(),
		});
		drop(guard);
		info!(from = %previous, to = %locale, "switched active locale");
		Ok(())
	}

	/// Resolve `key` with no interpolation params.
	pub fn translate(&self, key: &str) -> String {
		self.translate_fmt(key, &[])
	}

	/// Resolve `key` and substitute `{name}` placeholders from `params`.
	///
	/// Resolution tries the active locale's dictionary, then the fallback
	/// locale's, and finally returns the key path itself as a conspicuous
	/// stand-in. Params with no matching placeholder are ignored, and
	/// placeholders with no matching param stay verbatim. Never fails.
	pub fn translate_fmt(&self, key: &str, params: &[(&str, &str)]) -> String {
		let state = self.snapshot();
		if let Some(message) = state.message_in(&state.active, key) {
			return template::render(message, params);
		}
		if state.fallback != state.active {
			if let Some(message) = state.message_in(&state.fallback, key) {
				debug!(key = %key, locale = %state.active, "resolved from fallback locale");
				return template::render(message, params);
			}
		}
		warn!(
			key = %key,
			locale = %state.active,
			fallback = %state.fallback,
			"translation missing, returning key"
		);
		key.to_string()
	}

	/// Identifier of the locale lookups currently resolve against.
	pub fn active_locale(&self) -> String {
		self.snapshot().active.clone()
	}

	/// Identifier of the fixed fallback locale.
	pub fn fallback_locale(&self) -> String {
		self.snapshot().fallback.clone()
	}

	/// Identifiers of every locale with a loaded dictionary, sorted.
	pub fn locales(&self) -> Vec<String> {
		let state = self.snapshot();
		let mut locales: Vec<String> = state.dictionaries.keys().cloned().collect();
		locales.sort_unstable();
		locales
	}

	/// Snapshot handle to the dictionary loaded for `locale`, if any.
	pub fn dictionary(&self, locale: &str) -> Option<Arc<Dictionary>> {
		self.snapshot().dictionaries.get(locale).cloned()
	}

	pub(crate) fn snapshot(&self) -> Arc<LocaleState> {
		self.inner.state.read().clone()
	}
}

impl Default for Translator {
	fn default() -> Self {
		Self::new(DEFAULT_LOCALE)
	}
}
