// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Startup locale resolution.

/// The fixed reference locale, used as the final fallback everywhere.
pub const DEFAULT_LOCALE: &str = "en";

/// Resolve the locale the application should start in.
///
/// Resolution order (highest to lowest priority):
/// 1. User's saved locale preference (if it matches an available locale)
/// 2. Host system locale (if it matches an available locale)
/// 3. `fallback`
///
/// Matching is case-insensitive and tolerant of region tags: a candidate
/// matches on its exact identifier, or on its language prefix before the
/// first `-` after normalizing `_` separators. A system locale of `fr-FR`
/// therefore selects a loaded `fr` dictionary.
///
/// # Arguments
///
/// * `preference` - User's saved locale preference (if any)
/// * `system` - Host system locale, e.g. from [`system_locale`]
/// * `available` - Locales with loaded dictionaries, e.g. from
///   `Translator::locales`
/// * `fallback` - Returned when neither candidate matches
///
/// # Example
///
/// ```
/// use hangar_i18n::resolve_locale;
///
/// let available = vec!["en".to_string(), "fr".to_string()];
///
/// // Saved preference takes priority
/// assert_eq!(resolve_locale(Some("fr"), Some("en-US"), &available, "en"), "fr");
///
/// // Region-tagged system locales match language-only dictionaries
/// assert_eq!(resolve_locale(None, Some("fr-FR"), &available, "en"), "fr");
///
/// // Unknown candidates fall through
/// assert_eq!(resolve_locale(Some("de"), None, &available, "en"), "en");
/// ```
pub fn resolve_locale(
	preference: Option<&str>,
	system: Option<&str>,
	available: &[String],
	fallback: &str,
) -> String {
	if let Some(locale) = preference.and_then(|candidate| match_available(candidate, available)) {
		return locale;
	}
	if let Some(locale) = system.and_then(|candidate| match_available(candidate, available)) {
		return locale;
	}
	fallback.to_string()
}

/// The host system locale, if the platform reports one.
pub fn system_locale() -> Option<String> {
	sys_locale::get_locale()
}

/// Match a candidate tag against the available locales, exact identifier
/// first and language prefix second. Returns the available identifier that
/// matched, not the candidate.
fn match_available(candidate: &str, available: &[String]) -> Option<String> {
	let tag = candidate.trim().replace('_', "-");
	if tag.is_empty() {
		return None;
	}
	if let Some(locale) = available.iter().find(|id| id.eq_ignore_ascii_case(&tag)) {
		return Some(locale.clone());
	}
	let language = tag.split('-').next()?;
	available
		.iter()
		.find(|id| id.eq_ignore_ascii_case(language))
		.cloned()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn available() -> Vec<String> {
		vec!["en".to_string(), "fr".to_string()]
	}

	#[test]
	fn test_preference_takes_priority() {
		let locale = resolve_locale(Some("fr"), Some("en"), &available(), "en");
		assert_eq!(locale, "fr");
	}

	#[test]
	fn test_system_locale_used_without_preference() {
		let locale = resolve_locale(None, Some("fr"), &available(), "en");
		assert_eq!(locale, "fr");
	}

	#[test]
	fn test_unknown_preference_falls_through_to_system() {
		let locale = resolve_locale(Some("de"), Some("fr"), &available(), "en");
		assert_eq!(locale, "fr");
	}

	#[test]
	fn test_fallback_when_nothing_matches() {
		let locale = resolve_locale(Some("de"), Some("ja-JP"), &available(), "en");
		assert_eq!(locale, "en");
	}

	#[test]
	fn test_fallback_when_no_candidates() {
		let locale = resolve_locale(None, None, &available(), "en");
		assert_eq!(locale, "en");
	}

	#[test]
	fn test_region_tag_matches_language() {
		let locale = resolve_locale(None, Some("fr-FR"), &available(), "en");
		assert_eq!(locale, "fr");
	}

	#[test]
	fn test_underscore_separator_is_normalized() {
		let locale = resolve_locale(None, Some("fr_FR"), &available(), "en");
		assert_eq!(locale, "fr");
	}

	#[test]
	fn test_matching_is_case_insensitive() {
		let locale = resolve_locale(Some("FR"), None, &available(), "en");
		assert_eq!(locale, "fr");
	}

	#[test]
	fn test_exact_match_beats_language_prefix() {
		let available = vec!["fr".to_string(), "fr-CA".to_string()];
		let locale = resolve_locale(None, Some("fr-CA"), &available, "en");
		assert_eq!(locale, "fr-CA");
	}

	#[test]
	fn test_blank_candidates_are_skipped() {
		let locale = resolve_locale(Some(""), Some("   "), &available(), "en");
		assert_eq!(locale, "en");
	}

	#[test]
	fn test_result_uses_available_identifier_casing() {
		let locale = resolve_locale(Some("EN-us"), None, &available(), "fr");
		assert_eq!(locale, "en");
	}
}
