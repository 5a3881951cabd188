// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Placeholder substitution for translated messages.
//!
//! Messages embed parameters as `{name}` tokens, where `name` is an
//! identifier (`[A-Za-z_][A-Za-z0-9_]*`). Rendering is a single
//! left-to-right pass: substituted values are never rescanned, and anything
//! that is not a well-formed token passes through verbatim.

/// Substitute `{name}` placeholders in `template` with values from `params`.
///
/// A token with no matching param is left verbatim so the gap stays visible
/// in rendered output, and the first matching param wins when names repeat.
/// Unclosed braces, empty names, and names with characters outside the
/// identifier set are not tokens at all; they render unchanged. Never
/// fails.
///
/// # Example
///
/// ```
/// use hangar_i18n_core::template::render;
///
/// let out = render("{modName} supprimé", &[("modName", "SuperMod")]);
/// assert_eq!(out, "SuperMod supprimé");
///
/// let out = render("{modName} supprimé", &[]);
/// assert_eq!(out, "{modName} supprimé");
/// ```
pub fn render(template: &str, params: &[(&str, &str)]) -> String {
	let mut out = String::with_capacity(template.len());
	let mut rest = template;
	while let Some(open) = rest.find('{') {
		out.push_str(&rest[..open]);
		let after = &rest[open + 1..];
		match token_len(after) {
			Some(len) => {
				let name = &after[..len];
				match lookup(params, name) {
					Some(value) => out.push_str(value),
					None => {
						out.push('{');
						out.push_str(name);
						out.push('}');
					}
				}
				rest = &after[len + 1..];
			}
			// Not a token. Emit the brace and rescan from the next
			// character, so `{a{b}` still substitutes `{b}`.
			None => {
				out.push('{');
				rest = after;
			}
		}
	}
	out.push_str(rest);
	out
}

/// Collect the placeholder names `template` references, in order of first
/// appearance, without duplicates. Malformed tokens are skipped, matching
/// what [`render`] would substitute.
pub fn placeholders(template: &str) -> Vec<String> {
	let mut names: Vec<String> = Vec::new();
	let mut rest = template;
	while let Some(open) = rest.find('{') {
		let after = &rest[open + 1..];
		match token_len(after) {
			Some(len) => {
				let name = &after[..len];
				if !names.iter().any(|seen| seen == name) {
					names.push(name.to_string());
				}
				rest = &after[len + 1..];
			}
			None => rest = after,
		}
	}
	names
}

/// Length of the identifier at the start of `s` when it is immediately
/// terminated by `}`. `None` means no well-formed token starts here.
fn token_len(s: &str) -> Option<usize> {
	let bytes = s.as_bytes();
	let first = *bytes.first()?;
	if !first.is_ascii_alphabetic() && first != b'_' {
		return None;
	}
	let mut len = 1;
	while len < bytes.len() {
		let byte = bytes[len];
		if byte == b'}' {
			return Some(len);
		}
		if !byte.is_ascii_alphanumeric() && byte != b'_' {
			return None;
		}
		len += 1;
	}
	None
}

fn lookup<'a>(params: &[(&str, &'a str)], name: &str) -> Option<&'a str> {
	params
		.iter()
		.find(|(param, _)| *param == name)
		.map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn substitutes_named_params() {
		let out = render(
			"Installing {modName} v{version}",
			&[("modName", "SuperMod"), ("version", "1.2")],
		);
		assert_eq!(out, "Installing SuperMod v1.2");
	}

	#[test]
	fn substitutes_repeated_tokens() {
		let out = render("{name} and {name} again", &[("name", "Viper")]);
		assert_eq!(out, "Viper and Viper again");
	}

	#[test]
	fn unmatched_token_stays_verbatim() {
		let out = render("{modName} supprimé", &[("other", "x")]);
		assert_eq!(out, "{modName} supprimé");
	}

	#[test]
	fn first_matching_param_wins() {
		let out = render("{name}", &[("name", "first"), ("name", "second")]);
		assert_eq!(out, "first");
	}

	#[test]
	fn extra_params_are_ignored() {
		let out = render("plain text", &[("unused", "x")]);
		assert_eq!(out, "plain text");
	}

	#[test]
	fn malformed_tokens_pass_through() {
		let params = &[("a", "A"), ("x", "X")];
		assert_eq!(render("{", params), "{");
		assert_eq!(render("a{", params), "a{");
		assert_eq!(render("{}", params), "{}");
		assert_eq!(render("{1x}", params), "{1x}");
		assert_eq!(render("{na me}", params), "{na me}");
		assert_eq!(render("{x", params), "{x");
	}

	#[test]
	fn rescans_after_breaking_character() {
		// The outer brace never closes; the inner token still substitutes.
		let out = render("{a{b}", &[("b", "B")]);
		assert_eq!(out, "{aB");
	}

	#[test]
	fn values_are_not_rescanned() {
		let out = render("{x}", &[("x", "{y}"), ("y", "nope")]);
		assert_eq!(out, "{y}");
	}

	#[test]
	fn handles_multibyte_text_around_tokens() {
		let out = render("névé {who} été", &[("who", "ici")]);
		assert_eq!(out, "névé ici été");
	}

	#[test]
	fn multibyte_names_are_not_tokens() {
		assert_eq!(render("{nöm}", &[("nöm", "x")]), "{nöm}");
	}

	#[test]
	fn empty_template_renders_empty() {
		assert_eq!(render("", &[("a", "b")]), "");
	}

	#[test]
	fn placeholders_lists_names_in_order() {
		let names = placeholders("{b} then {a} then {b}");
		assert_eq!(names, vec!["b", "a"]);
	}

	#[test]
	fn placeholders_skips_malformed_tokens() {
		let names = placeholders("{} {1x} {ok} {trailing");
		assert_eq!(names, vec!["ok"]);
	}

	#[test]
	fn placeholders_empty_for_plain_text() {
		assert!(placeholders("no tokens here").is_empty());
	}

	proptest! {
		#[test]
		fn render_without_params_is_identity(template in ".*") {
			prop_assert_eq!(render(&template, &[]), template);
		}

		#[test]
		fn lone_token_renders_to_its_value(
			name in "[A-Za-z_][A-Za-z0-9_]{0,11}",
			value in ".*",
		) {
			let template = format!("{{{name}}}");
			prop_assert_eq!(render(&template, &[(&name, &value)]), value);
		}

		#[test]
		fn render_never_panics(template in ".*", value in ".*") {
			let _ = render(&template, &[("arg", &value)]);
			let _ = placeholders(&template);
		}
	}
}
