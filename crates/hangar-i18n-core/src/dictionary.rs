// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation dictionaries addressed by dotted key paths.
//!
//! A [`Dictionary`] holds every translatable string for one locale as a
//! tree: internal nodes are named tables, leaves are message strings. A key
//! path like `mods.card.remove_success` addresses one leaf by splitting on
//! `.` and descending one table per segment.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DictionaryError;

/// One node in a dictionary tree: a message leaf or a table of named
/// children.
///
/// The serde representation is untagged, so nested locale data maps onto
/// the tree with no wrapper syntax: a JSON string deserializes to a
/// message, a JSON object to a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
	/// A translatable message, possibly containing `{name}` placeholders.
	Message(String),
	/// A table of named child nodes.
	Table(HashMap<String, Node>),
}

/// All translatable strings for a single locale.
///
/// Content is replaced wholesale: the engine never patches a loaded tree in
/// place, it swaps in a newly built `Dictionary`.
///
/// # Example
///
/// ```
/// use hangar_i18n_core::Dictionary;
///
/// let mut dict = Dictionary::new();
/// dict.insert("menu.play", "Jouer");
/// dict.insert("mods.card.remove_success", "{modName} supprimé");
///
/// assert_eq!(dict.message("menu.play"), Some("Jouer"));
/// assert_eq!(dict.message("menu"), None);
/// assert_eq!(dict.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
	root: HashMap<String, Node>,
}

impl Dictionary {
	/// Create an empty dictionary.
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a dictionary from a parsed JSON value.
	///
	/// The root must be an object, and every nested value must be a string
	/// or another object. Anything else is rejected with the dotted path of
	/// the offending entry, so bad locale data names the exact key that
	/// broke.
	pub fn from_json(value: Value) -> Result<Self, DictionaryError> {
		match value {
			Value::Object(map) => {
				let mut root = HashMap::with_capacity(map.len());
				for (key, child) in map {
					let node = node_from_json(child, &key)?;
					root.insert(key, node);
				}
				Ok(Self { root })
			}
			other => Err(DictionaryError::InvalidRoot {
				found: json_type_name(&other),
			}),
		}
	}

	/// Look up the message addressed by a dotted key path.
	///
	/// Returns `None` when any segment is missing, when the path tries to
	/// descend through a message, or when the full path lands on a table
	/// rather than a message. All three count as "not found".
	pub fn message(&self, key: &str) -> Option<&str> {
		match self.node(key) {
			Some(Node::Message(message)) => Some(message),
			_ => None,
		}
	}

	/// Whether `key` addresses a message in this dictionary.
	pub fn contains(&self, key: &str) -> bool {
		self.message(key).is_some()
	}

	/// Insert a message at a dotted key path, creating intermediate tables
	/// as needed.
	///
	/// Later writes win: inserting through an existing message displaces it
	/// with a table, and inserting onto an existing table replaces the
	/// whole subtree with the new message.
	pub fn insert(&mut self, key: &str, message: impl Into<String>) {
		insert_at(&mut self.root, key, message.into());
	}

	/// All key paths that address a message, dotted and sorted.
	pub fn keys(&self) -> Vec<String> {
		let mut keys = Vec::new();
		collect_keys(&self.root, "", &mut keys);
		keys.sort_unstable();
		keys
	}

	/// Number of messages in the dictionary.
	pub fn len(&self) -> usize {
		count_messages(&self.root)
	}

	/// Whether the dictionary holds no messages at all.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn node(&self, key: &str) -> Option<&Node> {
		let mut segments = key.split('.');
		let mut node = self.root.get(segments.next()?)?;
		for segment in segments {
			match node {
				Node::Table(table) => node = table.get(segment)?,
				Node::Message(_) => return None,
			}
		}
		Some(node)
	}
}

fn node_from_json(value: Value, path: &str) -> Result<Node, DictionaryError> {
	match value {
		Value::String(message) => Ok(Node::Message(message)),
		Value::Object(map) => {
			let mut table = HashMap::with_capacity(map.len());
			for (key, child) in map {
				let child_path = format!("{path}.{key}");
				let node = node_from_json(child, &child_path)?;
				table.insert(key, node);
			}
			Ok(Node::Table(table))
		}
		other => Err(DictionaryError::InvalidValue {
			path: path.to_string(),
			found: json_type_name(&other),
		}),
	}
}

fn insert_at(table: &mut HashMap<String, Node>, key: &str, message: String) {
	match key.split_once('.') {
		None => {
			table.insert(key.to_string(), Node::Message(message));
		}
		Some((head, rest)) => {
			let entry = table
				.entry(head.to_string())
				.or_insert_with(|| Node::Table(HashMap::new()));
			if let Node::Message(_) = entry {
				*entry = Node::Table(HashMap::new());
			}
			if let Node::Table(children) = entry {
				insert_at(children, rest, message);
			}
		}
	}
}

fn collect_keys(table: &HashMap<String, Node>, prefix: &str, keys: &mut Vec<String>) {
	for (name, node) in table {
		let path = if prefix.is_empty() {
			name.clone()
		} else {
			format!("{prefix}.{name}")
		};
		match node {
			Node::Message(_) => keys.push(path),
			Node::Table(children) => collect_keys(children, &path, keys),
		}
	}
}

fn count_messages(table: &HashMap<String, Node>) -> usize {
	table
		.values()
		.map(|node| match node {
			Node::Message(_) => 1,
			Node::Table(children) => count_messages(children),
		})
		.sum()
}

fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
