use indexmap::IndexMap;

use crate::Error;

pub const ACTIVITYSTREAMS: &str = "https://www.w3.org/ns/activitystreams";

/// One entry of a JSON-LD `@context` value: either a namespace IRI or an
/// inline map of term definitions (alias -> IRI, prefix -> namespace)
#[derive(Debug, Clone, PartialEq)]
pub enum ContextEntry {
	Iri(String),
	Terms(IndexMap<String, serde_json::Value>),
}

/// Ordered JSON-LD `@context` of an object. Stored verbatim so it round-trips;
/// term definitions are additionally consulted to expand extension type names
/// before registry lookup.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Context {
	entries: Vec<ContextEntry>,
}

impl Context {
	pub fn new() -> Self {
		Self::default()
	}

	/// the plain ActivityStreams namespace context
	pub fn activitystreams() -> Self {
		Context {
			entries: vec![ContextEntry::Iri(ACTIVITYSTREAMS.to_string())],
		}
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn entries(&self) -> &[ContextEntry] {
		&self.entries
	}

	pub fn push_iri(mut self, iri: impl Into<String>) -> Self {
		self.entries.push(ContextEntry::Iri(iri.into()));
		self
	}

	pub fn push_terms(mut self, terms: IndexMap<String, serde_json::Value>) -> Self {
		self.entries.push(ContextEntry::Terms(terms));
		self
	}

	/// this context followed by another one's entries, for threading a parent
	/// scope into nested objects during decode
	pub fn merged(&self, other: &Context) -> Context {
		let mut entries = self.entries.clone();
		entries.extend(other.entries.iter().cloned());
		Context { entries }
	}

	/// Expand a term through the context's alias definitions into an absolute
	/// IRI, following at most one `prefix:suffix` hop. Returns None when the
	/// term is defined nowhere.
	pub fn expand(&self, term: &str) -> Option<String> {
		if let Some(def) = self.lookup(term) {
			return match def.split_once(':') {
				Some((prefix, suffix)) if !suffix.starts_with("//") => {
					self.lookup(prefix).map(|ns| format!("{ns}{suffix}"))
				},
				_ => Some(def.to_string()),
			};
		}
		// the term itself may be in compact prefix:suffix form
		if let Some((prefix, suffix)) = term.split_once(':') {
			if !suffix.starts_with("//") {
				return self.lookup(prefix).map(|ns| format!("{ns}{suffix}"));
			}
		}
		None
	}

	// later entries redefine earlier ones (an object's own context over its
	// parents'), so the newest definition wins
	fn lookup(&self, term: &str) -> Option<&str> {
		self.entries.iter().rev().find_map(|entry| match entry {
			ContextEntry::Iri(_) => None,
			ContextEntry::Terms(map) => map.get(term)?.as_str(),
		})
	}

	/// Parse the wire form of `@context`: a string, a term map, or an array
	/// mixing both. Absent and null mean no context.
	pub(crate) fn from_json(value: Option<&serde_json::Value>) -> Result<Self, Error> {
		let mut entries = Vec::new();
		match value {
			None | Some(serde_json::Value::Null) => {},
			Some(serde_json::Value::Array(arr)) => {
				for entry in arr {
					entries.push(Self::entry_from_json(entry)?);
				}
			},
			Some(other) => entries.push(Self::entry_from_json(other)?),
		}
		Ok(Context { entries })
	}

	fn entry_from_json(value: &serde_json::Value) -> Result<ContextEntry, Error> {
		match value {
			serde_json::Value::String(iri) => Ok(ContextEntry::Iri(iri.clone())),
			serde_json::Value::Object(map) => Ok(ContextEntry::Terms(
				map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
			)),
			other => Err(Error::literal(other, "@context entry")),
		}
	}

	/// Wire form: nothing when empty, a bare string for a single namespace,
	/// an array otherwise, entries in insertion order.
	pub(crate) fn to_json(&self) -> Option<serde_json::Value> {
		match self.entries.as_slice() {
			[] => None,
			[ContextEntry::Iri(iri)] => Some(serde_json::Value::String(iri.clone())),
			entries => Some(serde_json::Value::Array(
				entries.iter().map(|entry| match entry {
					ContextEntry::Iri(iri) => serde_json::Value::String(iri.clone()),
					ContextEntry::Terms(map) => serde_json::Value::Object(
						map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
					),
				}).collect()
			)),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn single_namespace_context_round_trips_as_bare_string() {
		let json = serde_json::json!("https://www.w3.org/ns/activitystreams");
		let ctx = Context::from_json(Some(&json)).unwrap();
		assert_eq!(ctx.len(), 1);
		assert_eq!(ctx.to_json().unwrap(), json);
	}

	#[test]
	fn mixed_context_keeps_entry_order() {
		let json = serde_json::json!([
			"https://www.w3.org/ns/activitystreams",
			{ "schema": "https://schema.org#", "PropertyValue": "schema:PropertyValue" },
		]);
		let ctx = Context::from_json(Some(&json)).unwrap();
		assert_eq!(ctx.len(), 2);
		assert_eq!(ctx.to_json().unwrap(), json);
	}

	#[test]
	fn absent_and_null_contexts_are_empty() {
		assert!(Context::from_json(None).unwrap().is_empty());
		assert!(Context::from_json(Some(&serde_json::Value::Null)).unwrap().is_empty());
		assert_eq!(Context::new().to_json(), None);
	}

	#[test]
	fn terms_expand_through_prefix_definitions() {
		let json = serde_json::json!([
			"https://www.w3.org/ns/activitystreams",
			{ "schema": "https://schema.org#", "PropertyValue": "schema:PropertyValue" },
		]);
		let ctx = Context::from_json(Some(&json)).unwrap();
		assert_eq!(
			ctx.expand("PropertyValue").as_deref(),
			Some("https://schema.org#PropertyValue"),
		);
		assert_eq!(
			ctx.expand("schema:Thing").as_deref(),
			Some("https://schema.org#Thing"),
		);
		assert_eq!(ctx.expand("unrelated"), None);
		// absolute IRIs are not prefix expansions
		assert_eq!(ctx.expand("http://example.org/Foo"), None);
	}

	#[test]
	fn newer_definitions_shadow_older_ones() {
		let outer = Context::from_json(Some(&serde_json::json!([
			"https://www.w3.org/ns/activitystreams",
			{ "schema": "https://schema.org#" },
		]))).unwrap();
		let inner = Context::from_json(Some(&serde_json::json!(
			{ "schema": "https://other.example/ns#" }
		))).unwrap();
		let merged = outer.merged(&inner);
		assert_eq!(
			merged.expand("schema:Thing").as_deref(),
			Some("https://other.example/ns#Thing"),
		);
		// the outer scope alone still uses its own definition
		assert_eq!(
			outer.expand("schema:Thing").as_deref(),
			Some("https://schema.org#Thing"),
		);
	}

	#[test]
	fn numeric_context_entries_are_rejected() {
		let json = serde_json::json!([42]);
		assert!(Context::from_json(Some(&json)).is_err());
	}
}
