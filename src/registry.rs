use std::collections::HashMap;

use crate::schema::{self, PropertySpec};
use crate::{context, BaseType};

/// Maps wire type names (bare or IRI form) to kind tags. Built once, read-only
/// afterwards, so it can be shared across threads without locking. Lookup is
/// exact-match: any aliasing beyond JSON-LD context expansion is the caller's
/// problem.
#[derive(Debug, Clone, Default)]
pub struct Registry {
	types: HashMap<String, BaseType>,
}

/// every kind tag shipped with the crate, by wire name
const KNOWN_TYPES: &[&str] = &[
	"Object", "Article", "Event", "Note", "Place", "Profile", "Relationship", "Tombstone",
	"Activity", "Accept", "TentativeAccept", "Add", "Announce", "Block", "Create", "Delete",
	"Dislike", "Flag", "Follow", "Ignore", "Invite", "Join", "Leave", "Like", "Listen", "Move",
	"Offer", "Read", "Reject", "TentativeReject", "Remove", "Undo", "Update", "View",
	"IntransitiveActivity", "Arrive", "Question", "Travel",
	"Application", "Group", "Organization", "Person", "Service",
	"Collection", "OrderedCollection", "CollectionPage", "OrderedCollectionPage",
	"Document", "Audio", "Image", "Page", "Video",
	"Link", "Mention",
];

impl Registry {
	/// an empty registry: every type name is unknown until registered
	pub fn new() -> Self {
		Self::default()
	}

	/// the full ActivityStreams vocabulary, each kind registered under both
	/// its bare name and its namespaced IRI
	pub fn activitystreams() -> Self {
		let mut registry = Self::new();
		for name in KNOWN_TYPES {
			if let Ok(kind) = BaseType::try_from(*name) {
				registry.register(*name, kind);
				registry.register(format!("{}#{name}", context::ACTIVITYSTREAMS), kind);
			}
		}
		registry
	}

	/// map an extra wire name (e.g. an extension IRI) onto a kind tag
	pub fn register(&mut self, name: impl Into<String>, kind: impl Into<BaseType>) {
		let name = name.into();
		let kind = kind.into();
		if let Some(prev) = self.types.insert(name.clone(), kind) {
			if prev != kind {
				tracing::debug!("re-registered type '{name}' from {prev:?} to {kind:?}");
			}
		}
	}

	/// exact-match lookup of a type name, bare or IRI form
	pub fn resolve_type(&self, raw: &str) -> Option<BaseType> {
		self.types.get(raw).copied()
	}

	/// schema entry for a property of the given kind
	pub fn property(&self, kind: BaseType, name: &str) -> Option<&'static PropertySpec> {
		schema::property(kind, name)
	}

	pub fn len(&self) -> usize {
		self.types.len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{ActorType, ObjectType};

	#[test]
	fn standard_vocabulary_resolves_by_bare_name_and_iri() {
		let registry = Registry::activitystreams();
		assert_eq!(
			registry.resolve_type("Note"),
			Some(BaseType::Object(ObjectType::Note)),
		);
		assert_eq!(
			registry.resolve_type("https://www.w3.org/ns/activitystreams#Person"),
			Some(ActorType::Person.into()),
		);
	}

	#[test]
	fn lookup_is_exact_match_only() {
		let registry = Registry::activitystreams();
		assert_eq!(registry.resolve_type("note"), None);
		assert_eq!(registry.resolve_type("http://example.org/Foo"), None);
		assert_eq!(registry.resolve_type(" Note"), None);
	}

	#[test]
	fn extension_names_can_alias_existing_kinds() {
		let mut registry = Registry::activitystreams();
		registry.register("http://joinmastodon.org/ns#Emoji", ObjectType::Object);
		assert_eq!(
			registry.resolve_type("http://joinmastodon.org/ns#Emoji"),
			Some(BaseType::Object(ObjectType::Object)),
		);
	}

	#[test]
	fn empty_registry_knows_nothing() {
		assert_eq!(Registry::new().resolve_type("Note"), None);
	}
}
