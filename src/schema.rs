use crate::{ActivityType, BaseType, ObjectType};

/// Which embedded kinds a property accepts. An IRI reference is always
/// accepted; this list only constrains the `Object` variant of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindSet {
	/// any object or link
	Any,
	/// actor kinds only (Person, Group, Organization, Application, Service)
	Actor,
	/// collection kinds only
	Collection,
	/// collection pages, or a link to one
	Page,
	/// documents (images, video, ...) or a link
	Media,
	/// link kinds only
	Link,
}

impl KindSet {
	pub fn allows(&self, kind: BaseType) -> bool {
		match self {
			KindSet::Any => true,
			KindSet::Actor => matches!(kind, BaseType::Object(ObjectType::Actor(_))),
			KindSet::Collection => matches!(kind, BaseType::Object(ObjectType::Collection(_))),
			KindSet::Page => match kind {
				BaseType::Object(ObjectType::Collection(c)) => c.is_page(),
				BaseType::Link(_) => true,
				_ => false,
			},
			KindSet::Media => matches!(
				kind,
				BaseType::Object(ObjectType::Document(_)) | BaseType::Link(_),
			),
			KindSet::Link => matches!(kind, BaseType::Link(_)),
		}
	}
}

/// What value forms a property carries and how its wire form is parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
	/// IRI reference or an embedded object of an allowed kind
	Object(KindSet),
	/// plain string, or a language map under the `...Map` key variant
	LangString,
	String,
	Iri,
	DateTime,
	Duration,
	Boolean,
	/// xsd:nonNegativeInteger
	Integer,
	Float,
	/// Question's `closed`: a datetime, a boolean, an IRI or an object
	Closed,
}

/// Schema entry for one vocabulary property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySpec {
	pub name: &'static str,
	pub functional: bool,
	pub domain: Domain,
}

const fn one(name: &'static str, domain: Domain) -> PropertySpec {
	PropertySpec { name, functional: true, domain }
}

const fn many(name: &'static str, domain: Domain) -> PropertySpec {
	PropertySpec { name, functional: false, domain }
}

/// properties shared by every object kind
const OBJECT_PROPS: &[PropertySpec] = &[
	many("attachment", Domain::Object(KindSet::Any)),
	many("attributedTo", Domain::Object(KindSet::Any)),
	many("audience", Domain::Object(KindSet::Any)),
	many("content", Domain::LangString),
	many("context", Domain::Object(KindSet::Any)),
	many("name", Domain::LangString),
	one("endTime", Domain::DateTime),
	many("generator", Domain::Object(KindSet::Any)),
	many("icon", Domain::Object(KindSet::Media)),
	many("image", Domain::Object(KindSet::Media)),
	many("inReplyTo", Domain::Object(KindSet::Any)),
	many("location", Domain::Object(KindSet::Any)),
	many("preview", Domain::Object(KindSet::Any)),
	one("published", Domain::DateTime),
	one("replies", Domain::Object(KindSet::Collection)),
	one("startTime", Domain::DateTime),
	many("summary", Domain::LangString),
	many("tag", Domain::Object(KindSet::Any)),
	one("updated", Domain::DateTime),
	many("url", Domain::Object(KindSet::Link)),
	many("to", Domain::Object(KindSet::Any)),
	many("bto", Domain::Object(KindSet::Any)),
	many("cc", Domain::Object(KindSet::Any)),
	many("bcc", Domain::Object(KindSet::Any)),
	one("mediaType", Domain::String),
	one("duration", Domain::Duration),
];

const LINK_PROPS: &[PropertySpec] = &[
	one("href", Domain::Iri),
	many("rel", Domain::String),
	one("mediaType", Domain::String),
	many("name", Domain::LangString),
	// the spec examples put summaries on Mentions too
	many("summary", Domain::LangString),
	one("hreflang", Domain::String),
	one("height", Domain::Integer),
	one("width", Domain::Integer),
	many("preview", Domain::Object(KindSet::Any)),
];

const ACTIVITY_PROPS: &[PropertySpec] = &[
	many("actor", Domain::Object(KindSet::Actor)),
	many("object", Domain::Object(KindSet::Any)),
	many("target", Domain::Object(KindSet::Any)),
	many("result", Domain::Object(KindSet::Any)),
	many("origin", Domain::Object(KindSet::Any)),
	many("instrument", Domain::Object(KindSet::Any)),
];

const QUESTION_PROPS: &[PropertySpec] = &[
	many("oneOf", Domain::Object(KindSet::Any)),
	many("anyOf", Domain::Object(KindSet::Any)),
	many("closed", Domain::Closed),
];

const ACTOR_PROPS: &[PropertySpec] = &[
	one("inbox", Domain::Object(KindSet::Collection)),
	one("outbox", Domain::Object(KindSet::Collection)),
	one("following", Domain::Object(KindSet::Collection)),
	one("followers", Domain::Object(KindSet::Collection)),
	one("liked", Domain::Object(KindSet::Collection)),
	one("preferredUsername", Domain::LangString),
	one("endpoints", Domain::Object(KindSet::Any)),
	many("streams", Domain::Object(KindSet::Collection)),
];

const COLLECTION_PROPS: &[PropertySpec] = &[
	one("totalItems", Domain::Integer),
	many("items", Domain::Object(KindSet::Any)),
	many("orderedItems", Domain::Object(KindSet::Any)),
	one("current", Domain::Object(KindSet::Page)),
	one("first", Domain::Object(KindSet::Page)),
	one("last", Domain::Object(KindSet::Page)),
];

const PAGE_PROPS: &[PropertySpec] = &[
	one("partOf", Domain::Object(KindSet::Collection)),
	one("next", Domain::Object(KindSet::Page)),
	one("prev", Domain::Object(KindSet::Page)),
	one("startIndex", Domain::Integer),
];

const PLACE_PROPS: &[PropertySpec] = &[
	one("accuracy", Domain::Float),
	one("altitude", Domain::Float),
	one("latitude", Domain::Float),
	one("longitude", Domain::Float),
	one("radius", Domain::Float),
	one("units", Domain::String),
];

const RELATIONSHIP_PROPS: &[PropertySpec] = &[
	one("subject", Domain::Object(KindSet::Any)),
	many("object", Domain::Object(KindSet::Any)),
	many("relationship", Domain::Object(KindSet::Any)),
];

const TOMBSTONE_PROPS: &[PropertySpec] = &[
	many("formerType", Domain::String),
	one("deleted", Domain::DateTime),
];

const PROFILE_PROPS: &[PropertySpec] = &[
	one("describes", Domain::Object(KindSet::Any)),
];

fn find(table: &'static [PropertySpec], name: &str) -> Option<&'static PropertySpec> {
	table.iter().find(|spec| spec.name == name)
}

/// Look up the schema entry for a property name on a given kind, walking the
/// kind's vocabulary layers (base object, then the kind-specific catalog).
pub fn property(kind: BaseType, name: &str) -> Option<&'static PropertySpec> {
	let object_type = match kind {
		BaseType::Link(_) => return find(LINK_PROPS, name),
		BaseType::Object(o) => o,
	};

	if let Some(spec) = find(OBJECT_PROPS, name) {
		return Some(spec);
	}

	match object_type {
		ObjectType::Activity(a) => {
			if name == "object" && matches!(a, ActivityType::Intransitive(_)) {
				return None;
			}
			if matches!(a, ActivityType::Intransitive(crate::IntransitiveActivityType::Question)) {
				if let Some(spec) = find(QUESTION_PROPS, name) {
					return Some(spec);
				}
			}
			find(ACTIVITY_PROPS, name)
		},
		ObjectType::Actor(_) => find(ACTOR_PROPS, name),
		ObjectType::Collection(c) => {
			if c.is_page() {
				if let Some(spec) = find(PAGE_PROPS, name) {
					return Some(spec);
				}
			}
			// orderedItems is only defined for the ordered variants
			if name == "orderedItems" && !c.is_ordered() {
				return None;
			}
			find(COLLECTION_PROPS, name)
		},
		ObjectType::Place => find(PLACE_PROPS, name),
		ObjectType::Relationship => find(RELATIONSHIP_PROPS, name),
		ObjectType::Tombstone => find(TOMBSTONE_PROPS, name),
		ObjectType::Profile => find(PROFILE_PROPS, name),
		_ => None,
	}
}
