use crate::strenum;

/// Raised when a string does not name any kind in the tag hierarchy. The
/// registry maps this onto [crate::Error::UnknownType] with the offending name.
#[derive(Debug, thiserror::Error)]
#[error("invalid kind value")]
pub struct KindValueError;

strenum! {
	pub enum BaseType {
		;
		Object(ObjectType),
		Link(LinkType)
	};

	pub enum LinkType {
		Link,
		Mention;
	};

	pub enum ObjectType {
		Object,
		Article,
		Event,
		Note,
		Place,
		Profile,
		Relationship,
		Tombstone;

		Activity(ActivityType),
		Actor(ActorType),
		Collection(CollectionType),
		Document(DocumentType)
	};

	pub enum ActivityType {
		Activity,
		Accept,
		TentativeAccept,
		Add,
		Announce,
		Block,
		Create,
		Delete,
		Dislike,
		Flag,
		Follow,
		Ignore,
		Invite,
		Join,
		Leave,
		Like,
		Listen,
		Move,
		Offer,
		Read,
		Reject,
		TentativeReject,
		Remove,
		Undo,
		Update,
		View;

		Intransitive(IntransitiveActivityType)
	};

	pub enum IntransitiveActivityType {
		IntransitiveActivity,
		Arrive,
		Question,
		Travel;
	};

	pub enum ActorType {
		Application,
		Group,
		Organization,
		Person,
		Service;
	};

	pub enum CollectionType {
		Collection,
		OrderedCollection,
		CollectionPage,
		OrderedCollectionPage;
	};

	pub enum DocumentType {
		Document,
		Audio,
		Image,
		Page,
		Video;
	};
}

impl CollectionType {
	pub fn is_page(&self) -> bool {
		matches!(self, Self::CollectionPage | Self::OrderedCollectionPage)
	}

	pub fn is_ordered(&self) -> bool {
		matches!(self, Self::OrderedCollection | Self::OrderedCollectionPage)
	}
}

impl From<ObjectType> for BaseType {
	fn from(value: ObjectType) -> Self {
		BaseType::Object(value)
	}
}

impl From<LinkType> for BaseType {
	fn from(value: LinkType) -> Self {
		BaseType::Link(value)
	}
}

impl From<ActivityType> for ObjectType {
	fn from(value: ActivityType) -> Self {
		ObjectType::Activity(value)
	}
}

impl From<ActivityType> for BaseType {
	fn from(value: ActivityType) -> Self {
		BaseType::Object(ObjectType::Activity(value))
	}
}

impl From<IntransitiveActivityType> for ActivityType {
	fn from(value: IntransitiveActivityType) -> Self {
		ActivityType::Intransitive(value)
	}
}

impl From<IntransitiveActivityType> for ObjectType {
	fn from(value: IntransitiveActivityType) -> Self {
		ObjectType::Activity(ActivityType::Intransitive(value))
	}
}

impl From<IntransitiveActivityType> for BaseType {
	fn from(value: IntransitiveActivityType) -> Self {
		BaseType::Object(value.into())
	}
}

impl From<ActorType> for ObjectType {
	fn from(value: ActorType) -> Self {
		ObjectType::Actor(value)
	}
}

impl From<ActorType> for BaseType {
	fn from(value: ActorType) -> Self {
		BaseType::Object(ObjectType::Actor(value))
	}
}

impl From<CollectionType> for ObjectType {
	fn from(value: CollectionType) -> Self {
		ObjectType::Collection(value)
	}
}

impl From<CollectionType> for BaseType {
	fn from(value: CollectionType) -> Self {
		BaseType::Object(ObjectType::Collection(value))
	}
}

impl From<DocumentType> for ObjectType {
	fn from(value: DocumentType) -> Self {
		ObjectType::Document(value)
	}
}

impl From<DocumentType> for BaseType {
	fn from(value: DocumentType) -> Self {
		BaseType::Object(ObjectType::Document(value))
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn flat_and_nested_kinds_parse_from_their_names() {
		assert_eq!(BaseType::try_from("Note").unwrap(), BaseType::Object(ObjectType::Note));
		assert_eq!(
			BaseType::try_from("Person").unwrap(),
			BaseType::Object(ObjectType::Actor(ActorType::Person)),
		);
		assert_eq!(
			BaseType::try_from("Travel").unwrap(),
			BaseType::Object(ObjectType::Activity(ActivityType::Intransitive(IntransitiveActivityType::Travel))),
		);
		assert_eq!(BaseType::try_from("Mention").unwrap(), BaseType::Link(LinkType::Mention));
	}

	#[test]
	fn kind_names_survive_a_parse_and_format_cycle() {
		for name in ["Object", "OrderedCollectionPage", "Question", "Video", "Link"] {
			assert_eq!(BaseType::try_from(name).unwrap().as_ref(), name);
		}
	}

	#[test]
	fn unknown_names_do_not_parse() {
		assert!(BaseType::try_from("Foo").is_err());
		assert!(BaseType::try_from("http://example.org/Foo").is_err());
		assert!(BaseType::try_from("note").is_err());
	}
}
