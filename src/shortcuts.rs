use crate::{getter, setter};
use crate::Object;

/// Typed accessors for the common vocabulary properties, so callers are not
/// stuck spelling property names and unwrapping [crate::Value] by hand.
/// Getters return the first value; the full sequence is always reachable
/// through [Object::all].
impl Object {
	getter! { name -> &str }
	getter! { summary -> &str }
	getter! { content -> &str }
	getter! { media_type::mediaType -> &str }
	getter! { hreflang -> &str }
	getter! { units -> &str }
	getter! { former_type::formerType -> &str }
	getter! { preferred_username::preferredUsername -> &str }
	getter! { rel -> &str }

	getter! { href -> iri }

	getter! { published -> datetime }
	getter! { updated -> datetime }
	getter! { deleted -> datetime }
	getter! { start_time::startTime -> datetime }
	getter! { end_time::endTime -> datetime }

	getter! { duration -> duration }

	getter! { total_items::totalItems -> u64 }
	getter! { start_index::startIndex -> u64 }
	getter! { height -> u64 }
	getter! { width -> u64 }

	getter! { latitude -> f64 }
	getter! { longitude -> f64 }
	getter! { altitude -> f64 }
	getter! { radius -> f64 }
	getter! { accuracy -> f64 }

	getter! { actor -> values }
	getter! { object -> values }
	getter! { target -> values }
	getter! { result -> values }
	getter! { items -> values }
	getter! { ordered_items::orderedItems -> values }
	getter! { attachment -> values }
	getter! { attributed_to::attributedTo -> values }
	getter! { tag -> values }
	getter! { icon -> values }
	getter! { image -> values }
	getter! { in_reply_to::inReplyTo -> values }
	getter! { replies -> values }
	getter! { url -> values }
	getter! { to -> values }
	getter! { bto -> values }
	getter! { cc -> values }
	getter! { bcc -> values }
	getter! { preview -> values }
	getter! { one_of::oneOf -> values }
	getter! { any_of::anyOf -> values }

	/// the language-tagged variant of `name`, if one was set
	pub fn name_map(&self) -> Option<&indexmap::IndexMap<String, String>> {
		self.all("name").iter().find_map(|v| v.as_lang_map())
	}

	setter! { name -> &str }
	setter! { summary -> &str }
	setter! { content -> &str }
	setter! { media_type::mediaType -> &str }
	setter! { hreflang -> &str }
	setter! { units -> &str }
	setter! { preferred_username::preferredUsername -> &str }

	setter! { published -> datetime }
	setter! { updated -> datetime }
	setter! { deleted -> datetime }
	setter! { start_time::startTime -> datetime }
	setter! { end_time::endTime -> datetime }

	setter! { duration -> duration }

	setter! { total_items::totalItems -> u64 }
	setter! { height -> u64 }
	setter! { width -> u64 }

	setter! { latitude -> f64 }
	setter! { longitude -> f64 }
	setter! { radius -> f64 }

	setter! { href -> iri }
}

#[cfg(test)]
mod test {
	use crate::{ActorType, CollectionType, DocumentType, LinkType, Object, ObjectType, Value};

	#[test]
	fn literal_shortcuts_write_and_read_back() {
		let note = Object::new(ObjectType::Note)
			.set_name(Some("A Note"))
			.set_content(Some("hello world!"));
		assert_eq!(note.name(), Some("A Note"));
		assert_eq!(note.content(), Some("hello world!"));
		assert_eq!(note.summary(), None);
	}

	#[test]
	fn clearing_a_shortcut_removes_the_property() {
		let note = Object::new(ObjectType::Note)
			.set_name(Some("A Note"))
			.set_name(None);
		assert_eq!(note.name(), None);
		assert!(!note.properties().contains("name"));
	}

	#[test]
	fn setters_for_properties_outside_the_kind_are_ignored() {
		// a Note has no totalItems, the write is dropped with a warning
		let note = Object::new(ObjectType::Note).set_total_items(Some(9));
		assert_eq!(note.total_items(), None);

		let collection = Object::new(CollectionType::Collection).set_total_items(Some(9));
		assert_eq!(collection.total_items(), Some(9));
	}

	#[test]
	fn oversized_counts_saturate_instead_of_vanishing() {
		let collection = Object::new(CollectionType::Collection).set_total_items(Some(u64::MAX));
		assert_eq!(collection.total_items(), Some(i64::MAX as u64));
	}

	#[test]
	fn href_shortcut_validates_the_iri() {
		let link = Object::new(LinkType::Link).set_href(Some("http://example.org/abc")).unwrap();
		assert_eq!(link.href(), Some("http://example.org/abc"));
		assert!(Object::new(LinkType::Link).set_href(Some("not an iri")).is_err());
	}

	#[test]
	fn value_sequences_come_back_in_order() {
		let collection = Object::new(CollectionType::OrderedCollection)
			.append("orderedItems", Value::object(
				Object::new(DocumentType::Image).set_name(Some("one")),
			)).unwrap()
			.append("orderedItems", Value::object(
				Object::new(ActorType::Person).set_name(Some("two")),
			)).unwrap();
		let names: Vec<_> = collection
			.ordered_items()
			.iter()
			.filter_map(|v| v.as_object()?.name())
			.collect();
		assert_eq!(names, ["one", "two"]);
	}
}
