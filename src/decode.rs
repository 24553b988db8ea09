use crate::literal::parse_datetime;
use crate::schema::{Domain, KindSet, PropertySpec};
use crate::{Context, Error, Literal, Object, Registry, Value};

type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Turns a generic JSON value tree into a typed [Object] using a [Registry]
/// for type discovery. Stateless apart from the registry reference; any parse
/// failure aborts the whole decode, no partial object is ever produced.
#[derive(Debug, Clone, Copy)]
pub struct Deserializer<'r> {
	registry: &'r Registry,
}

impl<'r> Deserializer<'r> {
	pub fn new(registry: &'r Registry) -> Self {
		Deserializer { registry }
	}

	pub fn decode(&self, value: &serde_json::Value) -> Result<Object, Error> {
		let map = value.as_object().ok_or(Error::NotAnObject)?;
		self.decode_map(map, &Context::new())
	}

	/// `scope` is the merged @context of every enclosing object, consulted to
	/// expand extension type names; it is never stored on the result
	fn decode_map(&self, map: &JsonMap, scope: &Context) -> Result<Object, Error> {
		let local = Context::from_json(map.get("@context"))?;
		let scope = scope.merged(&local);

		let (kind, kinds) = self.discover_type(map, &scope)?;
		let mut obj = Object::with_kinds(kind, kinds).set_context(local);

		match map.get("id").or_else(|| map.get("@id")) {
			None | Some(serde_json::Value::Null) => {},
			Some(serde_json::Value::String(iri)) => {
				obj = obj.set_id(Some(iri))?;
			},
			Some(other) => return Err(Error::literal(other, "id IRI")),
		}

		for (key, raw) in map {
			if matches!(key.as_str(), "@context" | "id" | "@id" | "type" | "@type") {
				continue;
			}
			// null is "absent", it neither populates a property nor the
			// unknown bag
			if raw.is_null() {
				continue;
			}

			let Some((spec, lang_map)) = self.lookup(kind, key) else {
				tracing::trace!("retaining unknown property '{key}' verbatim");
				obj.unknown_mut().insert(key.clone(), raw.clone());
				continue;
			};

			match raw {
				serde_json::Value::Array(elements) => {
					if spec.functional {
						return Err(Error::literal(raw, "single value"));
					}
					for element in elements {
						if element.is_null() {
							continue;
						}
						let value = self.decode_value(spec, lang_map, element, &scope)?;
						obj.properties_mut().append(spec, value)?;
					}
				},
				single => {
					let value = self.decode_value(spec, lang_map, single, &scope)?;
					if spec.functional {
						obj.properties_mut().set(spec, value)?;
					} else {
						obj.properties_mut().append(spec, value)?;
					}
				},
			}
		}

		Ok(obj)
	}

	/// Extract `type`/`@type` and resolve the concrete kind: entries are tried
	/// in wire order, first registry hit (raw, then context-expanded) wins;
	/// unmatched entries are retained as extra tags only.
	fn discover_type(&self, map: &JsonMap, scope: &Context) -> Result<(crate::BaseType, Vec<String>), Error> {
		let mut tags: Vec<String> = match map.get("type").or_else(|| map.get("@type")) {
			None | Some(serde_json::Value::Null) => return Err(Error::MissingType),
			Some(serde_json::Value::String(s)) => vec![s.clone()],
			Some(serde_json::Value::Array(arr)) => arr
				.iter()
				.map(|entry| match entry {
					serde_json::Value::String(s) => Ok(s.clone()),
					other => Err(Error::literal(other, "type name")),
				})
				.collect::<Result<_, _>>()?,
			Some(other) => return Err(Error::literal(other, "type name")),
		};
		if tags.is_empty() {
			return Err(Error::MissingType);
		}

		let resolved = tags.iter().find_map(|tag| {
			self.registry.resolve_type(tag).or_else(|| {
				scope.expand(tag).and_then(|expanded| self.registry.resolve_type(&expanded))
			})
		});
		match resolved {
			Some(kind) => Ok((kind, tags)),
			None => Err(Error::UnknownType(tags.swap_remove(0))),
		}
	}

	/// schema lookup including the `...Map` language-map key convention
	fn lookup(&self, kind: crate::BaseType, key: &str) -> Option<(&'static PropertySpec, bool)> {
		if let Some(spec) = self.registry.property(kind, key) {
			return Some((spec, false));
		}
		let base = key.strip_suffix("Map")?;
		self.registry
			.property(kind, base)
			.filter(|spec| spec.domain == Domain::LangString)
			.map(|spec| (spec, true))
	}

	fn decode_value(
		&self,
		spec: &'static PropertySpec,
		lang_map: bool,
		raw: &serde_json::Value,
		scope: &Context,
	) -> Result<Value, Error> {
		match spec.domain {
			Domain::Object(kinds) => self.decode_node(spec, kinds, raw, scope),
			Domain::LangString if lang_map => decode_lang_map(raw),
			Domain::LangString | Domain::String => match raw {
				serde_json::Value::String(s) => Ok(Value::string(s.clone())),
				other => Err(Error::literal(other, "string")),
			},
			Domain::Iri => match raw {
				serde_json::Value::String(s) => Value::iri(s.clone()),
				other => Err(Error::literal(other, "IRI")),
			},
			Domain::DateTime => match raw {
				serde_json::Value::String(s) => Ok(Literal::DateTime(parse_datetime(s)?).into()),
				other => Err(Error::literal(other, "xsd:dateTime")),
			},
			Domain::Duration => match raw {
				serde_json::Value::String(s) => Ok(Literal::Duration(s.parse()?).into()),
				other => Err(Error::literal(other, "xsd:duration")),
			},
			Domain::Boolean => match raw {
				serde_json::Value::Bool(b) => Ok(Literal::Boolean(*b).into()),
				other => Err(Error::literal(other, "boolean")),
			},
			Domain::Integer => decode_integer(raw),
			Domain::Float => decode_number(raw),
			Domain::Closed => match raw {
				serde_json::Value::Bool(b) => Ok(Literal::Boolean(*b).into()),
				serde_json::Value::String(s) => match parse_datetime(s) {
					Ok(t) => Ok(Literal::DateTime(t).into()),
					Err(_) => Value::iri(s.clone()),
				},
				_ => self.decode_node(spec, KindSet::Any, raw, scope),
			},
		}
	}

	/// an object-valued node: an IRI reference, an embedded registered object
	/// (checked against the property's allow-list), or a raw passthrough when
	/// the embedded type exists but is not registered
	fn decode_node(
		&self,
		spec: &'static PropertySpec,
		kinds: KindSet,
		raw: &serde_json::Value,
		scope: &Context,
	) -> Result<Value, Error> {
		match raw {
			serde_json::Value::String(s) => Value::iri(s.clone()),
			serde_json::Value::Object(map) => match self.decode_map(map, scope) {
				Ok(embedded) => {
					if kinds.allows(embedded.kind()) {
						Ok(Value::object(embedded))
					} else {
						Err(Error::DisallowedKind {
							property: spec.name,
							kind: embedded.kind().as_ref().to_string(),
						})
					}
				},
				// a declared but unregistered type is forward-compatible
				// data: keep it whole, do not interpret it
				Err(Error::UnknownType(_)) => Ok(Value::unknown(raw.clone())),
				Err(e) => Err(e),
			},
			other => Err(Error::literal(other, "IRI or object")),
		}
	}
}

fn decode_lang_map(raw: &serde_json::Value) -> Result<Value, Error> {
	let map = raw
		.as_object()
		.ok_or_else(|| Error::literal(raw, "language map"))?;
	let mut out = indexmap::IndexMap::new();
	for (lang, text) in map {
		match text.as_str() {
			Some(text) => out.insert(lang.clone(), text.to_string()),
			None => return Err(Error::literal(text, "language-tagged string")),
		};
	}
	Ok(Value::lang_map(out))
}

fn decode_integer(raw: &serde_json::Value) -> Result<Value, Error> {
	raw.as_u64()
		.map(|n| Literal::Integer(n as i64).into())
		.ok_or_else(|| Error::literal(raw, "non-negative integer"))
}

/// floats keep their wire integer/float discrimination so re-encoding is
/// lossless ("radius": 15 must not come back as 15.0)
fn decode_number(raw: &serde_json::Value) -> Result<Value, Error> {
	let number = match raw {
		serde_json::Value::Number(n) => n,
		other => return Err(Error::literal(other, "number")),
	};
	if let Some(n) = number.as_i64() {
		return Ok(Literal::Integer(n).into());
	}
	number
		.as_f64()
		.map(|f| Literal::Float(f).into())
		.ok_or_else(|| Error::literal(raw, "number"))
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{ActivityType, ActorType, BaseType, CollectionType, ObjectType};

	fn decode(json: serde_json::Value) -> Result<Object, Error> {
		let registry = Registry::activitystreams();
		Deserializer::new(&registry).decode(&json)
	}

	#[test]
	fn missing_type_fails_the_whole_decode() {
		let err = decode(serde_json::json!({
			"id": "http://example.org/foo",
			"name": "Foo",
		})).unwrap_err();
		assert!(matches!(err, Error::MissingType));
	}

	#[test]
	fn unregistered_type_fails_the_whole_decode() {
		let err = decode(serde_json::json!({
			"type": "http://example.org/Foo",
			"summary": "A foo",
		})).unwrap_err();
		match err {
			Error::UnknownType(name) => assert_eq!(name, "http://example.org/Foo"),
			other => panic!("expected UnknownType, got {other:?}"),
		}
	}

	#[test]
	fn first_registered_entry_of_a_type_array_wins() {
		let obj = decode(serde_json::json!({
			"type": ["Activity", "http://www.verbs.example/Check"],
			"summary": "Sally checked that her flight was on time",
		})).unwrap();
		assert_eq!(obj.kind(), ActivityType::Activity.into());
		assert_eq!(obj.kinds(), ["Activity", "http://www.verbs.example/Check"]);
	}

	#[test]
	fn nulls_are_dropped_not_stored() {
		let obj = decode(serde_json::json!({
			"type": "Note",
			"name": null,
			"fancyExtension": null,
			"content": "I am fine.",
		})).unwrap();
		assert_eq!(obj.get("name"), None);
		assert!(obj.unknown_properties().is_empty());
		assert_eq!(obj.get("content").unwrap().as_str(), Some("I am fine."));
	}

	#[test]
	fn unrecognized_keys_land_in_the_unknown_bag_in_order() {
		let obj = decode(serde_json::json!({
			"type": "Note",
			"second": 2,
			"first": {"nested": true},
		})).unwrap();
		let keys: Vec<&str> = obj.unknown_properties().keys().map(|x| x.as_str()).collect();
		assert_eq!(keys, ["second", "first"]);
	}

	#[test]
	fn embedded_objects_resolve_recursively() {
		let obj = decode(serde_json::json!({
			"type": "Activity",
			"actor": { "type": "Person", "name": "Sally" },
			"object": { "type": "Note", "name": "A Note" },
		})).unwrap();
		let actor = obj.get("actor").unwrap().as_object().unwrap();
		assert_eq!(actor.kind(), ActorType::Person.into());
		assert_eq!(actor.name(), Some("Sally"));
		let note = obj.get("object").unwrap().as_object().unwrap();
		assert_eq!(note.kind(), BaseType::Object(ObjectType::Note));
	}

	#[test]
	fn embedded_unregistered_types_become_passthrough_values() {
		let obj = decode(serde_json::json!({
			"type": "Activity",
			"result": { "type": "http://www.types.example/flightstatus", "name": "On Time" },
		})).unwrap();
		let result = obj.get("result").unwrap();
		assert!(result.is_unknown());
	}

	#[test]
	fn embedded_objects_without_a_type_fail_the_decode() {
		let err = decode(serde_json::json!({
			"type": "Activity",
			"object": { "name": "no type here" },
		})).unwrap_err();
		assert!(matches!(err, Error::MissingType));
	}

	#[test]
	fn disallowed_embedded_kind_fails_the_decode() {
		let err = decode(serde_json::json!({
			"type": "Like",
			"actor": { "type": "Note", "name": "not an actor" },
		})).unwrap_err();
		assert!(matches!(err, Error::DisallowedKind { property: "actor", .. }), "{err:?}");
	}

	#[test]
	fn malformed_literals_fail_the_decode() {
		assert!(decode(serde_json::json!({
			"type": "Note",
			"published": "yesterday",
		})).is_err());
		assert!(decode(serde_json::json!({
			"type": "Video",
			"duration": "2 hours",
		})).is_err());
		assert!(decode(serde_json::json!({
			"type": "Collection",
			"totalItems": -4,
		})).is_err());
	}

	#[test]
	fn context_aliases_expand_extension_type_names() {
		let mut registry = Registry::activitystreams();
		registry.register("https://schema.org#PropertyValue", ObjectType::Object);
		let obj = Deserializer::new(&registry).decode(&serde_json::json!({
			"@context": [
				"https://www.w3.org/ns/activitystreams",
				{ "schema": "https://schema.org#", "PropertyValue": "schema:PropertyValue" },
			],
			"type": "Service",
			"attachment": { "type": "PropertyValue", "name": "First Object" },
		})).unwrap();
		let attachment = obj.get("attachment").unwrap().as_object().unwrap();
		assert_eq!(attachment.kind(), BaseType::Object(ObjectType::Object));
		assert_eq!(attachment.kinds(), ["PropertyValue"]);
	}

	#[test]
	fn nested_context_redefinitions_take_precedence() {
		// only the inner definition's expansion is registered: the attachment
		// decodes as a typed object iff its own @context shadows the parent's
		let mut registry = Registry::activitystreams();
		registry.register("https://other.example/ns#PropertyValue", ObjectType::Object);
		let obj = Deserializer::new(&registry).decode(&serde_json::json!({
			"@context": [
				"https://www.w3.org/ns/activitystreams",
				{ "schema": "https://schema.org#", "PropertyValue": "schema:PropertyValue" },
			],
			"type": "Service",
			"attachment": {
				"@context": { "PropertyValue": "https://other.example/ns#PropertyValue" },
				"type": "PropertyValue",
				"name": "First Object",
			},
		})).unwrap();
		let attachment = obj.get("attachment").unwrap().as_object().unwrap();
		assert_eq!(attachment.kind(), BaseType::Object(ObjectType::Object));
	}

	#[test]
	fn single_element_arrays_collapse_to_one_value() {
		let obj = decode(serde_json::json!({
			"type": "Collection",
			"items": [{ "type": "Note", "name": "only one" }],
		})).unwrap();
		assert_eq!(obj.all("items").len(), 1);
		assert_eq!(obj.kind(), CollectionType::Collection.into());
	}

	#[test]
	fn arrays_on_functional_properties_are_rejected() {
		assert!(decode(serde_json::json!({
			"type": "Note",
			"published": ["2014-12-12T12:12:12Z", "2015-12-12T12:12:12Z"],
		})).is_err());
	}
}
