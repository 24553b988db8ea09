use indexmap::IndexMap;

use crate::literal::format_datetime;
use crate::{Literal, Object, Slot, Value};

type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Serialize an [Object] back to its JSON wire form, the inverse of
/// [crate::Deserializer::decode]: `@context` first, then `id` and `type`, the
/// property set in container order, and finally every unknown field verbatim.
/// Absent properties are omitted entirely; `null` is never emitted.
pub fn encode(obj: &Object) -> serde_json::Value {
	let mut map = JsonMap::new();

	if let Some(ctx) = obj.context().to_json() {
		map.insert("@context".to_string(), ctx);
	}

	if let Some(id) = obj.id() {
		map.insert("id".to_string(), serde_json::Value::String(id.to_string()));
	}

	map.insert("type".to_string(), match obj.kinds() {
		[single] => serde_json::Value::String(single.clone()),
		many => serde_json::Value::Array(
			many.iter().map(|x| serde_json::Value::String(x.clone())).collect()
		),
	});

	for (name, slot) in obj.properties().iter() {
		encode_slot(&mut map, name, slot);
	}

	for (key, raw) in obj.unknown_properties() {
		map.insert(key.clone(), raw.clone());
	}

	serde_json::Value::Object(map)
}

/// Language-tagged values split off to the `...Map` key variant and merge into
/// one map; the remaining values follow the single/array flattening rule: one
/// value is emitted bare, several as an array, none not at all.
fn encode_slot(map: &mut JsonMap, name: &str, slot: &Slot) {
	let mut plain: Vec<serde_json::Value> = Vec::new();
	let mut tagged: IndexMap<String, String> = IndexMap::new();

	for value in slot.values() {
		match value {
			Value::Literal(Literal::LangMap(entries)) => {
				tagged.extend(entries.iter().map(|(k, v)| (k.clone(), v.clone())));
			},
			other => {
				if let Some(encoded) = encode_value(other) {
					plain.push(encoded);
				}
			},
		}
	}

	match plain.len() {
		0 => {},
		1 => {
			if let Some(value) = plain.pop() {
				map.insert(name.to_string(), value);
			}
		},
		_ => {
			map.insert(name.to_string(), serde_json::Value::Array(plain));
		},
	}

	if !tagged.is_empty() {
		map.insert(
			format!("{name}Map"),
			serde_json::Value::Object(
				tagged.into_iter().map(|(k, v)| (k, serde_json::Value::String(v))).collect()
			),
		);
	}
}

fn encode_value(value: &Value) -> Option<serde_json::Value> {
	Some(match value {
		Value::Iri(iri) => serde_json::Value::String(iri.clone()),
		Value::Object(obj) => encode(obj),
		Value::Unknown(raw) => raw.clone(),
		Value::Literal(literal) => match literal {
			Literal::String(s) => serde_json::Value::String(s.clone()),
			Literal::Boolean(b) => serde_json::Value::Bool(*b),
			Literal::Integer(n) => serde_json::Value::Number((*n).into()),
			// non-finite floats have no JSON form; they cannot come out of a
			// decode so only a hand-built object can hit this
			Literal::Float(f) => serde_json::Value::Number(serde_json::Number::from_f64(*f)?),
			Literal::DateTime(t) => serde_json::Value::String(format_datetime(t)),
			Literal::Duration(d) => serde_json::Value::String(d.as_str().to_string()),
			Literal::LangMap(_) => return None, // handled by encode_slot
		},
	})
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{ActorType, Context, ObjectType};

	#[test]
	fn fields_are_omitted_when_absent_never_null() {
		let json = encode(&Object::new(ObjectType::Note));
		assert_eq!(json, serde_json::json!({ "type": "Note" }));
	}

	#[test]
	fn single_values_of_plural_properties_are_emitted_bare() {
		let obj = Object::new(ObjectType::Note)
			.append("name", Value::string("just one")).unwrap();
		assert_eq!(
			encode(&obj),
			serde_json::json!({ "type": "Note", "name": "just one" }),
		);

		let obj = Object::new(ObjectType::Note)
			.append("name", Value::string("one")).unwrap()
			.append("name", Value::string("two")).unwrap();
		assert_eq!(
			encode(&obj),
			serde_json::json!({ "type": "Note", "name": ["one", "two"] }),
		);
	}

	#[test]
	fn context_id_and_type_come_first() {
		let obj = Object::new(ActorType::Person)
			.set_context(Context::activitystreams())
			.set_id(Some("http://example.org/sally")).unwrap()
			.set_name(Some("Sally"));
		let json = encode(&obj);
		let keys: Vec<&str> = json.as_object().unwrap().keys().map(|x| x.as_str()).collect();
		assert_eq!(keys, ["@context", "id", "type", "name"]);
	}

	#[test]
	fn language_maps_are_emitted_under_the_map_key() {
		let mut langs = indexmap::IndexMap::new();
		langs.insert("en".to_string(), "A simple note".to_string());
		langs.insert("es".to_string(), "Una nota sencilla".to_string());
		let obj = Object::new(ObjectType::Note)
			.append("name", Value::lang_map(langs)).unwrap();
		assert_eq!(
			encode(&obj),
			serde_json::json!({
				"type": "Note",
				"nameMap": { "en": "A simple note", "es": "Una nota sencilla" },
			}),
		);
	}

	#[test]
	fn extra_kind_tags_reappear_as_a_type_array() {
		let obj = Object::new(crate::ActivityType::Activity)
			.push_kind("http://www.verbs.example/Check");
		assert_eq!(
			encode(&obj),
			serde_json::json!({ "type": ["Activity", "http://www.verbs.example/Check"] }),
		);
	}
}
