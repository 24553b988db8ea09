use indexmap::IndexMap;

use crate::value::validate_iri;
use crate::{schema, BaseType, Context, Error, Literal, Properties, Registry, Value};

/// One vocabulary object: a kind tag, an optional id, the typed property set,
/// and whatever the wire carried that we do not interpret (extra type tags,
/// unrecognized keys), retained verbatim for round-tripping.
///
/// Built either through the API (`Object::new` plus setters) or by
/// [crate::Deserializer::decode]; decoded objects are only ever changed through
/// explicit setter calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
	context: Context,
	id: Option<String>,
	kind: BaseType,
	kinds: Vec<String>,
	properties: Properties,
	unknown: IndexMap<String, serde_json::Value>,
}

impl Object {
	pub fn new(kind: impl Into<BaseType>) -> Self {
		let kind = kind.into();
		Object {
			context: Context::new(),
			id: None,
			kind,
			kinds: vec![kind.as_ref().to_string()],
			properties: Properties::new(),
			unknown: IndexMap::new(),
		}
	}

	pub(crate) fn with_kinds(kind: BaseType, kinds: Vec<String>) -> Self {
		Object { kinds, ..Object::new(kind) }
	}

	pub fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	pub fn set_id(mut self, val: Option<&str>) -> Result<Self, Error> {
		match val {
			Some(iri) => {
				validate_iri(iri)?;
				self.id = Some(iri.to_string());
			},
			None => self.id = None,
		}
		Ok(self)
	}

	/// the resolved kind tag
	pub fn kind(&self) -> BaseType {
		self.kind
	}

	/// every wire type tag, in order, including unregistered extension names
	pub fn kinds(&self) -> &[String] {
		&self.kinds
	}

	/// retain an extra type tag (e.g. an extension IRI) next to the kind
	pub fn push_kind(mut self, raw: impl Into<String>) -> Self {
		self.kinds.push(raw.into());
		self
	}

	pub fn context(&self) -> &Context {
		&self.context
	}

	pub fn set_context(mut self, context: Context) -> Self {
		self.context = context;
		self
	}

	pub fn properties(&self) -> &Properties {
		&self.properties
	}

	pub(crate) fn properties_mut(&mut self) -> &mut Properties {
		&mut self.properties
	}

	/// unrecognized wire keys, never interpreted, re-emitted verbatim
	pub fn unknown_properties(&self) -> &IndexMap<String, serde_json::Value> {
		&self.unknown
	}

	pub(crate) fn unknown_mut(&mut self) -> &mut IndexMap<String, serde_json::Value> {
		&mut self.unknown
	}

	/// stash a raw extension field for round-tripping
	pub fn set_unknown(mut self, key: impl Into<String>, raw: serde_json::Value) -> Self {
		self.unknown.insert(key.into(), raw);
		self
	}

	/// first value of a property, if any
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.properties.one(name)
	}

	/// every value of a property, in insertion order
	pub fn all(&self, name: &str) -> &[Value] {
		self.properties.all(name)
	}

	/// Overwrite a property with a single value. Fails when the name is not in
	/// this kind's vocabulary or the value's kind is outside the allow-list.
	pub fn set(mut self, name: &str, value: Value) -> Result<Self, Error> {
		let spec = schema::property(self.kind, name)
			.ok_or_else(|| Error::UnknownProperty(name.to_string()))?;
		self.properties.set(spec, value)?;
		Ok(self)
	}

	/// Extend a non-functional property, same checks as [Object::set]
	pub fn append(mut self, name: &str, value: Value) -> Result<Self, Error> {
		let spec = schema::property(self.kind, name)
			.ok_or_else(|| Error::UnknownProperty(name.to_string()))?;
		self.properties.append(spec, value)?;
		Ok(self)
	}

	/// drop a property entirely
	pub fn clear(mut self, name: &str) -> Self {
		self.properties.remove(name);
		self
	}

	/// infallible literal write used by the generated setters: unknown names
	/// are logged and skipped, None clears
	pub(crate) fn put_literal(mut self, name: &str, val: Option<Literal>) -> Self {
		let Some(spec) = schema::property(self.kind, name) else {
			tracing::warn!("cannot set '{name}' on a {}: not in its vocabulary", self.kind.as_ref());
			return self;
		};
		match val {
			Some(literal) => {
				// generated setters pass the literal form their domain expects,
				// so a rejection here means the catalog entry changed under us
				if self.properties.set(spec, Value::Literal(literal)).is_err() {
					tracing::error!("literal write to '{name}' rejected");
				}
			},
			None => {
				self.properties.remove(name);
			},
		}
		self
	}

	/// serialize back to a JSON map, see [crate::encode]
	pub fn to_json(&self) -> serde_json::Value {
		crate::encode(self)
	}

	/// decode a JSON value with the given registry, see [crate::Deserializer]
	pub fn from_json(registry: &Registry, value: &serde_json::Value) -> Result<Self, Error> {
		crate::Deserializer::new(registry).decode(value)
	}
}
