use indexmap::IndexMap;

use crate::{Duration, Error, Literal, Object};

/// One property value: an IRI reference, a typed literal, an embedded object,
/// or the raw JSON of an object whose type is not registered (kept only so it
/// can round-trip).
///
/// Exactly one variant is ever populated; which variants a property accepts is
/// decided by its schema entry, enforced when the value is bound to a property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Iri(String),
	Literal(Literal),
	Object(Box<Object>),
	Unknown(serde_json::Value),
}

impl Value {
	/// reference by IRI; fails with [Error::LiteralParse] when the text is not
	/// a valid absolute IRI. The original text is stored, not the parsed form.
	pub fn iri(s: impl Into<String>) -> Result<Self, Error> {
		let s = s.into();
		validate_iri(&s)?;
		Ok(Value::Iri(s))
	}

	pub fn object(obj: Object) -> Self {
		Value::Object(Box::new(obj))
	}

	pub fn unknown(raw: serde_json::Value) -> Self {
		Value::Unknown(raw)
	}

	pub fn string(s: impl Into<String>) -> Self {
		Value::Literal(Literal::String(s.into()))
	}

	pub fn lang_map(map: IndexMap<String, String>) -> Self {
		Value::Literal(Literal::LangMap(map))
	}

	pub fn is_iri(&self) -> bool {
		matches!(self, Value::Iri(_))
	}

	pub fn is_literal(&self) -> bool {
		matches!(self, Value::Literal(_))
	}

	pub fn is_object(&self) -> bool {
		matches!(self, Value::Object(_))
	}

	pub fn is_unknown(&self) -> bool {
		matches!(self, Value::Unknown(_))
	}

	pub fn as_iri(&self) -> Option<&str> {
		match self {
			Value::Iri(x) => Some(x),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::Literal(Literal::String(x)) => Some(x),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Literal(Literal::Boolean(x)) => Some(*x),
			_ => None,
		}
	}

	pub fn as_u64(&self) -> Option<u64> {
		match self {
			Value::Literal(Literal::Integer(x)) => u64::try_from(*x).ok(),
			_ => None,
		}
	}

	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Value::Literal(Literal::Float(x)) => Some(*x),
			Value::Literal(Literal::Integer(x)) => Some(*x as f64),
			_ => None,
		}
	}

	pub fn as_datetime(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
		match self {
			Value::Literal(Literal::DateTime(x)) => Some(*x),
			_ => None,
		}
	}

	pub fn as_duration(&self) -> Option<&Duration> {
		match self {
			Value::Literal(Literal::Duration(x)) => Some(x),
			_ => None,
		}
	}

	pub fn as_lang_map(&self) -> Option<&IndexMap<String, String>> {
		match self {
			Value::Literal(Literal::LangMap(x)) => Some(x),
			_ => None,
		}
	}

	pub fn as_object(&self) -> Option<&Object> {
		match self {
			Value::Object(x) => Some(x),
			_ => None,
		}
	}

	/// id of the referenced entity, whether held by IRI or embedded
	pub fn id(&self) -> Option<&str> {
		match self {
			Value::Iri(x) => Some(x),
			Value::Object(x) => x.id(),
			_ => None,
		}
	}
}

impl From<Literal> for Value {
	fn from(value: Literal) -> Self {
		Value::Literal(value)
	}
}

impl From<Object> for Value {
	fn from(value: Object) -> Self {
		Value::Object(Box::new(value))
	}
}

pub(crate) fn validate_iri(s: &str) -> Result<(), Error> {
	url::Url::parse(s)
		.map(|_| ())
		.map_err(|_| Error::literal(s, "IRI"))
}
