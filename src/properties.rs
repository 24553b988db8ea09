use indexmap::IndexMap;

use crate::schema::{Domain, PropertySpec};
use crate::{Error, Literal, Value};

/// Storage for one property: functional properties hold at most one value,
/// non-functional ones an ordered sequence (order-significant on the wire)
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
	One(Value),
	Many(Vec<Value>),
}

impl Slot {
	pub fn values(&self) -> &[Value] {
		match self {
			Slot::One(v) => std::slice::from_ref(v),
			Slot::Many(v) => v,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			Slot::One(_) => 1,
			Slot::Many(v) => v.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// The named, ordered property set of one object. Writes go through the
/// property's schema entry so allow-lists are enforced at the boundary.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Properties {
	slots: IndexMap<&'static str, Slot>,
}

impl Properties {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.slots.contains_key(name)
	}

	/// first value of a property, if any
	pub fn one(&self, name: &str) -> Option<&Value> {
		self.all(name).first()
	}

	/// every value of a property, in insertion order; empty when unset
	pub fn all(&self, name: &str) -> &[Value] {
		self.slots.get(name).map(Slot::values).unwrap_or_default()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Slot)> {
		self.slots.iter().map(|(k, v)| (*k, v))
	}

	pub fn remove(&mut self, name: &str) -> Option<Slot> {
		self.slots.shift_remove(name)
	}

	/// Overwrite the property with a single value. This is the only write a
	/// functional property accepts.
	pub fn set(&mut self, spec: &'static PropertySpec, value: Value) -> Result<(), Error> {
		check(spec, &value)?;
		let slot = if spec.functional {
			Slot::One(value)
		} else {
			Slot::Many(vec![value])
		};
		self.slots.insert(spec.name, slot);
		Ok(())
	}

	/// Extend a non-functional property, preserving insertion order. On a
	/// functional property this degenerates to an overwrite.
	pub fn append(&mut self, spec: &'static PropertySpec, value: Value) -> Result<(), Error> {
		if spec.functional {
			return self.set(spec, value);
		}
		check(spec, &value)?;
		let slot = self.slots.entry(spec.name).or_insert_with(|| Slot::Many(Vec::new()));
		if let Slot::One(prev) = slot {
			// a non-functional slot only ever holds Many, but keep any
			// stray single value rather than dropping it
			*slot = Slot::Many(vec![prev.clone()]);
		}
		match slot {
			Slot::Many(values) => values.push(value),
			Slot::One(_) => {},
		}
		Ok(())
	}
}

/// Reject writes whose value form does not fit the property's domain, so an
/// [crate::Object] built through the API never encodes to JSON the decoder
/// would refuse.
fn check(spec: &PropertySpec, value: &Value) -> Result<(), Error> {
	let ok = match (&spec.domain, value) {
		(Domain::Object(kinds), Value::Object(obj)) => {
			if !kinds.allows(obj.kind()) {
				return Err(Error::DisallowedKind {
					property: spec.name,
					kind: obj.kind().as_ref().to_string(),
				});
			}
			true
		},
		(Domain::Object(_), Value::Iri(_) | Value::Unknown(_)) => true,
		(Domain::LangString, Value::Literal(Literal::String(_) | Literal::LangMap(_))) => true,
		(Domain::String, Value::Literal(Literal::String(_))) => true,
		(Domain::Iri, Value::Iri(_)) => true,
		(Domain::DateTime, Value::Literal(Literal::DateTime(_))) => true,
		(Domain::Duration, Value::Literal(Literal::Duration(_))) => true,
		(Domain::Boolean, Value::Literal(Literal::Boolean(_))) => true,
		(Domain::Integer, Value::Literal(Literal::Integer(n))) => {
			if *n < 0 {
				return Err(Error::literal(n, "non-negative integer"));
			}
			true
		},
		(Domain::Float, Value::Literal(Literal::Float(_) | Literal::Integer(_))) => true,
		(Domain::Closed, Value::Literal(Literal::Boolean(_) | Literal::DateTime(_))) => true,
		(Domain::Closed, Value::Iri(_) | Value::Object(_) | Value::Unknown(_)) => true,
		_ => false,
	};
	if ok {
		Ok(())
	} else {
		Err(Error::DisallowedValue { property: spec.name, form: form_name(value) })
	}
}

fn form_name(value: &Value) -> &'static str {
	match value {
		Value::Iri(_) => "IRI",
		Value::Object(_) => "object",
		Value::Unknown(_) => "raw JSON",
		Value::Literal(literal) => match literal {
			Literal::String(_) => "string",
			Literal::LangMap(_) => "language map",
			Literal::Boolean(_) => "boolean",
			Literal::Integer(_) => "integer",
			Literal::Float(_) => "float",
			Literal::DateTime(_) => "datetime",
			Literal::Duration(_) => "duration",
		},
	}
}
