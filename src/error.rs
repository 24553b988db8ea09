/// Everything that can go wrong while decoding, encoding or resolving an object.
///
/// Every variant is fatal to the call that produced it: a failed decode never
/// returns a partially populated object.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// decode input was not a JSON object
	#[error("expected a JSON object")]
	NotAnObject,

	/// no usable 'type' or '@type' field on the object
	#[error("object has no usable 'type' field")]
	MissingType,

	/// a 'type' field was present but none of its entries is registered
	#[error("type '{0}' is not registered")]
	UnknownType(String),

	/// an embedded object's kind is outside the property's allow-list
	#[error("kind '{kind}' is not allowed for property '{property}'")]
	DisallowedKind {
		property: &'static str,
		kind: String,
	},

	/// a value's form does not match the property's declared domain
	#[error("property '{property}' does not accept {form} values")]
	DisallowedValue {
		property: &'static str,
		form: &'static str,
	},

	/// malformed IRI, datetime, duration, number or language map
	#[error("cannot parse '{value}' as {expected}")]
	LiteralParse {
		value: String,
		expected: &'static str,
	},

	/// the name is not a recognized property for this object's kind
	#[error("property '{0}' is not part of this object's vocabulary")]
	UnknownProperty(String),

	/// the resolver knows the kind but no handler was registered for it
	#[error("no handler registered for kind '{0}'")]
	NoHandler(String),

	/// a caller-supplied handler failed; carried through unchanged
	#[error("handler failed: {0}")]
	Handler(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
	pub(crate) fn literal(value: impl ToString, expected: &'static str) -> Self {
		Error::LiteralParse {
			value: value.to_string(),
			expected,
		}
	}

	/// wrap an arbitrary handler error so it can cross the resolver boundary
	pub fn handler(err: impl std::error::Error + Send + Sync + 'static) -> Self {
		Error::Handler(Box::new(err))
	}
}
