use std::collections::HashMap;

use crate::{BaseType, Deserializer, Error, Object, Registry};

type Handler<C> = Box<dyn Fn(&C, Object) -> Result<(), Error> + Send + Sync>;

/// Dispatches a raw JSON object to exactly one caller-supplied handler, chosen
/// by the object's discovered kind: decode, look the kind up among the
/// registered handlers, invoke the match.
///
/// `C` is an opaque caller context threaded through to handlers untouched
/// (a cancellation token, a database handle, unit). Nothing here blocks, so
/// the resolver itself never inspects it.
///
/// ```
/// use astreams::{ObjectType, Registry, Resolver};
///
/// let registry = Registry::activitystreams();
/// let resolver = Resolver::new(&registry)
/// 	.on(ObjectType::Note, |_: &(), note| {
/// 		println!("got note {:?}", note.id());
/// 		Ok(())
/// 	});
/// resolver.resolve(&(), &serde_json::json!({"type": "Note"})).unwrap();
/// ```
pub struct Resolver<'r, C = ()> {
	registry: &'r Registry,
	handlers: HashMap<BaseType, Handler<C>>,
}

impl<'r, C> Resolver<'r, C> {
	pub fn new(registry: &'r Registry) -> Self {
		Resolver {
			registry,
			handlers: HashMap::new(),
		}
	}

	/// Register the handler for one kind; at most one handler per kind, a
	/// second registration replaces the first.
	pub fn on<K, F>(mut self, kind: K, handler: F) -> Self
	where
		K: Into<BaseType>,
		F: Fn(&C, Object) -> Result<(), Error> + Send + Sync + 'static,
	{
		self.handlers.insert(kind.into(), Box::new(handler));
		self
	}

	pub fn handles(&self, kind: impl Into<BaseType>) -> bool {
		self.handlers.contains_key(&kind.into())
	}

	/// Decode `value` and invoke the one handler registered for its kind.
	/// Decode errors propagate unchanged; a known kind without a handler is
	/// [Error::NoHandler]; a handler's own error comes back as-is.
	pub fn resolve(&self, cx: &C, value: &serde_json::Value) -> Result<(), Error> {
		let obj = Deserializer::new(self.registry).decode(value)?;
		let kind = obj.kind();
		match self.handlers.get(&kind) {
			Some(handler) => {
				tracing::trace!("dispatching {} to its handler", kind.as_ref());
				handler(cx, obj)
			},
			None => Err(Error::NoHandler(kind.as_ref().to_string())),
		}
	}
}
