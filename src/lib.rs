mod macros;
pub(crate) use macros::{strenum, getter, setter};

mod error;
pub use error::Error;

mod kind;
pub use kind::{
	ActivityType, ActorType, BaseType, CollectionType, DocumentType,
	IntransitiveActivityType, LinkType, ObjectType,
};

mod context;
pub use context::{Context, ContextEntry, ACTIVITYSTREAMS};

mod literal;
pub use literal::{Duration, Literal};

mod value;
pub use value::Value;

mod properties;
pub use properties::{Properties, Slot};

mod schema;
pub use schema::{Domain, KindSet, PropertySpec};

mod registry;
pub use registry::Registry;

mod object;
pub use object::Object;

mod decode;
pub use decode::Deserializer;

mod encode;
pub use encode::encode;

mod resolver;
pub use resolver::Resolver;

mod shortcuts;
