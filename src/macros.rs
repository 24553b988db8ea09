/// Nested string-enums for vocabulary kind tags: flat variants serialize as their own
/// name, deep variants delegate to an inner enum so sub-vocabularies stay grouped
macro_rules! strenum {
	( $(pub enum $enum_name:ident { $($flat:ident),* ; $($deep:ident($inner:ident)),* };)+ ) => {
		$(
			#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
			pub enum $enum_name {
				$($flat,)*
				$($deep($inner),)*
			}

			impl AsRef<str> for $enum_name {
				fn as_ref(&self) -> &str {
					match self {
						$(Self::$flat => stringify!($flat),)*
						$(Self::$deep(x) => x.as_ref(),)*
					}
				}
			}

			impl TryFrom<&str> for $enum_name {
				type Error = $crate::kind::KindValueError;

				fn try_from(value: &str) -> Result<Self, Self::Error> {
					match value {
						$(stringify!($flat) => Ok(Self::$flat),)*
						_ => {
							$(
								if let Ok(x) = $inner::try_from(value) {
									return Ok(Self::$deep(x));
								}
							)*
							Err($crate::kind::KindValueError)
						},
					}
				}
			}
		)*
	};
}

pub(crate) use strenum;

macro_rules! getter {
	($name:ident -> &str) => {
		pub fn $name(&self) -> Option<&str> {
			self.get(stringify!($name))?.as_str()
		}
	};

	($name:ident::$rename:ident -> &str) => {
		pub fn $name(&self) -> Option<&str> {
			self.get(stringify!($rename))?.as_str()
		}
	};

	($name:ident -> iri) => {
		pub fn $name(&self) -> Option<&str> {
			self.get(stringify!($name))?.as_iri()
		}
	};

	($name:ident -> bool) => {
		pub fn $name(&self) -> Option<bool> {
			self.get(stringify!($name))?.as_bool()
		}
	};

	($name:ident -> u64) => {
		pub fn $name(&self) -> Option<u64> {
			self.get(stringify!($name))?.as_u64()
		}
	};

	($name:ident::$rename:ident -> u64) => {
		pub fn $name(&self) -> Option<u64> {
			self.get(stringify!($rename))?.as_u64()
		}
	};

	($name:ident -> f64) => {
		pub fn $name(&self) -> Option<f64> {
			self.get(stringify!($name))?.as_f64()
		}
	};

	($name:ident -> datetime) => {
		pub fn $name(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
			self.get(stringify!($name))?.as_datetime()
		}
	};

	($name:ident::$rename:ident -> datetime) => {
		pub fn $name(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
			self.get(stringify!($rename))?.as_datetime()
		}
	};

	($name:ident -> duration) => {
		pub fn $name(&self) -> Option<&$crate::Duration> {
			self.get(stringify!($name))?.as_duration()
		}
	};

	($name:ident -> values) => {
		pub fn $name(&self) -> &[$crate::Value] {
			self.all(stringify!($name))
		}
	};

	($name:ident::$rename:ident -> values) => {
		pub fn $name(&self) -> &[$crate::Value] {
			self.all(stringify!($rename))
		}
	};
}

pub(crate) use getter;

macro_rules! setter {
	($name:ident -> &str) => {
		paste::item! {
			pub fn [< set_ $name >](self, val: Option<&str>) -> Self {
				self.put_literal(stringify!($name), val.map(|x| $crate::Literal::String(x.to_string())))
			}
		}
	};

	($name:ident::$rename:ident -> &str) => {
		paste::item! {
			pub fn [< set_ $name >](self, val: Option<&str>) -> Self {
				self.put_literal(stringify!($rename), val.map(|x| $crate::Literal::String(x.to_string())))
			}
		}
	};

	($name:ident -> bool) => {
		paste::item! {
			pub fn [< set_ $name >](self, val: Option<bool>) -> Self {
				self.put_literal(stringify!($name), val.map($crate::Literal::Boolean))
			}
		}
	};

	($name:ident -> u64) => {
		paste::item! {
			pub fn [< set_ $name >](self, val: Option<u64>) -> Self {
				// saturate: a wrapped negative would read back as unset
				self.put_literal(stringify!($name), val.map(|x| $crate::Literal::Integer(i64::try_from(x).unwrap_or(i64::MAX))))
			}
		}
	};

	($name:ident::$rename:ident -> u64) => {
		paste::item! {
			pub fn [< set_ $name >](self, val: Option<u64>) -> Self {
				self.put_literal(stringify!($rename), val.map(|x| $crate::Literal::Integer(i64::try_from(x).unwrap_or(i64::MAX))))
			}
		}
	};

	($name:ident -> f64) => {
		paste::item! {
			pub fn [< set_ $name >](self, val: Option<f64>) -> Self {
				self.put_literal(stringify!($name), val.filter(|x| x.is_finite()).map($crate::Literal::Float))
			}
		}
	};

	($name:ident -> datetime) => {
		paste::item! {
			pub fn [< set_ $name >](self, val: Option<chrono::DateTime<chrono::FixedOffset>>) -> Self {
				self.put_literal(stringify!($name), val.map($crate::Literal::DateTime))
			}
		}
	};

	($name:ident::$rename:ident -> datetime) => {
		paste::item! {
			pub fn [< set_ $name >](self, val: Option<chrono::DateTime<chrono::FixedOffset>>) -> Self {
				self.put_literal(stringify!($rename), val.map($crate::Literal::DateTime))
			}
		}
	};

	($name:ident -> duration) => {
		paste::item! {
			pub fn [< set_ $name >](self, val: Option<$crate::Duration>) -> Self {
				self.put_literal(stringify!($name), val.map($crate::Literal::Duration))
			}
		}
	};

	($name:ident -> iri) => {
		paste::item! {
			pub fn [< set_ $name >](self, val: Option<&str>) -> Result<Self, $crate::Error> {
				match val {
					Some(x) => {
						let iri = $crate::Value::iri(x)?;
						self.set(stringify!($name), iri)
					},
					None => Ok(self.clear(stringify!($name))),
				}
			}
		}
	};
}

pub(crate) use setter;
