use indexmap::IndexMap;

use crate::Error;

/// One typed literal value: the closed set of primitive forms a property can
/// carry besides IRIs and embedded objects.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
	String(String),
	/// rdf:langString, a map of BCP47 language tag -> text
	LangMap(IndexMap<String, String>),
	Boolean(bool),
	Integer(i64),
	Float(f64),
	DateTime(chrono::DateTime<chrono::FixedOffset>),
	Duration(Duration),
}

/// An `xsd:duration`. Components are parsed out for validation and arithmetic
/// but the original lexical form is kept and re-emitted verbatim, so decoding
/// never changes how a duration looks on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct Duration {
	raw: String,
	negative: bool,
	years: u64,
	months: u64,
	days: u64,
	hours: u64,
	minutes: u64,
	seconds: f64,
}

impl Duration {
	pub fn as_str(&self) -> &str {
		&self.raw
	}

	pub fn is_negative(&self) -> bool {
		self.negative
	}

	/// Total length in seconds, approximating a month as 30 days and a year
	/// as 365 days. Nominal durations have no exact second length, this is
	/// only meant for ordering and display.
	pub fn num_seconds(&self) -> i64 {
		let magnitude = self.seconds
			+ 60.0 * self.minutes as f64
			+ 3600.0 * self.hours as f64
			+ 86400.0 * (self.days + 30 * self.months + 365 * self.years) as f64;
		if self.negative { -magnitude as i64 } else { magnitude as i64 }
	}
}

impl std::fmt::Display for Duration {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.raw)
	}
}

impl std::str::FromStr for Duration {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let fail = || Error::literal(s, "xsd:duration");
		let mut out = Duration {
			raw: s.to_string(),
			negative: false,
			years: 0,
			months: 0,
			days: 0,
			hours: 0,
			minutes: 0,
			seconds: 0.0,
		};

		let mut rest = s;
		if let Some(tail) = rest.strip_prefix('-') {
			out.negative = true;
			rest = tail;
		}
		rest = rest.strip_prefix('P').ok_or_else(fail)?;
		if rest.is_empty() {
			return Err(fail());
		}

		let mut in_time = false;
		let mut seen = false;
		while !rest.is_empty() {
			if let Some(tail) = rest.strip_prefix('T') {
				if in_time || tail.is_empty() {
					return Err(fail());
				}
				in_time = true;
				rest = tail;
				continue;
			}

			let digits = rest
				.find(|c: char| !c.is_ascii_digit() && c != '.')
				.ok_or_else(fail)?;
			if digits == 0 {
				return Err(fail());
			}
			let (number, tail) = rest.split_at(digits);
			let mut chars = tail.chars();
			let designator = chars.next().ok_or_else(fail)?;
			rest = chars.as_str();
			seen = true;

			let whole = || number.parse::<u64>().map_err(|_| fail());
			match (in_time, designator) {
				(false, 'Y') => out.years = whole()?,
				(false, 'M') => out.months = whole()?,
				(false, 'D') => out.days = whole()?,
				(true, 'H') => out.hours = whole()?,
				(true, 'M') => out.minutes = whole()?,
				(true, 'S') => out.seconds = number.parse::<f64>().map_err(|_| fail())?,
				_ => return Err(fail()),
			}
		}

		if !seen {
			return Err(fail());
		}
		Ok(out)
	}
}

pub(crate) fn parse_datetime(s: &str) -> Result<chrono::DateTime<chrono::FixedOffset>, Error> {
	chrono::DateTime::parse_from_rfc3339(s)
		.map_err(|_| Error::literal(s, "xsd:dateTime"))
}

/// RFC 3339 text, `Z` for UTC, fractional seconds only when present: matches
/// how every ActivityStreams fixture writes timestamps
pub(crate) fn format_datetime(t: &chrono::DateTime<chrono::FixedOffset>) -> String {
	t.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true)
}
