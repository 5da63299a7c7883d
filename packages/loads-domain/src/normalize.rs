//! Location and date normalization used when compiling search criteria.

use time::{
	Date, OffsetDateTime, PrimitiveDateTime,
	format_description::{BorrowedFormatItem, well_known::Rfc3339},
	macros::format_description,
};

const DAY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const LOCAL_FORMATS: [&[BorrowedFormatItem<'static>]; 6] = [
	format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
	format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
	format_description!("[year]-[month]-[day]T[hour]:[minute]"),
	format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
	format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
	format_description!("[year]-[month]-[day] [hour]:[minute]"),
];
const OFFSET_FORMATS: [&[BorrowedFormatItem<'static>]; 2] = [
	format_description!(
		"[year]-[month]-[day] [hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
	),
	format_description!(
		"[year]-[month]-[day]T[hour]:[minute][offset_hour sign:mandatory]:[offset_minute]"
	),
];
const DAY_TOKEN_CHARS: usize = 10;

/// Returns the lowercase city token of a `"City, ST"` or bare `"City"` location.
pub fn city_only(location: &str) -> String {
	location.split(',').next().unwrap_or_default().trim().to_lowercase()
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
pub fn title_case(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	let mut in_word = false;

	for ch in text.chars() {
		if ch.is_alphabetic() {
			if in_word {
				out.extend(ch.to_lowercase());
			} else {
				out.extend(ch.to_uppercase());
			}

			in_word = true;
		} else {
			out.push(ch);

			in_word = false;
		}
	}

	out
}

/// Expands an instant into the inclusive `[00:00:00Z, 23:59:59Z]` bucket of its calendar day.
///
/// The day is taken as written, without shifting the instant to UTC. Input that does not parse
/// falls back to its first ten characters as the day token.
pub fn date_range(instant: &str) -> (String, String) {
	let day = parse_day(instant.trim())
		.and_then(|date| date.format(DAY_FORMAT).ok())
		.unwrap_or_else(|| instant.chars().take(DAY_TOKEN_CHARS).collect());

	(format!("{day}T00:00:00Z"), format!("{day}T23:59:59Z"))
}

fn parse_day(instant: &str) -> Option<Date> {
	if let Ok(parsed) = OffsetDateTime::parse(instant, &Rfc3339) {
		return Some(parsed.date());
	}

	for format in OFFSET_FORMATS {
		if let Ok(parsed) = OffsetDateTime::parse(instant, format) {
			return Some(parsed.date());
		}
	}
	for format in LOCAL_FORMATS {
		if let Ok(parsed) = PrimitiveDateTime::parse(instant, format) {
			return Some(parsed.date());
		}
	}

	Date::parse(instant, DAY_FORMAT).ok()
}
