//! Conjunctive filter predicates evaluated against stored items during a scan.

use std::cmp::Ordering;

use serde_json::Value;

use crate::item::{AttrValue, Item};

/// A leaf condition on one attribute. A missing attribute or a kind mismatch never matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Condition {
	Exists { attr: String },
	Eq { attr: String, value: AttrValue },
	Contains { attr: String, value: String },
	Between { attr: String, low: AttrValue, high: AttrValue },
	Lte { attr: String, value: AttrValue },
}
impl Condition {
	pub fn attr(&self) -> &str {
		match self {
			Self::Exists { attr }
			| Self::Eq { attr, .. }
			| Self::Contains { attr, .. }
			| Self::Between { attr, .. }
			| Self::Lte { attr, .. } => attr,
		}
	}

	fn op(&self) -> &'static str {
		match self {
			Self::Exists { .. } => "exists",
			Self::Eq { .. } => "eq",
			Self::Contains { .. } => "contains",
			Self::Between { .. } => "between",
			Self::Lte { .. } => "lte",
		}
	}

	pub fn to_value(&self) -> Value {
		match self {
			Self::Exists { attr } => serde_json::json!({ "op": "exists", "field": attr }),
			Self::Eq { attr, value } | Self::Lte { attr, value } => {
				serde_json::json!({ "op": self.op(), "field": attr, "value": value.to_json() })
			},
			Self::Contains { attr, value } => {
				serde_json::json!({ "op": "contains", "field": attr, "value": value })
			},
			Self::Between { attr, low, high } => serde_json::json!({
				"op": "between",
				"field": attr,
				"value": [low.to_json(), high.to_json()],
			}),
		}
	}

	pub fn matches(&self, item: &Item) -> bool {
		let Some(stored) = item.get(self.attr()) else {
			return false;
		};

		match self {
			Self::Exists { .. } => !stored.is_null(),
			Self::Eq { value, .. } => stored.compare(value) == Some(Ordering::Equal),
			Self::Contains { value, .. } =>
				stored.as_str().is_some_and(|text| text.contains(value.as_str())),
			Self::Between { low, high, .. } => matches!(
				(stored.compare(low), stored.compare(high)),
				(Some(Ordering::Greater | Ordering::Equal), Some(Ordering::Less | Ordering::Equal))
			),
			Self::Lte { value, .. } =>
				matches!(stored.compare(value), Some(Ordering::Less | Ordering::Equal)),
		}
	}
}

/// Leaf conditions joined by AND.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Predicate {
	conditions: Vec<Condition>,
}
impl Predicate {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn and(mut self, condition: Condition) -> Self {
		self.conditions.push(condition);

		self
	}

	pub fn conditions(&self) -> &[Condition] {
		&self.conditions
	}

	/// Returns whether the item passes, and the first failing condition otherwise.
	pub fn evaluate(&self, item: &Item) -> (bool, Option<String>) {
		for condition in &self.conditions {
			if !condition.matches(item) {
				return (false, Some(format!("{}:{}", condition.op(), condition.attr())));
			}
		}

		(true, None)
	}

	pub fn matches(&self, item: &Item) -> bool {
		self.evaluate(item).0
	}

	pub fn to_value(&self) -> Value {
		serde_json::json!({
			"op": "and",
			"args": Value::Array(self.conditions.iter().map(Condition::to_value).collect()),
		})
	}
}
