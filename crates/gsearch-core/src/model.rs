//! Entities returned by the catalogue search endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a catalogue entity.
///
/// The endpoint serialises primary keys either as strings (UUIDs) or as plain
/// integers depending on the model, so both shapes are accepted and compared
/// through their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
	/// Integer primary key.
	Number(i64),
	/// String primary key, usually a UUID.
	Text(String),
}

impl EntityId {
	/// Return the identifier as it appears in URLs.
	#[must_use]
	pub fn as_string(&self) -> String {
		self.to_string()
	}

	fn matches(&self, other: &EntityId) -> bool {
		match (self, other) {
			(Self::Number(a), Self::Number(b)) => a == b,
			(Self::Text(a), Self::Text(b)) => a == b,
			_ => self.to_string() == other.to_string(),
		}
	}
}

impl fmt::Display for EntityId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Number(value) => write!(f, "{value}"),
			Self::Text(value) => f.write_str(value),
		}
	}
}

impl From<&str> for EntityId {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<i64> for EntityId {
	fn from(value: i64) -> Self {
		Self::Number(value)
	}
}

/// A leaf catalogue item belonging to exactly one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
	pub id: EntityId,
	pub name: String,
	#[serde(default)]
	pub images: Vec<String>,
	pub main_product_category: EntityId,
}

impl Product {
	/// Whether this product belongs to the category with the given id.
	#[must_use]
	pub fn belongs_to(&self, category: &EntityId) -> bool {
		self.main_product_category.matches(category)
	}
}

/// A grouping of products, optionally nested under a [`Group`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
	pub id: EntityId,
	pub name: String,
	#[serde(default)]
	pub icon: Option<String>,
	#[serde(default)]
	pub group: Option<EntityId>,
}

/// Top-level grouping of categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
	pub id: EntityId,
	pub name: String,
	#[serde(default)]
	pub icon: Option<String>,
}

/// A well-formed search response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
	pub main_products: Vec<Product>,
	pub main_product_categories: Vec<Category>,
	pub main_product_category_groups: Vec<Group>,
}

impl SearchResponse {
	/// Number of entities across the three result lists.
	///
	/// This is what the result counter shows; it can differ from the number of
	/// rendered rows when products reference categories missing from the
	/// response.
	#[must_use]
	pub fn total(&self) -> usize {
		self.main_products.len()
			+ self.main_product_categories.len()
			+ self.main_product_category_groups.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.total() == 0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ids_accept_strings_and_numbers() {
		let text: EntityId = serde_json::from_str("\"c1\"").expect("string id");
		let number: EntityId = serde_json::from_str("42").expect("numeric id");
		assert_eq!(text, EntityId::from("c1"));
		assert_eq!(number, EntityId::from(42));
		assert_eq!(number.to_string(), "42");
	}

	#[test]
	fn product_membership_tolerates_mixed_id_shapes() {
		let product = Product {
			id: "p1".into(),
			name: "Widget".into(),
			images: Vec::new(),
			main_product_category: EntityId::Text("7".into()),
		};
		assert!(product.belongs_to(&EntityId::Number(7)));
		assert!(!product.belongs_to(&EntityId::Number(8)));
	}

	#[test]
	fn optional_fields_default_when_absent() {
		let category: Category =
			serde_json::from_str(r#"{"id": "c1", "name": "Tools"}"#).expect("category");
		assert_eq!(category.icon, None);
		assert_eq!(category.group, None);

		let product: Product = serde_json::from_str(
			r#"{"id": 1, "name": "Widget", "main_product_category": "c1", "sort": 3}"#,
		)
		.expect("product");
		assert!(product.images.is_empty());
	}

	#[test]
	fn total_sums_all_three_lists() {
		let response = SearchResponse {
			main_products: vec![Product {
				id: "p1".into(),
				name: "Widget".into(),
				images: Vec::new(),
				main_product_category: "missing".into(),
			}],
			main_product_categories: Vec::new(),
			main_product_category_groups: vec![Group {
				id: "g1".into(),
				name: "Waste".into(),
				icon: None,
			}],
		};
		assert_eq!(response.total(), 2);
		assert!(!response.is_empty());
	}
}
