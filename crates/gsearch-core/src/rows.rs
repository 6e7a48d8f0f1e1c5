//! Grouping of a search response into display rows.
//!
//! [`render_rows`] is a pure function of the response and the link builder,
//! which keeps the grouping and labelling rules testable without a terminal.

use serde::Serialize;

use crate::links::Links;
use crate::model::SearchResponse;

/// Text of the single row shown for a well-formed but empty response.
pub const NO_RESULTS_LABEL: &str = "No results found";

/// What a row stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
	Category,
	Product,
	Group,
	/// Informational row without a link target.
	Notice,
}

impl RowKind {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Category => "category",
			Self::Product => "product",
			Self::Group => "group",
			Self::Notice => "notice",
		}
	}
}

/// One rendered entry of the results overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
	pub kind: RowKind,
	pub label: String,
	pub icon: Option<String>,
	pub link: Option<String>,
	/// Nesting depth; products sit one level under their category.
	pub indent: u8,
}

impl ResultRow {
	/// Whether selecting this row leads anywhere.
	#[must_use]
	pub fn is_navigable(&self) -> bool {
		self.link.is_some()
	}
}

/// Ordered rows of the overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RowList {
	rows: Vec<ResultRow>,
}

impl RowList {
	/// The literal placeholder shown for an empty result set.
	#[must_use]
	pub fn no_results() -> Self {
		Self {
			rows: vec![ResultRow {
				kind: RowKind::Notice,
				label: NO_RESULTS_LABEL.to_string(),
				icon: None,
				link: None,
				indent: 0,
			}],
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&ResultRow> {
		self.rows.get(index)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, ResultRow> {
		self.rows.iter()
	}

	pub fn clear(&mut self) {
		self.rows.clear();
	}
}

impl<'a> IntoIterator for &'a RowList {
	type Item = &'a ResultRow;
	type IntoIter = std::slice::Iter<'a, ResultRow>;

	fn into_iter(self) -> Self::IntoIter {
		self.rows.iter()
	}
}

/// Build the overlay rows for a response.
///
/// Categories come first in response order, each followed by its products
/// (indented, in response order). Groups follow as `All <name>` rows.
/// Products whose category is absent from the response produce no row.
#[must_use]
pub fn render_rows(response: &SearchResponse, links: &Links) -> RowList {
	let mut rows = Vec::with_capacity(response.total());

	for category in &response.main_product_categories {
		rows.push(ResultRow {
			kind: RowKind::Category,
			label: category.name.clone(),
			icon: category.icon.clone(),
			link: Some(links.category_listing(&category.id)),
			indent: 0,
		});

		let products = response
			.main_products
			.iter()
			.filter(|product| product.belongs_to(&category.id));
		for product in products {
			let icon = product
				.images
				.first()
				.cloned()
				.or_else(|| category.icon.clone());
			rows.push(ResultRow {
				kind: RowKind::Product,
				label: product.name.clone(),
				icon,
				link: Some(links.product_options(&product.id)),
				indent: 1,
			});
		}
	}

	for group in &response.main_product_category_groups {
		rows.push(ResultRow {
			kind: RowKind::Group,
			label: format!("All {}", group.name),
			icon: group.icon.clone(),
			link: Some(links.group_listing(&group.id)),
			indent: 0,
		});
	}

	RowList { rows }
}
