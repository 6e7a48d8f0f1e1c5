//! Navigation targets for rendered result rows.

use crate::model::EntityId;

/// Default base URL of the ordering portal the rows link into.
pub const DEFAULT_PORTAL_BASE: &str = "https://portal.trydownstream.com/customer/order/new";

/// Builds portal URLs for each kind of catalogue entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
	portal_base: String,
}

impl Default for Links {
	fn default() -> Self {
		Self::new(DEFAULT_PORTAL_BASE)
	}
}

impl Links {
	/// Create a link builder rooted at `portal_base`. Trailing slashes are
	/// dropped so the generated paths never contain `//`.
	#[must_use]
	pub fn new(portal_base: impl Into<String>) -> Self {
		let mut portal_base = portal_base.into();
		while portal_base.ends_with('/') {
			portal_base.pop();
		}
		Self { portal_base }
	}

	#[must_use]
	pub fn portal_base(&self) -> &str {
		&self.portal_base
	}

	/// Listing of every category inside a group.
	#[must_use]
	pub fn group_listing(&self, group: &EntityId) -> String {
		format!(
			"{}/?q=&group_id={}",
			self.portal_base,
			urlencoding::encode(&group.as_string())
		)
	}

	/// Product listing page of a single category.
	#[must_use]
	pub fn category_listing(&self, category: &EntityId) -> String {
		format!(
			"{}/product/{}/",
			self.portal_base,
			urlencoding::encode(&category.as_string())
		)
	}

	/// Option detail page of a single product.
	#[must_use]
	pub fn product_options(&self, product: &EntityId) -> String {
		format!(
			"{}/options/{}/",
			self.portal_base,
			urlencoding::encode(&product.as_string())
		)
	}
}
