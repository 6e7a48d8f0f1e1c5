use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use tracing::warn;

use super::builtins;
use super::types::{Theme, ThemeDescriptor, ThemeRegistration};

#[derive(Debug)]
struct ThemeEntry {
	display_name: String,
	theme: Theme,
	aliases: Vec<String>,
}

#[derive(Debug, Default)]
struct ThemeRegistry {
	canonical: BTreeMap<String, ThemeEntry>,
	aliases: HashMap<String, String>,
}

impl ThemeRegistry {
	fn register(&mut self, registration: ThemeRegistration) {
		let ThemeRegistration {
			name,
			theme,
			aliases,
		} = registration;
		let normalized = normalize_name(&name);

		let mut accepted = Vec::new();
		for alias in aliases {
			let alias_normalized = normalize_name(&alias);
			if alias_normalized == normalized {
				continue;
			}
			match self.aliases.get(&alias_normalized) {
				Some(existing) if existing != &normalized => {
					warn!(%alias, %existing, attempted = %name, "theme alias already taken");
				}
				_ => {
					self.aliases
						.insert(alias_normalized, normalized.clone());
					accepted.push(alias);
				}
			}
		}
		accepted.sort_unstable_by_key(|alias| alias.to_ascii_lowercase());

		self.canonical.insert(
			normalized,
			ThemeEntry {
				display_name: name,
				theme,
				aliases: accepted,
			},
		);
	}

	fn get(&self, name: &str) -> Option<Theme> {
		let normalized = normalize_name(name);
		if let Some(entry) = self.canonical.get(&normalized) {
			return Some(entry.theme);
		}
		let target = self.aliases.get(&normalized)?;
		self.canonical.get(target).map(|entry| entry.theme)
	}
}

fn registry() -> &'static ThemeRegistry {
	static REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();
	REGISTRY.get_or_init(|| {
		let mut registry = ThemeRegistry::default();
		for registration in builtins::registrations() {
			registry.register(registration);
		}
		registry
	})
}

fn normalize_name(name: &str) -> String {
	name.trim()
		.to_ascii_lowercase()
		.replace([' ', '_'], "-")
}

/// Lookup a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	registry().get(name)
}

/// Return the canonical theme names, sorted case-insensitively.
#[must_use]
pub fn names() -> Vec<String> {
	let mut names: Vec<_> = registry()
		.canonical
		.values()
		.map(|entry| entry.display_name.clone())
		.collect();
	names.sort_unstable_by_key(|name| name.to_ascii_lowercase());
	names
}

/// Produce descriptors for every known theme.
#[must_use]
pub fn descriptors() -> Vec<ThemeDescriptor> {
	let mut descriptors: Vec<_> = registry()
		.canonical
		.values()
		.map(|entry| ThemeDescriptor {
			name: entry.display_name.clone(),
			aliases: entry.aliases.clone(),
			theme: entry.theme,
		})
		.collect();
	descriptors.sort_unstable_by(|a, b| {
		a.name
			.to_ascii_lowercase()
			.cmp(&b.name.to_ascii_lowercase())
	});
	descriptors
}
