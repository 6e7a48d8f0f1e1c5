use anyhow::{Context, Result, anyhow, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

/// On-disk shape of a theme definition.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: StyleTable,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleTable {
	header: StyleSpec,
	row_highlight: StyleSpec,
	prompt: StyleSpec,
	empty: StyleSpec,
	highlight: StyleSpec,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleSpec {
	fg: Option<String>,
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl StyleSpec {
	fn resolve(&self, key: &str) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(parse_color(fg).with_context(|| format!("styles.{key}.fg"))?);
		}
		if let Some(bg) = &self.bg {
			style = style.bg(parse_color(bg).with_context(|| format!("styles.{key}.bg"))?);
		}
		for name in &self.modifiers {
			style = style
				.add_modifier(parse_modifier(name).with_context(|| format!("styles.{key}.modifiers"))?);
		}
		Ok(style)
	}
}

impl StyleTable {
	fn resolve(&self) -> Result<Theme> {
		Ok(Theme {
			header: self.header.resolve("header")?,
			row_highlight: self.row_highlight.resolve("row_highlight")?,
			prompt: self.prompt.resolve("prompt")?,
			empty: self.empty.resolve("empty")?,
			highlight: self.highlight.resolve("highlight")?,
		})
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files: Vec<_> = dir
		.files()
		.filter(|file| file.path().extension().is_some_and(|ext| ext == "toml"))
		.collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut registrations = Vec::with_capacity(files.len());
	let mut default: Option<(String, Theme)> = None;
	for file in files {
		let (registration, is_default) = parse_theme_file(file)?;
		if is_default {
			if let Some((existing, _)) = &default {
				bail!(
					"both `{existing}` and `{}` are marked as the default theme",
					registration.name
				);
			}
			default = Some((registration.name.clone(), registration.theme));
		}
		registrations.push(registration);
	}

	let default_theme = default
		.map(|(_, theme)| theme)
		.or_else(|| registrations.first().map(|registration| registration.theme))
		.ok_or_else(|| anyhow!("no built-in theme definitions were found"))?;

	Ok(BuiltinThemes {
		registrations,
		default_theme,
	})
}

fn parse_theme_file(file: &File) -> Result<(ThemeRegistration, bool)> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{} is not valid UTF-8", path.display()))?;
	parse_theme(contents).with_context(|| format!("invalid theme definition {}", path.display()))
}

fn parse_theme(contents: &str) -> Result<(ThemeRegistration, bool)> {
	let file: ThemeFile = toml::from_str(contents)?;
	let theme = file.styles.resolve()?;
	let registration = file
		.aliases
		.iter()
		.map(|alias| alias.trim())
		.filter(|alias| !alias.is_empty())
		.fold(ThemeRegistration::new(file.name.trim(), theme), |registration, alias| {
			registration.alias(alias)
		});
	Ok((registration, file.default))
}

/// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)`, an ANSI index and the named
/// terminal colours.
fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		return parse_hex(hex);
	}
	if let Some(body) = value.strip_prefix("rgb(").and_then(|rest| rest.strip_suffix(')')) {
		let parts: Vec<_> = body.split(',').map(str::trim).collect();
		let [r, g, b] = parts.as_slice() else {
			bail!("rgb() takes three components, got {}", parts.len());
		};
		let channel = |part: &str| {
			part.parse::<u8>()
				.with_context(|| format!("invalid rgb component `{part}`"))
		};
		return Ok(Color::Rgb(channel(*r)?, channel(*g)?, channel(*b)?));
	}
	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	let color = match normalise_key(value).as_str() {
		"reset" | "default" | "none" => Color::Reset,
		"black" => Color::Black,
		"red" => Color::Red,
		"green" => Color::Green,
		"yellow" => Color::Yellow,
		"blue" => Color::Blue,
		"magenta" => Color::Magenta,
		"cyan" => Color::Cyan,
		"gray" | "grey" => Color::Gray,
		"dark_gray" | "dark_grey" => Color::DarkGray,
		"light_red" => Color::LightRed,
		"light_green" => Color::LightGreen,
		"light_yellow" => Color::LightYellow,
		"light_blue" => Color::LightBlue,
		"light_magenta" => Color::LightMagenta,
		"light_cyan" => Color::LightCyan,
		"white" => Color::White,
		other => bail!("unknown colour `{other}`"),
	};
	Ok(color)
}

fn parse_hex(hex: &str) -> Result<Color> {
	let digits: String = match hex.len() {
		3 => hex.chars().flat_map(|ch| [ch, ch]).collect(),
		6 => hex.to_string(),
		_ => bail!("hex colours must have 3 or 6 digits, got `#{hex}`"),
	};
	let value =
		u32::from_str_radix(&digits, 16).with_context(|| format!("invalid hex colour `#{hex}`"))?;
	Ok(Color::from_u32(value))
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	let modifier = match normalise_key(input).as_str() {
		"bold" => Modifier::BOLD,
		"dim" => Modifier::DIM,
		"italic" => Modifier::ITALIC,
		"underline" | "underlined" => Modifier::UNDERLINED,
		"reverse" | "reversed" => Modifier::REVERSED,
		"crossed_out" | "strikethrough" => Modifier::CROSSED_OUT,
		other => bail!("unknown modifier `{other}`"),
	};
	Ok(modifier)
}

fn normalise_key(value: &str) -> String {
	value.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

#[cfg(test)]
mod tests {
	use super::*;

	const MINIMAL: &str = r##"
name = "test"
aliases = ["t", " "]

[styles.header]
fg = "#fff"
modifiers = ["bold"]

[styles.row_highlight]
bg = "rgb(1, 2, 3)"

[styles.prompt]
fg = "light-blue"

[styles.empty]
fg = "244"

[styles.highlight]
fg = "#e0af68"
"##;

	#[test]
	fn parses_a_theme_definition() {
		let (registration, is_default) = parse_theme(MINIMAL).expect("theme");
		assert!(!is_default);
		assert_eq!(registration.name, "test");
		assert_eq!(registration.aliases, vec!["t".to_string()]);

		let theme = registration.theme;
		assert_eq!(theme.header.fg, Some(Color::Rgb(255, 255, 255)));
		assert!(theme.header.add_modifier.contains(Modifier::BOLD));
		assert_eq!(theme.row_highlight.bg, Some(Color::Rgb(1, 2, 3)));
		assert_eq!(theme.prompt.fg, Some(Color::LightBlue));
		assert_eq!(theme.empty.fg, Some(Color::Indexed(244)));
		assert_eq!(theme.highlight.fg, Some(Color::Rgb(0xe0, 0xaf, 0x68)));
	}

	#[test]
	fn rejects_unknown_colours_and_modifiers() {
		assert!(parse_color("chartreuse-ish").is_err());
		assert!(parse_color("#12345").is_err());
		assert!(parse_color("rgb(1, 2)").is_err());
		assert!(parse_modifier("sparkly").is_err());
	}

	#[test]
	fn missing_style_sections_are_errors() {
		let broken = MINIMAL.replace("[styles.highlight]", "[styles.other]");
		assert!(parse_theme(&broken).is_err());
	}

	#[test]
	fn bundled_themes_load_with_one_default() {
		let builtins =
			load_builtin_themes(&super::super::BUILTIN_THEME_DIR).expect("builtin themes");
		assert!(builtins.registrations.len() >= 2);
		let slate = builtins
			.registrations
			.iter()
			.find(|registration| registration.name == "slate")
			.expect("slate theme");
		assert_eq!(builtins.default_theme, slate.theme);
	}
}
