//! Semantic 8-role palette and seed-based derivation.

use std::fmt;

use super::color::{clamp, Color};

/// The fixed semantic roles of a palette, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Bg,
    Surface,
    Primary,
    Secondary,
    Accent,
    Text,
    Muted,
    Highlight,
}

impl Role {
    /// All roles in their fixed display order.
    pub const ALL: [Role; 8] = [
        Role::Bg,
        Role::Surface,
        Role::Primary,
        Role::Secondary,
        Role::Accent,
        Role::Text,
        Role::Muted,
        Role::Highlight,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Role::Bg => "bg",
            Role::Surface => "surface",
            Role::Primary => "primary",
            Role::Secondary => "secondary",
            Role::Accent => "accent",
            Role::Text => "text",
            Role::Muted => "muted",
            Role::Highlight => "highlight",
        }
    }

    const fn index(self) -> usize {
        match self {
            Role::Bg => 0,
            Role::Surface => 1,
            Role::Primary => 2,
            Role::Secondary => 3,
            Role::Accent => 4,
            Role::Text => 5,
            Role::Muted => 6,
            Role::Highlight => 7,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A complete color scheme: one color per role, always all 8 present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; 8],
}

impl Palette {
    /// Build a palette from colors listed in `Role::ALL` order.
    pub const fn new(colors: [Color; 8]) -> Self {
        Self { colors }
    }

    pub fn get(&self, role: Role) -> Color {
        self.colors[role.index()]
    }

    /// Iterate `(role, color)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (Role, Color)> + '_ {
        Role::ALL.iter().map(move |&role| (role, self.get(role)))
    }

    /// Derive a full scheme from one seed color.
    ///
    /// Each role is a fixed hue/saturation/lightness transform of the seed.
    /// The multipliers below are the contract: palettes are regression-tested
    /// against them, so changing any value changes every generated theme.
    pub fn from_seed(seed: Color) -> Self {
        let (h, s, l) = seed.to_hsl();

        let derive = |h: f64, s: f64, l: f64| Color::from_hsl(h, clamp(s, 0.0, 1.0), l);

        Self::new([
            // bg: same hue, heavily desaturated, near-black (lightness capped)
            derive(h, s * 0.3, clamp(l * 0.12, 0.0, 0.1)),
            // surface: slightly lighter shade of bg
            derive(h, s * 0.35, clamp(l * 0.18, 0.0, 0.15)),
            // primary: the seed itself
            derive(h, s, clamp(l, 0.0, 1.0)),
            // secondary: hue rotated 30 degrees, toned down
            derive((h + 30.0) % 360.0, s * 0.7, clamp(l * 0.55, 0.0, 1.0)),
            // accent: complementary hue
            derive((h + 180.0) % 360.0, s * 0.5, clamp(l * 0.4, 0.0, 1.0)),
            // text: near-white tint of the seed hue
            derive(h, s * 0.1, 0.95),
            // muted: mid-lightness gray tint
            derive(h, s * 0.15, 0.6),
            // highlight: hue rotated 60 degrees, vivid
            derive((h + 60.0) % 360.0, s * 0.8, clamp(l * 0.7, 0.0, 1.0)),
        ])
    }

    /// Render as a JSON object of `"role": "#hex"` pairs in role order.
    pub fn to_json(&self) -> String {
        let mut map = serde_json::Map::new();
        for (role, color) in self.entries() {
            map.insert(
                role.name().to_string(),
                serde_json::Value::String(color.to_hex()),
            );
        }
        // Serialization of a string map cannot fail
        serde_json::to_string_pretty(&serde_json::Value::Object(map))
            .unwrap_or_default()
    }

    /// Render as a Typst dictionary entry for pasting into a theme file.
    pub fn to_typst(&self, name: &str) -> String {
        let mut out = format!("  {}: (\n", name);
        for (role, color) in self.entries() {
            out.push_str(&format!("    {}: rgb(\"{}\"),\n", role.name(), color.to_hex()));
        }
        out.push_str("  ),");
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn hex(palette: &Palette, role: Role) -> String {
        palette.get(role).to_hex()
    }

    #[test]
    fn test_from_seed_golden_values() {
        // Pinned output for the reference seed. Any change here means every
        // generated theme changed.
        let palette = Palette::from_seed(Color::from_hex("#e94560").unwrap());

        assert_eq!(hex(&palette, Role::Bg), "#160d0f");
        assert_eq!(hex(&palette, Role::Surface), "#221316");
        assert_eq!(hex(&palette, Role::Primary), "#e84560");
        assert_eq!(hex(&palette, Role::Secondary), "#804325");
        assert_eq!(hex(&palette, Role::Accent), "#24544c");
        assert_eq!(hex(&palette, Role::Text), "#f3f1f1");
        assert_eq!(hex(&palette, Role::Muted), "#a58c90");
        assert_eq!(hex(&palette, Role::Highlight), "#ac9627");
    }

    #[test]
    fn test_from_seed_second_golden() {
        let palette = Palette::from_seed(Color::from_hex("#3366cc").unwrap());

        assert_eq!(hex(&palette, Role::Bg), "#0c0e12");
        assert_eq!(hex(&palette, Role::Surface), "#12151b");
        assert_eq!(hex(&palette, Role::Primary), "#3265cc");
        assert_eq!(hex(&palette, Role::Secondary), "#322863");
        assert_eq!(hex(&palette, Role::Accent), "#423823");
        assert_eq!(hex(&palette, Role::Text), "#f1f1f3");
        assert_eq!(hex(&palette, Role::Muted), "#8f95a2");
        assert_eq!(hex(&palette, Role::Highlight), "#672e84");
    }

    #[test]
    fn test_from_seed_complete_for_any_seed() {
        // Every role present and well-formed for arbitrary seeds, including
        // degenerate ones (black, white, fully saturated).
        for seed in ["#000000", "#ffffff", "#ff0000", "#00ff00", "#123456"] {
            let palette = Palette::from_seed(Color::from_hex(seed).unwrap());
            let mut count = 0;
            for (_, color) in palette.entries() {
                let hex = color.to_hex();
                assert_eq!(hex.len(), 7);
                assert!(Color::from_hex(&hex).is_ok());
                count += 1;
            }
            assert_eq!(count, 8);
        }
    }

    #[test]
    fn test_from_seed_deterministic() {
        let seed = Color::from_hex("#e94560").unwrap();
        assert_eq!(Palette::from_seed(seed), Palette::from_seed(seed));
    }

    #[test]
    fn test_accent_is_complementary_hue() {
        let seed = Color::from_hex("#e94560").unwrap();
        let palette = Palette::from_seed(seed);
        let (seed_h, _, _) = seed.to_hsl();
        let (accent_h, _, _) = palette.get(Role::Accent).to_hsl();
        let rotation = (accent_h - seed_h).rem_euclid(360.0);
        // Complementary within conversion tolerance
        assert!((rotation - 180.0).abs() < 1.5, "rotation was {}", rotation);
    }

    #[test]
    fn test_role_order() {
        let names: Vec<&str> = Role::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec!["bg", "surface", "primary", "secondary", "accent", "text", "muted", "highlight"]
        );
    }

    #[test]
    fn test_to_json_preserves_role_order() {
        let palette = Palette::from_seed(Color::from_hex("#e94560").unwrap());
        let json = palette.to_json();
        let bg_pos = json.find("\"bg\"").unwrap();
        let highlight_pos = json.find("\"highlight\"").unwrap();
        assert!(bg_pos < highlight_pos);
        assert!(json.contains("\"primary\": \"#e84560\""));
    }

    #[test]
    fn test_to_typst_format() {
        let palette = Palette::from_seed(Color::from_hex("#e94560").unwrap());
        let typst = palette.to_typst("custom");
        assert!(typst.starts_with("  custom: (\n"));
        assert!(typst.contains("    primary: rgb(\"#e84560\"),\n"));
        assert!(typst.ends_with("  ),"));
    }
}
