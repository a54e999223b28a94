//! Light/dark adaptation of region backgrounds and status bar content.

use screenkit_core::{BarContentStyle, Color, ColorScheme};

use crate::{RegionKind, RegionStyle};

pub const DARK_BACKGROUND: Color = Color(0x12, 0x12, 0x12, 0xFF);
pub const LIGHT_BACKGROUND: Color = Color(0xFF, 0xFF, 0xFF, 0xFF);

/// Background and content style the theme forces on a region.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThemePatch {
    pub background: Option<Color>,
    /// Status bar only.
    pub content_style: Option<BarContentStyle>,
}

impl ThemePatch {
    pub fn is_empty(&self) -> bool {
        self.background.is_none() && self.content_style.is_none()
    }
}

fn scheme_background(style: &RegionStyle, scheme: ColorScheme) -> Color {
    style.background_color.unwrap_or(match scheme {
        ColorScheme::Dark => DARK_BACKGROUND,
        ColorScheme::Light => LIGHT_BACKGROUND,
    })
}

fn scheme_content(scheme: ColorScheme) -> BarContentStyle {
    match scheme {
        ColorScheme::Dark => BarContentStyle::LightContent,
        ColorScheme::Light => BarContentStyle::DarkContent,
    }
}

/// Adaptive theme wins over auto-detect; neither does anything while the
/// scheme is unknown.
pub fn adapt_theme(style: &RegionStyle, region: RegionKind, scheme: Option<ColorScheme>) -> ThemePatch {
    let Some(scheme) = scheme else {
        return ThemePatch::default();
    };
    if !region.themed() {
        return ThemePatch::default();
    }
    let status_bar = region == RegionKind::StatusBar;

    if style.adaptive_theme.unwrap_or(false) {
        ThemePatch {
            background: Some(scheme_background(style, scheme)),
            content_style: status_bar.then(|| scheme_content(scheme)),
        }
    } else if style.auto_detect_theme.unwrap_or(false) {
        if status_bar {
            ThemePatch {
                background: None,
                content_style: Some(scheme_content(scheme)),
            }
        } else {
            ThemePatch {
                background: Some(scheme_background(style, scheme)),
                content_style: None,
            }
        }
    } else {
        ThemePatch::default()
    }
}

pub fn region_default_background(region: RegionKind) -> Color {
    match region {
        RegionKind::StatusBar | RegionKind::Body => Color::TRANSPARENT,
        RegionKind::AppBar | RegionKind::TopNav | RegionKind::BottomNav => LIGHT_BACKGROUND,
        RegionKind::Fab => Color::from_hex("#2196F3"),
        RegionKind::BottomSheet => LIGHT_BACKGROUND,
    }
}

/// Patch background, else the configured one, else the region default.
pub fn final_background(patch: &ThemePatch, style: &RegionStyle, region: RegionKind) -> Color {
    patch
        .background
        .or(style.background_color)
        .unwrap_or_else(|| region_default_background(region))
}

/// Readable text color on top of `bg`.
pub fn content_color(bg: Color, scheme: Option<ColorScheme>) -> Color {
    if bg.is_transparent() {
        return match scheme {
            Some(ColorScheme::Dark) => Color::WHITE,
            _ => Color::BLACK,
        };
    }
    let luma = 0.299 * bg.0 as f32 + 0.587 * bg.1 as f32 + 0.114 * bg.2 as f32;
    if luma > 140.0 { Color::BLACK } else { Color::WHITE }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(adaptive: bool, auto: bool) -> RegionStyle {
        RegionStyle::new().adaptive_theme(adaptive).auto_detect_theme(auto)
    }

    #[test]
    fn adaptive_uses_scheme_palette() {
        let p = adapt_theme(&style(true, false), RegionKind::AppBar, Some(ColorScheme::Dark));
        assert_eq!(p.background, Some(DARK_BACKGROUND));
        assert_eq!(p.content_style, None);

        let p = adapt_theme(&style(true, false), RegionKind::AppBar, Some(ColorScheme::Light));
        assert_eq!(p.background, Some(LIGHT_BACKGROUND));
    }

    #[test]
    fn adaptive_prefers_explicit_background() {
        let s = style(true, false).background_color(Color::from_hex("#FF0000"));
        let p = adapt_theme(&s, RegionKind::TopNav, Some(ColorScheme::Dark));
        assert_eq!(p.background, Some(Color::from_hex("#FF0000")));
    }

    #[test]
    fn adaptive_status_bar_sets_content_style() {
        let p = adapt_theme(&style(true, false), RegionKind::StatusBar, Some(ColorScheme::Dark));
        assert_eq!(p.content_style, Some(BarContentStyle::LightContent));
        assert_eq!(p.background, Some(DARK_BACKGROUND));

        let p = adapt_theme(&style(true, false), RegionKind::StatusBar, Some(ColorScheme::Light));
        assert_eq!(p.content_style, Some(BarContentStyle::DarkContent));
    }

    #[test]
    fn auto_detect_status_bar_leaves_background() {
        let p = adapt_theme(&style(false, true), RegionKind::StatusBar, Some(ColorScheme::Dark));
        assert_eq!(p.background, None);
        assert_eq!(p.content_style, Some(BarContentStyle::LightContent));

        let p = adapt_theme(&style(false, true), RegionKind::BottomNav, Some(ColorScheme::Dark));
        assert_eq!(p.background, Some(DARK_BACKGROUND));
        assert_eq!(p.content_style, None);
    }

    #[test]
    fn adaptive_takes_priority_over_auto_detect() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            for region in RegionKind::ALL {
                assert_eq!(
                    adapt_theme(&style(true, true), region, Some(scheme)),
                    adapt_theme(&style(true, false), region, Some(scheme)),
                );
            }
        }
    }

    #[test]
    fn unknown_scheme_or_no_flags_is_empty() {
        assert!(adapt_theme(&style(true, true), RegionKind::AppBar, None).is_empty());
        assert!(adapt_theme(&style(false, false), RegionKind::AppBar, Some(ColorScheme::Dark)).is_empty());
        assert!(adapt_theme(&style(true, false), RegionKind::Fab, Some(ColorScheme::Dark)).is_empty());
    }

    #[test]
    fn background_precedence() {
        let s = RegionStyle::new().background_color(Color::from_hex("#00FF00"));
        let patch = ThemePatch {
            background: Some(Color::from_hex("#0000FF")),
            content_style: None,
        };
        assert_eq!(final_background(&patch, &s, RegionKind::AppBar), Color::from_hex("#0000FF"));
        assert_eq!(final_background(&ThemePatch::default(), &s, RegionKind::AppBar), Color::from_hex("#00FF00"));
        assert_eq!(
            final_background(&ThemePatch::default(), &RegionStyle::new(), RegionKind::AppBar),
            LIGHT_BACKGROUND
        );
    }
}
