//! # Region configuration
//!
//! Every region of the scaffold is configured by a plain record of optional
//! fields. A field left as `None` means "use the default"; the same record
//! type also serves as a per-platform override, where `Some` replaces the base
//! value and `None` keeps it.
//!
//! ```rust
//! use screenkit::*;
//! use screenkit_core::*;
//!
//! let app_bar = AppBarConfig::new()
//!     .title("Inbox")
//!     .height(56.0)
//!     .ios(AppBarConfig::new().height(44.0));
//!
//! assert_eq!(app_bar.resolve(Platform::Ios).style.height, Some(44.0));
//! assert_eq!(app_bar.resolve(Platform::Android).style.height, Some(56.0));
//! ```

use screenkit_core::Platform;

/// Field-local override: `Some` in `over` wins, `None` keeps `self`.
pub trait Merge {
    fn merge(&self, over: &Self) -> Self;
}

/// Declares a config record. `data` fields are plain values with builder
/// setters, `hooks` are callbacks (no generated setters) and `nested` fields
/// are records merged field by field rather than replaced.
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            data {
                $( $(#[$dmeta:meta])* $data:ident : $dty:ty ),* $(,)?
            }
            hooks {
                $( $(#[$hmeta:meta])* $hook:ident : $hty:ty ),* $(,)?
            }
            nested {
                $( $(#[$nmeta:meta])* $nest:ident : $nty:ty ),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Default)]
        pub struct $name {
            $( $(#[$dmeta])* pub $data: Option<$dty>, )*
            $( $(#[$hmeta])* pub $hook: Option<$hty>, )*
            $( $(#[$nmeta])* pub $nest: $nty, )*
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }
            $(
                pub fn $data(mut self, v: impl Into<$dty>) -> Self {
                    self.$data = Some(v.into());
                    self
                }
            )*
        }

        impl $crate::config::Merge for $name {
            fn merge(&self, over: &Self) -> Self {
                Self {
                    $( $data: over.$data.clone().or_else(|| self.$data.clone()), )*
                    $( $hook: over.$hook.clone().or_else(|| self.$hook.clone()), )*
                    $( $nest: $crate::config::Merge::merge(&self.$nest, &over.$nest), )*
                }
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    $( .field(stringify!($data), &self.$data) )*
                    $( .field(stringify!($hook), &self.$hook.as_ref().map(|_| "...")) )*
                    $( .field(stringify!($nest), &self.$nest) )*
                    .finish()
            }
        }
    };
}

mod regions;
mod style;
mod tabs;

pub use regions::*;
pub use style::*;
pub use tabs::*;

/// A region's base configuration plus optional per-platform overrides.
///
/// Overrides are plain configs of the same type and cannot carry overrides of
/// their own.
#[derive(Clone, Default, Debug)]
pub struct Overridable<C> {
    pub base: C,
    pub ios: Option<C>,
    pub android: Option<C>,
}

impl<C: Merge + Clone> Overridable<C> {
    pub fn ios(mut self, over: C) -> Self {
        self.ios = Some(over);
        self
    }

    pub fn android(mut self, over: C) -> Self {
        self.android = Some(over);
        self
    }

    pub fn for_platform(&self, platform: Platform) -> Option<&C> {
        match platform {
            Platform::Ios => self.ios.as_ref(),
            Platform::Android => self.android.as_ref(),
        }
    }

    /// Base merged with the active platform's override, if any.
    pub fn resolve(&self, platform: Platform) -> C {
        crate::resolve::merge_override(&self.base, self.for_platform(platform))
    }
}

impl<C> From<C> for Overridable<C> {
    fn from(base: C) -> Self {
        Self {
            base,
            ios: None,
            android: None,
        }
    }
}

/// The seven independently configurable areas of a screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionKind {
    StatusBar,
    AppBar,
    TopNav,
    Body,
    BottomNav,
    Fab,
    BottomSheet,
}

impl RegionKind {
    pub const ALL: [RegionKind; 7] = [
        RegionKind::StatusBar,
        RegionKind::AppBar,
        RegionKind::TopNav,
        RegionKind::Body,
        RegionKind::BottomNav,
        RegionKind::Fab,
        RegionKind::BottomSheet,
    ];

    /// Test tag of the region's outermost default view.
    pub fn tag(self) -> &'static str {
        match self {
            RegionKind::StatusBar => "scaffold.status_bar",
            RegionKind::AppBar => "scaffold.app_bar",
            RegionKind::TopNav => "scaffold.top_nav",
            RegionKind::Body => "scaffold.body",
            RegionKind::BottomNav => "scaffold.bottom_nav",
            RegionKind::Fab => "scaffold.fab",
            RegionKind::BottomSheet => "scaffold.bottom_sheet",
        }
    }

    /// Status bar, app bar and body render with defaults when unconfigured.
    pub fn always_present(self) -> bool {
        matches!(
            self,
            RegionKind::StatusBar | RegionKind::AppBar | RegionKind::Body
        )
    }

    pub fn themed(self) -> bool {
        !matches!(self, RegionKind::Fab)
    }
}

/// Common surface of every region config.
pub trait RegionConfig: Merge + Clone + Default {
    const KIND: RegionKind;

    fn style(&self) -> &RegionStyle;
    fn style_mut(&mut self) -> &mut RegionStyle;

    fn with_style(mut self, f: impl FnOnce(RegionStyle) -> RegionStyle) -> Self {
        let style = std::mem::take(self.style_mut());
        *self.style_mut() = f(style);
        self
    }
    fn hidden(mut self, hidden: bool) -> Self {
        self.style_mut().hidden = Some(hidden);
        self
    }
    fn height(mut self, height: f32) -> Self {
        self.style_mut().height = Some(height);
        self
    }
    fn background_color(mut self, color: screenkit_core::Color) -> Self {
        self.style_mut().background_color = Some(color);
        self
    }
    fn use_safe_area(mut self, on: bool) -> Self {
        self.style_mut().use_safe_area = Some(on);
        self
    }
    fn rtl(mut self, rtl: bool) -> Self {
        self.style_mut().rtl = Some(rtl);
        self
    }
    fn ios(self, over: Self) -> Overridable<Self> {
        Overridable::from(self).ios(over)
    }
    fn android(self, over: Self) -> Overridable<Self> {
        Overridable::from(self).android(over)
    }
}

macro_rules! impl_region {
    ($($ty:ty => $kind:expr),* $(,)?) => {
        $(
            impl RegionConfig for $ty {
                const KIND: RegionKind = $kind;

                fn style(&self) -> &RegionStyle {
                    &self.style
                }
                fn style_mut(&mut self) -> &mut RegionStyle {
                    &mut self.style
                }
            }
        )*
    };
}

impl_region!(
    StatusBarConfig => RegionKind::StatusBar,
    AppBarConfig => RegionKind::AppBar,
    TopNavConfig => RegionKind::TopNav,
    BodyConfig => RegionKind::Body,
    BottomNavConfig => RegionKind::BottomNav,
    FabConfig => RegionKind::Fab,
    BottomSheetConfig => RegionKind::BottomSheet,
);
