#![allow(non_snake_case)]
//! # Screenkit scaffold
//!
//! A screen template with seven regions: status bar, app bar, top tab
//! navigation, a scrollable body, bottom navigation, a floating action button
//! and a bottom sheet.
//!
//! Each render is a pure mapping from a [`ScaffoldConfig`] plus the current
//! [`ScaffoldState`] to a [`View`](screenkit_core::View) tree:
//!
//! 1. every region config is resolved for the active platform
//!    ([`Overridable::resolve`]);
//! 2. the theme adapter patches backgrounds and status bar content for the
//!    system color scheme ([`adapt_theme`]);
//! 3. each region picks one of hidden, custom renderer, or default visual.
//!
//! ```rust
//! use screenkit::*;
//! use screenkit_core::*;
//!
//! let config = ScaffoldConfig::new()
//!     .app_bar(AppBarConfig::new().title("Inbox"))
//!     .body(BodyConfig::new().content(Text("Hello")))
//!     .fab(FabConfig::new().on_press(|| {}));
//! let state = ScaffoldState::for_config(&config, &Environment::current());
//!
//! let root = Scaffold(&config, &state);
//! assert!(root.find_by_tag("scaffold.app_bar").is_some());
//! assert!(root.find_by_tag("scaffold.bottom_nav").is_none());
//! ```
//!
//! User callbacks that can fail (tab presses, tab changes) run inside
//! [`guarded`]: errors and panics are logged and never escape into the
//! render loop.

pub mod config;
pub mod context;
pub mod guard;
pub mod metrics;
mod regions;
pub mod resolve;
mod scaffold;
pub mod state;
pub mod theme;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use config::*;
pub use context::*;
pub use guard::{BoxError, CallbackError, CallbackResult, guarded, invoke_logged};
pub use metrics::{ScrollIndicatorGeometry, scroll_indicator};
pub use regions::tab_press_handler;
pub use resolve::{merge_override, resolve};
pub use scaffold::{KeyedScaffold, Scaffold};
pub use state::{LayoutMsg, LayoutState, ScaffoldState, remember_scaffold_state};
pub use theme::{ThemePatch, adapt_theme};
pub use widgets::*;
