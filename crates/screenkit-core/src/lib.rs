//! # Views, modifiers and the environment
//!
//! `screenkit-core` is the framework-agnostic half of Screenkit. It knows how
//! to describe a view tree, but not how to draw one:
//!
//! - `View` / `ViewKind`: an immutable tree handed to the host renderer.
//! - `Modifier`: layout, decoration and event hooks attached to a view.
//! - locals (`platform()`, `color_scheme()`, `text_direction()`): system
//!   state the host publishes for the duration of a render pass.
//! - `AnimatedValue`: a value driven towards a target by the animation clock.
//! - `Signal`: an observable value for state that outlives a render.
//!
//! Hosts walk the tree, lay it out and call back into the closures stored on
//! it (`on_layout`, `on_scroll`, `on_press`). Those callbacks are the only way
//! state flows back into the next render.
//!
//! ```rust
//! use screenkit_core::*;
//!
//! let bar = View::new(0, ViewKind::Row).modifier(
//!     Modifier::new()
//!         .height(56.0)
//!         .background(Color::from_hex("#6200EE"))
//!         .test_tag("bar"),
//! );
//! assert_eq!(bar.find_by_tag("bar").map(|v| v.modifier.height), Some(Some(56.0)));
//! ```

pub mod animation;
pub mod color;
pub mod geometry;
pub mod locals;
pub mod modifier;
pub mod runtime;
pub mod semantics;
pub mod signal;
pub mod tests;
pub mod view;

pub use animation::{AnimatedValue, AnimationSpec, Easing, Interpolate};
pub use color::*;
pub use geometry::*;
pub use locals::*;
pub use modifier::*;
pub use runtime::*;
pub use semantics::*;
pub use signal::*;
pub use view::*;

pub use taffy::{AlignItems, AlignSelf, FlexDirection, JustifyContent};
