//! # Environment locals
//!
//! The host publishes system state through thread-local "composition locals":
//!
//! - `Platform`: which operating system the screen is composed for.
//! - `ColorScheme`: light or dark system appearance, if known.
//! - `TextDirection`: system writing direction.
//! - `StatusBarHeight`: height of the system status bar in dp.
//!
//! Override them for a subtree with the `with_*` helpers:
//!
//! ```rust
//! use screenkit_core::*;
//!
//! with_platform(Platform::Ios, || {
//!     with_color_scheme(Some(ColorScheme::Dark), || {
//!         assert_eq!(color_scheme(), Some(ColorScheme::Dark));
//!     })
//! });
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    /// The platform this binary was compiled for; Android for anything that is not iOS.
    pub fn native() -> Self {
        if cfg!(target_os = "ios") {
            Platform::Ios
        } else {
            Platform::Android
        }
    }

    pub fn default_status_bar_height(self) -> f32 {
        match self {
            Platform::Ios => 44.0,
            Platform::Android => 24.0,
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::native()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// `None` means the host could not determine the scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct SystemColorScheme(Option<ColorScheme>);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusBarHeight(pub f32);

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // pops on unwind too
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        let mut st = st.borrow_mut();
        if let Some(top) = st.last_mut() {
            top.insert(t, v);
        } else {
            let mut m = HashMap::new();
            m.insert(t, v);
            st.push(m);
        }
    });
}

fn provide<T: Any, R>(value: T, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<T>(), Box::new(value));
        f()
    })
}

fn lookup<T: Any + Copy>() -> Option<T> {
    LOCALS_STACK.with(|st| {
        st.borrow()
            .iter()
            .rev()
            .find_map(|frame| frame.get(&TypeId::of::<T>())?.downcast_ref::<T>().copied())
    })
}

pub fn with_platform<R>(platform: Platform, f: impl FnOnce() -> R) -> R {
    provide(platform, f)
}

pub fn with_color_scheme<R>(scheme: Option<ColorScheme>, f: impl FnOnce() -> R) -> R {
    provide(SystemColorScheme(scheme), f)
}

pub fn with_text_direction<R>(dir: TextDirection, f: impl FnOnce() -> R) -> R {
    provide(dir, f)
}

pub fn with_status_bar_height<R>(height: f32, f: impl FnOnce() -> R) -> R {
    provide(StatusBarHeight(height), f)
}

pub fn platform() -> Platform {
    lookup::<Platform>().unwrap_or_default()
}

pub fn color_scheme() -> Option<ColorScheme> {
    lookup::<SystemColorScheme>().unwrap_or_default().0
}

pub fn text_direction() -> TextDirection {
    lookup::<TextDirection>().unwrap_or_default()
}

/// Falls back to the platform's typical status bar height.
pub fn status_bar_height() -> f32 {
    lookup::<StatusBarHeight>()
        .map(|h| h.0)
        .unwrap_or_else(|| platform().default_status_bar_height())
}

/// One read of every local, taken at the start of a render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    pub platform: Platform,
    pub color_scheme: Option<ColorScheme>,
    pub text_direction: TextDirection,
    pub status_bar_height: f32,
}

impl Environment {
    pub fn current() -> Self {
        Self {
            platform: platform(),
            color_scheme: color_scheme(),
            text_direction: text_direction(),
            status_bar_height: status_bar_height(),
        }
    }
}
