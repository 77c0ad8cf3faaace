//! Scoped theme propagation
//!
//! A [`ThemeContext`] is handed down the component tree by reference. A
//! subtree that wants a different theme derives a child context with
//! [`ThemeContext::provide`] (or runs a closure under
//! [`ThemeContext::scope`]); the parent is never touched, so leaving the
//! subtree automatically restores the outer theme.
//!
//! ```rust
//! use prism_theme::{Theme, ThemeContext, ThemePreset};
//!
//! let root = ThemeContext::root();
//! let ocean = ThemePreset::Ocean.theme();
//!
//! root.scope(&ocean, |inner| {
//!     assert_eq!(inner.current().name(), "Ocean");
//! });
//! assert_eq!(root.current(), Theme::default_ref());
//! ```

use crate::theme::Theme;

/// Resolution state of a context
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContextState<'a> {
    /// No enclosing scope bound a theme; resolves to the default theme
    Unset,
    /// The nearest enclosing scope bound this theme
    Bound(&'a Theme),
}

/// Read-only, stack-scoped view of the active theme
#[derive(Clone, Copy, Debug)]
pub struct ThemeContext<'a> {
    binding: Option<&'a Theme>,
    depth: usize,
}

impl Default for ThemeContext<'_> {
    fn default() -> Self {
        Self::root()
    }
}

impl<'a> ThemeContext<'a> {
    /// Context with no theme bound
    pub const fn root() -> Self {
        Self {
            binding: None,
            depth: 0,
        }
    }

    /// Root context already bound to `theme`
    pub fn with_theme(theme: &'a Theme) -> Self {
        Self {
            binding: Some(theme),
            depth: 1,
        }
    }

    /// Child context in which `theme` shadows any outer binding
    pub fn provide<'b>(&'b self, theme: &'b Theme) -> ThemeContext<'b>
    where
        'a: 'b,
    {
        tracing::trace!(depth = self.depth + 1, theme = theme.name(), "theme scope entered");
        ThemeContext {
            binding: Some(theme),
            depth: self.depth + 1,
        }
    }

    /// Run `f` inside a nested scope bound to `theme`
    pub fn scope<R>(&self, theme: &Theme, f: impl FnOnce(&ThemeContext<'_>) -> R) -> R {
        let inner = self.provide(theme);
        f(&inner)
    }

    /// The theme in effect: the nearest binding, or the default theme
    pub fn current(&self) -> &'a Theme {
        match self.binding {
            Some(theme) => theme,
            None => Theme::default_ref(),
        }
    }

    pub fn state(&self) -> ContextState<'a> {
        match self.binding {
            Some(theme) => ContextState::Bound(theme),
            None => ContextState::Unset,
        }
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// Number of nested bindings above this context
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Types that can be seeded from the active theme
pub trait FromTheme: Sized {
    fn from_theme(theme: &Theme) -> Self;

    /// Resolve against whatever theme `ctx` has in effect
    fn from_context(ctx: &ThemeContext<'_>) -> Self {
        Self::from_theme(ctx.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::ThemePreset;

    #[test]
    fn test_root_is_unset() {
        let ctx = ThemeContext::root();
        assert_eq!(ctx.state(), ContextState::Unset);
        assert_eq!(ctx.current(), Theme::default_ref());
        assert_eq!(ctx.depth(), 0);
    }

    #[test]
    fn test_provide_binds_child_only() {
        let root = ThemeContext::root();
        let sunset = ThemePreset::Sunset.theme();
        let child = root.provide(&sunset);
        assert_eq!(child.current(), &sunset);
        assert_eq!(child.state(), ContextState::Bound(&sunset));
        assert!(!root.is_bound());
    }

    #[test]
    fn test_scope_returns_closure_value() {
        let root = ThemeContext::root();
        let forest = ThemePreset::Forest.theme();
        let name = root.scope(&forest, |ctx| ctx.current().name().to_string());
        assert_eq!(name, "Forest");
    }
}
