// Copyright 2026 the Ratestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color resolution: state-dependent tint tables and the resolver strategy.
//!
//! ## Overview
//!
//! A resolver maps `(rate, visual state)` to a tint. The rate only decides
//! between the two tint tables (at or below zero the widget paints in its
//! "empty" tint, above zero in its "fill" tint) and the visual-state flags
//! select an entry within the table.
//!
//! Resolvers are selected by the host, either directly or by name through
//! [`ResolverRegistry`]. The registry replaces reflective class-name lookup:
//! hosts parse an attribute string and ask the registry for a factory, and
//! the core never resolves types dynamically.

use alloc::boxed::Box;
use alloc::vec::Vec;

use peniko::Color;
use ratestrip_model::StateFlags;

/// An ordered state-to-color table.
///
/// Entries are tried in order; the first whose flags are all present in the
/// queried state wins, falling back to the default color. This mirrors the
/// usual toolkit "color state list" without any theme plumbing attached.
#[derive(Clone, Debug, PartialEq)]
pub struct StateColors {
    entries: Vec<(StateFlags, Color)>,
    default_color: Color,
}

impl StateColors {
    /// A table that resolves to `color` in every state.
    pub const fn uniform(color: Color) -> Self {
        Self {
            entries: Vec::new(),
            default_color: color,
        }
    }

    /// A table with explicit per-state entries and a fallback color.
    pub fn new(entries: Vec<(StateFlags, Color)>, default_color: Color) -> Self {
        Self {
            entries,
            default_color,
        }
    }

    /// Resolve the color for a state.
    pub fn color_for(&self, state: StateFlags) -> Color {
        self.entries
            .iter()
            .find(|(flags, _)| state.contains(*flags))
            .map(|(_, color)| *color)
            .unwrap_or(self.default_color)
    }
}

/// Strategy mapping the current rate and visual state to a tint.
///
/// Implementations are stateless with respect to the widget; they own only
/// their tint tables. The renderer calls this twice per frame: once with a
/// zero rate for the background pass and once with the live rate for the
/// clipped overlay pass.
pub trait ColorResolver {
    /// The tint for the given rate and visual-state flags.
    fn resolve(&self, rate: f64, state: StateFlags) -> Color;
}

/// Theme inputs for [`ThemeColorResolver`].
///
/// The widget-specific `empty`/`fill` tables are optional; when unset the
/// resolver falls back to the general control pair, matching the two-tier
/// theme attribute lookup of common toolkits.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// General "normal control" table (fallback for `empty`).
    pub control_normal: StateColors,
    /// General "activated control" table (fallback for `fill`).
    pub control_activated: StateColors,
    /// Widget-specific empty tint table, if the theme sets one.
    pub empty: Option<StateColors>,
    /// Widget-specific fill tint table, if the theme sets one.
    pub fill: Option<StateColors>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            control_normal: StateColors::uniform(Color::BLACK),
            control_activated: StateColors::uniform(Color::WHITE),
            empty: None,
            fill: None,
        }
    }
}

/// The stock theme-driven resolver.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeColorResolver {
    empty: StateColors,
    fill: StateColors,
}

impl Default for ThemeColorResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeColorResolver {
    /// A resolver with no theme attached: black empty, white fill.
    pub fn new() -> Self {
        Self::from_theme(Theme::default())
    }

    /// Build from theme tables, preferring the widget-specific pair.
    pub fn from_theme(theme: Theme) -> Self {
        Self {
            empty: theme.empty.unwrap_or(theme.control_normal),
            fill: theme.fill.unwrap_or(theme.control_activated),
        }
    }
}

impl ColorResolver for ThemeColorResolver {
    fn resolve(&self, rate: f64, state: StateFlags) -> Color {
        if rate <= 0.0 {
            self.empty.color_for(state)
        } else {
            self.fill.color_for(state)
        }
    }
}

/// A fixed-color resolver: one empty tint, one fill tint.
#[derive(Clone, Debug, PartialEq)]
pub struct SimpleColorResolver {
    empty: StateColors,
    fill: StateColors,
}

impl SimpleColorResolver {
    /// Fixed colors with no state dependence.
    pub const fn new(empty: Color, fill: Color) -> Self {
        Self {
            empty: StateColors::uniform(empty),
            fill: StateColors::uniform(fill),
        }
    }

    /// Fixed tables with state-dependent entries.
    pub fn with_state_colors(empty: StateColors, fill: StateColors) -> Self {
        Self { empty, fill }
    }
}

impl ColorResolver for SimpleColorResolver {
    fn resolve(&self, rate: f64, state: StateFlags) -> Color {
        if rate <= 0.0 {
            self.empty.color_for(state)
        } else {
            self.fill.color_for(state)
        }
    }
}

/// Factory function for a named resolver.
pub type ResolverFactory = fn() -> Box<dyn ColorResolver>;

/// Explicit name → resolver factory registry.
///
/// Hosts that configure the resolver from a string attribute register their
/// factories here and call [`ResolverRegistry::create`] at construction
/// time. An unknown name is a `None`, surfaced by the host as a
/// configuration error; the core never fails.
pub struct ResolverRegistry {
    entries: Vec<(&'static str, ResolverFactory)>,
}

impl core::fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let names: Vec<&'static str> = self.entries.iter().map(|(n, _)| *n).collect();
        f.debug_struct("ResolverRegistry")
            .field("names", &names)
            .finish()
    }
}

impl Default for ResolverRegistry {
    fn default() -> Self {
        Self::with_stock_resolvers()
    }
}

impl ResolverRegistry {
    /// An empty registry.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// A registry pre-seeded with the two stock resolvers, under
    /// `"default"` (theme-driven) and `"simple"` (black/white).
    pub fn with_stock_resolvers() -> Self {
        let mut registry = Self::new();
        registry.register("default", || Box::new(ThemeColorResolver::new()));
        registry.register("simple", || {
            Box::new(SimpleColorResolver::new(Color::BLACK, Color::WHITE))
        });
        registry
    }

    /// Register a factory, replacing any previous entry with the same name.
    pub fn register(&mut self, name: &'static str, factory: ResolverFactory) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = factory;
        } else {
            self.entries.push((name, factory));
        }
    }

    /// Instantiate the resolver registered under `name`, if any.
    pub fn create(&self, name: &str) -> Option<Box<dyn ColorResolver>> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, factory)| factory())
    }
}
