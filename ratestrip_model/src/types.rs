// Copyright 2026 the Ratestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public flag types: host invalidation bits and visual-state flags.

bitflags::bitflags! {
    /// Invalidation requests returned by model and widget mutations.
    ///
    /// Setters return the union of what the write dirtied so the host can
    /// schedule the matching framework callbacks. A no-op write (same value)
    /// returns [`Damage::empty`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Damage: u8 {
        /// The widget must be repainted.
        const PAINT  = 0b0000_0001;
        /// The indicator rectangles must be recomputed before the next paint.
        const LAYOUT = 0b0000_0010;
    }
}

bitflags::bitflags! {
    /// Visual state of the widget, passed explicitly into color resolution.
    ///
    /// These replace ambient toolkit state (pressed/enabled flags inherited
    /// from a base view class). [`PRESSED`](StateFlags::PRESSED) is owned by
    /// the gesture machinery; the rest are host-driven.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct StateFlags: u8 {
        /// Widget accepts interaction.
        const ENABLED = 0b0000_0001;
        /// A drag is holding the widget pressed.
        const PRESSED = 0b0000_0010;
        /// Pointer is over the widget.
        const HOVERED = 0b0000_0100;
        /// Widget has keyboard focus.
        const FOCUSED = 0b0000_1000;
    }
}

impl Default for StateFlags {
    fn default() -> Self {
        Self::ENABLED
    }
}
