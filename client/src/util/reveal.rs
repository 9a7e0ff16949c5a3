//! Entrance animation timing for page sections.
//!
//! Sections fade or rise in once on load. Timing is expressed as CSS
//! (`reveal--rise` / `reveal--fade` / `reveal--scale` keyframes in the
//! stylesheet) with per-element delay and duration set inline, so the
//! animations run without any client code and respect SSR output.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Default section animation length.
pub const SECTION_DURATION_MS: u32 = 600;

/// Keyframe family for an entrance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealKind {
    /// Fade in while moving up.
    #[default]
    Rise,
    /// Opacity only.
    Fade,
    /// Fade in from slightly smaller.
    Scale,
}

impl RevealKind {
    fn modifier(self) -> &'static str {
        match self {
            Self::Rise => "rise",
            Self::Fade => "fade",
            Self::Scale => "scale",
        }
    }
}

/// One element's entrance animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub kind: RevealKind,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl Reveal {
    pub fn new(kind: RevealKind, delay_ms: u32) -> Self {
        Self { kind, delay_ms, duration_ms: SECTION_DURATION_MS }
    }

    pub fn rise(delay_ms: u32) -> Self {
        Self::new(RevealKind::Rise, delay_ms)
    }

    pub fn fade(delay_ms: u32) -> Self {
        Self::new(RevealKind::Fade, delay_ms)
    }

    pub fn scale(delay_ms: u32) -> Self {
        Self { duration_ms: 500, ..Self::new(RevealKind::Scale, delay_ms) }
    }

    /// Class list to merge onto the animated element.
    pub fn class(self) -> String {
        format!("reveal reveal--{}", self.kind.modifier())
    }

    /// Inline style carrying the timing.
    pub fn style(self) -> String {
        format!("animation-delay: {}ms; animation-duration: {}ms;", self.delay_ms, self.duration_ms)
    }
}
