//! Terminal styling utilities
//!
//! One palette for CLI output and the TUI:
//! - Green for success states
//! - Cyan for headers and technical values
//! - Bold yellow for the active letter

use crossterm::style::Stylize;

/// Extension trait for consistent Letter Slider styling
///
/// Use these methods instead of direct color calls so CLI output matches the TUI.
///
/// # Examples
///
/// ```
/// use letter_slider::style::SliderStyle;
///
/// println!("{}", "Settings:".header());
/// println!("{}", "✓ done".success());
/// println!("{}", "b".letter());
/// ```
pub trait SliderStyle: Stylize {
    /// Style for section headers (cyan bold)
    fn header(self) -> <<Self as Stylize>::Styled as Stylize>::Styled
    where
        Self: Sized,
        <Self as Stylize>::Styled: Stylize,
    {
        self.cyan().bold()
    }

    /// Style for success states (green)
    fn success(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        self.green()
    }

    /// Style for technical values: numbers, paths, field names (cyan)
    fn technical(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        self.cyan()
    }

    /// Style for the active letter (yellow bold)
    fn letter(self) -> <<Self as Stylize>::Styled as Stylize>::Styled
    where
        Self: Sized,
        <Self as Stylize>::Styled: Stylize,
    {
        self.yellow().bold()
    }
}

// Implement for all types that implement Stylize (String, &str, etc.)
impl<T: Stylize> SliderStyle for T {}

// ============================================================================
// Ratatui TUI Color Helpers
// ============================================================================
//
// Same semantic intent as `SliderStyle`, as raw `Color` values for ratatui.

/// Semantic color palette for TUI use with ratatui
#[cfg(feature = "tui")]
pub mod colors {
    use ratatui::style::Color;

    /// Active letter foreground (use with bold)
    pub const LETTER_ACTIVE: Color = Color::Black;

    /// Active letter background
    pub const LETTER_ACTIVE_BG: Color = Color::Yellow;

    /// Inactive letters
    pub const LETTER_INACTIVE: Color = Color::White;

    /// Index tags under each letter
    pub const LETTER_INDEX: Color = Color::DarkGray;

    /// Color for active/live UI borders (green)
    pub const UI_BORDER_ACTIVE: Color = Color::Green;

    /// Color for inactive UI borders (gray)
    pub const UI_BORDER_INACTIVE: Color = Color::Gray;

    /// Color for UI highlights and key hints (cyan)
    pub const UI_HIGHLIGHT: Color = Color::Cyan;

    /// Color for success states (green)
    pub const UI_SUCCESS: Color = Color::Green;

    /// Color for warning states (yellow)
    pub const UI_WARNING: Color = Color::Yellow;

    /// Color for secondary/dimmed text (gray)
    pub const UI_SECONDARY: Color = Color::Gray;

    /// Color for normal UI text (white)
    pub const UI_TEXT: Color = Color::White;
}
