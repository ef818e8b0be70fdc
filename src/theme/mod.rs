// Palette selection and the theme slots it drives
pub mod applier;
pub mod resolver;

pub use applier::{ThemeContext, ThemeSlots, apply_theme};
pub use resolver::resolve_palette;
