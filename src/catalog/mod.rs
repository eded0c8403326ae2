//! Static template and theme catalogs.
//!
//! Both catalogs are fixed at runtime; selection state lives in the
//! [`store`](crate::store) module.

pub mod templates;
pub mod themes;

pub use templates::{
    all_templates, template_by_id, templates_by_category, LayoutKind, TemplateCategory,
    TemplateDescriptor, DEFAULT_TEMPLATE_ID,
};
pub use themes::{
    background_by_id, background_options, blend_hex, default_background, hex_to_color, hex_to_rgb,
    is_valid_hex, predefined_themes, theme_by_id, BackgroundKind, BackgroundOption, ColorSet,
    CustomTheme, Gradient, Gradients, HeaderStyle, PatternStyle, Theme,
};
