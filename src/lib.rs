//! Lucide vector icons as plain Rust rendering components.
//!
//! Every icon is a static component that renders to a self-contained SVG
//! string, so applications get consistent, themeable icons without shipping
//! raster assets or pulling in a UI framework.
//!
//! # Quick start
//!
//! ```
//! use lucide::{GRID, IconProps};
//!
//! let svg = GRID.render(&IconProps::default().size(48).color("red"));
//!
//! assert!(svg.starts_with("<svg "));
//! ```
//!
//! # High level design
//!
//! The library is three small pieces layered on top of a generated dataset:
//!
//! 1.  *Icon definitions*:
//!
//!     Each icon is an immutable, name-tagged list of vector sub-elements
//!     with fixed coordinate data, generated from the shared upstream
//!     dataset into [icons]. Definitions are `'static` and shared by every
//!     render.
//!
//! 2.  *Rendering*:
//!
//!     [create_icon] wraps a definition into an [IconComponent]. Rendering
//!     merges the caller's [IconProps] through the attribute resolver
//!     ([resolve]) and emits one root `<svg>` element wrapping the
//!     definition's nodes. Rendering is pure: identical props produce
//!     byte-identical markup.
//!
//! 3.  *Names*:
//!
//!     Icons renamed upstream keep their old names as aliases, re-exports
//!     of the very same component ([resolve_alias] maps the names). On top
//!     of that sits the loader registry: every public name, alias or not,
//!     maps to a deferred loading function ([loader], [load]) for callers
//!     that want to fetch icons on demand rather than reference them
//!     statically.
//!
//! All shared state is built once and read-only afterwards; concurrent use
//! needs no synchronization.
//!
//! # Alternative crates
//!
//! - [icondata](https://crates.io/crates/icondata) aggregates many icon
//!   sets as raw SVG data, but leaves sizing, stroke handling and class
//!   composition entirely to the consumer.
//! - Framework-specific bindings (leptos, yew, dioxus icon crates) couple
//!   the icon set to one UI framework; this crate renders plain markup any
//!   of them can embed.

mod aliases;
mod attrs;
mod component;
pub mod icons;
mod registry;

pub use aliases::*;
pub use attrs::{Dimension, IconProps, ResolvedAttributes, resolve, to_kebab_case};
pub use component::{IconComponent, IconDefinition, IconNode, create_icon};
pub use icons::*;
pub use registry::{IconLoader, LoadError, icon, load, loader, loaders};

#[cfg(test)]
mod test {
    use crate::{GRID, IconProps, load};
    use futures::executor::block_on;

    // end-to-end checks mirroring the upstream reference suite

    #[test]
    fn test_render_grid_fixture() {
        let props = IconProps::default()
            .attr("data-testid", "grid-icon")
            .size(48)
            .color("red")
            .stroke_width(4);

        let svg = GRID.render(&props);

        assert!(svg.contains("width=\"48\""));
        assert!(svg.contains("height=\"48\""));
        assert!(svg.contains("stroke=\"red\""));
        assert!(svg.contains("stroke-width=\"4\""));
        assert!(svg.contains("data-testid=\"grid-icon\""));
    }

    #[test]
    fn test_render_grid_absolute_stroke_fixture() {
        let props = IconProps::default()
            .size(48)
            .color("red")
            .absolute_stroke_width(true);

        let svg = GRID.render(&props);

        assert!(svg.contains("width=\"48\""));
        assert!(svg.contains("stroke-width=\"1\""));
    }

    #[test]
    fn test_dynamic_icon_with_passthrough_attributes() {
        let icon = block_on(load("smile")).unwrap();
        let svg = icon.render(
            &IconProps::default()
                .attr("aria-label", "smile")
                .size(48)
                .color("red")
                .absolute_stroke_width(true),
        );

        assert!(svg.contains("aria-label=\"smile\""));
        assert!(svg.contains("class=\"lucide lucide-smile\""));
    }
}
