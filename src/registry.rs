//! Name-keyed access to the icon set.
//!
//! Two read-only maps are built on first use and shared for the lifetime of
//! the process: a direct name→component map, and the loader registry, which
//! maps every public name (canonical and alias alike) to a deferred loading
//! function. Neither is ever written to again, so lookups from any number
//! of threads need no synchronization.

use crate::aliases::{self, resolve_alias};
use crate::component::IconComponent;
use crate::icons;
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::sync::LazyLock;

/// A deferred icon retrieval: a zero-argument function yielding a future of
/// the component.
///
/// How the component is actually obtained is the loader's business; the
/// registry only promises that awaiting it either produces a component
/// behaving identically to the statically named one, or fails with a
/// [LoadError]. Loaders may be invoked concurrently, and a caller is free
/// to drop the future before completion; nothing is retained per load.
pub type IconLoader = fn() -> BoxFuture<'static, Result<&'static IconComponent, LoadError>>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("no icon is registered under the name `{0}`")]
    UnknownIcon(String),
}

static COMPONENTS: LazyLock<HashMap<&'static str, &'static IconComponent>> =
    LazyLock::new(|| icons::ALL.iter().copied().collect());

static LOADERS: LazyLock<HashMap<&'static str, IconLoader>> = LazyLock::new(|| {
    let mut loaders: HashMap<_, _> = icons::DYNAMIC_IMPORTS.iter().copied().collect();

    // an alias shares the loader of its canonical icon, so lazily loading
    // either name yields the very same component
    for (alias, canonical) in aliases::ALIASES {
        match loaders.get(canonical).copied() {
            Some(loader) => {
                loaders.insert(*alias, loader);
            }
            None => {
                // a broken table is caught by `aliases::verify` before a
                // release; skip the entry instead of poisoning every lookup
                #[cfg(feature = "log")]
                log::error!("alias {alias:?} points at unknown icon {canonical:?}, skipping");
            }
        }
    }

    #[cfg(feature = "log")]
    log::debug!("loader registry built with {} entries", loaders.len());

    loaders
});

/// Look up an icon component by public name, kebab-case, alias or canonical.
pub fn icon(name: &str) -> Option<&'static IconComponent> {
    COMPONENTS.get(resolve_alias(name)).copied()
}

/// Look up the deferred loader registered for a public name.
pub fn loader(name: &str) -> Option<IconLoader> {
    LOADERS.get(name).copied()
}

/// The full loader registry: one entry per public name, canonical and alias.
pub fn loaders() -> &'static HashMap<&'static str, IconLoader> {
    &LOADERS
}

/// Load an icon component by public name.
///
/// Unknown names fail with [LoadError::UnknownIcon]; loader failures are
/// propagated untouched. There is no retry and no fallback icon, the caller
/// decides what to show instead.
pub async fn load(name: &str) -> Result<&'static IconComponent, LoadError> {
    match loader(name) {
        Some(load) => load().await,
        None => Err(LoadError::UnknownIcon(name.to_owned())),
    }
}

#[cfg(test)]
mod test {
    use crate::IconProps;
    use crate::aliases::ALIASES;
    use crate::icons::{GRID, SMILE};
    use crate::registry::{LoadError, icon, load, loader, loaders};
    use futures::executor::block_on;

    #[test]
    fn test_icon_lookup_resolves_aliases() {
        assert!(std::ptr::eq(icon("grid").unwrap(), &GRID));
        assert!(std::ptr::eq(icon("edit-2").unwrap(), icon("pen").unwrap()));
        assert!(icon("no-such-icon").is_none());
    }

    #[test]
    fn test_every_public_name_has_exactly_one_loader() {
        let loaders = loaders();

        assert_eq!(loaders.len(), crate::icons::ALL.len() + ALIASES.len());

        for (name, _) in crate::icons::ALL {
            assert!(loaders.contains_key(name), "no loader for {name}");
        }
        for (alias, _) in ALIASES {
            assert!(loaders.contains_key(alias), "no loader for alias {alias}");
        }
    }

    #[test]
    fn test_loaded_component_matches_the_static_one() {
        let props = IconProps::default()
            .size(48)
            .color("red")
            .absolute_stroke_width(true)
            .attr("aria-label", "smile");

        let loaded = block_on(load("smile")).unwrap();

        assert!(std::ptr::eq(loaded, &SMILE));
        assert_eq!(loaded.render(&props), SMILE.render(&props));
    }

    #[test]
    fn test_alias_loader_yields_the_canonical_component() {
        let via_alias = block_on(load("home")).unwrap();
        let via_canonical = block_on(load("house")).unwrap();

        assert!(std::ptr::eq(via_alias, via_canonical));
    }

    #[test]
    fn test_unknown_name_is_a_load_error() {
        assert_eq!(
            block_on(load("no-such-icon")),
            Err(LoadError::UnknownIcon("no-such-icon".to_owned()))
        );
        assert!(loader("no-such-icon").is_none());
    }

    #[test]
    fn test_abandoning_a_load_is_a_silent_no_op() {
        let pending = loader("grid").unwrap()();
        drop(pending);

        // the registry kept nothing per load; a later load is unaffected
        let count_before = loaders().len();
        assert!(block_on(load("grid")).is_ok());
        assert_eq!(loaders().len(), count_before);
    }
}
