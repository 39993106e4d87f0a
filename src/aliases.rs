//! Alternate public names for icons.
//!
//! Icons occasionally get renamed upstream; the old names stay importable
//! as aliases. An alias is not a wrapper: the exported component *is* the
//! canonical component, re-exported under a second name, so the two render
//! byte-identically and even compare equal by address.

use crate::icons;

// The alias components. `pub use` binds the alias name to the very same
// static as the canonical name.
pub use crate::icons::{HOUSE as HOME, LOADER_CIRCLE as LOADER_2, PEN as EDIT_2, PEN_LINE as EDIT_3};

/// Every alias, paired with the kebab-case name of its canonical icon.
///
/// Many aliases may point at one canonical icon, but an alias never points
/// at another alias.
pub static ALIASES: &[(&str, &str)] = &[
    ("edit-2", "pen"),
    ("edit-3", "pen-line"),
    ("home", "house"),
    ("loader-2", "loader-circle"),
];

/// Resolve a public name to its canonical form.
///
/// Names that aren't aliases come back unchanged, so this is safe to call
/// on any name.
pub fn resolve_alias(name: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(name)
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("alias `{alias}` points at `{target}`, which is not a registered icon")]
    UnknownAliasTarget { alias: String, target: String },
    #[error("alias `{alias}` points at `{target}`, which is itself an alias")]
    ChainedAlias { alias: String, target: String },
    #[error("alias `{0}` shadows a registered icon of the same name")]
    ShadowedName(String),
}

/// Check the alias table for integrity: every target must be a registered
/// canonical icon, no alias may point at another alias, and no alias may
/// reuse a canonical name.
///
/// A broken table is a defect in the icon dataset, not something user code
/// can run into at render time; this check exists so the test suite catches
/// it before a release ships.
pub fn verify() -> Result<(), RegistryError> {
    verify_table(ALIASES)
}

fn verify_table(table: &[(&str, &str)]) -> Result<(), RegistryError> {
    let is_canonical = |name: &str| icons::ALL.iter().any(|(n, _)| *n == name);

    for (alias, target) in table {
        if is_canonical(alias) {
            return Err(RegistryError::ShadowedName((*alias).to_owned()));
        }

        if table.iter().any(|(a, _)| a == target) {
            return Err(RegistryError::ChainedAlias {
                alias: (*alias).to_owned(),
                target: (*target).to_owned(),
            });
        }

        if !is_canonical(target) {
            return Err(RegistryError::UnknownAliasTarget {
                alias: (*alias).to_owned(),
                target: (*target).to_owned(),
            });
        }
    }

    Ok(())
}
