//! The generated icon set.
//!
//! One file per icon, produced from the shared icon dataset; the tables at
//! the bottom are generated alongside them and are what the registry is
//! built from. Do not edit any of this by hand.

mod arrow_right;
mod check;
mod chevron_down;
mod circle;
mod droplet;
mod grid;
mod heart;
mod house;
mod loader_circle;
mod menu;
mod moon;
mod pen;
mod pen_line;
mod plus;
mod search;
mod smile;
mod sun;
mod x;

pub use arrow_right::ARROW_RIGHT;
pub use check::CHECK;
pub use chevron_down::CHEVRON_DOWN;
pub use circle::CIRCLE;
pub use droplet::DROPLET;
pub use grid::GRID;
pub use heart::HEART;
pub use house::HOUSE;
pub use loader_circle::LOADER_CIRCLE;
pub use menu::MENU;
pub use moon::MOON;
pub use pen::PEN;
pub use pen_line::PEN_LINE;
pub use plus::PLUS;
pub use search::SEARCH;
pub use smile::SMILE;
pub use sun::SUN;
pub use x::X;

use crate::component::IconComponent;
use crate::registry::IconLoader;
use futures::FutureExt;
use futures::future;

/// Every canonical icon, keyed by its kebab-case public name.
pub(crate) static ALL: &[(&str, &IconComponent)] = &[
    ("arrow-right", &ARROW_RIGHT),
    ("check", &CHECK),
    ("chevron-down", &CHEVRON_DOWN),
    ("circle", &CIRCLE),
    ("droplet", &DROPLET),
    ("grid", &GRID),
    ("heart", &HEART),
    ("house", &HOUSE),
    ("loader-circle", &LOADER_CIRCLE),
    ("menu", &MENU),
    ("moon", &MOON),
    ("pen", &PEN),
    ("pen-line", &PEN_LINE),
    ("plus", &PLUS),
    ("search", &SEARCH),
    ("smile", &SMILE),
    ("sun", &SUN),
    ("x", &X),
];

/// One deferred loader per canonical icon.
pub(crate) static DYNAMIC_IMPORTS: &[(&str, IconLoader)] = &[
    ("arrow-right", || future::ready(Ok(&ARROW_RIGHT)).boxed()),
    ("check", || future::ready(Ok(&CHECK)).boxed()),
    ("chevron-down", || future::ready(Ok(&CHEVRON_DOWN)).boxed()),
    ("circle", || future::ready(Ok(&CIRCLE)).boxed()),
    ("droplet", || future::ready(Ok(&DROPLET)).boxed()),
    ("grid", || future::ready(Ok(&GRID)).boxed()),
    ("heart", || future::ready(Ok(&HEART)).boxed()),
    ("house", || future::ready(Ok(&HOUSE)).boxed()),
    ("loader-circle", || future::ready(Ok(&LOADER_CIRCLE)).boxed()),
    ("menu", || future::ready(Ok(&MENU)).boxed()),
    ("moon", || future::ready(Ok(&MOON)).boxed()),
    ("pen", || future::ready(Ok(&PEN)).boxed()),
    ("pen-line", || future::ready(Ok(&PEN_LINE)).boxed()),
    ("plus", || future::ready(Ok(&PLUS)).boxed()),
    ("search", || future::ready(Ok(&SEARCH)).boxed()),
    ("smile", || future::ready(Ok(&SMILE)).boxed()),
    ("sun", || future::ready(Ok(&SUN)).boxed()),
    ("x", || future::ready(Ok(&X)).boxed()),
];
