pub mod guard;
mod navigator;
mod route;

pub use guard::{Guarded, Redirect, guard};
pub use navigator::{Navigator, Visit};
pub use route::Route;
