pub mod org;

pub use org::{OrgCommands, OrgSetArgs};
