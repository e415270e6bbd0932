mod action;
mod base;

pub use action::{Action, ActionCategory, ActionHeader, CategoryKind};
pub use base::ManagementFrame;
