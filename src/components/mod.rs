pub mod charts;
pub mod hierarchy;
mod nav;

pub use nav::SiteNav;
