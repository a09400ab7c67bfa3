pub mod subtext;
pub mod title;
