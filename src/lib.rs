pub mod cli;
pub mod domain;
pub mod menu;
pub mod pager;
pub mod screen;
