mod all;
mod footer;
mod log;
mod main;
mod profile;
mod result;
mod screening;

use self::log::log;
use super::*;
use footer::footer;
use main::main;

pub use all::all as render;
