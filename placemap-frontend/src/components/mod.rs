mod detail;
mod filters;
mod map;
mod place_list;

pub use self::{detail::*, filters::*, map::*, place_list::*};
