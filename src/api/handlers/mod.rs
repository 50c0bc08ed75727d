mod calculate;
mod index;
mod status;

pub(super) use calculate::calculate;
pub(super) use index::index;
pub(super) use status::get_status;
