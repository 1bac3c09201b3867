//! Staff Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;

mod responses;

pub(crate) use responses::StaffResponse;
