// Domain layer: holiday data model and the calendar seams (ports).

pub mod model;
pub mod ports;
