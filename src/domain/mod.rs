// Domain layer: clock face models, colours and the ports the core talks to.

pub mod model;
pub mod palette;
pub mod ports;
