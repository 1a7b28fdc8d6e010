// Domain layer: lookup models, the remote port, and the name resolver.

pub mod model;
pub mod ports;
pub mod resolver;
