pub(crate) mod anchor;
pub(crate) mod justify1d;
pub(crate) mod justify2d;
