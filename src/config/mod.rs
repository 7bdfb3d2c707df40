pub(crate) mod io;
pub(crate) mod model;
pub(crate) mod schema;
pub(crate) mod store;
pub(crate) mod tokens;
