pub mod config;
pub mod encoder;
pub mod error;
pub mod hal;
pub mod json;
pub mod jsonp;
pub mod logging;
pub mod model;
pub mod prelude;
pub mod response;
pub mod traversable;
pub mod variable;
pub mod variables;

pub use config::ViewConfig;
pub use error::ViewError;
pub use model::JsonModel;
pub use variable::Variable;
pub use variables::{IntoVariables, JsonSerializable, Key, Variables};
