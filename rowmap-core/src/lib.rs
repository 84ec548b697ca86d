mod as_value;
mod condition;
mod data_type;
mod decode_type;
mod error;
mod handler;
mod iterator;
mod mapper;
mod metadata;
mod page;
mod property;
mod row;
mod schema;
mod util;
mod value;

pub use ::anyhow::Context;
pub use as_value::*;
pub use condition::*;
pub use data_type::*;
pub use decode_type::*;
pub use error::*;
pub use handler::*;
pub use iterator::*;
pub use mapper::*;
pub use metadata::*;
pub use page::*;
pub use property::*;
pub use row::*;
pub use schema::*;
pub use util::*;
pub use value::*;
pub mod stream {
    pub use ::futures::stream::*;
}

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
