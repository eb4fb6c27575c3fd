mod lecture {
    pub mod api;
    pub mod dtos;
}
mod status {
    pub mod api;
}

pub mod dtos {
    pub use crate::lecture::dtos::*;
}

pub use crate::lecture::api::*;
pub use crate::status::api::*;
