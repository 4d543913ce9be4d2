//! Parameter management
//!
//! In-memory parameter store and the parameter blocks read by the
//! navigation core. Flash persistence and the MAVLink PARAM protocol
//! live in the firmware layer.

pub mod error;
pub mod navigation;
pub mod storage;

pub use error::ParameterError;
pub use navigation::NavParams;
pub use storage::{ParamFlags, ParamValue, ParameterStore};
pub use storage::{MAX_PARAMS, PARAM_NAME_LEN};
