pub mod error;
pub mod consts;
pub mod gray;
pub mod bank;
pub mod multirate;
pub mod transform;
pub mod pyramid;
pub mod denoise;
pub mod viz;
