pub mod dns;
pub mod views;

pub use dns::RewriteResponseUseCase;
pub use views::{BuildViewTableUseCase, RenderRedirectsUseCase};
