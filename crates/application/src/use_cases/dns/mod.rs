pub mod rewrite_response;

pub use rewrite_response::RewriteResponseUseCase;
