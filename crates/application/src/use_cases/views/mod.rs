pub mod build_view_table;
pub mod render_redirects;

pub use build_view_table::BuildViewTableUseCase;
pub use render_redirects::RenderRedirectsUseCase;
