mod split_horizon_module;

pub use split_horizon_module::SplitHorizonModule;
