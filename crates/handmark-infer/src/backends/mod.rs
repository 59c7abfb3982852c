mod replay;

pub use replay::ReplayBackend;
