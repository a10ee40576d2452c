mod backends;

pub use backends::BackendsPage;
