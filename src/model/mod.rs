pub mod description;
pub mod distribution;
pub mod factor;
pub mod network;
pub mod variable;

pub use description::{load_network, NetworkDescription};
pub use distribution::Distribution;
pub use factor::{sum_out, Factor};
pub use network::BayesianNetwork;
pub use variable::{Event, Variable};
