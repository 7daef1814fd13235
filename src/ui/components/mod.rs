pub mod gauge;
pub mod input;

pub use gauge::{humidity_gauge, moisture_gauge, nutrient_gauge, temperature_gauge, GaugeWidget};
pub use input::{InputWidget, SelectWidget};
